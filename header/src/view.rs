//! Render model for the header.
//!
//! [`render`] is a pure function of the state, the caller's [`HeaderMode`]
//! and the config. The host UI draws the returned [`HeaderView`]; it never
//! reads [`HeaderState`] directly.

use crate::actions::HeaderAction;
use crate::badge::CartBadge;
use crate::config::HeaderConfig;
use crate::state::HeaderState;
use crate::types::{HeaderMode, Route};
use serde::Serialize;

/// Sidebar toggle and logo link
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Branding {
    /// Hamburger button opening the layout sidebar
    pub menu_toggle: MenuCommand,
    /// Order list when logged in, landing page otherwise
    ///
    /// Follows the session flag recorded at the last mount, refresh or
    /// sign-out. A click on the logo checks the live session instead.
    pub logo_href: Route,
}

/// Entry in the account dropdown
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    /// Visible label
    pub label: &'static str,
    /// What selecting the entry does
    pub command: MenuCommand,
}

/// Commands bound to header controls
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuCommand {
    /// Open or close the layout sidebar
    ToggleSidebar,
    /// Navigate to the profile page
    OpenProfile,
    /// Log out and evict the cached cart
    SignOut,
}

impl MenuCommand {
    /// Action to send when the entry is selected
    #[must_use]
    pub const fn action(self) -> HeaderAction {
        match self {
            Self::ToggleSidebar => HeaderAction::SidebarToggled,
            Self::OpenProfile => HeaderAction::ProfileClicked,
            Self::SignOut => HeaderAction::SignOutClicked,
        }
    }
}

/// Avatar, name and role with the dropdown entries
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AccountMenu {
    /// Avatar URL or local default; never empty
    pub avatar: String,
    /// Display name
    pub name: String,
    /// Account role
    pub role: String,
    /// Dropdown entries, in display order
    pub items: Vec<MenuItem>,
}

/// Login call to action shown to guests
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginButton {
    /// Button text
    pub label: &'static str,
    /// Login page
    pub href: Route,
}

/// The header, ready to draw
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum HeaderView {
    /// Private layout
    Authenticated {
        /// Logo link
        branding: Branding,
        /// Cart icon
        cart: CartBadge,
        /// Account dropdown
        account: AccountMenu,
    },
    /// Public layout
    Guest {
        /// Logo link
        branding: Branding,
        /// Cart icon
        cart: CartBadge,
        /// Login button
        login: LoginButton,
    },
}

impl HeaderView {
    /// The cart badge; present in both modes
    #[must_use]
    pub const fn cart_badge(&self) -> &CartBadge {
        match self {
            Self::Authenticated { cart, .. } | Self::Guest { cart, .. } => cart,
        }
    }

    /// The logo link
    #[must_use]
    pub const fn branding(&self) -> &Branding {
        match self {
            Self::Authenticated { branding, .. } | Self::Guest { branding, .. } => branding,
        }
    }

    /// The account dropdown, authenticated mode only
    #[must_use]
    pub const fn account_menu(&self) -> Option<&AccountMenu> {
        match self {
            Self::Authenticated { account, .. } => Some(account),
            Self::Guest { .. } => None,
        }
    }

    /// The login button, guest mode only
    #[must_use]
    pub const fn login_button(&self) -> Option<&LoginButton> {
        match self {
            Self::Authenticated { .. } => None,
            Self::Guest { login, .. } => Some(login),
        }
    }
}

/// Render the header for `mode`
#[must_use]
pub fn render(state: &HeaderState, mode: HeaderMode, config: &HeaderConfig) -> HeaderView {
    let branding = Branding {
        menu_toggle: MenuCommand::ToggleSidebar,
        logo_href: if state.logged_in {
            Route::OrderList
        } else {
            Route::Home
        },
    };
    let cart = CartBadge::new(state.cart_total(), config.badge_overflow);

    match mode {
        HeaderMode::Authenticated => HeaderView::Authenticated {
            branding,
            cart,
            account: AccountMenu {
                avatar: state.session.display_avatar(config).to_string(),
                name: state.session.name.clone(),
                role: state.session.display_role(config).to_string(),
                items: vec![
                    MenuItem {
                        label: "Profile",
                        command: MenuCommand::OpenProfile,
                    },
                    MenuItem {
                        label: "Sign out",
                        command: MenuCommand::SignOut,
                    },
                ],
            },
        },
        HeaderMode::Guest => HeaderView::Guest {
            branding,
            cart,
            login: LoginButton {
                label: "LOG IN",
                href: Route::Login,
            },
        },
    }
}
