//! Domain types for the header: remote payloads, routes and the render mode.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use storefront_core::query::QueryKey;

/// Cache key of the profile query
pub const PROFILE_QUERY: &str = "getUserDetail";

/// Cache key of the cart query
pub const CART_QUERY: &str = "listCartItem";

/// Key of the profile query
#[must_use]
pub fn profile_query_key() -> QueryKey {
    QueryKey::new(PROFILE_QUERY)
}

/// Key of the cart query
#[must_use]
pub fn cart_query_key() -> QueryKey {
    QueryKey::new(CART_QUERY)
}

/// Profile payload returned by the profile endpoint
///
/// Every field is optional: the endpoint is not owned by the header and
/// missing fields fall back to display defaults during projection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfilePayload {
    /// Given name
    pub first_name: Option<String>,
    /// Family name
    pub last_name: Option<String>,
    /// User identifier; numeric ids are accepted and kept as text
    #[serde(deserialize_with = "string_or_number")]
    pub id: Option<String>,
    /// Avatar file name, relative to the user's image folder
    pub avatar: Option<String>,
    /// Account role
    pub role: Option<String>,
}

impl ProfilePayload {
    /// Payload with only the name fields set
    #[must_use]
    pub fn named(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            ..Self::default()
        }
    }

    /// Set the id
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the avatar file name
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Set the role
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Id>::deserialize(deserializer)?.map(|id| match id {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    }))
}

/// Cart summary returned by the cart endpoint
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CartSummary {
    /// Number of items in the cart
    pub total_items: u32,
}

impl CartSummary {
    /// Summary with `total_items` items
    #[must_use]
    pub const fn new(total_items: u32) -> Self {
        Self { total_items }
    }
}

/// Locally stored guest identity used to associate an anonymous cart
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestUser {
    /// Guest identifier, if one was issued
    pub id: Option<String>,
}

impl GuestUser {
    /// Guest with an identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: Some(id.into()) }
    }

    /// Whether an identifier is present
    #[must_use]
    pub const fn has_id(&self) -> bool {
        self.id.is_some()
    }
}

/// Navigation targets the header links to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    /// Storefront landing page
    Home,
    /// Order history
    OrderList,
    /// Cart page
    Cart,
    /// Login page
    Login,
    /// Profile page
    Profile,
}

impl Route {
    /// Path of the route
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::OrderList => "/orders",
            Self::Cart => "/cart",
            Self::Login => "/login",
            Self::Profile => "/profile",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.path())
    }
}

/// Which branch of the header to render; supplied by the caller
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderMode {
    /// Private layout: account menu
    Authenticated,
    /// Public layout: login button
    Guest,
}

impl HeaderMode {
    /// Mode for the `is_private` layout flag
    #[must_use]
    pub const fn from_private(is_private: bool) -> Self {
        if is_private { Self::Authenticated } else { Self::Guest }
    }
}

impl From<bool> for HeaderMode {
    fn from(is_private: bool) -> Self {
        Self::from_private(is_private)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_accepts_numeric_ids_and_missing_fields() -> Result<(), serde_json::Error> {
        let payload: ProfilePayload =
            serde_json::from_str(r#"{"firstName": "Ada", "id": 42, "avatar": null}"#)?;

        assert_eq!(payload.first_name.as_deref(), Some("Ada"));
        assert_eq!(payload.last_name, None);
        assert_eq!(payload.id.as_deref(), Some("42"));
        assert_eq!(payload.avatar, None);

        let payload: ProfilePayload = serde_json::from_str(r#"{"id": "u-7"}"#)?;
        assert_eq!(payload.id.as_deref(), Some("u-7"));
        Ok(())
    }

    #[test]
    fn cart_summary_uses_camel_case() -> Result<(), serde_json::Error> {
        let cart: CartSummary = serde_json::from_str(r#"{"totalItems": 12}"#)?;
        assert_eq!(cart, CartSummary::new(12));
        Ok(())
    }

    #[test]
    fn routes_serialize_as_paths() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&Route::OrderList)?, r#""/orders""#);
        assert_eq!(Route::Login.to_string(), "/login");
        Ok(())
    }

    #[test]
    fn private_flag_selects_mode() {
        assert_eq!(HeaderMode::from(true), HeaderMode::Authenticated);
        assert_eq!(HeaderMode::from_private(false), HeaderMode::Guest);
    }

    #[test]
    fn query_keys_match_cache_names() {
        assert_eq!(profile_query_key().as_str(), "getUserDetail");
        assert_eq!(cart_query_key().as_str(), "listCartItem");
    }
}
