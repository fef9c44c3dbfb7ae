//! Cart badge.

use crate::types::Route;
use serde::Serialize;

/// Item count bubble over the cart icon
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CartBadge {
    /// Items in the cart
    pub count: u32,
    /// Text shown in the bubble
    pub text: String,
    /// Where the cart icon links to
    pub href: Route,
}

impl CartBadge {
    /// Badge for `count` items, capped at `overflow`
    #[must_use]
    pub fn new(count: u32, overflow: u32) -> Self {
        Self {
            count,
            text: badge_text(count, overflow),
            href: Route::Cart,
        }
    }
}

/// The literal count up to `overflow`, `"{overflow}+"` above it
#[must_use]
pub fn badge_text(count: u32, overflow: u32) -> String {
    if count > overflow {
        format!("{overflow}+")
    } else {
        count.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn counts_up_to_nine_are_literal() {
        assert_eq!(badge_text(0, 9), "0");
        assert_eq!(badge_text(9, 9), "9");
    }

    #[test]
    fn counts_above_nine_overflow() {
        assert_eq!(badge_text(10, 9), "9+");
        assert_eq!(badge_text(250, 9), "9+");
    }

    #[test]
    fn badge_links_to_cart() {
        let badge = CartBadge::new(3, 9);
        assert_eq!(badge.href, Route::Cart);
        assert_eq!(badge.text, "3");
    }

    proptest! {
        #[test]
        fn overflow_text_never_exceeds_two_chars(count in any::<u32>()) {
            prop_assert!(badge_text(count, 9).len() <= 2);
        }
    }
}
