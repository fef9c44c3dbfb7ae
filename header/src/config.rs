//! Header configuration.
//!
//! Loads configuration from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};
use std::env;

/// Display configuration for the header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderConfig {
    /// Base URL of the asset bucket holding user images
    ///
    /// Avatars are linked as `{asset_base_url}/users/image/{id}/{avatar}`.
    pub asset_base_url: String,
    /// Local avatar shown when the profile has no avatar
    pub default_avatar: String,
    /// Name shown when the profile carries no name at all
    pub fallback_greeting: String,
    /// Role shown when the profile carries no role
    pub default_role: String,
    /// Largest cart count shown literally; larger counts show as `{n}+`
    pub badge_overflow: u32,
}

impl HeaderConfig {
    /// Load configuration from environment variables.
    ///
    /// | variable | default |
    /// |---|---|
    /// | `STOREFRONT_ASSET_BASE_URL` | empty |
    /// | `STOREFRONT_DEFAULT_AVATAR` | `/images/profile_image.jpg` |
    /// | `STOREFRONT_FALLBACK_GREETING` | `Hello` |
    /// | `STOREFRONT_DEFAULT_ROLE` | `Customer` |
    /// | `STOREFRONT_BADGE_OVERFLOW` | `9` |
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Unset or unparsable values keep their defaults.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            asset_base_url: lookup("STOREFRONT_ASSET_BASE_URL").unwrap_or(defaults.asset_base_url),
            default_avatar: lookup("STOREFRONT_DEFAULT_AVATAR").unwrap_or(defaults.default_avatar),
            fallback_greeting: lookup("STOREFRONT_FALLBACK_GREETING")
                .unwrap_or(defaults.fallback_greeting),
            default_role: lookup("STOREFRONT_DEFAULT_ROLE").unwrap_or(defaults.default_role),
            badge_overflow: lookup("STOREFRONT_BADGE_OVERFLOW")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.badge_overflow),
        }
    }

    /// Set the asset base URL
    #[must_use]
    pub fn with_asset_base_url(mut self, url: impl Into<String>) -> Self {
        self.asset_base_url = url.into();
        self
    }

    /// Set the default avatar path
    #[must_use]
    pub fn with_default_avatar(mut self, path: impl Into<String>) -> Self {
        self.default_avatar = path.into();
        self
    }

    /// Set the badge overflow threshold
    #[must_use]
    pub const fn with_badge_overflow(mut self, overflow: u32) -> Self {
        self.badge_overflow = overflow;
        self
    }
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            asset_base_url: String::new(),
            default_avatar: "/images/profile_image.jpg".to_string(),
            fallback_greeting: "Hello".to_string(),
            default_role: "Customer".to_string(),
            badge_overflow: 9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn lookup_overrides_defaults() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("STOREFRONT_ASSET_BASE_URL", "https://assets.example.com"),
            ("STOREFRONT_BADGE_OVERFLOW", "99"),
        ]);

        let config = HeaderConfig::from_lookup(|name| vars.get(name).map(ToString::to_string));

        assert_eq!(config.asset_base_url, "https://assets.example.com");
        assert_eq!(config.badge_overflow, 99);
        assert_eq!(config.default_role, "Customer");
    }

    #[test]
    fn unparsable_overflow_keeps_default() {
        let config = HeaderConfig::from_lookup(|name| {
            (name == "STOREFRONT_BADGE_OVERFLOW").then(|| "many".to_string())
        });
        assert_eq!(config.badge_overflow, 9);
    }
}
