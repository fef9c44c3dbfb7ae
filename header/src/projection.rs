//! Profile payload → display fields.
//!
//! Empty strings count as missing, so a payload with `"role": ""` displays
//! the default role just like one without a role.

use crate::config::HeaderConfig;
use crate::state::SessionState;
use crate::types::ProfilePayload;

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Project a profile payload into a complete [`SessionState`]
#[must_use]
pub fn project(payload: &ProfilePayload, config: &HeaderConfig) -> SessionState {
    let id = present(payload.id.as_deref()).unwrap_or_default().to_string();

    SessionState {
        name: display_name(
            payload.first_name.as_deref(),
            payload.last_name.as_deref(),
            &config.fallback_greeting,
        ),
        avatar: avatar_url(&id, payload.avatar.as_deref(), config),
        role: present(payload.role.as_deref())
            .unwrap_or(config.default_role.as_str())
            .to_string(),
        id,
    }
}

/// `"{first} {last}"`, skipping blank parts, or `fallback` when both are blank
#[must_use]
pub fn display_name(first: Option<&str>, last: Option<&str>, fallback: &str) -> String {
    match (present(first), present(last)) {
        (Some(first), Some(last)) => format!("{first} {last}"),
        (Some(only), None) | (None, Some(only)) => only.to_string(),
        (None, None) => fallback.to_string(),
    }
}

/// Remote avatar URL, or the local default when no avatar file is set
#[must_use]
pub fn avatar_url(id: &str, avatar: Option<&str>, config: &HeaderConfig) -> String {
    match present(avatar) {
        Some(file) => format!(
            "{}/users/image/{id}/{file}",
            config.asset_base_url.trim_end_matches('/')
        ),
        None => config.default_avatar.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn config() -> HeaderConfig {
        HeaderConfig::default().with_asset_base_url("https://cdn.example.com/")
    }

    #[test]
    fn full_name_is_joined_with_a_space() {
        let session = project(&ProfilePayload::named("A", "B"), &config());
        assert_eq!(session.name, "A B");
    }

    #[test]
    fn empty_names_fall_back_to_greeting() {
        let session = project(&ProfilePayload::named("", ""), &config());
        assert_eq!(session.name, "Hello");

        let session = project(&ProfilePayload::default(), &config());
        assert_eq!(session.name, "Hello");
    }

    #[test]
    fn single_name_has_no_trailing_space() {
        assert_eq!(display_name(Some("Ada"), None, "Hello"), "Ada");
        assert_eq!(display_name(Some("Ada"), Some(""), "Hello"), "Ada");
        assert_eq!(display_name(None, Some("Lovelace"), "Hello"), "Lovelace");
    }

    #[test]
    fn avatar_links_to_user_folder() {
        let payload = ProfilePayload::named("A", "B").with_id("42").with_avatar("pic.png");
        let session = project(&payload, &config());

        assert_eq!(session.avatar, "https://cdn.example.com/users/image/42/pic.png");
        assert!(session.avatar.contains("42"));
        assert!(session.avatar.contains("pic.png"));
    }

    #[test]
    fn missing_avatar_uses_local_default() {
        let session = project(&ProfilePayload::named("A", "B").with_id("42"), &config());
        assert_eq!(session.avatar, "/images/profile_image.jpg");

        let session = project(&ProfilePayload::named("A", "B").with_avatar(""), &config());
        assert_eq!(session.avatar, "/images/profile_image.jpg");
    }

    #[test]
    fn id_and_role_defaults() {
        let session = project(&ProfilePayload::named("A", "B"), &config());
        assert_eq!(session.id, "");
        assert_eq!(session.role, "Customer");

        let session = project(&ProfilePayload::named("A", "B").with_role("Admin"), &config());
        assert_eq!(session.role, "Admin");
    }

    proptest! {
        #[test]
        fn avatar_is_never_empty(
            id in "[a-z0-9]{0,8}",
            avatar in proptest::option::of("[a-z.]{0,12}"),
        ) {
            let mut payload = ProfilePayload::named("A", "B").with_id(id);
            payload.avatar = avatar;
            let session = project(&payload, &config());
            prop_assert!(!session.avatar.is_empty());
        }

        #[test]
        fn two_non_blank_names_always_join(first in "[A-Za-z]{1,10}", last in "[A-Za-z]{1,10}") {
            let name = display_name(Some(first.as_str()), Some(last.as_str()), "Hello");
            prop_assert_eq!(name, format!("{first} {last}"));
        }
    }
}
