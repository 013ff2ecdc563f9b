//! The four-screen state machine driving the application.

use api::UserInfo;
use store::{Area, Profile, ValidationError};

/// The active screen and its payload.
///
/// `Admin` is terminal for the session; `Form` loops to itself on
/// resubmission.
#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    Login,
    AreaSelect,
    Form { area: Area },
    Admin,
}

impl Screen {
    /// Where a freshly signed-in identity lands.
    ///
    /// The privileged identity always goes to the dashboard, even when a
    /// profile document exists for it. Everyone else goes straight to
    /// their form if an area is on record, otherwise to area selection.
    pub fn after_sign_in(user: &UserInfo, profile: Option<&Profile>) -> Screen {
        if user.is_admin {
            return Screen::Admin;
        }
        match profile.and_then(|p| p.area) {
            Some(area) => Screen::Form { area },
            None => Screen::AreaSelect,
        }
    }
}

/// Validate the area-selection confirm. An empty selection is rejected
/// before any profile write happens.
pub fn confirm_area(selection: Option<Area>) -> Result<Area, ValidationError> {
    selection.ok_or(ValidationError::EmptyArea)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(is_admin: bool) -> UserInfo {
        UserInfo {
            id: "5f6d1a9e-0000-0000-0000-000000000000".to_string(),
            email: "pessoa@example.com".to_string(),
            name: Some("Pessoa".to_string()),
            is_admin,
        }
    }

    fn profile(area: Option<Area>) -> Profile {
        Profile {
            user_id: "5f6d1a9e-0000-0000-0000-000000000000".to_string(),
            email: "pessoa@example.com".to_string(),
            area,
        }
    }

    #[test]
    fn test_admin_identity_always_lands_on_the_dashboard() {
        let admin = user(true);
        assert_eq!(Screen::after_sign_in(&admin, None), Screen::Admin);
        // A stored profile does not demote the admin to the form.
        assert_eq!(
            Screen::after_sign_in(&admin, Some(&profile(Some(Area::Creator)))),
            Screen::Admin
        );
    }

    #[test]
    fn test_stored_area_skips_area_selection() {
        assert_eq!(
            Screen::after_sign_in(&user(false), Some(&profile(Some(Area::Creator)))),
            Screen::Form { area: Area::Creator }
        );
    }

    #[test]
    fn test_missing_profile_or_missing_area_goes_to_selection() {
        assert_eq!(Screen::after_sign_in(&user(false), None), Screen::AreaSelect);
        assert_eq!(
            Screen::after_sign_in(&user(false), Some(&profile(None))),
            Screen::AreaSelect
        );
    }

    #[test]
    fn test_empty_confirm_is_rejected_before_any_write() {
        assert_eq!(confirm_area(None), Err(ValidationError::EmptyArea));
        assert_eq!(confirm_area(Some(Area::Student)), Ok(Area::Student));
    }
}
