//! Session-related types for shell authentication.
//!
//! Types stored in the session for authentication state.

use serde::{Deserialize, Serialize};

use meridian_core::UserProfile;

/// Session-stored user identity.
///
/// Holds the profile the access resolver needs plus the upstream bearer
/// token the shell uses to call the ERP API on the user's behalf. The token
/// is opaque to the shell and never logged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// The user's profile as fetched at login.
    pub profile: UserProfile,
    /// Opaque upstream bearer token.
    pub token: String,
}

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";
}

#[cfg(test)]
mod tests {
    use super::*;
    use meridian_core::{Role, UserId};
    use std::collections::HashSet;

    #[test]
    fn test_round_trips_through_session_json() {
        let user = CurrentUser {
            profile: UserProfile {
                id: UserId::new(5),
                username: "jdoe".to_owned(),
                role: Some(Role::SalesRep),
                department: Some("Sales".to_owned()),
                is_superuser: false,
                is_module_restricted: None,
                accessible_modules: HashSet::new(),
            },
            token: "opaque".to_owned(),
        };

        let json = serde_json::to_string(&user).expect("serialize");
        let back: CurrentUser = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.profile.id, user.profile.id);
        assert_eq!(back.profile.role, Some(Role::SalesRep));
        assert_eq!(back.token, "opaque");
    }
}
