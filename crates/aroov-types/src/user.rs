use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::util::{lenient_i64, non_empty_string, string_or_list};

pub type UniversityId = i64;

/// Profile of the signed-in user (`GET /api/user/me`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, deserialize_with = "non_empty_string")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "non_empty_string")]
    pub picture: Option<String>,

    #[serde(default, deserialize_with = "lenient_i64")]
    pub university_id: Option<UniversityId>,

    #[serde(default, deserialize_with = "string_or_list")]
    pub preferred_types: Vec<String>,

    #[serde(default, deserialize_with = "string_or_list")]
    pub preferred_activities: Vec<String>,

    /// Older accounts store their tags here instead of `preferred_activities`.
    #[serde(default, deserialize_with = "string_or_list", skip_serializing)]
    pub activities: Vec<String>,
}

impl UserProfile {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Traveler")
    }

    pub fn activity_tags(&self) -> &[String] {
        if self.activities.is_empty() {
            &self.preferred_activities
        } else {
            &self.activities
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct University {
    pub id: UniversityId,
    pub name: String,
}

/// Body of `POST /api/user/profile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub university_id: Option<UniversityId>,
    /// Selected activity tags joined with commas.
    pub activities: String,
}

/// Body of `POST /api/user/password`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

impl PasswordChange {
    /// Build a change request, checking the form locally first.
    pub fn new(current: &str, new: &str, confirm: &str) -> Result<Self> {
        if current.is_empty() {
            return Err(Error::InvalidInput(
                "Current password is required".to_string(),
            ));
        }
        if new.is_empty() {
            return Err(Error::InvalidInput("New password is required".to_string()));
        }
        if new != confirm {
            return Err(Error::InvalidInput("Passwords do not match".to_string()));
        }
        if new == current {
            return Err(Error::InvalidInput(
                "New password must differ from the current one".to_string(),
            ));
        }
        Ok(Self {
            current_password: current.to_string(),
            new_password: new.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_reads_legacy_activities() {
        let profile: UserProfile = serde_json::from_value(json!({
            "name": "Aina",
            "university_id": "3",
            "activities": "hiking,food"
        }))
        .unwrap();

        assert_eq!(profile.university_id, Some(3));
        assert_eq!(profile.activity_tags(), ["hiking", "food"]);
    }

    #[test]
    fn test_profile_prefers_legacy_field_when_both_present() {
        let profile: UserProfile = serde_json::from_value(json!({
            "preferred_activities": ["beach"],
            "activities": "hiking"
        }))
        .unwrap();
        assert_eq!(profile.activity_tags(), ["hiking"]);
    }

    #[test]
    fn test_display_name_defaults() {
        let profile: UserProfile = serde_json::from_value(json!({"name": ""})).unwrap();
        assert_eq!(profile.display_name(), "Traveler");
    }

    #[test]
    fn test_password_change_validation() {
        assert!(PasswordChange::new("old", "new", "new").is_ok());
        assert_eq!(
            PasswordChange::new("old", "new", "nwe"),
            Err(Error::InvalidInput("Passwords do not match".to_string()))
        );
        assert!(PasswordChange::new("", "new", "new").is_err());
        assert!(PasswordChange::new("same", "same", "same").is_err());
    }
}
