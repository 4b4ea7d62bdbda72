use crate::id::UserId;

use serde::{Deserialize, Serialize};

/// The identity handed to the app by the embedding platform.
///
/// A `User` is read-only input. Only `id` and `first_name` are guaranteed to
/// be present.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl User {
    /// Returns the full name of the user as it should be displayed.
    pub fn display_name(&self) -> String {
        match &self.last_name {
            Some(last_name) => format!("{} {}", self.first_name, last_name),
            None => self.first_name.clone(),
        }
    }

    /// Returns the uppercased first letter of the first name, used for the
    /// avatar badge.
    pub fn initial(&self) -> char {
        self.first_name
            .chars()
            .flat_map(char::to_uppercase)
            .next()
            .unwrap_or('U')
    }
}

#[cfg(test)]
mod tests {
    use super::User;
    use crate::id::UserId;

    #[test]
    fn test_user_from_host_platform() {
        let body = r#"{"id": 441537, "first_name": "Ivan", "username": "ivanp"}"#;

        let user: User = serde_json::from_str(body).unwrap();
        assert_eq!(user.id, UserId(441537));
        assert_eq!(user.first_name, "Ivan");
        assert_eq!(user.last_name, None);
        assert_eq!(user.username.as_deref(), Some("ivanp"));
    }

    #[test]
    fn test_display_name() {
        let mut user = User {
            id: UserId(1),
            first_name: String::from("Demo"),
            last_name: Some(String::from("User")),
            username: None,
        };

        assert_eq!(user.display_name(), "Demo User");
        assert_eq!(user.initial(), 'D');

        user.last_name = None;
        assert_eq!(user.display_name(), "Demo");
    }
}
