//! User Entity

use serde::{Deserialize, Serialize};

/// The signed-in customer, as returned by the auth service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub email: String,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_response_user_without_phone() {
        let json = r#"{"id": 5, "email": "anna@example.com", "full_name": "Anna", "is_admin": false}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 5);
        assert_eq!(user.phone, None);
        assert!(!user.is_admin);
    }

    #[test]
    fn test_missing_admin_flag_means_customer() {
        let json = r#"{"id": 1, "full_name": "Ivan"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(!user.is_admin);
    }
}
