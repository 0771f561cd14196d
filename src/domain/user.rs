use serde::{Deserialize, Serialize};

/// A registered customer account as returned by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend row id.
    #[serde(default)]
    pub id: Option<i64>,
    /// Unique account key, immutable once created.
    pub user_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub pincode: String,
    #[serde(default)]
    pub account_creation_date: String,
    #[serde(default)]
    pub password: Option<String>,
    /// 0 = awaiting approval, 1 = approved.
    #[serde(default)]
    pub is_approved: u8,
    /// 0 = active, 1 = blocked.
    #[serde(default)]
    pub is_blocked: u8,
}

impl User {
    pub fn approved(&self) -> bool {
        self.is_approved == 1
    }

    pub fn blocked(&self) -> bool {
        self.is_blocked == 1
    }
}

/// Partial update for a user's account details.
///
/// `None` means the field is omitted from the request entirely, which is not
/// the same as sending an empty string. Form serialization skips absent
/// fields so the backend only touches what is present.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetailsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_decodes_from_backend_json() {
        let json = r#"{
            "id": 7,
            "userId": "u1",
            "name": "Alice",
            "email": "alice@example.com",
            "address": "12 Main St",
            "phoneNumber": "5550001111",
            "pincode": "110001",
            "accountCreationDate": "2024-01-15",
            "isApproved": 1,
            "isBlocked": 0
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.user_id, "u1");
        assert!(user.approved());
        assert!(!user.blocked());
        assert_eq!(user.password, None);
    }

    #[test]
    fn patch_serializes_only_present_fields() {
        let patch = UserDetailsPatch {
            email: Some("new@example.com".to_string()),
            pincode: Some(String::new()),
            ..Default::default()
        };
        let encoded = serde_json::to_value(&patch).unwrap();
        let fields: Vec<&str> = encoded.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(fields, vec!["email", "pincode"]);
        // An explicitly empty value still goes on the wire.
        assert_eq!(encoded["pincode"], "");
    }
}
