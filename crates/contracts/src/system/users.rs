use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access level inside the CRM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Manager,
    #[default]
    Employee,
}

/// CRM user (employee). Leads reference users by `full_name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub role: UserRole,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    pub id: String,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
}

impl User {
    /// New active user with a fresh id
    pub fn create(dto: CreateUserDto) -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            full_name: dto.full_name,
            email: dto.email,
            phone: dto.phone,
            role: dto.role,
            is_active: true,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    pub fn apply(&mut self, dto: &UpdateUserDto) {
        self.full_name = dto.full_name.clone();
        self.email = dto.email.clone();
        self.phone = dto.phone.clone();
        self.role = dto.role;
        self.is_active = dto.is_active;
        self.updated_at = Utc::now().to_rfc3339();
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_apply() {
        let mut user = User::create(CreateUserDto {
            full_name: "Priya Singh".into(),
            email: None,
            phone: Some("9000000001".into()),
            role: UserRole::Manager,
        });
        assert!(user.is_active);
        assert!(!user.is_admin());
        assert!(Uuid::parse_str(&user.id).is_ok());

        user.apply(&UpdateUserDto {
            id: user.id.clone(),
            full_name: "Priya S. Singh".into(),
            email: Some("priya@example.com".into()),
            phone: None,
            role: UserRole::Admin,
            is_active: false,
        });
        assert_eq!(user.full_name, "Priya S. Singh");
        assert!(user.is_admin());
        assert!(!user.is_active);
        assert_eq!(user.phone, None);
    }

    #[test]
    fn test_role_defaults_to_employee() {
        let user: User = serde_json::from_str(
            r#"{"id":"u1","fullName":"A","email":null,"phone":null,"isActive":true,
                "createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(user.role, UserRole::Employee);
    }
}
