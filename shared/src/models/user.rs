//! User Model

use serde::{Deserialize, Serialize};

/// User roles, stored as integers in the `users` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i64)]
pub enum UserRole {
    Seller = 1,
    Admin = 2,
}

impl UserRole {
    pub fn from_value(value: i64) -> Option<Self> {
        match value {
            1 => Some(Self::Seller),
            2 => Some(Self::Admin),
            _ => None,
        }
    }

    pub fn value(self) -> i64 {
        self as i64
    }
}

/// User entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: i64,
    pub is_active: bool,
    pub last_login: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin.value()
    }
}

/// Registration payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Public user info (login response, /auth/me)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: i64,
    pub is_active: bool,
    pub last_login: Option<i64>,
    pub created_at: i64,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
            is_active: user.is_active,
            last_login: user.last_login,
            created_at: user.created_at,
        }
    }
}
