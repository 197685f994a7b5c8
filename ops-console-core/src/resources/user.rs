//! Admin user resource

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::resource::{Draft, Resource};

/// A console user account. Passwords never come back from the backend;
/// they only travel on the form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub role_id: Option<u64>,
    /// 1 = enabled, 0 = disabled.
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Form buffer for a user. `password` is only honored on create; the
/// backend ignores an empty one on update.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub username: String,
    pub password: String,
    pub nickname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<u64>,
    pub status: i32,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            id: None,
            username: String::new(),
            password: String::new(),
            nickname: String::new(),
            role_id: None,
            status: 1,
        }
    }
}

impl Draft for UserForm {
    fn id(&self) -> Option<u64> {
        self.id
    }

    fn missing_required(&self) -> Option<&'static str> {
        if self.username.trim().is_empty() {
            return Some("username");
        }
        None
    }
}

impl Resource for User {
    type Form = UserForm;

    const PREFIX: &'static str = "/api/admin/users";
    const LIST_KEY: &'static str = "users";
    const LABEL: &'static str = "user";

    fn id(&self) -> u64 {
        self.id
    }

    fn to_form(&self) -> UserForm {
        UserForm {
            id: Some(self.id),
            username: self.username.clone(),
            password: String::new(),
            nickname: self.nickname.clone(),
            role_id: self.role_id,
            status: self.status,
        }
    }
}
