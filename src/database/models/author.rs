use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Stored author row. `created_at` is internal and never leaves the API layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Author {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub created_at: DateTime<Utc>,
}

impl Author {
    /// Display name: first and last name joined by a space, trimmed.
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

/// Fields required to insert a new author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
}

/// Whitelisted partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub user_name: Option<String>,
}

impl AuthorChanges {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.user_name.is_none()
    }

    /// Merge the present fields into `author`.
    pub fn apply_to(&self, author: &mut Author) {
        if let Some(first_name) = &self.first_name {
            author.first_name = first_name.clone();
        }
        if let Some(last_name) = &self.last_name {
            author.last_name = last_name.clone();
        }
        if let Some(user_name) = &self.user_name {
            author.user_name = user_name.clone();
        }
    }
}
