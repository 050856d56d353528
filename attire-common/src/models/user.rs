// File: attire-common/src/models/user.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A signed-in visitor. Created on login; nothing about a user survives the
/// process.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    pub user_id: Uuid,
    pub name: String,
    pub avatar: Option<String>,
    pub location: String,
    pub bio: Option<String>,
}

impl User {
    pub fn new(name: &str, location: &str) -> Self {
        Self {
            user_id: Uuid::new_v4(),
            name: name.to_string(),
            avatar: None,
            location: location.to_string(),
            bio: None,
        }
    }
}
