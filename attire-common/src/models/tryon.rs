// File: attire-common/src/models/tryon.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One attempt at the simulated try-on flow: a user, the garment they tried,
/// and (once rendering finished) the result image.
///
/// `session_id` is the stable key used to attach results to history entries.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TryOnSession {
    pub session_id: Uuid,
    pub user_id: Uuid,
    pub item_id: String,
    pub user_photo_url: Option<String>,
    pub result_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TryOnSession {
    pub fn new(user_id: Uuid, item_id: &str) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            user_id,
            item_id: item_id.to_string(),
            user_photo_url: None,
            result_image_url: None,
            created_at: Utc::now(),
        }
    }
}
