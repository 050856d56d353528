// File: attire-common/src/models/community.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::catalog::ClothingItem;
use crate::models::user::User;

/// A community feed entry. Posts are client-local: prepended on creation,
/// never deleted, likes only go up.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FashionPost {
    pub post_id: Uuid,
    pub user_id: Uuid,
    /// Snapshot of the author at posting time, so the feed renders without a
    /// user lookup.
    pub user: Option<User>,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub likes: u32,
    pub created_at: DateTime<Utc>,
    pub items: Vec<ClothingItem>,
}

/// Fields the author supplies; id, timestamp and like count are assigned by
/// the store.
#[derive(Debug, Clone)]
pub struct NewFashionPost {
    pub user_id: Uuid,
    pub user: Option<User>,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub items: Vec<ClothingItem>,
}
