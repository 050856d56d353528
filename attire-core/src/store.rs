// File: attire-core/src/store.rs
//
// The single in-memory state container for an application session. Built at
// startup from the seed catalog, dropped on exit; nothing persists. Pages
// hold only transient view state and route every durable mutation through
// the methods here.

use std::collections::HashSet;
use tracing::debug;
use uuid::Uuid;

use attire_common::models::{
    ClothingCategory, ClothingItem, FashionPost, NewFashionPost, Region, TryOnSession, User,
};
use crate::catalog::seed_catalog;

pub struct ClientStore {
    catalog: Vec<ClothingItem>,

    current_user: Option<User>,

    /// Working list the shop and try-on pages read; starts as the full
    /// catalog and is replaced by `filter_items`.
    items: Vec<ClothingItem>,
    selected_item: Option<ClothingItem>,

    /// Newest-first try-on history.
    sessions: Vec<TryOnSession>,
    current_session_id: Option<Uuid>,

    /// Newest-first community feed.
    posts: Vec<FashionPost>,

    favorites: HashSet<String>,
}

impl ClientStore {
    pub fn new() -> Self {
        Self::with_catalog(seed_catalog())
    }

    pub fn with_catalog(catalog: Vec<ClothingItem>) -> Self {
        Self {
            items: catalog.clone(),
            catalog,
            current_user: None,
            selected_item: None,
            sessions: Vec::new(),
            current_session_id: None,
            posts: Vec::new(),
            favorites: HashSet::new(),
        }
    }

    // ------------------------------------------------------------------
    // User state
    // ------------------------------------------------------------------

    pub fn login(&mut self, user: User) {
        debug!("login: {} ({})", user.name, user.user_id);
        self.current_user = Some(user);
    }

    pub fn logout(&mut self) {
        debug!("logout");
        self.current_user = None;
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    // ------------------------------------------------------------------
    // Catalog
    // ------------------------------------------------------------------

    /// The full seed catalog, regardless of any active filter.
    pub fn catalog(&self) -> &[ClothingItem] {
        &self.catalog
    }

    /// The current working list (full catalog until a filter is applied).
    pub fn items(&self) -> &[ClothingItem] {
        &self.items
    }

    /// Recomputes the working list from the full seed catalog. An absent
    /// filter places no constraint; both filters must match otherwise.
    /// Idempotent for fixed inputs.
    pub fn filter_items(
        &mut self,
        category: Option<ClothingCategory>,
        region: Option<Region>,
    ) -> &[ClothingItem] {
        self.items = self
            .catalog
            .iter()
            .filter(|item| {
                category.is_none_or(|c| item.category == c)
                    && region.is_none_or(|r| item.origin == r)
            })
            .cloned()
            .collect();
        debug!(
            "filter_items: category={:?} region={:?} -> {} item(s)",
            category,
            region,
            self.items.len()
        );
        &self.items
    }

    /// Looks the item up in the current working list (not the full catalog,
    /// so a filtered-out id will not be found). A miss clears the selection
    /// and returns None.
    pub fn select_item(&mut self, id: &str) -> Option<&ClothingItem> {
        self.selected_item = self.items.iter().find(|item| item.id == id).cloned();
        self.selected_item.as_ref()
    }

    pub fn selected_item(&self) -> Option<&ClothingItem> {
        self.selected_item.as_ref()
    }

    // ------------------------------------------------------------------
    // Try-on sessions
    // ------------------------------------------------------------------

    /// Opens a new session, prepends it to history and makes it current.
    /// Returns the new session's id.
    pub fn start_try_on_session(&mut self, user_id: Uuid, item_id: &str) -> Uuid {
        let session = TryOnSession::new(user_id, item_id);
        let id = session.session_id;
        self.sessions.insert(0, session);
        self.current_session_id = Some(id);
        debug!("start_try_on_session: {} item={}", id, item_id);
        id
    }

    /// Attaches a result image to the current session, locating the history
    /// entry by its session id. Returns false when no session is current.
    pub fn save_try_on_result(&mut self, result_image_url: &str) -> bool {
        let Some(id) = self.current_session_id else {
            debug!("save_try_on_result: no current session");
            return false;
        };
        match self.sessions.iter_mut().find(|s| s.session_id == id) {
            Some(session) => {
                session.result_image_url = Some(result_image_url.to_string());
                true
            }
            None => false,
        }
    }

    /// Newest-first history of every session started this run.
    pub fn sessions(&self) -> &[TryOnSession] {
        &self.sessions
    }

    pub fn sessions_for(&self, user_id: Uuid) -> Vec<&TryOnSession> {
        self.sessions.iter().filter(|s| s.user_id == user_id).collect()
    }

    pub fn current_session(&self) -> Option<&TryOnSession> {
        let id = self.current_session_id?;
        self.sessions.iter().find(|s| s.session_id == id)
    }

    // ------------------------------------------------------------------
    // Community posts
    // ------------------------------------------------------------------

    /// Assigns an id and creation timestamp, zero-initializes likes and
    /// prepends the post to the feed. Returns the assigned id.
    pub fn add_fashion_post(&mut self, post: NewFashionPost) -> Uuid {
        let post = FashionPost {
            post_id: Uuid::new_v4(),
            user_id: post.user_id,
            user: post.user,
            title: post.title,
            description: post.description,
            image_url: post.image_url,
            likes: 0,
            created_at: chrono::Utc::now(),
            items: post.items,
        };
        let id = post.post_id;
        self.posts.insert(0, post);
        debug!("add_fashion_post: {}", id);
        id
    }

    /// Bumps the like counter of the matching post by exactly one. Returns
    /// false for an unknown id.
    pub fn like_post(&mut self, id: Uuid) -> bool {
        match self.posts.iter_mut().find(|p| p.post_id == id) {
            Some(post) => {
                post.likes += 1;
                true
            }
            None => false,
        }
    }

    pub fn posts(&self) -> &[FashionPost] {
        &self.posts
    }

    pub fn posts_by(&self, user_id: Uuid) -> Vec<&FashionPost> {
        self.posts.iter().filter(|p| p.user_id == user_id).collect()
    }

    // ------------------------------------------------------------------
    // Favorites
    // ------------------------------------------------------------------

    /// Set-toggles membership. Returns whether the item is a favorite after
    /// the call.
    pub fn toggle_favorite(&mut self, item_id: &str) -> bool {
        if self.favorites.remove(item_id) {
            false
        } else {
            self.favorites.insert(item_id.to_string());
            true
        }
    }

    pub fn is_favorite(&self, item_id: &str) -> bool {
        self.favorites.contains(item_id)
    }

    pub fn favorites(&self) -> &HashSet<String> {
        &self.favorites
    }

    /// Catalog entries currently favorited, in catalog order.
    pub fn favorite_items(&self) -> Vec<&ClothingItem> {
        self.catalog
            .iter()
            .filter(|item| self.favorites.contains(&item.id))
            .collect()
    }
}

impl Default for ClientStore {
    fn default() -> Self {
        Self::new()
    }
}
