// tests/store_tests.rs

use uuid::Uuid;

use attire_common::models::{ClothingCategory, NewFashionPost, Region, User};
use attire_core::ClientStore;

fn new_post(user: &User, title: &str) -> NewFashionPost {
    NewFashionPost {
        user_id: user.user_id,
        user: Some(user.clone()),
        title: title.to_string(),
        description: "test post".to_string(),
        image_url: "https://example.com/p.jpeg".to_string(),
        items: Vec::new(),
    }
}

#[test]
fn login_logout_replaces_current_user() {
    let mut store = ClientStore::new();
    assert!(!store.is_authenticated());

    let user = User::new("Aisha", "New York");
    store.login(user.clone());
    assert!(store.is_authenticated());
    assert_eq!(store.current_user().unwrap().user_id, user.user_id);

    store.logout();
    assert!(store.current_user().is_none());
}

#[test]
fn favorites_toggle_pairs_are_noops() {
    let mut store = ClientStore::new();
    assert!(!store.is_favorite("2"));

    // odd number of toggles => member
    assert!(store.toggle_favorite("2"));
    assert!(store.is_favorite("2"));

    // even number of toggles of the same id => back to original membership
    assert!(!store.toggle_favorite("2"));
    assert!(!store.is_favorite("2"));

    for _ in 0..6 {
        store.toggle_favorite("4");
    }
    assert!(!store.is_favorite("4"));
}

#[test]
fn favorite_items_resolve_against_catalog() {
    let mut store = ClientStore::new();
    store.toggle_favorite("1");
    store.toggle_favorite("no-such-item");

    let favs = store.favorite_items();
    assert_eq!(favs.len(), 1);
    assert_eq!(favs[0].id, "1");
}

#[test]
fn filter_items_is_commutative_in_outcome() {
    let mut a = ClientStore::new();
    let mut b = ClientStore::new();

    // category then region
    a.filter_items(Some(ClothingCategory::Hanfu), None);
    let first: Vec<String> = a
        .filter_items(Some(ClothingCategory::Hanfu), Some(Region::EastAsia))
        .iter()
        .map(|i| i.id.clone())
        .collect();

    // region then category
    b.filter_items(None, Some(Region::EastAsia));
    let second: Vec<String> = b
        .filter_items(Some(ClothingCategory::Hanfu), Some(Region::EastAsia))
        .iter()
        .map(|i| i.id.clone())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn filter_items_recomputes_from_full_catalog() {
    let mut store = ClientStore::new();
    let narrowed = store.filter_items(Some(ClothingCategory::Saree), None).len();
    assert_eq!(narrowed, 1);

    // widening the filter again must see the whole catalog, not the
    // previously narrowed list
    let all = store.filter_items(None, None).len();
    assert_eq!(all, store.catalog().len());
}

#[test]
fn select_item_searches_the_working_list() {
    let mut store = ClientStore::new();
    assert!(store.select_item("5").is_some());
    assert_eq!(store.selected_item().unwrap().id, "5");

    // a miss clears the selection instead of raising
    assert!(store.select_item("does-not-exist").is_none());
    assert!(store.selected_item().is_none());

    // items hidden by the active filter are not selectable
    store.filter_items(Some(ClothingCategory::Kimono), None);
    assert!(store.select_item("5").is_none());
}

#[test]
fn try_on_sessions_prepend_and_update_by_id() {
    let mut store = ClientStore::new();
    let user = Uuid::new_v4();

    let first = store.start_try_on_session(user, "1");
    let second = store.start_try_on_session(user, "3");

    // newest first
    assert_eq!(store.sessions().len(), 2);
    assert_eq!(store.sessions()[0].session_id, second);
    assert_eq!(store.sessions()[1].session_id, first);

    assert!(store.save_try_on_result("https://example.com/result.jpeg"));

    // only the current session (the second) got the result
    assert_eq!(
        store.sessions()[0].result_image_url.as_deref(),
        Some("https://example.com/result.jpeg")
    );
    assert!(store.sessions()[1].result_image_url.is_none());
    assert_eq!(store.current_session().unwrap().session_id, second);
}

#[test]
fn save_try_on_result_without_session_is_refused() {
    let mut store = ClientStore::new();
    assert!(!store.save_try_on_result("https://example.com/result.jpeg"));
    assert!(store.sessions().is_empty());
}

#[test]
fn add_fashion_post_assigns_unique_ids_and_prepends() {
    let mut store = ClientStore::new();
    let user = User::new("David", "San Francisco");

    let id1 = store.add_fashion_post(new_post(&user, "first"));
    let id2 = store.add_fashion_post(new_post(&user, "second"));
    assert_ne!(id1, id2);

    let posts = store.posts();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].post_id, id2, "newest post is ordered first");
    assert_eq!(posts[0].likes, 0);
    assert!(posts[0].created_at >= posts[1].created_at);
}

#[test]
fn like_post_increments_exactly_one_post() {
    let mut store = ClientStore::new();
    let user = User::new("David", "San Francisco");
    let id1 = store.add_fashion_post(new_post(&user, "first"));
    let id2 = store.add_fashion_post(new_post(&user, "second"));

    assert!(store.like_post(id1));

    let likes = |store: &ClientStore, id| {
        store
            .posts()
            .iter()
            .find(|p| p.post_id == id)
            .map(|p| p.likes)
            .unwrap()
    };
    assert_eq!(likes(&store, id1), 1);
    assert_eq!(likes(&store, id2), 0);

    // unknown id changes nothing
    assert!(!store.like_post(Uuid::new_v4()));
    assert_eq!(likes(&store, id1), 1);
    assert_eq!(likes(&store, id2), 0);
}

#[test]
fn posts_and_sessions_filter_by_user() {
    let mut store = ClientStore::new();
    let alice = User::new("Alice", "Austin");
    let bob = User::new("Bob", "Boston");

    store.add_fashion_post(new_post(&alice, "hers"));
    store.add_fashion_post(new_post(&bob, "his"));
    store.start_try_on_session(alice.user_id, "1");

    assert_eq!(store.posts_by(alice.user_id).len(), 1);
    assert_eq!(store.posts_by(bob.user_id).len(), 1);
    assert_eq!(store.sessions_for(alice.user_id).len(), 1);
    assert!(store.sessions_for(bob.user_id).is_empty());
}
