// File: attire-tui/src/commands/profile.rs

use std::sync::Arc;

use serde_json::json;

use crate::render;
use crate::route::Route;
use crate::tui_module::TuiModule;

pub fn handle_profile_command(args: &[&str], module: &Arc<TuiModule>) -> String {
    ensure_on_profile(module);

    match args {
        [] | ["me"] => render_profile(module, "me"),
        ["posts"] => {
            let store = module.store.lock().unwrap();
            let Some(user) = store.current_user() else {
                return sign_in_prompt();
            };
            let posts = store.posts_by(user.user_id);
            if posts.is_empty() {
                return "You haven't shared any outfits yet. Try 'community post <text>'."
                    .to_string();
            }
            let mut out = String::from("Your posts (newest first):\n");
            for (i, post) in posts.iter().enumerate() {
                out.push_str(&render::post_block(i + 1, post));
                out.push('\n');
            }
            out
        }
        ["tryons"] => {
            let store = module.store.lock().unwrap();
            let Some(user) = store.current_user() else {
                return sign_in_prompt();
            };
            let sessions = store.sessions_for(user.user_id);
            if sessions.is_empty() {
                return "No try-on sessions yet. Try 'go /try-on'.".to_string();
            }
            let mut out = String::from("Your try-on sessions (newest first):\n");
            for session in sessions {
                let name = store
                    .catalog()
                    .iter()
                    .find(|item| item.id == session.item_id)
                    .map(|item| item.name.as_str());
                out.push_str(&render::session_line(session, name));
                out.push('\n');
            }
            out
        }
        ["favorites"] => {
            let store = module.store.lock().unwrap();
            if !store.is_authenticated() {
                return sign_in_prompt();
            }
            let favorites = store.favorite_items();
            if favorites.is_empty() {
                return "No favorites yet. 'shop fav <id>' adds one.".to_string();
            }
            let mut out = String::from("Your favorites:\n");
            for item in favorites {
                out.push_str(&render::item_line(item, true));
                out.push('\n');
            }
            out
        }
        ["export"] => export_profile(module),
        _ => "Usage: profile [me | posts | tryons | favorites | export]".to_string(),
    }
}

pub fn render_profile(module: &Arc<TuiModule>, user_id: &str) -> String {
    let store = module.store.lock().unwrap();
    let Some(user) = store.current_user() else {
        return sign_in_prompt();
    };
    if user_id != "me" && user_id != user.user_id.to_string() {
        return format!("No profile found for '{}'.", user_id);
    }
    let posts = store.posts_by(user.user_id).len();
    let tryons = store.sessions_for(user.user_id).len();
    let favorites = store.favorites().len();
    let mut out = render::profile_block(user, posts, tryons, favorites);
    out.push_str("\n'profile posts', 'profile tryons', 'profile favorites' for the tabs.\n");
    out
}

/// Everything the session knows about the signed-in user, as JSON.
fn export_profile(module: &Arc<TuiModule>) -> String {
    let store = module.store.lock().unwrap();
    let Some(user) = store.current_user() else {
        return sign_in_prompt();
    };
    let export = json!({
        "user": user,
        "posts": store.posts_by(user.user_id),
        "try_on_sessions": store.sessions_for(user.user_id),
        "favorites": store.favorite_items(),
    });
    match serde_json::to_string_pretty(&export) {
        Ok(text) => text,
        Err(e) => format!("Export failed => {}", e),
    }
}

fn sign_in_prompt() -> String {
    "You are not signed in. Use 'login <name>' first.".to_string()
}

fn ensure_on_profile(module: &Arc<TuiModule>) {
    if !matches!(module.current_route(), Route::Profile { .. }) {
        module.navigate(Route::Profile { user_id: "me".to_string() });
    }
}
