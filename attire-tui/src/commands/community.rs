// File: attire-tui/src/commands/community.rs

use std::sync::Arc;

use colored::Colorize;

use attire_common::models::NewFashionPost;
use attire_core::catalog::seed_posts;

use crate::render;
use crate::route::Route;
use crate::tui_module::TuiModule;

pub fn handle_community_command(args: &[&str], module: &Arc<TuiModule>) -> String {
    ensure_on_community(module);

    match args {
        [] | ["feed"] => render_feed(module),
        ["post", rest @ ..] => {
            let description = rest.join(" ");
            if description.is_empty() {
                return "Usage: community post <text>".to_string();
            }
            let (user_id, user) = {
                let store = module.store.lock().unwrap();
                match store.current_user() {
                    Some(user) => (user.user_id, user.clone()),
                    None => return "Sign in to share an outfit: 'login <name>'.".to_string(),
                }
            };
            let post = NewFashionPost {
                user_id,
                user: Some(user),
                title: "New Fashion Inspiration".to_string(),
                description,
                image_url: module.config.post_image_url.clone(),
                items: Vec::new(),
            };
            module.store.lock().unwrap().add_fashion_post(post);
            render_feed(module)
        }
        ["like", index] => {
            let Ok(index) = index.parse::<usize>() else {
                return "Usage: community like <index>".to_string();
            };
            let post_id = {
                let store = module.store.lock().unwrap();
                store
                    .posts()
                    .get(index.wrapping_sub(1))
                    .map(|post| post.post_id)
            };
            let Some(post_id) = post_id else {
                return format!("No post #{} in the feed.", index);
            };
            if module.store.lock().unwrap().like_post(post_id) {
                format!("Liked post #{}.", index)
            } else {
                format!("No post #{} in the feed.", index)
            }
        }
        _ => "Usage: community [feed | post <text> | like <index>]".to_string(),
    }
}

/// The fashion feed. Until anyone shares something this session, a showcase
/// set of community posts fills the page.
pub fn render_feed(module: &Arc<TuiModule>) -> String {
    let store = module.store.lock().unwrap();
    let mut out = format!("{}\n", "Community Fashion".bold().cyan());

    if store.posts().is_empty() {
        out.push_str("From the community:\n\n");
        for (i, post) in seed_posts().iter().enumerate() {
            out.push_str(&render::post_block(i + 1, post));
            out.push('\n');
        }
        out.push_str("Share your own outfit with 'community post <text>'.\n");
        return out;
    }

    for (i, post) in store.posts().iter().enumerate() {
        out.push_str(&render::post_block(i + 1, post));
        out.push('\n');
    }
    out.push_str("'community like <index>' to like a post.\n");
    out
}

fn ensure_on_community(module: &Arc<TuiModule>) {
    if module.current_route() != Route::Community {
        module.navigate(Route::Community);
    }
}
