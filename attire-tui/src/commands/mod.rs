// File: attire-tui/src/commands/mod.rs

use std::sync::Arc;

use crate::route::Route;
use crate::tui_module::TuiModule;

mod account;
mod community;
mod help;
mod home;
mod profile;
mod shop;
mod size_guide;
mod tryon;

/// Interprets one input line. Returns (quit_requested, output).
pub fn dispatch(line: &str, module: &Arc<TuiModule>) -> (bool, Option<String>) {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(first) = parts.first() else {
        return (false, None);
    };
    let cmd = first.to_lowercase();
    let args = &parts[1..];

    match cmd.as_str() {
        "help" => {
            let topic = args.first().copied().unwrap_or("");
            (false, Some(help::show_command_help(topic)))
        }
        "go" => {
            if args.is_empty() {
                return (
                    false,
                    Some("Usage: go <path>   e.g. go /shop?region=East+Asia".to_string()),
                );
            }
            let route = module.navigate(Route::parse(args[0]));
            (false, Some(page_for(&route, module)))
        }
        "home" => {
            module.navigate(Route::Home);
            (false, Some(home::render_home()))
        }
        "login" => (false, Some(account::handle_login(args, module))),
        "logout" => (false, Some(account::handle_logout(module))),
        "whoami" => (false, Some(account::handle_whoami(module))),
        "shop" => (false, Some(shop::handle_shop_command(args, module))),
        "sizeguide" | "size-guide" => {
            (false, Some(size_guide::handle_size_guide_command(args, module)))
        }
        "tryon" | "try-on" => (false, Some(tryon::handle_tryon_command(args, module))),
        "community" => (false, Some(community::handle_community_command(args, module))),
        "profile" => (false, Some(profile::handle_profile_command(args, module))),
        "quit" | "exit" => (true, Some("Goodbye!".to_string())),
        other => (
            false,
            Some(format!("Unknown command '{}'. Type 'help' for usage.", other)),
        ),
    }
}

/// Default view for a route, used right after `go` navigation.
fn page_for(route: &Route, module: &Arc<TuiModule>) -> String {
    match route {
        Route::Home => home::render_home(),
        Route::TryOn { .. } => tryon::render_tryon_page(module),
        Route::SizeGuide => size_guide::render_size_guide_page(module),
        Route::Shop { .. } => shop::render_shop_page(module),
        Route::Product { product_id } => shop::render_product_page(module, product_id),
        Route::Community => community::render_feed(module),
        Route::Profile { user_id } => profile::render_profile(module, user_id),
        Route::NotFound(path) => format!("No page at '{}'. Type 'help' to see where to go.", path),
    }
}
