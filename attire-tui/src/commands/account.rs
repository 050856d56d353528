// File: attire-tui/src/commands/account.rs

use std::sync::Arc;

use attire_common::models::User;

use crate::tui_module::TuiModule;

pub fn handle_login(args: &[&str], module: &Arc<TuiModule>) -> String {
    let Some(name) = args.first() else {
        return "Usage: login <name> [location]".to_string();
    };
    let location = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        "Unknown".to_string()
    };
    let user = User::new(name, &location);
    let greeting = format!("Welcome, {}! You are signed in.", user.name);
    module.store.lock().unwrap().login(user);
    greeting
}

pub fn handle_logout(module: &Arc<TuiModule>) -> String {
    let mut store = module.store.lock().unwrap();
    if !store.is_authenticated() {
        return "You are not signed in.".to_string();
    }
    store.logout();
    "Signed out.".to_string()
}

pub fn handle_whoami(module: &Arc<TuiModule>) -> String {
    match module.store.lock().unwrap().current_user() {
        Some(user) => format!("{} ({}) — {}", user.name, user.user_id, user.location),
        None => "You are not signed in. Use 'login <name>' first.".to_string(),
    }
}
