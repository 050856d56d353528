// File: attire-tui/src/commands/tryon.rs

use std::sync::Arc;

use colored::Colorize;

use attire_core::services::tryon::TryOnStage;

use crate::render;
use crate::route::Route;
use crate::tui_module::TuiModule;

pub fn handle_tryon_command(args: &[&str], module: &Arc<TuiModule>) -> String {
    ensure_on_tryon(module);

    match args {
        [] | ["status"] => render_tryon_page(module),
        ["photo", rest @ ..] => {
            let url = match rest.first() {
                Some(url) => (*url).to_string(),
                // No url means "take a photo with the camera".
                None => module.config.camera_photo_url.clone(),
            };
            let catalog = module.store.lock().unwrap().catalog().to_vec();
            module.flow.lock().unwrap().supply_photo(&url, &catalog);
            render_tryon_page(module)
        }
        ["items"] => {
            let store = module.store.lock().unwrap();
            let mut out = String::from("Select clothing to try on:\n");
            for item in store.items() {
                out.push_str(&render::item_line(item, store.is_favorite(&item.id)));
                out.push('\n');
            }
            out.push_str("\n'tryon select <id>' to pick one.\n");
            out
        }
        ["select", id] => {
            let item = module
                .store
                .lock()
                .unwrap()
                .items()
                .iter()
                .find(|item| item.id == *id)
                .cloned();
            let Some(item) = item else {
                return format!("No item with id '{}'. 'tryon items' lists them.", id);
            };
            let name = item.name.clone();
            match module.flow.lock().unwrap().select_item(item) {
                Ok(()) => format!("Selected {}. 'tryon render' when you're ready.", name.bold()),
                Err(e) => format!("{}", e),
            }
        }
        ["render"] => match module.spawn_render() {
            Ok(()) => "Processing your virtual try-on...".to_string(),
            Err(e) => format!("{}", e),
        },
        ["change"] => {
            module.flow.lock().unwrap().choose_different_item();
            render_tryon_page(module)
        }
        ["reset"] => {
            module.cancel_render();
            module.flow.lock().unwrap().start_over();
            render_tryon_page(module)
        }
        ["history"] => render_history(module),
        _ => "Usage: tryon [photo [url] | items | select <id> | render | change | reset | history]"
            .to_string(),
    }
}

/// Stage-appropriate view of the flow, ending with the next step to take.
pub fn render_tryon_page(module: &Arc<TuiModule>) -> String {
    let flow = module.flow.lock().unwrap();
    let mut out = format!("{}\n", "Virtual Try-On".bold().cyan());

    match flow.stage() {
        TryOnStage::AwaitingPhoto => {
            out.push_str("Step 1: Upload a photo of yourself.\n");
            out.push_str("  tryon photo <url>   use a photo you already have\n");
            out.push_str("  tryon photo         take one with the camera\n");
        }
        TryOnStage::AwaitingSelection => {
            out.push_str(&format!("Photo: {}\n", flow.photo_url().unwrap_or("-")));
            out.push_str("Step 2: Pick a garment — 'tryon items', then 'tryon select <id>'.\n");
        }
        TryOnStage::ReadyToRender => {
            out.push_str(&format!("Photo: {}\n", flow.photo_url().unwrap_or("-")));
            if let Some(item) = flow.selected_item() {
                out.push_str(&format!("Garment: {}\n", item.name.bold()));
            }
            if flow.is_processing() {
                out.push_str("Processing your virtual try-on...\n");
            } else {
                out.push_str("Step 3: 'tryon render' to see yourself wearing it.\n");
            }
        }
        TryOnStage::ResultShown => {
            if let Some(item) = flow.selected_item() {
                out.push_str(&format!("You, wearing {}:\n", item.name.bold()));
            }
            if let Some(url) = flow.result_url() {
                out.push_str(&format!("  {}\n", url.green()));
            }
            out.push_str("'tryon change' for another garment, 'tryon reset' to start over.\n");
        }
    }
    out
}

fn render_history(module: &Arc<TuiModule>) -> String {
    let store = module.store.lock().unwrap();
    let Some(user) = store.current_user() else {
        return "Sign in to keep a try-on history.".to_string();
    };
    let sessions = store.sessions_for(user.user_id);
    if sessions.is_empty() {
        return "No try-on sessions yet.".to_string();
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

fn ensure_on_tryon(module: &Arc<TuiModule>) {
    if !matches!(module.current_route(), Route::TryOn { .. }) {
        module.navigate(Route::TryOn { item: None });
    }
}
