// File: attire-tui/src/commands/home.rs

use colored::Colorize;

pub fn render_home() -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Global Attire".bold().cyan()));
    out.push_str("Discover traditional clothing from around the world.\n\n");

    out.push_str(&format!("{}\n", "Shop by region".bold()));
    out.push_str("  go /shop?region=South+Asia    sarees, kurtas and more\n");
    out.push_str("  go /shop?region=West+Africa   agbada, kente and more\n");
    out.push_str("  go /shop?region=East+Asia     hanfu, kimono, cheongsam\n\n");

    out.push_str(&format!("{}\n", "How it works".bold()));
    out.push_str("  1. Upload a photo          tryon photo\n");
    out.push_str("  2. Pick a garment          tryon select <id>\n");
    out.push_str("  3. See yourself wearing it tryon render\n\n");

    out.push_str("Not sure about sizing? Try 'go /size-guide'.\n");
    out.push_str("Looking for inspiration? Try 'go /community'.\n");
    out
}
