// File: attire-tui/src/render.rs
//
// Plain-text rendering of catalog entries, posts, sessions and charts.

use colored::Colorize;

use attire_common::models::{ClothingItem, FashionPost, Gender, SizeBand, TryOnSession, User};

pub fn item_line(item: &ClothingItem, favorite: bool) -> String {
    let marker = if favorite { "♥".magenta().to_string() } else { " ".to_string() };
    format!(
        "{} [{}] {} — ${:.2}  ({}, {})",
        marker,
        item.id.cyan(),
        item.name.bold(),
        item.price,
        item.category,
        item.origin
    )
}

pub fn item_detail(item: &ClothingItem, favorite: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", item.name.bold()));
    out.push_str(&format!("Origin: {}\n", item.origin));
    out.push_str(&format!("Category: {}\n", item.category));
    out.push_str(&format!("{}\n", format!("${:.2}", item.price).green().bold()));
    out.push_str(&format!("\n{}\n", item.description));
    if !item.colors.is_empty() {
        out.push_str(&format!("\nColors: {}\n", item.colors.join(", ")));
    }
    if !item.sizes.is_empty() {
        out.push_str("Sizes:\n");
        for size in &item.sizes {
            out.push_str(&format!(
                "  {} {} (US {})\n",
                size.region, size.value, size.us_equivalent
            ));
        }
    }
    out.push_str(&format!("\nImage: {}\n", item.image_url));
    out.push_str(&format!("Buy:   {}\n", item.affiliate_link));
    out.push_str(&format!(
        "Favorite: {}\n",
        if favorite { "yes".magenta().to_string() } else { "no".to_string() }
    ));
    out
}

pub fn post_block(index: usize, post: &FashionPost) -> String {
    let author = post
        .user
        .as_ref()
        .map(|u| format!("{} ({})", u.name, u.location))
        .unwrap_or_else(|| "unknown".to_string());
    let mut out = String::new();
    out.push_str(&format!(
        "#{} {}  {}\n",
        index,
        post.title.bold(),
        format!("♥ {}", post.likes).magenta()
    ));
    out.push_str(&format!(
        "   by {} on {}\n",
        author,
        post.created_at.format("%Y-%m-%d")
    ));
    out.push_str(&format!("   {}\n", post.description));
    out.push_str(&format!("   {}\n", post.image_url.dimmed()));
    out
}

pub fn session_line(session: &TryOnSession, item_name: Option<&str>) -> String {
    let name = item_name.unwrap_or(session.item_id.as_str());
    let result = match &session.result_image_url {
        Some(url) => format!("result: {}", url),
        None => "no result".to_string(),
    };
    format!(
        "  {}  {} — {}",
        session.created_at.format("%Y-%m-%d %H:%M"),
        name,
        result
    )
}

pub fn profile_block(user: &User, posts: usize, tryons: usize, favorites: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", user.name.bold()));
    out.push_str(&format!("{}\n", user.location));
    if let Some(bio) = &user.bio {
        out.push_str(&format!("{}\n", bio));
    }
    if let Some(avatar) = &user.avatar {
        out.push_str(&format!("{}\n", avatar.dimmed()));
    }
    out.push_str(&format!(
        "\n{} Posts   {} Try-Ons   {} Favorites\n",
        posts, tryons, favorites
    ));
    out
}

pub fn chart_table(region: &str, gender: Gender, bands: &[SizeBand]) -> String {
    let third_column = match gender {
        Gender::Women => "Hips",
        Gender::Men => "Shoulder",
    };
    let mut out = String::new();
    out.push_str(&format!("Size chart — {} ({})\n", region.bold(), gender));
    out.push_str(&format!(
        "{:<12} {:<14} {:<10} {:<10} {:<10}\n",
        "US Size", "Native", "Chest", "Waist", third_column
    ));
    for band in bands {
        out.push_str(&format!(
            "{:<12} {:<14} {:<10} {:<10} {:<10}\n",
            band.us,
            band.native,
            band.chest.to_string(),
            band.waist.to_string(),
            band.hips_or_shoulder.to_string()
        ));
    }
    out
}
