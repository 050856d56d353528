// File: attire-tui/src/commands/shop.rs

use std::str::FromStr;
use std::sync::Arc;

use attire_common::models::{ClothingCategory, Region};
use attire_core::services::shop::ShopFilter;

use crate::render;
use crate::route::Route;
use crate::tui_module::TuiModule;

pub fn handle_shop_command(args: &[&str], module: &Arc<TuiModule>) -> String {
    ensure_on_shop(module);

    match args {
        [] | ["list"] => render_shop_page(module),
        ["search", rest @ ..] => {
            let needle = rest.join(" ");
            module.shop_filter.lock().unwrap().search =
                if needle.is_empty() { None } else { Some(needle) };
            render_shop_page(module)
        }
        ["region", rest @ ..] => {
            let wanted = rest.join(" ");
            if wanted.eq_ignore_ascii_case("any") || wanted.is_empty() {
                module.shop_filter.lock().unwrap().region = None;
                return render_shop_page(module);
            }
            match Region::from_str(&wanted) {
                Ok(region) => {
                    module.shop_filter.lock().unwrap().region = Some(region);
                    render_shop_page(module)
                }
                Err(_) => format!(
                    "Unknown region '{}'. Try: South Asia, West Africa, East Asia.",
                    wanted
                ),
            }
        }
        ["category", rest @ ..] => {
            let wanted = rest.join(" ");
            if wanted.eq_ignore_ascii_case("any") || wanted.is_empty() {
                module.shop_filter.lock().unwrap().category = None;
                return render_shop_page(module);
            }
            match ClothingCategory::from_str(&wanted) {
                Ok(category) => {
                    module.shop_filter.lock().unwrap().category = Some(category);
                    render_shop_page(module)
                }
                Err(_) => format!("Unknown category '{}'.", wanted),
            }
        }
        ["price", min, max] => {
            let (Ok(min), Ok(max)) = (min.parse::<f64>(), max.parse::<f64>()) else {
                return "Usage: shop price <min> <max>".to_string();
            };
            if min > max {
                return "Minimum price cannot exceed the maximum.".to_string();
            }
            {
                let mut filter = module.shop_filter.lock().unwrap();
                filter.price_min = min;
                filter.price_max = max;
            }
            render_shop_page(module)
        }
        ["clear"] => {
            *module.shop_filter.lock().unwrap() = ShopFilter::default();
            render_shop_page(module)
        }
        ["show", id] => {
            module.navigate(Route::Product { product_id: (*id).to_string() });
            render_product_page(module, id)
        }
        ["fav", id] => {
            let mut store = module.store.lock().unwrap();
            if !store.catalog().iter().any(|item| item.id == *id) {
                return format!("No item with id '{}'.", id);
            }
            if store.toggle_favorite(id) {
                format!("Added item {} to your favorites.", id)
            } else {
                format!("Removed item {} from your favorites.", id)
            }
        }
        _ => "Usage: shop [search <text> | region <region> | category <category> | price <min> <max> | clear | show <id> | fav <id>]".to_string(),
    }
}

/// The item list for the current filter, with the active constraints echoed
/// above it.
pub fn render_shop_page(module: &Arc<TuiModule>) -> String {
    let filter = module.shop_filter.lock().unwrap().clone();
    let store = module.store.lock().unwrap();
    let matched = filter.apply(store.catalog());

    let mut out = String::new();
    if !filter.is_unconstrained() {
        let mut constraints = Vec::new();
        if let Some(search) = &filter.search {
            constraints.push(format!("search \"{}\"", search));
        }
        if let Some(region) = filter.region {
            constraints.push(format!("region {}", region));
        }
        if let Some(category) = filter.category {
            constraints.push(format!("category {}", category));
        }
        if filter.price_min > 0.0 || filter.price_max < 500.0 {
            constraints.push(format!("price ${:.0}-${:.0}", filter.price_min, filter.price_max));
        }
        out.push_str(&format!("Filters: {}\n", constraints.join(", ")));
    }
    if matched.is_empty() {
        out.push_str("No items found. Try adjusting your filters.\n");
        return out;
    }
    for item in &matched {
        out.push_str(&render::item_line(item, store.is_favorite(&item.id)));
        out.push('\n');
    }
    out.push_str(&format!(
        "\n{} item(s). 'shop show <id>' for detail, 'shop fav <id>' to favorite.\n",
        matched.len()
    ));
    out
}

pub fn render_product_page(module: &Arc<TuiModule>, product_id: &str) -> String {
    let store = module.store.lock().unwrap();
    match store.selected_item() {
        Some(item) if item.id == product_id => {
            let mut out = render::item_detail(item, store.is_favorite(&item.id));
            out.push_str("\n'go /try-on?item=");
            out.push_str(&item.id);
            out.push_str("' to see it on yourself.\n");
            out
        }
        _ => "Product Not Found\nThe item you are looking for does not exist or has been removed."
            .to_string(),
    }
}

/// Shop subcommands imply being on the shop page; moving there through
/// `navigate` keeps leave/enter effects consistent with `go`.
fn ensure_on_shop(module: &Arc<TuiModule>) {
    if !matches!(
        module.current_route(),
        Route::Shop { .. } | Route::Product { .. }
    ) {
        module.navigate(Route::Shop { region: None });
    }
}
