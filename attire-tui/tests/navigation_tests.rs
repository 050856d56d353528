// File: attire-tui/tests/navigation_tests.rs
//
// Navigation side effects: query parameters seed page state, leaving a page
// resets its view state, and leaving the try-on page tears down the flow.

use std::time::Duration;

use attire_common::models::Region;
use attire_core::AppConfig;
use attire_core::services::tryon::TryOnStage;
use attire_tui::{Route, TuiModule};

fn module_with_delay(ms: u64) -> TuiModule {
    let config = AppConfig {
        tryon_delay: Duration::from_millis(ms),
        ..AppConfig::default()
    };
    TuiModule::new(config).expect("built-in size charts are valid")
}

#[tokio::test]
async fn shop_region_link_seeds_the_filter_and_working_list() {
    let module = module_with_delay(0);
    module.navigate(Route::Shop { region: Some(Region::EastAsia) });

    assert_eq!(module.shop_filter.lock().unwrap().region, Some(Region::EastAsia));
    let store = module.store.lock().unwrap();
    assert_eq!(store.items().len(), 3);
    assert!(store.items().iter().all(|i| i.origin == Region::EastAsia));
}

#[tokio::test]
async fn leaving_the_shop_resets_the_filter() {
    let module = module_with_delay(0);
    module.navigate(Route::Shop { region: Some(Region::WestAfrica) });
    module.navigate(Route::Community);

    let filter = module.shop_filter.lock().unwrap();
    assert!(filter.is_unconstrained());
}

#[tokio::test]
async fn product_route_selects_the_item() {
    let module = module_with_delay(0);
    module.navigate(Route::Product { product_id: "4".to_string() });

    let store = module.store.lock().unwrap();
    assert_eq!(
        store.selected_item().map(|i| i.name.as_str()),
        Some("Silk Kimono")
    );
}

#[tokio::test]
async fn try_on_link_preselects_once_a_photo_arrives() {
    let module = module_with_delay(0);
    module.navigate(Route::TryOn { item: Some("2".to_string()) });

    let catalog = module.store.lock().unwrap().catalog().to_vec();
    let mut flow = module.flow.lock().unwrap();
    flow.supply_photo("https://example.com/me.jpg", &catalog);
    assert_eq!(flow.stage(), TryOnStage::ReadyToRender);
    assert_eq!(flow.selected_item().map(|i| i.id.as_str()), Some("2"));
}

#[tokio::test]
async fn navigating_away_cancels_a_pending_render() {
    let module = module_with_delay(60_000);
    module.navigate(Route::TryOn { item: Some("1".to_string()) });

    let catalog = module.store.lock().unwrap().catalog().to_vec();
    module
        .flow
        .lock()
        .unwrap()
        .supply_photo("https://example.com/me.jpg", &catalog);
    module.spawn_render().expect("flow is ready to render");
    assert!(module.flow.lock().unwrap().is_processing());

    module.navigate(Route::Home);
    tokio::time::sleep(Duration::from_millis(50)).await;

    let flow = module.flow.lock().unwrap();
    assert!(!flow.is_processing());
    assert_eq!(flow.stage(), TryOnStage::AwaitingPhoto);
    assert!(flow.result_url().is_none());
}

#[tokio::test]
async fn render_completes_and_lands_in_session_history() {
    let module = module_with_delay(5);
    {
        let mut store = module.store.lock().unwrap();
        store.login(attire_common::models::User::new("Priya", "Mumbai"));
    }
    module.navigate(Route::TryOn { item: Some("3".to_string()) });

    let catalog = module.store.lock().unwrap().catalog().to_vec();
    module
        .flow
        .lock()
        .unwrap()
        .supply_photo("https://example.com/me.jpg", &catalog);
    module.spawn_render().expect("flow is ready to render");
    tokio::time::sleep(Duration::from_millis(100)).await;

    let flow = module.flow.lock().unwrap();
    assert_eq!(flow.stage(), TryOnStage::ResultShown);

    let store = module.store.lock().unwrap();
    let session = store.current_session().expect("a session was recorded");
    assert_eq!(session.item_id, "3");
    assert!(session.result_image_url.is_some());
}
