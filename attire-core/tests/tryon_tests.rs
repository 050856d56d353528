// tests/tryon_tests.rs

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use attire_common::Error;
use attire_common::models::ClothingItem;
use attire_core::catalog::seed_catalog;
use attire_core::services::tryon::{
    PlaceholderRenderer, RenderOutcome, TryOnFlow, TryOnRenderer, TryOnStage,
};

const PHOTO: &str = "https://example.com/me.jpeg";

/// Renderer that never sleeps and counts invocations.
#[derive(Default)]
struct CountingRenderer {
    calls: AtomicUsize,
}

#[async_trait]
impl TryOnRenderer for CountingRenderer {
    async fn render(&self, _photo: &str, item: &ClothingItem) -> Result<String, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(item.render_image().to_string())
    }
}

/// Renderer that waits long enough for a cancellation to win the race.
struct SlowRenderer;

#[async_trait]
impl TryOnRenderer for SlowRenderer {
    async fn render(&self, _photo: &str, item: &ClothingItem) -> Result<String, Error> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(item.render_image().to_string())
    }
}

#[tokio::test]
async fn full_flow_reaches_result_shown() -> Result<(), Error> {
    let catalog = seed_catalog();
    let mut flow = TryOnFlow::new();
    assert_eq!(flow.stage(), TryOnStage::AwaitingPhoto);

    flow.supply_photo(PHOTO, &catalog);
    assert_eq!(flow.stage(), TryOnStage::AwaitingSelection);

    flow.select_item(catalog[0].clone())?;
    assert_eq!(flow.stage(), TryOnStage::ReadyToRender);

    let renderer = PlaceholderRenderer::new(Duration::from_millis(0));
    let outcome = flow.try_on(&renderer, &CancellationToken::new()).await?;

    assert_eq!(flow.stage(), TryOnStage::ResultShown);
    assert!(!flow.is_processing());
    let expected = catalog[0].render_image().to_string();
    assert_eq!(outcome, RenderOutcome::Completed(expected.clone()));
    assert_eq!(flow.result_url(), Some(expected.as_str()));
    Ok(())
}

#[tokio::test]
async fn start_over_clears_everything() -> Result<(), Error> {
    let catalog = seed_catalog();
    let mut flow = TryOnFlow::new();
    flow.supply_photo(PHOTO, &catalog);
    flow.select_item(catalog[1].clone())?;
    let renderer = CountingRenderer::default();
    flow.try_on(&renderer, &CancellationToken::new()).await?;
    assert_eq!(flow.stage(), TryOnStage::ResultShown);

    flow.start_over();
    assert_eq!(flow.stage(), TryOnStage::AwaitingPhoto);
    assert!(flow.photo_url().is_none());
    assert!(flow.selected_item().is_none());
    assert!(flow.result_url().is_none());
    Ok(())
}

#[tokio::test]
async fn cancellation_leaves_the_flow_ready() -> Result<(), Error> {
    let catalog = seed_catalog();
    let mut flow = TryOnFlow::new();
    flow.supply_photo(PHOTO, &catalog);
    flow.select_item(catalog[0].clone())?;

    let cancel = CancellationToken::new();
    cancel.cancel();
    let outcome = flow.try_on(&SlowRenderer, &cancel).await?;

    assert_eq!(outcome, RenderOutcome::Cancelled);
    assert_eq!(flow.stage(), TryOnStage::ReadyToRender);
    assert!(!flow.is_processing());
    assert!(flow.result_url().is_none());
    Ok(())
}

#[test]
fn selecting_without_a_photo_is_refused() {
    let catalog = seed_catalog();
    let mut flow = TryOnFlow::new();
    let err = flow.select_item(catalog[0].clone()).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
    assert_eq!(flow.stage(), TryOnStage::AwaitingPhoto);
}

#[test]
fn begin_render_requires_ready_state() {
    let catalog = seed_catalog();
    let mut flow = TryOnFlow::new();
    assert!(flow.begin_render().is_err());

    flow.supply_photo(PHOTO, &catalog);
    assert!(flow.begin_render().is_err(), "no garment selected yet");
}

#[tokio::test]
async fn preselected_item_skips_the_selection_stage() -> Result<(), Error> {
    let catalog = seed_catalog();

    let mut flow = TryOnFlow::with_preselect("3");
    flow.supply_photo(PHOTO, &catalog);
    assert_eq!(flow.stage(), TryOnStage::ReadyToRender);
    assert_eq!(flow.selected_item().unwrap().id, "3");

    // an unknown preselect is dropped and the flow proceeds normally
    let mut flow = TryOnFlow::with_preselect("999");
    flow.supply_photo(PHOTO, &catalog);
    assert_eq!(flow.stage(), TryOnStage::AwaitingSelection);
    assert!(flow.selected_item().is_none());
    Ok(())
}

#[tokio::test]
async fn choose_different_item_keeps_the_photo() -> Result<(), Error> {
    let catalog = seed_catalog();
    let mut flow = TryOnFlow::new();
    flow.supply_photo(PHOTO, &catalog);
    flow.select_item(catalog[2].clone())?;
    flow.try_on(
        &PlaceholderRenderer::new(Duration::from_millis(0)),
        &CancellationToken::new(),
    )
    .await?;

    flow.choose_different_item();
    assert_eq!(flow.stage(), TryOnStage::AwaitingSelection);
    assert_eq!(flow.photo_url(), Some(PHOTO));
    assert!(flow.selected_item().is_none());
    assert!(flow.result_url().is_none());
    Ok(())
}
