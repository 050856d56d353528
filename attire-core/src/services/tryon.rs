// File: attire-core/src/services/tryon.rs
//
// The virtual try-on flow: a four-stage linear state machine plus the
// renderer seam. No real image synthesis happens anywhere; the placeholder
// renderer sleeps for a configured delay and hands back the garment's model
// shot. Rendering races a cancellation token so that navigating away while
// "processing" never mutates state afterwards.

use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use attire_common::Error;
use attire_common::models::ClothingItem;

/// Where the user is in the flow. Strictly linear; `start_over` is the only
/// way back to the beginning.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TryOnStage {
    AwaitingPhoto,
    AwaitingSelection,
    ReadyToRender,
    ResultShown,
}

/// How a render attempt ended.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    Completed(String),
    Cancelled,
}

/// Produces a try-on image for a photo/garment pair.
#[async_trait]
pub trait TryOnRenderer: Send + Sync {
    async fn render(&self, user_photo_url: &str, item: &ClothingItem) -> Result<String, Error>;
}

/// Stand-in renderer: waits out a fixed simulated processing delay, then
/// returns the item's model image unchanged.
pub struct PlaceholderRenderer {
    delay: Duration,
}

impl PlaceholderRenderer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl TryOnRenderer for PlaceholderRenderer {
    async fn render(&self, _user_photo_url: &str, item: &ClothingItem) -> Result<String, Error> {
        tokio::time::sleep(self.delay).await;
        Ok(item.render_image().to_string())
    }
}

pub struct TryOnFlow {
    stage: TryOnStage,
    photo_url: Option<String>,
    selected: Option<ClothingItem>,
    result_url: Option<String>,
    processing: bool,
    /// Item id carried in from a `?item=` link; consumed once a photo
    /// arrives.
    preselect: Option<String>,
}

impl TryOnFlow {
    pub fn new() -> Self {
        Self {
            stage: TryOnStage::AwaitingPhoto,
            photo_url: None,
            selected: None,
            result_url: None,
            processing: false,
            preselect: None,
        }
    }

    /// Flow entered through a link that names a garment up front.
    pub fn with_preselect(item_id: &str) -> Self {
        let mut flow = Self::new();
        flow.preselect = Some(item_id.to_string());
        flow
    }

    /// Remembers a garment to auto-select once a photo arrives.
    pub fn set_preselect(&mut self, item_id: &str) {
        self.preselect = Some(item_id.to_string());
    }

    pub fn stage(&self) -> TryOnStage {
        self.stage
    }

    pub fn photo_url(&self) -> Option<&str> {
        self.photo_url.as_deref()
    }

    pub fn selected_item(&self) -> Option<&ClothingItem> {
        self.selected.as_ref()
    }

    pub fn result_url(&self) -> Option<&str> {
        self.result_url.as_deref()
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    /// Supplies (or replaces) the user photo and moves past the first stage.
    /// If the flow carries a preselected item id that resolves against
    /// `catalog`, the selection stage is skipped as well.
    pub fn supply_photo(&mut self, url: &str, catalog: &[ClothingItem]) {
        self.photo_url = Some(url.to_string());
        if self.stage == TryOnStage::AwaitingPhoto {
            self.stage = TryOnStage::AwaitingSelection;
        }
        if let Some(id) = self.preselect.take() {
            if let Some(item) = catalog.iter().find(|i| i.id == id) {
                debug!("preselected item {} from link", id);
                self.selected = Some(item.clone());
                self.stage = TryOnStage::ReadyToRender;
            } else {
                debug!("preselected item {} not in catalog, ignoring", id);
            }
        }
    }

    /// Picks the garment to try on. Requires a photo.
    pub fn select_item(&mut self, item: ClothingItem) -> Result<(), Error> {
        if self.photo_url.is_none() {
            return Err(Error::InvalidInput(
                "A photo is needed before selecting clothing".to_string(),
            ));
        }
        self.selected = Some(item);
        self.result_url = None;
        self.stage = TryOnStage::ReadyToRender;
        Ok(())
    }

    /// Back to the selection grid, keeping the photo.
    pub fn choose_different_item(&mut self) {
        if self.photo_url.is_some() {
            self.selected = None;
            self.result_url = None;
            self.stage = TryOnStage::AwaitingSelection;
        }
    }

    /// Discards photo, selection and result.
    pub fn start_over(&mut self) {
        *self = Self::new();
    }

    /// Marks the flow as processing and returns the inputs a renderer needs.
    /// Errors unless the flow is ready and not already rendering.
    pub fn begin_render(&mut self) -> Result<(String, ClothingItem), Error> {
        if self.processing {
            return Err(Error::InvalidInput("A render is already running".to_string()));
        }
        if self.stage != TryOnStage::ReadyToRender {
            return Err(Error::InvalidInput(
                "Need a photo and a selected garment before trying on".to_string(),
            ));
        }
        let (Some(photo), Some(item)) = (self.photo_url.clone(), self.selected.clone()) else {
            return Err(Error::InvalidInput(
                "Need a photo and a selected garment before trying on".to_string(),
            ));
        };
        self.processing = true;
        Ok((photo, item))
    }

    /// Stores the rendered image and shows the result.
    pub fn complete_render(&mut self, result_url: &str) {
        self.processing = false;
        self.result_url = Some(result_url.to_string());
        self.stage = TryOnStage::ResultShown;
    }

    /// Clears the processing flag without touching anything else; the flow
    /// stays at `ReadyToRender`.
    pub fn abort_render(&mut self) {
        self.processing = false;
    }

    /// Runs one render attempt against `renderer`, racing `cancel`. On
    /// cancellation no state changes beyond clearing the processing flag.
    pub async fn try_on<R>(
        &mut self,
        renderer: &R,
        cancel: &CancellationToken,
    ) -> Result<RenderOutcome, Error>
    where
        R: TryOnRenderer + ?Sized,
    {
        let (photo, item) = self.begin_render()?;
        tokio::select! {
            _ = cancel.cancelled() => {
                debug!("render cancelled for item {}", item.id);
                self.abort_render();
                Ok(RenderOutcome::Cancelled)
            }
            rendered = renderer.render(&photo, &item) => match rendered {
                Ok(url) => {
                    self.complete_render(&url);
                    Ok(RenderOutcome::Completed(url))
                }
                Err(e) => {
                    self.abort_render();
                    Err(e)
                }
            }
        }
    }
}

impl Default for TryOnFlow {
    fn default() -> Self {
        Self::new()
    }
}
