// File: attire-tui/src/tui_module.rs

use std::sync::{Arc, Mutex};

use tokio_util::sync::CancellationToken;
use tracing::debug;

use attire_common::Error;
use attire_common::models::{Gender, Region};
use attire_core::services::shop::ShopFilter;
use attire_core::services::sizing::SizeChartSet;
use attire_core::services::tryon::{PlaceholderRenderer, TryOnFlow, TryOnRenderer};
use attire_core::{AppConfig, ClientStore};

use crate::route::Route;

/// Size-guide page view state: which chart is on screen.
#[derive(Debug, Clone, Copy)]
pub struct SizeGuideState {
    pub region: Region,
    pub gender: Gender,
}

impl Default for SizeGuideState {
    fn default() -> Self {
        Self {
            region: Region::SouthAsia,
            gender: Gender::Women,
        }
    }
}

/// Holds everything the command handlers touch: the store, the try-on flow,
/// the size charts, and per-page view state. Page view state is transient —
/// navigating off a page resets it, the store is the only thing that
/// carries over.
pub struct TuiModule {
    pub store: Arc<Mutex<ClientStore>>,
    pub flow: Arc<Mutex<TryOnFlow>>,
    pub charts: SizeChartSet,
    pub config: AppConfig,

    renderer: Arc<dyn TryOnRenderer>,
    route: Mutex<Route>,
    pub shop_filter: Mutex<ShopFilter>,
    pub size_guide: Mutex<SizeGuideState>,
    render_cancel: Mutex<Option<CancellationToken>>,
}

impl TuiModule {
    pub fn new(config: AppConfig) -> Result<Self, Error> {
        let renderer = Arc::new(PlaceholderRenderer::new(config.tryon_delay));
        Ok(Self {
            store: Arc::new(Mutex::new(ClientStore::new())),
            flow: Arc::new(Mutex::new(TryOnFlow::new())),
            charts: SizeChartSet::builtin()?,
            config,
            renderer,
            route: Mutex::new(Route::Home),
            shop_filter: Mutex::new(ShopFilter::default()),
            size_guide: Mutex::new(SizeGuideState::default()),
            render_cancel: Mutex::new(None),
        })
    }

    pub fn current_route(&self) -> Route {
        self.route.lock().unwrap().clone()
    }

    pub fn prompt_string(&self) -> String {
        format!("attire {}> ", self.current_route().path())
    }

    /// Moves to `route`, tearing down the page being left (view state is
    /// page-local) and applying the new route's query effects. An in-flight
    /// try-on render is cancelled the moment the try-on page is left.
    pub fn navigate(&self, route: Route) -> Route {
        let previous = {
            let mut current = self.route.lock().unwrap();
            std::mem::replace(&mut *current, route.clone())
        };
        debug!("navigate: {} -> {}", previous.path(), route.path());

        let leaving_tryon =
            matches!(previous, Route::TryOn { .. }) && !matches!(route, Route::TryOn { .. });
        if leaving_tryon {
            self.cancel_render();
            self.flow.lock().unwrap().start_over();
        }
        if matches!(previous, Route::Shop { .. } | Route::Product { .. })
            && !matches!(route, Route::Shop { .. } | Route::Product { .. })
        {
            *self.shop_filter.lock().unwrap() = ShopFilter::default();
        }
        if previous == Route::SizeGuide && route != Route::SizeGuide {
            *self.size_guide.lock().unwrap() = SizeGuideState::default();
        }

        match &route {
            Route::Shop { region: Some(region) } => {
                *self.shop_filter.lock().unwrap() = ShopFilter::for_region(*region);
                self.store.lock().unwrap().filter_items(None, Some(*region));
            }
            Route::Product { product_id } => {
                self.store.lock().unwrap().select_item(product_id);
            }
            Route::TryOn { item: Some(item_id) } => {
                self.flow.lock().unwrap().set_preselect(item_id);
            }
            _ => {}
        }
        route
    }

    /// Kicks off a render in the background and returns right away, so the
    /// prompt stays responsive during the simulated processing delay. The
    /// task re-checks nothing on completion besides the cancellation token;
    /// the flow and store are only touched once the race is decided.
    pub fn spawn_render(&self) -> Result<(), Error> {
        let (photo, item) = self.flow.lock().unwrap().begin_render()?;

        // Session history is only recorded for signed-in users.
        {
            let mut store = self.store.lock().unwrap();
            if let Some(user_id) = store.current_user().map(|u| u.user_id) {
                store.start_try_on_session(user_id, &item.id);
            }
        }

        let token = CancellationToken::new();
        *self.render_cancel.lock().unwrap() = Some(token.clone());

        let flow = Arc::clone(&self.flow);
        let store = Arc::clone(&self.store);
        let renderer = Arc::clone(&self.renderer);
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    flow.lock().unwrap().abort_render();
                    debug!("render cancelled by navigation");
                }
                rendered = renderer.render(&photo, &item) => match rendered {
                    Ok(url) => {
                        flow.lock().unwrap().complete_render(&url);
                        store.lock().unwrap().save_try_on_result(&url);
                        println!(
                            "\n(try-on) Your result for '{}' is ready. Type 'tryon' to see it.",
                            item.name
                        );
                    }
                    Err(e) => {
                        flow.lock().unwrap().abort_render();
                        eprintln!("(try-on) Render failed => {:?}", e);
                    }
                }
            }
        });
        Ok(())
    }

    /// Cancels a pending render, if any.
    pub fn cancel_render(&self) {
        if let Some(token) = self.render_cancel.lock().unwrap().take() {
            token.cancel();
        }
    }
}
