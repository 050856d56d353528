// File: attire-core/src/config.rs

use std::env;
use std::time::Duration;

const DEFAULT_TRYON_DELAY_MS: u64 = 3000;
const DEFAULT_CAMERA_PHOTO_URL: &str =
    "https://images.pexels.com/photos/1036623/pexels-photo-1036623.jpeg";
const DEFAULT_POST_IMAGE_URL: &str =
    "https://images.pexels.com/photos/2531734/pexels-photo-2531734.jpeg";

/// Runtime knobs for the application session. Everything has a sensible
/// default; the environment (or a `.env` file loaded by the binary) can
/// override.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Simulated processing time for the stand-in try-on renderer.
    pub tryon_delay: Duration,
    /// Placeholder used when the "take a photo" path is chosen, since no
    /// camera exists here.
    pub camera_photo_url: String,
    /// Fallback image attached to community posts created without one.
    pub post_image_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tryon_delay: Duration::from_millis(DEFAULT_TRYON_DELAY_MS),
            camera_photo_url: DEFAULT_CAMERA_PHOTO_URL.to_string(),
            post_image_url: DEFAULT_POST_IMAGE_URL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(ms) = env::var("ATTIRE_TRYON_DELAY_MS") {
            if let Ok(ms) = ms.parse::<u64>() {
                cfg.tryon_delay = Duration::from_millis(ms);
            } else {
                tracing::warn!("Ignoring unparseable ATTIRE_TRYON_DELAY_MS='{}'", ms);
            }
        }
        if let Ok(url) = env::var("ATTIRE_CAMERA_PHOTO_URL") {
            cfg.camera_photo_url = url;
        }
        if let Ok(url) = env::var("ATTIRE_POST_IMAGE_URL") {
            cfg.post_image_url = url;
        }
        cfg
    }
}
