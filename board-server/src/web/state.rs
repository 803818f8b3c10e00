//! Application state for the web layer.

use std::sync::Arc;

use crate::board::{QuadrantConfig, QuadrantConfigError};
use crate::cache::CachedVbbClient;
use crate::config::AppConfig;
use crate::render::Fonts;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Cached VBB API client
    pub vbb: Arc<CachedVbbClient>,

    /// Application configuration
    pub config: Arc<AppConfig>,

    /// Validated quadrant layout for the display
    pub quadrants: Arc<QuadrantConfig>,

    /// Loaded display fonts
    pub fonts: Arc<Fonts>,
}

impl AppState {
    /// Create a new app state. Validates the quadrant layout and loads the
    /// display fonts up front.
    pub fn new(vbb: CachedVbbClient, config: AppConfig) -> Result<Self, QuadrantConfigError> {
        let quadrants = config.quadrant_config()?;
        let fonts = Fonts::load(config.display.font_path.as_deref());
        Ok(Self {
            vbb: Arc::new(vbb),
            config: Arc::new(config),
            quadrants: Arc::new(quadrants),
            fonts: Arc::new(fonts),
        })
    }
}
