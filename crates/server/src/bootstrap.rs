use std::sync::Arc;

use axum::Router;
use thiserror::Error;
use tracing::info;
use wardrobe_core::config::{AppConfig, ConfigError};
use wardrobe_core::OutfitEngine;

use crate::{health, outfits};

pub struct Application {
    pub config: AppConfig,
    pub engine: Arc<OutfitEngine>,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("style guide could not be loaded: {0}")]
    StyleGuide(#[source] ConfigError),
}

pub fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );

    let engine = config.build_engine().map_err(BootstrapError::StyleGuide)?;
    info!(
        event_name = "system.bootstrap.style_guide_loaded",
        correlation_id = "bootstrap",
        base_colors = engine.scorer().palette().len(),
        max_suggestions = engine.limits().max_suggestions,
        custom = config.suggestions.style_guide_path.is_some(),
        "style guide loaded"
    );

    Ok(Application { config, engine: Arc::new(engine) })
}

impl Application {
    pub fn router(&self) -> Router {
        Router::new().merge(health::router(self.engine.clone())).merge(outfits::router(
            outfits::OutfitState::new(self.engine.clone(), self.config.suggestions.outerwear_seed),
        ))
    }
}
