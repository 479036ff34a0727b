//! Application state shared by every handler: the catalog, the design generator,
//! and the prompt suggestions.
//!
//! Everything in here is read-only after startup. Per-client view state lives in
//! `Session`, owned by the WebSocket task.

use std::sync::Arc;
use tracing::{info, instrument};

use crate::catalog::Catalog;
use crate::config::load_studio_config_from_env;
use crate::generator::{DesignGenerator, MockGenerator};
use crate::seeds::{seed_generated_samples, PROMPT_SUGGESTIONS};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub generator: Arc<dyn DesignGenerator>,
    pub prompt_suggestions: Vec<String>,
}

impl AppState {
    /// Build state from env: load config, merge the catalog, set up the generator.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        let cfg = load_studio_config_from_env().unwrap_or_default();

        let catalog = Catalog::from_config(&cfg);

        let generator = MockGenerator::from_config(&cfg.generator, seed_generated_samples());
        info!(target: "rangoli_studio", delay_ms = generator.delay().as_millis() as u64, "Mock design generator enabled.");

        let prompt_suggestions = if cfg.prompt_suggestions.is_empty() {
            PROMPT_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
        } else {
            cfg.prompt_suggestions.clone()
        };

        Self::with_parts(catalog, Arc::new(generator), prompt_suggestions)
    }

    pub fn with_parts(
        catalog: Catalog,
        generator: Arc<dyn DesignGenerator>,
        prompt_suggestions: Vec<String>,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            generator,
            prompt_suggestions,
        }
    }
}
