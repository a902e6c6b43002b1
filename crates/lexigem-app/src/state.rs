use std::sync::Arc;

use lexigem_config::Config;
use lexigem_config::generator::{API_KEY_VAR, GeneratorConfig};
use lexigem_core::prompt::PromptCatalog;
use lexigem_generator::{GeminiGenerator, Generator};

use crate::page::Pages;
use crate::service::DefinitionService;

/// Read-only after startup; shared by every request
pub struct AppState {
    pub service: DefinitionService,
    pub pages: Pages,
}

impl AppState {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Self::with_generator(init_generator(&config.generator))
    }

    pub fn with_generator(generator: Option<Arc<dyn Generator>>) -> anyhow::Result<Self> {
        Ok(Self {
            service: DefinitionService::new(generator, PromptCatalog::builtin()),
            pages: Pages::new()?,
        })
    }
}

/// Build the generation client. Any problem is logged and leaves the
/// service unconfigured instead of stopping the process.
fn init_generator(config: &GeneratorConfig) -> Option<Arc<dyn Generator>> {
    let Some(api_key) = config.api_key.clone() else {
        tracing::error!("Error configuring Generative AI: {API_KEY_VAR} is not set");
        return None;
    };

    match GeminiGenerator::new(
        api_key,
        config.api_url.clone(),
        config.model.clone(),
        config.timeout,
    ) {
        Ok(generator) => {
            let metadata = generator.metadata();
            tracing::info!(provider = %metadata.name, model = %metadata.model, "generator configured");
            Some(Arc::new(generator))
        }
        Err(e) => {
            tracing::error!("Error configuring Generative AI: {e}");
            None
        }
    }
}
