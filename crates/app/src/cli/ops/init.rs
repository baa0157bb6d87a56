use clap::Args;
use url::Url;

use shelf::state::{AppConfig, AppState, StateError};

#[derive(Args, Debug, Clone)]
pub struct Init {
    /// Catalog base URL to store in config.toml (defaults to Google Books)
    #[arg(long = "with-catalog-url")]
    pub with_catalog_url: Option<Url>,
}

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("init failed: {0}")]
    StateFailed(#[from] StateError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Init {
    type Error = InitError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let config = match &self.with_catalog_url {
            Some(catalog_url) => AppConfig {
                catalog_url: catalog_url.clone(),
            },
            None => AppConfig::default(),
        };

        let state = AppState::init(ctx.config_path.clone(), Some(config))?;

        let output = format!(
            "Initialized shelf directory at: {}\n\
             - Config: {}\n\
             - Session: {}\n\
             - Catalog URL: {}",
            state.shelf_dir.display(),
            state.config_path.display(),
            state.session_path.display(),
            state.config.catalog_url,
        );

        Ok(output)
    }
}
