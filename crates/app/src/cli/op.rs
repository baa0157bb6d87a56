use std::error::Error;
use std::path::PathBuf;

use url::Url;

use common::prelude::{CatalogClient, CatalogError};
use shelf::state::AppState;

/// Resolve the catalog base URL.
///
/// Priority: explicit `--catalog-url` flag > config file `catalog_url` > Google Books.
pub fn resolve_catalog_url(explicit: Option<Url>, config_path: Option<PathBuf>) -> Url {
    if let Some(url) = explicit {
        return url;
    }
    match AppState::load_or_default(config_path) {
        Ok(state) => state.config.catalog_url,
        Err(e) => {
            tracing::warn!(error = %e, "could not load config, using the default catalog");
            shelf::AppConfig::default().catalog_url
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::prelude::DEFAULT_CATALOG_URL;

    #[test]
    fn test_resolve_catalog_url_explicit_wins() {
        let explicit = Url::parse("http://example.com:9999/books/v1").unwrap();
        let result = resolve_catalog_url(Some(explicit.clone()), None);
        assert_eq!(result, explicit);
    }

    #[test]
    fn test_resolve_catalog_url_from_config() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let dir = temp_dir.path().join("shelf");
        let config = shelf::AppConfig {
            catalog_url: Url::parse("http://localhost:8088/books/v1").unwrap(),
        };
        AppState::init(Some(dir.clone()), Some(config.clone())).unwrap();

        assert_eq!(resolve_catalog_url(None, Some(dir)), config.catalog_url);
    }

    #[test]
    fn test_resolve_catalog_url_falls_back_to_default() {
        // No explicit URL, no initialized config → Google Books
        let result = resolve_catalog_url(None, Some(PathBuf::from("/nonexistent")));
        assert_eq!(result.as_str(), DEFAULT_CATALOG_URL);
    }
}

#[derive(Clone)]
pub struct OpContext {
    /// Catalog client (always initialized with default or custom URL)
    pub catalog: CatalogClient,
    /// Optional custom config path (defaults to ~/.shelf)
    pub config_path: Option<PathBuf>,
}

impl OpContext {
    /// Create context with custom catalog URL and optional config path
    pub fn new(catalog_url: Url, config_path: Option<PathBuf>) -> Result<Self, CatalogError> {
        Ok(Self {
            catalog: CatalogClient::new(&catalog_url)?,
            config_path,
        })
    }
}

#[async_trait::async_trait]
pub trait Op: Send + Sync {
    type Error: Error + Send + Sync + 'static;
    type Output;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error>;
}

#[macro_export]
macro_rules! command_enum {
    ($(($variant:ident, $type:ty)),* $(,)?) => {
        #[derive(Subcommand, Debug, Clone)]
        pub enum Command {
            $($variant($type),)*
        }

        #[derive(Debug)]
        pub enum OpOutput {
            $($variant(<$type as $crate::cli::op::Op>::Output),)*
        }

        #[derive(Debug, thiserror::Error)]
        pub enum OpError {
            $(
                #[error(transparent)]
                $variant(<$type as $crate::cli::op::Op>::Error),
            )*
        }

        #[async_trait::async_trait]
        impl $crate::cli::op::Op for Command {
            type Output = OpOutput;
            type Error = OpError;

            async fn execute(&self, ctx: &$crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
                match self {
                    $(
                        Command::$variant(op) => {
                            op.execute(ctx).await
                                .map(OpOutput::$variant)
                                .map_err(OpError::$variant)
                        },
                    )*
                }
            }
        }

        impl std::fmt::Display for OpOutput {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        OpOutput::$variant(output) => write!(f, "{}", output),
                    )*
                }
            }
        }
    };
}
