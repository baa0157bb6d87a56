use clap::Args;
use common::prelude::CatalogError;

#[derive(Args, Debug, Clone)]
pub struct Show {
    /// Catalog volume ID
    pub id: String,

    /// Report catalog failures as errors instead of an empty result
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum BookShowError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Show {
    type Error = BookShowError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let detail = if self.strict {
            Some(ctx.catalog.try_fetch_detail(&self.id).await?)
        } else {
            ctx.catalog.fetch_detail(&self.id).await
        };

        match detail {
            Some(detail) => Ok(serde_json::to_string_pretty(&detail)?),
            None => Ok("No book found".to_string()),
        }
    }
}
