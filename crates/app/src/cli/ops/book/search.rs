use clap::Args;
use common::prelude::CatalogError;
use serde_json::Value;

#[derive(Args, Debug, Clone)]
pub struct Search {
    /// Search terms, joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Report catalog failures as errors instead of an empty result
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum BookSearchError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Search {
    type Error = BookSearchError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let query = self.query.join(" ");
        let items = if self.strict {
            ctx.catalog.try_search(&query).await?
        } else {
            ctx.catalog.search(&query).await
        };

        if items.is_empty() {
            Ok("No books found".to_string())
        } else {
            Ok(items.iter().map(summarize).collect::<Vec<_>>().join("\n"))
        }
    }
}

/// One line per volume: `id  title by authors`.
///  Volumes are opaque documents, so every field is optional here.
fn summarize(item: &Value) -> String {
    let id = item.get("id").and_then(Value::as_str).unwrap_or("-");
    let info = item.get("volumeInfo");
    let title = info
        .and_then(|info| info.get("title"))
        .and_then(Value::as_str)
        .unwrap_or("(untitled)");
    let authors = info
        .and_then(|info| info.get("authors"))
        .and_then(Value::as_array)
        .map(|authors| {
            authors
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default();

    if authors.is_empty() {
        format!("{}  {}", id, title)
    } else {
        format!("{}  {} by {}", id, title, authors)
    }
}
