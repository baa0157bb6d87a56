use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid response body: {0}")]
    InvalidResponse(#[from] serde_json::Error),
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
    #[error("catalog URL cannot be a base: {0}")]
    CannotBeABase(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("HTTP status {0}: {1}")]
    HttpStatus(StatusCode, String),
}

impl CatalogError {
    /// Log the failure the way the collapsing API reports it.
    ///  Rejection bodies are logged as compact JSON when they parse,
    ///  and verbatim otherwise.
    pub(crate) fn report(&self, context: &str) {
        match self {
            CatalogError::NotFound(body) => {
                tracing::error!(
                    status = %StatusCode::NOT_FOUND,
                    body = %diagnostic_body(body),
                    "{}",
                    context
                );
            }
            CatalogError::HttpStatus(status, body) => {
                tracing::error!(status = %status, body = %diagnostic_body(body), "{}", context);
            }
            other => {
                tracing::error!(error = %other, "{}", context);
            }
        }
    }
}

fn diagnostic_body(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .map(|value| value.to_string())
        .unwrap_or_else(|_| body.to_string())
}
