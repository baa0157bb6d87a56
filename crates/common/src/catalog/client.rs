use reqwest::{header::HeaderMap, header::HeaderValue, Client, StatusCode};
use serde_json::Value;
use url::Url;

use super::error::CatalogError;
use super::volumes::{SearchRequest, VolumeRequest};
use super::{CatalogRequest, DEFAULT_CATALOG_URL};

/// Read-only client for the remote book catalog.
///  Holds no mutable state; clones share the underlying
///  connection pool and concurrent calls are independent.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    pub remote: Url,
    client: Client,
}

impl CatalogClient {
    pub fn new(remote: &Url) -> Result<Self, CatalogError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert("Accept", HeaderValue::from_static("application/json"));
        let client = Client::builder().default_headers(default_headers).build()?;

        Ok(Self {
            remote: remote.clone(),
            client,
        })
    }

    /// Client pointed at the public Google Books API
    pub fn google_books() -> Result<Self, CatalogError> {
        Self::new(&Url::parse(DEFAULT_CATALOG_URL)?)
    }

    /// Send a single request, exactly once.
    ///  Success bodies are decoded into the request's response type;
    ///  anything else is reported with the status and the raw body.
    pub async fn call<T: CatalogRequest>(&self, request: T) -> Result<T::Response, CatalogError> {
        let request = request.build_request(&self.remote, &self.client)?.build()?;
        tracing::debug!(method = %request.method(), url = %request.url(), "catalog request");

        let response = self.client.execute(request).await?;
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            Ok(serde_json::from_slice::<T::Response>(&body)?)
        } else if status == StatusCode::NOT_FOUND {
            Err(CatalogError::NotFound(response.text().await?))
        } else {
            Err(CatalogError::HttpStatus(status, response.text().await?))
        }
    }

    /// Fetch a single volume, keeping the reason for any failure
    pub async fn try_fetch_detail(&self, id: &str) -> Result<Value, CatalogError> {
        self.call(VolumeRequest { id: id.to_string() }).await
    }

    /// Search volumes, keeping the reason for any failure
    pub async fn try_search(&self, query: &str) -> Result<Vec<Value>, CatalogError> {
        let response = self
            .call(SearchRequest {
                query: query.to_string(),
            })
            .await?;
        Ok(response.into_items())
    }

    /// Fetch a single volume by id.
    ///  Returns the body exactly as the catalog sent it, or `None`
    ///  on any failure (which is logged, never returned).
    pub async fn fetch_detail(&self, id: &str) -> Option<Value> {
        match self.try_fetch_detail(id).await {
            Ok(detail) => Some(detail),
            Err(e) => {
                e.report("Failed to fetch book details");
                None
            }
        }
    }

    /// Search volumes by free text.
    ///  Returns the `items` list, or an empty list when the field
    ///  is absent or anything fails (failures are logged).
    pub async fn search(&self, query: &str) -> Vec<Value> {
        match self.try_search(query).await {
            Ok(items) => items,
            Err(e) => {
                e.report("Failed to fetch books");
                Vec::new()
            }
        }
    }

    /// Get the base URL for catalog requests
    pub fn base_url(&self) -> &Url {
        &self.remote
    }
}
