mod client;
mod error;
mod volumes;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use volumes::{SearchRequest, SearchResponse, VolumeRequest};

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

/// Public Google Books endpoint, used when no catalog URL is configured
pub const DEFAULT_CATALOG_URL: &str = "https://www.googleapis.com/books/v1";

/// A single read-only query against the catalog.
///  Each request knows how to address itself relative to
///  the catalog base URL and what shape it expects back.
pub trait CatalogRequest {
    type Response: DeserializeOwned;

    fn build_request(self, base_url: &Url, client: &Client) -> Result<RequestBuilder, CatalogError>;
}
