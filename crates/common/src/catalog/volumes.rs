use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{CatalogError, CatalogRequest};

const VOLUMES_SEGMENT: &str = "volumes";

/// Fetch one volume by its catalog identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeRequest {
    pub id: String,
}

/// Free-text search over volumes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
}

/// The one field of a search result we look at.
///  A missing or `null` list means no results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Option<Vec<Value>>,
}

impl SearchResponse {
    pub fn into_items(self) -> Vec<Value> {
        self.items.unwrap_or_default()
    }
}

/// `{base}/volumes`, plus one more segment if given.
///  The id is pushed as a single segment so that reserved
///  characters get percent-encoded instead of reshaping the path.
fn volumes_url(base_url: &Url, id: Option<&str>) -> Result<Url, CatalogError> {
    let mut url = base_url.clone();
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| CatalogError::CannotBeABase(base_url.to_string()))?;
        segments.pop_if_empty().push(VOLUMES_SEGMENT);
        if let Some(id) = id {
            segments.push(id);
        }
    }
    Ok(url)
}

impl CatalogRequest for VolumeRequest {
    type Response = Value;

    fn build_request(self, base_url: &Url, client: &Client) -> Result<RequestBuilder, CatalogError> {
        let full_url = volumes_url(base_url, Some(&self.id))?;
        Ok(client.get(full_url))
    }
}

impl CatalogRequest for SearchRequest {
    type Response = SearchResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> Result<RequestBuilder, CatalogError> {
        let mut full_url = volumes_url(base_url, None)?;
        full_url.query_pairs_mut().append_pair("q", &self.query);
        Ok(client.get(full_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://www.googleapis.com/books/v1").unwrap()
    }

    #[test]
    fn test_volume_url() {
        let url = volumes_url(&base(), Some("abc123")).unwrap();
        assert_eq!(url.as_str(), "https://www.googleapis.com/books/v1/volumes/abc123");
    }

    #[test]
    fn test_volume_url_with_trailing_slash_base() {
        let base = Url::parse("http://127.0.0.1:8080/").unwrap();
        let url = volumes_url(&base, Some("abc123")).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/volumes/abc123");
    }

    #[test]
    fn test_volume_id_is_a_single_segment() {
        let url = volumes_url(&base(), Some("a/b c")).unwrap();
        assert_eq!(url.path(), "/books/v1/volumes/a%2Fb%20c");
    }

    #[test]
    fn test_search_query_is_encoded() {
        let client = Client::new();
        let request = SearchRequest {
            query: "rust & friends".to_string(),
        }
        .build_request(&base(), &client)
        .unwrap()
        .build()
        .unwrap();

        let url = request.url();
        assert_eq!(url.path(), "/books/v1/volumes");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs, vec![("q".to_string(), "rust & friends".to_string())]);
    }

    #[test]
    fn test_cannot_be_a_base() {
        let base = Url::parse("mailto:books@example.com").unwrap();
        assert!(matches!(
            volumes_url(&base, None),
            Err(CatalogError::CannotBeABase(_))
        ));
    }

    #[test]
    fn test_search_response_without_items() {
        let response: SearchResponse = serde_json::from_str(r#"{"totalItems":0}"#).unwrap();
        assert!(response.into_items().is_empty());

        let response: SearchResponse = serde_json::from_str(r#"{"items":null}"#).unwrap();
        assert!(response.into_items().is_empty());
    }
}
