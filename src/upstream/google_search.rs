use serde::Deserialize;
use url::Url;

use super::{endpoint, fetch};
use crate::config::ImageSearchConfig;
use crate::error::UpstreamError;
use crate::ports::http::UpstreamHttp;

pub const SERVICE: &str = "image search";

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Absent when the query has no hits.
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchItem {
    pub title: String,
    pub snippet: String,
    pub image: SearchImage,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchImage {
    pub context_link: String,
    pub thumbnail_link: String,
}

/// Run a PNG image search.
///
/// Endpoint: `GET /customsearch/v1?q=..&key=..&cx=..&num=..&imgType=png&searchType=image`
///
/// At most `settings.limit` hits come back; the provider enforces the cap.
pub async fn search_images(
    http: &dyn UpstreamHttp,
    base_url: &Url,
    settings: &ImageSearchConfig,
    query: &str,
) -> Result<Vec<SearchItem>, UpstreamError> {
    let mut url = endpoint(base_url, "customsearch/v1")?;
    url.query_pairs_mut()
        .append_pair("q", query)
        .append_pair("key", &settings.api_key)
        .append_pair("cx", &settings.engine_id)
        .append_pair("num", &settings.limit.to_string())
        .append_pair("imgType", "png")
        .append_pair("searchType", "image");

    let response: SearchResponse = fetch(http, &url, SERVICE).await?;
    Ok(response.items)
}
