use chrono::NaiveDate;
use serde::Deserialize;
use url::Url;

use super::{endpoint, fetch, segment};
use crate::error::UpstreamError;
use crate::ports::http::UpstreamHttp;

pub const SERVICE: &str = "backend";

/// Every backend response wraps its records in `data`.
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankRecord {
    pub end_date: NaiveDate,
    pub rank: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaRecord {
    pub url: String,
    pub caption: String,
    pub thumbnail: String,
}

/// Endpoint: `GET /songs/{id}/ranks`
pub async fn get_song_ranks(
    http: &dyn UpstreamHttp,
    base_url: &Url,
    song_id: &str,
) -> Result<Vec<RankRecord>, UpstreamError> {
    let url = endpoint(base_url, &format!("songs/{}/ranks", segment(song_id)?))?;
    let envelope: DataEnvelope<RankRecord> = fetch(http, &url, SERVICE).await?;
    Ok(envelope.data)
}

/// Endpoint: `GET /songs/{id}/media`
pub async fn get_song_media(
    http: &dyn UpstreamHttp,
    base_url: &Url,
    song_id: &str,
) -> Result<Vec<MediaRecord>, UpstreamError> {
    let url = endpoint(base_url, &format!("songs/{}/media", segment(song_id)?))?;
    let envelope: DataEnvelope<MediaRecord> = fetch(http, &url, SERVICE).await?;
    Ok(envelope.data)
}
