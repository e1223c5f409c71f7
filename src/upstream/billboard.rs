use chrono::NaiveDate;
use serde::Deserialize;
use url::Url;

use super::{endpoint, fetch, segment};
use crate::error::UpstreamError;
use crate::ports::http::UpstreamHttp;

pub const SERVICE: &str = "chart service";

/// One row of `GET /charts/{date}?filter=song`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartRow {
    pub rank: u32,
    pub song_id: String,
    pub song_name: String,
    pub display_artist: String,
}

/// Response of `GET /music/song/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SongLookup {
    pub song: SongSummary,
    #[serde(default)]
    pub rankings: Vec<RankingRow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SongSummary {
    pub song_id: String,
    pub song_name: String,
    pub display_artist: String,
    /// Cross-reference into the streaming service. Not every charted song has one.
    #[serde(default)]
    pub spotify_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RankingRow {
    pub date: NaiveDate,
    pub rank: u32,
}

/// Fetch the song chart published on `date`.
///
/// Endpoint: `GET /charts/{date}?filter=song`
///
/// The date is passed through untouched; the chart service decides whether
/// it names a real chart. A `null` body is read as an empty chart.
pub async fn get_chart(
    http: &dyn UpstreamHttp,
    base_url: &Url,
    date: &str,
) -> Result<Vec<ChartRow>, UpstreamError> {
    let mut url = endpoint(base_url, &format!("charts/{}", segment(date)?))?;
    url.query_pairs_mut().append_pair("filter", "song");

    let rows: Option<Vec<ChartRow>> = fetch(http, &url, SERVICE).await?;
    Ok(rows.unwrap_or_default())
}

/// Look a song up by its chart id.
///
/// Endpoint: `GET /music/song/{id}`
pub async fn get_song(
    http: &dyn UpstreamHttp,
    base_url: &Url,
    song_id: &str,
) -> Result<SongLookup, UpstreamError> {
    let url = endpoint(base_url, &format!("music/song/{}", segment(song_id)?))?;
    fetch(http, &url, SERVICE).await
}
