use chrono::NaiveDate;
use serde::Serialize;

/// A song merged from the chart lookup, the streaming track and its album.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub album_name: String,
    pub release_date: NaiveDate,
    pub duration_ms: u64,
    pub external_url: String,
    pub cover_image_url: String,
}
