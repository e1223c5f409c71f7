use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Deserialize;
use url::Url;

use super::{endpoint, fetch, segment};
use crate::error::UpstreamError;
use crate::ports::http::UpstreamHttp;

pub const SERVICE: &str = "streaming service";

/// Key of the provider's own link inside `external_urls`.
pub const EXTERNAL_URL_PROVIDER: &str = "spotify";

/// Response of `GET /tracks/{id}`, trimmed to the fields we read.
#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyTrack {
    pub duration_ms: u64,
    #[serde(default)]
    pub external_urls: HashMap<String, String>,
    pub album: SpotifyAlbumRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyAlbumRef {
    pub id: String,
}

/// Response of `GET /albums/{id}`, trimmed to the fields we read.
#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyAlbum {
    pub name: String,
    pub release_date: String,
    #[serde(default)]
    pub release_date_precision: Option<String>,
    #[serde(default)]
    pub images: Vec<SpotifyImage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyImage {
    pub url: String,
}

impl SpotifyAlbum {
    /// Parse `release_date`, widening `YYYY-MM` and `YYYY` to the first day
    /// of that month or year.
    pub fn parsed_release_date(&self) -> Option<NaiveDate> {
        parse_release_date(&self.release_date, self.release_date_precision.as_deref())
    }

    /// Cover art is the first entry of `images`; the service lists them largest first.
    pub fn cover_image_url(&self) -> Option<&str> {
        self.images
            .first()
            .map(|image| image.url.as_str())
            .filter(|url| !url.is_empty())
    }
}

fn parse_release_date(raw: &str, precision: Option<&str>) -> Option<NaiveDate> {
    let padded = match precision {
        Some("year") => format!("{}-01-01", raw),
        Some("month") => format!("{}-01", raw),
        Some(_) => raw.to_string(),
        // Precision is omitted by some mirrors of the API, so guess from the shape.
        None => match raw.len() {
            4 => format!("{}-01-01", raw),
            7 => format!("{}-01", raw),
            _ => raw.to_string(),
        },
    };
    NaiveDate::parse_from_str(&padded, "%Y-%m-%d").ok()
}

/// Endpoint: `GET /tracks/{id}`
pub async fn get_track(
    http: &dyn UpstreamHttp,
    base_url: &Url,
    track_id: &str,
) -> Result<SpotifyTrack, UpstreamError> {
    let url = endpoint(base_url, &format!("tracks/{}", segment(track_id)?))?;
    fetch(http, &url, SERVICE).await
}

/// Endpoint: `GET /albums/{id}`
pub async fn get_album(
    http: &dyn UpstreamHttp,
    base_url: &Url,
    album_id: &str,
) -> Result<SpotifyAlbum, UpstreamError> {
    let url = endpoint(base_url, &format!("albums/{}", segment(album_id)?))?;
    fetch(http, &url, SERVICE).await
}
