use tracing::instrument;

use crate::config::{Config, Upstreams};
use crate::entities::{ChartPosition, MediaItem, Song, SongRank};
use crate::error::UpstreamError;
use crate::ports::http::UpstreamHttp;
use crate::ports::song_details::SongDetailsSource;
use crate::services::details;
use crate::services::http::ReqwestHttp;
use crate::upstream::{billboard, spotify};

/// Aggregates the chart, streaming, search and backend services into
/// [`crate::entities`] values.
///
/// Holds no mutable state: every method only issues requests and builds its
/// result, so one instance can serve any number of concurrent callers.
pub struct MusicApi<H: UpstreamHttp> {
    http: H,
    upstreams: Upstreams,
    details: Box<dyn SongDetailsSource>,
}

/// Pass `value` through unless it is blank; a `Song` never carries empty fields.
fn required(value: String, field: &str, service: &str) -> Result<String, UpstreamError> {
    if value.trim().is_empty() {
        tracing::warn!(field, service, "Upstream returned an empty required field");
        return Err(UpstreamError::malformed(service));
    }
    Ok(value)
}

impl MusicApi<ReqwestHttp> {
    pub fn from_config(config: &Config) -> Self {
        tracing::debug!(strategy = ?config.strategy, "Building music API client");
        Self::new(
            ReqwestHttp::new(config.request_timeout()),
            config.upstreams.clone(),
            details::from_config(config),
        )
    }
}

impl<H: UpstreamHttp> MusicApi<H> {
    pub fn new(http: H, upstreams: Upstreams, details: Box<dyn SongDetailsSource>) -> Self {
        Self {
            http,
            upstreams,
            details,
        }
    }

    /// Songs on the chart published for `date`, in the chart service's order.
    #[instrument(skip(self))]
    pub async fn fetch_chart(&self, date: &str) -> Result<Vec<ChartPosition>, UpstreamError> {
        let rows = billboard::get_chart(&self.http, &self.upstreams.chart, date).await?;

        let chart: Vec<ChartPosition> = rows
            .into_iter()
            .map(|row| ChartPosition::new(row.rank, row.song_id, row.song_name, row.display_artist))
            .collect();

        tracing::info!(positions = chart.len(), "Chart fetched");
        Ok(chart)
    }

    /// Full song details, merged from three dependent lookups:
    /// chart song → streaming track → streaming album.
    ///
    /// Each request waits on the previous response, and the first failure
    /// ends the chain. No `Song` exists until all three have succeeded.
    #[instrument(skip(self))]
    pub async fn fetch_song_info(&self, id: &str) -> Result<Song, UpstreamError> {
        let lookup = billboard::get_song(&self.http, &self.upstreams.chart, id).await?;
        let summary = lookup.song;
        let song_id = required(summary.song_id, "song_id", billboard::SERVICE)?;
        let song_name = required(summary.song_name, "song_name", billboard::SERVICE)?;
        let artist = required(summary.display_artist, "display_artist", billboard::SERVICE)?;
        let track_id = summary
            .spotify_id
            .as_deref()
            .filter(|track_id| !track_id.is_empty())
            .ok_or_else(|| {
                tracing::warn!(song_id = %song_id, "Song has no streaming reference");
                UpstreamError::malformed(billboard::SERVICE)
            })?;

        let track = spotify::get_track(&self.http, &self.upstreams.streaming, track_id).await?;
        let external_url = track
            .external_urls
            .get(spotify::EXTERNAL_URL_PROVIDER)
            .filter(|url| !url.is_empty())
            .cloned()
            .ok_or_else(|| UpstreamError::malformed(spotify::SERVICE))?;

        let album = spotify::get_album(&self.http, &self.upstreams.streaming, &track.album.id).await?;
        let album_name = required(album.name.clone(), "album.name", spotify::SERVICE)?;
        let release_date = album.parsed_release_date().ok_or_else(|| {
            tracing::warn!(release_date = %album.release_date, "Unparseable album release date");
            UpstreamError::malformed(spotify::SERVICE)
        })?;
        let cover_image_url = album
            .cover_image_url()
            .map(String::from)
            .ok_or_else(|| UpstreamError::malformed(spotify::SERVICE))?;

        let song = Song {
            id: song_id,
            name: song_name,
            artist,
            album_name,
            release_date,
            duration_ms: track.duration_ms,
            external_url,
            cover_image_url,
        };

        tracing::info!(song_id = %song.id, album = %song.album_name, "Song info assembled");
        Ok(song)
    }

    /// Historical chart placements of a song, in the upstream's order.
    #[instrument(skip(self))]
    pub async fn fetch_song_rankings(&self, id: &str) -> Result<Vec<SongRank>, UpstreamError> {
        let ranks = self.details.song_rankings(&self.http, id).await?;
        tracing::info!(samples = ranks.len(), "Song rankings fetched");
        Ok(ranks)
    }

    /// Images related to a song, in the upstream's order and capped by it.
    #[instrument(skip(self))]
    pub async fn fetch_song_media(&self, id: &str) -> Result<Vec<MediaItem>, UpstreamError> {
        let media = self.details.song_media(&self.http, id).await?;
        tracing::info!(items = media.len(), "Song media fetched");
        Ok(media)
    }
}
