use crate::entities::{MediaItem, SongRank};
use crate::error::UpstreamError;
use crate::ports::http::UpstreamHttp;

/// Port trait for the lookups that have more than one upstream provider:
/// a song's ranking history and its related media.
///
/// Implementations live in `services::details`.
#[async_trait::async_trait]
pub trait SongDetailsSource: Send + Sync {
    async fn song_rankings(
        &self,
        http: &dyn UpstreamHttp,
        song_id: &str,
    ) -> Result<Vec<SongRank>, UpstreamError>;

    async fn song_media(
        &self,
        http: &dyn UpstreamHttp,
        song_id: &str,
    ) -> Result<Vec<MediaItem>, UpstreamError>;
}
