use url::Url;

use crate::entities::{MediaItem, SongRank};
use crate::error::UpstreamError;
use crate::ports::http::UpstreamHttp;
use crate::ports::song_details::SongDetailsSource;
use crate::upstream::backend;

/// Rankings and media from the internal REST backend.
pub struct BackendSource {
    base_url: Url,
}

impl BackendSource {
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }
}

#[async_trait::async_trait]
impl SongDetailsSource for BackendSource {
    async fn song_rankings(
        &self,
        http: &dyn UpstreamHttp,
        song_id: &str,
    ) -> Result<Vec<SongRank>, UpstreamError> {
        let records = backend::get_song_ranks(http, &self.base_url, song_id).await?;
        Ok(records
            .into_iter()
            .map(|record| SongRank::new(record.end_date, record.rank))
            .collect())
    }

    async fn song_media(
        &self,
        http: &dyn UpstreamHttp,
        song_id: &str,
    ) -> Result<Vec<MediaItem>, UpstreamError> {
        let records = backend::get_song_media(http, &self.base_url, song_id).await?;
        Ok(records
            .into_iter()
            .map(|record| MediaItem::new(record.url, record.caption, record.thumbnail, None))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FALLBACK_MESSAGE, TransportFailure};
    use crate::ports::http::MockUpstreamHttp;
    use crate::test_utils::{backend_base, path_is};
    use chrono::NaiveDate;
    use serde_json::json;

    #[tokio::test]
    async fn test_rankings_keep_upstream_order() {
        let mut http = MockUpstreamHttp::new();
        http.expect_get_json()
            .withf(path_is("/api/songs/s1/ranks"))
            .times(1)
            .returning(|_| {
                Ok(json!({ "data": [
                    { "endDate": "2021-01-08", "rank": 5 },
                    { "endDate": "2021-01-01", "rank": 3 },
                ] }))
            });

        let source = BackendSource::new(backend_base());
        let ranks = source.song_rankings(&http, "s1").await.unwrap();

        assert_eq!(
            ranks,
            vec![
                SongRank::new(NaiveDate::from_ymd_opt(2021, 1, 8).unwrap(), 5),
                SongRank::new(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(), 3),
            ]
        );
    }

    #[tokio::test]
    async fn test_media_has_no_title() {
        let mut http = MockUpstreamHttp::new();
        http.expect_get_json()
            .withf(path_is("/api/songs/s1/media"))
            .times(1)
            .returning(|_| {
                Ok(json!({ "data": [{
                    "url": "https://img.example.com/a.png",
                    "caption": "Live at the Forum",
                    "thumbnail": "https://img.example.com/a_t.png",
                }] }))
            });

        let source = BackendSource::new(backend_base());
        let media = source.song_media(&http, "s1").await.unwrap();

        assert_eq!(
            media,
            vec![MediaItem::new(
                "https://img.example.com/a.png",
                "Live at the Forum",
                "https://img.example.com/a_t.png",
                None,
            )]
        );
    }

    #[tokio::test]
    async fn test_missing_data_envelope_is_malformed() {
        let mut http = MockUpstreamHttp::new();
        http.expect_get_json().returning(|_| Ok(json!([])));

        let source = BackendSource::new(backend_base());
        let err = source.song_media(&http, "s1").await.unwrap_err();

        assert_eq!(err.message(), "Malformed response from backend");
    }

    #[tokio::test]
    async fn test_backend_error_payload() {
        let mut http = MockUpstreamHttp::new();
        http.expect_get_json().returning(|_| {
            Err(TransportFailure::Status {
                status: 404,
                body: Some(json!({ "errors": [{ "details": "Song s9 not found" }] })),
            })
        });

        let source = BackendSource::new(backend_base());
        let err = source.song_rankings(&http, "s9").await.unwrap_err();

        assert_eq!(err.message(), "Song s9 not found");
        assert_ne!(err.message(), FALLBACK_MESSAGE);
    }
}
