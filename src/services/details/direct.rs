use url::Url;

use crate::config::ImageSearchConfig;
use crate::entities::{MediaItem, SongRank};
use crate::error::UpstreamError;
use crate::ports::http::UpstreamHttp;
use crate::ports::song_details::SongDetailsSource;
use crate::upstream::{billboard, google_search};

/// Rankings straight from the chart service, media from an image search
/// keyed on the song's artist and name.
pub struct DirectSource {
    chart_url: Url,
    search_url: Url,
    search: ImageSearchConfig,
}

impl DirectSource {
    pub fn new(chart_url: Url, search_url: Url, search: ImageSearchConfig) -> Self {
        Self {
            chart_url,
            search_url,
            search,
        }
    }
}

fn search_query(artist: &str, song_name: &str) -> String {
    format!("{} {}", artist.trim(), song_name.trim())
}

#[async_trait::async_trait]
impl SongDetailsSource for DirectSource {
    async fn song_rankings(
        &self,
        http: &dyn UpstreamHttp,
        song_id: &str,
    ) -> Result<Vec<SongRank>, UpstreamError> {
        let lookup = billboard::get_song(http, &self.chart_url, song_id).await?;
        Ok(lookup
            .rankings
            .into_iter()
            .map(|row| SongRank::new(row.date, row.rank))
            .collect())
    }

    async fn song_media(
        &self,
        http: &dyn UpstreamHttp,
        song_id: &str,
    ) -> Result<Vec<MediaItem>, UpstreamError> {
        let lookup = billboard::get_song(http, &self.chart_url, song_id).await?;
        let query = search_query(&lookup.song.display_artist, &lookup.song.song_name);
        tracing::debug!(song_id, query = %query, "Searching images for song");

        let hits =
            google_search::search_images(http, &self.search_url, &self.search, &query).await?;
        Ok(hits
            .into_iter()
            .map(|hit| {
                MediaItem::new(
                    hit.image.context_link,
                    hit.snippet,
                    hit.image.thumbnail_link,
                    Some(hit.title),
                )
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportFailure;
    use crate::ports::http::MockUpstreamHttp;
    use crate::test_utils::{chart_base, path_is, search_base, song_lookup_json};
    use chrono::NaiveDate;
    use mockall::Sequence;
    use serde_json::json;

    fn source() -> DirectSource {
        DirectSource::new(
            chart_base(),
            search_base(),
            ImageSearchConfig {
                api_key: "test-key".into(),
                engine_id: "test-engine".into(),
                limit: 2,
            },
        )
    }

    #[test]
    fn test_search_query_joins_artist_and_name() {
        assert_eq!(search_query(" Artist A", "Song One "), "Artist A Song One");
    }

    #[tokio::test]
    async fn test_rankings_from_song_lookup() {
        let mut http = MockUpstreamHttp::new();
        http.expect_get_json()
            .withf(path_is("/billboard/music/song/s1"))
            .times(1)
            .returning(|_| Ok(song_lookup_json()));

        let ranks = source().song_rankings(&http, "s1").await.unwrap();

        assert_eq!(
            ranks,
            vec![
                SongRank::new(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(), 3),
                SongRank::new(NaiveDate::from_ymd_opt(2021, 1, 8).unwrap(), 1),
            ]
        );
    }

    #[tokio::test]
    async fn test_media_searches_after_lookup() {
        let mut http = MockUpstreamHttp::new();
        let mut seq = Sequence::new();
        http.expect_get_json()
            .withf(path_is("/billboard/music/song/s1"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(song_lookup_json()));
        http.expect_get_json()
            .withf(|url: &Url| {
                let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
                let pairs: Vec<(&str, &str)> = pairs
                    .iter()
                    .map(|(key, value)| (key.as_str(), value.as_str()))
                    .collect();
                url.path() == "/googleapis/customsearch/v1"
                    && pairs
                        == [
                            ("q", "Artist A Song One"),
                            ("key", "test-key"),
                            ("cx", "test-engine"),
                            ("num", "2"),
                            ("imgType", "png"),
                            ("searchType", "image"),
                        ]
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Ok(json!({ "items": [
                    {
                        "title": "Song One cover",
                        "snippet": "Official cover art",
                        "image": {
                            "contextLink": "https://example.com/song-one",
                            "thumbnailLink": "https://example.com/song-one_t.png",
                        },
                    },
                    {
                        "title": "Artist A on stage",
                        "snippet": "Tour photo",
                        "image": {
                            "contextLink": "https://example.com/tour",
                            "thumbnailLink": "https://example.com/tour_t.png",
                        },
                    },
                ] }))
            });

        let media = source().song_media(&http, "s1").await.unwrap();

        assert_eq!(media.len(), 2);
        assert_eq!(
            media[0],
            MediaItem::new(
                "https://example.com/song-one",
                "Official cover art",
                "https://example.com/song-one_t.png",
                Some("Song One cover".into()),
            )
        );
        assert_eq!(media[1].title.as_deref(), Some("Artist A on stage"));
    }

    #[tokio::test]
    async fn test_media_without_hits_is_empty() {
        let mut http = MockUpstreamHttp::new();
        http.expect_get_json()
            .withf(path_is("/billboard/music/song/s1"))
            .returning(|_| Ok(song_lookup_json()));
        http.expect_get_json()
            .withf(path_is("/googleapis/customsearch/v1"))
            .returning(|_| Ok(json!({ "kind": "customsearch#search" })));

        let media = source().song_media(&http, "s1").await.unwrap();
        assert!(media.is_empty());
    }

    #[tokio::test]
    async fn test_failed_lookup_skips_search() {
        let mut http = MockUpstreamHttp::new();
        http.expect_get_json()
            .withf(path_is("/billboard/music/song/s1"))
            .times(1)
            .returning(|_| Err(TransportFailure::Unreachable("timed out".into())));
        http.expect_get_json()
            .withf(path_is("/googleapis/customsearch/v1"))
            .never();

        let result = source().song_media(&http, "s1").await;
        tokio_test::assert_err!(result);
    }
}
