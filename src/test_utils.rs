use serde_json::{Value, json};
use url::Url;

use crate::config::{Config, Strategy, Upstreams};
use crate::ports::http::MockUpstreamHttp;
use crate::services::details;
use crate::services::music_api::MusicApi;

pub fn chart_base() -> Url {
    Upstreams::default().chart
}

pub fn search_base() -> Url {
    Upstreams::default().image_search
}

pub fn backend_base() -> Url {
    Upstreams::default().backend
}

/// Matcher for `expect_get_json().withf(..)` on the request path alone.
pub fn path_is(path: &'static str) -> impl Fn(&Url) -> bool + Send + 'static {
    move |url: &Url| url.path() == path
}

/// A [`MusicApi`] over the default local endpoints and the given mock.
pub fn test_api(http: MockUpstreamHttp, strategy: Strategy) -> MusicApi<MockUpstreamHttp> {
    let config = Config {
        strategy,
        ..Config::default()
    };
    MusicApi::new(http, config.upstreams.clone(), details::from_config(&config))
}

pub fn song_lookup_json() -> Value {
    json!({
        "song": {
            "song_id": "s1",
            "song_name": "Song One",
            "display_artist": "Artist A",
            "spotify_id": "trk1",
        },
        "rankings": [
            { "date": "2021-01-01", "rank": 3 },
            { "date": "2021-01-08", "rank": 1 },
        ],
    })
}

pub fn track_json() -> Value {
    json!({
        "id": "trk1",
        "name": "Song One",
        "duration_ms": 215000,
        "external_urls": { "spotify": "https://open.spotify.com/track/trk1" },
        "album": { "id": "alb1", "name": "Album One" },
    })
}

pub fn album_json() -> Value {
    json!({
        "id": "alb1",
        "name": "Album One",
        "release_date": "2020-11-20",
        "release_date_precision": "day",
        "images": [
            { "url": "https://i.scdn.co/image/alb1-640", "height": 640, "width": 640 },
            { "url": "https://i.scdn.co/image/alb1-300", "height": 300, "width": 300 },
        ],
    })
}
