//! Providers for song rankings and media.
//!
//! Two upstream layouts answer these lookups. [`BackendSource`] is used
//! unless the config selects [`DirectSource`].

mod backend;
mod direct;

pub use backend::BackendSource;
pub use direct::DirectSource;

use crate::config::{Config, Strategy};
use crate::ports::song_details::SongDetailsSource;

/// Build the details provider selected by `config.strategy`.
pub fn from_config(config: &Config) -> Box<dyn SongDetailsSource> {
    match config.strategy {
        Strategy::Backend => Box::new(BackendSource::new(config.upstreams.backend.clone())),
        Strategy::Direct => Box::new(DirectSource::new(
            config.upstreams.chart.clone(),
            config.upstreams.image_search.clone(),
            config.image_search.clone(),
        )),
    }
}
