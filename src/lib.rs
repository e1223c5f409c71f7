//! Aggregation client for chart, streaming-metadata, image-search and
//! backend music APIs.
//!
//! [`MusicApi`] is the whole public surface: four lookups that each return
//! normalized [`entities`] or a single [`UpstreamError`].

pub mod config;
pub mod entities;
pub mod error;
pub mod logging;
pub mod ports;
pub mod services;
pub mod upstream;

#[cfg(test)]
mod test_utils;

pub use config::{Config, Strategy};
pub use entities::{ChartPosition, MediaItem, Song, SongRank};
pub use error::UpstreamError;
pub use services::music_api::MusicApi;
