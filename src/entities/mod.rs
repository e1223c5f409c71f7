//! Normalized records handed to the presentation layer.
//!
//! Every value here is built once per call from upstream payloads and owned
//! by the caller afterwards. None of them keep a reference to the raw JSON.

mod chart_position;
mod media_item;
mod song;
mod song_rank;

pub use chart_position::ChartPosition;
pub use media_item::MediaItem;
pub use song::Song;
pub use song_rank::SongRank;
