use serde::Serialize;

/// One row of a chart snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPosition {
    pub rank: u32,
    pub song_id: String,
    pub song_name: String,
    pub artist: String,
}

impl ChartPosition {
    pub fn new(
        rank: u32,
        song_id: impl Into<String>,
        song_name: impl Into<String>,
        artist: impl Into<String>,
    ) -> Self {
        Self {
            rank,
            song_id: song_id.into(),
            song_name: song_name.into(),
            artist: artist.into(),
        }
    }
}
