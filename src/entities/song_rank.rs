use chrono::NaiveDate;
use serde::Serialize;

/// A single historical chart placement of a song.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SongRank {
    pub date: NaiveDate,
    pub rank: u32,
}

impl SongRank {
    pub fn new(date: NaiveDate, rank: u32) -> Self {
        Self { date, rank }
    }
}
