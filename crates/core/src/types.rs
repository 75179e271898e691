use crate::error::{Error, Result};
use std::fmt;

/// Number of tab-separated columns in a library export row
pub const FIELD_COUNT: usize = 8;

/// One row of the library export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub name: String,
    pub artist: String,
    pub album: String,
    pub genre: String,
    /// Human-readable size as exported, e.g. "4.2 MB"
    pub size: String,
    /// Duration in seconds
    pub time: i32,
    pub year: i32,
    pub plays: i32,
}

impl Song {
    /// Build a song from the split columns of one data row.
    ///
    /// Fails only when one of the Time, Year or Plays columns is not an
    /// integer.
    pub fn from_fields(fields: [&str; FIELD_COUNT]) -> Result<Song> {
        Ok(Song {
            name: fields[0].to_string(),
            artist: fields[1].to_string(),
            album: fields[2].to_string(),
            genre: fields[3].to_string(),
            size: fields[4].to_string(),
            time: parse_int(fields[5])?,
            year: parse_int(fields[6])?,
            plays: parse_int(fields[7])?,
        })
    }

    /// Length of the name in Unicode scalar values, not bytes or UTF-16
    /// code units; an emoji counts once.
    pub fn name_len(&self) -> usize {
        self.name.chars().count()
    }
}

fn parse_int(s: &str) -> Result<i32> {
    s.parse().map_err(|_| Error::InvalidFieldType)
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Artist: {}, Album: {}, Genre: {}, Size: {}, Time: {}, Year: {}, Plays: {}",
            self.name,
            self.artist,
            self.album,
            self.genre,
            self.size,
            self.time,
            self.year,
            self.plays
        )
    }
}
