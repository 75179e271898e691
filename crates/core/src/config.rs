use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_TITLE: &str = "Music Playlist Report";
pub const DEFAULT_MIN_PLAYS: i32 = 200;
pub const DEFAULT_ALBUM: &str = "Welcome to the Fishbowl";
pub const DEFAULT_MAX_YEAR: i32 = 1970;
pub const DEFAULT_MAX_NAME_LENGTH: usize = 85;

/// Label the report has always printed in front of every genre count,
/// including the Hip-Hop/Rap one.
pub const LEGACY_GENRE_LABEL: &str = "Number of Alternative Songs";

/// Parameters for the fixed report sections
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub title: String,
    /// Songs with at least this many plays are listed
    pub min_plays: i32,
    pub album: String,
    /// Songs released in or before this year are listed
    pub max_year: i32,
    /// Songs whose names are longer than this are listed
    pub max_name_length: usize,
    pub genre_counts: Vec<GenreCount>,
    /// Derive count labels from the genre instead of the configured label
    pub corrected_labels: bool,
}

/// One "Number of ... Songs" line
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenreCount {
    pub genre: String,
    #[serde(default = "default_genre_label")]
    pub label: String,
}

impl GenreCount {
    pub fn new(genre: &str, label: &str) -> Self {
        GenreCount {
            genre: genre.to_string(),
            label: label.to_string(),
        }
    }

    pub fn display_label(&self, corrected: bool) -> String {
        if corrected {
            format!("Number of {} Songs", self.genre)
        } else {
            self.label.clone()
        }
    }
}

fn default_genre_label() -> String {
    LEGACY_GENRE_LABEL.to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            title: DEFAULT_TITLE.to_string(),
            min_plays: DEFAULT_MIN_PLAYS,
            album: DEFAULT_ALBUM.to_string(),
            max_year: DEFAULT_MAX_YEAR,
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            genre_counts: vec![
                GenreCount::new("Alternative", LEGACY_GENRE_LABEL),
                GenreCount::new("Hip-Hop/Rap", LEGACY_GENRE_LABEL),
            ],
            corrected_labels: false,
        }
    }
}

/// Raw TOML structure; every key falls back to the built-in report
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    title: Option<String>,
    min_plays: Option<i32>,
    album: Option<String>,
    max_year: Option<i32>,
    max_name_length: Option<usize>,
    genre_count: Option<Vec<GenreCount>>,
    corrected_labels: Option<bool>,
}

/// Parse a report configuration from a file path
pub fn parse_report_toml<P: AsRef<Path>>(path: P) -> Result<ReportConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| Error::ConfigParse(format!("Cannot read {}: {}", path.display(), e)))?;
    parse_report_toml_str(&content)
}

/// Parse a report configuration from a string (useful for testing)
pub fn parse_report_toml_str(content: &str) -> Result<ReportConfig> {
    let raw: RawConfig = toml::from_str(content)?;
    let defaults = ReportConfig::default();

    let title = raw.title.unwrap_or(defaults.title);
    if title.trim().is_empty() {
        return Err(Error::ConfigParse("Empty 'title'".to_string()));
    }

    let genre_counts = raw.genre_count.unwrap_or(defaults.genre_counts);
    for entry in &genre_counts {
        if entry.genre.is_empty() {
            return Err(Error::ConfigParse(
                "Empty genre in 'genre_count' entry".to_string(),
            ));
        }
    }

    Ok(ReportConfig {
        title,
        min_plays: raw.min_plays.unwrap_or(defaults.min_plays),
        album: raw.album.unwrap_or(defaults.album),
        max_year: raw.max_year.unwrap_or(defaults.max_year),
        max_name_length: raw.max_name_length.unwrap_or(defaults.max_name_length),
        genre_counts,
        corrected_labels: raw.corrected_labels.unwrap_or(defaults.corrected_labels),
    })
}
