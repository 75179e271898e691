//! Library export parsing
//!
//! Turns a tab-delimited export (header row first) into validated [`Song`]
//! records. The first bad row aborts the whole parse.

use playlist_report_core::{Error, FIELD_COUNT, Result, Song};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Parse an export file from disk.
///
/// Read failures are reported before any row is looked at. The text is
/// decoded with [`decode_export`], so encoding problems never fail the read.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<Song>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| Error::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read library export");
    parse_str(&decode_export(&bytes))
}

/// Decode raw export bytes.
///
/// A UTF-8 or UTF-16 (LE/BE) byte order mark selects the encoding and is
/// dropped; without one the bytes are read as UTF-8. Invalid sequences
/// become U+FFFD.
pub fn decode_export(bytes: &[u8]) -> String {
    match bytes {
        [0xEF, 0xBB, 0xBF, rest @ ..] => String::from_utf8_lossy(rest).into_owned(),
        [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, u16::from_le_bytes),
        [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes),
        _ => String::from_utf8_lossy(bytes).into_owned(),
    }
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> String {
    let chunks = bytes.chunks_exact(2);
    let dangling = !chunks.remainder().is_empty();
    let units: Vec<u16> = chunks.map(|pair| unit([pair[0], pair[1]])).collect();

    let mut text = String::from_utf16_lossy(&units);
    if dangling {
        text.push(char::REPLACEMENT_CHARACTER);
    }
    text
}

/// Parse export text; `\n` and `\r\n` line endings are both accepted
pub fn parse_str(content: &str) -> Result<Vec<Song>> {
    parse_lines(content.lines())
}

/// Parse a sequence of export lines, skipping the header.
///
/// Rows are numbered from 1 with the header as row 1, so the first data
/// line is row 2.
pub fn parse_lines<I, S>(lines: I) -> Result<Vec<Song>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut songs = Vec::new();

    for (index, line) in lines.into_iter().enumerate().skip(1) {
        let row = index + 1;
        songs.push(parse_row(line.as_ref(), row)?);
    }

    debug!(songs = songs.len(), "parsed library export");
    Ok(songs)
}

fn parse_row(line: &str, row: usize) -> Result<Song> {
    let split: Vec<&str> = line.split('\t').collect();
    let fields: [&str; FIELD_COUNT] = match split.try_into() {
        Ok(fields) => fields,
        Err(split) => {
            warn!(row, fields = split.len(), "wrong column count");
            return Err(Error::MalformedRow {
                row,
                fields: split.len(),
            });
        }
    };

    Song::from_fields(fields).inspect_err(|_| debug!(row, "non-numeric column"))
}
