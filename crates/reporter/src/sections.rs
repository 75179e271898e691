use crate::queries;
use playlist_report_core::{GenreCount, Song};

fn song_lines<'a>(songs: impl IntoIterator<Item = &'a Song>) -> String {
    songs
        .into_iter()
        .map(|song| format!("{}\n", song))
        .collect()
}

fn listing(heading: &str, songs: Vec<&Song>) -> String {
    format!("{}\n{}", heading, song_lines(songs))
}

/// Report title followed by a blank line
pub fn title_section(title: &str) -> String {
    format!("{}\n\n", title)
}

pub fn plays_section(songs: &[Song], min_plays: i32) -> String {
    listing(
        &format!("Songs that received {} or more plays:", min_plays),
        queries::songs_with_min_plays(songs, min_plays),
    )
}

pub fn genre_count_section(songs: &[Song], entry: &GenreCount, corrected: bool) -> String {
    format!(
        "{}: {}\n",
        entry.display_label(corrected),
        queries::count_genre(songs, &entry.genre)
    )
}

pub fn album_section(songs: &[Song], album: &str) -> String {
    listing(
        &format!("Songs that are from the album \"{}\":", album),
        queries::songs_from_album(songs, album),
    )
}

/// Songs from `year` and earlier. The heading says "before" although the
/// boundary year itself is included.
pub fn before_year_section(songs: &[Song], year: i32) -> String {
    listing(
        &format!("Songs that are from before {}:", year),
        queries::songs_up_to_year(songs, year),
    )
}

pub fn long_name_section(songs: &[Song], max_len: usize) -> String {
    listing(
        &format!("Songs whose names are more than {} characters long:", max_len),
        queries::songs_with_long_names(songs, max_len),
    )
}

/// Heading only when there are no songs
pub fn longest_song_section(songs: &[Song]) -> String {
    format!(
        "Longest song:\n{}",
        song_lines(queries::longest_song(songs))
    )
}
