use playlist_report_core::Song;

/// Keep songs matching `pred`, newest first. Songs from the same year stay
/// in input order.
fn newest_first<'a>(songs: &'a [Song], pred: impl Fn(&Song) -> bool) -> Vec<&'a Song> {
    let mut matched: Vec<&Song> = songs.iter().filter(|song| pred(*song)).collect();
    // sort_by is stable
    matched.sort_by(|a, b| b.year.cmp(&a.year));
    matched
}

pub fn songs_with_min_plays(songs: &[Song], min_plays: i32) -> Vec<&Song> {
    newest_first(songs, |song| song.plays >= min_plays)
}

pub fn count_genre(songs: &[Song], genre: &str) -> usize {
    songs.iter().filter(|song| song.genre == genre).count()
}

pub fn songs_from_album<'a>(songs: &'a [Song], album: &str) -> Vec<&'a Song> {
    newest_first(songs, |song| song.album == album)
}

/// Songs released in or before `year`
pub fn songs_up_to_year(songs: &[Song], year: i32) -> Vec<&Song> {
    newest_first(songs, |song| song.year <= year)
}

/// Songs whose name has more than `max_len` characters
pub fn songs_with_long_names(songs: &[Song], max_len: usize) -> Vec<&Song> {
    newest_first(songs, |song| song.name_len() > max_len)
}

/// The song with the greatest `time`; the earliest one wins a tie
pub fn longest_song(songs: &[Song]) -> Option<&Song> {
    songs
        .iter()
        .reduce(|longest, song| if song.time > longest.time { song } else { longest })
}
