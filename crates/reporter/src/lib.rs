//! Playlist report rendering
//!
//! Every section is an independent query over the full song list, so the
//! section functions can be called (and tested) on their own.
//! [`render_report`] puts them together in the fixed report order with a
//! blank line between sections.

pub mod queries;
pub mod sections;

use playlist_report_core::{ReportConfig, Song};
use tracing::debug;

pub use queries::*;
pub use sections::*;

/// Render the complete report text
pub fn render_report(songs: &[Song], config: &ReportConfig) -> String {
    let mut body = vec![plays_section(songs, config.min_plays)];
    body.extend(
        config
            .genre_counts
            .iter()
            .map(|entry| genre_count_section(songs, entry, config.corrected_labels)),
    );
    body.push(album_section(songs, &config.album));
    body.push(before_year_section(songs, config.max_year));
    body.push(long_name_section(songs, config.max_name_length));
    body.push(longest_song_section(songs));

    debug!(songs = songs.len(), sections = body.len() + 1, "rendered report");
    title_section(&config.title) + &body.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use playlist_report_core::GenreCount;

    fn song(name: &str, album: &str, genre: &str, time: i32, year: i32, plays: i32) -> Song {
        Song {
            name: name.to_string(),
            artist: "Artist".to_string(),
            album: album.to_string(),
            genre: genre.to_string(),
            size: "4.0 MB".to_string(),
            time,
            year,
            plays,
        }
    }

    fn library() -> Vec<Song> {
        vec![
            song("Hit", "Greatest", "Alternative", 200, 2001, 300),
            song("Fish", "Welcome to the Fishbowl", "Country", 240, 2012, 12),
            song("Oldie", "Sixties", "Rock", 180, 1964, 250),
            song("Rap", "Beats", "Hip-Hop/Rap", 240, 2015, 5),
        ]
    }

    #[test]
    fn test_render_report_layout() {
        let report = render_report(&library(), &ReportConfig::default());
        let expected = "\
Music Playlist Report

Songs that received 200 or more plays:
Name: Hit, Artist: Artist, Album: Greatest, Genre: Alternative, Size: 4.0 MB, Time: 200, Year: 2001, Plays: 300
Name: Oldie, Artist: Artist, Album: Sixties, Genre: Rock, Size: 4.0 MB, Time: 180, Year: 1964, Plays: 250

Number of Alternative Songs: 1

Number of Alternative Songs: 1

Songs that are from the album \"Welcome to the Fishbowl\":
Name: Fish, Artist: Artist, Album: Welcome to the Fishbowl, Genre: Country, Size: 4.0 MB, Time: 240, Year: 2012, Plays: 12

Songs that are from before 1970:
Name: Oldie, Artist: Artist, Album: Sixties, Genre: Rock, Size: 4.0 MB, Time: 180, Year: 1964, Plays: 250

Songs whose names are more than 85 characters long:

Longest song:
Name: Fish, Artist: Artist, Album: Welcome to the Fishbowl, Genre: Country, Size: 4.0 MB, Time: 240, Year: 2012, Plays: 12
";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_render_report_is_deterministic() {
        let songs = library();
        let config = ReportConfig::default();
        assert_eq!(render_report(&songs, &config), render_report(&songs, &config));
    }

    #[test]
    fn test_render_report_genre_counts() {
        let mut songs = Vec::new();
        for i in 0..10 {
            let genre = match i {
                0..=2 => "Alternative",
                3..=4 => "Hip-Hop/Rap",
                _ => "Pop",
            };
            songs.push(song(&format!("Song {}", i), "Album", genre, 100, 2000, 0));
        }

        let report = render_report(&songs, &ReportConfig::default());
        let counts: Vec<&str> = report
            .lines()
            .filter(|line| line.starts_with("Number of"))
            .collect();
        assert_eq!(
            counts,
            ["Number of Alternative Songs: 3", "Number of Alternative Songs: 2"]
        );

        let corrected = ReportConfig {
            corrected_labels: true,
            ..ReportConfig::default()
        };
        let report = render_report(&songs, &corrected);
        assert!(report.contains("Number of Alternative Songs: 3\n"));
        assert!(report.contains("Number of Hip-Hop/Rap Songs: 2\n"));
    }

    #[test]
    fn test_render_report_empty_library() {
        let report = render_report(&[], &ReportConfig::default());
        assert!(report.starts_with("Music Playlist Report\n\nSongs that received 200 or more plays:\n\n"));
        assert!(report.ends_with("\nLongest song:\n"));
        assert!(!report.contains("Name:"));
    }

    #[test]
    fn test_render_report_custom_config() {
        let config = ReportConfig {
            title: "Custom".to_string(),
            min_plays: 10,
            album: "Beats".to_string(),
            max_year: 2000,
            max_name_length: 3,
            genre_counts: vec![GenreCount::new("Rock", "Rock songs")],
            corrected_labels: false,
        };
        let report = render_report(&library(), &config);

        assert!(report.starts_with("Custom\n\nSongs that received 10 or more plays:\n"));
        assert!(report.contains("\nRock songs: 1\n"));
        assert!(report.contains("Songs that are from the album \"Beats\":\nName: Rap,"));
        assert!(report.contains("Songs that are from before 2000:\nName: Oldie,"));
        assert!(report.contains("Songs whose names are more than 3 characters long:\nName: Fish,"));
        assert!(!report.contains("Alternative Songs"));
    }
}
