//! Name and directory derivation.

use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex_lite::Regex;
use tracing::debug;

use super::{MediaPath, MediaRecord, NamingError, WatchMedia};

/// A dot and word characters at the very end of the release name.
static EXTENSION_REGEX: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"(\.\w+)$").ok());

/// Trailing extension of a release name, including the dot.
///
/// Only matches at the end of the string, so `"Name.mkv [extra]"` has no
/// extension.
pub fn release_extension(release_name: &str) -> Option<&str> {
    EXTENSION_REGEX
        .as_ref()?
        .find(release_name)
        .map(|m| m.as_str())
}

/// Derive the new name and destination directory for downloaded media.
///
/// When `is_single_file` is set the release's trailing extension is appended
/// to the name; a downloaded directory keeps the bare name.
pub fn derive_path(media: &WatchMedia, release_name: &str, is_single_file: bool) -> MediaPath {
    let (mut name, directory) = match media {
        WatchMedia::Movie(movie) => {
            let name = format!("{} ({})", movie.title, movie.release_year);
            let directory = PathBuf::from(&name);
            (name, directory)
        }
        WatchMedia::TvSeason(season) => (
            format!("Season {:02}", season.season_number),
            PathBuf::from(&season.show_title),
        ),
        WatchMedia::TvEpisode(episode) => (
            format!(
                "S{:02}E{:02}",
                episode.season_number, episode.episode_number
            ),
            PathBuf::from(&episode.show_title)
                .join(format!("Season {:02}", episode.season_number)),
        ),
    };

    if is_single_file {
        if let Some(extension) = release_extension(release_name) {
            name.push_str(extension);
        }
    }

    debug!(
        media_type = media.kind(),
        release = %release_name,
        name = %name,
        directory = %directory.display(),
        "Derived media path"
    );

    MediaPath { name, directory }
}

/// Derive the destination for an untyped media record.
///
/// Fails with [`NamingError::UnknownMediaType`] for unrecognised media types.
pub fn derive_path_for_record(
    record: &MediaRecord,
    release_name: &str,
    is_single_file: bool,
) -> Result<MediaPath, NamingError> {
    let media = WatchMedia::try_from(record)?;
    Ok(derive_path(&media, release_name, is_single_file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;
    use std::path::Path;

    #[test]
    fn test_movie_single_file() {
        let path = derive_path(
            &fixtures::movie("Rambo", 1982),
            "Rambo [scene-stuff].mkv",
            true,
        );

        assert_eq!(path.name, "Rambo (1982).mkv");
        assert_eq!(path.directory, Path::new("Rambo (1982)"));
    }

    #[test]
    fn test_movie_folder() {
        let path = derive_path(
            &fixtures::movie("Rambo", 1982),
            "Rambo [scene-stuff].mkv",
            false,
        );

        assert_eq!(path.name, "Rambo (1982)");
        assert_eq!(path.directory, Path::new("Rambo (1982)"));
    }

    #[test]
    fn test_episode_single_file() {
        let path = derive_path(
            &fixtures::tv_episode("Rick and Morty", 3, 14),
            "Rick and Morty - S03E14 [scene-stuff].mkv",
            true,
        );

        assert_eq!(path.name, "S03E14.mkv");
        assert_eq!(path.directory, Path::new("Rick and Morty").join("Season 03"));
    }

    #[test]
    fn test_episode_folder() {
        let path = derive_path(
            &fixtures::tv_episode("Rick and Morty", 3, 14),
            "Rick and Morty - S03E14 [scene-stuff].mkv",
            false,
        );

        assert_eq!(path.name, "S03E14");
        assert_eq!(path.directory, Path::new("Rick and Morty").join("Season 03"));
    }

    #[test]
    fn test_season_folder() {
        let path = derive_path(
            &fixtures::tv_season("Rick and Morty", 3),
            "Rick and Morty - Season 3 [scene-stuff]",
            false,
        );

        assert_eq!(path.name, "Season 03");
        assert_eq!(path.directory, Path::new("Rick and Morty"));
    }

    #[test]
    fn test_season_ignores_release_name() {
        let media = fixtures::tv_season("Rick and Morty", 3);

        for release in ["", "whatever", "Rick.and.Morty.S03 [x]"] {
            let path = derive_path(&media, release, false);
            assert_eq!(path.name, "Season 03");
            assert_eq!(path.directory, Path::new("Rick and Morty"));
        }
    }

    #[test]
    fn test_wide_numbers_are_not_truncated() {
        let path = derive_path(&fixtures::tv_episode("One Piece", 21, 1071), "x", false);

        assert_eq!(path.name, "S21E1071");
        assert_eq!(path.directory, Path::new("One Piece").join("Season 21"));
    }

    #[test]
    fn test_extension_must_end_the_name() {
        let path = derive_path(&fixtures::movie("Rambo", 1982), "Rambo.mkv [extra]", true);

        assert_eq!(path.name, "Rambo (1982)");
    }

    #[test]
    fn test_release_extension() {
        assert_eq!(release_extension("Rambo [scene-stuff].mkv"), Some(".mkv"));
        assert_eq!(release_extension("Rambo.2008.1080p.x264.mp4"), Some(".mp4"));
        assert_eq!(release_extension("Rambo.mkv [extra]"), None);
        assert_eq!(release_extension("Rambo [scene-stuff]"), None);
        assert_eq!(release_extension("trailing dot."), None);
        assert_eq!(release_extension(""), None);
    }

    #[test]
    fn test_no_extension_single_file_keeps_bare_name() {
        let path = derive_path(&fixtures::tv_episode("Show", 1, 2), "Show S01E02", true);

        assert_eq!(path.name, "S01E02");
    }

    #[test]
    fn test_derive_path_for_record() {
        let record = MediaRecord {
            media_type: "movie".to_string(),
            title: Some("Rambo".to_string()),
            release_year: Some(1982),
            ..Default::default()
        };

        let path = derive_path_for_record(&record, "Rambo.avi", true).unwrap();
        assert_eq!(path.name, "Rambo (1982).avi");
    }

    #[test]
    fn test_derive_path_for_unknown_record() {
        let record = MediaRecord {
            media_type: "album".to_string(),
            ..Default::default()
        };

        let err = derive_path_for_record(&record, "x.flac", true).unwrap_err();
        assert_eq!(err, NamingError::UnknownMediaType("album".to_string()));
    }
}
