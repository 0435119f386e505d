//! Types for media naming.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A movie on the watch list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchMovie {
    pub title: String,
    pub release_year: i32,
}

/// A full TV season on the watch list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchTvSeason {
    /// Title of the parent show.
    pub show_title: String,
    pub season_number: u32,
}

/// A single TV episode on the watch list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchTvEpisode {
    /// Title of the parent show.
    pub show_title: String,
    pub season_number: u32,
    pub episode_number: u32,
}

/// Media a download was requested for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "media_type", rename_all = "snake_case")]
pub enum WatchMedia {
    Movie(WatchMovie),
    TvSeason(WatchTvSeason),
    TvEpisode(WatchTvEpisode),
}

impl WatchMedia {
    /// Movie title, or the parent show title for TV media.
    pub fn title(&self) -> &str {
        match self {
            Self::Movie(movie) => &movie.title,
            Self::TvSeason(season) => &season.show_title,
            Self::TvEpisode(episode) => &episode.show_title,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Movie(_) => "movie",
            Self::TvSeason(_) => "tv_season",
            Self::TvEpisode(_) => "tv_episode",
        }
    }
}

/// Untyped media record as stored by an external persistence layer.
///
/// Converted into [`WatchMedia`] with `TryFrom`, which checks that the
/// fields required by `media_type` are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRecord {
    pub media_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_number: Option<u32>,
}

impl TryFrom<&MediaRecord> for WatchMedia {
    type Error = NamingError;

    fn try_from(record: &MediaRecord) -> Result<Self, Self::Error> {
        let kind = record.media_type.as_str();
        match kind {
            "movie" => Ok(Self::Movie(WatchMovie {
                title: required_text(kind, "title", &record.title)?,
                release_year: required(kind, "release_year", record.release_year)?,
            })),
            "tv_season" => Ok(Self::TvSeason(WatchTvSeason {
                show_title: required_text(kind, "show_title", &record.show_title)?,
                season_number: ordinal(kind, "season_number", record.season_number)?,
            })),
            "tv_episode" => Ok(Self::TvEpisode(WatchTvEpisode {
                show_title: required_text(kind, "show_title", &record.show_title)?,
                season_number: ordinal(kind, "season_number", record.season_number)?,
                episode_number: ordinal(kind, "episode_number", record.episode_number)?,
            })),
            other => Err(NamingError::UnknownMediaType(other.to_string())),
        }
    }
}

fn required<T>(kind: &str, field: &'static str, value: Option<T>) -> Result<T, NamingError> {
    value.ok_or_else(|| NamingError::MissingField {
        media_type: kind.to_string(),
        field,
    })
}

fn required_text(
    kind: &str,
    field: &'static str,
    value: &Option<String>,
) -> Result<String, NamingError> {
    let text = value.as_deref().filter(|t| !t.trim().is_empty());
    required(kind, field, text).map(str::to_string)
}

fn ordinal(kind: &str, field: &'static str, value: Option<u32>) -> Result<u32, NamingError> {
    match required(kind, field, value)? {
        0 => Err(NamingError::InvalidNumber { field, value: 0 }),
        n => Ok(n),
    }
}

/// Derived destination for downloaded media.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaPath {
    /// New file or folder name.
    pub name: String,
    /// Directory the content moves into, relative to the library root.
    pub directory: PathBuf,
}

impl MediaPath {
    /// Full relative destination: `directory/name`.
    pub fn file_path(&self) -> PathBuf {
        self.directory.join(&self.name)
    }

    /// Destination under a library root.
    pub fn under(&self, root: &Path) -> PathBuf {
        root.join(self.file_path())
    }
}

/// Errors that can occur while naming media.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NamingError {
    #[error("Unknown media type: {0}")]
    UnknownMediaType(String),

    #[error("Missing {field} for {media_type}")]
    MissingField {
        media_type: String,
        field: &'static str,
    },

    #[error("Invalid {field}: {value}, must be at least 1")]
    InvalidNumber { field: &'static str, value: u32 },
}
