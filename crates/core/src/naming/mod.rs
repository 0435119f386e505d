//! Destination naming for downloaded media.
//!
//! Given the watch-media record a download belongs to and the release name
//! of the torrent, derive the name the content should be renamed to and the
//! directory it should be moved into:
//!
//! | Media      | Name                 | Directory                      |
//! |------------|----------------------|--------------------------------|
//! | Movie      | `Rambo (1982)`       | `Rambo (1982)`                 |
//! | TV season  | `Season 03`          | `Rick and Morty`               |
//! | TV episode | `S03E14`             | `Rick and Morty/Season 03`     |
//!
//! Single-file downloads keep the release's trailing extension
//! (`Rambo (1982).mkv`); directory downloads never get one.
//!
//! # Example
//!
//! ```ignore
//! use mediagrab_core::naming::{derive_path, WatchMedia, WatchMovie};
//!
//! let media = WatchMedia::Movie(WatchMovie { title: "Rambo".into(), release_year: 1982 });
//! let path = derive_path(&media, "Rambo [scene-stuff].mkv", true);
//! assert_eq!(path.name, "Rambo (1982).mkv");
//! ```

mod namer;
mod types;

pub use namer::{derive_path, derive_path_for_record, release_extension};
pub use types::*;
