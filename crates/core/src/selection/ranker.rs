//! Seeder-count ranking.

use tracing::info;

use crate::locator::{ResolvedResult, SearchResult};

/// Anything that reports a seeder count.
pub trait Seeded {
    fn seeders(&self) -> u32;
}

impl Seeded for SearchResult {
    fn seeders(&self) -> u32 {
        self.seeders
    }
}

impl Seeded for ResolvedResult {
    fn seeders(&self) -> u32 {
        self.result.seeders
    }
}

/// Pick the candidate with the most seeders.
///
/// Returns `None` only for empty input. A later candidate replaces the
/// current best only when it has strictly more seeders, so the first of
/// several equally seeded candidates wins.
pub fn select_best<T: Seeded>(results: &[T]) -> Option<&T> {
    let Some((first, rest)) = results.split_first() else {
        info!("No valid best search result");
        return None;
    };

    Some(rest.iter().fold(first, |best, candidate| {
        if candidate.seeders() > best.seeders() {
            candidate
        } else {
            best
        }
    }))
}
