//! Candidate selection.
//!
//! `ResultFilter` resolves every search result's download locator and keeps
//! the ones that resolve; `select_best` picks the candidate with the most
//! seeders, keeping the earliest one on ties.

mod filter;
mod ranker;

pub use filter::{select_best_candidate, FilterReport, RejectedResult, ResultFilter};
pub use ranker::{select_best, Seeded};
