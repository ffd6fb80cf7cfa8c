//! Core pipeline for the frokost lunch-menu scraper.
//!
//! This crate turns raw scraped material (text blocks from the rendered
//! menu page, or text extracted from linked weekly menu PDFs) into
//! date-resolved menu entries and serializes them as an iCalendar document:
//! locate a (week, weekday) anchor in each candidate, extract and clean the
//! menu text nearby, resolve the anchor to a calendar date via ISO-week
//! arithmetic, then deduplicate and sort.
//!
//! Everything here is pure data transformation: no network, no filesystem.
//! The `frokost` binary gathers candidates and hands the complete set to
//! [`pipeline::run_pipeline`].

pub mod candidate;
pub mod entries;
pub mod error;
pub mod extract;
pub mod ics;
pub mod locate;
pub mod pipeline;
pub mod resolve;
pub mod scan;
pub mod weekday;

// Re-export the main pipeline types at crate root for convenience
pub use candidate::{Candidate, SourceKind};
pub use entries::MenuEntry;
pub use error::{FrokostError, FrokostResult};
pub use weekday::Weekday;
