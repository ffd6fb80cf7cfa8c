//! ICS calendar generation.

mod generate;

pub use generate::{IcsOptions, generate_ics};
