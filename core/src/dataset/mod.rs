//! Dataset loading
//!
//! Turns the emissions CSV into [`EmissionRecord`]s. Fetching the bytes is the
//! caller's job (the UI uses an HTTP request); this module owns the header
//! mapping and numeric coercion so that every row leaving it is NaN-free.

mod error;
mod loader;

pub use error::LoadError;
pub use loader::{coerce_number, parse_csv, parse_reader};

pub use emissions_types::EmissionRecord;
