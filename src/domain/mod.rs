//! Domain layer with the core dataset entities and chart catalogue.

/// Chart catalogue definitions.
pub mod chart;
/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Serde utilities for CSV cell parsing.
pub mod serde_utils;

pub use chart::ChartKind;
pub use entities::{Dataset, MonthKey, UserRecord, Weekday};
pub use errors::DataError;
