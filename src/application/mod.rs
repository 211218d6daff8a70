//! Application layer: pure chart computations over the loaded dataset.

/// Chart computations, one module per chart family.
pub mod charts;

pub use charts::{ChartSpec, compute};
