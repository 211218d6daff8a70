//! Shoplens - a terminal analytics dashboard for purchase-behavior datasets.
//!
//! This crate loads a CSV of per-user purchase behavior once at startup and
//! renders one of ten pre-built charts selected from a sidebar menu, all
//! inside the terminal.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the chart computations.
pub mod application;
/// Domain layer containing entities, errors, and the chart catalogue.
pub mod domain;
/// Infrastructure layer containing the dataset loader and configuration.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "shoplens";
