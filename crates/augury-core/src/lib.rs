//! Core types for Augury: categories, readings, and the fortune catalog.
//!
//! This crate defines the data model the ledger records. It performs no I/O
//! and never reads the clock; a [`Reading`] is built from a catalog
//! [`Template`] by whoever owns the daily bookkeeping.

/// The static catalog of reading templates per category.
pub mod catalog;
/// Fortune categories.
pub mod category;
/// Error types used throughout the crate.
pub mod error;
/// Readings, ratings, and reading identifiers.
pub mod reading;
/// Plain-text share messages for a reading.
pub mod share;

/// Re-export catalog types.
pub use catalog::Template;
/// Re-export the category type.
pub use category::Category;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export reading types.
pub use reading::{Rating, Reading, ReadingId};
/// Re-export the share renderer.
pub use share::share_message;
