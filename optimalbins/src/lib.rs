//!
//! Free-space management and placement engine for packing axis-aligned rectangles into bins.
//!
//! Items are placed one at a time by a [`heuristics::Strategy`] driven by the [`engine::Packer`].
//! Strategies that track free space do so through a per-bin [`free_rects::FreeRectSet`].
//!

/// Geometric primitives and base algorithms
pub mod geometry;

/// Items, bins and the placements connecting them
pub mod entities;

/// Set of (possibly overlapping) free rectangles of a bin
pub mod free_rects;

/// Pluggable placement heuristics
pub mod heuristics;

/// The packing run itself
pub mod engine;

/// Output of a packing run
pub mod result;

/// Configuration of a packing run
pub mod config;

/// Error type of the library
pub mod error;

/// Importing instances and exporting solutions
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

#[doc(inline)]
pub use error::{PackError, Result};
