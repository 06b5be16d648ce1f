//! Core geometry types for microscope well-plate scan planning.
//!
//! This crate provides the foundational building blocks used by the other
//! crates in the workspace:
//!
//! - linear algebra type aliases (`Real`, `Vec2`, `Pt2`, `Mat2`),
//! - the immutable [`Plate`] geometry model,
//! - zero-based [`Well`] addressing with `"A1"`-style naming,
//! - a catalog of canonical plate geometries.
//!
//! Units convention: plate geometry (well size, well pitch) is stored in
//! millimetres; stage coordinates everywhere in the workspace are in
//! micrometres. The single mm→µm crossing lives in the coordinate mapper
//! (`wellplate-scan`), via [`mm_to_um`].
//!
//! # Example
//!
//! ```
//! use wellplate_core::{catalog, Well};
//!
//! let plate = catalog::plate_96();
//! assert_eq!(plate.well_count(), 96);
//!
//! let well = Well::parse("H12").unwrap();
//! assert!(plate.contains(well));
//! assert_eq!(well.name(), "H12");
//! ```

mod math;
mod plate;
mod well;

/// Canonical plate geometries (ANSI/SLAS footprints and a coverslip area).
pub mod catalog;

pub use math::*;
pub use plate::*;
pub use well::*;
