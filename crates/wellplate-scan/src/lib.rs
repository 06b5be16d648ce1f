//! Scan planning for calibrated well plates.
//!
//! This crate turns a plate geometry, a calibration result, a well selection
//! and a field-of-view pattern into a flat, ordered list of named stage
//! positions:
//!
//! - [`FovPattern`]: how FOVs are distributed within a well
//!   (centre / grid / seeded random points),
//! - [`snake_well_order`]: boustrophedon ordering over the selected wells,
//! - [`well_center_in_stage`] / [`apply_inverse_rotation`] /
//!   [`fov_positions_for_well`]: the coordinate mapper,
//! - [`build_scan_plan`]: the all-in-one entry point.
//!
//! Everything here is a pure function of its inputs. Positions are in
//! micrometres, ready for a stage; an incorrect coordinate drives physical
//! hardware motion, so degenerate inputs are rejected with typed errors
//! rather than mapped to silently wrong outputs.

mod error;
mod mapper;
mod pattern;
mod plan;
mod traverse;

pub use error::*;
pub use mapper::*;
pub use pattern::*;
pub use plan::*;
pub use traverse::*;
