//! Closed-form calibration solvers for well plates.
//!
//! Calibration samples stage coordinates at known well landmarks to determine
//! the physical mapping between plate and stage coordinate frames:
//!
//! - [`well_center_from_points`]: well centre from 2–4 rim/vertex samples,
//! - [`rotation_from_reference_centers`]: 2×2 plate-misalignment rotation
//!   from two reference-well centres,
//! - [`calibrate_plate`]: both combined into a [`CalibrationResult`].
//!
//! Every solver is a pure function: results are recomputed from scratch on
//! each call and no calibration state is retained between calls. Degenerate
//! inputs (collinear rim points, coincident reference wells, wrong sample
//! counts) surface as typed [`CalibrationError`]s, never as NaN coordinates —
//! a wrong coordinate here drives physical stage motion.

mod error;
mod rotation;
mod solve;
mod well_center;

pub use error::*;
pub use rotation::*;
pub use solve::*;
pub use well_center::*;
