//! High-level entry crate for the `wellplate-rs` toolbox.
//!
//! Well-plate calibration and scan planning for motorized microscope
//! stages: given a plate geometry, stage samples on one or two reference
//! wells, a well selection and a field-of-view pattern, compute the flat,
//! ordered list of named stage positions to acquire.
//!
//! The flow mirrors how the surrounding acquisition application uses it:
//!
//! 1. the UI collects calibration samples → [`calib::calibrate_plate`]
//!    computes the A1 anchor and (with a second reference well) the plate
//!    rotation,
//! 2. the user picks wells and a FOV pattern → [`scan::build_scan_plan`]
//!    produces the position list,
//! 3. the position list is handed to the acquisition executor.
//!
//! # Example
//!
//! ```
//! use wellplate::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let plate = wellplate::core::catalog::plate_96();
//!
//! // Stage samples on the rim of well A1 (µm), as read back from the stage.
//! let calibration = calibrate_plate(&CalibrationInput {
//!     a1_points: vec![
//!         Pt2::new(3200.0, 0.0),
//!         Pt2::new(-3200.0, 0.0),
//!         Pt2::new(0.0, 3200.0),
//!     ],
//!     shape: WellShape::Circular,
//!     reference: None,
//! })?;
//!
//! let report = build_scan_plan(&ScanPlanInput {
//!     plate,
//!     calibration,
//!     wells: vec![Well::new(0, 0), Well::new(1, 0)],
//!     pattern: FovPattern::Center,
//!     z: None,
//! })?;
//!
//! assert_eq!(report.positions[0].name, "A1_pos000");
//! # Ok(())
//! # }
//! ```
//!
//! ## Module organization
//!
//! - **[`core`]**: math aliases, the [`core::Plate`] model, well addressing,
//!   the plate catalog.
//! - **[`calib`]**: closed-form calibration solvers.
//! - **[`scan`]**: FOV patterns, well traversal, the coordinate mapper and
//!   the plan builder.
//! - **[`prelude`]**: convenient re-exports for common use cases.

/// Math aliases, the plate geometry model, well addressing and the catalog.
pub mod core {
    pub use wellplate_core::*;

    /// Canonical plate geometries.
    pub mod catalog {
        pub use wellplate_core::catalog::*;
    }
}

/// Closed-form calibration solvers: well centres and plate rotation.
pub mod calib {
    pub use wellplate_calib::*;
}

/// FOV patterns, well traversal, coordinate mapping and plan building.
pub mod scan {
    pub use wellplate_scan::*;
}

/// Convenient re-exports for common use cases.
///
/// Import with `use wellplate::prelude::*;` to get started quickly.
pub mod prelude {
    pub use crate::core::{Mat2, Plate, Pt2, Real, Vec2, Well};

    pub use crate::calib::{
        calibrate_plate, CalibrationError, CalibrationInput, CalibrationResult,
        ReferenceWellPoints, WellShape,
    };

    pub use crate::scan::{
        build_scan_plan, snake_well_order, FovPattern, GridPattern, RandomPattern, ScanError,
        ScanPlanInput, ScanPlanReport, StagePosition, TraversalOrder,
    };
}
