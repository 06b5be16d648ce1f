use thiserror::Error;

use wellplate_core::Real;

/// Validation failures raised by the FOV pattern generators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PatternError {
    /// Grid with zero rows or columns.
    #[error("grid needs at least one row and one column, got {rows}x{cols}")]
    EmptyGrid {
        /// Requested grid rows.
        rows: usize,
        /// Requested grid columns.
        cols: usize,
    },

    /// Overlap of 100% or more collapses adjacent FOVs onto each other.
    #[error("overlap must stay below 100 percent, got {0}")]
    OverlapTooLarge(Real),

    /// FOV dimensions must be strictly positive.
    #[error("fov size must be positive, got {width}x{height} um")]
    NonPositiveFov {
        /// FOV width, µm.
        width: Real,
        /// FOV height, µm.
        height: Real,
    },

    /// Random-point bounding area must be strictly positive.
    #[error("random pattern needs a positive bounding area, got {width}x{height} um")]
    NonPositiveArea {
        /// Area width, µm.
        width: Real,
        /// Area height, µm.
        height: Real,
    },
}

/// Validation failures raised by the coordinate mapper and plan builder.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScanError {
    /// A well address outside the plate's declared grid. This is a
    /// programming-contract violation in the caller, not a user input
    /// problem.
    #[error("well {name} is outside the {rows}x{columns} plate grid")]
    WellOutOfBounds {
        /// Name of the offending well.
        name: String,
        /// Plate row count.
        rows: usize,
        /// Plate column count.
        columns: usize,
    },

    /// The FOV pattern failed to validate.
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// A scan plan needs at least one selected well.
    #[error("no wells selected")]
    NoWellsSelected,
}
