use thiserror::Error;

use crate::WellShape;

/// Validation failures raised by the calibration solvers.
///
/// None of these are transient: the computation is deterministic and local,
/// so the caller is expected to surface the message and prompt the user to
/// re-sample rather than retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalibrationError {
    /// Sample count does not match the selected well shape.
    #[error("{shape} wells need {expected} calibration points, got {got}")]
    WrongPointCount {
        /// Well shape the samples were taken on.
        shape: WellShape,
        /// Expected count(s) for that shape.
        expected: &'static str,
        /// Number of points actually supplied.
        got: usize,
    },

    /// The three rim points lie on a line, so no circle passes through them.
    #[error("rim points are collinear; cannot fit a circle through them")]
    CollinearPoints,

    /// The two reference-well centres share a stage x coordinate, so the
    /// plate rotation is undefined.
    #[error("reference well centres share the same stage x coordinate; cannot derive plate rotation")]
    CoincidentReferenceWells,

    /// The second reference well must sit in plate row A, apart from A1, for
    /// the rotation derivation to be meaningful.
    #[error("reference well {name} must lie in row A with column > 1 to derive plate rotation")]
    ReferenceWellMisplaced {
        /// Name of the offending well.
        name: String,
    },
}
