//! One-shot plate calibration: raw samples in, calibration result out.

use serde::{Deserialize, Serialize};
use wellplate_core::{Mat2, Pt2, Real, Well};

use crate::{
    rotation_angle_deg, rotation_from_reference_centers, well_center_from_points,
    CalibrationError, WellShape,
};

/// Stage samples taken on a second reference well, used to derive the plate
/// rotation. The well must sit in row A, apart from A1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceWellPoints {
    /// Address of the reference well.
    pub well: Well,
    /// Stage samples on its edge, µm.
    pub points: Vec<Pt2>,
}

/// Raw input for one calibration pass.
///
/// The surrounding application collects these samples (typically from a
/// point table fed by stage readback) and hands them over as a plain list;
/// the solver holds no state of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationInput {
    /// Stage samples on the edge of well A1, µm.
    pub a1_points: Vec<Pt2>,
    /// Shape of the sampled wells.
    pub shape: WellShape,
    /// Optional second reference well for rotation correction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<ReferenceWellPoints>,
}

/// Output of one calibration pass.
///
/// Recomputed from scratch every time the user calibrates; a new calibration
/// always produces a brand-new value, nothing is updated incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationResult {
    /// Stage coordinates of the A1 well centre, µm.
    pub a1_center: Pt2,
    /// Plate-misalignment rotation; `None` means "assume zero rotation".
    /// When present the matrix is orthonormal with determinant +1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Mat2>,
    /// Rotation angle in degrees, for display. 0.0 without a rotation.
    pub rotation_angle_deg: Real,
}

impl CalibrationResult {
    /// A calibration with a known A1 centre and no rotation correction.
    pub fn without_rotation(a1_center: Pt2) -> Self {
        Self {
            a1_center,
            rotation: None,
            rotation_angle_deg: 0.0,
        }
    }
}

/// Solve a full plate calibration from raw samples.
///
/// Computes the A1 well centre and, when a second reference well was
/// sampled, the plate rotation matrix. Idempotent and side-effect free:
/// the same input always yields the bit-identical result.
///
/// # Errors
///
/// Any [`CalibrationError`] from the underlying solvers, plus
/// [`CalibrationError::ReferenceWellMisplaced`] when the reference well is
/// not a row-A well distinct from A1. On error no partial result is
/// produced and any previous calibration the caller holds stays valid.
pub fn calibrate_plate(input: &CalibrationInput) -> Result<CalibrationResult, CalibrationError> {
    let a1_center = well_center_from_points(&input.a1_points, input.shape)?;

    let rotation = match &input.reference {
        Some(reference) => {
            if reference.well.row != 0 || reference.well.col == 0 {
                return Err(CalibrationError::ReferenceWellMisplaced {
                    name: reference.well.name(),
                });
            }
            let center = well_center_from_points(&reference.points, input.shape)?;
            Some(rotation_from_reference_centers(a1_center, center)?)
        }
        None => None,
    };

    let rotation_angle_deg = rotation.as_ref().map(rotation_angle_deg).unwrap_or(0.0);

    Ok(CalibrationResult {
        a1_center,
        rotation,
        rotation_angle_deg,
    })
}
