//! Plate-misalignment rotation from two reference-well centres.

use wellplate_core::{Mat2, Pt2, Real};

use crate::CalibrationError;

/// Derive the plate rotation matrix from two calibrated well centres.
///
/// The centres must belong to wells aligned along the plate's row axis
/// (conventionally A1 and another row-A well), so that in a perfectly
/// mounted plate the segment between them runs along +x. The returned
/// matrix is a pure rotation (orthonormal, determinant +1) built from
/// `angle = -atan2(yb - ya, xb - xa)`.
///
/// # Errors
///
/// [`CalibrationError::CoincidentReferenceWells`] when the centres share a
/// stage x coordinate, which leaves the angle undefined.
pub fn rotation_from_reference_centers(a: Pt2, b: Pt2) -> Result<Mat2, CalibrationError> {
    if a.x == b.x {
        return Err(CalibrationError::CoincidentReferenceWells);
    }
    let angle = -(b.y - a.y).atan2(b.x - a.x);
    Ok(rotation_matrix(angle))
}

/// Standard 2×2 rotation matrix `[[cos θ, -sin θ], [sin θ, cos θ]]`.
pub fn rotation_matrix(angle: Real) -> Mat2 {
    let (sin, cos) = angle.sin_cos();
    Mat2::new(cos, -sin, sin, cos)
}

/// Rotation angle of a pure rotation matrix, in degrees. Display only.
pub fn rotation_angle_deg(m: &Mat2) -> Real {
    m[(1, 0)].atan2(m[(0, 0)]).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligned_reference_wells_give_identity() {
        let m = rotation_from_reference_centers(Pt2::new(0.0, 0.0), Pt2::new(100.0, 0.0)).unwrap();
        assert_eq!(m, Mat2::identity());
        assert_eq!(rotation_angle_deg(&m), 0.0);
    }

    #[test]
    fn diagonal_reference_wells_give_minus_45_degrees() {
        let m =
            rotation_from_reference_centers(Pt2::new(0.0, 0.0), Pt2::new(100.0, 100.0)).unwrap();

        let s = (0.5 as Real).sqrt();
        assert!((m[(0, 0)] - s).abs() < 1e-12);
        assert!((m[(0, 1)] - s).abs() < 1e-12);
        assert!((m[(1, 0)] + s).abs() < 1e-12);
        assert!((m[(1, 1)] - s).abs() < 1e-12);
        assert!((rotation_angle_deg(&m) + 45.0).abs() < 1e-12);
    }

    #[test]
    fn rotation_is_orthonormal_with_unit_determinant() {
        let m =
            rotation_from_reference_centers(Pt2::new(10.0, -3.0), Pt2::new(96.0, 4.2)).unwrap();

        let should_be_identity = m.transpose() * m;
        assert!((should_be_identity - Mat2::identity()).norm() < 1e-12);
        assert!((m.determinant() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn coincident_x_is_rejected() {
        assert_eq!(
            rotation_from_reference_centers(Pt2::new(5.0, 0.0), Pt2::new(5.0, 80.0)),
            Err(CalibrationError::CoincidentReferenceWells)
        );
    }
}
