//! Mathematical type aliases and unit helpers.

use nalgebra::{Matrix2, Point2, Vector2};

/// Scalar type used throughout the library (currently `f64`).
pub type Real = f64;

/// 2D vector with [`Real`] components.
pub type Vec2 = Vector2<Real>;
/// 2D point with [`Real`] coordinates.
pub type Pt2 = Point2<Real>;
/// 2×2 matrix with [`Real`] entries.
pub type Mat2 = Matrix2<Real>;

/// Micrometres per millimetre.
pub const MM_TO_UM: Real = 1000.0;

/// Convert a length in millimetres to micrometres.
#[inline]
pub fn mm_to_um(mm: Real) -> Real {
    mm * MM_TO_UM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mm_to_um_scales_by_a_thousand() {
        assert_eq!(mm_to_um(1.0), 1000.0);
        assert_eq!(mm_to_um(0.0), 0.0);
        assert_eq!(mm_to_um(-4.5), -4500.0);
    }
}
