//! Well-centre estimation from stage-coordinate samples.

use std::fmt;

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};
use wellplate_core::{Plate, Pt2, Real};

use crate::CalibrationError;

/// Well footprint shape, selecting which centre estimator applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WellShape {
    /// Round well: centre from 3 rim points.
    Circular,
    /// Rectangular well: centre from 2 opposite vertices or 4 side points.
    Rectangular,
}

impl WellShape {
    /// The shape of a plate's wells.
    pub fn of(plate: &Plate) -> Self {
        if plate.circular {
            Self::Circular
        } else {
            Self::Rectangular
        }
    }
}

impl fmt::Display for WellShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Circular => write!(f, "circular"),
            Self::Rectangular => write!(f, "rectangular"),
        }
    }
}

/// Estimate a well's centre from calibration samples taken on its edge.
///
/// Samples are stage coordinates in micrometres. Circular wells take exactly
/// 3 non-collinear rim points; rectangular wells take 2 opposite vertices or
/// 4 points, one per side.
///
/// # Errors
///
/// - [`CalibrationError::WrongPointCount`] when the sample count does not
///   match the shape (the caller should block the calibrate action until it
///   does),
/// - [`CalibrationError::CollinearPoints`] when the 3 rim points admit no
///   circle.
pub fn well_center_from_points(
    points: &[Pt2],
    shape: WellShape,
) -> Result<Pt2, CalibrationError> {
    match shape {
        WellShape::Circular => match points {
            [a, b, c] => circle_center(a, b, c),
            _ => Err(CalibrationError::WrongPointCount {
                shape,
                expected: "3",
                got: points.len(),
            }),
        },
        WellShape::Rectangular => match points {
            [a, b] => Ok(Pt2::new((a.x + b.x) * 0.5, (a.y + b.y) * 0.5)),
            [_, _, _, _] => Ok(bounding_box_midpoint(points)),
            _ => Err(CalibrationError::WrongPointCount {
                shape,
                expected: "2 or 4",
                got: points.len(),
            }),
        },
    }
}

/// Centre of the circle through three points.
///
/// Solves the linear system
/// `[[ax, ay, 1], [bx, by, 1], [cx, cy, 1]] · [u, v, k]ᵗ = [|a|², |b|², |c|²]ᵗ`
/// whose solution satisfies `u = 2·xc`, `v = 2·yc`; `k` is discarded.
fn circle_center(a: &Pt2, b: &Pt2, c: &Pt2) -> Result<Pt2, CalibrationError> {
    // Collinearity check first: a singular solve must surface as a typed
    // error, never as NaN. The cross product is scaled by the chord lengths
    // so the threshold is unit-independent.
    let ab = b - a;
    let ac = c - a;
    let cross = ab.x * ac.y - ab.y * ac.x;
    if cross.abs() <= ab.norm() * ac.norm() * 1e-12 {
        return Err(CalibrationError::CollinearPoints);
    }

    let m = Matrix3::new(
        a.x, a.y, 1.0, //
        b.x, b.y, 1.0, //
        c.x, c.y, 1.0,
    );
    let rhs = Vector3::new(
        a.x * a.x + a.y * a.y,
        b.x * b.x + b.y * b.y,
        c.x * c.x + c.y * c.y,
    );

    let sol = m
        .lu()
        .solve(&rhs)
        .ok_or(CalibrationError::CollinearPoints)?;
    Ok(Pt2::new(sol.x * 0.5, sol.y * 0.5))
}

/// Midpoint of the axis-aligned bounding box of the sampled points.
fn bounding_box_midpoint(points: &[Pt2]) -> Pt2 {
    let mut min_x = Real::INFINITY;
    let mut max_x = Real::NEG_INFINITY;
    let mut min_y = Real::INFINITY;
    let mut max_y = Real::NEG_INFINITY;
    for p in points {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }
    Pt2::new((min_x + max_x) * 0.5, (min_y + max_y) * 0.5)
}
