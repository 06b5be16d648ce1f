//! The coordinate mapper: logical well/FOV coordinates to stage coordinates.
//!
//! This is where the single mm→µm unit crossing happens: plate geometry is
//! stored in millimetres, stage coordinates are micrometres.

use serde::{Deserialize, Serialize};

use wellplate_core::{mm_to_um, Mat2, Plate, Pt2, Real, Vec2, Well};

use crate::{FovPattern, ScanError};

/// One named absolute stage position, µm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StagePosition {
    /// Position name, e.g. `"A1_pos003"`.
    pub name: String,
    /// Stage x, µm.
    pub x: Real,
    /// Stage y, µm.
    pub y: Real,
    /// Optional focus height, µm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<Real>,
}

/// Stage coordinates of a well centre in the idealized, axis-aligned plate
/// frame anchored at the calibrated A1 centre.
///
/// `x` grows with the column index and `y` shrinks with the row index,
/// consistent with the plate's top-left-origin convention. Spacing is
/// converted from millimetres to micrometres here.
///
/// # Errors
///
/// [`ScanError::WellOutOfBounds`] when the well lies outside the plate's
/// declared grid — a contract violation in the caller, not a user input
/// problem.
pub fn well_center_in_stage(
    plate: &Plate,
    well: Well,
    a1_center: Pt2,
) -> Result<Pt2, ScanError> {
    if !plate.contains(well) {
        return Err(ScanError::WellOutOfBounds {
            name: well.name(),
            rows: plate.rows,
            columns: plate.columns,
        });
    }
    let dx = mm_to_um(plate.well_spacing_x) * well.col as Real;
    let dy = mm_to_um(plate.well_spacing_y) * well.row as Real;
    Ok(Pt2::new(a1_center.x + dx, a1_center.y - dy))
}

/// Rotate `point` about `center` by the inverse of the plate rotation.
///
/// Computes `center + R⁻¹ · (point - center)`; the identity when no rotation
/// was calibrated. This undoes the measured plate misalignment so points
/// computed in the idealized, axis-aligned frame land correctly on the
/// physically rotated plate.
pub fn apply_inverse_rotation(rotation: Option<&Mat2>, center: Pt2, point: Pt2) -> Pt2 {
    match rotation {
        // A calibrated rotation is orthonormal, so its inverse is its
        // transpose.
        Some(r) => center + r.transpose() * (point - center),
        None => point,
    }
}

/// Expand a FOV pattern into named stage positions for one well.
///
/// Each pattern offset is added to the well centre, then the inverse plate
/// rotation is applied about that centre. Names are
/// `"{well_name}_pos{index:03}"` with the index assigned in generation
/// order.
pub fn fov_positions_for_well(
    well_name: &str,
    center: Pt2,
    pattern: &FovPattern,
    rotation: Option<&Mat2>,
    z: Option<Real>,
) -> Result<Vec<StagePosition>, ScanError> {
    let offsets = pattern.offsets()?;
    Ok(positions_from_offsets(well_name, center, &offsets, rotation, z))
}

/// [`fov_positions_for_well`] with pre-computed pattern offsets, for callers
/// that reuse one offset list across many wells.
pub fn positions_from_offsets(
    well_name: &str,
    center: Pt2,
    offsets: &[Vec2],
    rotation: Option<&Mat2>,
    z: Option<Real>,
) -> Vec<StagePosition> {
    offsets
        .iter()
        .enumerate()
        .map(|(index, offset)| {
            let p = apply_inverse_rotation(rotation, center, center + offset);
            StagePosition {
                name: format!("{well_name}_pos{index:03}"),
                x: p.x,
                y: p.y,
                z,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wellplate_core::Plate;

    fn plate() -> Plate {
        Plate::new("96-well", true, 8, 12, (6.4, 6.4), (1.0, 1.0)).unwrap()
    }

    #[test]
    fn a1_maps_to_the_calibrated_center() {
        let a1 = Pt2::new(123.0, -456.0);
        let mapped = well_center_in_stage(&plate(), Well::new(0, 0), a1).unwrap();
        assert_eq!(mapped, a1);
    }

    #[test]
    fn spacing_is_converted_to_micrometres() {
        // 1.0 mm spacing: well (row 1, col 2) sits 2000 µm right and
        // 1000 µm below A1.
        let mapped =
            well_center_in_stage(&plate(), Well::new(1, 2), Pt2::new(0.0, 0.0)).unwrap();
        assert_eq!(mapped, Pt2::new(2000.0, -1000.0));
    }

    #[test]
    fn out_of_bounds_well_is_a_contract_violation() {
        let err = well_center_in_stage(&plate(), Well::new(8, 0), Pt2::new(0.0, 0.0)).unwrap_err();
        assert_eq!(
            err,
            ScanError::WellOutOfBounds {
                name: "I1".into(),
                rows: 8,
                columns: 12,
            }
        );
    }

    #[test]
    fn missing_rotation_is_the_identity() {
        let p = Pt2::new(10.0, 20.0);
        assert_eq!(apply_inverse_rotation(None, Pt2::new(0.0, 0.0), p), p);
    }

    #[test]
    fn inverse_rotation_undoes_the_forward_rotation() {
        let angle = (30.0 as Real).to_radians();
        let (sin, cos) = angle.sin_cos();
        let r = Mat2::new(cos, -sin, sin, cos);
        let center = Pt2::new(500.0, -250.0);
        let point = Pt2::new(800.0, -100.0);

        let rotated = center + r * (point - center);
        let recovered = apply_inverse_rotation(Some(&r), center, rotated);
        assert!((recovered - point).norm() < 1e-9);
    }

    #[test]
    fn center_pattern_round_trips_the_well_center() {
        let center = Pt2::new(321.5, 654.25);
        let positions =
            fov_positions_for_well("B3", center, &FovPattern::Center, None, None).unwrap();

        assert_eq!(positions.len(), 1);
        assert_eq!(positions[0].name, "B3_pos000");
        assert_eq!(positions[0].x, center.x);
        assert_eq!(positions[0].y, center.y);
        assert_eq!(positions[0].z, None);
    }

    #[test]
    fn position_names_are_zero_padded_in_generation_order() {
        let offsets: Vec<Vec2> = (0..12).map(|i| Vec2::new(i as Real, 0.0)).collect();
        let positions =
            positions_from_offsets("C7", Pt2::new(0.0, 0.0), &offsets, None, Some(15.5));

        assert_eq!(positions[0].name, "C7_pos000");
        assert_eq!(positions[9].name, "C7_pos009");
        assert_eq!(positions[11].name, "C7_pos011");
        assert!(positions.iter().all(|p| p.z == Some(15.5)));
    }

    #[test]
    fn stage_position_serde_round_trips() {
        let position = StagePosition {
            name: "A1_pos000".into(),
            x: 1.5,
            y: -2.5,
            z: None,
        };
        let json = serde_json::to_string(&position).unwrap();
        assert!(!json.contains("\"z\""));
        let restored: StagePosition = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, position);
    }
}
