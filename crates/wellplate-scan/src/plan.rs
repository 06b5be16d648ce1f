//! The all-in-one scan plan builder.

use serde::{Deserialize, Serialize};

use wellplate_calib::CalibrationResult;
use wellplate_core::{Plate, Real, Well};

use crate::{
    apply_inverse_rotation, positions_from_offsets, snake_well_order, well_center_in_stage,
    FovPattern, ScanError, StagePosition,
};

/// Everything a scan plan is computed from.
///
/// The plan is a pure function of this value: nothing is retained between
/// calls, so re-planning after a user edit or a fresh calibration is simply
/// calling [`build_scan_plan`] again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanPlanInput {
    /// Plate geometry.
    pub plate: Plate,
    /// Calibration to map plate coordinates onto the stage.
    pub calibration: CalibrationResult,
    /// Selected wells, in any order; the planner applies snake ordering.
    pub wells: Vec<Well>,
    /// FOV pattern applied to every selected well.
    pub pattern: FovPattern,
    /// Optional plate-wide focus height stamped on every position, µm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<Real>,
}

/// A computed scan plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanPlanReport {
    /// Named stage positions in acquisition order.
    pub positions: Vec<StagePosition>,
    /// Number of wells visited.
    pub wells_visited: usize,
    /// FOV positions emitted per well.
    pub positions_per_well: usize,
}

/// Build the flat, ordered stage position list for a scan.
///
/// Wells are visited in snake order. For each well the idealized centre is
/// computed from the plate pitch, corrected for the calibrated plate
/// rotation (about the A1 anchor), and expanded into FOV positions; FOV
/// offsets are corrected about the well centre. Both corrections use the
/// same inverse rotation, so the composition equals rotating the full
/// offset about A1 in one step.
///
/// # Errors
///
/// [`ScanError::NoWellsSelected`] for an empty selection, plus any mapper
/// or pattern validation failure. Errors surface before any position is
/// returned; there are no partial plans.
pub fn build_scan_plan(input: &ScanPlanInput) -> Result<ScanPlanReport, ScanError> {
    if input.wells.is_empty() {
        return Err(ScanError::NoWellsSelected);
    }

    // One offset list shared by every well: the pattern does not vary per
    // well, and sampling once keeps random patterns identical across wells.
    let offsets = input.pattern.offsets()?;
    let ordered = snake_well_order(&input.wells);
    let rotation = input.calibration.rotation.as_ref();
    let a1_center = input.calibration.a1_center;

    let mut positions = Vec::with_capacity(ordered.len() * offsets.len());
    for well in &ordered {
        let ideal = well_center_in_stage(&input.plate, *well, a1_center)?;
        let center = apply_inverse_rotation(rotation, a1_center, ideal);
        positions.extend(positions_from_offsets(
            &well.name(),
            center,
            &offsets,
            rotation,
            input.z,
        ));
    }

    log::debug!(
        "planned {} positions over {} wells of plate {}",
        positions.len(),
        ordered.len(),
        input.plate.id
    );

    Ok(ScanPlanReport {
        wells_visited: ordered.len(),
        positions_per_well: offsets.len(),
        positions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wellplate_core::Pt2;

    fn plate_96() -> Plate {
        Plate::new("96-well", true, 8, 12, (6.4, 6.4), (9.0, 9.0)).unwrap()
    }

    fn input(wells: Vec<Well>) -> ScanPlanInput {
        ScanPlanInput {
            plate: plate_96(),
            calibration: CalibrationResult::without_rotation(Pt2::new(0.0, 0.0)),
            wells,
            pattern: FovPattern::Center,
            z: None,
        }
    }

    #[test]
    fn plan_visits_wells_in_snake_order() {
        let report = build_scan_plan(&input(vec![
            Well::new(0, 0),
            Well::new(1, 0),
            Well::new(1, 1),
        ]))
        .unwrap();

        assert_eq!(report.wells_visited, 3);
        assert_eq!(report.positions_per_well, 1);
        let names: Vec<&str> = report.positions.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["A1_pos000", "B2_pos000", "B1_pos000"]);
    }

    #[test]
    fn plan_positions_follow_the_plate_pitch() {
        let report = build_scan_plan(&input(vec![Well::new(1, 2)])).unwrap();
        let p = &report.positions[0];
        assert_eq!((p.x, p.y), (18_000.0, -9000.0));
    }

    #[test]
    fn plan_stamps_the_focus_height() {
        let mut planned = input(vec![Well::new(0, 0)]);
        planned.z = Some(1250.0);
        let report = build_scan_plan(&planned).unwrap();
        assert_eq!(report.positions[0].z, Some(1250.0));
    }

    #[test]
    fn empty_selection_is_rejected() {
        assert_eq!(
            build_scan_plan(&input(vec![])),
            Err(ScanError::NoWellsSelected)
        );
    }

    #[test]
    fn out_of_bounds_selection_fails_the_whole_plan() {
        let report = build_scan_plan(&input(vec![Well::new(0, 0), Well::new(20, 0)]));
        assert!(matches!(
            report,
            Err(ScanError::WellOutOfBounds { .. })
        ));
    }

    #[test]
    fn plan_is_idempotent() {
        let planned = input(vec![Well::new(0, 0), Well::new(2, 3)]);
        assert_eq!(
            build_scan_plan(&planned).unwrap(),
            build_scan_plan(&planned).unwrap()
        );
    }

    #[test]
    fn serde_round_trips() {
        let planned = input(vec![Well::new(0, 0)]);
        let json = serde_json::to_string(&planned).unwrap();
        let restored: ScanPlanInput = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, planned);
    }
}
