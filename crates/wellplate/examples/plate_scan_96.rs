//! Plan a 2×2 grid scan over a handful of 96-well plate wells, with a
//! two-well calibration correcting for plate mounting rotation.

use wellplate::prelude::*;

fn rim_points(center: Pt2, radius: Real) -> Vec<Pt2> {
    [0.0_f64, 120.0, 240.0]
        .iter()
        .map(|deg| {
            let a = deg.to_radians();
            Pt2::new(center.x + radius * a.cos(), center.y + radius * a.sin())
        })
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let plate = wellplate::core::catalog::plate_96();

    // Pretend the stage sampled these rim points: A1 at the origin, A12
    // 99 mm away with a slight mounting tilt.
    let tilt = 0.4_f64.to_radians();
    let a12_center = Pt2::new(99_000.0 * tilt.cos(), 99_000.0 * tilt.sin());

    let calibration = calibrate_plate(&CalibrationInput {
        a1_points: rim_points(Pt2::new(0.0, 0.0), 3200.0),
        shape: WellShape::Circular,
        reference: Some(ReferenceWellPoints {
            well: Well::new(0, 11),
            points: rim_points(a12_center, 3200.0),
        }),
    })?;
    println!(
        "calibrated: A1 at ({:.1}, {:.1}) um, rotation {:.3} deg",
        calibration.a1_center.x, calibration.a1_center.y, calibration.rotation_angle_deg
    );

    let report = build_scan_plan(&ScanPlanInput {
        plate,
        calibration,
        wells: vec![
            Well::new(1, 1),
            Well::new(1, 2),
            Well::new(2, 2),
            Well::new(2, 1),
        ],
        pattern: FovPattern::Grid(GridPattern {
            rows: 2,
            cols: 2,
            overlap_x: 10.0,
            overlap_y: 10.0,
            order: TraversalOrder::RowWiseSnake,
            fov_width: 512.0,
            fov_height: 512.0,
        }),
        z: Some(1500.0),
    })?;

    println!(
        "{} positions over {} wells:",
        report.positions.len(),
        report.wells_visited
    );
    for position in &report.positions {
        println!(
            "  {}  x={:9.2}  y={:9.2}",
            position.name, position.x, position.y
        );
    }
    Ok(())
}
