//! Canonical plate geometries.
//!
//! The surrounding application keeps its own editable plate database; this
//! module carries only the canonical ANSI/SLAS footprints (and a coverslip
//! area) so a plan can be built without one. Loading and saving user plate
//! databases is the application's job, not this crate's.

use crate::Plate;

/// ANSI/SLAS 6-well plate: 2×3 round wells on a 39.12 mm pitch.
pub fn plate_6() -> Plate {
    Plate {
        id: "6-well".into(),
        circular: true,
        rows: 2,
        columns: 3,
        well_size_x: 34.8,
        well_size_y: 34.8,
        well_spacing_x: 39.12,
        well_spacing_y: 39.12,
    }
}

/// ANSI/SLAS 24-well plate: 4×6 round wells on a 19.3 mm pitch.
pub fn plate_24() -> Plate {
    Plate {
        id: "24-well".into(),
        circular: true,
        rows: 4,
        columns: 6,
        well_size_x: 15.6,
        well_size_y: 15.6,
        well_spacing_x: 19.3,
        well_spacing_y: 19.3,
    }
}

/// ANSI/SLAS 96-well plate: 8×12 round wells on a 9 mm pitch.
pub fn plate_96() -> Plate {
    Plate {
        id: "96-well".into(),
        circular: true,
        rows: 8,
        columns: 12,
        well_size_x: 6.4,
        well_size_y: 6.4,
        well_spacing_x: 9.0,
        well_spacing_y: 9.0,
    }
}

/// ANSI/SLAS 384-well plate: 16×24 square wells on a 4.5 mm pitch.
pub fn plate_384() -> Plate {
    Plate {
        id: "384-well".into(),
        circular: false,
        rows: 16,
        columns: 24,
        well_size_x: 3.7,
        well_size_y: 3.7,
        well_spacing_x: 4.5,
        well_spacing_y: 4.5,
    }
}

/// Square 18 mm coverslip, modelled as a 1×1 rectangular area.
pub fn coverslip_18mm() -> Plate {
    Plate {
        id: "coverslip-18mm-square".into(),
        circular: false,
        rows: 1,
        columns: 1,
        well_size_x: 18.0,
        well_size_y: 18.0,
        well_spacing_x: 18.0,
        well_spacing_y: 18.0,
    }
}

/// All built-in plate definitions.
pub fn standard_plates() -> Vec<Plate> {
    vec![
        plate_6(),
        plate_24(),
        plate_96(),
        plate_384(),
        coverslip_18mm(),
    ]
}

/// Look up a built-in plate by id.
pub fn find(id: &str) -> Option<Plate> {
    standard_plates().into_iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_entries_are_valid() {
        for plate in standard_plates() {
            let revalidated = Plate::new(
                plate.id.clone(),
                plate.circular,
                plate.rows,
                plate.columns,
                (plate.well_size_x, plate.well_size_y),
                (plate.well_spacing_x, plate.well_spacing_y),
            );
            assert!(revalidated.is_ok(), "catalog plate {} invalid", plate.id);
        }
    }

    #[test]
    fn find_by_id() {
        let plate = find("384-well").unwrap();
        assert_eq!(plate.rows, 16);
        assert_eq!(plate.columns, 24);
        assert!(!plate.circular);

        assert!(find("1536-well").is_none());
    }

    #[test]
    fn coverslip_is_single_area() {
        assert_eq!(coverslip_18mm().well_count(), 1);
    }
}
