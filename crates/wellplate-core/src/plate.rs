//! The well-plate geometry model.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use crate::{Real, Well};

/// Immutable description of a multi-well (or single-area) sample holder.
///
/// All lengths are in millimetres. Spacing is the centre-to-centre well
/// pitch; it may legitimately equal the well size for adjacent wells, so
/// `spacing >= size` is expected but not enforced.
///
/// A plate is constructed once (from a database record or a custom-plate
/// builder) and replaced wholesale when edited, never mutated in place.
///
/// # Example
///
/// ```
/// use wellplate_core::Plate;
///
/// let plate = Plate::new("96-well", true, 8, 12, (6.4, 6.4), (9.0, 9.0)).unwrap();
/// assert_eq!(plate.well_count(), 96);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plate {
    /// Identifier, e.g. `"96-well"`.
    pub id: String,
    /// Whether wells are round (`true`) or rectangular (`false`).
    pub circular: bool,
    /// Number of well rows (1 for non-multiwell areas such as coverslips).
    pub rows: usize,
    /// Number of well columns.
    pub columns: usize,
    /// Well footprint along x, mm.
    pub well_size_x: Real,
    /// Well footprint along y, mm.
    pub well_size_y: Real,
    /// Centre-to-centre well pitch along x, mm.
    pub well_spacing_x: Real,
    /// Centre-to-centre well pitch along y, mm.
    pub well_spacing_y: Real,
}

impl Plate {
    /// Construct a validated plate description.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is empty or any dimension is not
    /// strictly positive.
    pub fn new(
        id: impl Into<String>,
        circular: bool,
        rows: usize,
        columns: usize,
        well_size: (Real, Real),
        well_spacing: (Real, Real),
    ) -> Result<Self> {
        ensure!(
            rows >= 1 && columns >= 1,
            "plate grid must be at least 1x1, got {rows}x{columns}"
        );
        ensure!(
            well_size.0 > 0.0 && well_size.1 > 0.0,
            "well size must be positive, got {}x{} mm",
            well_size.0,
            well_size.1
        );
        ensure!(
            well_spacing.0 > 0.0 && well_spacing.1 > 0.0,
            "well spacing must be positive, got {}x{} mm",
            well_spacing.0,
            well_spacing.1
        );

        Ok(Self {
            id: id.into(),
            circular,
            rows,
            columns,
            well_size_x: well_size.0,
            well_size_y: well_size.1,
            well_spacing_x: well_spacing.0,
            well_spacing_y: well_spacing.1,
        })
    }

    /// Total number of wells (`rows * columns`).
    #[inline]
    pub fn well_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Whether a well address lies inside this plate's grid.
    #[inline]
    pub fn contains(&self, well: Well) -> bool {
        well.row < self.rows && well.col < self.columns
    }

    /// Iterate over every well address in row-major order.
    pub fn wells(&self) -> impl Iterator<Item = Well> + '_ {
        (0..self.rows).flat_map(|row| (0..self.columns).map(move |col| Well::new(row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plate_96() -> Plate {
        Plate::new("96-well", true, 8, 12, (6.4, 6.4), (9.0, 9.0)).unwrap()
    }

    #[test]
    fn well_count_is_rows_times_columns() {
        assert_eq!(plate_96().well_count(), 96);
    }

    #[test]
    fn contains_respects_grid_bounds() {
        let plate = plate_96();
        assert!(plate.contains(Well::new(0, 0)));
        assert!(plate.contains(Well::new(7, 11)));
        assert!(!plate.contains(Well::new(8, 0)));
        assert!(!plate.contains(Well::new(0, 12)));
    }

    #[test]
    fn wells_iterates_row_major() {
        let plate = Plate::new("area", false, 2, 3, (18.0, 18.0), (18.0, 18.0)).unwrap();
        let wells: Vec<Well> = plate.wells().collect();
        assert_eq!(wells.len(), 6);
        assert_eq!(wells[0], Well::new(0, 0));
        assert_eq!(wells[2], Well::new(0, 2));
        assert_eq!(wells[3], Well::new(1, 0));
    }

    #[test]
    fn rejects_degenerate_geometry() {
        assert!(Plate::new("empty", true, 0, 12, (6.4, 6.4), (9.0, 9.0)).is_err());
        assert!(Plate::new("flat", true, 8, 12, (0.0, 6.4), (9.0, 9.0)).is_err());
        assert!(Plate::new("overlap", true, 8, 12, (6.4, 6.4), (-9.0, 9.0)).is_err());
    }

    #[test]
    fn serde_round_trips() {
        let plate = plate_96();
        let json = serde_json::to_string(&plate).unwrap();
        let restored: Plate = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, plate);
    }
}
