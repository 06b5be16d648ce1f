//! Field-of-view patterns: how FOVs are distributed within a well.
//!
//! Each generator yields offsets in micrometres relative to the well centre,
//! in acquisition order. Generators are deterministic: grids have a
//! selectable traversal order and random patterns carry an explicit seed, so
//! the same parameters always reproduce the same offsets.

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use wellplate_core::{Real, Vec2};

use crate::PatternError;

/// Traversal order for [`GridPattern`] cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraversalOrder {
    /// Row by row, columns ascending in every row.
    RowWise,
    /// Column by column, rows ascending in every column.
    ColumnWise,
    /// Row by row, column direction alternating per row.
    #[default]
    RowWiseSnake,
    /// Column by column, row direction alternating per column.
    ColumnWiseSnake,
    /// Outward ring walk starting at the centre cell.
    Spiral,
}

/// Grid of FOVs centred on the well, with per-axis overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridPattern {
    /// Grid rows.
    pub rows: usize,
    /// Grid columns.
    pub cols: usize,
    /// Overlap between adjacent FOVs along x, percent of FOV width.
    pub overlap_x: Real,
    /// Overlap between adjacent FOVs along y, percent of FOV height.
    pub overlap_y: Real,
    /// Cell traversal order.
    pub order: TraversalOrder,
    /// FOV width, µm.
    pub fov_width: Real,
    /// FOV height, µm.
    pub fov_height: Real,
}

/// Random FOVs sampled inside a bounding area centred on the well.
///
/// The seed is stored explicitly so a stored sequence reproduces the exact
/// same points; the surrounding application regenerates it only on an
/// explicit "generate new points" action, never implicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomPattern {
    /// Target number of points.
    pub num_points: usize,
    /// Bounding area width, µm.
    pub area_width: Real,
    /// Bounding area height, µm.
    pub area_height: Real,
    /// Sample inside the inscribed ellipse instead of the full rectangle.
    pub circular: bool,
    /// Minimum separation between accepted points, µm. Zero disables.
    pub min_separation: Real,
    /// RNG seed.
    pub seed: u64,
    /// FOV width, µm.
    pub fov_width: Real,
    /// FOV height, µm.
    pub fov_height: Real,
}

/// How FOVs are distributed within a well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FovPattern {
    /// A single FOV at the well centre.
    Center,
    /// A grid of FOVs.
    Grid(GridPattern),
    /// Seeded random points.
    Random(RandomPattern),
}

impl FovPattern {
    /// Offsets of each FOV centre relative to the well centre, µm, in
    /// acquisition order.
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError`] when the pattern parameters fail to
    /// validate; `Center` never fails.
    pub fn offsets(&self) -> Result<Vec<Vec2>, PatternError> {
        match self {
            Self::Center => Ok(vec![Vec2::zeros()]),
            Self::Grid(grid) => grid.offsets(),
            Self::Random(random) => random.sample(),
        }
    }
}

impl GridPattern {
    /// Grid cell offsets relative to the well centre, in traversal order.
    ///
    /// The pitch along each axis is `fov * (1 - overlap / 100)`; the grid is
    /// centred on the origin and grid row 0 sits at the top (+y), so y
    /// decreases with increasing grid row.
    pub fn offsets(&self) -> Result<Vec<Vec2>, PatternError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(PatternError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.fov_width <= 0.0 || self.fov_height <= 0.0 {
            return Err(PatternError::NonPositiveFov {
                width: self.fov_width,
                height: self.fov_height,
            });
        }
        let overlap_max = self.overlap_x.max(self.overlap_y);
        if overlap_max >= 100.0 {
            return Err(PatternError::OverlapTooLarge(overlap_max));
        }

        let pitch_x = self.fov_width * (1.0 - self.overlap_x / 100.0);
        let pitch_y = self.fov_height * (1.0 - self.overlap_y / 100.0);
        let x0 = -(self.cols as Real - 1.0) * 0.5 * pitch_x;
        let y0 = (self.rows as Real - 1.0) * 0.5 * pitch_y;

        Ok(traversal_cells(self.rows, self.cols, self.order)
            .into_iter()
            .map(|(r, c)| Vec2::new(x0 + c as Real * pitch_x, y0 - r as Real * pitch_y))
            .collect())
    }
}

/// Grid cell visit order for each [`TraversalOrder`].
fn traversal_cells(rows: usize, cols: usize, order: TraversalOrder) -> Vec<(usize, usize)> {
    let mut cells = Vec::with_capacity(rows * cols);
    match order {
        TraversalOrder::RowWise => {
            for r in 0..rows {
                for c in 0..cols {
                    cells.push((r, c));
                }
            }
        }
        TraversalOrder::ColumnWise => {
            for c in 0..cols {
                for r in 0..rows {
                    cells.push((r, c));
                }
            }
        }
        TraversalOrder::RowWiseSnake => {
            for r in 0..rows {
                if r % 2 == 0 {
                    for c in 0..cols {
                        cells.push((r, c));
                    }
                } else {
                    for c in (0..cols).rev() {
                        cells.push((r, c));
                    }
                }
            }
        }
        TraversalOrder::ColumnWiseSnake => {
            for c in 0..cols {
                if c % 2 == 0 {
                    for r in 0..rows {
                        cells.push((r, c));
                    }
                } else {
                    for r in (0..rows).rev() {
                        cells.push((r, c));
                    }
                }
            }
        }
        TraversalOrder::Spiral => return spiral_cells(rows, cols),
    }
    cells
}

/// Outward ring walk from the centre cell: right, down, left, up with run
/// lengths 1, 1, 2, 2, 3, 3, ... Cells outside the grid are skipped but the
/// walk itself continues, so elongated grids are still fully covered.
fn spiral_cells(rows: usize, cols: usize) -> Vec<(usize, usize)> {
    let total = rows * cols;
    let mut cells = Vec::with_capacity(total);

    let mut r = (rows as isize - 1) / 2;
    let mut c = (cols as isize - 1) / 2;
    let push = |r: isize, c: isize, cells: &mut Vec<(usize, usize)>| {
        if r >= 0 && c >= 0 && (r as usize) < rows && (c as usize) < cols {
            cells.push((r as usize, c as usize));
        }
    };
    push(r, c, &mut cells);

    let directions = [(0isize, 1isize), (1, 0), (0, -1), (-1, 0)];
    let mut direction = 0;
    let mut run = 1usize;
    while cells.len() < total {
        for _ in 0..2 {
            let (dr, dc) = directions[direction];
            for _ in 0..run {
                r += dr;
                c += dc;
                push(r, c, &mut cells);
            }
            direction = (direction + 1) % 4;
        }
        run += 1;
    }
    cells
}

impl RandomPattern {
    /// Sample the pattern's points, µm relative to the well centre.
    ///
    /// Rejection sampling with the stored seed: uniform in the bounding
    /// rectangle, restricted to the inscribed ellipse when `circular`, and
    /// re-drawn while closer than `min_separation` to an accepted point.
    /// If the target count cannot be met within the attempt budget the
    /// points found so far are returned and the shortfall is logged.
    ///
    /// Accepted points are ordered by Euclidean distance from the bounding
    /// area's top-left corner — a deterministic, reproducible ordering, not
    /// an acquisition-optimal travel order.
    pub fn sample(&self) -> Result<Vec<Vec2>, PatternError> {
        if self.area_width <= 0.0 || self.area_height <= 0.0 {
            return Err(PatternError::NonPositiveArea {
                width: self.area_width,
                height: self.area_height,
            });
        }
        if self.fov_width <= 0.0 || self.fov_height <= 0.0 {
            return Err(PatternError::NonPositiveFov {
                width: self.fov_width,
                height: self.fov_height,
            });
        }

        let half_w = self.area_width * 0.5;
        let half_h = self.area_height * 0.5;

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut points: Vec<Vec2> = Vec::with_capacity(self.num_points);
        let max_attempts = self.num_points.saturating_mul(100).max(100);

        let mut attempts = 0;
        while points.len() < self.num_points && attempts < max_attempts {
            attempts += 1;
            let x = rng.random_range(-half_w..=half_w);
            let y = rng.random_range(-half_h..=half_h);
            if self.circular {
                let nx = x / half_w;
                let ny = y / half_h;
                if nx * nx + ny * ny > 1.0 {
                    continue;
                }
            }
            let candidate = Vec2::new(x, y);
            if self.min_separation > 0.0
                && points
                    .iter()
                    .any(|p| (candidate - p).norm() < self.min_separation)
            {
                continue;
            }
            points.push(candidate);
        }

        if points.len() < self.num_points {
            log::warn!(
                "placed {} of {} random points within the attempt budget",
                points.len(),
                self.num_points
            );
        }

        let top_left = Vec2::new(-half_w, half_h);
        points.sort_by(|a, b| {
            let da = (a - top_left).norm_squared();
            let db = (b - top_left).norm_squared();
            da.total_cmp(&db)
        });

        Ok(points)
    }
}
