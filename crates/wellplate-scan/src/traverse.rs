//! Stage-travel ordering over selected wells.

use std::collections::BTreeMap;

use wellplate_core::Well;

/// Order selected wells for efficient stage travel (snake/boustrophedon).
///
/// Rows are visited in ascending order; the column direction alternates
/// between visited rows, ascending first. Parity is counted over the rows
/// that actually contain selections, so a fully unselected row in between
/// does not break the alternation — the invariant is over the compacted row
/// index, not the raw plate row index.
///
/// Duplicate selections collapse to a single visit.
pub fn snake_well_order(selected: &[Well]) -> Vec<Well> {
    let mut by_row: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for well in selected {
        by_row.entry(well.row).or_default().push(well.col);
    }

    let mut ordered = Vec::with_capacity(selected.len());
    for (visited_idx, (row, mut cols)) in by_row.into_iter().enumerate() {
        cols.sort_unstable();
        cols.dedup();
        if visited_idx % 2 == 1 {
            cols.reverse();
        }
        ordered.extend(cols.into_iter().map(|col| Well::new(row, col)));
    }
    ordered
}
