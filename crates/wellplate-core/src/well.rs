//! Zero-based well addressing and `"A1"`-style naming.

use std::fmt;

use anyhow::{bail, ensure, Result};
use serde::{Deserialize, Serialize};

/// Zero-based (row, column) address of a well on a plate.
///
/// The derived ordering is row-major: all of row `A` before row `B`, columns
/// ascending within a row.
///
/// # Example
///
/// ```
/// use wellplate_core::Well;
///
/// let well = Well::new(1, 2);
/// assert_eq!(well.name(), "B3");
/// assert_eq!(Well::parse("B3").unwrap(), well);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Well {
    /// Row index, 0 = row `A`.
    pub row: usize,
    /// Column index, 0 = column `1`.
    pub col: usize,
}

impl Well {
    /// Construct a well address from zero-based row and column indices.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The canonical `"A1"`-style name: row letters, then 1-based column.
    ///
    /// Rows beyond `Z` continue with two letters (`AA`, `AB`, ...), so
    /// 1536-well plates address correctly.
    pub fn name(&self) -> String {
        self.to_string()
    }

    /// Parse an `"A1"`-style name back into a zero-based address.
    ///
    /// # Errors
    ///
    /// Returns an error for names without a row-letter prefix, without a
    /// column number, or with a column of 0 (columns are 1-based).
    pub fn parse(s: &str) -> Result<Self> {
        let Some(digit_at) = s.find(|c: char| c.is_ascii_digit()) else {
            bail!("well name `{s}` has no column number");
        };
        let (letters, digits) = s.split_at(digit_at);
        ensure!(
            !letters.is_empty() && letters.chars().all(|c| c.is_ascii_uppercase()),
            "well name `{s}` must start with upper-case row letters"
        );

        let row = letters
            .chars()
            .fold(0usize, |acc, c| acc * 26 + (c as usize - 'A' as usize + 1))
            - 1;
        let col: usize = digits
            .parse()
            .map_err(|_| anyhow::anyhow!("well name `{s}` has an invalid column number"))?;
        ensure!(col >= 1, "well column in `{s}` is 1-based");

        Ok(Self { row, col: col - 1 })
    }
}

impl fmt::Display for Well {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", row_label(self.row), self.col + 1)
    }
}

/// Row letters for a zero-based row index: `A..Z`, then `AA..AZ`, ...
fn row_label(mut row: usize) -> String {
    let mut label = String::new();
    loop {
        label.insert(0, (b'A' + (row % 26) as u8) as char);
        if row < 26 {
            break;
        }
        row = row / 26 - 1;
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_single_letter_rows() {
        assert_eq!(Well::new(0, 0).name(), "A1");
        assert_eq!(Well::new(7, 11).name(), "H12");
        assert_eq!(Well::new(25, 0).name(), "Z1");
    }

    #[test]
    fn names_multi_letter_rows() {
        assert_eq!(Well::new(26, 0).name(), "AA1");
        assert_eq!(Well::new(27, 47).name(), "AB48");
    }

    #[test]
    fn parse_round_trips() {
        for well in [
            Well::new(0, 0),
            Well::new(7, 11),
            Well::new(25, 23),
            Well::new(26, 0),
            Well::new(31, 47),
        ] {
            assert_eq!(Well::parse(&well.name()).unwrap(), well);
        }
    }

    #[test]
    fn parse_rejects_malformed_names() {
        assert!(Well::parse("").is_err());
        assert!(Well::parse("12").is_err());
        assert!(Well::parse("A").is_err());
        assert!(Well::parse("a1").is_err());
        assert!(Well::parse("A0").is_err());
        assert!(Well::parse("A1b").is_err());
    }

    #[test]
    fn ordering_is_row_major() {
        let mut wells = vec![Well::new(1, 0), Well::new(0, 5), Well::new(0, 1)];
        wells.sort();
        assert_eq!(
            wells,
            vec![Well::new(0, 1), Well::new(0, 5), Well::new(1, 0)]
        );
    }

    #[test]
    fn serde_round_trips() {
        let well = Well::new(3, 9);
        let json = serde_json::to_string(&well).unwrap();
        let restored: Well = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, well);
    }
}
