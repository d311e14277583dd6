use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::Dimensions;

/// Separator used by the transport encoding. Never appears in an unsigned decimal.
const SEPARATOR: char = '-';

/// A cell position on the grid, 0-indexed as (row, column).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Offset by (dr, dc) and wrap around the torus.
    ///
    /// Offsets are taken modulo the grid size, so -1 is expressed as
    /// `height - 1` / `width - 1` and unsigned arithmetic never underflows.
    pub fn wrapped(self, dr: isize, dc: isize, dims: Dimensions) -> Self {
        let h = dims.height() as isize;
        let w = dims.width() as isize;
        let row = (self.row as isize + dr.rem_euclid(h)) % h;
        let col = (self.col as isize + dc.rem_euclid(w)) % w;
        Self::new(row as usize, col as usize)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.row, self.col)
    }
}

/// Failure to decode a `"row-col"` key
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordParseError {
    #[error("coordinate key {0:?} has no '-' separator")]
    MissingSeparator(String),
    #[error("coordinate key {key:?} has a non-numeric component {component:?}")]
    InvalidComponent { key: String, component: String },
}

impl FromStr for Coord {
    type Err = CoordParseError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let (row, col) = key
            .split_once(SEPARATOR)
            .ok_or_else(|| CoordParseError::MissingSeparator(key.to_owned()))?;

        let parse = |component: &str| {
            component
                .parse::<usize>()
                .map_err(|_| CoordParseError::InvalidComponent {
                    key: key.to_owned(),
                    component: component.to_owned(),
                })
        };

        Ok(Self::new(parse(row)?, parse(col)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(width: usize, height: usize) -> Dimensions {
        Dimensions::new(width, height).unwrap()
    }

    #[test]
    fn test_display_uses_row_then_col() {
        assert_eq!(Coord::new(3, 17).to_string(), "3-17");
    }

    #[test]
    fn test_parse_round_trips() {
        for coord in [Coord::new(0, 0), Coord::new(12, 3), Coord::new(999, 1000)] {
            assert_eq!(coord.to_string().parse::<Coord>(), Ok(coord));
        }
    }

    #[test]
    fn test_parse_rejects_missing_separator() {
        assert_eq!(
            "1234".parse::<Coord>(),
            Err(CoordParseError::MissingSeparator("1234".into()))
        );
    }

    #[test]
    fn test_parse_rejects_negative_and_garbage() {
        assert!(matches!(
            "1--2".parse::<Coord>(),
            Err(CoordParseError::InvalidComponent { .. })
        ));
        assert!(matches!(
            "a-2".parse::<Coord>(),
            Err(CoordParseError::InvalidComponent { .. })
        ));
        assert!(matches!(
            "2-".parse::<Coord>(),
            Err(CoordParseError::InvalidComponent { .. })
        ));
    }

    #[test]
    fn test_wrapped_crosses_edges() {
        let d = dims(5, 4);
        assert_eq!(Coord::new(0, 0).wrapped(-1, -1, d), Coord::new(3, 4));
        assert_eq!(Coord::new(3, 4).wrapped(1, 1, d), Coord::new(0, 0));
        assert_eq!(Coord::new(2, 2).wrapped(0, 1, d), Coord::new(2, 3));
    }

    #[test]
    fn test_wrapped_on_single_cell_grid() {
        let d = dims(1, 1);
        assert_eq!(Coord::new(0, 0).wrapped(-1, 1, d), Coord::new(0, 0));
    }
}
