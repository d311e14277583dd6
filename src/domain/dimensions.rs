use std::fmt;

use thiserror::Error;

use super::Coord;

/// Which side of the grid a value belongs to, for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::Width => "width",
            Axis::Height => "height",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DimensionError {
    #[error("grid {axis} must be positive")]
    Zero { axis: Axis },
    #[error("grid {axis} {input:?} is not a positive integer")]
    NotNumeric { axis: Axis, input: String },
}

/// Grid size in cells. Both sides are always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: usize,
    height: usize,
}

impl Dimensions {
    pub fn new(width: usize, height: usize) -> Result<Self, DimensionError> {
        if width == 0 {
            return Err(DimensionError::Zero { axis: Axis::Width });
        }
        if height == 0 {
            return Err(DimensionError::Zero { axis: Axis::Height });
        }
        Ok(Self { width, height })
    }

    /// Parse one side from user text, e.g. a numeric input field
    pub fn parse_axis(axis: Axis, input: &str) -> Result<usize, DimensionError> {
        let value = input
            .trim()
            .parse::<usize>()
            .map_err(|_| DimensionError::NotNumeric {
                axis,
                input: input.to_owned(),
            })?;
        if value == 0 {
            return Err(DimensionError::Zero { axis });
        }
        Ok(value)
    }

    /// Same grid with one side replaced
    pub fn with_axis(self, axis: Axis, value: usize) -> Result<Self, DimensionError> {
        match axis {
            Axis::Width => Self::new(value, self.height),
            Axis::Height => Self::new(self.width, value),
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    pub const fn contains(&self, coord: Coord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    /// Every coordinate in row-major order
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| Coord::new(row, col)))
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_sides() {
        assert_eq!(
            Dimensions::new(0, 5),
            Err(DimensionError::Zero { axis: Axis::Width })
        );
        assert_eq!(
            Dimensions::new(5, 0),
            Err(DimensionError::Zero { axis: Axis::Height })
        );
    }

    #[test]
    fn test_parse_axis() {
        assert_eq!(Dimensions::parse_axis(Axis::Width, " 42 "), Ok(42));
        assert_eq!(
            Dimensions::parse_axis(Axis::Height, "0"),
            Err(DimensionError::Zero { axis: Axis::Height })
        );
        assert!(matches!(
            Dimensions::parse_axis(Axis::Width, "-3"),
            Err(DimensionError::NotNumeric { .. })
        ));
        assert!(matches!(
            Dimensions::parse_axis(Axis::Width, ""),
            Err(DimensionError::NotNumeric { .. })
        ));
    }

    #[test]
    fn test_with_axis_replaces_one_side() {
        let dims = Dimensions::new(10, 8).unwrap();
        assert_eq!(dims.with_axis(Axis::Width, 3).unwrap(), Dimensions::new(3, 8).unwrap());
        assert_eq!(dims.with_axis(Axis::Height, 3).unwrap(), Dimensions::new(10, 3).unwrap());
        assert!(dims.with_axis(Axis::Height, 0).is_err());
    }

    #[test]
    fn test_contains_and_coords() {
        let dims = Dimensions::new(3, 2).unwrap();
        assert!(dims.contains(Coord::new(1, 2)));
        assert!(!dims.contains(Coord::new(2, 0)));
        assert!(!dims.contains(Coord::new(0, 3)));

        let all: Vec<_> = dims.coords().collect();
        assert_eq!(all.len(), dims.cell_count());
        assert_eq!(all[0], Coord::new(0, 0));
        assert_eq!(all[5], Coord::new(1, 2));
    }

    #[test]
    fn test_default_is_twenty_square() {
        let dims = Dimensions::default();
        assert_eq!((dims.width(), dims.height()), (20, 20));
    }
}
