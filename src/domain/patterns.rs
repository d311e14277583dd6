use super::{AliveSet, Coord, Dimensions};

/// A named shape that can be stamped onto the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>, // (row, col) offsets of live cells
}

impl Pattern {
    /// Create a new pattern from live-cell offsets
    pub fn new(name: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let height = cells.iter().map(|(row, _)| *row).max().unwrap_or(0) + 1;
        let width = cells.iter().map(|(_, col)| *col).max().unwrap_or(0) + 1;
        Self { name, width, height, cells }
    }

    /// Mark the pattern's cells alive with `origin` as its top-left corner.
    /// Offsets wrap around the torus, so a pattern never leaves the grid.
    pub fn stamp(&self, alive: &mut AliveSet, origin: Coord, dims: Dimensions) {
        let origin = Coord::new(origin.row % dims.height(), origin.col % dims.width());
        for &(dr, dc) in &self.cells {
            alive.insert(origin.wrapped(dr as isize, dc as isize, dims));
        }
    }

    /// Top-left corner that puts the pattern in the middle of the grid
    pub fn centered_origin(&self, dims: Dimensions) -> Coord {
        Coord::new(
            dims.height().saturating_sub(self.height) / 2,
            dims.width().saturating_sub(self.width) / 2,
        )
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new("Block", vec![(0, 0), (0, 1), (1, 0), (1, 1)])
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", vec![(0, 0), (0, 1), (0, 2)])
    }

    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            vec![
                (0, 1), (0, 4),
                (1, 0),
                (2, 0), (2, 4),
                (3, 0), (3, 1), (3, 2), (3, 3),
            ],
        )
    }

    /// R-pentomino - classic methuselah
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            vec![
                (0, 1), (0, 2),
                (1, 0), (1, 1),
                (2, 1),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![block(), blinker(), toad(), beacon(), glider(), lwss(), r_pentomino()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::next_generation;

    fn dims(width: usize, height: usize) -> Dimensions {
        Dimensions::new(width, height).unwrap()
    }

    #[test]
    fn test_pattern_bounds() {
        let lwss = presets::lwss();
        assert_eq!((lwss.width, lwss.height), (5, 4));
        assert_eq!(presets::blinker().height, 1);
    }

    #[test]
    fn test_stamp_wraps_at_edges() {
        let mut alive = AliveSet::new();
        presets::blinker().stamp(&mut alive, Coord::new(4, 3), dims(4, 5));
        assert_eq!(alive, AliveSet::from([(4, 3), (4, 0), (4, 1)]));
    }

    #[test]
    fn test_centered_origin() {
        let origin = presets::block().centered_origin(dims(10, 6));
        assert_eq!(origin, Coord::new(2, 4));
        // Larger than the grid: pinned to the top-left
        assert_eq!(presets::lwss().centered_origin(dims(3, 3)), Coord::new(0, 0));
    }

    #[test]
    fn test_period_two_oscillators() {
        let d = dims(12, 12);
        for pattern in [presets::blinker(), presets::toad(), presets::beacon()] {
            let mut alive = AliveSet::new();
            pattern.stamp(&mut alive, pattern.centered_origin(d), d);
            let once = next_generation(&alive, d);
            assert_ne!(once, alive, "{} should change", pattern.name);
            assert_eq!(next_generation(&once, d), alive, "{} period", pattern.name);
        }
    }

    #[test]
    fn test_all_patterns_have_unique_names() {
        let names: Vec<_> = presets::all_patterns().iter().map(|p| p.name).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }
}
