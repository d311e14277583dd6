use std::collections::HashSet;

use rand::Rng;

use super::{Coord, CoordParseError, Dimensions};

/// The set of live cells. Anything not in the set is dead.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AliveSet {
    cells: HashSet<Coord>,
}

impl AliveSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed every cell alive with the given probability
    pub fn random<R: Rng>(dims: Dimensions, density: f64, rng: &mut R) -> Self {
        dims.coords().filter(|_| rng.random_bool(density)).collect()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    pub fn insert(&mut self, coord: Coord) -> bool {
        self.cells.insert(coord)
    }

    /// Flip a cell; returns whether it is now alive
    pub fn toggle(&mut self, coord: Coord) -> bool {
        if self.cells.remove(&coord) {
            false
        } else {
            self.cells.insert(coord);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }

    /// Drop cells outside the grid, e.g. after shrinking it
    pub fn retain_within(&mut self, dims: Dimensions) -> usize {
        let before = self.cells.len();
        self.cells.retain(|&coord| dims.contains(coord));
        before - self.cells.len()
    }

    /// Transport form: one `"row-col"` key per live cell, sorted for stable output
    pub fn to_keys(&self) -> Vec<String> {
        let mut coords: Vec<_> = self.iter().collect();
        coords.sort_unstable();
        coords.into_iter().map(|coord| coord.to_string()).collect()
    }

    pub fn from_keys<I, S>(keys: I) -> Result<Self, CoordParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keys.into_iter().map(|key| key.as_ref().parse()).collect()
    }
}

impl FromIterator<Coord> for AliveSet {
    fn from_iter<T: IntoIterator<Item = Coord>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[(usize, usize); N]> for AliveSet {
    fn from(cells: [(usize, usize); N]) -> Self {
        cells.into_iter().map(|(row, col)| Coord::new(row, col)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_toggle_flips_membership() {
        let mut set = AliveSet::new();
        assert!(set.toggle(Coord::new(1, 1)));
        assert!(set.contains(Coord::new(1, 1)));
        assert!(!set.toggle(Coord::new(1, 1)));
        assert!(set.is_empty());
    }

    #[test]
    fn test_insert_is_unique() {
        let mut set = AliveSet::new();
        assert!(set.insert(Coord::new(0, 0)));
        assert!(!set.insert(Coord::new(0, 0)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_retain_within_prunes_out_of_range() {
        let mut set = AliveSet::from([(0, 0), (4, 4), (2, 9)]);
        let dropped = set.retain_within(Dimensions::new(5, 3).unwrap());
        assert_eq!(dropped, 2);
        assert_eq!(set, AliveSet::from([(0, 0)]));
    }

    #[test]
    fn test_keys_round_trip() {
        let set = AliveSet::from([(10, 2), (0, 11), (3, 3)]);
        let keys = set.to_keys();
        assert_eq!(keys, vec!["0-11", "3-3", "10-2"]);
        assert_eq!(AliveSet::from_keys(&keys), Ok(set));
    }

    #[test]
    fn test_from_keys_reports_bad_key() {
        assert!(AliveSet::from_keys(["1-1", "oops"]).is_err());
    }

    #[test]
    fn test_random_stays_in_bounds() {
        let dims = Dimensions::new(7, 4).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let set = AliveSet::random(dims, 0.5, &mut rng);
        assert!(set.iter().all(|c| dims.contains(c)));
        assert!(AliveSet::random(dims, 0.0, &mut rng).is_empty());
        assert_eq!(AliveSet::random(dims, 1.0, &mut rng).len(), dims.cell_count());
    }
}
