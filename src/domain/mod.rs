mod alive_set;
mod cell;
mod coord;
mod dimensions;
mod patterns;
mod step;

pub use alive_set::AliveSet;
pub use cell::Cell;
pub use coord::{Coord, CoordParseError};
pub use dimensions::{Axis, DimensionError, Dimensions};
pub use patterns::{Pattern, presets};
pub use step::{count_live_neighbors, next_generation};
