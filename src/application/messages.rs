use crate::domain::{AliveSet, Dimensions};

/// Everything a run needs; the worker takes ownership of it for the run's lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartMessage {
    pub alive_cells: AliveSet,
    pub dimensions: Dimensions,
    /// Generation the run resumes from; the first tick reports `generation + 1`
    pub generation: u64,
}

/// Result of one tick, published to every subscriber
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickMessage {
    pub next_alive_cells: AliveSet,
    pub generation: u64,
}
