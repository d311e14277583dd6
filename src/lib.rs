// Domain layer - cells, coordinates, the step function
pub mod domain;

// Application layer - generation loop and simulation state
pub mod application;

pub mod config;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use application::{GameState, GenerationLoop, StartMessage, TickMessage};
pub use config::Config;
pub use domain::{AliveSet, Coord, Dimensions, next_generation, presets};
