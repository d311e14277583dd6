use tracing::{debug, info, warn};

use super::{GenerationLoop, StartMessage, Subscription};
use crate::config::Config;
use crate::domain::{AliveSet, Coord, Dimensions, Pattern};

/// Chance a cell starts alive when randomizing
const RANDOM_DENSITY: f64 = 0.3;

/// GameState orchestrates the simulation.
/// This is the application layer that coordinates domain logic and
/// owns the lifecycle of the background generation loop.
pub struct GameState {
    pub alive: AliveSet,
    pub dimensions: Dimensions,
    pub generation: u64,
    generation_loop: GenerationLoop,
    ticks: Subscription,
}

impl GameState {
    pub fn new(config: &Config) -> Self {
        let mut generation_loop = GenerationLoop::new(config.tick_interval);
        let ticks = generation_loop.subscribe();
        Self {
            alive: AliveSet::new(),
            dimensions: config.dimensions,
            generation: 0,
            generation_loop,
            ticks,
        }
    }

    pub fn is_running(&self) -> bool {
        self.generation_loop.is_running()
    }

    /// Starting makes sense once there is something to simulate or resume
    pub fn can_start(&self) -> bool {
        !self.alive.is_empty() || self.generation > 0
    }

    /// Flip one cell (editing is only allowed while stopped)
    pub fn toggle_cell(&mut self, coord: Coord) {
        if self.is_running() || !self.dimensions.contains(coord) {
            return;
        }
        let alive = self.alive.toggle(coord);
        debug!(%coord, alive, "cell toggled");
    }

    /// Start or stop the simulation
    pub fn toggle_running(mut self) -> Self {
        if self.is_running() {
            self.generation_loop.stop();
        } else if self.can_start() {
            self.generation_loop.start(StartMessage {
                alive_cells: self.alive.clone(),
                dimensions: self.dimensions,
                generation: self.generation,
            });
        } else {
            debug!("nothing to simulate");
        }
        self
    }

    /// Clear grid and reset generation counter
    pub fn clear(mut self) -> Self {
        if self.is_running() {
            return self;
        }
        self.alive.clear();
        self.generation = 0;
        self
    }

    /// Randomize grid and reset generation counter
    pub fn randomize(mut self) -> Self {
        if self.is_running() {
            return self;
        }
        self.alive = AliveSet::random(self.dimensions, RANDOM_DENSITY, &mut rand::rng());
        self.generation = 0;
        self
    }

    /// Change the grid size; live cells that no longer fit are dropped
    pub fn resize(mut self, dimensions: Dimensions) -> Self {
        if self.is_running() {
            warn!(%dimensions, "grid size is fixed while the simulation runs");
            return self;
        }
        if dimensions == self.dimensions {
            return self;
        }
        let dropped = self.alive.retain_within(dimensions);
        info!(from = %self.dimensions, to = %dimensions, dropped, "grid resized");
        self.dimensions = dimensions;
        self
    }

    /// Place a preset in the middle of the grid
    pub fn stamp_pattern(&mut self, pattern: &Pattern) {
        if self.is_running() {
            return;
        }
        let origin = pattern.centered_origin(self.dimensions);
        pattern.stamp(&mut self.alive, origin, self.dimensions);
        debug!(pattern = pattern.name, %origin, "pattern placed");
    }

    /// Pull finished generations from the loop; the newest one wins
    pub fn tick(mut self) -> Self {
        self.generation_loop.pump();
        if let Some(latest) = self.ticks.drain().last() {
            self.alive = latest.next_alive_cells;
            self.generation = latest.generation;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;
    use std::thread;
    use std::time::{Duration, Instant};

    fn config(width: usize, height: usize) -> Config {
        Config {
            dimensions: Dimensions::new(width, height).unwrap(),
            tick_interval: Duration::from_millis(5),
        }
    }

    fn tick_until(mut state: GameState, generation: u64) -> GameState {
        let deadline = Instant::now() + Duration::from_secs(5);
        while state.generation < generation && Instant::now() < deadline {
            state = state.tick();
            thread::sleep(Duration::from_millis(1));
        }
        state
    }

    #[test]
    fn test_new_state_is_idle_and_empty() {
        let state = GameState::new(&config(20, 20));
        assert!(!state.is_running());
        assert!(state.alive.is_empty());
        assert_eq!(state.generation, 0);
        assert!(!state.can_start());
    }

    #[test]
    fn test_toggle_cell() {
        let mut state = GameState::new(&config(5, 5));
        state.toggle_cell(Coord::new(1, 1));
        assert!(state.alive.contains(Coord::new(1, 1)));
        assert!(state.can_start());
        state.toggle_cell(Coord::new(1, 1));
        assert!(state.alive.is_empty());

        // Out of range is ignored
        state.toggle_cell(Coord::new(5, 0));
        assert!(state.alive.is_empty());
    }

    #[test]
    fn test_empty_grid_does_not_start() {
        let state = GameState::new(&config(5, 5)).toggle_running();
        assert!(!state.is_running());
    }

    #[test]
    fn test_run_applies_ticks() {
        let mut state = GameState::new(&config(5, 5));
        for col in 1..=3 {
            state.toggle_cell(Coord::new(2, col));
        }
        let state = tick_until(state.toggle_running(), 1);
        assert!(state.is_running());
        assert!(state.generation >= 1);

        // Several ticks may land between polls; the blinker phase follows parity
        let expected = if state.generation % 2 == 1 {
            AliveSet::from([(1, 2), (2, 2), (3, 2)])
        } else {
            AliveSet::from([(2, 1), (2, 2), (2, 3)])
        };
        assert_eq!(state.alive, expected);
    }

    #[test]
    fn test_edits_are_locked_while_running() {
        let mut state = GameState::new(&config(6, 6));
        state.stamp_pattern(&presets::block());
        let mut state = state.toggle_running();
        assert!(state.is_running());

        let before = state.alive.clone();
        state.toggle_cell(Coord::new(0, 0));
        state.stamp_pattern(&presets::glider());
        let state = state
            .clear()
            .randomize()
            .resize(Dimensions::new(3, 3).unwrap());
        assert_eq!(state.dimensions, Dimensions::new(6, 6).unwrap());
        assert_eq!(state.alive, before);
    }

    #[test]
    fn test_stop_then_resume_keeps_generation() {
        let mut state = GameState::new(&config(6, 6));
        state.stamp_pattern(&presets::block());
        let state = tick_until(state.toggle_running(), 2).toggle_running();
        assert!(!state.is_running());

        let stopped_at = state.generation;
        assert!(stopped_at >= 2);
        // Nothing sneaks in after stop
        thread::sleep(Duration::from_millis(30));
        let state = state.tick();
        assert_eq!(state.generation, stopped_at);

        let state = tick_until(state.toggle_running(), stopped_at + 1);
        assert!(state.generation > stopped_at);
        assert_eq!(state.alive.len(), 4);
    }

    #[test]
    fn test_clear_resets_generation() {
        let mut state = GameState::new(&config(6, 6));
        state.stamp_pattern(&presets::block());
        let state = tick_until(state.toggle_running(), 1).toggle_running().clear();
        assert!(state.alive.is_empty());
        assert_eq!(state.generation, 0);
        assert!(!state.can_start());
    }

    #[test]
    fn test_stopped_after_generations_can_restart_empty() {
        let mut state = GameState::new(&config(5, 5));
        state.toggle_cell(Coord::new(2, 2));
        let state = tick_until(state.toggle_running(), 1).toggle_running();
        assert!(state.alive.is_empty());
        assert!(state.can_start());
    }

    #[test]
    fn test_resize_prunes_cells() {
        let mut state = GameState::new(&config(10, 10));
        state.toggle_cell(Coord::new(1, 1));
        state.toggle_cell(Coord::new(8, 8));
        let state = state.resize(Dimensions::new(5, 5).unwrap());
        assert_eq!(state.alive, AliveSet::from([(1, 1)]));
    }

    #[test]
    fn test_randomize_resets_generation() {
        let mut state = GameState::new(&config(8, 8));
        state.generation = 12;
        let state = state.randomize();
        assert_eq!(state.generation, 0);
        assert!(state.alive.iter().all(|c| state.dimensions.contains(c)));
    }
}
