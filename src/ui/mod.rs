mod button;
mod dropdown;
mod number_field;

pub use button::Button;
pub use dropdown::Dropdown;
pub use number_field::NumberField;

use macroquad::prelude::{screen_height, screen_width};

use crate::application::{GameState, Viewport};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const GRID_MARGIN: f32 = 10.0;

/// Vertical slots in the side panel
pub const WIDTH_FIELD_Y: f32 = 30.0;
pub const HEIGHT_FIELD_Y: f32 = 85.0;
pub const PATTERN_DROPDOWN_Y: f32 = 140.0;
const FIRST_BUTTON_Y: f32 = 200.0;
const BUTTON_SPACING: f32 = 50.0;

/// Indices into `create_buttons`
pub const START_STOP: usize = 0;
pub const CLEAR: usize = 1;
pub const RANDOM: usize = 2;

/// X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Current screen layout for the grid
pub fn viewport(state: &GameState) -> Viewport {
    Viewport::fit(state.dimensions, grid_area_width(), grid_area_height(), GRID_MARGIN)
}

/// Y position just below the button stack
pub fn below_buttons() -> f32 {
    FIRST_BUTTON_Y + 3.0 * BUTTON_SPACING
}

/// Buttons reflect what the state currently allows:
/// Start needs something to run, Clear and Random need a stopped simulation.
pub fn create_buttons(state: &GameState) -> Vec<Button> {
    let px = panel_x();
    let running = state.is_running();
    let button = |slot: usize, text: &str| {
        Button::new(
            px,
            FIRST_BUTTON_Y + slot as f32 * BUTTON_SPACING,
            PANEL_WIDTH,
            BUTTON_HEIGHT,
            text,
        )
    };

    vec![
        button(START_STOP, if running { "Stop" } else { "Start" })
            .enabled(running || state.can_start()),
        button(CLEAR, "Clear").enabled(!running),
        button(RANDOM, "Random").enabled(!running),
    ]
}
