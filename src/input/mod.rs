use macroquad::prelude::*;

use crate::application::{GameState, Viewport};
use crate::ui::{Button, CLEAR, RANDOM, START_STOP, grid_area_width};

/// Toggle the cell under the cursor on a left click
pub fn handle_cell_click(state: &mut GameState, viewport: &Viewport, mouse_pos: (f32, f32)) {
    if state.is_running()
        || mouse_pos.0 >= grid_area_width()
        || !is_mouse_button_pressed(MouseButton::Left)
    {
        return;
    }

    if let Some(coord) = viewport.screen_to_cell(mouse_pos.0, mouse_pos.1) {
        state.toggle_cell(coord);
    }
}

/// Process keyboard shortcuts functionally
pub fn process_keyboard_input(state: GameState) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 3] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::C, GameState::clear),
        (KeyCode::R, GameState::randomize),
    ];

    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// Process button clicks functionally
pub fn process_button_clicks(state: GameState, buttons: &[Button], mouse_pos: (f32, f32)) -> GameState {
    buttons
        .iter()
        .enumerate()
        .fold(state, |s, (idx, btn)| {
            if !btn.is_clicked(mouse_pos) {
                return s;
            }
            match idx {
                START_STOP => s.toggle_running(),
                CLEAR => s.clear(),
                RANDOM => s.randomize(),
                _ => s,
            }
        })
}

/// Everything typed this frame. Drained every frame so text never piles up
/// while no field has focus.
pub fn typed_chars() -> Vec<char> {
    std::iter::from_fn(get_char_pressed).collect()
}
