use macroquad::prelude::*;

use crate::application::{GameState, Viewport};
use crate::ui::{Button, Dropdown, NumberField, PANEL_WIDTH, below_buttons, panel_x};

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const DEAD_COLOR: Color = Color::new(0.06, 0.06, 0.06, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);

/// Draw every cell of the grid; lines only when cells are big enough to see them
pub fn draw_grid(state: &GameState, viewport: &Viewport) {
    let size = viewport.cell_size;
    let (extent_w, extent_h) = viewport.extent();
    draw_rectangle(viewport.origin_x, viewport.origin_y, extent_w, extent_h, DEAD_COLOR);

    for coord in state.alive.iter() {
        let (x, y) = viewport.cell_to_screen(coord);
        draw_rectangle(x, y, size, size, ALIVE_COLOR);
    }

    if size >= 4.0 {
        let dims = viewport.dimensions();
        for col in 0..=dims.width() {
            let x = viewport.origin_x + col as f32 * size;
            draw_line(x, viewport.origin_y, x, viewport.origin_y + extent_h, 1.0, GRID_LINE_COLOR);
        }
        for row in 0..=dims.height() {
            let y = viewport.origin_y + row as f32 * size;
            draw_line(viewport.origin_x, y, viewport.origin_x + extent_w, y, 1.0, GRID_LINE_COLOR);
        }
    }
}

fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Draw the control panel with fields, buttons, the pattern picker and status
pub fn draw_controls(
    state: &GameState,
    fields: &[&NumberField],
    buttons: &[Button],
    patterns: &Dropdown,
    mouse_pos: (f32, f32),
) {
    draw_panel_background();

    fields.iter().for_each(|field| field.draw());
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let px = panel_x();
    let top = below_buttons() + 10.0;

    let status_color = if state.is_running() {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };

    let generation = state.generation.to_string();
    let population = format!("{} / {}", state.alive.len(), state.dimensions.cell_count());

    let labels = [
        ("Generation:", top, 16.0, WHITE),
        (generation.as_str(), top + 22.0, 22.0, ALIVE_COLOR),
        ("Live cells:", top + 55.0, 16.0, WHITE),
        (population.as_str(), top + 75.0, 14.0, LIGHTGRAY),
        ("Status:", top + 105.0, 16.0, WHITE),
        (
            if state.is_running() { "Running" } else { "Stopped" },
            top + 125.0,
            16.0,
            status_color,
        ),
        ("Controls:", top + 160.0, 14.0, WHITE),
        ("LMB: Toggle cell", top + 175.0, 12.0, GRAY),
        ("Space: Start/Stop", top + 188.0, 12.0, GRAY),
        ("C: Clear  R: Random", top + 201.0, 12.0, GRAY),
        ("Enter: Apply size", top + 214.0, 12.0, GRAY),
    ];

    labels.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });

    // Drawn last so an open menu covers the rest of the panel
    patterns.draw(mouse_pos);
}
