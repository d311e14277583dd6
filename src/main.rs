use conway_grid::{
    Config, GameState, input, rendering,
    domain::{Axis, Dimensions, presets},
    ui::{self, Dropdown, NumberField, HEIGHT_FIELD_Y, PATTERN_DROPDOWN_Y, WIDTH_FIELD_Y},
};
use macroquad::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("conway_grid=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_config() -> Config {
    match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            warn!("invalid configuration, using defaults: {e}");
            Config::default()
        }
    }
}

/// Apply a committed width/height edit, or put the field back
fn apply_dimension_edit(state: GameState, field: &mut NumberField, axis: Axis, input: &str) -> GameState {
    let resized = Dimensions::parse_axis(axis, input)
        .and_then(|value| state.dimensions.with_axis(axis, value));

    match resized {
        Ok(dimensions) => {
            let value = match axis {
                Axis::Width => dimensions.width(),
                Axis::Height => dimensions.height(),
            };
            field.set_value(value);
            state.resize(dimensions)
        }
        Err(e) => {
            warn!("rejected grid size: {e}");
            field.revert();
            state
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    init_logging();
    let config = load_config();
    info!(
        dimensions = %config.dimensions,
        tick_ms = config.tick_interval.as_millis() as u64,
        "starting"
    );

    let mut state = GameState::new(&config);

    let px = ui::panel_x();
    let field_width = ui::PANEL_WIDTH - 10.0;
    let mut width_field = NumberField::new(px, WIDTH_FIELD_Y, field_width, "Width", config.dimensions.width());
    let mut height_field = NumberField::new(px, HEIGHT_FIELD_Y, field_width, "Height", config.dimensions.height());

    let patterns = presets::all_patterns();
    let pattern_items: Vec<String> = patterns.iter().map(|p| p.name.to_string()).collect();
    let mut pattern_dropdown = Dropdown::new(
        px,
        PATTERN_DROPDOWN_Y,
        field_width,
        "Pattern",
        "Place...",
        pattern_items,
    );

    loop {
        let mouse_pos = mouse_position();
        let typed = input::typed_chars();

        // Update UI positions for responsiveness
        let px = ui::panel_x();
        width_field.set_position(px, WIDTH_FIELD_Y);
        height_field.set_position(px, HEIGHT_FIELD_Y);
        pattern_dropdown.set_position(px, PATTERN_DROPDOWN_Y);

        let running = state.is_running();
        width_field.set_enabled(!running);
        height_field.set_enabled(!running);
        pattern_dropdown.set_enabled(!running);

        // Dimension edits
        if let Some(text) = width_field.update(mouse_pos, &typed) {
            state = apply_dimension_edit(state, &mut width_field, Axis::Width, &text);
        }
        if let Some(text) = height_field.update(mouse_pos, &typed) {
            state = apply_dimension_edit(state, &mut height_field, Axis::Height, &text);
        }

        // Pattern picker swallows clicks while open
        let menu_was_open = pattern_dropdown.is_open();
        if let Some(idx) = pattern_dropdown.update(mouse_pos) {
            state.stamp_pattern(&patterns[idx]);
        }

        let buttons = ui::create_buttons(&state);
        if !menu_was_open {
            state = input::process_button_clicks(state, &buttons, mouse_pos);
            let viewport = ui::viewport(&state);
            input::handle_cell_click(&mut state, &viewport, mouse_pos);
        }
        if !width_field.is_focused() && !height_field.is_focused() {
            state = input::process_keyboard_input(state);
        }

        // Pick up finished generations from the background loop
        state = state.tick();

        clear_background(BLACK);
        let viewport = ui::viewport(&state);
        rendering::draw_grid(&state, &viewport);
        let buttons = ui::create_buttons(&state);
        rendering::draw_controls(
            &state,
            &[&width_field, &height_field],
            &buttons,
            &pattern_dropdown,
            mouse_pos,
        );

        next_frame().await;
    }
}
