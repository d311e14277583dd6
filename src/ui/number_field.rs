use macroquad::prelude::*;

/// Longest value the field accepts; keeps grids to a drawable size
const MAX_DIGITS: usize = 4;

/// Single-line numeric input. Click to focus, type digits, Enter to commit.
#[derive(Clone)]
pub struct NumberField {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    label: String,
    committed: String,
    buffer: String,
    focused: bool,
    enabled: bool,
}

impl NumberField {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, value: usize) -> Self {
        Self {
            x,
            y,
            width,
            height: 30.0,
            label: label.into(),
            committed: value.to_string(),
            buffer: value.to_string(),
            focused: false,
            enabled: true,
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Disabling drops focus and any uncommitted edit
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.revert();
        }
    }

    /// Show `value` and discard pending edits
    pub fn set_value(&mut self, value: usize) {
        self.committed = value.to_string();
        self.buffer = self.committed.clone();
    }

    /// Throw away the edit, e.g. after the caller rejected it
    pub fn revert(&mut self) {
        self.buffer = self.committed.clone();
        self.focused = false;
    }

    /// Feed this frame's input. Returns the text when the user commits an edit;
    /// the caller validates it and calls `set_value` or `revert`.
    pub fn update(&mut self, mouse_pos: (f32, f32), typed: &[char]) -> Option<String> {
        if !self.enabled {
            return None;
        }

        if is_mouse_button_pressed(MouseButton::Left) {
            let inside = self.is_hovered(mouse_pos);
            if self.focused && !inside {
                return self.commit();
            }
            self.focused = inside;
        }

        if !self.focused {
            return None;
        }

        for &c in typed {
            if c.is_ascii_digit() && self.buffer.len() < MAX_DIGITS {
                self.buffer.push(c);
            }
        }
        if is_key_pressed(KeyCode::Backspace) {
            self.buffer.pop();
        }
        if is_key_pressed(KeyCode::Escape) {
            self.revert();
            return None;
        }
        if is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter) {
            return self.commit();
        }
        None
    }

    fn commit(&mut self) -> Option<String> {
        self.focused = false;
        (self.buffer != self.committed).then(|| self.buffer.clone())
    }

    fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    pub fn draw(&self) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let (fill, border) = match (self.enabled, self.focused) {
            (false, _) => (Color::from_rgba(40, 40, 40, 255), DARKGRAY),
            (true, true) => (Color::from_rgba(20, 20, 20, 255), YELLOW),
            (true, false) => (Color::from_rgba(20, 20, 20, 255), WHITE),
        };
        draw_rectangle(self.x, self.y, self.width, self.height, fill);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, border);

        let text = if self.focused {
            format!("{}_", self.buffer)
        } else {
            self.buffer.clone()
        };
        let color = if self.enabled { WHITE } else { GRAY };
        draw_text(&text, self.x + 6.0, self.y + 21.0, 18.0, color);
    }
}
