use macroquad::prelude::*;

/// Dropdown picker. Each pick is reported once; the header keeps showing
/// the placeholder so the same entry can be picked again.
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    items: Vec<String>,
    placeholder: String,
    is_open: bool,
    enabled: bool,
    label: String,
}

impl Dropdown {
    pub fn new(
        x: f32,
        y: f32,
        width: f32,
        label: impl Into<String>,
        placeholder: impl Into<String>,
        items: Vec<String>,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height: 30.0,
            items,
            placeholder: placeholder.into(),
            is_open: false,
            enabled: true,
            label: label.into(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.is_open = false;
        }
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Handle interaction; returns the index picked this frame
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Option<usize> {
        if !self.enabled || !is_mouse_button_pressed(MouseButton::Left) {
            return None;
        }

        if self.is_hovered_main(mouse_pos) {
            self.is_open = !self.is_open;
            return None;
        }

        if !self.is_open {
            return None;
        }
        self.is_open = false;
        (0..self.items.len()).find(|&i| self.is_hovered_item(mouse_pos, i))
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let button_color = if !self.enabled {
            Color::from_rgba(64, 64, 64, 255)
        } else if self.is_hovered_main(mouse_pos) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        draw_rectangle(self.x, self.y, self.width, self.height, button_color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);
        draw_text(&self.placeholder, self.x + 5.0, self.y + 21.0, 16.0, WHITE);
        draw_text("v", self.x + self.width - 16.0, self.y + 20.0, 16.0, WHITE);

        if !self.is_open {
            return;
        }

        let menu_height = self.items.len() as f32 * self.height;
        draw_rectangle(
            self.x,
            self.y + self.height,
            self.width,
            menu_height,
            Color::from_rgba(30, 30, 30, 255),
        );

        for (i, item) in self.items.iter().enumerate() {
            let item_y = self.y + self.height + i as f32 * self.height;
            if self.is_hovered_item(mouse_pos, i) {
                draw_rectangle(
                    self.x,
                    item_y,
                    self.width,
                    self.height,
                    Color::from_rgba(70, 130, 180, 255),
                );
            }
            draw_text(item, self.x + 5.0, item_y + 21.0, 16.0, WHITE);
        }

        draw_rectangle_lines(self.x, self.y + self.height, self.width, menu_height, 2.0, WHITE);
    }

    fn is_hovered_main(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    fn is_hovered_item(&self, mouse_pos: (f32, f32), index: usize) -> bool {
        let item_y = self.y + self.height + index as f32 * self.height;
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= item_y
            && mouse_pos.1 <= item_y + self.height
    }
}
