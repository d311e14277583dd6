use crate::domain::{Coord, Dimensions};

/// Viewport maps between screen pixels and grid cells.
/// The whole grid is always fitted into the drawing area and centered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell_size: f32,
    dims: Dimensions,
}

impl Viewport {
    /// Fit `dims` into an area of the given size, leaving `margin` on every side
    pub fn fit(dims: Dimensions, area_width: f32, area_height: f32, margin: f32) -> Self {
        let usable_w = (area_width - 2.0 * margin).max(1.0);
        let usable_h = (area_height - 2.0 * margin).max(1.0);
        let cell_size = (usable_w / dims.width() as f32)
            .min(usable_h / dims.height() as f32)
            .max(1.0);

        let grid_w = cell_size * dims.width() as f32;
        let grid_h = cell_size * dims.height() as f32;

        Self {
            origin_x: margin + (usable_w - grid_w).max(0.0) / 2.0,
            origin_y: margin + (usable_h - grid_h).max(0.0) / 2.0,
            cell_size,
            dims,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Cell under a screen position, if any
    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32) -> Option<Coord> {
        let gx = ((screen_x - self.origin_x) / self.cell_size).floor();
        let gy = ((screen_y - self.origin_y) / self.cell_size).floor();
        if gx < 0.0 || gy < 0.0 {
            return None;
        }
        let coord = Coord::new(gy as usize, gx as usize);
        self.dims.contains(coord).then_some(coord)
    }

    /// Top-left corner of a cell in screen space
    pub fn cell_to_screen(&self, coord: Coord) -> (f32, f32) {
        (
            self.origin_x + coord.col as f32 * self.cell_size,
            self.origin_y + coord.row as f32 * self.cell_size,
        )
    }

    /// Pixel size of the drawn grid
    pub fn extent(&self) -> (f32, f32) {
        (
            self.cell_size * self.dims.width() as f32,
            self.cell_size * self.dims.height() as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(width: usize, height: usize) -> Dimensions {
        Dimensions::new(width, height).unwrap()
    }

    #[test]
    fn test_fit_uses_limiting_side() {
        let vp = Viewport::fit(dims(10, 5), 220.0, 220.0, 10.0);
        assert_eq!(vp.cell_size, 20.0);
        assert_eq!(vp.extent(), (200.0, 100.0));
        // Centered vertically in the leftover space
        assert_eq!((vp.origin_x, vp.origin_y), (10.0, 60.0));
    }

    #[test]
    fn test_screen_to_cell_round_trip() {
        let vp = Viewport::fit(dims(8, 8), 400.0, 400.0, 0.0);
        let coord = Coord::new(3, 6);
        let (x, y) = vp.cell_to_screen(coord);
        let half = vp.cell_size / 2.0;
        assert_eq!(vp.screen_to_cell(x + half, y + half), Some(coord));
    }

    #[test]
    fn test_outside_grid_is_none() {
        let vp = Viewport::fit(dims(4, 4), 100.0, 100.0, 10.0);
        assert_eq!(vp.screen_to_cell(5.0, 50.0), None);
        assert_eq!(vp.screen_to_cell(95.0, 50.0), None);
        assert_eq!(vp.screen_to_cell(50.0, 99.0), None);
    }

    #[test]
    fn test_tiny_area_keeps_one_pixel_cells() {
        let vp = Viewport::fit(dims(500, 500), 50.0, 50.0, 0.0);
        assert_eq!(vp.cell_size, 1.0);
    }
}
