use egui::Rgba;

use crate::{Cell, Grid};

/// Live cells younger than this draw as `young`, the rest as `mature`.
pub const MATURE_AGE: u32 = 2;

/// Colours for the three visual cell states.
#[derive(Clone, Copy)]
pub struct Palette {
    pub dead: Rgba,
    pub young: Rgba,
    pub mature: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            dead: Rgba::from_gray(0.25),
            young: Rgba::WHITE,
            mature: Rgba::from_gray(0.6),
        }
    }
}

impl Palette {
    pub fn colour(&self, cell: Cell) -> Rgba {
        match (cell.alive, cell.age) {
            (false, _) => self.dead,
            (true, age) if age < MATURE_AGE => self.young,
            (true, _) => self.mature,
        }
    }
}

impl Grid {
    /// One pixel per cell in row-major order; the driver scales each pixel
    /// up to [`crate::CELL_SIZE`] screen units.
    pub fn render(&self, palette: Palette) -> Vec<Rgba> {
        self.cells().map(|cell| palette.colour(cell)).collect()
    }
}
