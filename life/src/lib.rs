mod cell;
pub mod render;


use std::{fmt::Display, str::FromStr};

use itertools::Itertools;
use rand::{Rng, SeedableRng, rngs::StdRng};

pub use crate::cell::Cell;

/// Screen size of one cell in pixels. The pointer-to-cell mapping and the
/// renderer must agree on this value.
pub const CELL_SIZE: usize = 5;

/// A fixed-size Life board with hard edges (no wraparound).
///
/// Two same-shaped buffers back the board: `current` holds the committed
/// generation that all accessors read, `scratch` receives the next
/// generation while it is computed. [`Grid::advance`] swaps them wholesale,
/// so every cell of generation N+1 is derived from generation N alone.
pub struct Grid {
    width: usize,
    height: usize,
    current: Vec<Cell>,
    scratch: Vec<Cell>,
    dirty: bool,
    rng: StdRng,
}

impl Grid {
    /// An empty board; call [`Grid::resize`] to give it a shape.
    pub fn new() -> Self {
        Self::with_size(0, 0)
    }

    /// An all-dead board of `width` by `height` cells.
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            current: vec![Cell::default(); width * height],
            scratch: vec![Cell::default(); width * height],
            dirty: true,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Swaps in a deterministic generator so that [`Grid::randomize`] is
    /// reproducible.
    pub fn set_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The committed cell at `(col, row)`, or `None` out of range.
    pub fn cell(&self, col: usize, row: usize) -> Option<Cell> {
        (col < self.width && row < self.height).then(|| self.current[row * self.width + col])
    }

    /// Committed cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.current.iter().copied()
    }

    /// Fits the board to a drawing surface of `width_px` by `height_px`
    /// pixels, discarding all prior state and reseeding randomly. A surface
    /// smaller than one cell yields an empty board on which every operation
    /// is a no-op.
    pub fn resize(&mut self, width_px: usize, height_px: usize) {
        self.width = width_px / CELL_SIZE;
        self.height = height_px / CELL_SIZE;
        self.current = vec![Cell::default(); self.width * self.height];
        self.scratch = vec![Cell::default(); self.width * self.height];
        self.randomize();
        self.dirty = true;
    }

    /// Redraws the board with roughly one cell in five alive, independently
    /// per cell. Ages are left as they were.
    pub fn randomize(&mut self) {
        for cell in &mut self.current {
            cell.alive = self.rng.random::<f64>() > 0.8;
        }
    }

    /// Kills every cell in both buffers.
    pub fn clear(&mut self) {
        self.current.fill(Cell::default());
        self.scratch.fill(Cell::default());
        self.dirty = true;
    }

    /// Brings the cell at `(col, row)` to life with age zero. Already-live
    /// cells keep their age; out-of-range coordinates do nothing.
    pub fn activate(&mut self, col: usize, row: usize) {
        if col >= self.width || row >= self.height {
            return;
        }
        let cell = &mut self.current[row * self.width + col];
        if cell.alive {
            return;
        }
        *cell = Cell { alive: true, age: 0 };
        self.dirty = true;
    }

    /// Steps the whole board one generation.
    ///
    /// The scan writes only into `scratch` and commits with a single swap,
    /// so no cell's neighbour count can ever see a half-updated board.
    pub fn advance(&mut self) {
        for row in 0..self.height {
            for col in 0..self.width {
                let i = row * self.width + col;
                self.scratch[i] = self.current[i].next(self.live_neighbours(col, row));
            }
        }
        std::mem::swap(&mut self.current, &mut self.scratch);
        self.dirty = true;
    }

    /// Live cells among the up-to-8 Moore neighbours of `(col, row)`.
    /// Offsets falling off the board are excluded, not wrapped.
    pub fn live_neighbours(&self, col: usize, row: usize) -> usize {
        (-1..=1)
            .cartesian_product(-1..=1)
            .filter(|&d| d != (0, 0))
            .map(|(dy, dx)| (row as isize + dy, col as isize + dx))
            .filter(|&(y, x)| {
                (0..self.height as isize).contains(&y) && (0..self.width as isize).contains(&x)
            })
            .filter(|&(y, x)| self.current[y as usize * self.width + x as usize].alive)
            .count()
    }

    /// True once after any state change; the driver polls this to decide
    /// whether the board needs repainting.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Grid {
    type Err = String;

    /// Builds a board sized to the pattern: one line per row, `'o'` for a
    /// live cell, space for a dead one.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix('\n').unwrap_or(s);
        let lines: Vec<&str> = s.lines().collect();
        let width = lines.iter().map(|l| l.len()).max().unwrap_or_default();
        let mut grid = Grid::with_size(width, lines.len());
        for (row, line) in lines.iter().enumerate() {
            for (col, c) in line.chars().enumerate() {
                match c {
                    ' ' => (),
                    'o' => grid.activate(col, row),
                    _ => return Err(format!("Unexpected character {c}")),
                }
            }
        }
        Ok(grid)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lines = (0..self.height)
            .map(|row| {
                let line: String = (0..self.width)
                    .map(|col| {
                        if self.current[row * self.width + col].alive {
                            'o'
                        } else {
                            ' '
                        }
                    })
                    .collect();
                line.trim_end().to_owned()
            })
            .join("\n");
        f.write_str(&lines)
    }
}
