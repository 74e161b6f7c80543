use std::time::{Duration, Instant};

use eframe::{CreationContext, Frame};
use egui::{
    Color32, ColorImage, Context, Image, Sense, TextureHandle, TextureOptions, Vec2,
    load::SizedTexture,
};
use life::{CELL_SIZE, Grid, render::Palette};

const TICK: Duration = Duration::from_millis(200);

pub struct App {
    grid: Grid,
    palette: Palette,
    texture: Option<TextureHandle>,
    surface: (usize, usize),
    running: bool,
    generation: u64,
    last_tick: Instant,
}

impl App {
    /// Called once before the first frame.
    pub fn new(_cc: &CreationContext<'_>) -> Self {
        Self {
            grid: Grid::new(),
            palette: Palette::default(),
            texture: None,
            surface: (0, 0),
            running: false,
            generation: 0,
            last_tick: Instant::now(),
        }
    }

    fn tick(&mut self) {
        if self.running && self.last_tick.elapsed() >= TICK {
            self.grid.advance();
            self.generation += 1;
            self.last_tick = Instant::now();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let label = if self.running { "Stop" } else { "Start" };
                if ui.button(label).clicked() {
                    self.running = !self.running;
                    self.last_tick = Instant::now();
                }
                if ui.button("Clear").clicked() {
                    self.grid.clear();
                    self.generation = 0;
                }
                ui.label(format!("Generations: {}", self.generation));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let avail = ui.available_size();
            let surface = (avail.x as usize, avail.y as usize);
            if surface != self.surface {
                // A layout change discards the board and reseeds it.
                self.surface = surface;
                self.grid.resize(surface.0, surface.1);
                self.generation = 0;
                log::debug!(
                    "surface {}x{} px, board {}x{} cells",
                    surface.0,
                    surface.1,
                    self.grid.width(),
                    self.grid.height(),
                );
            }

            self.tick();

            let (cols, rows) = (self.grid.width(), self.grid.height());
            if cols == 0 || rows == 0 {
                return;
            }

            if self.grid.take_redraw() || self.texture.is_none() {
                let pixels: Vec<Color32> = self
                    .grid
                    .render(self.palette)
                    .into_iter()
                    .map(From::from)
                    .collect();
                let image = ColorImage::new([cols, rows], pixels);
                let options = TextureOptions::NEAREST;
                self.texture = Some(match self.texture.take() {
                    Some(mut t) if t.size() == image.size => {
                        t.set(image, options);
                        t
                    }
                    _ => ctx.load_texture("board", image, options),
                });
            }

            let Some(texture) = &self.texture else { return };
            let size = Vec2::new((cols * CELL_SIZE) as f32, (rows * CELL_SIZE) as f32);
            let sized_texture = SizedTexture::new(texture, size);
            let response = ui.add(
                Image::new(sized_texture)
                    .fit_to_exact_size(size)
                    .sense(Sense::click_and_drag()),
            );

            // Pressing or dragging over the board raises cells under the pointer.
            if response.is_pointer_button_down_on() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let p = pos - response.rect.min;
                    if p.x >= 0.0 && p.y >= 0.0 {
                        self.grid
                            .activate(p.x as usize / CELL_SIZE, p.y as usize / CELL_SIZE);
                        ctx.request_repaint();
                    }
                }
            }

            if self.running {
                ctx.request_repaint_after(TICK);
            }
        });
    }
}
