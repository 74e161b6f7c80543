#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([800.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Game of Life",
        options,
        Box::new(|cc| Ok(Box::new(app::App::new(cc)))),
    )
}
