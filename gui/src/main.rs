use anyhow::Context;
use eframe::egui;
use eframe::egui::{ScrollArea, Ui};
use eframe::run_native;
use life_engine::config::{INTERVAL_STEP_MS, MAX_INTERVAL_MS, MIN_INTERVAL_MS};
use life_engine::patterns::PATTERNS;
use life_engine::ticker::lock;
use life_engine::{Change, Controller, LifeConfig, TickLoop};
use std::sync::{Arc, Mutex};

const CELL_SIZE: f32 = 20.0;
const CELL_GAP: f32 = 1.0;
const RANDOM_DENSITY: f64 = 0.3;
const ALIVE_COLOR: egui::Color32 = egui::Color32::from_rgb(46, 160, 67);
const DEAD_COLOR: egui::Color32 = egui::Color32::from_rgb(48, 48, 54);

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = LifeConfig::from_env().context("reading LIFE_* settings")?;
    let session = Arc::new(Mutex::new(
        Controller::from_config(&config).context("creating session")?,
    ));

    run_native(
        "Life Lab",
        eframe::NativeOptions::default(),
        Box::new(move |cc| {
            // The tick thread mutates the board off the UI thread; ask egui to redraw.
            let ctx = cc.egui_ctx.clone();
            lock(&session).subscribe(move |_: &Change| ctx.request_repaint());

            let ticker = TickLoop::spawn(Arc::clone(&session));
            Ok(Box::new(LifeLab::new(session, ticker)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("running the window: {err}"))
}

struct LifeLab {
    session: Arc<Mutex<Controller>>,
    selected_pattern: usize,
    // Held for its Drop: closing the window stops the tick thread.
    _ticker: TickLoop,
}

impl LifeLab {
    fn new(session: Arc<Mutex<Controller>>, ticker: TickLoop) -> Self {
        log::info!("window opened");
        Self {
            session,
            selected_pattern: 0,
            _ticker: ticker,
        }
    }

    fn controls(ui: &mut Ui, controller: &mut Controller, selected_pattern: &mut usize) {
        ui.horizontal(|ui| {
            let run_label = if controller.is_running() { "Stop" } else { "Start" };
            if ui.button(run_label).clicked() {
                controller.toggle_running();
            }
            if ui.button("Step").clicked() {
                controller.step();
            }
            if ui.button("Clear").clicked() {
                controller.clear_grid();
            }

            let stopped = !controller.is_running();
            if ui.add_enabled(stopped, egui::Button::new("Seed")).clicked() {
                controller.seed_if_stopped();
            }
            if ui.add_enabled(stopped, egui::Button::new("Randomize")).clicked() {
                controller.randomize_if_stopped(&mut rand::rng(), RANDOM_DENSITY);
            }

            ui.separator();
            egui::ComboBox::from_id_salt("pattern")
                .selected_text(PATTERNS[*selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (index, pattern) in PATTERNS.iter().enumerate() {
                        ui.selectable_value(selected_pattern, index, pattern.name);
                    }
                });
            if ui.add_enabled(stopped, egui::Button::new("Apply")).clicked() {
                controller.apply_pattern_if_stopped(PATTERNS[*selected_pattern]);
            }

            ui.separator();
            let mut interval = controller.interval_ms();
            let slider = egui::Slider::new(&mut interval, MIN_INTERVAL_MS..=MAX_INTERVAL_MS)
                .step_by(INTERVAL_STEP_MS as f64)
                .text("ms per generation");
            if ui.add(slider).changed() {
                controller.set_speed(interval);
            }
        });
    }

    fn create_grid(ui: &mut Ui, controller: &mut Controller) {
        let board = controller.board();
        let (rows, cols) = (board.rows(), board.cols());

        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(CELL_SIZE * cols as f32, CELL_SIZE * rows as f32),
            egui::Sense::click(),
        );

        let painter = ui.painter();
        for (row_index, row) in board.cells().iter().enumerate() {
            for (col_index, cell) in row.iter().enumerate() {
                let pos = rect.min
                    + egui::vec2(col_index as f32 * CELL_SIZE, row_index as f32 * CELL_SIZE);
                let color = if cell.is_alive() { ALIVE_COLOR } else { DEAD_COLOR };
                painter.rect_filled(
                    egui::Rect::from_min_size(pos, egui::vec2(CELL_SIZE - CELL_GAP, CELL_SIZE - CELL_GAP)),
                    CELL_SIZE / 5f32,
                    color,
                );
            }
        }

        if response.clicked() {
            if let Some(pointer) = response.interact_pointer_pos() {
                if let Some((row, col)) = cell_at(pointer - rect.min, rows, cols) {
                    controller.toggle_cell(row, col);
                }
            }
        }
    }
}

/// Map a pointer offset from the grid's top-left corner to a cell.
fn cell_at(offset: egui::Vec2, rows: usize, cols: usize) -> Option<(usize, usize)> {
    if offset.x < 0.0 || offset.y < 0.0 {
        return None;
    }
    let row = (offset.y / CELL_SIZE) as usize;
    let col = (offset.x / CELL_SIZE) as usize;
    (row < rows && col < cols).then_some((row, col))
}

impl eframe::App for LifeLab {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::both().show(ui, |ui| {
                ui.heading("Life Lab");

                let mut controller = lock(&self.session);
                Self::controls(ui, &mut controller, &mut self.selected_pattern);
                ui.label(format!(
                    "Generation {}  ·  {} alive",
                    controller.generation(),
                    controller.board().population()
                ));
                Self::create_grid(ui, &mut controller);
            });
        });
    }
}
