//! Interactive disordered-oscillator lattice viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the simulation model and
//! implements [`eframe::App`] to render the lattice and control the
//! simulation through an egui UI.

use eframe::App;
use glam::Vec2;
use rand::rng;
use sim_core::{config::SimConfig, lattice::NeighborVariant, model::SimulationModel};

/// World-space distance between adjacent lattice sites.
const SITE_SPACING: f32 = 10.0;

/// Displacement stamped onto a site when it is clicked.
const EXCITE_DISPLACEMENT: f32 = 0.8;

/// Main application state for the interactive viewer.
///
/// [`Viewer`] glues together:
/// - The simulation core: a [`SimulationModel`] owning config and lattice.
/// - A draft copy of the configuration edited by the side panel; edits only
///   reach the model when "Apply" rebuilds the lattice.
/// - The play loop: a `running` flag plus a target interval between ticks,
///   checked once per frame. Pausing flips the flag, so no further tick can
///   fire after it returns.
/// - eframe/egui callbacks for drawing and user interaction.
///
/// ### Fields
/// - `model` - Simulation model; the single owner of all lattice state.
/// - `draft` - Panel-edited configuration, committed by [`Viewer::apply_draft`].
/// - `rng` - Random number generator handed to rebuilds for the disorder.
///
/// - `running` - Whether the simulation is currently auto-advancing.
/// - `zoom` - Zoom factor for world-to-screen coordinate mapping.
/// - `pan` - Screen-space pan offset in pixels.
///
/// - `tick_count` - Number of integrator ticks since the last rebuild.
/// - `step_interval` - Target wall-clock time between automatic ticks (seconds).
/// - `last_step_time` - Time stamp of the last tick (egui time).
/// - `last_step_dt` - Actual wall-clock delta between the last two ticks.
pub struct Viewer {
    model: SimulationModel,
    draft: SimConfig,

    rng: rand::rngs::ThreadRng,

    running: bool,
    zoom: f32,
    pan: egui::Vec2,

    tick_count: u64,

    step_interval: f64,
    last_step_time: f64,
    last_step_dt: f64,
}

impl Viewer {
    /// Creates a new viewer with a freshly built lattice.
    ///
    /// The model starts from [`SimConfig::default`] (the classic 10x10
    /// preset) and is rebuilt immediately, so there is always a lattice to
    /// draw. The camera starts with a moderate zoom and no pan.
    pub fn new() -> Self {
        let mut rng = rng();
        let mut model = SimulationModel::new(SimConfig::default());
        model.rebuild(&mut rng);
        let draft = model.cfg;

        Self {
            model,
            draft,
            rng,
            running: false,
            zoom: 3.0,
            pan: egui::vec2(0.0, 0.0),
            tick_count: 0,
            step_interval: 0.05,
            last_step_time: 0.0,
            last_step_dt: 0.0,
        }
    }

    /// Commits the draft configuration and rebuilds the lattice.
    ///
    /// This is the only path by which panel edits reach the simulation:
    /// the draft is copied into the model, then the lattice is rebuilt from
    /// scratch, discarding all displacement and amplitude history.
    fn apply_draft(&mut self) {
        self.model.cfg = self.draft;
        self.model.rebuild(&mut self.rng);
        self.tick_count = 0;
        self.running = false;
    }

    /// Advances the simulation by a single tick of the configured `dt`.
    fn step_once(&mut self) {
        self.model.step(self.model.cfg.time_step);
        self.tick_count += 1;
    }

    /// World-space position of the site at (row, col), grid centered on the
    /// origin with rows growing downward.
    fn site_world_pos(size: usize, row: usize, col: usize) -> Vec2 {
        let half = (size.saturating_sub(1)) as f32 * 0.5;
        Vec2::new(
            (col as f32 - half) * SITE_SPACING,
            (half - row as f32) * SITE_SPACING,
        )
    }

    /// Maps a world-space position back to the (row, col) of the site whose
    /// cell it falls in, or `None` outside the grid.
    fn site_at_world(size: usize, world: Vec2) -> Option<(usize, usize)> {
        let half = (size.saturating_sub(1)) as f32 * 0.5;
        let col = (world.x / SITE_SPACING + half).round();
        let row = (half - world.y / SITE_SPACING).round();

        if col < 0.0 || row < 0.0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= size || col >= size {
            return None;
        }

        // Only accept clicks reasonably close to the site center.
        let center = Self::site_world_pos(size, row, col);
        if (world - center).length_squared() < (SITE_SPACING * 0.5).powi(2) {
            Some((row, col))
        } else {
            None
        }
    }

    /// Converts a world-space position to screen-space.
    ///
    /// World coordinates are scaled by `zoom`, offset by `pan`, and then
    /// centered inside the given `rect`. The y-axis is flipped so that
    /// positive y goes up in world space.
    fn world_to_screen(&self, p: Vec2, rect: egui::Rect) -> egui::Pos2 {
        let center = rect.center();
        egui::pos2(
            center.x + p.x * self.zoom + self.pan.x,
            center.y - p.y * self.zoom + self.pan.y,
        )
    }

    /// Converts a screen-space position back to world-space.
    ///
    /// This is the inverse of [`Viewer::world_to_screen`] (up to floating
    /// point rounding), using the same `zoom`, `pan`, and `rect` center.
    fn screen_to_world(&self, p: egui::Pos2, rect: egui::Rect) -> Vec2 {
        let center = rect.center();
        let x = (p.x - center.x - self.pan.x) / self.zoom;
        let y = (center.y - p.y + self.pan.y) / self.zoom;
        Vec2::new(x, y)
    }

    /// Color for a site, mapping its natural frequency across the configured
    /// disorder band `mean - spread ..= mean + spread` (blue = slow,
    /// red = fast).
    fn color_for_frequency(&self, omega: f32) -> egui::Color32 {
        let cfg = &self.model.cfg;
        let lo = (cfg.mean_frequency - cfg.frequency_spread).max(0.0);
        let span = cfg.mean_frequency + cfg.frequency_spread - lo;
        let t = if span > 0.0 {
            ((omega - lo) / span).clamp(0.0, 1.0)
        } else {
            0.5
        };

        let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
        let (cold, hot) = (egui::Color32::LIGHT_BLUE, egui::Color32::RED);
        egui::Color32::from_rgb(
            lerp(cold.r(), hot.r()),
            lerp(cold.g(), hot.g()),
            lerp(cold.b(), hot.b()),
        )
    }

    /// Screen-space radius for a site, growing with `|displacement|` and
    /// saturating at the excite amplitude.
    fn radius_for_displacement(&self, displacement: f32) -> f32 {
        let amplitude = (displacement.abs() / EXCITE_DISPLACEMENT).min(1.0);
        (0.12 + 0.30 * amplitude) * SITE_SPACING * self.zoom
    }

    /// Helper to draw a labeled `usize` [`egui::DragValue`].
    fn labeled_drag_usize(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut usize,
        range: std::ops::RangeInclusive<usize>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Helper to draw a labeled `f32` [`egui::DragValue`].
    fn labeled_drag_f32(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut f32,
        range: std::ops::RangeInclusive<f32>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Builds the top panel UI (run controls, stepping, rebuild, zoom).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.running { "⏸ Pause" } else { "▶ Run" })
                    .clicked()
                {
                    self.running = !self.running;
                }

                ui.add(
                    egui::DragValue::new(&mut self.step_interval)
                        .prefix("tick every ")
                        .suffix(" s")
                        .range(0.01..=1.0)
                        .speed(0.01),
                );

                if ui.button("Step").clicked() {
                    let now = ctx.input(|i| i.time);
                    if self.last_step_time > 0.0 {
                        self.last_step_dt = now - self.last_step_time;
                    }
                    self.step_once();
                    self.last_step_time = now;
                }

                if ui.button("Rebuild").clicked() {
                    self.apply_draft();
                }

                ui.separator();
                ui.add(egui::Slider::new(&mut self.zoom, 0.1..=10.0).text("Zoom"));
            });
        });
    }

    /// Builds the bottom status bar (tick timing, site count, peak amplitude).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        let (site_count, peak) = match self.model.lattice() {
            Some(lattice) => (
                lattice.sites.len(),
                lattice
                    .sites
                    .iter()
                    .map(|s| s.max_abs_displacement)
                    .fold(0.0f32, f32::max),
            ),
            None => (0, 0.0),
        };

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("tick target = {:.3} s", self.step_interval));
                ui.label(format!("tick last = {:.3} s", self.last_step_dt));
                ui.separator();
                ui.label(format!("sites = {site_count}"));
                ui.label(format!("ticks = {}", self.tick_count));
                ui.label(format!("peak |x| = {peak:.3}"));
            });
        });
    }

    /// Builds the right-hand configuration panel.
    ///
    /// All widgets edit the draft config; nothing reaches the model until
    /// the Apply button calls [`Viewer::apply_draft`].
    fn ui_config_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Config");

                ui.separator();
                ui.label("Lattice");
                Self::labeled_drag_usize(ui, "size:", &mut self.draft.size, 2..=20, 1.0);

                ui.horizontal(|ui| {
                    if ui
                        .selectable_label(
                            matches!(self.draft.variant, NeighborVariant::Orthogonal),
                            "＋ Orthogonal",
                        )
                        .clicked()
                    {
                        self.draft.variant = NeighborVariant::Orthogonal;
                    }
                    if ui
                        .selectable_label(
                            matches!(self.draft.variant, NeighborVariant::Diagonal),
                            "✕ Diagonal",
                        )
                        .clicked()
                    {
                        self.draft.variant = NeighborVariant::Diagonal;
                    }
                });

                ui.separator();
                ui.label("Coupling");
                Self::labeled_drag_f32(ui, "J:", &mut self.draft.coupling, 0.0..=5.0, 0.05);

                ui.separator();
                ui.label("Frequency disorder");
                Self::labeled_drag_f32(
                    ui,
                    "mean:",
                    &mut self.draft.mean_frequency,
                    0.0..=10.0,
                    0.1,
                );
                Self::labeled_drag_f32(
                    ui,
                    "spread:",
                    &mut self.draft.frequency_spread,
                    0.0..=5.0,
                    0.1,
                );

                ui.separator();
                ui.label("Integration");
                Self::labeled_drag_f32(
                    ui,
                    "dt:",
                    &mut self.draft.time_step,
                    0.001..=0.1,
                    0.001,
                );

                ui.separator();
                if ui.button("Apply (rebuild)").clicked() {
                    self.apply_draft();
                }
                if ui.button("Reset cfg to default").clicked() {
                    self.draft = SimConfig::default();
                }
            });
    }

    /// Builds the central panel where the lattice is drawn and interacted with.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::click_and_drag());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            // Pan with drag.
            if response.dragged() {
                let delta = response.drag_delta();
                self.pan += delta;
            }

            let hover_world = response.hover_pos().map(|p| self.screen_to_world(p, rect));

            // Click a site to excite it. This lands between ticks: the tick
            // below runs after input handling within the same frame.
            if response.clicked()
                && let Some(world) = hover_world
                && let Some(size) = self.model.lattice().map(|l| l.size)
                && let Some((row, col)) = Self::site_at_world(size, world)
            {
                self.model.excite(row, col, EXCITE_DISPLACEMENT);
            }

            // Zoom around the mouse cursor.
            if ui.ctx().input(|i| i.raw_scroll_delta.y != 0.0) {
                let scroll = ui.ctx().input(|i| i.raw_scroll_delta.y);
                if scroll != 0.0 {
                    let pointer_screen = response.hover_pos().unwrap_or(rect.center());

                    let world_before = self.screen_to_world(pointer_screen, rect);

                    let factor = (1.0 + scroll * 0.001).clamp(0.5, 2.0);
                    let new_zoom = (self.zoom * factor).clamp(0.1, 10.0);
                    self.zoom = new_zoom;

                    let screen_after = self.world_to_screen(world_before, rect);

                    let delta = pointer_screen - screen_after;
                    self.pan += delta;
                }
            }

            // Draw sites: radius follows |displacement|, color follows the
            // natural frequency.
            if let Some(lattice) = self.model.lattice() {
                for site in &lattice.sites {
                    let world = Self::site_world_pos(lattice.size, site.row, site.col);
                    let p = self.world_to_screen(world, rect);
                    let r = self.radius_for_displacement(site.displacement).max(1.5);
                    let color = self.color_for_frequency(site.natural_frequency);
                    painter.circle_filled(p, r, color);
                }
            }

            // Auto-run simulation if requested.
            if self.running {
                let now = ctx.input(|i| i.time);
                let elapsed = now - self.last_step_time;
                if elapsed >= self.step_interval {
                    if self.last_step_time > 0.0 {
                        self.last_step_dt = elapsed;
                    }
                    self.step_once();
                    self.last_step_time = now;
                }

                ctx.request_repaint();
            }
        });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    ///
    /// This method:
    /// - Renders the top control bar and status bar.
    /// - Renders the config side panel.
    /// - Draws the central lattice view and handles interactions.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_config_panel(ctx);
        self.ui_central_panel(ctx);
    }
}
