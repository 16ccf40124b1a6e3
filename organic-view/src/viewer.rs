//! eframe/egui host for the organic network animation.
//!
//! This module defines [`Viewer`], which owns an [`OrganicNetwork`] and
//! implements [`eframe::App`]: it feeds the network the surface size and
//! the animation clock, and paints the returned primitives.

use crate::settings::Padding;
use eframe::App;
use glam::Vec2;
use organic_core::{Frame, OrganicNetwork, Rgba, StyleRef, StyleTable};

/// Counts shown in the status bar for the most recent frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct FrameStats {
    segments: usize,
    circles: usize,
}

/// Style table resolved to egui colours once, at construction.
#[derive(Clone, Copy, Debug)]
struct Palette {
    background: egui::Color32,
    node: egui::Color32,
    network: egui::Stroke,
    floater: egui::Color32,
}

impl Palette {
    fn from_styles(styles: &StyleTable) -> Self {
        Self {
            background: color32(styles.background),
            node: color32(styles.node.color),
            network: egui::Stroke::new(styles.network.stroke_width, color32(styles.network.color)),
            floater: color32(styles.floater.color),
        }
    }

    fn fill(&self, style: StyleRef) -> egui::Color32 {
        match style {
            StyleRef::Node => self.node,
            StyleRef::Network => self.network.color,
            StyleRef::Floater => self.floater,
        }
    }
}

fn color32(c: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

/// Main application state.
///
/// The per-frame update is:
/// 1. Resize the network if the surface size changed.
/// 2. Tick the network with the elapsed animation time, which yields the
///    frame to paint and then advances every node.
/// 3. Paint background, segments and circles, and request another repaint.
///
/// ### Fields
/// - `network` - The animation core.
/// - `padding` - Space between the surface edge and the animated viewport.
/// - `palette` - Colours resolved from the network's style table.
/// - `epoch` - egui time of the first frame; the animation clock starts there.
/// - `surface` - Last surface size handed to the network.
/// - `anim_time` - Animation time of the latest tick (seconds).
/// - `stats` - Primitive counts of the latest frame.
pub struct Viewer {
    network: OrganicNetwork,
    padding: Padding,
    palette: Palette,

    epoch: Option<f64>,
    surface: Option<egui::Vec2>,

    anim_time: f64,
    stats: FrameStats,
}

impl Viewer {
    pub fn new(network: OrganicNetwork, padding: Padding) -> Self {
        let palette = Palette::from_styles(network.styles());
        Self {
            network,
            padding,
            palette,
            epoch: None,
            surface: None,
            anim_time: 0.0,
            stats: FrameStats::default(),
        }
    }

    /// Converts an egui timestamp into animation time, fixing the epoch at
    /// the first call.
    fn clock(&mut self, now: f64) -> f64 {
        let epoch = *self.epoch.get_or_insert(now);
        (now - epoch).max(0.0)
    }

    /// Regenerates the network when the surface size changed.
    ///
    /// ### Returns
    /// `true` if the network was regenerated.
    fn sync_surface(&mut self, size: egui::Vec2) -> bool {
        if self.surface == Some(size) {
            return false;
        }
        let inner = self.padding.inner_size(size);
        tracing::info!(
            width = inner.x,
            height = inner.y,
            "surface changed, regenerating network"
        );
        self.network.resize(inner.x, inner.y);
        self.surface = Some(size);
        true
    }

    /// Converts a viewport position to screen-space inside `rect`.
    fn to_screen(&self, p: Vec2, rect: egui::Rect) -> egui::Pos2 {
        rect.min + self.padding.offset() + egui::vec2(p.x, p.y)
    }

    /// Ticks the network at egui time `now` and returns the frame to paint.
    fn step(&mut self, now: f64) -> Frame {
        self.anim_time = self.clock(now);
        let frame = self.network.tick(self.anim_time);
        self.stats = FrameStats {
            segments: frame.segments.len(),
            circles: frame.circles.len(),
        };
        frame
    }

    fn paint(&self, painter: &egui::Painter, rect: egui::Rect, frame: &Frame) {
        painter.rect_filled(rect, 0.0, self.palette.background);

        for s in &frame.segments {
            let a = self.to_screen(s.from, rect);
            let b = self.to_screen(s.to, rect);
            painter.line_segment([a, b], self.palette.network);
        }

        for c in &frame.circles {
            let center = self.to_screen(c.center, rect);
            painter.circle_filled(center, c.radius, self.palette.fill(c.style));
        }
    }

    /// Builds the bottom status bar (primitive counts, animation time).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("t = {:.2} s", self.anim_time));
                ui.separator();
                ui.label(format!("circles = {}", self.stats.circles));
                ui.label(format!("segments = {}", self.stats.segments));
                ui.separator();
                let layout = self.network.layout();
                ui.label(format!("paths = {}", layout.path_count()));
                ui.label(format!("nodes = {}", layout.node_count()));
            });
        });
    }

    /// Builds the central panel where the network is drawn.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show(ctx, |ui| {
                let (_, rect) = ui.allocate_space(ui.available_size());
                let painter = ui.painter_at(rect);

                self.sync_surface(rect.size());

                let now = ctx.input(|i| i.time);
                let frame = self.step(now);
                self.paint(&painter, rect, &frame);

                ctx.request_repaint();
            });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
    }
}
