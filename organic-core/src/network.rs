use crate::config::NetworkConfig;
use crate::error::OrganicResult;
use crate::frame::Frame;
use crate::layout::{NetworkLayout, Viewport};
use crate::motion::advance_layout;
use crate::random::RandomSource;
use crate::style::StyleTable;
use tracing::{debug, warn};

/// One running animation: configuration, the shared random source and the
/// node/path sequences for the current viewport.
///
/// The host drives it with two calls:
/// - [`OrganicNetwork::resize`] whenever the drawable area changes, which
///   throws away and regenerates every sequence.
/// - [`OrganicNetwork::tick`] once per presented frame with the elapsed
///   animation time, which returns the primitives to paint and then moves
///   every node to that time.
///
/// Until the first `resize` there is nothing to draw and ticks yield empty
/// frames.
#[derive(Debug, Clone)]
pub struct OrganicNetwork {
    cfg: NetworkConfig,
    styles: StyleTable,
    rng: RandomSource,
    viewport: Option<Viewport>,
    layout: NetworkLayout,
    last_tick_sec: f64,
}

impl OrganicNetwork {
    /// Creates a network after validating `cfg` and `styles`.
    pub fn new(cfg: NetworkConfig, styles: StyleTable, rng: RandomSource) -> OrganicResult<Self> {
        cfg.validate()?;
        styles.validate()?;
        Ok(Self {
            cfg,
            styles,
            rng,
            viewport: None,
            layout: NetworkLayout::default(),
            last_tick_sec: 0.0,
        })
    }

    /// Default configuration and styles with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            cfg: NetworkConfig::default(),
            styles: StyleTable::default(),
            rng: RandomSource::seeded(seed),
            viewport: None,
            layout: NetworkLayout::default(),
            last_tick_sec: 0.0,
        }
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.cfg
    }

    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    pub fn layout(&self) -> &NetworkLayout {
        &self.layout
    }

    /// Timestamp of the latest tick, in seconds.
    pub fn last_tick_sec(&self) -> f64 {
        self.last_tick_sec
    }

    /// Regenerates every sequence for a `width` x `height` viewport.
    ///
    /// Non-finite or negative dimensions are treated as zero. New nodes
    /// start their walk clocks at the latest tick time so the first drift
    /// step after a resize covers one frame, not the whole run.
    #[tracing::instrument(skip(self))]
    pub fn resize(&mut self, width: f32, height: f32) {
        let requested = Viewport::new(width, height);
        let viewport = requested.sanitized();
        if viewport != requested {
            warn!(?requested, ?viewport, "sanitized viewport dimensions");
        }

        self.layout =
            NetworkLayout::generate(viewport, &self.cfg, self.last_tick_sec, &mut self.rng);
        self.viewport = Some(viewport);

        debug!(
            nodes = self.layout.node_count(),
            paths = self.layout.path_count(),
            "regenerated network"
        );
    }

    /// Primitives for the current state. Does not move anything, so calling
    /// it twice in a row returns the same frame.
    pub fn frame(&self) -> Frame {
        Frame::assemble(&self.layout, self.cfg.ring_spacing)
    }

    /// Moves every node to `time_sec`.
    ///
    /// Timestamps that are not finite or earlier than the previous tick are
    /// replaced by the previous tick's time.
    pub fn advance(&mut self, time_sec: f64) {
        let time_sec = self.sanitize_time(time_sec);
        self.last_tick_sec = time_sec;

        if let Some(viewport) = self.viewport {
            advance_layout(
                &mut self.layout,
                time_sec,
                viewport,
                self.cfg.scroll_speed,
                &mut self.rng,
            );
        }
    }

    /// One tick: assemble the frame, then advance to `time_sec`.
    pub fn tick(&mut self, time_sec: f64) -> Frame {
        let frame = self.frame();
        self.advance(time_sec);
        frame
    }

    fn sanitize_time(&self, time_sec: f64) -> f64 {
        if time_sec.is_finite() && time_sec >= self.last_tick_sec {
            time_sec
        } else {
            warn!(
                time_sec,
                last = self.last_tick_sec,
                "non-monotonic animation time, holding previous tick"
            );
            self.last_tick_sec
        }
    }
}
