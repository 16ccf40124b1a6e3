//! Per-tick motion of whole node sequences.
//!
//! Every tick, each node is updated in three steps:
//! 1. [`Node::scroll_y`] — the drawn y is the origin scrolled upward by
//!    [`scroll_offset`] and wrapped into the viewport band. This reads the
//!    origin *before* this tick's drift.
//! 2. [`Node::advance`] — the origin takes one bounded random-walk step.
//! 3. [`Node::reset_x`] — the drawn x snaps to the (new) origin x.

use crate::layout::{NetworkLayout, Viewport};
use crate::node::Node;
use crate::random::RandomSource;

/// Upward scroll distance at `time_sec`, looping every `2 * height` px.
///
/// A zero-height viewport has no loop and never scrolls.
pub fn scroll_offset(time_sec: f64, speed: f32, height: f32) -> f32 {
    let period = f64::from(height) * 2.0;
    if period <= 0.0 {
        return 0.0;
    }
    ((time_sec * f64::from(speed)) % period) as f32
}

/// Advances every node of `nodes` to `time_sec`.
pub fn advance_nodes(
    nodes: &mut [Node],
    time_sec: f64,
    viewport: Viewport,
    scroll_speed: f32,
    rng: &mut RandomSource,
) {
    let offset = scroll_offset(time_sec, scroll_speed, viewport.height);
    let (min_y, max_y) = viewport.band();

    for node in nodes.iter_mut() {
        node.scroll_y(offset, min_y, max_y);
        node.advance(time_sec, rng);
        node.reset_x();
    }
}

/// Advances the left, right and floating sequences, in that order.
pub fn advance_layout(
    layout: &mut NetworkLayout,
    time_sec: f64,
    viewport: Viewport,
    scroll_speed: f32,
    rng: &mut RandomSource,
) {
    for nodes in layout.sequences_mut() {
        advance_nodes(nodes, time_sec, viewport, scroll_speed, rng);
    }
}
