//! Node placement for a viewport.
//!
//! Column nodes tile a vertical band twice the viewport height, starting
//! half a viewport above the top edge, so the scroll wrap in
//! [`crate::motion`] can loop them without a visible seam. Floaters are
//! scattered uniformly over the same band.

use crate::config::{ColumnLayout, NetworkConfig};
use crate::connectivity::{NodePath, generate_paths};
use crate::node::Node;
use crate::random::RandomSource;
use crate::style::StyleRef;
use glam::Vec2;

/// Drawable area in px, after any padding has been removed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Replaces non-finite or negative dimensions with zero.
    pub fn sanitized(self) -> Self {
        let clean = |v: f32| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self::new(clean(self.width), clean(self.height))
    }

    /// Vertical band `[-height / 2, 1.5 * height]` nodes live and wrap in.
    pub fn band(&self) -> (f32, f32) {
        (-self.height * 0.5, self.height * 1.5)
    }
}

/// Per-sequence node attributes shared by every node a generator creates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeTemplate {
    pub radius: f32,
    pub motion_half_extents: Vec2,
    pub style: StyleRef,
    /// Timestamp the new nodes' walk clocks start from.
    pub start_time_sec: f64,
}

#[inline]
fn zigzag_x(i: usize, column: &ColumnLayout, rng: &mut RandomSource) -> f32 {
    let offset = rng.next_float() * column.x_range;
    if i % 2 == 0 {
        column.x_min + offset
    } else {
        column.x_max - offset
    }
}

/// Generates an evenly spaced zig-zag column.
///
/// Node `i` sits at `y = -height / 2 + i * (2 * height / count)`. Even
/// indices are offset right of `column.x_min`, odd indices left of
/// `column.x_max`. `column` is in px.
pub fn generate_nodes(
    count: usize,
    column: &ColumnLayout,
    height: f32,
    template: &NodeTemplate,
    rng: &mut RandomSource,
) -> Vec<Node> {
    if count == 0 {
        return Vec::new();
    }

    let y_segment = height * 2.0 / count as f32;
    let y_base = -height * 0.5;

    (0..count)
        .map(|i| {
            let x = zigzag_x(i, column, rng);
            let y = y_base + y_segment * i as f32;
            spawn(Vec2::new(x, y), 1, template, rng)
        })
        .collect()
}

/// Generates floaters scattered over `[-height / 2, 1.5 * height)`.
///
/// Each floater gets `large_rings` rings with probability
/// `large_percent / 100`, otherwise a single ring.
pub fn generate_floating_nodes(
    count: usize,
    column: &ColumnLayout,
    height: f32,
    template: &NodeTemplate,
    large_percent: u32,
    large_rings: u32,
    rng: &mut RandomSource,
) -> Vec<Node> {
    let y_range = height * 2.0;
    let y_offset = -height * 0.5;

    (0..count)
        .map(|i| {
            let rings = if rng.chance(large_percent) { large_rings } else { 1 };
            let x = zigzag_x(i, column, rng);
            let y = rng.next_float() * y_range + y_offset;
            spawn(Vec2::new(x, y), rings, template, rng)
        })
        .collect()
}

fn spawn(pos: Vec2, rings: u32, template: &NodeTemplate, rng: &mut RandomSource) -> Node {
    let mut node = Node::new(
        pos,
        template.radius,
        rings,
        template.motion_half_extents,
        template.style,
    )
    .with_start_time(template.start_time_sec);
    node.init_motion_vector(rng);
    node
}

/// Every node and path sequence for one viewport size.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NetworkLayout {
    pub left_nodes: Vec<Node>,
    pub right_nodes: Vec<Node>,
    pub floating_nodes: Vec<Node>,
    pub left_paths: Vec<NodePath>,
    pub right_paths: Vec<NodePath>,
}

impl NetworkLayout {
    /// Generates a complete layout.
    ///
    /// Random draws happen in a fixed order (left column, right column,
    /// left paths, right paths, floaters) so a seeded source always yields
    /// the same layout for the same viewport.
    pub fn generate(
        viewport: Viewport,
        cfg: &NetworkConfig,
        start_time_sec: f64,
        rng: &mut RandomSource,
    ) -> Self {
        let width = viewport.width;
        let height = viewport.height;

        let column_template = NodeTemplate {
            radius: cfg.node_radius,
            motion_half_extents: cfg.node_motion_half_extents,
            style: StyleRef::Node,
            start_time_sec,
        };
        let floater_template = NodeTemplate {
            radius: cfg.floater_radius,
            motion_half_extents: cfg.floater_motion_half_extents,
            style: StyleRef::Floater,
            start_time_sec,
        };

        let left_nodes = generate_nodes(
            cfg.left_nodes,
            &cfg.left_column.scaled(width),
            height,
            &column_template,
            rng,
        );
        let right_nodes = generate_nodes(
            cfg.right_nodes,
            &cfg.right_column.scaled(width),
            height,
            &column_template,
            rng,
        );
        let left_paths = generate_paths(&left_nodes, &cfg.paths, rng);
        let right_paths = generate_paths(&right_nodes, &cfg.paths, rng);
        let floating_nodes = generate_floating_nodes(
            cfg.floaters,
            &cfg.floater_column.scaled(width),
            height,
            &floater_template,
            cfg.large_floater_percent,
            cfg.large_floater_rings,
            rng,
        );

        Self {
            left_nodes,
            right_nodes,
            floating_nodes,
            left_paths,
            right_paths,
        }
    }

    pub fn node_count(&self) -> usize {
        self.left_nodes.len() + self.right_nodes.len() + self.floating_nodes.len()
    }

    pub fn path_count(&self) -> usize {
        self.left_paths.len() + self.right_paths.len()
    }

    /// All node sequences, in draw order.
    pub fn sequences(&self) -> [&[Node]; 3] {
        [&self.left_nodes, &self.right_nodes, &self.floating_nodes]
    }

    /// All node sequences, mutably, in draw order.
    pub fn sequences_mut(&mut self) -> [&mut Vec<Node>; 3] {
        [
            &mut self.left_nodes,
            &mut self.right_nodes,
            &mut self.floating_nodes,
        ]
    }
}
