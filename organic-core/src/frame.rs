//! Drawable primitives for the current node state.

use crate::connectivity::NodePath;
use crate::layout::NetworkLayout;
use crate::node::Node;
use crate::style::StyleRef;
use glam::Vec2;

/// A line between two connected column nodes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
    pub style: StyleRef,
}

/// One ring of a node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
    /// 1-based ring index within its node.
    pub ring: u32,
    pub style: StyleRef,
}

/// Everything to paint for one tick, in paint order: all segments first,
/// then all circles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub segments: Vec<Segment>,
    pub circles: Vec<Circle>,
}

impl Frame {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && self.circles.is_empty()
    }

    /// Builds the frame for `layout` without touching any node.
    ///
    /// Segments come from the left then right paths, and only for paths
    /// whose end lies strictly below their start (`to.y > from.y`); upward
    /// and level links are skipped. Circles come from the left, right and
    /// floating nodes. A node's ring `i` is drawn at the running radius,
    /// which then grows by `ring_spacing * i`: radius 25 with three rings
    /// and spacing 10 gives 25, 35, 55.
    pub fn assemble(layout: &NetworkLayout, ring_spacing: f32) -> Self {
        let mut frame = Self {
            segments: Vec::with_capacity(layout.path_count()),
            circles: Vec::with_capacity(layout.node_count()),
        };

        push_segments(&mut frame.segments, &layout.left_paths, &layout.left_nodes);
        push_segments(&mut frame.segments, &layout.right_paths, &layout.right_nodes);

        for nodes in layout.sequences() {
            for node in nodes {
                push_rings(&mut frame.circles, node, ring_spacing);
            }
        }

        frame
    }
}

fn push_segments(out: &mut Vec<Segment>, paths: &[NodePath], nodes: &[Node]) {
    for path in paths {
        let (a, b) = path.resolve(nodes);
        let from = a.position();
        let to = b.position();
        if to.y - from.y > 0.0 {
            out.push(Segment {
                from,
                to,
                style: StyleRef::Network,
            });
        }
    }
}

fn push_rings(out: &mut Vec<Circle>, node: &Node, ring_spacing: f32) {
    let mut radius = node.radius();
    for ring in 1..=node.ring_count() {
        out.push(Circle {
            center: node.position(),
            radius,
            ring,
            style: node.style(),
        });
        radius += ring_spacing * ring as f32;
    }
}
