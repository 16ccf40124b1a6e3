use crate::random::RandomSource;
use crate::style::StyleRef;
use glam::Vec2;

/// Axis-aligned rectangle a node's origin may drift within.
///
/// Containment is half-open: the min edges are inside, the max edges are
/// not.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl MotionBounds {
    pub fn from_center_half_extents(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Returns `true` if `p` lies inside. An empty rectangle contains nothing.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        self.min.x < self.max.x
            && self.min.y < self.max.y
            && p.x >= self.min.x
            && p.x < self.max.x
            && p.y >= self.min.y
            && p.y < self.max.y
    }
}

/// A single animated point.
///
/// `origin` is the slow centre of a bounded random walk; `position` is
/// what gets drawn and is derived from the origin every tick by the
/// scroll wrap ([`Node::scroll_y`]) and the x reset ([`Node::reset_x`]).
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    origin: Vec2,
    position: Vec2,
    motion_bounds: MotionBounds,
    motion_vector: Vec2,
    last_update_sec: f64,
    radius: f32,
    ring_count: u32,
    style: StyleRef,
}

impl Node {
    /// Creates a node at `spawn` with a zero motion vector.
    ///
    /// The motion bounds are centred on `spawn` and stay there for the
    /// node's whole life. `ring_count` is raised to at least 1.
    pub fn new(
        spawn: Vec2,
        radius: f32,
        ring_count: u32,
        motion_half_extents: Vec2,
        style: StyleRef,
    ) -> Self {
        Self {
            origin: spawn,
            position: spawn,
            motion_bounds: MotionBounds::from_center_half_extents(spawn, motion_half_extents),
            motion_vector: Vec2::ZERO,
            last_update_sec: 0.0,
            radius,
            ring_count: ring_count.max(1),
            style,
        }
    }

    /// Sets the timestamp the first [`Node::advance`] measures its delta from.
    pub fn with_start_time(mut self, time_sec: f64) -> Self {
        self.last_update_sec = time_sec;
        self
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn motion_bounds(&self) -> &MotionBounds {
        &self.motion_bounds
    }

    pub fn motion_vector(&self) -> Vec2 {
        self.motion_vector
    }

    pub fn last_update_sec(&self) -> f64 {
        self.last_update_sec
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn ring_count(&self) -> u32 {
        self.ring_count
    }

    pub fn style(&self) -> StyleRef {
        self.style
    }

    /// Picks a new drift velocity in px/sec.
    ///
    /// `vx` is uniform over 80% of the bounds width and `vy` over 40% of
    /// the bounds height, both centred on zero, so wider bounds drift
    /// faster.
    pub fn init_motion_vector(&mut self, rng: &mut RandomSource) {
        let span = self.motion_bounds.size() * Vec2::new(0.8, 0.4);
        let vx = span.x * rng.next_float() - span.x * 0.5;
        let vy = span.y * rng.next_float() - span.y * 0.5;
        self.motion_vector = Vec2::new(vx, vy);
    }

    /// One step of the bounded random walk.
    ///
    /// Moves the origin along the motion vector for the time elapsed since
    /// the previous call. If that would leave the motion bounds the origin
    /// stays put and a fresh vector is drawn instead.
    pub fn advance(&mut self, time_sec: f64, rng: &mut RandomSource) {
        let delta = (time_sec - self.last_update_sec) as f32;
        self.last_update_sec = time_sec;

        let candidate = self.origin + self.motion_vector * delta;
        if self.motion_bounds.contains(candidate) {
            self.origin = candidate;
        } else {
            self.init_motion_vector(rng);
        }
    }

    /// Applies the upward scroll `scroll_offset` to the origin and wraps it
    /// into the `[min_y, max_y]` band. Returns the new drawn y.
    pub fn scroll_y(&mut self, scroll_offset: f32, min_y: f32, max_y: f32) -> f32 {
        self.position.y = wrap_scrolled_y(self.origin.y, scroll_offset, min_y, max_y);
        self.position.y
    }

    /// Snaps the drawn x back onto the origin. Returns the new drawn x.
    pub fn reset_x(&mut self) -> f32 {
        self.position.x = self.origin.x;
        self.position.x
    }
}

/// Wraps `origin_y - scroll_offset` into the vertical band.
///
/// Below `min_y` the node re-enters from the bottom at
/// `max_y + (origin_y - min_y) - scroll_offset`; above `max_y` it re-enters
/// from the top at `min_y - scroll_offset - (max_y - origin_y)`. With a band
/// exactly twice the viewport height this loops seamlessly.
pub fn wrap_scrolled_y(origin_y: f32, scroll_offset: f32, min_y: f32, max_y: f32) -> f32 {
    let y = origin_y - scroll_offset;
    if y < min_y {
        max_y + (origin_y - min_y) - scroll_offset
    } else if y > max_y {
        min_y - scroll_offset - (max_y - origin_y)
    } else {
        y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node_at(x: f32, y: f32) -> Node {
        Node::new(Vec2::new(x, y), 25.0, 1, Vec2::new(25.0, 25.0), StyleRef::Node)
    }

    #[test]
    fn bounds_are_centered_on_spawn() {
        let n = node_at(100.0, 50.0);
        let b = n.motion_bounds();
        assert_eq!(b.min, Vec2::new(75.0, 25.0));
        assert_eq!(b.max, Vec2::new(125.0, 75.0));
        assert_eq!(b.width(), 50.0);
        assert_eq!(b.height(), 50.0);
        assert_eq!(n.position(), n.origin());
    }

    #[test]
    fn bounds_containment_is_half_open() {
        let b = MotionBounds::from_center_half_extents(Vec2::ZERO, Vec2::new(1.0, 1.0));
        assert!(b.contains(Vec2::new(-1.0, -1.0)));
        assert!(!b.contains(Vec2::new(1.0, 0.0)));
        assert!(!b.contains(Vec2::new(0.0, 1.0)));

        let empty = MotionBounds::from_center_half_extents(Vec2::ZERO, Vec2::ZERO);
        assert!(!empty.contains(Vec2::ZERO));
    }

    #[test]
    fn ring_count_is_at_least_one() {
        let n = Node::new(Vec2::ZERO, 10.0, 0, Vec2::ONE, StyleRef::Floater);
        assert_eq!(n.ring_count(), 1);
    }

    #[test]
    fn motion_vector_scales_with_bounds() {
        let mut rng = RandomSource::seeded(3);
        let mut narrow = node_at(0.0, 0.0);
        let mut wide = Node::new(Vec2::ZERO, 35.0, 1, Vec2::new(50.0, 25.0), StyleRef::Floater);

        for _ in 0..1000 {
            narrow.init_motion_vector(&mut rng);
            let v = narrow.motion_vector();
            assert!(v.x >= -20.0 && v.x < 20.0, "vx {}", v.x);
            assert!(v.y >= -10.0 && v.y < 10.0, "vy {}", v.y);

            wide.init_motion_vector(&mut rng);
            let v = wide.motion_vector();
            assert!(v.x >= -40.0 && v.x < 40.0, "vx {}", v.x);
            assert!(v.y >= -10.0 && v.y < 10.0, "vy {}", v.y);
        }
    }

    #[test]
    fn advance_moves_origin_inside_bounds() {
        let mut rng = RandomSource::seeded(1);
        let mut n = node_at(0.0, 0.0);
        n.motion_vector = Vec2::new(10.0, -5.0);

        n.advance(1.0, &mut rng);

        assert_eq!(n.origin(), Vec2::new(10.0, -5.0));
        assert_eq!(n.last_update_sec(), 1.0);
        assert_eq!(n.motion_vector(), Vec2::new(10.0, -5.0));
        // Drawn position is untouched until scroll/reset.
        assert_eq!(n.position(), Vec2::ZERO);
    }

    #[test]
    fn advance_reseeds_instead_of_leaving_bounds() {
        let mut rng = RandomSource::seeded(1);
        let mut n = node_at(0.0, 0.0);
        n.motion_vector = Vec2::new(100.0, 0.0);

        n.advance(1.0, &mut rng);

        assert_eq!(n.origin(), Vec2::ZERO);
        assert_ne!(n.motion_vector(), Vec2::new(100.0, 0.0));
        assert_eq!(n.last_update_sec(), 1.0);
    }

    #[test]
    fn start_time_offsets_first_delta() {
        let mut rng = RandomSource::seeded(1);
        let mut n = node_at(0.0, 0.0).with_start_time(10.0);
        n.motion_vector = Vec2::new(4.0, 0.0);

        n.advance(10.5, &mut rng);

        assert_eq!(n.origin(), Vec2::new(2.0, 0.0));
    }

    #[test]
    fn wrap_passes_through_inside_band() {
        // Band for height 800: [-400, 1200].
        assert_eq!(wrap_scrolled_y(300.0, 100.0, -400.0, 1200.0), 200.0);
        assert_eq!(wrap_scrolled_y(-400.0, 0.0, -400.0, 1200.0), -400.0);
    }

    #[test]
    fn wrap_below_band_reenters_from_bottom() {
        // -300 - 200 = -500 < -400 -> 1200 + 100 - 200 = 1100
        assert_eq!(wrap_scrolled_y(-300.0, 200.0, -400.0, 1200.0), 1100.0);
    }

    #[test]
    fn wrap_above_band_reenters_from_top() {
        // Only reachable with a negative offset (downward scroll).
        // 1100 + 200 = 1300 > 1200 -> -400 + 200 - 100 = -300
        assert_eq!(wrap_scrolled_y(1100.0, -200.0, -400.0, 1200.0), -300.0);
    }

    #[test]
    fn scroll_and_reset_only_touch_position() {
        let mut n = node_at(40.0, 100.0);
        n.position = Vec2::new(999.0, 999.0);

        assert_eq!(n.scroll_y(50.0, -400.0, 1200.0), 50.0);
        assert_eq!(n.reset_x(), 40.0);
        assert_eq!(n.position(), Vec2::new(40.0, 50.0));
        assert_eq!(n.origin(), Vec2::new(40.0, 100.0));
    }
}
