use crate::error::{OrganicError, OrganicResult};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Odds (in percent, `0..=100`) used by the connectivity generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathOdds {
    /// Link to the next node, and the closing links into the tail.
    pub first: u32,
    /// Skip-one link to the node after next.
    pub second: u32,
    /// Skip-one closing links that wrap back to the head.
    pub second_end: u32,
}

impl Default for PathOdds {
    fn default() -> Self {
        Self {
            first: 89,
            second: 75,
            second_end: 77,
        }
    }
}

impl PathOdds {
    /// Every trial succeeds.
    pub const ALWAYS: Self = Self {
        first: 100,
        second: 100,
        second_end: 100,
    };

    /// Every trial fails.
    pub const NEVER: Self = Self {
        first: 0,
        second: 0,
        second_end: 0,
    };
}

/// Horizontal placement band of a node column, as fractions of the
/// viewport width.
///
/// Even-indexed nodes land in `[x_min, x_min + x_range)`, odd-indexed
/// nodes in `(x_max - x_range, x_max]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnLayout {
    pub x_min: f32,
    pub x_max: f32,
    pub x_range: f32,
}

impl ColumnLayout {
    pub const fn new(x_min: f32, x_max: f32, x_range: f32) -> Self {
        Self {
            x_min,
            x_max,
            x_range,
        }
    }

    /// Converts the fractions to pixels for a viewport of the given width.
    pub fn scaled(&self, width: f32) -> Self {
        Self::new(self.x_min * width, self.x_max * width, self.x_range * width)
    }
}

/// Tunable constants of the network.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub left_nodes: usize,
    pub right_nodes: usize,
    pub floaters: usize,

    pub node_radius: f32,
    pub floater_radius: f32,

    pub paths: PathOdds,
    /// Percent chance that a floater is drawn with `large_floater_rings`.
    pub large_floater_percent: u32,
    pub large_floater_rings: u32,
    /// Radius growth unit between concentric rings.
    pub ring_spacing: f32,

    /// Upward scroll speed in px/sec.
    pub scroll_speed: f32,

    /// Half extents of the drift rectangle of column nodes.
    pub node_motion_half_extents: Vec2,
    /// Half extents of the drift rectangle of floaters.
    pub floater_motion_half_extents: Vec2,

    pub left_column: ColumnLayout,
    pub right_column: ColumnLayout,
    pub floater_column: ColumnLayout,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            left_nodes: 12,
            right_nodes: 12,
            floaters: 10,
            node_radius: 25.0,
            floater_radius: 35.0,
            paths: PathOdds::default(),
            large_floater_percent: 35,
            large_floater_rings: 3,
            ring_spacing: 10.0,
            scroll_speed: 50.0,
            node_motion_half_extents: Vec2::new(25.0, 25.0),
            floater_motion_half_extents: Vec2::new(50.0, 25.0),
            left_column: ColumnLayout::new(-0.4, 0.3, 0.25),
            right_column: ColumnLayout::new(0.7, 1.4, 0.25),
            floater_column: ColumnLayout::new(0.1, 0.9, 0.2),
        }
    }
}

impl NetworkConfig {
    /// Checks every value against the range the generators can handle.
    pub fn validate(&self) -> OrganicResult<()> {
        for (name, pct) in [
            ("paths.first", self.paths.first),
            ("paths.second", self.paths.second),
            ("paths.second_end", self.paths.second_end),
            ("large_floater_percent", self.large_floater_percent),
        ] {
            if pct > 100 {
                return Err(OrganicError::invalid_config(format!(
                    "{name} must be within 0..=100, got {pct}"
                )));
            }
        }

        if self.large_floater_rings == 0 {
            return Err(OrganicError::invalid_config(
                "large_floater_rings must be at least 1",
            ));
        }

        for (name, v) in [
            ("node_radius", self.node_radius),
            ("floater_radius", self.floater_radius),
            ("scroll_speed", self.scroll_speed),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(OrganicError::invalid_config(format!(
                    "{name} must be a finite non-negative number, got {v}"
                )));
            }
        }

        if !self.ring_spacing.is_finite() || self.ring_spacing <= 0.0 {
            return Err(OrganicError::invalid_config(format!(
                "ring_spacing must be positive, got {}",
                self.ring_spacing
            )));
        }

        for (name, e) in [
            ("node_motion_half_extents", self.node_motion_half_extents),
            ("floater_motion_half_extents", self.floater_motion_half_extents),
        ] {
            if !e.is_finite() || e.min_element() < 0.0 {
                return Err(OrganicError::invalid_config(format!(
                    "{name} must be finite and non-negative, got {e}"
                )));
            }
        }

        for (name, c) in [
            ("left_column", self.left_column),
            ("right_column", self.right_column),
            ("floater_column", self.floater_column),
        ] {
            if !(c.x_min.is_finite() && c.x_max.is_finite() && c.x_range.is_finite()) {
                return Err(OrganicError::invalid_config(format!(
                    "{name} fractions must be finite"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = NetworkConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.left_nodes, 12);
        assert_eq!(cfg.right_nodes, 12);
        assert_eq!(cfg.floaters, 10);
        assert_eq!(cfg.paths, PathOdds { first: 89, second: 75, second_end: 77 });
        assert_eq!(cfg.large_floater_percent, 35);
        assert_eq!(cfg.scroll_speed, 50.0);
    }

    #[test]
    fn probability_over_hundred_is_rejected() {
        let mut cfg = NetworkConfig::default();
        cfg.paths.second = 101;
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("paths.second"), "{err}");
    }

    #[test]
    fn non_positive_ring_spacing_is_rejected() {
        let mut cfg = NetworkConfig::default();
        cfg.ring_spacing = 0.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn negative_motion_extents_are_rejected() {
        let mut cfg = NetworkConfig::default();
        cfg.floater_motion_half_extents = Vec2::new(-1.0, 25.0);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn column_layout_scales_with_width() {
        let c = ColumnLayout::new(-0.4, 0.3, 0.25).scaled(1000.0);
        assert_eq!(c, ColumnLayout::new(-400.0, 300.0, 250.0));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let json = r#"{ "floaters": 3, "paths": { "first": 100 }, "node_motion_half_extents": [10.0, 5.0] }"#;
        let cfg: NetworkConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.floaters, 3);
        assert_eq!(cfg.paths.first, 100);
        assert_eq!(cfg.paths.second, 75);
        assert_eq!(cfg.node_motion_half_extents, Vec2::new(10.0, 5.0));
        assert_eq!(cfg.left_nodes, 12);
    }
}
