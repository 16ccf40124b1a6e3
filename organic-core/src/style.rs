//! Paint styles referenced by frame primitives.
//!
//! The core never paints anything itself. Each emitted primitive carries a
//! [`StyleRef`], and the renderer resolves it against the [`StyleTable`]
//! handed to the network at construction.

use crate::error::{OrganicError, OrganicResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named style a primitive should be painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleRef {
    /// Filled circles of the left and right columns.
    Node,
    /// Line segments between column nodes.
    Network,
    /// Filled circles of the free-floating nodes.
    Floater,
}

/// Straight (non-premultiplied) 8-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xff)
    }

    /// Parses `#RRGGBB` or `#AARRGGBB` (alpha first, as colour resources
    /// are usually written). The leading `#` is optional.
    pub fn parse_hex(s: &str) -> OrganicResult<Self> {
        let hex = s.trim().trim_start_matches('#');
        if !hex.is_ascii() || !matches!(hex.len(), 6 | 8) {
            return Err(OrganicError::invalid_color(s));
        }
        let byte = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| OrganicError::invalid_color(s))
        };
        if hex.len() == 6 {
            Ok(Self::opaque(byte(0)?, byte(2)?, byte(4)?))
        } else {
            Ok(Self::new(byte(2)?, byte(4)?, byte(6)?, byte(0)?))
        }
    }
}

impl FromStr for Rgba {
    type Err = OrganicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl TryFrom<String> for Rgba {
    type Error = OrganicError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&value)
    }
}

impl From<Rgba> for String {
    fn from(c: Rgba) -> Self {
        c.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.a, self.r, self.g, self.b)
    }
}

/// Colour and stroke for one [`StyleRef`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub color: Rgba,
    /// Line width in px. Filled styles ignore it.
    #[serde(default)]
    pub stroke_width: f32,
}

/// Direct colour table replacing any resource lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleTable {
    pub background: Rgba,
    pub node: Style,
    pub network: Style,
    pub floater: Style,
}

impl Default for StyleTable {
    fn default() -> Self {
        Self {
            background: Rgba::opaque(0x0b, 0x3c, 0x41),
            node: Style {
                color: Rgba::new(0xff, 0xff, 0xff, 0xe6),
                stroke_width: 0.0,
            },
            network: Style {
                color: Rgba::new(0xff, 0xff, 0xff, 0x66),
                stroke_width: 8.0,
            },
            floater: Style {
                color: Rgba::new(0xff, 0xff, 0xff, 0x33),
                stroke_width: 0.0,
            },
        }
    }
}

impl StyleTable {
    pub fn get(&self, style: StyleRef) -> &Style {
        match style {
            StyleRef::Node => &self.node,
            StyleRef::Network => &self.network,
            StyleRef::Floater => &self.floater,
        }
    }

    pub fn validate(&self) -> OrganicResult<()> {
        for (name, style) in [
            ("node", &self.node),
            ("network", &self.network),
            ("floater", &self.floater),
        ] {
            if !style.stroke_width.is_finite() || style.stroke_width < 0.0 {
                return Err(OrganicError::invalid_config(format!(
                    "{name}.stroke_width must be a finite non-negative number, got {}",
                    style.stroke_width
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
    fn parses_rgb_and_argb_hex() {
        assert_eq!(Rgba::parse_hex("#0b3c41").unwrap(), Rgba::opaque(0x0b, 0x3c, 0x41));
        assert_eq!(
            Rgba::parse_hex("#66FFFFFF").unwrap(),
            Rgba::new(0xff, 0xff, 0xff, 0x66)
        );
        assert_eq!(Rgba::parse_hex("102030").unwrap(), Rgba::opaque(0x10, 0x20, 0x30));
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["", "#12345", "#1234567", "#gg0000", "#ÿÿÿ"] {
            assert!(
                matches!(Rgba::parse_hex(bad), Err(OrganicError::InvalidColor(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn display_is_argb_and_parses_back() {
        let c = Rgba::new(1, 2, 3, 4);
        assert_eq!(c.to_string(), "#04010203");
        assert_eq!(c.to_string().parse::<Rgba>().unwrap(), c);
    }

    #[test]
    fn default_network_style_has_stroke_width_eight() {
        let styles = StyleTable::default();
        assert_eq!(styles.get(StyleRef::Network).stroke_width, 8.0);
        assert!(styles.validate().is_ok());
    }

    #[test]
    fn deserializes_partial_table_from_json() {
        let json = r##"{ "background": "#000000", "floater": { "color": "#80ff0000" } }"##;
        let styles: StyleTable = serde_json::from_str(json).unwrap();
        assert_eq!(styles.background, Rgba::opaque(0, 0, 0));
        assert_eq!(styles.floater.color, Rgba::new(0xff, 0, 0, 0x80));
        assert_eq!(styles.floater.stroke_width, 0.0);
        assert_eq!(styles.network, StyleTable::default().network);
    }

    #[test]
    fn negative_stroke_width_is_rejected() {
        let mut styles = StyleTable::default();
        styles.network.stroke_width = -1.0;
        assert!(matches!(styles.validate(), Err(OrganicError::InvalidConfig(_))));
    }
}
