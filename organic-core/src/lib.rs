//! Procedural node network animation core.
//!
//! Main components:
//! - [`random`] — the shared seeded random source.
//! - [`node`] — animated nodes and their bounded random walk.
//! - [`connectivity`] — probabilistic path graphs over node sequences.
//! - [`layout`] — column and floater placement for a viewport.
//! - [`motion`] — per-tick scroll, wrap and drift for whole sequences.
//! - [`frame`] — drawable segments and circles for the current state.
//! - [`network`] — the [`OrganicNetwork`] facade tying everything together.
//! - [`config`] / [`style`] — tunable constants and the colour table.
//! - [`types`] — shared type aliases.

pub mod config;
pub mod connectivity;
pub mod error;
pub mod frame;
pub mod layout;
pub mod motion;
pub mod network;
pub mod node;
pub mod random;
pub mod style;
pub mod types;

pub use config::NetworkConfig;
pub use error::{OrganicError, OrganicResult};
pub use frame::{Circle, Frame, Segment};
pub use network::OrganicNetwork;
pub use random::RandomSource;
pub use style::{Rgba, StyleRef, StyleTable};
