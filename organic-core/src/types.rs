/// Index of a node inside one node sequence (left, right or floating).
///
/// Only meaningful for the sequence it was produced against; sequences
/// are never resized after generation, so indices stay valid until the
/// next viewport change replaces them wholesale.
pub type NodeIndex = usize;
