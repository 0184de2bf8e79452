//! Icon inversion.
//!
//! Icon pixels are opaque data, not a parseable color, so small icon-like
//! images get a CSS filter instead of a remap. The hue rotation keeps any
//! tinted pixels on their original hue after inversion.

/// Filter applied to invertible elements.
pub const INVERT_FILTER: &str = "invert(1) hue-rotate(180deg) brightness(1.05)";
