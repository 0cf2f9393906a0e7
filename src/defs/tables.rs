//! Precomputed constant mappings used by the downscale kernel.
//!
//! All tables are indexed directly by distance (1..=3) or by scale factor
//! (1, 2, 4); slot 0 and the holes in between are never read.

/// Number of set bits in every 4-bit value.
pub const NIBBLE_BIT_COUNT: [u8; 16] = [0, 1, 1, 2, 1, 2, 2, 3, 1, 2, 2, 3, 2, 3, 3, 4];

/// Source pixels folded into one output pixel (per axis) at each distance.
pub const SCALE_FROM_DISTANCE: [u8; 4] = [0, 1, 2, 4];

/// Bits of one source byte sampled per output pixel, by scale factor.
///
/// A scale of 4 samples a whole nibble, which is why the bit counter only
/// needs [`NIBBLE_BIT_COUNT`].
pub const BIT_MASK_FROM_SCALE: [u8; 5] = [0x00, 0x01, 0x03, 0x00, 0x0F];

/// First row band covered by the object frame at each distance.
pub const VERTICAL_START: [u8; 4] = [0, 0, 2, 3];
/// Last row band (inclusive) covered by the object frame at each distance.
pub const VERTICAL_END: [u8; 4] = [0, 7, 5, 4];
