pub mod cell;
pub mod tables;

pub use self::{
    cell::{CellContent, by_glyph},
    tables::{
        BIT_MASK_FROM_SCALE, NIBBLE_BIT_COUNT, SCALE_FROM_DISTANCE, VERTICAL_END, VERTICAL_START,
    },
};

/// Width of the 3-D view window in pixels (= strips per band).
pub const WINDOW_SIZE_X: u8 = 96;
/// Height of the 3-D view window in pixels.
pub const WINDOW_SIZE_Y: u8 = 64;
/// Number of 8-pixel row bands stacked in the window.
pub const WINDOW_BANDS: u8 = WINDOW_SIZE_Y / 8;
/// Horizontal centre; objects are only drawn straight ahead of the player.
pub const WINDOW_CENTER_X: u8 = WINDOW_SIZE_X / 2;

/// Farthest viewing distance that can still carry a visible object.
pub const MAX_VIEW_DISTANCE: u8 = 3;

/// Bytes needed for one full window in page order (`band * 96 + x`).
pub const WINDOW_BYTES: usize = WINDOW_SIZE_X as usize * WINDOW_BANDS as usize;
