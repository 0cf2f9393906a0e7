//! Full-window buffer in panel page order.
//!
//! The core never needs this – a display driver can stream strips straight
//! to the panel – but the viewer and the ASCII tool want a whole picture.

use crate::{
    defs::{WINDOW_BANDS, WINDOW_BYTES, WINDOW_SIZE_X, WINDOW_SIZE_Y},
    renderer::{CellOracle, StripRenderer, ViewState},
};

/// One rendered window: `pages[band * WINDOW_SIZE_X + x]`.
#[derive(Clone, PartialEq, Eq)]
pub struct Frame {
    pages: [u8; WINDOW_BYTES],
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            pages: [0; WINDOW_BYTES],
        }
    }
}

impl Frame {
    /// Render every (column, band) pair of the window.
    pub fn render<O: CellOracle + ?Sized>(
        renderer: &StripRenderer<'_>,
        oracle: &O,
        view: &ViewState,
    ) -> Self {
        let mut frame = Self::default();
        for band in 0..WINDOW_BANDS {
            for x in 0..WINDOW_SIZE_X {
                frame.pages[band as usize * WINDOW_SIZE_X as usize + x as usize] =
                    renderer.render_column_strip(oracle, view, x, band);
            }
        }
        frame
    }

    pub fn pages(&self) -> &[u8] {
        &self.pages
    }

    pub fn strip(&self, x: usize, band: usize) -> u8 {
        self.pages[band * WINDOW_SIZE_X as usize + x]
    }

    /// Pixel at screen column `x`, pixel row `y` (0..64).
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.strip(x, y / 8) & (1 << (y % 8)) != 0
    }

    /// `#` for lit pixels, `.` for dark ones, one line per pixel row.
    pub fn to_ascii(&self) -> String {
        let w = WINDOW_SIZE_X as usize;
        let h = WINDOW_SIZE_Y as usize;
        let mut out = String::with_capacity((w + 1) * h);
        for y in 0..h {
            for x in 0..w {
                out.push(if self.pixel(x, y) { '#' } else { '.' });
            }
            out.push('\n');
        }
        out
    }

    /// Blow the frame up by `scale` into a row-major `0x00RRGGBB` buffer.
    pub fn write_argb(&self, dst: &mut [u32], scale: usize, on: u32, off: u32) {
        let w = WINDOW_SIZE_X as usize;
        let h = WINDOW_SIZE_Y as usize;
        debug_assert_eq!(dst.len(), w * h * scale * scale);

        let pitch = w * scale;
        for y in 0..h * scale {
            let row = &mut dst[y * pitch..(y + 1) * pitch];
            for (sx, px) in row.iter_mut().enumerate() {
                *px = if self.pixel(sx / scale, y / scale) { on } else { off };
            }
        }
    }
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_ascii())
    }
}
