//! Static rendering rules: wall descriptors and object descriptors.
//!
//! Both are plain value records living in `'static` tables.  They are
//! checked once by [`WallInfo::validate`] / [`ObjectInfo::validate`] so the
//! per-strip code can index without re-checking shapes.

use crate::defs::{
    CellContent, MAX_VIEW_DISTANCE, WINDOW_BANDS, WINDOW_SIZE_X, WINDOW_SIZE_Y,
};

/// One wall-rendering rule.
///
/// `bitmap` holds `WINDOW_SIZE_X` bytes per row band from `start_y` to
/// `end_y`, addressed by absolute screen column so the parity mirror
/// (`WINDOW_SIZE_X - 1 - x`) stays inside the same image.
#[derive(Clone, Copy, Debug)]
pub struct WallInfo {
    pub start_x: u8, // inclusive
    pub end_x: u8,   // inclusive
    pub start_y: u8, // row band, inclusive
    pub end_y: u8,   // row band, inclusive
    pub distance: u8,
    pub lateral: i8,
    /// Required wall bits of the viewed cell (masked equality).
    pub content: CellContent,
    pub bitmap: &'static [u8],
}

/// One renderable non-wall object.
///
/// Every source row of `data` is `stride` bytes: `width` bitmap bytes
/// followed by `width` mask bytes.  Rows are 8 pixels high; the object
/// occupies bits `vertical_offset .. vertical_offset + height` of the
/// 64-pixel reference frame.
#[derive(Clone, Copy, Debug)]
pub struct ObjectInfo {
    pub item: CellContent,
    pub width: u8,
    pub vertical_offset: u8,
    pub height: u8,
    /// Coverage needed for an output pixel, for distances 1, 2, 3.
    pub thresholds: [u8; 3],
    pub stride: u16,
    pub data: &'static [u8],
}

/// Selects the image plane the downscale kernel samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Plane {
    /// Set bit = keep the background, clear bit = punch it out.
    Mask,
    Bitmap,
}

impl Plane {
    /// Strip returned where the object has no rows at all: fully
    /// transparent for the mask, blank for the bitmap.
    #[inline]
    pub const fn outside(self) -> u8 {
        match self {
            Plane::Mask => 0xFF,
            Plane::Bitmap => 0x00,
        }
    }
}

/// Malformed descriptor tables.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("wall #{index}: column range {start}..={end} outside the window")]
    WallColumns { index: usize, start: u8, end: u8 },

    #[error("wall #{index}: band range {start}..={end} outside the window")]
    WallBands { index: usize, start: u8, end: u8 },

    #[error("wall #{index}: bitmap has {actual} bytes, window needs {expected}")]
    WallBitmapSize {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("wall #{index}: viewing distance {distance} beyond {max}", max = MAX_VIEW_DISTANCE)]
    WallDistance { index: usize, distance: u8 },

    #[error("object {item:?}: vertical offset {offset} is not a multiple of 8")]
    UnalignedOffset { item: CellContent, offset: u8 },

    #[error("object {item:?}: bits {offset}+{height} overflow the {frame}-pixel frame", frame = WINDOW_SIZE_Y)]
    FrameOverflow {
        item: CellContent,
        offset: u8,
        height: u8,
    },

    #[error("object {item:?}: stride {stride} cannot hold bitmap + mask of width {width}")]
    StrideTooSmall {
        item: CellContent,
        stride: u16,
        width: u8,
    },

    #[error("object {item:?}: data has {actual} bytes, {rows} rows need {expected}")]
    DataTooShort {
        item: CellContent,
        rows: usize,
        expected: usize,
        actual: usize,
    },

    #[error("object {item:?}: width {width} wider than the {window}-pixel window", window = WINDOW_SIZE_X)]
    TooWide { item: CellContent, width: u8 },

    #[error("object {item:?}: item type must use object bits only")]
    BadItem { item: CellContent },
}

impl WallInfo {
    /// Number of row bands the bitmap covers.
    #[inline]
    pub const fn bands(&self) -> usize {
        (self.end_y - self.start_y) as usize + 1
    }

    pub fn validate(&self, index: usize) -> Result<(), DescriptorError> {
        if self.start_x > self.end_x || self.end_x >= WINDOW_SIZE_X {
            return Err(DescriptorError::WallColumns {
                index,
                start: self.start_x,
                end: self.end_x,
            });
        }
        if self.start_y > self.end_y || self.end_y >= WINDOW_BANDS {
            return Err(DescriptorError::WallBands {
                index,
                start: self.start_y,
                end: self.end_y,
            });
        }
        if self.distance > MAX_VIEW_DISTANCE {
            return Err(DescriptorError::WallDistance {
                index,
                distance: self.distance,
            });
        }
        let expected = self.bands() * WINDOW_SIZE_X as usize;
        if self.bitmap.len() != expected {
            return Err(DescriptorError::WallBitmapSize {
                index,
                expected,
                actual: self.bitmap.len(),
            });
        }
        Ok(())
    }
}

impl ObjectInfo {
    /// Number of 8-pixel source rows.
    #[inline]
    pub const fn rows(&self) -> usize {
        (self.height as usize).div_ceil(8)
    }

    pub fn validate(&self) -> Result<(), DescriptorError> {
        let item = self.item;
        if item.is_empty() || item.object() != item {
            return Err(DescriptorError::BadItem { item });
        }
        if self.width > WINDOW_SIZE_X {
            return Err(DescriptorError::TooWide {
                item,
                width: self.width,
            });
        }
        // the kernel shifts by `bit_no & 7`, so rows must start on a byte
        if self.vertical_offset % 8 != 0 {
            return Err(DescriptorError::UnalignedOffset {
                item,
                offset: self.vertical_offset,
            });
        }
        if self.vertical_offset as u16 + self.height as u16 > WINDOW_SIZE_Y as u16 {
            return Err(DescriptorError::FrameOverflow {
                item,
                offset: self.vertical_offset,
                height: self.height,
            });
        }
        if (self.stride as usize) < 2 * self.width as usize {
            return Err(DescriptorError::StrideTooSmall {
                item,
                stride: self.stride,
                width: self.width,
            });
        }
        let rows = self.rows();
        let expected = rows.saturating_sub(1) * self.stride as usize + 2 * self.width as usize;
        if self.data.len() < expected {
            return Err(DescriptorError::DataTooShort {
                item,
                rows,
                expected,
                actual: self.data.len(),
            });
        }
        Ok(())
    }
}
