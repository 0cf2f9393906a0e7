//! Column-strip renderer.
//!
//! *The display driver never sees walls or objects.*  It asks for one byte
//! per (column, row band) through [`StripRenderer::render_column_strip`]
//! and pushes it to the panel.
//!
//! * [`walls`]   – first-match wall extraction and occlusion cutoff.
//! * [`objects`] – far-to-near masked object compositing.
//! * [`scale`]   – threshold bit-count downscaler shared by both planes.
//! * [`frame`]   – convenience full-window buffer for tools and tests.

pub mod frame;
pub mod objects;
pub mod scale;
pub mod walls;

pub use frame::Frame;
pub use scale::downscaled_strip;
pub use walls::WallHit;

use crate::{
    assets,
    defs::{CellContent, WINDOW_BANDS, WINDOW_SIZE_X},
    world::{DescriptorError, ObjectInfo, WallInfo},
};

/// Answers "what occupies this viewing cell?" relative to the player.
///
/// `distance` counts cells straight ahead (0 = the player's own row),
/// `lateral` counts cells to the right (negative = left).  Must be
/// deterministic for the duration of one frame.
pub trait CellOracle {
    fn cell(&self, distance: u8, lateral: i8) -> CellContent;
}

/// Per-frame presentation state that is not a cell lookup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Wall bitmaps are read right-to-left (player stands on an odd cell).
    pub mirrored: bool,
    /// XOR pattern for the nearest object (0x00 = off, 0xFF = flash).
    pub invert_effect: u8,
}

impl ViewState {
    pub const fn new(player_x: i32, player_y: i32, invert_effect: u8) -> Self {
        Self {
            // xor has the parity of the sum without overflowing
            mirrored: (player_x ^ player_y) & 1 == 1,
            invert_effect,
        }
    }
}

/// Validated pair of descriptor tables.
#[derive(Clone, Copy, Debug)]
pub struct StripRenderer<'t> {
    walls: &'t [WallInfo],
    objects: &'t [ObjectInfo],
}

impl<'t> StripRenderer<'t> {
    /// Check every descriptor once; later lookups index without re-checking.
    pub fn new(walls: &'t [WallInfo], objects: &'t [ObjectInfo]) -> Result<Self, DescriptorError> {
        for (index, wall) in walls.iter().enumerate() {
            wall.validate(index)?;
        }
        for object in objects {
            object.validate()?;
        }
        log::debug!(
            "strip renderer ready: {} wall rules, {} objects",
            walls.len(),
            objects.len()
        );
        Ok(Self { walls, objects })
    }

    pub fn walls(&self) -> &'t [WallInfo] {
        self.walls
    }

    pub fn objects(&self) -> &'t [ObjectInfo] {
        self.objects
    }

    /// The 8 pixels of screen column `x` (0..96) in row band `y` (0..8).
    ///
    /// Pure: the same oracle answers and view state always give the same
    /// byte.
    pub fn render_column_strip<O: CellOracle + ?Sized>(
        &self,
        oracle: &O,
        view: &ViewState,
        x: u8,
        y: u8,
    ) -> u8 {
        debug_assert!(x < WINDOW_SIZE_X, "column {x} outside window");
        debug_assert!(y < WINDOW_BANDS, "band {y} outside window");

        let hit = self.wall_strip(oracle, view, x, y);
        self.composite_objects(oracle, view, x, y, hit)
    }
}

impl StripRenderer<'static> {
    /// Renderer over the bundled wall and object tables.
    pub fn builtin() -> Result<Self, DescriptorError> {
        Self::new(assets::WALLS, assets::OBJECTS)
    }
}

#[cfg(test)]
pub(crate) mod test_util {
    use super::CellOracle;
    use crate::defs::CellContent;

    /// Oracle answering from a short list; everything else is empty floor.
    #[derive(Default)]
    pub struct FixedCells(pub Vec<((u8, i8), CellContent)>);

    impl FixedCells {
        pub fn with(mut self, distance: u8, lateral: i8, content: CellContent) -> Self {
            self.0.push(((distance, lateral), content));
            self
        }
    }

    impl CellOracle for FixedCells {
        fn cell(&self, distance: u8, lateral: i8) -> CellContent {
            self.0
                .iter()
                .find(|(key, _)| *key == (distance, lateral))
                .map(|&(_, content)| content)
                .unwrap_or_default()
        }
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
