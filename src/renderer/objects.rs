//! Far-to-near object compositing.
//!
//! Objects are only drawn straight ahead of the player (lateral 0).  For
//! every distance from the wall cutoff down to 1 the mask first punches
//! the silhouette out of the background, then the bitmap is OR-ed in, so
//! nearer objects overwrite farther ones.

use crate::{
    defs::WINDOW_CENTER_X,
    renderer::{CellOracle, StripRenderer, ViewState, WallHit, scale::downscaled_strip},
    world::Plane,
};

impl StripRenderer<'_> {
    pub fn composite_objects<O: CellOracle + ?Sized>(
        &self,
        oracle: &O,
        view: &ViewState,
        x: u8,
        y: u8,
        hit: WallHit,
    ) -> u8 {
        let mut pixels = hit.strip;

        for distance in (1..=hit.max_distance).rev() {
            let item = oracle.cell(distance, 0).object();
            if item.is_empty() {
                continue;
            }

            for object in self.objects {
                if object.item != item {
                    continue;
                }
                // each step away halves the on-screen size
                let half = object.width >> distance;
                let left = WINDOW_CENTER_X - half;
                if x < left || x >= WINDOW_CENTER_X + half {
                    continue;
                }

                let pos_x = x - left;
                let mask = downscaled_strip(object, pos_x, y, distance, Plane::Mask);
                pixels &= mask;

                let mut bitmap = downscaled_strip(object, pos_x, y, distance, Plane::Bitmap);
                if distance == 1 {
                    // flash, but only inside the silhouette
                    bitmap ^= view.invert_effect & !mask;
                }
                pixels |= bitmap;
            }
        }

        pixels
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
