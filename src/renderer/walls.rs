//! Wall column extraction.
//!
//! The wall table is ordered nearest first; the first rule whose column
//! window contains `x` *and* whose viewing cell holds the required wall
//! type paints the background and caps how far away objects may still be
//! drawn.

use crate::{
    defs::{MAX_VIEW_DISTANCE, WINDOW_SIZE_X},
    renderer::{CellOracle, StripRenderer, ViewState},
};

/// Background strip plus the farthest distance objects may render at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WallHit {
    pub strip: u8,
    pub max_distance: u8,
}

impl WallHit {
    /// Nothing matched: black background, every distance may carry objects.
    pub const NONE: Self = Self {
        strip: 0,
        max_distance: MAX_VIEW_DISTANCE,
    };
}

impl StripRenderer<'_> {
    pub fn wall_strip<O: CellOracle + ?Sized>(
        &self,
        oracle: &O,
        view: &ViewState,
        x: u8,
        y: u8,
    ) -> WallHit {
        for wall in self.walls {
            if x < wall.start_x || x > wall.end_x {
                continue;
            }
            if oracle.cell(wall.distance, wall.lateral).wall() != wall.content {
                continue;
            }

            // structurally present, but maybe nothing to draw in this band
            let strip = if y >= wall.start_y && y <= wall.end_y {
                // mirror on odd cells so identical tiles don't glue together
                let col = if view.mirrored {
                    WINDOW_SIZE_X - 1 - x
                } else {
                    x
                };
                wall.bitmap[(y - wall.start_y) as usize * WINDOW_SIZE_X as usize + col as usize]
            } else {
                0
            };

            // objects behind the wall are hidden; doors or levers *on* it are not
            return WallHit {
                strip,
                max_distance: wall.distance,
            };
        }
        WallHit::NONE
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        defs::{CellContent, WINDOW_BANDS},
        renderer::test_util::FixedCells,
        world::WallInfo,
    };

    const BANDS: usize = 6;

    /// Every byte encodes its own offset so reads are easy to verify.
    static NUMBERED: [u8; BANDS * 96] = {
        let mut out = [0u8; BANDS * 96];
        let mut i = 0;
        while i < out.len() {
            out[i] = (i % 251) as u8;
            i += 1;
        }
        out
    };
    static FULL: [u8; 8 * 96] = [0xFF; 8 * 96];

    fn table() -> [WallInfo; 2] {
        [
            WallInfo {
                start_x: 10,
                end_x: 50,
                start_y: 0,
                end_y: BANDS as u8 - 1,
                distance: 2,
                lateral: 0,
                content: CellContent::WALL,
                bitmap: &NUMBERED,
            },
            WallInfo {
                start_x: 0,
                end_x: 95,
                start_y: 0,
                end_y: 7,
                distance: 3,
                lateral: 0,
                content: CellContent::WALL,
                bitmap: &FULL,
            },
        ]
    }

    #[test]
    fn reads_bitmap_at_band_offset() {
        let walls = table();
        let r = StripRenderer::new(&walls, &[]).unwrap();
        let oracle = FixedCells::default().with(2, 0, CellContent::WALL);

        let hit = r.wall_strip(&oracle, &ViewState::default(), 30, 5);
        assert_eq!(hit.strip, NUMBERED[5 * 96 + 30]);
        assert_eq!(hit.max_distance, 2);

        let odd = ViewState {
            mirrored: true,
            invert_effect: 0,
        };
        let hit = r.wall_strip(&oracle, &odd, 30, 5);
        assert_eq!(hit.strip, NUMBERED[5 * 96 + (95 - 30)]);
        assert_ne!(NUMBERED[5 * 96 + 30], NUMBERED[5 * 96 + 65]);
    }

    #[test]
    fn band_outside_window_is_blank_but_still_occludes() {
        let walls = table();
        let r = StripRenderer::new(&walls, &[]).unwrap();
        let oracle = FixedCells::default()
            .with(2, 0, CellContent::WALL)
            .with(3, 0, CellContent::WALL);

        let hit = r.wall_strip(&oracle, &ViewState::default(), 30, 6);
        assert_eq!(
            hit,
            WallHit {
                strip: 0,
                max_distance: 2
            },
            "first match wins even without pixels"
        );
    }

    #[test]
    fn content_is_compared_by_masked_equality() {
        let walls = table();
        let r = StripRenderer::new(&walls, &[]).unwrap();
        // lever bits live in the object nibble, the wall still matches
        let oracle = FixedCells::default().with(2, 0, CellContent::WALL | CellContent::LEVER_RIGHT);
        assert_eq!(r.wall_strip(&oracle, &ViewState::default(), 20, 0).max_distance, 2);

        // an item alone is not a wall
        let oracle = FixedCells::default().with(2, 0, CellContent::DOOR);
        assert_eq!(
            r.wall_strip(&oracle, &ViewState::default(), 20, 0),
            WallHit::NONE
        );
    }

    #[test]
    fn column_window_filters_before_lookup() {
        let walls = table();
        let r = StripRenderer::new(&walls, &[]).unwrap();
        let oracle = FixedCells::default()
            .with(2, 0, CellContent::WALL)
            .with(3, 0, CellContent::WALL);

        // column 60 is outside the first rule, falls through to the second
        let hit = r.wall_strip(&oracle, &ViewState::default(), 60, 4);
        assert_eq!(
            hit,
            WallHit {
                strip: 0xFF,
                max_distance: 3
            }
        );
    }

    #[test]
    fn mirrored_parity_is_symmetric() {
        let walls = [WallInfo {
            start_x: 0,
            end_x: 95,
            ..table()[0]
        }];
        let r = StripRenderer::new(&walls, &[]).unwrap();
        let oracle = FixedCells::default().with(2, 0, CellContent::WALL);
        let even = ViewState::new(4, 6, 0);
        let odd = ViewState::new(4, 7, 0);

        for y in 0..WINDOW_BANDS {
            for x in 0..WINDOW_SIZE_X {
                assert_eq!(
                    r.render_column_strip(&oracle, &even, x, y),
                    r.render_column_strip(&oracle, &odd, WINDOW_SIZE_X - 1 - x, y),
                    "column {x}, band {y}"
                );
            }
        }
    }

    #[test]
    fn no_match_defaults_to_farthest_distance() {
        let walls = table();
        let r = StripRenderer::new(&walls, &[]).unwrap();
        let hit = r.wall_strip(&FixedCells::default(), &ViewState::default(), 30, 0);
        assert_eq!(hit, WallHit::NONE);
        assert_eq!(hit.max_distance, MAX_VIEW_DISTANCE);
    }
}
