//! Wall descriptor table.
//!
//! Bitmaps are drawn at compile time from the view geometry: the window
//! looks down a corridor whose cell faces shrink by half per step.  A face
//! and its mirror partner on the other side of the centre line share one
//! bitmap, the partner drawn with the other brick phase, so reading the
//! image mirrored on odd cells shows the alternate pattern.

use crate::{
    defs::{CellContent, WINDOW_CENTER_X, WINDOW_SIZE_X, WINDOW_SIZE_Y},
    world::WallInfo,
};

const W: i32 = WINDOW_SIZE_X as i32;
const CX: i32 = WINDOW_CENTER_X as i32;
const CY: i32 = WINDOW_SIZE_Y as i32 / 2;

/// Half size of the cell boundary planes, nearest first.
const PLANE: [i32; 5] = [64, 32, 16, 8, 4];

#[derive(Clone, Copy)]
enum Face {
    /// The face looking back at the player.
    Front,
    /// The face towards the corridor centre.
    Side,
}

/// Pixel of the front face of the cell `distance` ahead, `lateral` (≤ 0)
/// cells to the left.
const fn front_lit(distance: usize, lateral: i32, x: i32, y: i32, phase: i32) -> bool {
    let half = PLANE[distance];
    let size = 2 * half;
    let rx = x - (CX + (2 * lateral - 1) * half);
    let ry = y - (CY - half);
    if rx < 0 || rx >= size || ry < 0 || ry >= size {
        return false;
    }
    if rx == 0 || rx == size - 1 || ry == 0 || ry == size - 1 {
        return true;
    }
    // too small for bricks
    if size < 16 {
        return false;
    }
    let course = size / 4;
    if ry % course == 0 {
        return true;
    }
    let brick = size / 2;
    let shift = size / 8 + if (ry / course + phase) % 2 == 1 { brick / 2 } else { 0 };
    (rx - shift).rem_euclid(brick) == 0
}

/// Pixel of the side face of the cell `distance` ahead, `lateral` (< 0)
/// cells to the left.
const fn side_lit(distance: usize, lateral: i32, x: i32, y: i32, phase: i32) -> bool {
    let m = -(2 * lateral + 1);
    let near = CX - m * PLANE[distance];
    let far = CX - m * PLANE[distance + 1];
    if x < near || x >= far {
        return false;
    }
    let h = (CX - x) / m;
    let top = CY - h;
    let bottom = CY + h - 1;
    if y < top || y > bottom {
        return false;
    }
    if y == top || y == bottom || x == near || x == far - 1 {
        return true;
    }
    if PLANE[distance] < 16 {
        return false;
    }
    // mortar courses follow the perspective
    let rel = y - top;
    if rel == h / 2 || rel == h || rel == 3 * h / 2 {
        return true;
    }
    let joint = far - (far - near) / 3;
    x == joint && (2 * rel / h + phase) % 2 == 0
}

const fn lit(face: Face, distance: usize, lateral: i32, x: i32, y: i32, phase: i32) -> bool {
    match face {
        Face::Front => front_lit(distance, lateral, x, y, phase),
        Face::Side => side_lit(distance, lateral, x, y, phase),
    }
}

/// Full-width bitmap for the faces `±lateral` (or the centre face when
/// `lateral == 0`), covering `N / 96` bands from `first_band`.
const fn layer<const N: usize>(face: Face, distance: usize, lateral: i32, first_band: usize) -> [u8; N] {
    let mut out = [0u8; N];
    let bands = N / WINDOW_SIZE_X as usize;
    let mut band = 0;
    while band < bands {
        let mut x = 0;
        while x < W {
            let mut bit = 0;
            while bit < 8 {
                let y = ((first_band + band) * 8 + bit) as i32;
                let on = if lateral == 0 {
                    lit(face, distance, 0, x, y, 0)
                } else {
                    lit(face, distance, -lateral, x, y, 0)
                        || lit(face, distance, -lateral, W - 1 - x, y, 1)
                };
                if on {
                    out[band * WINDOW_SIZE_X as usize + x as usize] |= 1 << bit;
                }
                bit += 1;
            }
            x += 1;
        }
        band += 1;
    }
    out
}

const FULL: usize = 8 * WINDOW_SIZE_X as usize;
const HALF: usize = 4 * WINDOW_SIZE_X as usize;
const QUARTER: usize = 2 * WINDOW_SIZE_X as usize;

static SIDE_0: [u8; FULL] = layer(Face::Side, 0, 1, 0);
static FRONT_1: [u8; FULL] = layer(Face::Front, 1, 0, 0);
static FRONT_1_SIDE: [u8; FULL] = layer(Face::Front, 1, 1, 0);
static SIDE_1: [u8; FULL] = layer(Face::Side, 1, 1, 0);
static FRONT_2: [u8; HALF] = layer(Face::Front, 2, 0, 2);
static FRONT_2_SIDE: [u8; HALF] = layer(Face::Front, 2, 1, 2);
static SIDE_2: [u8; HALF] = layer(Face::Side, 2, 1, 2);
static SIDE_2_OUTER: [u8; HALF] = layer(Face::Side, 2, 2, 2);
static FRONT_3: [u8; QUARTER] = layer(Face::Front, 3, 0, 3);
static FRONT_3_SIDE: [u8; QUARTER] = layer(Face::Front, 3, 1, 3);
static FRONT_3_OUTER: [u8; QUARTER] = layer(Face::Front, 3, 2, 3);
static FRONT_3_FAR: [u8; QUARTER] = layer(Face::Front, 3, 3, 3);
static SIDE_3: [u8; QUARTER] = layer(Face::Side, 3, 1, 3);
static SIDE_3_OUTER: [u8; QUARTER] = layer(Face::Side, 3, 2, 3);

const fn wall(
    (start_x, end_x): (u8, u8),
    (start_y, end_y): (u8, u8),
    distance: u8,
    lateral: i8,
    bitmap: &'static [u8],
) -> WallInfo {
    WallInfo {
        start_x,
        end_x,
        start_y,
        end_y,
        distance,
        lateral,
        content: CellContent::WALL,
        bitmap,
    }
}

/// Nearest first: the first rule that matches a column hides the rest.
pub static WALLS: &[WallInfo] = &[
    // own row, left and right
    wall((0, 15), (0, 7), 0, -1, &SIDE_0),
    wall((80, 95), (0, 7), 0, 1, &SIDE_0),
    // one step ahead
    wall((16, 79), (0, 7), 1, 0, &FRONT_1),
    wall((0, 15), (0, 7), 1, -1, &FRONT_1_SIDE),
    wall((80, 95), (0, 7), 1, 1, &FRONT_1_SIDE),
    wall((16, 31), (0, 7), 1, -1, &SIDE_1),
    wall((64, 79), (0, 7), 1, 1, &SIDE_1),
    // two steps ahead
    wall((32, 63), (2, 5), 2, 0, &FRONT_2),
    wall((0, 31), (2, 5), 2, -1, &FRONT_2_SIDE),
    wall((64, 95), (2, 5), 2, 1, &FRONT_2_SIDE),
    wall((32, 39), (2, 5), 2, -1, &SIDE_2),
    wall((56, 63), (2, 5), 2, 1, &SIDE_2),
    wall((0, 23), (2, 5), 2, -2, &SIDE_2_OUTER),
    wall((72, 95), (2, 5), 2, 2, &SIDE_2_OUTER),
    // three steps ahead
    wall((40, 55), (3, 4), 3, 0, &FRONT_3),
    wall((24, 39), (3, 4), 3, -1, &FRONT_3_SIDE),
    wall((56, 71), (3, 4), 3, 1, &FRONT_3_SIDE),
    wall((8, 23), (3, 4), 3, -2, &FRONT_3_OUTER),
    wall((72, 87), (3, 4), 3, 2, &FRONT_3_OUTER),
    wall((0, 7), (3, 4), 3, -3, &FRONT_3_FAR),
    wall((88, 95), (3, 4), 3, 3, &FRONT_3_FAR),
    wall((40, 43), (3, 4), 3, -1, &SIDE_3),
    wall((52, 55), (3, 4), 3, 1, &SIDE_3),
    wall((24, 35), (3, 4), 3, -2, &SIDE_3_OUTER),
    wall((60, 71), (3, 4), 3, 2, &SIDE_3_OUTER),
];

/*──────────────────────────────── Tests ───────────────────────────────*/
