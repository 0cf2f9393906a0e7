//! Object descriptor table and the 1-bit images behind it.
//!
//! Every image row is 8 pixels high and stores the bitmap bytes first,
//! then the same number of mask bytes (set mask bit = background stays).

use crate::{defs::CellContent, world::ObjectInfo};

// door, 32x56, bitmap + mask per row
#[rustfmt::skip]
static DOOR_DATA: [u8; 448] = [
    0x00, 0x00, 0x00, 0x00, 0x80, 0x40, 0xa0, 0xa0, 0x10, 0xc0, 0xd0, 0xe8, 0x00, 0xe8, 0xec, 0xe6,
    0x0c, 0xea, 0xec, 0xe8, 0x00, 0xe8, 0xd0, 0xc0, 0x10, 0xa0, 0xa0, 0x40, 0x80, 0x00, 0x00, 0x00,
    0xff, 0xff, 0xff, 0x7f, 0x3f, 0x1f, 0x0f, 0x0f, 0x07, 0x07, 0x07, 0x03, 0x03, 0x03, 0x01, 0x00,
    0x01, 0x00, 0x01, 0x03, 0x03, 0x03, 0x07, 0x07, 0x07, 0x0f, 0x0f, 0x1f, 0x3f, 0x7f, 0xff, 0xff,
    0x00, 0x00, 0x00, 0xc5, 0x00, 0xd7, 0xc7, 0xef, 0x02, 0xff, 0xff, 0xff, 0x10, 0xff, 0xff, 0xff,
    0x01, 0xff, 0xff, 0xff, 0x80, 0xff, 0xff, 0xff, 0x00, 0xff, 0xff, 0xff, 0x00, 0xf7, 0x00, 0x00,
    0xff, 0xc7, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff,
    0x00, 0x00, 0x00, 0xb8, 0x00, 0xfa, 0xf8, 0xfd, 0x80, 0xff, 0xff, 0xff, 0x00, 0xff, 0xff, 0xff,
    0x10, 0xff, 0xff, 0xff, 0x00, 0xff, 0xff, 0xff, 0x04, 0xff, 0xff, 0xff, 0x00, 0xde, 0x01, 0x00,
    0xff, 0xf8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0xff,
    0x00, 0x00, 0x00, 0x7b, 0x00, 0xff, 0xff, 0xff, 0x00, 0xff, 0xff, 0xff, 0x08, 0xff, 0xff, 0xff,
    0x00, 0xff, 0xff, 0xff, 0x0f, 0xf9, 0xf9, 0xf9, 0x99, 0xe1, 0xe1, 0xff, 0x00, 0x7b, 0x80, 0x00,
    0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0xff,
    0x00, 0x00, 0x00, 0x37, 0x00, 0xbf, 0x3f, 0x7f, 0x04, 0xff, 0xff, 0xff, 0x00, 0xff, 0xff, 0xff,
    0x00, 0xff, 0xff, 0xff, 0x00, 0xff, 0xff, 0xff, 0x00, 0xff, 0xff, 0xff, 0x00, 0x77, 0x80, 0x00,
    0xff, 0x3f, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0xff,
    0x00, 0x00, 0x00, 0x46, 0x00, 0xd6, 0xc6, 0xef, 0x40, 0xff, 0xff, 0xff, 0x01, 0xff, 0xff, 0xff,
    0x10, 0xff, 0xff, 0xff, 0x01, 0xff, 0xff, 0xff, 0x08, 0xff, 0xff, 0xff, 0x00, 0x77, 0x00, 0x00,
    0xff, 0xc6, 0x82, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff,
    0x00, 0x00, 0x00, 0x07, 0x08, 0x0d, 0x0d, 0x0d, 0x0c, 0x0d, 0x01, 0x0d, 0x0c, 0x0d, 0x0d, 0x0d,
    0x00, 0x0d, 0x0d, 0x0d, 0x0e, 0x0d, 0x01, 0x0d, 0x0c, 0x0d, 0x0d, 0x0d, 0x08, 0x07, 0x00, 0x00,
    0xff, 0xff, 0xe0, 0xe0, 0xe0, 0xe0, 0xe0, 0xe0, 0xe0, 0xe0, 0xe0, 0xe0, 0xe0, 0xe0, 0xe0, 0xe0,
    0xe0, 0xe0, 0xe0, 0xe0, 0xe0, 0xe0, 0xe0, 0xe0, 0xe0, 0xe0, 0xe0, 0xe0, 0xe0, 0xe0, 0xe0, 0xff,
];

// bars, 28x48, bitmap + mask per row
#[rustfmt::skip]
static BARS_DATA: [u8; 336] = [
    0x00, 0xfe, 0xfe, 0x00, 0x00, 0x00, 0x00, 0xfe, 0xfe, 0x00, 0x00, 0x00, 0x00, 0xfe, 0xfe, 0x00,
    0x00, 0x00, 0x00, 0xfe, 0xfe, 0x00, 0x00, 0x00, 0x00, 0xfe, 0xfe, 0x00, 0x01, 0x00, 0x00, 0x01,
    0x7f, 0x7f, 0x01, 0x00, 0x00, 0x01, 0x7f, 0x7f, 0x01, 0x00, 0x00, 0x01, 0x7f, 0x7f, 0x01, 0x00,
    0x00, 0x01, 0x7f, 0x7f, 0x01, 0x00, 0x00, 0x01, 0x00, 0xff, 0xff, 0x03, 0x03, 0x03, 0x03, 0xff,
    0xff, 0x03, 0x03, 0x03, 0x03, 0xff, 0xff, 0x03, 0x03, 0x03, 0x03, 0xff, 0xff, 0x03, 0x03, 0x03,
    0x03, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0x00, 0xf8, 0xf8, 0x00, 0x00, 0x00, 0x00, 0xf8, 0xf8,
    0x00, 0x00, 0x00, 0x00, 0xf8, 0xf8, 0x00, 0x00, 0x00, 0x00, 0xf8, 0xf8, 0x00, 0x00, 0x00, 0x00,
    0x00, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0x00,
    0x00, 0x00, 0x00, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0x00, 0x00,
    0x00, 0x00, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0xff,
    0xff, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0x00, 0x00, 0x00,
    0x00, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff,
    0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00,
    0x00, 0xff, 0xff, 0x80, 0x80, 0x80, 0x80, 0xff, 0xff, 0x80, 0x80, 0x80, 0x80, 0xff, 0xff, 0x80,
    0x80, 0x80, 0x80, 0xff, 0xff, 0x80, 0x80, 0x80, 0x80, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3f, 0x3f, 0x00, 0x00, 0x00, 0x00, 0x3f, 0x3f, 0x00, 0x00, 0x00, 0x00, 0x3f, 0x3f, 0x00, 0x00,
    0x00, 0x00, 0x3f, 0x3f, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3f, 0x3f, 0x01, 0x01, 0x01, 0x01, 0x3f,
    0x3f, 0x01, 0x01, 0x01, 0x01, 0x3f, 0x3f, 0x01, 0x01, 0x01, 0x01, 0x3f, 0x3f, 0x01, 0x01, 0x01,
    0x01, 0x3f, 0x3f, 0x00, 0xc0, 0x80, 0x80, 0xc0, 0xfc, 0xfc, 0xc0, 0x80, 0x80, 0xc0, 0xfc, 0xfc,
    0xc0, 0x80, 0x80, 0xc0, 0xfc, 0xfc, 0xc0, 0x80, 0x80, 0xc0, 0xfc, 0xfc, 0xc0, 0x80, 0x80, 0xc0,
];

// lever pulled left, 16x8, bitmap + mask per row
#[rustfmt::skip]
static LEVER_LEFT_DATA: [u8; 32] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3c, 0x3c, 0x3c, 0x3c, 0x3c, 0x3c, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

// lever pulled right, 16x8, bitmap + mask per row
#[rustfmt::skip]
static LEVER_RIGHT_DATA: [u8; 32] = [
    0x00, 0x00, 0x3c, 0x3c, 0x3c, 0x3c, 0x3c, 0x3c, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

// closed chest, 24x24, bitmap + mask per row
#[rustfmt::skip]
static CHEST_CLOSED_DATA: [u8; 144] = [
    0x00, 0x00, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80,
    0x80, 0x80, 0x80, 0x80, 0x80, 0x00, 0x00, 0x00, 0xff, 0x7f, 0x3f, 0x3f, 0x3f, 0x3f, 0x3f, 0x3f,
    0x3f, 0x3f, 0x3f, 0x3f, 0x3f, 0x3f, 0x3f, 0x3f, 0x3f, 0x3f, 0x3f, 0x3f, 0x3f, 0x7f, 0xff, 0xff,
    0x00, 0x77, 0x56, 0x76, 0x76, 0x76, 0x76, 0x76, 0x76, 0x86, 0x06, 0x66, 0x06, 0x86, 0x76, 0x76,
    0x76, 0x76, 0x76, 0x76, 0x56, 0x77, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff,
    0x00, 0x77, 0x55, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x76, 0x76, 0x76, 0x77, 0x77, 0x77,
    0x77, 0x77, 0x77, 0x77, 0x55, 0x77, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff,
];

// open chest, 24x24, bitmap + mask per row
#[rustfmt::skip]
static CHEST_OPEN_DATA: [u8; 144] = [
    0x00, 0x00, 0x00, 0xfe, 0xb6, 0xb6, 0xb6, 0xb6, 0xb6, 0xb6, 0xb6, 0xb6, 0xb6, 0xb6, 0xb6, 0xb6,
    0xb6, 0xb6, 0xb6, 0xfe, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff,
    0x00, 0x70, 0x50, 0x75, 0x71, 0x75, 0x71, 0x75, 0x71, 0x75, 0xf1, 0x35, 0x31, 0xf5, 0x71, 0x75,
    0x71, 0x75, 0x71, 0x75, 0x50, 0x70, 0x00, 0x00, 0x07, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x07, 0xff,
    0x00, 0x77, 0x55, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x76, 0x76, 0x77, 0x77, 0x77,
    0x77, 0x77, 0x77, 0x77, 0x55, 0x77, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff,
];

// fountain, 12x24, bitmap + mask per row
#[rustfmt::skip]
static FOUNTAIN_DATA: [u8; 72] = [
    0x00, 0x00, 0x60, 0x10, 0x30, 0x24, 0xfc, 0x24, 0x30, 0x10, 0x60, 0x00, 0xff, 0x9f, 0x0f, 0x87,
    0x83, 0x01, 0x01, 0x01, 0x83, 0x87, 0x0f, 0x9f, 0x00, 0x00, 0x0c, 0x34, 0x6a, 0xe8, 0x0f, 0xe8,
    0x6a, 0x34, 0x0c, 0x00, 0xff, 0xf3, 0xc1, 0x81, 0x00, 0x00, 0x00, 0x00, 0x00, 0x81, 0xc1, 0xf3,
    0x00, 0x00, 0x00, 0x10, 0x38, 0x2f, 0x20, 0x2f, 0x38, 0x10, 0x00, 0x00, 0xff, 0xff, 0xef, 0xc7,
    0x80, 0x80, 0x80, 0x80, 0x80, 0xc7, 0xef, 0xff,
];
const WATCHER_SIZE: usize = 32;

/// Floating eye orb, generated: ring outline, lidded eye, dark pupil.
const fn watcher() -> [u8; 4 * 2 * WATCHER_SIZE] {
    let mut out = [0u8; 4 * 2 * WATCHER_SIZE];
    let mut row = 0;
    while row < 4 {
        let mut x = 0;
        while x < WATCHER_SIZE {
            let mut bit = 0;
            while bit < 8 {
                // doubled coordinates put the centre between pixels 15 and 16
                let dx = 2 * x as i32 - 31;
                let dy = 2 * (row * 8 + bit) as i32 - 31;
                let r2 = dx * dx + dy * dy;

                let body = r2 <= 30 * 30;
                let rim = body && r2 >= 26 * 26;
                let ey = dy + 6;
                let eye = dx * dx + 4 * ey * ey <= 18 * 18;
                let pupil = dx * dx + ey * ey <= 5 * 5;

                let idx = row * 2 * WATCHER_SIZE + x;
                if rim || (eye && !pupil) {
                    out[idx] |= 1 << bit;
                }
                if !body {
                    out[idx + WATCHER_SIZE] |= 1 << bit;
                }
                bit += 1;
            }
            x += 1;
        }
        row += 1;
    }
    out
}

static WATCHER_DATA: [u8; 4 * 2 * WATCHER_SIZE] = watcher();

pub static OBJECTS: &[ObjectInfo] = &[
    ObjectInfo {
        item: CellContent::DOOR,
        width: 32,
        vertical_offset: 8,
        height: 56,
        thresholds: [1, 2, 5],
        stride: 64,
        data: &DOOR_DATA,
    },
    ObjectInfo {
        item: CellContent::BARS,
        width: 28,
        vertical_offset: 8,
        height: 48,
        thresholds: [1, 2, 3],
        stride: 56,
        data: &BARS_DATA,
    },
    ObjectInfo {
        item: CellContent::LEVER_LEFT,
        width: 16,
        vertical_offset: 24,
        height: 8,
        thresholds: [1, 2, 3],
        stride: 32,
        data: &LEVER_LEFT_DATA,
    },
    ObjectInfo {
        item: CellContent::LEVER_RIGHT,
        width: 16,
        vertical_offset: 24,
        height: 8,
        thresholds: [1, 2, 3],
        stride: 32,
        data: &LEVER_RIGHT_DATA,
    },
    ObjectInfo {
        item: CellContent::CHEST_CLOSED,
        width: 24,
        vertical_offset: 40,
        height: 24,
        thresholds: [1, 2, 4],
        stride: 48,
        data: &CHEST_CLOSED_DATA,
    },
    ObjectInfo {
        item: CellContent::CHEST_OPEN,
        width: 24,
        vertical_offset: 40,
        height: 24,
        thresholds: [1, 2, 4],
        stride: 48,
        data: &CHEST_OPEN_DATA,
    },
    ObjectInfo {
        item: CellContent::FOUNTAIN,
        width: 12,
        vertical_offset: 40,
        height: 24,
        thresholds: [1, 2, 4],
        stride: 24,
        data: &FOUNTAIN_DATA,
    },
    ObjectInfo {
        item: CellContent::MONSTER,
        width: WATCHER_SIZE as u8,
        vertical_offset: 16,
        height: WATCHER_SIZE as u8,
        thresholds: [1, 2, 4],
        stride: 2 * WATCHER_SIZE as u16,
        data: &WATCHER_DATA,
    },
];
