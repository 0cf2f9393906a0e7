//! Threshold box-filter downscaler for 1-bit object images.
//!
//! One output byte = 8 vertically stacked pixels.  At distance `d` every
//! output pixel folds a `scale × scale` window of source pixels
//! (`scale = SCALE_FROM_DISTANCE[d]`); it is lit when the number of set
//! source bits reaches the object's threshold for that distance.  A fixed
//! number of "on" bits therefore always yields the same target density,
//! which reads better on a 1-bit panel than a true area average.

use crate::{
    defs::{
        BIT_MASK_FROM_SCALE, MAX_VIEW_DISTANCE, NIBBLE_BIT_COUNT, SCALE_FROM_DISTANCE,
        VERTICAL_END, VERTICAL_START,
    },
    world::{ObjectInfo, Plane},
};

/// Downscaled strip of `object` at row band `y` (unscaled screen band).
///
/// `x` is the column inside the object's on-screen footprint, i.e. already
/// divided by the distance's scale.  Supported distances are `1..=3`.
pub fn downscaled_strip(object: &ObjectInfo, x: u8, y: u8, distance: u8, plane: Plane) -> u8 {
    debug_assert!(
        (1..=MAX_VIEW_DISTANCE).contains(&distance),
        "distance {distance} has no scale factor"
    );
    let d = distance as usize;
    let scale = SCALE_FROM_DISTANCE[d] as usize;

    let (first_band, last_band) = (VERTICAL_START[d], VERTICAL_END[d]);
    if y < first_band || y > last_band {
        return plane.outside();
    }

    // from here on x is in source pixels, y in bands of the object frame
    let x = x as usize * scale;
    let y = (y - first_band) as usize;
    debug_assert!(
        x + scale <= object.width as usize,
        "column {x} + {scale} leaves the {} pixel wide image",
        object.width
    );

    let threshold = object.thresholds[d - 1];
    let bit_mask = BIT_MASK_FROM_SCALE[scale];
    let base = match plane {
        Plane::Bitmap => 0,
        Plane::Mask => object.width as usize,
    };
    let stride = object.stride as usize;
    let first_bit = object.vertical_offset as usize;
    let end_bit = first_bit + object.height as usize;

    let mut pixels = 0u8;
    let mut bit_no = y * 8 * scale;

    for out_bit in 0..8 {
        let mut coverage = 0u8;

        if (first_bit..end_bit).contains(&bit_no) {
            let row = (bit_no - first_bit) / 8;
            let start = base + row * stride + x;
            // a sample window never straddles two source rows
            for &byte in &object.data[start..start + scale] {
                coverage += NIBBLE_BIT_COUNT[((byte >> (bit_no & 0x07)) & bit_mask) as usize];
            }
        } else if plane == Plane::Mask {
            // no source rows here: keep the background
            coverage += (scale * scale) as u8;
        }

        if coverage >= threshold {
            pixels |= 1 << out_bit;
        }
        bit_no += scale;
    }

    pixels
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assets::OBJECTS, defs::CellContent};

    fn leak(data: Vec<u8>) -> &'static [u8] {
        Box::leak(data.into_boxed_slice())
    }

    /// 8 px wide, full 64 px high object; every row gets `bitmap`/`mask`.
    fn uniform(bitmap: u8, mask: u8, thresholds: [u8; 3]) -> ObjectInfo {
        let mut data = Vec::new();
        for _ in 0..8 {
            data.extend([bitmap; 8]);
            data.extend([mask; 8]);
        }
        ObjectInfo {
            item: CellContent::MONSTER,
            width: 8,
            vertical_offset: 0,
            height: 64,
            thresholds,
            stride: 16,
            data: leak(data),
        }
    }

    /// xorshift noise so the threshold sweep sees varied windows
    fn noisy(thresholds: [u8; 3]) -> ObjectInfo {
        let mut state = 0x2545_F491u32;
        let data = (0..8 * 32)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                state as u8
            })
            .collect();
        ObjectInfo {
            item: CellContent::MONSTER,
            width: 16,
            vertical_offset: 0,
            height: 64,
            thresholds,
            stride: 32,
            data: leak(data),
        }
    }

    fn footprint(object: &ObjectInfo, distance: u8) -> u8 {
        2 * (object.width >> distance)
    }

    #[test]
    fn outside_vertical_window_uses_plane_policy() {
        let mut objects: Vec<ObjectInfo> = OBJECTS.to_vec();
        objects.push(uniform(0xFF, 0x00, [1, 1, 1]));

        for object in &objects {
            for distance in 1..=MAX_VIEW_DISTANCE {
                let d = distance as usize;
                for y in (0..8u8).filter(|&y| y < VERTICAL_START[d] || y > VERTICAL_END[d]) {
                    for x in 0..footprint(object, distance) {
                        assert_eq!(downscaled_strip(object, x, y, distance, Plane::Bitmap), 0x00);
                        assert_eq!(downscaled_strip(object, x, y, distance, Plane::Mask), 0xFF);
                    }
                }
            }
        }
    }

    #[test]
    fn nearest_distance_copies_source_bytes() {
        let obj = noisy([1, 2, 4]);
        for y in 0..8u8 {
            for x in 0..obj.width {
                let row = y as usize * obj.stride as usize;
                assert_eq!(
                    downscaled_strip(&obj, x, y, 1, Plane::Bitmap),
                    obj.data[row + x as usize]
                );
                assert_eq!(
                    downscaled_strip(&obj, x, y, 1, Plane::Mask),
                    obj.data[row + obj.width as usize + x as usize]
                );
            }
        }
    }

    #[test]
    fn half_distance_counts_two_by_two_windows() {
        // rows alternate 0b01 pairs: every 2x2 window holds exactly 2 bits
        let obj = uniform(0b0101_0101, 0xFF, [1, 2, 4]);
        // distance 2 frame starts at band 2
        assert_eq!(downscaled_strip(&obj, 0, 2, 2, Plane::Bitmap), 0xFF);

        let strict = ObjectInfo {
            thresholds: [1, 3, 4],
            ..obj
        };
        assert_eq!(downscaled_strip(&strict, 0, 2, 2, Plane::Bitmap), 0x00);
    }

    #[test]
    fn threshold_ties_light_the_pixel() {
        // a 4x4 window of 0b0000_0011 columns has 8 bits set
        let obj = uniform(0b0011_0011, 0x00, [1, 2, 8]);
        assert_eq!(downscaled_strip(&obj, 0, 3, 3, Plane::Bitmap), 0xFF);
        let obj = ObjectInfo {
            thresholds: [1, 2, 9],
            ..obj
        };
        assert_eq!(downscaled_strip(&obj, 0, 3, 3, Plane::Bitmap), 0x00);
    }

    #[test]
    fn raising_threshold_never_lights_a_pixel() {
        for t in 0..17u8 {
            let lo = noisy([t, t, t]);
            let hi = ObjectInfo {
                thresholds: [t + 1; 3],
                ..lo
            };
            for distance in 1..=MAX_VIEW_DISTANCE {
                for y in 0..8u8 {
                    for x in 0..footprint(&lo, distance) {
                        for plane in [Plane::Bitmap, Plane::Mask] {
                            let a = downscaled_strip(&lo, x, y, distance, plane);
                            let b = downscaled_strip(&hi, x, y, distance, plane);
                            assert_eq!(b & !a, 0, "t={t} d={distance} x={x} y={y} {plane:?}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn mask_outside_object_rows_stays_transparent() {
        // 16 px high object at bits 24..40, fully opaque mask
        let data = leak([[0xFFu8; 8], [0x00; 8]].concat().repeat(2));
        let obj = ObjectInfo {
            item: CellContent::CHEST_OPEN,
            width: 8,
            vertical_offset: 24,
            height: 16,
            thresholds: [1, 2, 4],
            stride: 16,
            data,
        };

        // distance 1: bands 3 and 4 are the object, others untouched
        for y in 0..8u8 {
            let inside = y == 3 || y == 4;
            let mask = downscaled_strip(&obj, 0, y, 1, Plane::Mask);
            let bitmap = downscaled_strip(&obj, 0, y, 1, Plane::Bitmap);
            assert_eq!(mask, if inside { 0x00 } else { 0xFF }, "band {y}");
            assert_eq!(bitmap, if inside { 0xFF } else { 0x00 }, "band {y}");
        }

        // distance 2, band 3 covers source bits 16..32: upper half outside
        assert_eq!(downscaled_strip(&obj, 0, 3, 2, Plane::Mask), 0x0F);
        assert_eq!(downscaled_strip(&obj, 0, 3, 2, Plane::Bitmap), 0xF0);
    }
}
