//! Field-of-view snapshot.
//!
//! Captures every viewing cell the wall table can ask for once per frame,
//! so the per-strip lookups become two array reads instead of a position
//! recompute through the map.

use crate::{
    defs::{CellContent, MAX_VIEW_DISTANCE},
    renderer::CellOracle,
};

/// Largest lateral offset kept in the snapshot (either side).
pub const FOV_LATERAL: i8 = 3;

const DEPTHS: usize = MAX_VIEW_DISTANCE as usize + 1;
const LANES: usize = 2 * FOV_LATERAL as usize + 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldOfView {
    cells: [[CellContent; LANES]; DEPTHS],
}

impl FieldOfView {
    /// Query `source` for distances `0..=MAX_VIEW_DISTANCE` and laterals
    /// `-FOV_LATERAL..=FOV_LATERAL`.
    pub fn capture<O: CellOracle + ?Sized>(source: &O) -> Self {
        let mut cells = [[CellContent::empty(); LANES]; DEPTHS];
        for (distance, lanes) in cells.iter_mut().enumerate() {
            for (lane, cell) in lanes.iter_mut().enumerate() {
                let lateral = lane as i8 - FOV_LATERAL;
                *cell = source.cell(distance as u8, lateral);
            }
        }
        log::trace!("captured field of view {:?}", cells);
        Self { cells }
    }
}

impl CellOracle for FieldOfView {
    /// Panics on a cell outside the captured window.
    #[inline]
    fn cell(&self, distance: u8, lateral: i8) -> CellContent {
        debug_assert!(
            lateral.abs() <= FOV_LATERAL,
            "lateral offset {lateral} outside field of view"
        );
        self.cells[distance as usize][(lateral + FOV_LATERAL) as usize]
    }
}
