//! Grid dungeon used as the renderer's cell oracle.
//!
//! Map text format, one glyph per cell:
//!
//! ```text
//! ; comment lines start with a semicolon
//! #######
//! #^..C.#      ^ > v <  player start (facing north/east/south/west)
//! #.#.D.#      # wall   . floor   D door   B bars   F fountain   M monster
//! #L..F.#      C/c closed/open chest   L/R wall with lever (left/right)
//! #######
//! ```
//!
//! Anything outside the grid reads as solid wall.

use glam::{IVec2, ivec2};
use std::{fs, io, path::Path, str::FromStr};

use crate::{
    defs::{CellContent, by_glyph},
    renderer::{CellOracle, ViewState},
};

/// Compass facing; north is towards smaller map `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    North,
    East,
    South,
    West,
}

impl Facing {
    /// One map step straight ahead.
    #[inline]
    pub const fn forward(self) -> IVec2 {
        match self {
            Facing::North => ivec2(0, -1),
            Facing::East => ivec2(1, 0),
            Facing::South => ivec2(0, 1),
            Facing::West => ivec2(-1, 0),
        }
    }

    /// One map step to the player's right.
    #[inline]
    pub const fn right(self) -> IVec2 {
        let f = self.forward();
        ivec2(-f.y, f.x)
    }

    pub const fn turned_left(self) -> Self {
        match self {
            Facing::North => Facing::West,
            Facing::West => Facing::South,
            Facing::South => Facing::East,
            Facing::East => Facing::North,
        }
    }

    pub const fn turned_right(self) -> Self {
        match self {
            Facing::North => Facing::East,
            Facing::East => Facing::South,
            Facing::South => Facing::West,
            Facing::West => Facing::North,
        }
    }

    fn from_glyph(c: char) -> Option<Self> {
        match c {
            '^' => Some(Facing::North),
            '>' => Some(Facing::East),
            'v' => Some(Facing::South),
            '<' => Some(Facing::West),
            _ => None,
        }
    }
}

impl FromStr for Facing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "n" | "north" => Ok(Facing::North),
            "e" | "east" => Ok(Facing::East),
            "s" | "south" => Ok(Facing::South),
            "w" | "west" => Ok(Facing::West),
            _ => Err(format!("unknown facing `{s}` (expected north/east/south/west)")),
        }
    }
}

/// Player position and heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Pose {
    pub pos: IVec2,
    pub facing: Facing,
}

/// Things that can go wrong while loading a text map.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// Underlying I/O failure – propagated unchanged.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("map contains no rows")]
    Empty,

    #[error("line {line}: {found} cells, expected {expected}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}, column {column}: unknown glyph `{glyph}`")]
    UnknownGlyph {
        line: usize,
        column: usize,
        glyph: char,
    },

    #[error("no player start (^ > v <) in map")]
    MissingStart,

    #[error("line {line}, column {column}: second player start")]
    DuplicateStart { line: usize, column: usize },
}

/// What "use" turns an item into.
const USE_TRANSITIONS: &[(CellContent, CellContent)] = &[
    (CellContent::CHEST_CLOSED, CellContent::CHEST_OPEN),
    (CellContent::LEVER_LEFT, CellContent::LEVER_RIGHT),
    (CellContent::LEVER_RIGHT, CellContent::LEVER_LEFT),
];

#[derive(Clone, Debug)]
pub struct Dungeon {
    width: i32,
    height: i32,
    cells: Vec<CellContent>,
    pose: Pose,
    /// XOR pattern applied to the nearest object (0x00 or 0xFF).
    invert_effect: u8,
}

impl Dungeon {
    // ---------------------------------------------------------------------
    // Loading
    // ---------------------------------------------------------------------

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, MapError> {
        let text = fs::read_to_string(path.as_ref())?;
        let dungeon: Dungeon = text.parse()?;
        log::info!(
            "loaded {} ({}x{} cells)",
            path.as_ref().display(),
            dungeon.width,
            dungeon.height
        );
        Ok(dungeon)
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn invert_effect(&self) -> u8 {
        self.invert_effect
    }

    /// `pos` lies on the grid.
    pub fn contains(&self, pos: IVec2) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    /// Content at an absolute map position; outside the grid is wall.
    pub fn cell_at(&self, pos: IVec2) -> CellContent {
        if !self.contains(pos) {
            return CellContent::WALL;
        }
        self.cells[(pos.y * self.width + pos.x) as usize]
    }

    /// Content of the viewing cell `distance` steps ahead and `lateral`
    /// steps to the right (negative = left) of `pos` looking along `facing`.
    pub fn cell_raw(&self, pos: IVec2, distance: u8, lateral: i8, facing: Facing) -> CellContent {
        // saturate so a pose at the i32 edge still reads as outside wall
        let target = pos
            .saturating_add(facing.forward() * distance as i32)
            .saturating_add(facing.right() * lateral as i32);
        self.cell_at(target)
    }

    /// Per-frame state the strip renderer needs besides cell lookups.
    pub fn view_state(&self) -> ViewState {
        ViewState::new(self.pose.pos.x, self.pose.pos.y, self.invert_effect)
    }

    // ---------------------------------------------------------------------
    // Mutations
    // ---------------------------------------------------------------------

    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }

    pub fn set_cell(&mut self, pos: IVec2, content: CellContent) -> bool {
        if !self.contains(pos) {
            return false;
        }
        self.cells[(pos.y * self.width + pos.x) as usize] = content;
        true
    }

    pub fn turn_left(&mut self) {
        self.pose.facing = self.pose.facing.turned_left();
    }

    pub fn turn_right(&mut self) {
        self.pose.facing = self.pose.facing.turned_right();
    }

    /// Move one cell forward (`steps = 1`) or backward (`steps = -1`).
    /// Returns `false` and stays put if the target cell is occupied.
    pub fn step(&mut self, steps: i32) -> bool {
        let target = self.pose.pos.saturating_add(self.pose.facing.forward() * steps);
        if !self.cell_at(target).is_walkable() {
            return false;
        }
        self.pose.pos = target;
        true
    }

    /// Operate the cell straight ahead: open a closed chest or throw a
    /// lever.  Returns `false` if there is nothing to use.
    pub fn use_ahead(&mut self) -> bool {
        let target = self.pose.pos.saturating_add(self.pose.facing.forward());
        let cell = self.cell_at(target);
        let item = cell.object();
        let Some(&(_, used)) = USE_TRANSITIONS.iter().find(|(from, _)| *from == item) else {
            return false;
        };
        log::debug!("use {item:?} at {target} -> {used:?}");
        self.set_cell(target, cell.wall() | used)
    }

    /// Toggle the nearest-object flash.
    pub fn toggle_flash(&mut self) {
        self.invert_effect ^= 0xFF;
    }
}

impl CellOracle for Dungeon {
    #[inline]
    fn cell(&self, distance: u8, lateral: i8) -> CellContent {
        self.cell_raw(self.pose.pos, distance, lateral, self.pose.facing)
    }
}

impl FromStr for Dungeon {
    type Err = MapError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut width = 0usize;
        let mut rows = 0usize;
        let mut cells = Vec::new();
        let mut pose = None;

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim_end_matches('\r');
            // a row of spaces is floor, only a truly empty line is skipped
            if line.starts_with(';') || line.is_empty() {
                continue;
            }

            let count = line.chars().count();
            if rows == 0 {
                width = count;
            } else if count != width {
                return Err(MapError::Ragged {
                    line: line_no,
                    expected: width,
                    found: count,
                });
            }

            for (column, glyph) in line.chars().enumerate() {
                if let Some(facing) = Facing::from_glyph(glyph) {
                    if pose.is_some() {
                        return Err(MapError::DuplicateStart {
                            line: line_no,
                            column: column + 1,
                        });
                    }
                    pose = Some(Pose {
                        pos: ivec2(column as i32, rows as i32),
                        facing,
                    });
                    cells.push(CellContent::empty());
                    continue;
                }
                let content = by_glyph(glyph).ok_or(MapError::UnknownGlyph {
                    line: line_no,
                    column: column + 1,
                    glyph,
                })?;
                cells.push(content);
            }
            rows += 1;
        }

        if rows == 0 {
            return Err(MapError::Empty);
        }
        let pose = pose.ok_or(MapError::MissingStart)?;
        log::debug!("parsed map {width}x{rows}, start {:?}", pose);

        Ok(Self {
            width: width as i32,
            height: rows as i32,
            cells,
            pose,
            invert_effect: 0,
        })
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    const CORRIDOR: &str = "\
; a short corridor
#####
#.C.#
#.D.#
#.^.#
#####
";

    #[test]
    fn parses_cells_and_start() {
        let d: Dungeon = CORRIDOR.parse().unwrap();
        assert_eq!((d.width(), d.height()), (5, 5));
        assert_eq!(
            d.pose(),
            Pose {
                pos: ivec2(2, 3),
                facing: Facing::North
            }
        );
        assert_eq!(d.cell_at(ivec2(2, 1)), CellContent::CHEST_CLOSED);
        assert_eq!(d.cell_at(ivec2(2, 3)), CellContent::empty());
    }

    #[test]
    fn outside_is_wall() {
        let d: Dungeon = CORRIDOR.parse().unwrap();
        assert_eq!(d.cell_at(ivec2(-1, 0)), CellContent::WALL);
        assert_eq!(d.cell_at(ivec2(0, 99)), CellContent::WALL);
    }

    #[test]
    fn oracle_follows_facing() {
        let mut d: Dungeon = CORRIDOR.parse().unwrap();
        assert_eq!(d.cell(1, 0), CellContent::DOOR);
        assert_eq!(d.cell(2, 0), CellContent::CHEST_CLOSED);
        assert_eq!(d.cell(0, -1), CellContent::empty());
        assert_eq!(d.cell(0, -2), CellContent::WALL);

        d.turn_right(); // east
        assert_eq!(d.cell(1, 0), CellContent::empty());
        assert_eq!(d.cell(2, 0), CellContent::WALL);
        // right of east is south
        assert_eq!(d.cell(0, 1), CellContent::WALL);
        assert_eq!(d.cell(1, -1), CellContent::empty());
        assert_eq!(d.cell(1, -2), CellContent::empty());
    }

    #[test]
    fn facings_rotate_consistently() {
        for f in [Facing::North, Facing::East, Facing::South, Facing::West] {
            assert_eq!(f.turned_left().turned_right(), f);
            assert_eq!(f.turned_right().forward(), f.right());
        }
        assert_eq!("West".parse::<Facing>(), Ok(Facing::West));
        assert!("up".parse::<Facing>().is_err());
    }

    #[test]
    fn step_respects_occupied_cells() {
        let mut d: Dungeon = CORRIDOR.parse().unwrap();
        assert!(!d.step(1), "door blocks");
        d.turn_left(); // west
        assert!(d.step(1));
        assert_eq!(d.pose().pos, ivec2(1, 3));
        assert!(!d.step(1), "outer wall blocks");
        assert!(d.step(-1));
        assert_eq!(d.pose().pos, ivec2(2, 3));
    }

    #[test]
    fn use_opens_chests_and_throws_levers() {
        let mut d: Dungeon = "#R#\n#C#\n#.#\n#^#".parse().unwrap();
        assert!(!d.use_ahead(), "floor has nothing to use");
        assert!(d.step(1));
        assert!(d.use_ahead());
        assert_eq!(d.cell(1, 0), CellContent::CHEST_OPEN);
        assert!(!d.use_ahead(), "open chest stays open");

        d.set_cell(ivec2(1, 1), CellContent::empty());
        assert!(d.step(1));
        assert!(d.use_ahead());
        assert_eq!(d.cell(1, 0), CellContent::WALL | CellContent::LEVER_LEFT);
        assert!(!d.set_cell(ivec2(5, 5), CellContent::WALL));
    }

    #[test]
    fn pose_at_coordinate_limits_sees_wall() {
        let mut d: Dungeon = CORRIDOR.parse().unwrap();
        for pos in [ivec2(i32::MAX, i32::MAX), ivec2(i32::MIN, 1)] {
            d.set_pose(Pose {
                pos,
                facing: Facing::South,
            });
            assert_eq!(d.cell(3, 3), CellContent::WALL);
            assert_eq!(d.cell(3, -3), CellContent::WALL);
            assert!(!d.step(1));
            assert!(!d.contains(pos));
        }
    }

    #[test]
    fn blank_row_is_floor() {
        let d: Dungeon = "###\n#^#\n   \n###".parse().unwrap();
        assert_eq!(d.height(), 4);
        assert_eq!(d.cell_at(ivec2(1, 2)), CellContent::empty());
        assert_eq!(d.cell_at(ivec2(1, 3)), CellContent::WALL);
        // empty lines still separate nothing
        let d: Dungeon = "###\n\n#^#\n".parse().unwrap();
        assert_eq!(d.height(), 2);
    }

    #[test]
    fn view_state_tracks_parity_and_flash() {
        let mut d: Dungeon = CORRIDOR.parse().unwrap();
        // (2, 3) → odd
        assert!(d.view_state().mirrored);
        assert_eq!(d.view_state().invert_effect, 0);
        d.toggle_flash();
        assert_eq!(d.view_state().invert_effect, 0xFF);
        d.turn_left();
        d.step(1);
        assert!(!d.view_state().mirrored);
    }

    #[test]
    fn rejects_malformed_maps() {
        assert!(matches!("".parse::<Dungeon>(), Err(MapError::Empty)));
        assert!(matches!(
            "###\n#.#\n###".parse::<Dungeon>(),
            Err(MapError::MissingStart)
        ));
        assert!(matches!(
            "###\n#^^#\n###".parse::<Dungeon>(),
            Err(MapError::Ragged { line: 2, .. })
        ));
        assert!(matches!(
            "####\n#^v#\n####".parse::<Dungeon>(),
            Err(MapError::DuplicateStart { line: 2, column: 3 })
        ));
        assert!(matches!(
            "###\n#^x\n###".parse::<Dungeon>(),
            Err(MapError::UnknownGlyph { glyph: 'x', .. })
        ));
    }
}
