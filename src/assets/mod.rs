//! Bundled descriptor tables and the demo map.

mod objects;
mod walls;

pub use objects::OBJECTS;
pub use walls::WALLS;

/// Small maze exercising every object type, used when no map is given.
pub const DEMO_MAP: &str = include_str!("demo.map");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{defs::CellContent, world::Dungeon};

    #[test]
    fn demo_map_parses() {
        let dungeon: Dungeon = DEMO_MAP.parse().expect("demo map must parse");
        assert_eq!((dungeon.width(), dungeon.height()), (14, 12));
    }

    #[test]
    fn demo_map_shows_every_object() {
        let dungeon: Dungeon = DEMO_MAP.parse().expect("demo map must parse");
        for object in OBJECTS {
            let found = (0..dungeon.height()).any(|y| {
                (0..dungeon.width())
                    .any(|x| dungeon.cell_at(glam::ivec2(x, y)).object() == object.item)
            });
            assert!(found, "{:?} missing from demo map", object.item);
        }
        assert!(dungeon.cell_at(glam::ivec2(-1, 0)).contains(CellContent::WALL));
    }
}
