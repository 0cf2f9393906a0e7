use bitflags::bitflags;
use once_cell::sync::Lazy;
use std::{collections::HashMap, fmt};

bitflags! {
    /// What occupies one map cell, as seen by the renderer.
    ///
    /// The lower nibble carries the wall type, the upper nibble the item
    /// type.  Both are *values*, not independent flags: compare them with
    /// [`CellContent::wall`] / [`CellContent::object`], never with
    /// `contains`.
    #[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CellContent: u8 {
        const WALL         = 0x01;
        const WALL_MASK    = 0x0F;

        const DOOR         = 0x10;
        const BARS         = 0x20;
        const LEVER_LEFT   = 0x30;
        const LEVER_RIGHT  = 0x40;
        const CHEST_CLOSED = 0x50;
        const CHEST_OPEN   = 0x60;
        const FOUNTAIN     = 0x70;
        const MONSTER      = 0x80;
        const OBJECT_MASK  = 0xF0;
    }
}

impl CellContent {
    /// Wall-type bits only.
    #[inline]
    pub const fn wall(self) -> Self {
        self.intersection(Self::WALL_MASK)
    }

    /// Item-type bits only.
    #[inline]
    pub const fn object(self) -> Self {
        self.intersection(Self::OBJECT_MASK)
    }

    /// Neither wall nor item: the player may step here.
    #[inline]
    pub const fn is_walkable(self) -> bool {
        self.is_empty()
    }

    /// Map glyph for this content (`?` if no glyph describes it).
    pub fn glyph(self) -> char {
        BY_GLYPH
            .iter()
            .find(|&(_, &content)| content == self)
            .map(|(&c, _)| c)
            .unwrap_or('?')
    }
}

/// Printable names of the item values in the upper nibble.
const ITEM_NAMES: &[(CellContent, &str)] = &[
    (CellContent::DOOR, "DOOR"),
    (CellContent::BARS, "BARS"),
    (CellContent::LEVER_LEFT, "LEVER_LEFT"),
    (CellContent::LEVER_RIGHT, "LEVER_RIGHT"),
    (CellContent::CHEST_CLOSED, "CHEST_CLOSED"),
    (CellContent::CHEST_OPEN, "CHEST_OPEN"),
    (CellContent::FOUNTAIN, "FOUNTAIN"),
    (CellContent::MONSTER, "MONSTER"),
];

/// Prints the wall and item *values*, e.g. `CellContent(WALL | LEVER_LEFT)`.
impl fmt::Debug for CellContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CellContent(")?;
        let wall = self.wall();
        let item = self.object();
        if self.is_empty() {
            f.write_str("EMPTY")?;
        }
        if wall == Self::WALL {
            f.write_str("WALL")?;
        } else if !wall.is_empty() {
            write!(f, "WALL_TYPE_{:#x}", wall.bits())?;
        }
        if !item.is_empty() {
            if !wall.is_empty() {
                f.write_str(" | ")?;
            }
            match ITEM_NAMES.iter().find(|&&(value, _)| value == item) {
                Some((_, name)) => f.write_str(name)?,
                None => write!(f, "ITEM_{:#04x}", item.bits())?,
            }
        }
        f.write_str(")")
    }
}

/// Text-map glyphs.  Player start markers (`^ > v <`) are handled by the
/// map parser because they also carry a facing.
const GLYPHS: &[(char, CellContent)] = &[
    ('.', CellContent::empty()),
    ('#', CellContent::WALL),
    ('D', CellContent::DOOR),
    ('B', CellContent::BARS),
    ('L', CellContent::WALL.union(CellContent::LEVER_LEFT)),
    ('R', CellContent::WALL.union(CellContent::LEVER_RIGHT)),
    ('C', CellContent::CHEST_CLOSED),
    ('c', CellContent::CHEST_OPEN),
    ('F', CellContent::FOUNTAIN),
    ('M', CellContent::MONSTER),
];

static BY_GLYPH: Lazy<HashMap<char, CellContent>> =
    Lazy::new(|| GLYPHS.iter().copied().collect());

pub fn by_glyph(c: char) -> Option<CellContent> {
    // a blank is floor too, editors like to pad lines with it
    if c == ' ' {
        return Some(CellContent::empty());
    }
    BY_GLYPH.get(&c).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_and_object_split_the_byte() {
        let cell = CellContent::WALL | CellContent::LEVER_LEFT;
        assert_eq!(cell.wall(), CellContent::WALL);
        assert_eq!(cell.object(), CellContent::LEVER_LEFT);
        assert_eq!(CellContent::WALL_MASK.bits() & CellContent::OBJECT_MASK.bits(), 0);
    }

    #[test]
    fn item_types_are_compared_by_value() {
        // 0x70 "contains" the bits of 0x30, but it is a different item
        let fountain = CellContent::FOUNTAIN;
        assert_ne!(fountain.object(), CellContent::LEVER_LEFT);
        assert!(fountain.contains(CellContent::LEVER_LEFT));
    }

    #[test]
    fn debug_names_item_values() {
        assert_eq!(format!("{:?}", CellContent::FOUNTAIN), "CellContent(FOUNTAIN)");
        assert_eq!(format!("{:?}", CellContent::CHEST_OPEN), "CellContent(CHEST_OPEN)");
        assert_eq!(
            format!("{:?}", CellContent::WALL | CellContent::LEVER_LEFT),
            "CellContent(WALL | LEVER_LEFT)"
        );
        assert_eq!(format!("{:?}", CellContent::empty()), "CellContent(EMPTY)");
        assert_eq!(format!("{:?}", CellContent::OBJECT_MASK), "CellContent(ITEM_0xf0)");
        for &(item, name) in ITEM_NAMES {
            assert!(format!("{item:?}").contains(name));
        }
    }

    #[test]
    fn glyphs_round_trip() {
        for &(c, content) in GLYPHS {
            assert_eq!(by_glyph(c), Some(content));
            assert_eq!(content.glyph(), c);
        }
        assert_eq!(by_glyph(' '), Some(CellContent::empty()));
        assert_eq!(by_glyph('x'), None);
    }
}
