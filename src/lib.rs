//! 1-bit first-person dungeon renderer core.
//!
//! The crate answers one question: *which 8 pixels does the player see at
//! screen column `x`, row band `y`?*  Everything else (map, movement,
//! display driver) talks to it through [`renderer::CellOracle`] and
//! [`renderer::StripRenderer::render_column_strip`].

pub mod assets;
pub mod defs;
pub mod renderer;
pub mod world;
