//! render_ascii - print one rendered window as ASCII art.
//!
//! USAGE:
//! ```bash
//! cargo run --bin render_ascii -- --map maze.map --x 3 --y 4 --facing east
//! ```
//!
//! Without `--x/--y` the map's own start position is used.

use anyhow::Context;
use clap::Parser;
use glam::ivec2;
use std::path::PathBuf;

use yacrawl_rs::{
    assets::DEMO_MAP,
    defs::MAX_VIEW_DISTANCE,
    renderer::{CellOracle, Frame, StripRenderer},
    world::{Dungeon, FOV_LATERAL, Facing, FieldOfView},
};

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Text map (defaults to the bundled demo maze)
    #[arg(long, value_name = "FILE")]
    map: Option<PathBuf>,

    /// Player column, overrides the map start
    #[arg(long, requires = "y")]
    x: Option<i32>,

    /// Player row, overrides the map start
    #[arg(long, requires = "x")]
    y: Option<i32>,

    /// north, east, south or west
    #[arg(long)]
    facing: Option<Facing>,

    /// Invert the nearest object
    #[arg(long)]
    flash: bool,

    /// Answer cell lookups from a field-of-view snapshot
    #[arg(long)]
    fov_cache: bool,

    /// Also print the viewing cells as map glyphs, farthest row first
    #[arg(long)]
    legend: bool,
}

/// Viewing cells as seen from the player, `@` marks the player.
fn legend(oracle: &dyn CellOracle) -> String {
    let mut out = String::new();
    for distance in (0..=MAX_VIEW_DISTANCE).rev() {
        for lateral in -FOV_LATERAL..=FOV_LATERAL {
            out.push(match (distance, lateral) {
                (0, 0) => '@',
                _ => oracle.cell(distance, lateral).glyph(),
            });
        }
        out.push('\n');
    }
    out
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let opts = Opts::parse();

    let mut dungeon = match &opts.map {
        Some(path) => Dungeon::from_file(path)
            .with_context(|| format!("loading map {}", path.display()))?,
        None => DEMO_MAP.parse()?,
    };

    let mut pose = dungeon.pose();
    if let (Some(x), Some(y)) = (opts.x, opts.y) {
        pose.pos = ivec2(x, y);
        anyhow::ensure!(
            dungeon.contains(pose.pos),
            "position ({x}, {y}) outside the {}x{} map",
            dungeon.width(),
            dungeon.height()
        );
    }
    if let Some(facing) = opts.facing {
        pose.facing = facing;
    }
    dungeon.set_pose(pose);
    if opts.flash {
        dungeon.toggle_flash();
    }

    let renderer = StripRenderer::builtin()?;
    let view = dungeon.view_state();
    let fov;
    let oracle: &dyn CellOracle = if opts.fov_cache {
        fov = FieldOfView::capture(&dungeon);
        &fov
    } else {
        &dungeon
    };

    let frame = Frame::render(&renderer, oracle, &view);
    println!("{:?} at {}, mirrored: {}", pose.facing, pose.pos, view.mirrored);
    if opts.legend {
        print!("{}", legend(oracle));
    }
    print!("{}", frame.to_ascii());
    Ok(())
}
