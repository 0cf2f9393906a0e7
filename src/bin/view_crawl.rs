//! view_crawl - walk a text map in a window, rendered strip by strip.
//!
//! Keys: ↑/W forward, ↓/S back, ←/A turn left, →/D turn right,
//! Space open a chest or throw a lever, F toggle the flash on the nearest
//! object, Esc quit.

use clap::Parser;
use minifb::{Key, KeyRepeat, Window, WindowOptions};
use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use yacrawl_rs::{
    assets::DEMO_MAP,
    defs::{WINDOW_SIZE_X, WINDOW_SIZE_Y},
    renderer::{CellOracle, Frame, StripRenderer},
    world::{Dungeon, FieldOfView},
};

const LIT: u32 = 0x00E0_F0FF;
const DARK: u32 = 0x0010_1018;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Text map to explore (defaults to the bundled demo maze)
    #[arg(long, value_name = "FILE")]
    map: Option<PathBuf>,

    /// Window magnification
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u8).range(1..=16))]
    scale: u8,

    /// Answer cell lookups from a per-frame field-of-view snapshot
    #[arg(long)]
    fov_cache: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opts = Opts::parse();

    let mut dungeon = match &opts.map {
        Some(path) => Dungeon::from_file(path)?,
        None => DEMO_MAP.parse()?,
    };
    let renderer = StripRenderer::builtin()?;

    let scale = opts.scale as usize;
    let w = WINDOW_SIZE_X as usize * scale;
    let h = WINDOW_SIZE_Y as usize * scale;
    let mut fb = vec![0u32; w * h];

    let mut win = Window::new("yacrawl", w, h, WindowOptions::default())?;
    win.set_target_fps(30);

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO;
    let mut acc_frames = 0usize;
    let mut last_print = Instant::now();

    while win.is_open() && !win.is_key_down(Key::Escape) {
        /* input: one grid move per key press ------------------------------ */
        let pressed = |keys: &[Key]| keys.iter().any(|&k| win.is_key_pressed(k, KeyRepeat::Yes));
        if pressed(&[Key::Up, Key::W]) && !dungeon.step(1) {
            log::debug!("blocked at {:?}", dungeon.pose());
        }
        if pressed(&[Key::Down, Key::S]) && !dungeon.step(-1) {
            log::debug!("blocked at {:?}", dungeon.pose());
        }
        if pressed(&[Key::Left, Key::A]) {
            dungeon.turn_left();
        }
        if pressed(&[Key::Right, Key::D]) {
            dungeon.turn_right();
        }
        if win.is_key_pressed(Key::Space, KeyRepeat::No) && !dungeon.use_ahead() {
            log::debug!("nothing to use");
        }
        if win.is_key_pressed(Key::F, KeyRepeat::No) {
            dungeon.toggle_flash();
        }

        /* draw ------------------------------------------------------------- */
        let t0 = Instant::now();
        let view = dungeon.view_state();
        let fov;
        let oracle: &dyn CellOracle = if opts.fov_cache {
            fov = FieldOfView::capture(&dungeon);
            &fov
        } else {
            &dungeon
        };
        let frame = Frame::render(&renderer, oracle, &view);
        frame.write_argb(&mut fb, scale, LIT, DARK);
        acc_time += t0.elapsed();
        acc_frames += 1;

        win.update_with_buffer(&fb, w, h)?;

        if last_print.elapsed() >= Duration::from_secs(3) {
            let avg_us = acc_time.as_secs_f64() * 1e6 / acc_frames as f64;
            log::info!("avg render: {avg_us:.1} µs per frame");
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}
