// What you SEE:
// • An orange dotted ellipse drawn with the midpoint algorithm, one dot per boundary point.
// • Hold Left Mouse and drag: right = wider, up = taller (radii never drop below 1).
// • Right Mouse toggles the sinusoidal "breathing" animation (phase resumes, never restarts).
// • V cycles ELLIPSE / CIRCLE / SPLIT (ellipse left, min-radius circle right).
// • S saves a PNG snapshot. ESC quits.
//
// Optional first argument: path to a TOML config (default: ./midpoint-ellipse.toml).

mod animation;
mod config;
mod curve;
mod draw;
mod drag;
mod error;
mod input;
mod scene;
mod snapshot;
mod types;

use animation::AnimationState;
use config::AppConfig;
use draw::{draw_crosshair, draw_line, draw_text_5x7, Drawer, PointPlotter};
use error::Error;
use scene::{Mode, Scene, ViewMode};
use std::time::{Duration, Instant};
use types::FrameBuffer;

fn main() -> Result<(), Error> {
    env_logger::init();

    /* --- Config + window setup ---
       Visual: window opens at the configured size, still black. */
    let cfg = AppConfig::load_from_file(&AppConfig::path_from_args(std::env::args()));
    let mut drawer = Drawer::new("Midpoint Ellipse", cfg.width, cfg.height)?;
    let mut screen = FrameBuffer::new(cfg.width, cfg.height);
    log::info!("window {}x{}, rx={} ry={}, view {:?}", cfg.width, cfg.height, cfg.rx, cfg.ry, cfg.view);

    /* --- Scene: shape + drag + animation ---
       Visual: the starting ellipse, centered. Animation base = the starting radii. */
    let animation = AnimationState::new(cfg.rx, cfg.ry, cfg.speed, cfg.amplitude);
    let mut scene = Scene::new(cfg.width as f32, cfg.height as f32, cfg.rx, cfg.ry, animation, cfg.view);

    /* --- HUD / FPS --- */
    let started = Instant::now();
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut hud_fps_text = String::from("FPS: 0.0");
    let mut snapshots: u32 = 0;

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();

        /* 1) Inputs -> event queue (consumed in order inside run_frame). */
        for event in drawer.poll_events() {
            scene.push_event(event);
        }
        if drawer.v_pressed_once() {
            scene.set_view(scene.view().next());
            log::debug!("view -> {:?}", scene.view());
        }

        /* 2) Radii update + point generation, plotted straight into the screen.
           Visual: the dotted outline for this frame's radii. */
        screen.clear(cfg.background);
        let timestamp = now.duration_since(started).as_secs_f32();
        let mut plotter = PointPlotter { fb: &mut screen, color: cfg.point_color };
        scene.run_frame(timestamp, &mut plotter);

        /* 3) Overlays: split divider, drag crosshair, HUD text */
        if scene.view() == ViewMode::Split {
            let mid = (cfg.width / 2) as i32;
            draw_line(&mut screen, mid, 0, mid, cfg.height as i32 - 1, 0x00_40_40_40);
        }
        if scene.drag.active {
            if let Some((mx, my)) = drawer.mouse_pos() {
                draw_crosshair(&mut screen, mx as i32, my as i32, 12, 0x00_FF_CC_33); // yellow + at cursor
            }
        }
        let mode = match scene.mode() {
            Mode::Manual => "MANUAL",
            Mode::Animated => "ANIMATED",
        };
        let view = match scene.view() {
            ViewMode::Ellipse => "ELLIPSE",
            ViewMode::Circle => "CIRCLE",
            ViewMode::Split => "SPLIT",
        };
        let hud = format!(
            "{} | {} | RX: {:.1} RY: {:.1} | {}",
            mode, view, scene.shape.rx(), scene.shape.ry(), hud_fps_text
        );
        draw_text_5x7(&mut screen, 8, 8, &hud, 0x00_FF_FF_FF);

        /* 4) Snapshot before present so the file matches what you see. */
        if drawer.s_pressed_once() {
            let (path, n) = snapshot::next_free_path(&cfg.snapshot_dir, snapshots);
            match snapshot::save_png(&screen, &path) {
                Ok(()) => snapshots = n.saturating_add(1),
                Err(e) => log::error!("{e}"),
            }
        }

        /* 5) Present to the window (this is when the on-screen image updates). */
        drawer.present(&screen)?;

        /* 6) FPS counter (log + HUD once per second) */
        frames_this_second += 1;
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            let fps = frames_this_second as f32 / secs;
            log::info!("FPS: {:.1}", fps);
            hud_fps_text = format!("FPS: {:.1}", fps);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    log::info!("bye");
    Ok(())
}
