//! rlstage demo entry point.
//!
//! A small two-state application: a bouncing sprite that can be paused by
//! pushing a second state onto the engine's stack. It shows the intended
//! wiring: build a [`Config`], construct the [`Engine`], hand it a root
//! state.
//!
//! Controls: `P` pauses and resumes, `Q` quits from the pause screen, and
//! the window close button (or ESC) quits from anywhere.
//!
//! ```sh
//! cargo run --release -- --resizable --width 1024 --height 768
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use raylib::prelude::*;

use rlstage::{Config, Engine, State};

/// rlstage demo
#[derive(Parser)]
#[command(version, about = "Bouncing-sprite demo for the rlstage engine")]
struct Cli {
    /// Window width in pixels.
    #[arg(long)]
    width: Option<i32>,

    /// Window height in pixels.
    #[arg(long)]
    height: Option<i32>,

    /// Window title.
    #[arg(long)]
    title: Option<String>,

    /// Target frames per second.
    #[arg(long)]
    fps: Option<u32>,

    /// Start in fullscreen mode.
    #[arg(long)]
    fullscreen: bool,

    /// Make the window resizable.
    #[arg(long)]
    resizable: bool,

    /// Skip loading the assets directory at startup.
    #[arg(long)]
    no_assets: bool,

    /// Load settings from an INI file before applying the flags above.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Root state: a sprite bouncing off the window edges.
///
/// Uses the `player` texture when an assets directory provides one and the
/// engine's placeholder otherwise.
struct PlayState {
    pos: Cell<Vector2>,
    vel: Cell<Vector2>,
}

impl PlayState {
    fn new() -> Self {
        Self {
            pos: Cell::new(Vector2 { x: 40.0, y: 40.0 }),
            vel: Cell::new(Vector2 { x: 180.0, y: 140.0 }),
        }
    }
}

impl State for PlayState {
    fn update(&self, engine: &mut Engine) {
        let dt = engine.window.handle().get_frame_time();
        let (texture, _) = engine.resources.texture("player");
        let sprite_w = texture.width as f32;
        let sprite_h = texture.height as f32;
        let max_x = (engine.window.screen_width() as f32 - sprite_w).max(0.0);
        let max_y = (engine.window.screen_height() as f32 - sprite_h).max(0.0);

        let mut pos = self.pos.get();
        let mut vel = self.vel.get();
        pos.x += vel.x * dt;
        pos.y += vel.y * dt;
        if pos.x <= 0.0 || pos.x >= max_x {
            pos.x = pos.x.clamp(0.0, max_x);
            vel.x = -vel.x;
        }
        if pos.y <= 0.0 || pos.y >= max_y {
            pos.y = pos.y.clamp(0.0, max_y);
            vel.y = -vel.y;
        }
        self.pos.set(pos);
        self.vel.set(vel);

        if engine.window.handle().is_key_pressed(KeyboardKey::KEY_P) {
            engine.run(Rc::new(PauseState));
        }
    }

    fn draw(&self, engine: &mut Engine) {
        let pos = self.pos.get();
        let (texture, _) = engine.resources.texture("player");
        engine
            .window
            .draw_texture(texture, pos.x as i32, pos.y as i32, Color::WHITE);
        engine
            .window
            .draw_text("P to pause, ESC to quit", 10, 32, 20, Color::DARKGRAY);
        engine.window.draw_fps(10, 10);
    }

    fn resize(&self, engine: &mut Engine) {
        // Keep the sprite inside the new bounds.
        let (texture, _) = engine.resources.texture("player");
        let max_x = (engine.window.screen_width() - texture.width).max(0) as f32;
        let max_y = (engine.window.screen_height() - texture.height).max(0) as f32;
        let mut pos = self.pos.get();
        pos.x = pos.x.clamp(0.0, max_x);
        pos.y = pos.y.clamp(0.0, max_y);
        self.pos.set(pos);
    }
}

/// Nested state pushed on top of the play state while paused.
struct PauseState;

impl State for PauseState {
    fn update(&self, engine: &mut Engine) {
        if engine.window.handle().is_key_pressed(KeyboardKey::KEY_P) {
            engine.quit_state();
        }
        if engine.window.handle().is_key_pressed(KeyboardKey::KEY_Q) {
            engine.quit_app();
        }
    }

    fn draw(&self, engine: &mut Engine) {
        let w = engine.window.screen_width();
        let h = engine.window.screen_height();
        engine
            .window
            .draw_rectangle(0, 0, w, h, Color::new(0, 0, 0, 180));
        engine
            .window
            .draw_text("paused", w / 2 - 60, h / 2 - 20, 40, Color::RAYWHITE);
        engine
            .window
            .draw_text("P resumes, Q quits", w / 2 - 90, h / 2 + 30, 20, Color::LIGHTGRAY);
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut cfg = Config::default();
    if let Some(path) = &cli.config {
        if let Err(err) = cfg.load_from_file(path) {
            eprintln!("Error loading config: {err}");
            std::process::exit(1);
        }
    }
    if let Some(width) = cli.width {
        cfg.width = width;
    }
    if let Some(height) = cli.height {
        cfg.height = height;
    }
    if let Some(title) = cli.title {
        cfg.title = title;
    }
    if let Some(fps) = cli.fps {
        cfg.target_fps = fps;
    }
    if cli.fullscreen {
        cfg.window_mode |= ConfigFlags::FLAG_FULLSCREEN_MODE as u32;
    }
    if cli.resizable {
        cfg.window_mode |= ConfigFlags::FLAG_WINDOW_RESIZABLE as u32;
    }
    if cli.no_assets {
        cfg.load_assets = false;
    }

    let mut engine = match Engine::new(cfg) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    engine.run(Rc::new(PlayState::new()));
}
