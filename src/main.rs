//! Emberfall main entry point.
//!
//! A small torch-lit platformer written in Rust using:
//! - **raylib** for windowing, graphics and input
//! - the `emberfall` library for screens, physics and transitions
//!
//! # Main Loop
//!
//! 1. Load `config.ini` and apply command line overrides
//! 2. Open the window and create the fixed-resolution render target
//! 3. Optionally load a sprite sheet for the player
//! 4. Every frame: poll input, tick the game into the render target, then
//!    scale the render target into the window
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --state playing
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use log::{error, info, warn};
use raylib::prelude::*;

use emberfall::game::Game;
use emberfall::resources::gameconfig::GameConfig;
use emberfall::resources::gamestate::GameStates;
use emberfall::resources::rendertarget::RenderTarget;
use emberfall::resources::spritesheet::SpriteSheet;
use emberfall::resources::texturestore::{RaylibTextureLoader, TextureStore};
use emberfall::systems::input::poll_input;
use emberfall::systems::render::{RaylibCanvas, RecordingCanvas};

/// Emberfall
#[derive(Parser)]
#[command(version, about = "Emberfall, a small torch-lit platformer")]
struct Cli {
    /// Configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Seed for decoration and particles. Overrides the config file.
    #[arg(long)]
    seed: Option<u64>,

    /// State to start in (start, story, playing). Overrides the config file.
    #[arg(long, value_name = "STATE")]
    state: Option<GameStates>,

    /// Sprite atlas JSON used to draw the player.
    #[arg(long, value_name = "PATH")]
    sprite: Option<PathBuf>,

    /// Simulate this many 60 Hz frames without opening a window, then exit.
    #[arg(long, value_name = "FRAMES")]
    headless: Option<u32>,
}

fn run_headless(config: &GameConfig, frames: u32) {
    let (w, h) = config.render_size();
    let mut game = Game::new(w as f32, h as f32, config.seed, config.start_state);
    let mut canvas = RecordingCanvas::new(w as i32, h as i32);
    let mut draw_calls = 0;

    game.start(0.0);
    for frame in 1..=frames {
        game.tick(f64::from(frame) / 60.0, &mut canvas);
        draw_calls += canvas.take_calls().len();
    }
    game.stop();

    info!(
        "Headless run: {} frames, {} draw calls, final state {}",
        frames,
        draw_calls,
        game.state()
    );
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    config.apply_overrides(cli.seed, cli.state);

    if let Some(frames) = cli.headless {
        run_headless(&config, frames);
        return;
    }

    info!("Starting Emberfall");
    // --------------- Raylib window & assets ---------------
    let (window_width, window_height) = config.window_size();
    let mut builder = raylib::init();
    builder
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Emberfall");
    if config.vsync {
        builder.vsync();
    }
    if config.fullscreen {
        builder.fullscreen();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    // Disable ESC to exit
    rl.set_exit_key(None);

    // --------------- Render target for fixed-resolution rendering ---------------
    let (render_width, render_height) = config.render_size();
    let mut render_target =
        match RenderTarget::new(&mut rl, &thread, render_width, render_height) {
            Ok(target) => target,
            Err(e) => {
                error!("{}", e);
                return;
            }
        };

    let mut textures = TextureStore::new();
    let sprite = cli.sprite.as_ref().and_then(|path| {
        let mut loader = RaylibTextureLoader {
            rl: &mut rl,
            thread: &thread,
            store: &mut textures,
        };
        match SpriteSheet::load(path, &mut loader) {
            Ok(sheet) => Some(Rc::new(sheet)),
            Err(e) => {
                warn!("No player sprite: {}", e);
                None
            }
        }
    });

    let mut game = Game::with_player_sprite(
        render_width as f32,
        render_height as f32,
        config.seed,
        config.start_state,
        sprite,
    );

    // --------------- Main loop ---------------
    game.start(rl.get_time());
    while !rl.window_should_close() && game.is_running() {
        poll_input(&rl, game.input_mut());
        let now = rl.get_time();

        let mut d = rl.begin_drawing(&thread);
        {
            let mut target = d.begin_texture_mode(&thread, &mut render_target.texture);
            let mut canvas = RaylibCanvas::new(
                &mut target,
                &textures,
                render_width as i32,
                render_height as i32,
            );
            game.tick(now, &mut canvas);
        }
        d.clear_background(Color::BLACK);
        let dest = render_target.dest_rect(d.get_screen_width(), d.get_screen_height());
        d.draw_texture_pro(
            &render_target.texture,
            render_target.source_rect(),
            dest,
            Vector2::zero(),
            0.0,
            Color::WHITE,
        );
    }
    game.stop();
}
