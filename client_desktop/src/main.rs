//! Desktop Pong: one human paddle against a tracking AI
//!
//! W/S move the left paddle. After a match, 3/5/7 start a new best-of match
//! and Escape quits.

mod canvas;
mod font;
mod keys;
mod sfx;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use game_core::{Config, FsmState, GameEngine, GameRng, MatchLength, Params};
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyboardInput, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use canvas::FrameCanvas;
use keys::{menu_choice_for_key, KeyTracker};

#[derive(Debug, Parser)]
#[command(name = "pong")]
#[command(about = "Pong against a simple AI opponent")]
struct Cli {
    /// Window width in pixels
    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(320..=3840))]
    width: u32,
    /// Window height in pixels
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(240..=2160))]
    height: u32,
    /// Points needed to win the first match (3, 5 or 7)
    #[arg(long, default_value = "5", value_parser = parse_winning_score)]
    winning_score: MatchLength,
    /// Directory holding paddle_hit.wav, wall_bounce.wav and score.wav
    #[arg(long, default_value = "assets/sounds")]
    sounds_dir: PathBuf,
    /// Seed for serve directions; random when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Skip loading sounds
    #[arg(long, default_value_t = false)]
    mute: bool,
    /// Simulation and redraw rate
    #[arg(long, default_value_t = Params::FPS, value_parser = clap::value_parser!(u32).range(10..=240))]
    fps: u32,
}

fn parse_winning_score(raw: &str) -> Result<MatchLength, String> {
    let target: u32 = raw.parse().map_err(|e| format!("{e}"))?;
    MatchLength::from_target(target).ok_or_else(|| format!("winning score must be 3, 5 or 7, got {target}"))
}

fn main() -> Result<()> {
    let env = env_logger::Env::default()
        .filter_or("PONG_LOG", "info")
        .write_style_or("PONG_LOG_STYLE", "auto");
    env_logger::init_from_env(env);

    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::new()
        .with_screen(cli.width as f32, cli.height as f32)
        .with_win_score(cli.winning_score);
    let seed = cli.seed.unwrap_or_else(rand::random);
    let sounds = if cli.mute {
        None
    } else {
        sfx::probe(&cli.sounds_dir)
    };
    let mut engine = GameEngine::with_seed(config, GameRng::new(seed)).with_sounds(sounds);
    log::info!(
        "Starting {}x{} table, first to {} (seed {seed})",
        cli.width,
        cli.height,
        engine.winning_score()
    );

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Pong")
        .with_inner_size(PhysicalSize::new(cli.width, cli.height))
        .with_resizable(false)
        .build(&event_loop)
        .context("creating window")?;

    let mut pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(cli.width, cli.height, surface_texture).context("creating pixel surface")?
    };

    let (width, height) = (cli.width, cli.height);
    let frame_interval = Duration::from_secs_f64(1.0 / cli.fps as f64);
    let mut next_frame = Instant::now();
    let mut keys = KeyTracker::default();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::WaitUntil(next_frame);

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    engine.quit();
                }
                WindowEvent::Focused(false) => keys.clear(),
                WindowEvent::Resized(size) => {
                    if let Err(err) = pixels.resize_surface(size.width, size.height) {
                        log::error!("Resizing surface failed: {err}");
                        *control_flow = ControlFlow::Exit;
                    }
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state,
                            virtual_keycode: Some(key),
                            ..
                        },
                    ..
                } => {
                    keys.record(key, state);
                    if state == ElementState::Pressed && engine.state() == FsmState::GameOver {
                        if let Some(choice) = menu_choice_for_key(key) {
                            engine.apply_menu_choice(choice);
                            keys.clear();
                        }
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                let now = Instant::now();
                if now >= next_frame {
                    engine.tick(&keys.held());
                    window.request_redraw();
                    next_frame = now + frame_interval;
                }
            }
            Event::RedrawRequested(_) => {
                engine.render(&mut FrameCanvas::new(pixels.frame_mut(), width, height));
                if let Err(err) = pixels.render() {
                    log::error!("Presenting frame failed: {err}");
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }

        if engine.state() == FsmState::Terminated {
            *control_flow = ControlFlow::Exit;
        }
    })
}
