pub mod audio;
pub mod components;
pub mod config;
pub mod engine;
pub mod fsm;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use audio::*;
pub use components::*;
pub use config::*;
pub use engine::*;
pub use fsm::*;
pub use map::*;
pub use params::*;
pub use render::{Canvas, Color, TextAnchor};
pub use resources::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run one frame of the Pong simulation (everything after player input)
pub fn step(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Move ball, bouncing off top/bottom walls
    move_ball(world, map, events);

    // 2. Ball vs paddles (player first)
    check_collisions(world, events);

    // 3. Check scoring (ball reached left/right edge)
    check_scoring(world, map, score, events, rng);

    // 4. AI paddle follows the ball
    track_ball(world, map, config);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, pos: Vec2, config: &Config) -> hecs::Entity {
    let size = Vec2::new(config.paddle_width, config.paddle_height);
    world.spawn((Paddle::new(side, pos, size),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2, config: &Config) -> hecs::Entity {
    world.spawn((Ball::new(pos, Vec2::splat(config.ball_size), vel),))
}
