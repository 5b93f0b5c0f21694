use crate::{Ball, Config, GameMap, Paddle, Side};
use hecs::World;

/// Move the AI paddle toward the ball's vertical center
pub fn track_ball(world: &mut World, map: &GameMap, config: &Config) {
    let ball = world.query::<&Ball>().iter().next().map(|(_e, ball)| *ball);
    let Some(ball) = ball else {
        return; // No ball in world
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Ai {
            paddle.auto_track(&ball, map.height, config.ai_step);
        }
    }
}
