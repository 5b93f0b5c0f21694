use hecs::World;

use crate::{Config, GameMap, HeldKeys, Paddle, Side};

/// Apply held keys to the player's paddle.
///
/// Each key moves the paddle on its own, so holding both applies two opposite
/// clamped moves rather than cancelling up front. Near an edge the clamp makes
/// the pair non-neutral.
pub fn ingest_inputs(world: &mut World, keys: &HeldKeys, map: &GameMap, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Player {
            continue;
        }
        if keys.up {
            paddle.shift(-config.paddle_step, map.height);
        }
        if keys.down {
            paddle.shift(config.paddle_step, map.height);
        }
    }
}
