use crate::{Ball, Events, GameMap, GameRng, Score, Side};
use hecs::World;

/// Check if ball reached the left or right edge (scoring)
pub fn check_scoring(
    world: &mut World,
    map: &GameMap,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x <= 0.0 {
            score.increment(Side::Ai);
            events.ai_scored = true;
            log::debug!("AI scored ({}-{})", score.player, score.ai);
            ball.reset(rng);
        } else if ball.pos.x + ball.size.x >= map.width {
            score.increment(Side::Player);
            events.player_scored = true;
            log::debug!("Player scored ({}-{})", score.player, score.ai);
            ball.reset(rng);
        }
    }
}
