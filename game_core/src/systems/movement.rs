use crate::{Ball, Events, GameMap};
use hecs::World;

/// Move ball based on velocity, bouncing off the top and bottom walls
pub fn move_ball(world: &mut World, map: &GameMap, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.advance(map.height) {
            events.wall_bounce = true;
        }
    }
}
