use crate::{Aabb, Ball, Events, Paddle, Side};
use hecs::World;

/// Check ball collisions with the paddles.
///
/// At most one paddle is hit per frame and the player's paddle is tested first.
/// On a hit the ball is placed flush against the paddle's inner face and its
/// horizontal velocity is inverted.
pub fn check_collisions(world: &mut World, events: &mut Events) {
    // Collect paddle boxes without holding a borrow on the world
    let mut paddles: Vec<(Side, Aabb)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.rect()))
        .collect();
    paddles.sort_by_key(|(side, _)| *side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let ball_rect = ball.rect();
        let Some((side, paddle)) = paddles.iter().find(|(_, p)| ball_rect.intersects(p)) else {
            continue;
        };

        ball.pos.x = match side {
            Side::Player => paddle.max.x,
            Side::Ai => paddle.min.x - ball.size.x,
        };
        ball.vel.x = -ball.vel.x;
        events.paddle_hit = true;
    }
}
