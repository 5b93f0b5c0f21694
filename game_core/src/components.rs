use glam::Vec2;
use rand::Rng;

use crate::map::{clamp_top, Aabb};
use crate::resources::GameRng;

/// Which end of the table a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Player, // left
    Ai,     // right
}

/// Paddle component - a vertical bat, positioned by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    pub size: Vec2,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, size: Vec2) -> Self {
        Self { side, pos, size }
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Move vertically by `delta`, staying inside `[0, screen_height - height]`
    pub fn shift(&mut self, delta: f32, screen_height: f32) {
        self.pos.y = clamp_top(self.pos.y + delta, self.size.y, screen_height);
    }

    /// Step the paddle's center toward the ball's center, at most `max_step` per call
    pub fn auto_track(&mut self, ball: &Ball, screen_height: f32, max_step: f32) {
        let diff = ball.center_y() - self.center_y();
        self.shift(diff.min(max_step).max(-max_step), screen_height);
    }
}

/// Ball component - the pong ball, positioned by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    spawn: Vec2,
    serve_speed: Vec2, // per-axis magnitude restored on reset
}

impl Ball {
    pub fn new(pos: Vec2, size: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            size,
            vel,
            spawn: pos,
            serve_speed: vel.abs(),
        }
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Advance one frame. Returns true when the ball bounced off the top or bottom wall.
    pub fn advance(&mut self, screen_height: f32) -> bool {
        self.pos += self.vel;

        let floor = screen_height - self.size.y;
        if self.pos.y <= 0.0 || self.pos.y >= floor {
            self.vel.y = -self.vel.y;
            self.pos.y = clamp_top(self.pos.y, self.size.y, screen_height);
            true
        } else {
            false
        }
    }

    /// Re-serve from the spawn point: horizontal direction reversed, vertical direction random
    pub fn reset(&mut self, rng: &mut GameRng) {
        self.pos = self.spawn;

        let dir_x = -self.vel.x.signum();
        let dir_y = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(self.serve_speed.x * dir_x, self.serve_speed.y * dir_y);
    }
}
