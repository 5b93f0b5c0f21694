use glam::Vec2;

use crate::config::Config;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Strict overlap: boxes that only share an edge do not intersect
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Playfield geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
}

impl GameMap {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.screen_width, config.screen_height)
    }

    /// Top-left corner where the ball is served from
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new((self.width / 2.0).floor(), (self.height / 2.0).floor())
    }

    /// Top edge of a vertically centered paddle
    pub fn paddle_spawn_y(&self, paddle_height: f32) -> f32 {
        (self.height / 2.0).floor() - (paddle_height / 2.0).floor()
    }
}

/// Clamp a top edge so an object of `extent` stays inside `[0, screen_height - extent]`.
/// An object taller than the screen is pinned to the top.
pub fn clamp_top(y: f32, extent: f32, screen_height: f32) -> f32 {
    y.min(screen_height - extent).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_boxes_intersect() {
        let a = Aabb::from_pos_size(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::from_pos_size(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_boxes_do_not_intersect() {
        let a = Aabb::from_pos_size(Vec2::new(10.0, 150.0), Vec2::new(10.0, 100.0));
        let b = Aabb::from_pos_size(Vec2::new(20.0, 160.0), Vec2::new(7.0, 7.0));
        assert!(!a.intersects(&b), "Shared edge is not an overlap");
    }

    #[test]
    fn test_spawn_points_are_centered() {
        let map = GameMap::new(800.0, 400.0);
        assert_eq!(map.ball_spawn(), Vec2::new(400.0, 200.0));
        assert_eq!(map.paddle_spawn_y(100.0), 150.0);
    }

    #[test]
    fn test_spawn_points_floor_odd_sizes() {
        let map = GameMap::new(801.0, 401.0);
        assert_eq!(map.ball_spawn(), Vec2::new(400.0, 200.0));
        assert_eq!(map.paddle_spawn_y(101.0), 150.0);
    }

    #[test]
    fn test_clamp_top() {
        assert_eq!(clamp_top(-3.0, 100.0, 400.0), 0.0);
        assert_eq!(clamp_top(350.0, 100.0, 400.0), 300.0);
        assert_eq!(clamp_top(42.0, 100.0, 400.0), 42.0);
    }

    #[test]
    fn test_clamp_top_when_object_is_taller_than_screen() {
        assert_eq!(clamp_top(5.0, 100.0, 90.0), 0.0, "Pinned to the top, no panic");
    }
}
