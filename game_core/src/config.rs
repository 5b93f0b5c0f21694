use glam::Vec2;

use crate::components::Side;
use crate::fsm::MatchLength;
use crate::params::Params;
use crate::render::Color;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_step: f32,
    pub ai_step: f32,
    pub ball_size: f32,
    pub ball_velocity: Vec2,
    pub win_score: MatchLength,
    pub foreground: Color,
    pub background: Color,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_step: Params::PADDLE_STEP,
            ai_step: Params::AI_STEP,
            ball_size: Params::BALL_SIZE,
            ball_velocity: Vec2::new(Params::BALL_VELOCITY_X, Params::BALL_VELOCITY_Y),
            win_score: MatchLength::default(),
            foreground: Color::WHITE,
            background: Color::BLACK,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_screen(mut self, width: f32, height: f32) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self
    }

    pub fn with_win_score(mut self, win_score: MatchLength) -> Self {
        self.win_score = win_score;
        self
    }

    /// Smallest table that still fits both paddles side by side with the ball between them
    pub fn min_screen(&self) -> (f32, f32) {
        let width = 2.0 * (self.paddle_margin + self.paddle_width) + self.ball_size;
        let height = self.paddle_height.max(self.ball_size);
        (width, height)
    }

    /// Grow the screen to at least `min_screen`. Non-finite sizes fall back to the minimum.
    pub fn playable(mut self) -> Self {
        let (min_w, min_h) = self.min_screen();
        let fit = |v: f32, min: f32| if v.is_finite() { v.max(min) } else { min };
        let (width, height) = (fit(self.screen_width, min_w), fit(self.screen_height, min_h));

        if (width, height) != (self.screen_width, self.screen_height) {
            log::warn!(
                "Screen {}x{} cannot hold the paddles, using {}x{}",
                self.screen_width,
                self.screen_height,
                width,
                height
            );
            self.screen_width = width;
            self.screen_height = height;
        }
        self
    }

    /// Get X position (left edge) for a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_margin,
            Side::Ai => self.screen_width - self.paddle_margin - self.paddle_width,
        }
    }
}
