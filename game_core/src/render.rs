//! Scene description
//!
//! The core never touches a window. It describes each frame as draw calls on a
//! [`Canvas`], which the frontend rasterises however it likes.

use glam::Vec2;

use crate::{Aabb, Ball, Config, Paddle, Score, Side};

pub const SCORE_TEXT_SIZE: f32 = 30.0;
pub const BANNER_TEXT_SIZE: f32 = 50.0;
pub const MENU_TEXT_SIZE: f32 = 25.0;
pub const MENU_LINE_SPACING: f32 = 35.0;

pub const MENU_OPTIONS: [&str; 5] = [
    "Select Mode:",
    "[3] Best of 3",
    "[5] Best of 5",
    "[7] Best of 7",
    "[ESC] Exit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 0xff]
    }
}

/// Where a text position sits relative to the rendered string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    TopLeft,
    Center,
}

/// Drawing surface the game renders into
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Aabb, color: Color);
    /// Fill the ellipse inscribed in `rect`
    fn fill_ellipse(&mut self, rect: Aabb, color: Color);
    fn line(&mut self, from: Vec2, to: Vec2, color: Color);
    /// `size` is the nominal glyph height in pixels
    fn text(&mut self, text: &str, pos: Vec2, anchor: TextAnchor, size: f32, color: Color);
}

pub fn winner_banner(winner: Side) -> &'static str {
    match winner {
        Side::Player => "Player Wins!",
        Side::Ai => "AI Wins!",
    }
}

/// Draw the table: both paddles, the ball, the center line and the scores
pub fn draw_playfield(
    canvas: &mut dyn Canvas,
    config: &Config,
    paddles: [&Paddle; 2],
    ball: &Ball,
    score: &Score,
) {
    let fg = config.foreground;
    let (w, h) = (config.screen_width, config.screen_height);

    canvas.clear(config.background);
    for paddle in paddles {
        canvas.fill_rect(paddle.rect(), fg);
    }
    canvas.fill_ellipse(ball.rect(), fg);

    let mid_x = (w / 2.0).floor();
    canvas.line(Vec2::new(mid_x, 0.0), Vec2::new(mid_x, h), fg);

    canvas.text(
        &score.player.to_string(),
        Vec2::new((w / 4.0).floor(), 20.0),
        TextAnchor::TopLeft,
        SCORE_TEXT_SIZE,
        fg,
    );
    canvas.text(
        &score.ai.to_string(),
        Vec2::new((w * 3.0 / 4.0).floor(), 20.0),
        TextAnchor::TopLeft,
        SCORE_TEXT_SIZE,
        fg,
    );
}

/// Draw the winner banner and the replay menu on a blank screen
pub fn draw_game_over(canvas: &mut dyn Canvas, config: &Config, winner: Side) {
    let fg = config.foreground;
    let center_x = (config.screen_width / 2.0).floor();
    let center_y = (config.screen_height / 2.0).floor();

    canvas.clear(config.background);
    canvas.text(
        winner_banner(winner),
        Vec2::new(center_x, center_y - 80.0),
        TextAnchor::Center,
        BANNER_TEXT_SIZE,
        fg,
    );

    for (i, option) in MENU_OPTIONS.iter().enumerate() {
        let y = center_y + i as f32 * MENU_LINE_SPACING - 10.0;
        canvas.text(
            option,
            Vec2::new(center_x, y),
            TextAnchor::Center,
            MENU_TEXT_SIZE,
            fg,
        );
    }
}
