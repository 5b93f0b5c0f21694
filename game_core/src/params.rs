/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 10.0; // gap between paddle and screen edge
    pub const PADDLE_STEP: f32 = 10.0; // pixels per frame per held key
    pub const AI_STEP: f32 = 6.0; // max pixels per frame, kept below PADDLE_STEP

    // Ball
    pub const BALL_SIZE: f32 = 7.0;
    pub const BALL_VELOCITY_X: f32 = 7.0;
    pub const BALL_VELOCITY_Y: f32 = 7.0;

    // Frame pacing
    pub const FPS: u32 = 60;
}
