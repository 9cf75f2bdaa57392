/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Board
    pub const BOARD_WIDTH: f32 = 900.0;
    pub const BOARD_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 120.0;
    pub const PADDLE_MARGIN: f32 = 15.0; // Gap between paddle and side edge
    pub const PADDLE_STEP: f32 = 10.0; // Units per tick

    // Ball
    pub const BALL_RADIUS: f32 = 12.0;
    pub const BALL_LAUNCH_DX: f32 = 15.0;
    pub const BALL_LAUNCH_DY: f32 = 5.0;

    // Score display
    pub const SCORE_ANCHOR_Y: f32 = 15.0;
    pub const SCORE_FONT_SIZE: u16 = 80;

    // Board markings
    pub const CENTER_LINE_THICKNESS: f32 = 5.0;

    // Loop
    pub const TICK_RATE: u32 = 40; // Ticks per second
}
