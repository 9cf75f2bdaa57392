use crate::Params;
use glam::Vec2;

/// Immutable board dimensions, handed to every entity that needs to know
/// where the edges are.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Board {
    pub width: f32,
    pub height: f32,
}

impl Board {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new((self.width / 2.0).floor(), (self.height / 2.0).floor())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Params::BOARD_WIDTH, Params::BOARD_HEIGHT)
    }
}

/// How the collision predicates treat the ball's direction of travel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollisionMode {
    /// Purely geometric: an overlapping ball reflects every tick it overlaps,
    /// even when already moving away.
    #[default]
    Legacy,
    /// Only reflect when the ball is travelling toward the surface it touches.
    Corrected,
}

/// How the ball picks its velocity when a round starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LaunchStrategy {
    /// Always the same vector
    Fixed(Vec2),
    /// Magnitudes drawn from inclusive ranges, each component with a random sign
    Randomized { dx: (f32, f32), dy: (f32, f32) },
}

impl Default for LaunchStrategy {
    fn default() -> Self {
        Self::Fixed(Vec2::new(Params::BALL_LAUNCH_DX, Params::BALL_LAUNCH_DY))
    }
}

/// What a key release does to the paddles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReleaseMode {
    /// Releasing a direction key stops only the paddle it controls, and only
    /// while that paddle still moves in the key's direction.
    #[default]
    PerKey,
    /// Any key release stops both paddles.
    Legacy,
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub board: Board,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_step: f32,
    pub ball_radius: f32,
    pub launch: LaunchStrategy,
    pub collision_mode: CollisionMode,
    pub release_mode: ReleaseMode,
    pub tick_rate: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board: Board::default(),
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_step: Params::PADDLE_STEP,
            ball_radius: Params::BALL_RADIUS,
            launch: LaunchStrategy::default(),
            collision_mode: CollisionMode::default(),
            release_mode: ReleaseMode::default(),
            tick_rate: Params::TICK_RATE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collision_mode(mut self, mode: CollisionMode) -> Self {
        self.collision_mode = mode;
        self
    }

    pub fn with_launch(mut self, launch: LaunchStrategy) -> Self {
        self.launch = launch;
        self
    }

    pub fn with_release_mode(mut self, mode: ReleaseMode) -> Self {
        self.release_mode = mode;
        self
    }

    /// Get the fixed X position (left edge) of a paddle
    pub fn paddle_x(&self, side: crate::Side) -> f32 {
        match side {
            crate::Side::Left => self.paddle_margin,
            crate::Side::Right => self.board.width - self.paddle_width - self.paddle_margin,
        }
    }

    /// Y position (top edge) of a paddle centred on the board
    pub fn paddle_center_y(&self) -> f32 {
        (self.board.height / 2.0).floor() - (self.paddle_height / 2.0).floor()
    }
}
