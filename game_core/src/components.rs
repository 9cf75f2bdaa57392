use crate::{Board, Config, GameRng, LaunchStrategy};
use glam::Vec2;

/// Which end of the board a paddle (and its player) defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,  // Player 1
    Right, // Player 2
}

impl Side {
    /// 1-based player number shown to humans
    pub fn player_number(self) -> u8 {
        match self {
            Side::Left => 1,
            Side::Right => 2,
        }
    }
}

/// Requested paddle direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Stopped,
}

/// Current paddle motion state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Motion {
    #[default]
    Idle,
    MovingUp,
    MovingDown,
}

impl From<Direction> for Motion {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => Motion::MovingUp,
            Direction::Down => Motion::MovingDown,
            Direction::Stopped => Motion::Idle,
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // Left edge, fixed after construction
    pub y: f32, // Top edge
    pub width: f32,
    pub height: f32,
    pub motion: Motion,
    step: f32,
    board: Board,
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32, size: Vec2, step: f32, board: Board) -> Self {
        Self {
            side,
            x,
            y,
            width: size.x,
            height: size.y,
            motion: Motion::Idle,
            step,
            board,
        }
    }

    /// Paddle in its starting spot for `side`
    pub fn from_config(side: Side, config: &Config) -> Self {
        Self::new(
            side,
            config.paddle_x(side),
            config.paddle_center_y(),
            Vec2::new(config.paddle_width, config.paddle_height),
            config.paddle_step,
            config.board,
        )
    }

    pub fn set_motion(&mut self, dir: Direction) {
        self.motion = dir.into();
    }

    /// Move one step in the current direction
    pub fn advance(&mut self) {
        match self.motion {
            Motion::MovingUp => self.y -= self.step,
            Motion::MovingDown => self.y += self.step,
            Motion::Idle => {}
        }
    }

    /// Keep the paddle fully on the board
    pub fn clamp(&mut self) {
        if self.y <= 0.0 {
            self.y = 0.0;
        }
        if self.y + self.height >= self.board.height {
            self.y = self.board.height - self.height;
        }
    }

    pub fn reset_to_center(&mut self) {
        self.y = (self.board.height / 2.0).floor() - (self.height / 2.0).floor();
        self.motion = Motion::Idle;
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // Centre
    pub vel: Vec2, // Units per tick
    pub radius: f32,
    board: Board,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32, board: Board) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            board,
        }
    }

    /// Stationary ball at the board centre
    pub fn at_center(radius: f32, board: Board) -> Self {
        Self::new(board.center(), radius, board)
    }

    /// Give the ball its starting velocity for a round
    pub fn launch(&mut self, strategy: LaunchStrategy, rng: &mut GameRng) {
        self.vel = match strategy {
            LaunchStrategy::Fixed(vel) => vel,
            LaunchStrategy::Randomized { dx, dy } => {
                Vec2::new(rng.signed_in(dx), rng.signed_in(dy))
            }
        };
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Bounce off a top/bottom wall
    pub fn reflect_vertical(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Bounce off a paddle
    pub fn reflect_horizontal(&mut self) {
        self.vel.x = -self.vel.x;
    }

    pub fn reset_to_center(&mut self) {
        self.pos = self.board.center();
        self.vel = Vec2::ZERO;
    }

    pub fn is_moving(&self) -> bool {
        self.vel != Vec2::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn left_paddle() -> Paddle {
        Paddle::from_config(Side::Left, &Config::new())
    }

    #[test]
    fn test_paddle_starts_centered_and_idle() {
        let paddle = left_paddle();
        assert_eq!(paddle.x, 15.0);
        assert_eq!(paddle.y, 190.0);
        assert_eq!(paddle.motion, Motion::Idle);
    }

    #[test]
    fn test_paddle_advance_follows_motion() {
        let mut paddle = left_paddle();
        paddle.set_motion(Direction::Up);
        paddle.advance();
        assert_eq!(paddle.y, 180.0, "Moving up should subtract one step");

        paddle.set_motion(Direction::Down);
        paddle.advance();
        paddle.advance();
        assert_eq!(paddle.y, 200.0, "Moving down should add one step per tick");

        paddle.set_motion(Direction::Stopped);
        paddle.advance();
        assert_eq!(paddle.y, 200.0, "Stopped paddle should not move");
    }

    #[test]
    fn test_paddle_never_leaves_board() {
        let mut paddle = left_paddle();
        let max_y = paddle.board.height - paddle.height;
        let pattern = [Direction::Up, Direction::Down, Direction::Stopped];
        for i in 0..200 {
            // Long runs in each direction so both edges get hit
            paddle.set_motion(pattern[(i / 40) % 3]);
            paddle.advance();
            paddle.clamp();
            assert!(
                paddle.y >= 0.0 && paddle.y <= max_y,
                "Paddle y {} out of bounds on tick {}",
                paddle.y,
                i
            );
        }
    }

    #[test]
    fn test_paddle_clamp_is_idempotent() {
        for start in [-55.0, 0.0, 190.0, 380.0, 470.0] {
            let mut once = left_paddle();
            once.y = start;
            once.clamp();
            let mut twice = once;
            twice.clamp();
            assert_eq!(once.y, twice.y, "Clamping twice from {}", start);
        }
    }

    #[test]
    fn test_paddle_reset_to_center() {
        let mut paddle = left_paddle();
        paddle.y = 3.0;
        paddle.set_motion(Direction::Down);
        paddle.reset_to_center();
        assert_eq!(paddle.y, 190.0);
        assert_eq!(paddle.motion, Motion::Idle);
    }

    #[test]
    fn test_ball_launch_fixed() {
        let mut ball = Ball::at_center(12.0, Board::default());
        let mut rng = GameRng::default();
        assert!(!ball.is_moving());
        ball.launch(LaunchStrategy::default(), &mut rng);
        assert_eq!(ball.vel, Vec2::new(15.0, 5.0));
    }

    #[test]
    fn test_ball_launch_randomized_within_range() {
        let strategy = LaunchStrategy::Randomized {
            dx: (10.0, 20.0),
            dy: (2.0, 8.0),
        };
        let mut rng = GameRng::new(7);
        for _ in 0..50 {
            let mut ball = Ball::at_center(12.0, Board::default());
            ball.launch(strategy, &mut rng);
            assert!((10.0..=20.0).contains(&ball.vel.x.abs()), "dx {}", ball.vel.x);
            assert!((2.0..=8.0).contains(&ball.vel.y.abs()), "dy {}", ball.vel.y);
        }
    }

    #[test]
    fn test_ball_launch_randomized_is_reproducible() {
        let strategy = LaunchStrategy::Randomized {
            dx: (10.0, 20.0),
            dy: (2.0, 8.0),
        };
        let mut a = Ball::at_center(12.0, Board::default());
        let mut b = a;
        a.launch(strategy, &mut GameRng::new(99));
        b.launch(strategy, &mut GameRng::new(99));
        assert_eq!(a.vel, b.vel, "Same seed should give the same launch");
    }

    #[test]
    fn test_ball_reflections() {
        let mut ball = Ball::at_center(12.0, Board::default());
        ball.vel = Vec2::new(15.0, 5.0);
        ball.reflect_vertical();
        assert_eq!(ball.vel, Vec2::new(15.0, -5.0));
        ball.reflect_horizontal();
        assert_eq!(ball.vel, Vec2::new(-15.0, -5.0));
    }

    #[test]
    fn test_ball_reset_from_any_state() {
        let board = Board::default();
        for (pos, vel) in [
            (Vec2::new(-40.0, 3.0), Vec2::new(-15.0, 5.0)),
            (Vec2::new(950.0, 499.0), Vec2::new(15.0, -5.0)),
            (Vec2::new(450.0, 250.0), Vec2::ZERO),
        ] {
            let mut ball = Ball::new(pos, 12.0, board);
            ball.vel = vel;
            ball.reset_to_center();
            assert_eq!(ball.pos, Vec2::new(450.0, 250.0));
            assert_eq!(ball.vel, Vec2::ZERO);
        }
    }

    #[test]
    fn test_ball_advance_has_no_bounds_check() {
        let mut ball = Ball::new(Vec2::new(5.0, 250.0), 12.0, Board::default());
        ball.vel = Vec2::new(-15.0, 0.0);
        ball.advance();
        assert_eq!(ball.pos, Vec2::new(-10.0, 250.0));
    }
}
