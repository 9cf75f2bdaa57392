//! Geometric collision queries.
//!
//! Nothing here mutates state; the collision and scoring systems decide what
//! to do with the answers.

use crate::{Ball, Board, CollisionMode, Paddle, Side};

/// Stateless predicates over the ball, the paddles and the board edges
#[derive(Debug, Clone, Copy)]
pub struct CollisionDetector {
    board: Board,
    mode: CollisionMode,
}

impl CollisionDetector {
    pub fn new(board: Board, mode: CollisionMode) -> Self {
        Self { board, mode }
    }

    /// Ball touches the paddle guarding `side`
    pub fn ball_hits_paddle(&self, ball: &Ball, paddle: &Paddle, side: Side) -> bool {
        let r = ball.radius;

        // Vertical spans overlap?
        let overlaps_y = ball.pos.y + r > paddle.y && ball.pos.y - r < paddle.y + paddle.height;
        if !overlaps_y {
            return false;
        }

        // Reached the paddle's inner face?
        let touches_x = match side {
            Side::Left => ball.pos.x - r <= paddle.x + paddle.width,
            Side::Right => ball.pos.x + r >= paddle.x,
        };
        if !touches_x {
            return false;
        }

        match self.mode {
            CollisionMode::Legacy => true,
            CollisionMode::Corrected => match side {
                Side::Left => ball.vel.x < 0.0,
                Side::Right => ball.vel.x > 0.0,
            },
        }
    }

    /// Ball touches the top or bottom edge
    pub fn ball_hits_wall(&self, ball: &Ball) -> bool {
        let r = ball.radius;
        let top = ball.pos.y - r <= 0.0;
        let bottom = ball.pos.y + r >= self.board.height;

        match self.mode {
            CollisionMode::Legacy => top || bottom,
            CollisionMode::Corrected => (top && ball.vel.y < 0.0) || (bottom && ball.vel.y > 0.0),
        }
    }

    /// Ball fully crossed the left edge (player 2 scores)
    pub fn ball_past_left_goal(&self, ball: &Ball) -> bool {
        ball.pos.x + ball.radius <= 0.0
    }

    /// Ball fully crossed the right edge (player 1 scores)
    pub fn ball_past_right_goal(&self, ball: &Ball) -> bool {
        ball.pos.x - ball.radius >= self.board.width
    }
}
