use crate::render::{Drawable, Font, Surface, WHITE};
use crate::{Board, Params, Side};
use glam::Vec2;

/// One player's running score plus where it is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreTrack {
    pub player: Side,
    pub points: u32,
    pub anchor: Vec2, // Top-centre of the rendered label
}

impl ScoreTrack {
    pub fn new(player: Side, board: Board) -> Self {
        let quarter = (board.width / 4.0).floor();
        let anchor_x = match player {
            Side::Left => quarter,
            Side::Right => board.width - quarter,
        };
        Self {
            player,
            points: 0,
            anchor: Vec2::new(anchor_x, Params::SCORE_ANCHOR_Y),
        }
    }

    pub fn increment(&mut self) {
        self.points += 1;
    }

    pub fn reset(&mut self) {
        self.points = 0;
    }

    /// Draw the current points centred horizontally on the anchor
    pub fn display<S: Surface>(&self, surface: &mut S) {
        let font = Font::monospace(Params::SCORE_FONT_SIZE);
        let label = surface.render_text(&self.points.to_string(), &font, true, WHITE);
        let x = self.anchor.x - (label.width() / 2.0).floor();
        surface.blit(&label, x, self.anchor.y);
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub left: ScoreTrack,  // Player 1
    pub right: ScoreTrack, // Player 2
}

impl Score {
    pub fn new(board: Board) -> Self {
        Self {
            left: ScoreTrack::new(Side::Left, board),
            right: ScoreTrack::new(Side::Right, board),
        }
    }

    pub fn track(&self, side: Side) -> &ScoreTrack {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn track_mut(&mut self, side: Side) -> &mut ScoreTrack {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn reset(&mut self) {
        self.left.reset();
        self.right.reset();
    }

    /// Points as (left, right)
    pub fn points(&self) -> (u32, u32) {
        (self.left.points, self.right.points)
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::new(Board::default())
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Magnitude from the inclusive range, with a random sign
    pub fn signed_in(&mut self, range: (f32, f32)) -> f32 {
        use rand::Rng;
        let (lo, hi) = if range.0 <= range.1 {
            range
        } else {
            (range.1, range.0)
        };
        let magnitude = self.0.gen_range(lo..=hi);
        if self.0.gen_bool(0.5) {
            magnitude
        } else {
            -magnitude
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    pub fn goal(&self) -> bool {
        self.left_scored || self.right_scored
    }
}

/// Logical game keys, independent of any keyboard layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Launch,
    Restart,
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
    Other,
}

impl Key {
    /// Paddle and direction a key steers, if any
    pub fn paddle_control(self) -> Option<(Side, crate::Direction)> {
        use crate::Direction;
        match self {
            Key::LeftUp => Some((Side::Left, Direction::Up)),
            Key::LeftDown => Some((Side::Left, Direction::Down)),
            Key::RightUp => Some((Side::Right, Direction::Up)),
            Key::RightDown => Some((Side::Right, Direction::Down)),
            _ => None,
        }
    }
}

/// Input as delivered by a frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

/// Input events waiting for the next tick
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Take every queued event in arrival order
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }
}
