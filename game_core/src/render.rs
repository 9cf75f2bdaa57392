//! Drawing surface contract and the frame layout.
//!
//! The core never touches a window or terminal; a frontend implements
//! [`Surface`] and the core tells it what to draw.

use crate::{Game, Params};
use glam::Vec2;

/// RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

pub const BLACK: Color = Color(0, 0, 0);
pub const WHITE: Color = Color(255, 255, 255);

/// Font request; surfaces map it to whatever they can actually show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    pub family: String,
    pub size: u16,
}

impl Font {
    pub fn new(family: &str, size: u16) -> Self {
        Self {
            family: family.to_string(),
            size,
        }
    }

    pub fn monospace(size: u16) -> Self {
        Self::new("monospace", size)
    }
}

/// Something produced by a surface that can later be blitted onto it
pub trait Drawable {
    /// Width in board units
    fn width(&self) -> f32;
    /// Height in board units
    fn height(&self) -> f32;
}

/// Drawing collaborator. All coordinates are board units.
pub trait Surface {
    type Text: Drawable;

    fn clear(&mut self, color: Color);
    fn draw_rect(&mut self, color: Color, x: f32, y: f32, w: f32, h: f32);
    fn draw_circle(&mut self, color: Color, x: f32, y: f32, r: f32);
    fn draw_line(&mut self, color: Color, from: Vec2, to: Vec2, thickness: f32);
    fn render_text(&mut self, text: &str, font: &Font, bold: bool, color: Color) -> Self::Text;
    fn blit(&mut self, drawable: &Self::Text, x: f32, y: f32);
    fn present(&mut self);
}

/// Draw the board, paddles, ball and scores. Presenting is up to the caller.
pub fn draw_frame<S: Surface>(game: &Game, surface: &mut S) {
    let board = game.config().board;

    surface.clear(BLACK);
    let mid = (board.width / 2.0).floor();
    surface.draw_line(
        WHITE,
        Vec2::new(mid, 0.0),
        Vec2::new(mid, board.height),
        Params::CENTER_LINE_THICKNESS,
    );

    for paddle in game.paddles() {
        surface.draw_rect(WHITE, paddle.x, paddle.y, paddle.width, paddle.height);
    }

    if let Some(ball) = game.ball() {
        surface.draw_circle(WHITE, ball.pos.x, ball.pos.y, ball.radius);
    }

    let score = game.score();
    score.left.display(surface);
    score.right.display(surface);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InputEvent, Key};
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Clear(Color),
        Rect(Color, f32, f32, f32, f32),
        Circle(Color, f32, f32, f32),
        Line(Color, Vec2, Vec2, f32),
        Text(String, Font, bool, Color),
        Blit(String, f32, f32),
        Present,
    }

    struct Label {
        text: String,
    }

    impl Drawable for Label {
        fn width(&self) -> f32 {
            // 48 units per glyph, like an 80px monospace face
            self.text.len() as f32 * 48.0
        }

        fn height(&self) -> f32 {
            80.0
        }
    }

    struct MockSurface {
        calls: RefCell<Vec<Call>>,
    }

    impl MockSurface {
        fn new() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    impl Surface for MockSurface {
        type Text = Label;

        fn clear(&mut self, color: Color) {
            self.calls.borrow_mut().push(Call::Clear(color));
        }

        fn draw_rect(&mut self, color: Color, x: f32, y: f32, w: f32, h: f32) {
            self.calls.borrow_mut().push(Call::Rect(color, x, y, w, h));
        }

        fn draw_circle(&mut self, color: Color, x: f32, y: f32, r: f32) {
            self.calls.borrow_mut().push(Call::Circle(color, x, y, r));
        }

        fn draw_line(&mut self, color: Color, from: Vec2, to: Vec2, thickness: f32) {
            self.calls
                .borrow_mut()
                .push(Call::Line(color, from, to, thickness));
        }

        fn render_text(&mut self, text: &str, font: &Font, bold: bool, color: Color) -> Label {
            self.calls
                .borrow_mut()
                .push(Call::Text(text.to_string(), font.clone(), bold, color));
            Label {
                text: text.to_string(),
            }
        }

        fn blit(&mut self, drawable: &Label, x: f32, y: f32) {
            self.calls
                .borrow_mut()
                .push(Call::Blit(drawable.text.clone(), x, y));
        }

        fn present(&mut self) {
            self.calls.borrow_mut().push(Call::Present);
        }
    }

    #[test]
    fn test_draw_frame_initial_layout() {
        let game = Game::default();
        let mut surface = MockSurface::new();

        draw_frame(&game, &mut surface);

        let font = Font::monospace(80);
        assert_eq!(
            surface.calls(),
            vec![
                Call::Clear(BLACK),
                Call::Line(WHITE, Vec2::new(450.0, 0.0), Vec2::new(450.0, 500.0), 5.0),
                Call::Rect(WHITE, 15.0, 190.0, 20.0, 120.0),
                Call::Rect(WHITE, 865.0, 190.0, 20.0, 120.0),
                Call::Circle(WHITE, 450.0, 250.0, 12.0),
                Call::Text("0".to_string(), font.clone(), true, WHITE),
                Call::Blit("0".to_string(), 201.0, 15.0),
                Call::Text("0".to_string(), font, true, WHITE),
                Call::Blit("0".to_string(), 651.0, 15.0),
            ]
        );
    }

    #[test]
    fn test_draw_frame_does_not_present() {
        let game = Game::default();
        let mut surface = MockSurface::new();

        draw_frame(&game, &mut surface);
        assert!(!surface.calls().contains(&Call::Present));

        surface.present();
        assert_eq!(surface.calls().last(), Some(&Call::Present));
    }

    #[test]
    fn test_score_label_stays_centred_on_anchor() {
        let mut game = Game::default();
        for _ in 0..10 {
            game.push_input(InputEvent::KeyDown(Key::Launch));
            game.process_inputs();
            // Fixed launch heads right; run until the goal
            while game.is_playing() {
                game.tick();
            }
        }
        assert_eq!(game.score().points(), (10, 0));

        let mut surface = MockSurface::new();
        game.score().left.display(&mut surface);

        let label = game.score().left.points.to_string();
        let width = label.len() as f32 * 48.0;
        let expected_x = 225.0 - (width / 2.0).floor();
        assert!(surface
            .calls()
            .contains(&Call::Blit(label, expected_x, 15.0)));
    }
}
