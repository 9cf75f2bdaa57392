use crate::{Ball, Paddle};
use hecs::World;

/// Step each paddle along its motion and keep it on the board
pub fn move_paddles(world: &mut World) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.advance();
        paddle.clamp();
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.advance();
    }
}

/// Put the ball and both paddles back in the starting layout
pub fn reset_layout(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset_to_center();
    }
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.reset_to_center();
    }
}
