use crate::{Ball, CollisionDetector, Events, Paddle, Side};
use hecs::World;
use log::debug;

/// Reflect the ball off walls and paddles.
///
/// Checks run in a fixed order against the already-moved ball: walls, then the
/// left paddle, then the right paddle. Each check sees the velocity left by
/// the previous one.
pub fn check_collisions(world: &mut World, detector: &CollisionDetector, events: &mut Events) {
    // Collect paddle data first so the ball can be borrowed mutably
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.side == Side::Right);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if detector.ball_hits_wall(ball) {
            debug!("Wall collision at {:?}", ball.pos);
            ball.reflect_vertical();
            events.ball_hit_wall = true;
        }

        for paddle in &paddles {
            if detector.ball_hits_paddle(ball, paddle, paddle.side) {
                debug!(
                    "Collision with paddle {} at {:?}",
                    paddle.side.player_number(),
                    ball.pos
                );
                ball.reflect_horizontal();
                events.ball_hit_paddle = true;
            }
        }
    }
}
