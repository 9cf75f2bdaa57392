use crate::systems::reset_layout;
use crate::{Ball, CollisionDetector, Events, Score, Side};
use hecs::World;
use log::info;

/// Check if the ball left the board (scoring).
///
/// On a goal the scorer's track is incremented and the ball and both paddles
/// go back to the starting layout. Returns the side that scored.
pub fn check_scoring(
    world: &mut World,
    detector: &CollisionDetector,
    score: &mut Score,
    events: &mut Events,
) -> Option<Side> {
    let ball = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| *ball)?;

    // Right edge is checked first
    let scorer = if detector.ball_past_right_goal(&ball) {
        events.left_scored = true;
        Side::Left
    } else if detector.ball_past_left_goal(&ball) {
        events.right_scored = true;
        Side::Right
    } else {
        return None;
    };

    score.track_mut(scorer).increment();
    info!(
        "Goal for player {}! Score {} - {}",
        scorer.player_number(),
        score.left.points,
        score.right.points
    );

    reset_layout(world);
    Some(scorer)
}
