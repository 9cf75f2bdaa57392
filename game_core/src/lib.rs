pub mod clock;
pub mod components;
pub mod config;
pub mod detector;
pub mod fsm;
pub mod game;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use clock::*;
pub use components::*;
pub use config::*;
pub use detector::*;
pub use fsm::*;
pub use game::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one tick of the deterministic Pong simulation.
///
/// Only meaningful while a round is in play. Returns the side that scored,
/// if the ball left the board this tick.
pub fn step(
    world: &mut World,
    detector: &CollisionDetector,
    score: &mut Score,
    events: &mut Events,
) -> Option<Side> {
    // Clear events at start of tick
    events.clear();

    // 1. Move ball, then paddles
    move_ball(world);
    move_paddles(world);

    // 2-4. Walls, left paddle, right paddle
    check_collisions(world, detector, events);

    // 5-6. Right goal, then left goal
    check_scoring(world, detector, score, events)
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    world.spawn((Paddle::from_config(side, config),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Ball::at_center(config.ball_radius, config.board),))
}
