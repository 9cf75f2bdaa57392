use crate::{Direction, Key, Motion, Paddle, ReleaseMode};
use hecs::World;

/// Apply a pressed key to the paddle it steers. Non-paddle keys are ignored.
pub fn handle_key_down(world: &mut World, key: Key) {
    let Some((side, dir)) = key.paddle_control() else {
        return;
    };
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == side {
            paddle.set_motion(dir);
        }
    }
}

/// Apply a released key according to the release mode
pub fn handle_key_up(world: &mut World, key: Key, mode: ReleaseMode) {
    match mode {
        ReleaseMode::Legacy => {
            for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
                paddle.set_motion(Direction::Stopped);
            }
        }
        ReleaseMode::PerKey => {
            let Some((side, dir)) = key.paddle_control() else {
                return;
            };
            let released = Motion::from(dir);
            for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
                // Keep moving if the other direction key took over
                if paddle.side == side && paddle.motion == released {
                    paddle.set_motion(Direction::Stopped);
                }
            }
        }
    }
}
