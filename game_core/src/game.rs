use crate::systems::{handle_key_down, handle_key_up, reset_layout};
use crate::{
    create_ball, create_paddle, step, Ball, CollisionDetector, Config, Events, GameRng,
    InputEvent, InputQueue, Key, MatchAction, MatchFsm, MatchState, Paddle, Score, Side,
    TransitionResult,
};
use hecs::World;
use log::{info, trace};

/// Whether the loop should keep going after processing input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A local two-player match: the world, its resources and the match state
pub struct Game {
    world: World,
    config: Config,
    detector: CollisionDetector,
    score: Score,
    events: Events,
    input: InputQueue,
    rng: GameRng,
    fsm: MatchFsm,
    ticks: u64,
}

impl Game {
    pub fn new(config: Config, seed: u64) -> Self {
        let mut world = World::new();

        // Create paddles
        create_paddle(&mut world, Side::Left, &config);
        create_paddle(&mut world, Side::Right, &config);

        // Create ball
        create_ball(&mut world, &config);

        Self {
            detector: CollisionDetector::new(config.board, config.collision_mode),
            score: Score::new(config.board),
            world,
            config,
            events: Events::new(),
            input: InputQueue::new(),
            rng: GameRng::new(seed),
            fsm: MatchFsm::new(),
            ticks: 0,
        }
    }

    /// Queue an input event for the next `process_inputs`
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Drain every queued input, in order, before physics runs
    pub fn process_inputs(&mut self) -> Flow {
        for event in self.input.drain() {
            match event {
                InputEvent::Quit => {
                    info!("Quit requested after {} ticks", self.ticks);
                    return Flow::Quit;
                }
                InputEvent::KeyDown(Key::Launch) => {
                    self.launch();
                }
                InputEvent::KeyDown(Key::Restart) => {
                    self.restart();
                }
                InputEvent::KeyDown(key) => handle_key_down(&mut self.world, key),
                InputEvent::KeyUp(key) => {
                    handle_key_up(&mut self.world, key, self.config.release_mode)
                }
            }
        }
        Flow::Continue
    }

    /// Start a round. Only takes effect while idle.
    pub fn launch(&mut self) -> TransitionResult {
        let result = self.fsm.transition(MatchAction::Launch);
        if result.success {
            for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
                ball.launch(self.config.launch, &mut self.rng);
                info!("Ball launched with velocity {:?}", ball.vel);
            }
        }
        result
    }

    /// Wipe the scores and go back to the starting layout. Only takes effect
    /// while playing.
    pub fn restart(&mut self) -> TransitionResult {
        let result = self.fsm.transition(MatchAction::Restart);
        if result.success {
            self.score.reset();
            self.reset_round();
            info!("Match restarted");
        }
        result
    }

    /// Ball and both paddles back to the starting layout; scores are kept
    pub fn reset_round(&mut self) {
        reset_layout(&mut self.world);
    }

    /// Advance the match by one tick. Nothing moves while idle.
    pub fn tick(&mut self) -> Events {
        self.ticks += 1;

        if !self.fsm.is_playing() {
            self.events.clear();
            return self.events.clone();
        }

        if step(
            &mut self.world,
            &self.detector,
            &mut self.score,
            &mut self.events,
        )
        .is_some()
        {
            self.fsm.transition(MatchAction::Goal);
        }

        trace!(
            "Tick {}: ball {:?}, events {:?}",
            self.ticks,
            self.ball().map(|ball| ball.pos),
            self.events
        );
        self.events.clone()
    }

    /// Input then physics, in that order
    pub fn update(&mut self) -> Flow {
        if self.process_inputs() == Flow::Quit {
            return Flow::Quit;
        }
        self.tick();
        Flow::Continue
    }

    pub fn state(&self) -> MatchState {
        self.fsm.state()
    }

    pub fn is_playing(&self) -> bool {
        self.fsm.is_playing()
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| *paddle)
    }

    /// Both paddles, left first
    pub fn paddles(&self) -> Vec<Paddle> {
        [Side::Left, Side::Right]
            .into_iter()
            .filter_map(|side| self.paddle(side))
            .collect()
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Config::default(), 12345)
    }
}
