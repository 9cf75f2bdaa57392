//! Match State Machine
//!
//! Governs whether the per-tick physics runs.

/// Match states
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchState {
    /// Ball parked at the centre, waiting for a launch
    #[default]
    Idle,
    /// Full tick processing
    Playing,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    Launch,
    Restart,
    Goal,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: MatchState,
    pub to_state: MatchState,
    pub action: MatchAction,
}

/// Match Finite State Machine
#[derive(Debug, Clone, Default)]
pub struct MatchFsm {
    state: MatchState,
}

impl MatchFsm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: MatchAction) -> TransitionResult {
        let from_state = self.state;

        match self.get_next_state(action) {
            Some(next_state) => {
                self.state = next_state;
                TransitionResult {
                    success: true,
                    from_state,
                    to_state: next_state,
                    action,
                }
            }
            None => {
                log::debug!("Ignoring {:?} while {:?}", action, from_state);
                TransitionResult {
                    success: false,
                    from_state,
                    to_state: from_state,
                    action,
                }
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: MatchAction) -> Option<MatchState> {
        match (self.state, action) {
            (MatchState::Idle, MatchAction::Launch) => Some(MatchState::Playing),
            (MatchState::Playing, MatchAction::Restart) => Some(MatchState::Idle),
            (MatchState::Playing, MatchAction::Goal) => Some(MatchState::Idle),

            // Invalid transition
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state == MatchState::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = MatchFsm::new();
        assert_eq!(fsm.state(), MatchState::Idle);
        assert!(!fsm.is_playing());
    }

    #[test]
    fn test_launch_starts_play() {
        let mut fsm = MatchFsm::new();
        let result = fsm.transition(MatchAction::Launch);
        assert!(result.success);
        assert_eq!(result.from_state, MatchState::Idle);
        assert_eq!(result.to_state, MatchState::Playing);
        assert!(fsm.is_playing());
    }

    #[test]
    fn test_launch_ignored_while_playing() {
        let mut fsm = MatchFsm::new();
        fsm.transition(MatchAction::Launch);
        let result = fsm.transition(MatchAction::Launch);
        assert!(!result.success);
        assert_eq!(fsm.state(), MatchState::Playing);
    }

    #[test]
    fn test_restart_and_goal_only_while_playing() {
        let mut fsm = MatchFsm::new();
        assert!(!fsm.transition(MatchAction::Restart).success);
        assert!(!fsm.transition(MatchAction::Goal).success);
        assert_eq!(fsm.state(), MatchState::Idle);

        fsm.transition(MatchAction::Launch);
        assert!(fsm.transition(MatchAction::Restart).success);
        assert_eq!(fsm.state(), MatchState::Idle);

        fsm.transition(MatchAction::Launch);
        assert!(fsm.transition(MatchAction::Goal).success);
        assert_eq!(fsm.state(), MatchState::Idle);
    }
}
