//! Match State Machine
//!
//! Playing until someone reaches the winning score, then a replay menu that
//! either starts a new match or ends the session.

/// Match states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsmState {
    Playing,
    GameOver,
    Terminated,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    GameOver,
    Replay,
    Quit,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    success: bool,
    from_state: FsmState,
    to_state: FsmState,
    action: GameAction,
}

impl TransitionResult {
    pub fn success(&self) -> bool {
        self.success
    }

    #[allow(clippy::wrong_self_convention)]
    pub fn from_state(&self) -> FsmState {
        self.from_state
    }

    pub fn to_state(&self) -> FsmState {
        self.to_state
    }

    pub fn action(&self) -> GameAction {
        self.action
    }
}

/// Match lengths offered by the replay menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchLength {
    BestOf3,
    #[default]
    BestOf5,
    BestOf7,
}

impl MatchLength {
    pub const ALL: [MatchLength; 3] = [
        MatchLength::BestOf3,
        MatchLength::BestOf5,
        MatchLength::BestOf7,
    ];

    /// Points needed to win
    pub fn target(self) -> u32 {
        match self {
            MatchLength::BestOf3 => 3,
            MatchLength::BestOf5 => 5,
            MatchLength::BestOf7 => 7,
        }
    }

    pub fn from_target(target: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|len| len.target() == target)
    }
}

/// A recognised selection on the game-over screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play(MatchLength),
    Quit,
}

impl MenuChoice {
    pub fn action(self) -> GameAction {
        match self {
            MenuChoice::Play(_) => GameAction::Replay,
            MenuChoice::Quit => GameAction::Quit,
        }
    }
}

/// Match Finite State Machine
#[derive(Debug, Clone)]
pub struct GameFsm {
    state: FsmState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: FsmState::Playing,
        }
    }

    /// Get current state
    pub fn state(&self) -> FsmState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: GameAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            log::debug!("Ignoring {:?} while {:?}", action, from_state);
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: GameAction) -> Option<FsmState> {
        match (self.state, action) {
            // From Playing
            (FsmState::Playing, GameAction::GameOver) => Some(FsmState::GameOver),
            (FsmState::Playing, GameAction::Quit) => Some(FsmState::Terminated),

            // From GameOver
            (FsmState::GameOver, GameAction::Replay) => Some(FsmState::Playing),
            (FsmState::GameOver, GameAction::Quit) => Some(FsmState::Terminated),

            // Terminated is final; everything else is invalid
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state == FsmState::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.state == FsmState::GameOver
    }

    pub fn is_terminated(&self) -> bool {
        self.state == FsmState::Terminated
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = GameFsm::new();
        assert_eq!(fsm.state(), FsmState::Playing);
    }

    #[test]
    fn test_valid_transition() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(GameAction::GameOver);
        assert!(result.success());
        assert_eq!(result.from_state(), FsmState::Playing);
        assert_eq!(result.to_state(), FsmState::GameOver);
        assert_eq!(fsm.state(), FsmState::GameOver);
    }

    #[test]
    fn test_invalid_transition() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(GameAction::Replay);
        assert!(!result.success());
        assert_eq!(result.to_state(), FsmState::Playing);
        assert_eq!(fsm.state(), FsmState::Playing);
    }

    #[test]
    fn test_replay_flow() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::GameOver);
        assert!(fsm.is_game_over());
        fsm.transition(GameAction::Replay);
        assert!(fsm.is_playing());
    }

    #[test]
    fn test_quit_from_menu() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::GameOver);
        fsm.transition(GameAction::Quit);
        assert!(fsm.is_terminated());
    }

    #[test]
    fn test_terminated_is_final() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Quit);
        assert!(!fsm.can_transition(GameAction::Replay));
        assert!(!fsm.can_transition(GameAction::GameOver));
        assert!(!fsm.can_transition(GameAction::Quit));
    }

    #[test]
    fn test_match_length_targets() {
        assert_eq!(MatchLength::BestOf3.target(), 3);
        assert_eq!(MatchLength::from_target(7), Some(MatchLength::BestOf7));
        assert_eq!(MatchLength::from_target(4), None);
        assert_eq!(MatchLength::default().target(), 5);
    }

    #[test]
    fn test_menu_choice_actions() {
        assert_eq!(
            MenuChoice::Play(MatchLength::BestOf5).action(),
            GameAction::Replay
        );
        assert_eq!(MenuChoice::Quit.action(), GameAction::Quit);
    }
}
