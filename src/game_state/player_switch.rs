use crate::{Actor, GameState, Phase, Turn};
use thiserror::Error;

/// Describes the reason why the [switch](GameState::complete_player_switch) could not
/// complete.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum SwitchError {
    /// Attempting to complete a switch when players are not switching.
    #[error("cannot complete a switch during {phase}")]
    NotSwitching {
        /// The phase of the game.
        phase: Phase,
    },
}

impl GameState {
    /// Ends the pause between two players and hands the roll to the next one.
    ///
    /// After the active player, every other player in seating order uses the same roll as a
    /// passive player. After the last passive player, the next player in seating order becomes
    /// the active player and rolls. A player alone at the table rolls again.
    ///
    /// # Errors
    ///
    /// * [SwitchError::NotSwitching] Attempting to complete a switch when players are not
    /// switching.
    pub fn complete_player_switch(&mut self) -> Result<(), SwitchError> {
        let Phase::PlayerSwitching { last } = self.phase else {
            return Err(SwitchError::NotSwitching { phase: self.phase });
        };

        let players = self.players.len();
        let next = match last {
            Turn::Active => (self.active_player + 1) % players,
            Turn::Passive => (self.current_player + 1) % players,
        };

        if next == self.active_player {
            if last == Turn::Passive {
                self.active_player = (self.active_player + 1) % players;
            }
            self.current_player = self.active_player;
            self.dice.clear();
            self.clear_selection();
            self.enter(Phase::Rolling(self.actor_of(self.active_player)));
        } else {
            self.current_player = next;
            self.clear_selection();
            self.enter(Phase::PassiveSelection(self.actor_of(next)));
        }
        Ok(())
    }

    fn actor_of(&self, player: usize) -> Actor {
        Actor::of(self.players[player].is_ai)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_player_switch_active_to_passive() {
        let mut state = GameState::human_and_ai();
        *state.mut_phase() = Phase::PlayerSwitching { last: Turn::Active };

        assert_eq!(Ok(()), state.complete_player_switch());

        assert_eq!(Phase::PassiveSelection(Actor::Ai), state.phase());
        assert_eq!(1, state.current_player());
        assert_eq!(0, state.active_player());
    }

    #[test]
    fn complete_player_switch_round_over() {
        let mut state = GameState::human_and_ai();
        state.roll_random_dice(&mut rand::thread_rng()).unwrap();
        *state.mut_current_player() = 1;
        *state.mut_phase() = Phase::PlayerSwitching {
            last: Turn::Passive,
        };

        assert_eq!(Ok(()), state.complete_player_switch());

        assert_eq!(Phase::Rolling(Actor::Ai), state.phase());
        assert_eq!(1, state.current_player());
        assert_eq!(1, state.active_player());
        assert!(state.dice().is_empty());
    }

    #[test]
    fn complete_player_switch_passive_to_passive() {
        let mut state = GameState::fixture(&[("A", false), ("B", false), ("C", false)]);
        *state.mut_active_player() = 2;
        *state.mut_current_player() = 0;
        *state.mut_phase() = Phase::PlayerSwitching {
            last: Turn::Passive,
        };

        assert_eq!(Ok(()), state.complete_player_switch());
        assert_eq!(Phase::PassiveSelection(Actor::Human), state.phase());
        assert_eq!(1, state.current_player());

        *state.mut_phase() = Phase::PlayerSwitching {
            last: Turn::Passive,
        };
        assert_eq!(Ok(()), state.complete_player_switch());
        assert_eq!(Phase::Rolling(Actor::Human), state.phase());
        assert_eq!(0, state.current_player());
        assert_eq!(0, state.active_player());
    }

    #[test]
    fn complete_player_switch_single_player() {
        let mut state = GameState::fixture(&[("Solo", false)]);
        state.roll_random_dice(&mut rand::thread_rng()).unwrap();
        state.skip_turn().unwrap();

        assert_eq!(Ok(()), state.complete_player_switch());

        assert_eq!(Phase::Rolling(Actor::Human), state.phase());
        assert_eq!(0, state.current_player());
        assert_eq!(0, state.active_player());
    }

    #[test]
    fn complete_player_switch_wrong_phase() {
        let mut state = GameState::two_humans();
        let before = state.clone();

        assert_eq!(
            Err(SwitchError::NotSwitching {
                phase: Phase::Rolling(Actor::Human)
            }),
            state.complete_player_switch()
        );
        assert_eq!(before, state);
    }

    #[test]
    fn full_round_two_players() {
        let mut state = GameState::two_humans();
        let mut rng = rand::thread_rng();

        state.roll_random_dice(&mut rng).unwrap();
        state.skip_turn().unwrap();
        state.complete_player_switch().unwrap();
        assert_eq!(Phase::PassiveSelection(Actor::Human), state.phase());
        assert_eq!((1, 0), (state.current_player(), state.active_player()));

        state.skip_turn().unwrap();
        state.complete_player_switch().unwrap();
        assert_eq!(Phase::Rolling(Actor::Human), state.phase());
        assert_eq!((1, 1), (state.current_player(), state.active_player()));

        state.roll_random_dice(&mut rng).unwrap();
        state.skip_turn().unwrap();
        state.complete_player_switch().unwrap();
        assert_eq!((0, 1), (state.current_player(), state.active_player()));
    }
}
