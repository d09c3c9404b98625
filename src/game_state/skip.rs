use crate::{GameState, Phase, Turn};
use thiserror::Error;

/// Describes the reason why the turn could not be [skipped](GameState::skip_turn).
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum SkipError {
    /// Attempting to skip outside of a selection phase.
    #[error("cannot skip during {phase}")]
    NotSelection {
        /// The phase of the game.
        phase: Phase,
    },
}

impl GameState {
    /// Ends the current player's turn without crossing anything and pauses for the next
    /// player. The pending choice of dice is dropped.
    ///
    /// # Errors
    ///
    /// * [SkipError::NotSelection] Attempting to skip outside of a selection phase.
    pub fn skip_turn(&mut self) -> Result<(), SkipError> {
        let Some(turn) = self.phase.turn() else {
            return Err(SkipError::NotSelection { phase: self.phase });
        };

        self.pass_turn(turn);
        Ok(())
    }

    pub(crate) fn pass_turn(&mut self, last: Turn) {
        log::debug!("player {} skipped", self.current_player);
        self.clear_selection();
        self.enter(Phase::PlayerSwitching { last });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Actor, Color, ColorFace, NumberFace, SelectedDice};

    #[test]
    fn skip_turn_active() {
        let mut state = GameState::two_humans().with_roll(
            [ColorFace::Color(Color::Red); 3],
            [NumberFace::Number(2); 3],
        );
        let board = state.players()[0].board().clone();
        state.select_die(state.die_id(0)).unwrap();

        assert_eq!(Ok(()), state.skip_turn());

        assert_eq!(Phase::PlayerSwitching { last: Turn::Active }, state.phase());
        assert_eq!(SelectedDice::default(), state.selected_dice());
        assert_eq!(&board, state.players()[0].board());
        assert!(state.dice().iter().all(|die| !die.used));
    }

    #[test]
    fn skip_turn_passive_ai() {
        let mut state = GameState::two_humans();
        *state.mut_phase() = Phase::PassiveSelection(Actor::Ai);

        assert_eq!(Ok(()), state.skip_turn());
        assert_eq!(
            Phase::PlayerSwitching {
                last: Turn::Passive
            },
            state.phase()
        );
    }

    #[test]
    fn skip_turn_wrong_phase() {
        let mut state = GameState::two_humans();
        let before = state.clone();

        assert_eq!(
            Err(SkipError::NotSelection {
                phase: Phase::Rolling(Actor::Human)
            }),
            state.skip_turn()
        );
        assert_eq!(before, state);
    }
}
