use crate::{GameState, Phase, RolledFaces};
use rand::Rng;
use thiserror::Error;

/// Describes the reason why the dice could not be [rolled](GameState::roll_dice).
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum RollError {
    /// Attempting to roll outside of a rolling phase.
    #[error("cannot roll during {phase}")]
    NotRolling {
        /// The phase of the game.
        phase: Phase,
    },
}

impl GameState {
    /// Replaces the dice with a new roll showing `faces`, clears the pending choice of dice,
    /// and lets the current player choose first as the active player.
    ///
    /// # Errors
    ///
    /// * [RollError::NotRolling] Attempting to roll outside of a rolling phase.
    pub fn roll_dice(&mut self, faces: RolledFaces) -> Result<(), RollError> {
        let Phase::Rolling(actor) = self.phase else {
            return Err(RollError::NotRolling { phase: self.phase });
        };

        self.dice = faces.into_dice(&mut self.next_die_id);
        self.clear_selection();
        self.active_player = self.current_player;
        log::debug!("player {} rolled {:?}", self.current_player, faces);
        self.enter(Phase::ActiveSelection(actor));
        Ok(())
    }

    /// [Rolls](GameState::roll_dice) [random faces](RolledFaces::random).
    ///
    /// # Errors
    ///
    /// The same as [GameState::roll_dice].
    pub fn roll_random_dice<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), RollError> {
        self.roll_dice(RolledFaces::random(rng))
    }
}
