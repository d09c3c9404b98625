use crate::{
    Actor, AutomationError, DieId, GameState, Phase, ProposeMoveError, RollError, RolledFaces,
    SelectDieError, SkipError, Squares, SwitchError,
};
use std::collections::HashSet;
use thiserror::Error;

/// An input to the game from a person, the computer, or a timer.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum GameEvent {
    /// A person [rolls](GameState::roll_dice).
    Roll(RolledFaces),
    /// A person [selects a die](GameState::select_die).
    SelectDie(DieId),
    /// A person [proposes a move](GameState::propose_move).
    ProposeMove(Squares),
    /// A person [skips](GameState::skip_turn).
    Skip,
    /// The pause between two players [ends](GameState::complete_player_switch).
    CompletePlayerSwitch,
    /// The computer [rolls](GameState::roll_dice).
    AiRoll(RolledFaces),
    /// The computer decides a move or skips.
    AiMove,
}

impl GameEvent {
    /// # Returns
    ///
    /// The [actor](Actor) who sends the event, or [None] for timer events.
    pub fn actor(&self) -> Option<Actor> {
        match self {
            GameEvent::Roll(_)
            | GameEvent::SelectDie(_)
            | GameEvent::ProposeMove(_)
            | GameEvent::Skip => Some(Actor::Human),
            GameEvent::AiRoll(_) | GameEvent::AiMove => Some(Actor::Ai),
            GameEvent::CompletePlayerSwitch => None,
        }
    }
}

/// Describes the reason why an [event](GameEvent) was rejected.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum EventError {
    /// A person acted during a phase where the computer acts.
    #[error("a person cannot act during {phase}")]
    HumanInAiPhase {
        /// The phase of the game.
        phase: Phase,
    },
    /// The computer acted during a phase where a person acts.
    #[error("the computer cannot act during {phase}")]
    AiInHumanPhase {
        /// The phase of the game.
        phase: Phase,
    },
    /// The roll was rejected.
    #[error(transparent)]
    Roll(#[from] RollError),
    /// The die selection was rejected.
    #[error("die selection rejected: {0:?}")]
    SelectDie(HashSet<SelectDieError>),
    /// The move was rejected.
    #[error("move rejected: {0:?}")]
    ProposeMove(HashSet<ProposeMoveError>),
    /// The skip was rejected.
    #[error(transparent)]
    Skip(#[from] SkipError),
    /// The switch was rejected.
    #[error(transparent)]
    Switch(#[from] SwitchError),
    /// The computer could not act.
    #[error(transparent)]
    Automation(#[from] AutomationError),
}

impl GameState {
    /// Applies the event with the transition it names. Events of a person are rejected in
    /// phases where the computer acts and events of the computer in phases where a person acts.
    ///
    /// # Errors
    ///
    /// The [EventError] wrapping the reason the transition was rejected. The state is
    /// unchanged.
    pub fn apply(&mut self, event: GameEvent) -> Result<(), EventError> {
        match (event.actor(), self.phase.actor()) {
            (Some(Actor::Human), Some(Actor::Ai)) => {
                return Err(EventError::HumanInAiPhase { phase: self.phase })
            }
            (Some(Actor::Ai), Some(Actor::Human)) => {
                return Err(EventError::AiInHumanPhase { phase: self.phase })
            }
            _ => {}
        }

        match event {
            GameEvent::Roll(faces) | GameEvent::AiRoll(faces) => self.roll_dice(faces)?,
            GameEvent::SelectDie(die) => self.select_die(die).map_err(EventError::SelectDie)?,
            GameEvent::ProposeMove(squares) => {
                self.propose_move(&squares)
                    .map_err(EventError::ProposeMove)?;
            }
            GameEvent::Skip => self.skip_turn()?,
            GameEvent::CompletePlayerSwitch => self.complete_player_switch()?,
            GameEvent::AiMove => {
                if self.phase.turn().is_none() {
                    return Err(AutomationError::NotAutomated { phase: self.phase }.into());
                }
                self.ai_move();
            }
        }
        Ok(())
    }
}

/// # Returns
///
/// The state after applying `event` to a copy of `state`, which is never mutated.
///
/// # Errors
///
/// The same as [GameState::apply].
pub fn transition(state: &GameState, event: GameEvent) -> Result<GameState, EventError> {
    let mut next = state.clone();
    next.apply(event)?;
    Ok(next)
}
