use crate::{DieId, EventError, GameView, Squares};
use async_trait::async_trait;
pub use game_runtime::*;
use std::time::Duration;
use thiserror::Error;
pub use turn_runtime::*;

mod game_runtime;
mod turn_runtime;

/// An input from a person at one seat of the table.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Input {
    /// Roll the dice. The runtime chooses the faces.
    Roll,
    /// Select a die.
    SelectDie(DieId),
    /// Propose squares to cross.
    ProposeMove(Squares),
    /// Skip the turn.
    Skip,
}

/// Defines how the runtime talks to each seat of the table.
///
/// `next_input` blocks execution until getting input.
/// `update_rejection` blocks execution until updating output.
/// `update_view` may execute in parallel with other seats.
///
/// # Errors
///
/// The implementor of [Participant] is responsible for returning an error to prevent the runtime
/// from running indefinitely whether from no response or repeated invalid inputs. When a method
/// call fails, the runtime is stopped, and an error is returned and propagated out of the runtime
/// and back to the calling client code.
#[async_trait]
pub trait Participant<E> {
    /// When a person acts, gets an [Input] from the current player.
    fn next_input<'a>(&self, view: &'a GameView<'a>) -> Result<Input, E>;

    /// When an [Input] is rejected, updates the current player with the state of the game,
    /// their input, and the reason why their input could not be applied.
    fn update_rejection<'a>(
        &self,
        view: &'a GameView<'a>,
        input: Input,
        error: EventError,
    ) -> Result<(), E>;

    /// After every accepted transition, updates each player with the state of the game.
    async fn update_view<'a>(&self, view: &'a GameView<'a>) -> Result<(), E>;
}

/// Waits for [automations](crate::Automation) to come due.
#[async_trait]
pub trait Clock {
    /// Resolves after `duration` has passed.
    async fn sleep(&self, duration: Duration);
}

/// Describes the reason why the runtime stopped before the game was over.
#[derive(Debug, Error)]
pub enum RuntimeError<E> {
    /// The number of participants differs from the number of players.
    #[error("{participants} participants cannot sit at a table of {players} players")]
    SeatMismatch {
        /// The number of participants.
        participants: usize,
        /// The number of players in the game.
        players: usize,
    },
    /// The current player failed to send input or receive a rejection.
    #[error("the current player failed")]
    Participant(E),
    /// Some players failed to receive the state of the game.
    #[error("{} players failed to receive an update", .0.len())]
    Updates(Vec<E>),
}
