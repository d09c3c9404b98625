use crate::runtime::{process_input, send_updates, Clock, Participant, RuntimeError};
use crate::{GameState, Phase, Timing};
use rand::Rng;

/// Runs the game until it is over.
///
/// Before every step, [sends updates](send_updates) to every [Participant]. When the phase is
/// automated, waits on `clock` for the [pending automation](GameState::pending_automation) and
/// [fires](GameState::fire) it. Otherwise, asks the current player for input.
///
/// # Arguments
///
/// * `participants`: A vector of [Participant]s in seating order, one per player. Seats of
/// computer players only receive updates.
/// * `state`: The state of the game to continue from.
/// * `clock`: Waits for automations.
/// * `timing`: How long each automation waits.
/// * `rng`: Rolls the dice.
///
/// # Errors
///
/// * [RuntimeError::SeatMismatch] When the number of participants differs from the number of
/// players.
/// * [RuntimeError::Participant] When the current player fails to send input or receive a
/// rejection.
/// * [RuntimeError::Updates] When some players fail to receive an update.
///
/// # Returns
///
/// The state of the game once it is over.
pub async fn run_game<P, E, C, R>(
    participants: &[P],
    mut state: GameState,
    clock: &C,
    timing: &Timing,
    rng: &mut R,
) -> Result<GameState, RuntimeError<E>>
where
    P: Participant<E>,
    C: Clock,
    R: Rng + ?Sized,
{
    if participants.len() != state.players().len() {
        return Err(RuntimeError::SeatMismatch {
            participants: participants.len(),
            players: state.players().len(),
        });
    }

    loop {
        send_updates(participants, &state)
            .await
            .map_err(RuntimeError::Updates)?;
        if state.phase() == Phase::GameOver {
            return Ok(state);
        }

        match state.pending_automation(timing) {
            Some(automation) => {
                clock.sleep(automation.delay).await;
                match state.fire(automation.ticket, rng) {
                    Ok(outcome) => log::debug!("{:?} fired: {:?}", automation.kind, outcome),
                    Err(error) => log::warn!("{:?} did not fire: {}", automation.kind, error),
                }
            }
            None => process_input(participants, &mut state, rng).map_err(RuntimeError::Participant)?,
        }
    }
}
