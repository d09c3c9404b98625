use crate::runtime::{Input, Participant};
use crate::{GameEvent, GameState, RolledFaces};
use futures::future;
use itertools::Itertools;
use rand::Rng;

/// It repeatedly asks the current player for an input, and if the input is rejected, it tells
/// the player about the error and asks again. If the input is applied, stops asking.
///
/// Calls [Participant::next_input] for an input. [Rolls](Input::Roll) get
/// [random faces](RolledFaces::random) from `rng`. Applies the input as a
/// [GameEvent] and, if the input is rejected, calls [Participant::update_rejection].
///
/// # Arguments
///
/// * `participants`: A vector of [Participant]s in seating order, one per player. Only
/// [run_game](crate::run_game) calls this after checking the seats.
/// * `state`: The current state of the game.
/// * `rng`: Rolls the dice.
///
/// # Errors
///
/// When the current player fails to send input or receive a rejection.
pub(crate) fn process_input<P, E, R>(
    participants: &[P],
    state: &mut GameState,
    rng: &mut R,
) -> Result<(), E>
where
    P: Participant<E>,
    R: Rng + ?Sized,
{
    let participant = &participants[state.current_player()];

    loop {
        let input = participant.next_input(&state.view())?;
        let event = match input.clone() {
            Input::Roll => GameEvent::Roll(RolledFaces::random(rng)),
            Input::SelectDie(die) => GameEvent::SelectDie(die),
            Input::ProposeMove(squares) => GameEvent::ProposeMove(squares),
            Input::Skip => GameEvent::Skip,
        };

        match state.apply(event) {
            Ok(()) => return Ok(()),
            Err(error) => {
                log::debug!("player {} sent {:?}: {}", state.current_player(), input, error);
                // cannot use map_err since E needs to be propagated here
                participant.update_rejection(&state.view(), input, error)?;
            }
        }
    }
}

/// Asynchronously sends the current state of the game to [Participant]s.
///
/// # Arguments
///
/// * `participants`: A vector of [Participant]s.
/// * `state`: The current state of the game.
///
/// # Errors
///
/// Accumulates all errors from [Participant::update_view] into a vector.
pub async fn send_updates<P, E>(participants: &[P], state: &GameState) -> Result<(), Vec<E>>
where
    P: Participant<E>,
{
    let view = state.view();
    let update_tasks = participants
        .iter()
        .map(|participant| participant.update_view(&view));

    let errors = future::join_all(update_tasks)
        .await
        .into_iter()
        .filter_map(Result::err)
        .collect_vec();
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(())
}
