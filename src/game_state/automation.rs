use super::propose_move::ResolvedMove;
use crate::{
    select_move, Actor, AiMove, GameState, MoveOutcome, Phase, RollError, SwitchError,
    AI_DELAY_MS, SWITCH_DELAY_MS,
};
use rand::Rng;
use std::time::Duration;
use thiserror::Error;

/// How long each automated step waits before it fires.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Timing {
    /// The wait before the computer rolls.
    pub ai_roll_delay: Duration,
    /// The wait before the computer decides a move.
    pub ai_move_delay: Duration,
    /// The pause between one player finishing and the next player starting.
    pub switch_delay: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            ai_roll_delay: Duration::from_millis(AI_DELAY_MS),
            ai_move_delay: Duration::from_millis(AI_DELAY_MS),
            switch_delay: Duration::from_millis(SWITCH_DELAY_MS),
        }
    }
}

impl Timing {
    /// Every step fires without waiting.
    pub fn immediate() -> Self {
        Self {
            ai_roll_delay: Duration::ZERO,
            ai_move_delay: Duration::ZERO,
            switch_delay: Duration::ZERO,
        }
    }
}

/// Identifies the phase an [automation](Automation) was scheduled for. A ticket only fires
/// while the game and the number of accepted transitions are unchanged.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Ticket {
    /// The [game](GameState::game_id) the ticket belongs to.
    pub game_id: u64,
    /// The [epoch](GameState::epoch) the ticket was issued at.
    pub epoch: u64,
}

/// Describes which step fires.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum AutomationKind {
    /// The computer rolls.
    AiRoll,
    /// The computer decides a move or skips.
    AiMove,
    /// The pause between two players ends.
    CompletePlayerSwitch,
}

/// The single timer the current phase wants.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Automation {
    /// The step which fires.
    pub kind: AutomationKind,
    /// How long to wait before [firing](GameState::fire).
    pub delay: Duration,
    /// The ticket to pass to [fire](GameState::fire).
    pub ticket: Ticket,
}

/// What a fired [automation](Automation) did.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum AutomationOutcome {
    /// The computer rolled.
    Rolled,
    /// The computer made a move.
    Moved(MoveOutcome),
    /// The computer found no move and skipped.
    Skipped,
    /// The next player started.
    Switched,
}

/// Describes the reason why an [automation](Automation) could not fire.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum AutomationError {
    /// Attempting to fire a ticket issued for another game or an earlier phase.
    #[error("ticket {ticket:?} is stale, the game is at {current:?}")]
    StaleTicket {
        /// The ticket which was fired.
        ticket: Ticket,
        /// The ticket of the game now.
        current: Ticket,
    },
    /// Attempting to fire during a phase where a person acts or the game is over.
    #[error("nothing is automated during {phase}")]
    NotAutomated {
        /// The phase of the game.
        phase: Phase,
    },
    /// The computer could not roll.
    #[error(transparent)]
    Roll(#[from] RollError),
    /// The switch could not complete.
    #[error(transparent)]
    Switch(#[from] SwitchError),
}

impl GameState {
    /// # Returns
    ///
    /// The ticket of the game as it is now.
    pub fn ticket(&self) -> Ticket {
        Ticket {
            game_id: self.game_id,
            epoch: self.epoch,
        }
    }

    /// # Returns
    ///
    /// The [automation](Automation) the current phase waits for, or [None] when a person acts
    /// or the game is over.
    pub fn pending_automation(&self, timing: &Timing) -> Option<Automation> {
        let (kind, delay) = match self.phase {
            Phase::Rolling(Actor::Ai) => (AutomationKind::AiRoll, timing.ai_roll_delay),
            Phase::ActiveSelection(Actor::Ai) | Phase::PassiveSelection(Actor::Ai) => {
                (AutomationKind::AiMove, timing.ai_move_delay)
            }
            Phase::PlayerSwitching { .. } => {
                (AutomationKind::CompletePlayerSwitch, timing.switch_delay)
            }
            _ => return None,
        };

        Some(Automation {
            kind,
            delay,
            ticket: self.ticket(),
        })
    }

    /// Fires the [automation](Automation) issued with `ticket`. The computer rolls with `rng`.
    ///
    /// # Errors
    ///
    /// * [AutomationError::StaleTicket] Attempting to fire a ticket issued for another game or
    /// an earlier phase. Nothing changes.
    /// * [AutomationError::NotAutomated] Attempting to fire during a phase where a person acts
    /// or the game is over.
    pub fn fire<R: Rng + ?Sized>(
        &mut self,
        ticket: Ticket,
        rng: &mut R,
    ) -> Result<AutomationOutcome, AutomationError> {
        let current = self.ticket();
        if ticket != current {
            log::warn!("ignored stale ticket {:?}, game is at {:?}", ticket, current);
            return Err(AutomationError::StaleTicket { ticket, current });
        }

        match self.phase {
            Phase::Rolling(Actor::Ai) => {
                self.roll_random_dice(rng)?;
                Ok(AutomationOutcome::Rolled)
            }
            Phase::ActiveSelection(Actor::Ai) | Phase::PassiveSelection(Actor::Ai) => {
                Ok(match self.ai_move() {
                    Some(outcome) => AutomationOutcome::Moved(outcome),
                    None => AutomationOutcome::Skipped,
                })
            }
            Phase::PlayerSwitching { .. } => {
                self.complete_player_switch()?;
                Ok(AutomationOutcome::Switched)
            }
            phase => Err(AutomationError::NotAutomated { phase }),
        }
    }

    /// Lets the computer choose dice and squares for the current player through the same
    /// checks as a person. When no move is found or the move is rejected, the turn is skipped.
    ///
    /// # Returns
    ///
    /// The [outcome](MoveOutcome) of the move, or [None] if the turn was skipped.
    pub(crate) fn ai_move(&mut self) -> Option<MoveOutcome> {
        let turn = self.phase.turn()?;

        if let Some(decision) = select_move(self.current(), &self.dice) {
            log::debug!(
                "player {} chose {} {:?} scoring {}",
                self.current_player,
                decision.color,
                decision.squares,
                decision.score
            );
            let selection = (self.selected_dice, self.selected_from_joker);
            match self.resolve_decision(&decision) {
                Some(resolved) if resolved.color == decision.color => {
                    return Some(self.commit_move(turn, resolved));
                }
                _ => {
                    log::warn!(
                        "player {} could not make the chosen move",
                        self.current_player
                    );
                    (self.selected_dice, self.selected_from_joker) = selection;
                }
            }
        }

        self.pass_turn(turn);
        None
    }

    fn resolve_decision(&mut self, decision: &AiMove) -> Option<ResolvedMove> {
        self.check_die(decision.color_die).ok()?;
        self.choose_die(decision.color_die);
        self.check_die(decision.number_die).ok()?;
        self.choose_die(decision.number_die);
        self.resolve_move(&decision.squares).ok()
    }
}
