use crate::{Actor, DieFace, DieId, DieKind, GameState, NumberFace, Phase};
use std::collections::HashSet;
use thiserror::Error;

/// Describes the reason why a [die could not be selected](GameState::select_die).
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum SelectDieError {
    /// Attempting to select a die outside of a selection phase of a person.
    #[error("cannot select a die during {phase}")]
    NotHumanSelection {
        /// The phase of the game.
        phase: Phase,
    },
    /// Attempting to select a die which is not in the current roll.
    #[error("{die} is not in the current roll")]
    UnknownDie {
        /// The id of the die.
        die: DieId,
    },
    /// Attempting to select a die which was already used this roll.
    #[error("{die} was already used")]
    AlreadyUsed {
        /// The id of the die.
        die: DieId,
    },
    /// Attempting to select a wild die when the pending choice would cost more jokers than
    /// the current player has.
    #[error("the choice needs {required} jokers but only {remaining} remain")]
    NotEnoughJokers {
        /// The number of jokers the pending choice would cost.
        required: usize,
        /// The number of jokers the current player has.
        remaining: usize,
    },
    /// Attempting to select a wild number die while another player is active.
    #[error("{die} is a wild number and only the active player may choose it")]
    PassiveWildNumber {
        /// The id of the die.
        die: DieId,
    },
}

impl GameState {
    /// Makes the die the pending choice of its [kind](DieKind). A pending die of the same
    /// kind is replaced and stays unused.
    ///
    /// # Errors
    ///
    /// * [SelectDieError::NotHumanSelection] Attempting to select a die outside of a selection
    /// phase of a person.
    /// * [SelectDieError::UnknownDie] Attempting to select a die which is not in the current
    /// roll.
    /// * [SelectDieError::AlreadyUsed] Attempting to select a die which was already used this
    /// roll.
    /// * [SelectDieError::NotEnoughJokers] Attempting to select a wild die when the pending
    /// choice would cost more jokers than the current player has.
    /// * [SelectDieError::PassiveWildNumber] Attempting to select a wild number die while another
    /// player is active.
    pub fn select_die(&mut self, die: DieId) -> Result<(), HashSet<SelectDieError>> {
        let mut errors = HashSet::new();
        if !matches!(
            self.phase,
            Phase::ActiveSelection(Actor::Human) | Phase::PassiveSelection(Actor::Human)
        ) {
            errors.insert(SelectDieError::NotHumanSelection { phase: self.phase });
        }
        if let Err(die_errors) = self.check_die(die) {
            errors.extend(die_errors);
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        self.choose_die(die);
        self.epoch += 1;
        Ok(())
    }

    /// Checks whether the die may become the pending choice of the current player.
    pub(crate) fn check_die(&self, die: DieId) -> Result<(), HashSet<SelectDieError>> {
        let Some(selected) = self.dice.iter().find(|candidate| candidate.id == die) else {
            return Err(HashSet::from([SelectDieError::UnknownDie { die }]));
        };

        let mut errors = HashSet::new();
        if selected.used {
            errors.insert(SelectDieError::AlreadyUsed { die });
        }
        if selected.face == DieFace::Number(NumberFace::Wild)
            && matches!(self.phase, Phase::PassiveSelection(_))
        {
            errors.insert(SelectDieError::PassiveWildNumber { die });
        }
        if selected.is_wild() {
            let other_wild = match selected.kind() {
                DieKind::Color => self.selected_from_joker.number,
                DieKind::Number => self.selected_from_joker.color,
            };
            let required = 1 + usize::from(other_wild);
            let remaining = self.current().jokers_remaining;
            if required > remaining {
                errors.insert(SelectDieError::NotEnoughJokers {
                    required,
                    remaining,
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Makes an already [checked](GameState::check_die) die the pending choice of its kind.
    pub(crate) fn choose_die(&mut self, die: DieId) {
        let Some(selected) = self.dice.iter().find(|candidate| candidate.id == die) else {
            return;
        };

        let wild = selected.is_wild();
        match selected.kind() {
            DieKind::Color => {
                self.selected_dice.color = Some(die);
                self.selected_from_joker.color = wild;
            }
            DieKind::Number => {
                self.selected_dice.number = Some(die);
                self.selected_from_joker.number = wild;
            }
        }
        log::debug!("player {} selected {}", self.current_player, die);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, ColorFace, JokerFlags, NumberFace, SelectedDice};
    use map_macro::hash_set;

    #[test]
    fn select_die_color_then_number() {
        let mut state = GameState::two_humans().with_roll(
            [
                ColorFace::Color(Color::Green),
                ColorFace::Color(Color::Blue),
                ColorFace::Wild,
            ],
            [
                NumberFace::Number(1),
                NumberFace::Number(2),
                NumberFace::Wild,
            ],
        );
        let color = state.die_id(0);
        let number = state.die_id(4);

        assert_eq!(Ok(()), state.select_die(color));
        assert_eq!(Ok(()), state.select_die(number));

        assert_eq!(
            SelectedDice {
                color: Some(color),
                number: Some(number)
            },
            state.selected_dice()
        );
        assert_eq!(JokerFlags::default(), state.selected_from_joker());
    }

    #[test]
    fn select_die_replaces_same_kind() {
        let mut state = GameState::two_humans().with_roll(
            [
                ColorFace::Color(Color::Green),
                ColorFace::Wild,
                ColorFace::Color(Color::Red),
            ],
            [NumberFace::Number(1); 3],
        );
        let wild = state.die_id(1);
        let red = state.die_id(2);

        state.select_die(wild).unwrap();
        assert!(state.selected_from_joker().color);

        state.select_die(red).unwrap();
        assert_eq!(Some(red), state.selected_dice().color);
        assert!(!state.selected_from_joker().color);
        assert!(state.dice().iter().all(|die| !die.used));
    }

    #[test]
    fn select_die_second_joker_rejected() {
        let mut state = GameState::two_humans().with_roll(
            [
                ColorFace::Wild,
                ColorFace::Color(Color::Green),
                ColorFace::Color(Color::Blue),
            ],
            [
                NumberFace::Wild,
                NumberFace::Number(1),
                NumberFace::Number(2),
            ],
        );
        state.mut_players()[0].jokers_remaining = 1;
        let wild_color = state.die_id(0);
        let wild_number = state.die_id(3);

        assert_eq!(Ok(()), state.select_die(wild_color));
        let before = state.clone();

        assert_eq!(
            Err(hash_set! {
                SelectDieError::NotEnoughJokers {
                    required: 2,
                    remaining: 1
                }
            }),
            state.select_die(wild_number)
        );
        assert_eq!(before, state);
    }

    #[test]
    fn select_die_no_jokers() {
        let mut state = GameState::two_humans().with_roll(
            [ColorFace::Wild; 3],
            [NumberFace::Number(3); 3],
        );
        state.mut_players()[0].jokers_remaining = 0;
        let wild = state.die_id(0);

        assert_eq!(
            Err(hash_set! {
                SelectDieError::NotEnoughJokers {
                    required: 1,
                    remaining: 0
                }
            }),
            state.select_die(wild)
        );
    }

    #[test]
    fn select_die_used_and_wrong_phase() {
        let mut state = GameState::two_humans().with_roll(
            [ColorFace::Color(Color::Green); 3],
            [NumberFace::Number(1); 3],
        );
        let die = state.die_id(0);
        state.mut_dice()[0].used = true;
        *state.mut_phase() = Phase::PassiveSelection(Actor::Ai);

        assert_eq!(
            Err(hash_set! {
                SelectDieError::NotHumanSelection {
                    phase: Phase::PassiveSelection(Actor::Ai)
                },
                SelectDieError::AlreadyUsed { die },
            }),
            state.select_die(die)
        );
    }

    #[test]
    fn select_die_unknown() {
        let mut state = GameState::two_humans().with_roll(
            [ColorFace::Color(Color::Green); 3],
            [NumberFace::Number(1); 3],
        );

        assert_eq!(
            Err(hash_set! {
                SelectDieError::UnknownDie { die: DieId(999) }
            }),
            state.select_die(DieId(999))
        );
    }

    #[test]
    fn select_die_passive_wild_number() {
        let mut state = GameState::two_humans().with_roll(
            [ColorFace::Color(Color::Green); 3],
            [
                NumberFace::Wild,
                NumberFace::Number(1),
                NumberFace::Number(2),
            ],
        );
        *state.mut_current_player() = 1;
        *state.mut_phase() = Phase::PassiveSelection(Actor::Human);
        let wild = state.die_id(3);
        let before = state.clone();

        assert_eq!(
            Err(hash_set! {
                SelectDieError::PassiveWildNumber { die: wild }
            }),
            state.select_die(wild)
        );
        assert_eq!(before, state);
        assert_eq!(JokerFlags::default(), state.selected_from_joker());
    }

    #[test]
    fn select_die_passive_wild_color() {
        let mut state = GameState::two_humans().with_roll(
            [ColorFace::Wild; 3],
            [NumberFace::Number(1); 3],
        );
        *state.mut_current_player() = 1;
        *state.mut_phase() = Phase::PassiveSelection(Actor::Human);
        let wild = state.die_id(0);

        assert_eq!(Ok(()), state.select_die(wild));
        assert!(state.selected_from_joker().color);
    }
}
