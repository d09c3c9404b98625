use crate::{
    final_score, validate_layout, BoardLayout, ClaimedColors, ClaimedColumns, Dice, DieId,
    LayoutError, Player, PlayerSetup, Players, PLAYER_CAPACITY,
};
pub use automation::*;
pub use event::*;
pub use player_switch::*;
pub use propose_move::*;
use rand::Rng;
pub use roll::*;
pub use select_die::*;
pub use skip::*;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use thiserror::Error;
pub use view::*;

mod automation;
mod event;
mod player_switch;
mod propose_move;
mod roll;
mod select_die;
mod skip;
#[cfg(test)]
mod test_setup;
mod view;

/// Describes whether a person or the computer acts in a phase.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Actor {
    /// A person acts through [events](GameEvent) from a front end.
    Human,
    /// The computer acts when an [automation](Automation) fires.
    Ai,
}

impl Actor {
    /// # Returns
    ///
    /// [Actor::Ai] if `is_ai`, otherwise [Actor::Human].
    pub fn of(is_ai: bool) -> Self {
        if is_ai {
            Actor::Ai
        } else {
            Actor::Human
        }
    }
}

/// Describes whose turn just ended when players are switching.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Turn {
    /// The player who rolled.
    Active,
    /// Some other player using the same roll.
    Passive,
}

/// Describes the phase of the game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Phase {
    /// The active player is about to [roll](GameState::roll_dice).
    Rolling(Actor),
    /// The active player chooses dice for the roll.
    ActiveSelection(Actor),
    /// A passive player chooses dice for the same roll.
    PassiveSelection(Actor),
    /// Paused between two players until
    /// [the switch completes](GameState::complete_player_switch).
    PlayerSwitching {
        /// The turn which just ended.
        last: Turn,
    },
    /// Some player completed [COLORS_TO_WIN](crate::COLORS_TO_WIN) colors. Nothing advances
    /// the game any more.
    GameOver,
}

impl Phase {
    /// # Returns
    ///
    /// The [actor](Actor) of a rolling or selection phase, otherwise [None].
    pub fn actor(self) -> Option<Actor> {
        match self {
            Phase::Rolling(actor) | Phase::ActiveSelection(actor) | Phase::PassiveSelection(actor) => {
                Some(actor)
            }
            Phase::PlayerSwitching { .. } | Phase::GameOver => None,
        }
    }

    /// # Returns
    ///
    /// Whether the computer acts in the phase.
    pub fn is_ai(self) -> bool {
        self.actor() == Some(Actor::Ai)
    }

    /// # Returns
    ///
    /// The [turn](Turn) of a selection phase, otherwise [None].
    pub fn turn(self) -> Option<Turn> {
        match self {
            Phase::ActiveSelection(_) => Some(Turn::Active),
            Phase::PassiveSelection(_) => Some(Turn::Passive),
            _ => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Rolling(_) => "rolling",
            Phase::ActiveSelection(_) => "active-selection",
            Phase::PassiveSelection(_) => "passive-selection",
            Phase::PlayerSwitching { .. } => "player-switching",
            Phase::GameOver => "game-over",
        };
        f.write_str(name)?;
        if self.is_ai() {
            f.write_str("-ai")?;
        }
        Ok(())
    }
}

/// The pending choice of dice which is not yet used in a move.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct SelectedDice {
    /// The selected color [die](crate::Die).
    pub color: Option<DieId>,
    /// The selected number [die](crate::Die).
    pub number: Option<DieId>,
}

/// Whether each pending choice of dice is wild and costs a joker.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct JokerFlags {
    /// The selected color [die](crate::Die) is wild.
    pub color: bool,
    /// The selected number [die](crate::Die) is wild.
    pub number: bool,
}

impl JokerFlags {
    /// # Returns
    ///
    /// The number of jokers the pending choice costs.
    pub fn count(self) -> usize {
        usize::from(self.color) + usize::from(self.number)
    }
}

/// Describes the reason why a game could not be created.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum NewError {
    /// Attempting to create a game without players.
    #[error("a game needs at least one player")]
    EmptyPlayers,
    /// Attempting to seat a player with a blank name.
    #[error("player {player} has a blank name")]
    EmptyName {
        /// The index of the player.
        player: usize,
    },
    /// Attempting to seat a player on a [layout](BoardLayout) which cannot be played on.
    #[error("player {player} has an invalid board: {errors:?}")]
    InvalidLayout {
        /// The index of the player.
        player: usize,
        /// Every reason the [layout](BoardLayout) is invalid.
        errors: BTreeSet<LayoutError>,
    },
}

/// Owns the state of one game and implements every transition between [phases](Phase).
///
/// Every transition checks its preconditions before it mutates anything. A rejected call
/// returns an error and leaves the state exactly as it was, so callers may retry freely.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    /// Identifies this game so [tickets](Ticket) from a superseded game are ignored.
    game_id: u64,
    /// Counts accepted transitions so [tickets](Ticket) from an earlier phase are ignored.
    epoch: u64,
    /// A vector of players in seating order.
    players: Players,
    /// The index of the player whose choice is being processed.
    current_player: usize,
    /// The index of the player who rolled this round.
    active_player: usize,
    phase: Phase,
    /// The current roll, empty between rolls.
    dice: Dice,
    selected_dice: SelectedDice,
    selected_from_joker: JokerFlags,
    /// A map of columns to the player who completed them first.
    claimed_first_column_bonus: ClaimedColumns,
    /// A map of colors to the player who completed them first.
    claimed_first_color_bonus: ClaimedColors,
    winner: Option<usize>,
    /// The id of the next rolled [die](crate::Die).
    next_die_id: u64,
}

impl GameState {
    /// Creates a game with a seat for each setup. Layouts are resolved with `rng` and validated
    /// before any player is created. The first player rolls first.
    ///
    /// # Errors
    ///
    /// * [NewError::EmptyPlayers] Attempting to create a game without players.
    /// * [NewError::EmptyName] Attempting to seat a player with a blank name.
    /// * [NewError::InvalidLayout] Attempting to seat a player on a [layout](BoardLayout)
    /// which cannot be played on.
    pub fn new<R: Rng + ?Sized>(
        setups: &[PlayerSetup],
        rng: &mut R,
    ) -> Result<GameState, HashSet<NewError>> {
        let game_id = rng.gen();
        let seats = setups
            .iter()
            .map(|setup| (setup.name.clone(), setup.is_ai, setup.board.resolve(rng)))
            .collect::<Vec<_>>();

        GameState::from_layouts(game_id, seats)
    }

    /// Creates a game from already resolved seats of `(name, is_ai, layout)`.
    ///
    /// # Errors
    ///
    /// The same as [GameState::new].
    pub fn from_layouts<I>(game_id: u64, seats: I) -> Result<GameState, HashSet<NewError>>
    where
        I: IntoIterator<Item = (String, bool, BoardLayout)>,
    {
        let mut errors = HashSet::new();
        let mut players = Players::with_capacity(PLAYER_CAPACITY);
        for (index, (name, is_ai, layout)) in seats.into_iter().enumerate() {
            if name.trim().is_empty() {
                errors.insert(NewError::EmptyName { player: index });
            }
            if let Err(layout_errors) = validate_layout(&layout) {
                errors.insert(NewError::InvalidLayout {
                    player: index,
                    errors: layout_errors.into_iter().collect(),
                });
            }
            players.push(Player::new(index, name, is_ai, &layout));
        }
        if players.is_empty() {
            errors.insert(NewError::EmptyPlayers);
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        let phase = Phase::Rolling(Actor::of(players[0].is_ai));
        log::info!("created game {} with {} players", game_id, players.len());
        Ok(GameState {
            game_id,
            epoch: 0,
            players,
            current_player: 0,
            active_player: 0,
            phase,
            dice: Dice::new(),
            selected_dice: SelectedDice::default(),
            selected_from_joker: JokerFlags::default(),
            claimed_first_column_bonus: ClaimedColumns::new(),
            claimed_first_color_bonus: ClaimedColors::new(),
            winner: None,
            next_die_id: 0,
        })
    }

    /// The identifier of this game.
    #[inline]
    pub fn game_id(&self) -> u64 {
        self.game_id
    }

    /// The number of accepted transitions so far.
    #[inline]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// # Returns
    ///
    /// The players in seating order.
    #[inline]
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// # Returns
    ///
    /// The index of the player whose choice is being processed.
    #[inline]
    pub fn current_player(&self) -> usize {
        self.current_player
    }

    /// # Returns
    ///
    /// The index of the player who rolled this round.
    #[inline]
    pub fn active_player(&self) -> usize {
        self.active_player
    }

    /// The current [phase](Phase).
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The dice of the current roll.
    #[inline]
    pub fn dice(&self) -> &Dice {
        &self.dice
    }

    /// The pending choice of dice.
    #[inline]
    pub fn selected_dice(&self) -> SelectedDice {
        self.selected_dice
    }

    /// Whether each pending die is wild.
    #[inline]
    pub fn selected_from_joker(&self) -> JokerFlags {
        self.selected_from_joker
    }

    /// # Returns
    ///
    /// A map of column indexes to the index of the player who completed the column first.
    #[inline]
    pub fn claimed_first_column_bonus(&self) -> &ClaimedColumns {
        &self.claimed_first_column_bonus
    }

    /// # Returns
    ///
    /// A map of [colors](crate::Color) to the index of the player who completed the color first.
    #[inline]
    pub fn claimed_first_color_bonus(&self) -> &ClaimedColors {
        &self.claimed_first_color_bonus
    }

    /// The index of the player who ended the game, if it is over.
    #[inline]
    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// # Returns
    ///
    /// The indexes of every player with the highest
    /// [total score](crate::ScoreBreakdown::total_score).
    pub fn leaders(&self) -> Vec<usize> {
        let totals = self
            .players
            .iter()
            .map(|player| final_score(player).total_score)
            .collect::<Vec<_>>();
        let Some(&best) = totals.iter().max() else {
            return Vec::new();
        };

        totals
            .iter()
            .enumerate()
            .filter(|&(_, &total)| total == best)
            .map(|(index, _)| index)
            .collect()
    }

    /// The player whose choice is being processed.
    pub(crate) fn current(&self) -> &Player {
        &self.players[self.current_player]
    }

    /// Clears the pending choice of dice.
    fn clear_selection(&mut self) {
        self.selected_dice = SelectedDice::default();
        self.selected_from_joker = JokerFlags::default();
    }

    /// Marks an accepted transition into `phase`.
    fn enter(&mut self, phase: Phase) {
        log::info!("game {}: {} -> {}", self.game_id, self.phase, phase);
        self.phase = phase;
        self.epoch += 1;
    }
}
