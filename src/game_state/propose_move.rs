use crate::{
    check_move, Actor, Color, ColorFace, Columns, Coordinate, DieFace, DieId, GameState,
    MoveError, NumberFace, Phase, Squares, Turn, COLORS_TO_WIN, COLUMNS,
};
use std::collections::{BTreeSet, HashSet};
use thiserror::Error;

/// Describes the reason why the [move](GameState::propose_move) could not be made.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum ProposeMoveError {
    /// Attempting to move outside of a selection phase of a person.
    #[error("cannot move during {phase}")]
    NotHumanSelection {
        /// The phase of the game.
        phase: Phase,
    },
    /// Attempting to move without an unused color die selected.
    #[error("no color die is selected")]
    MissingColorDie,
    /// Attempting to move without an unused number die selected.
    #[error("no number die is selected")]
    MissingNumberDie,
    /// Attempting to move with a wild color die and no square on the board to take the
    /// color from.
    #[error("a wild color needs a first square on the board")]
    UnresolvedWildColor,
    /// Attempting to cross a different number of squares than the number die shows.
    #[error("expected {expected} squares but {actual} were proposed")]
    WrongCount {
        /// The number of squares the number die requires.
        expected: usize,
        /// The number of proposed squares.
        actual: usize,
    },
    /// Attempting to cross squares which break a rule of [check_move].
    #[error(transparent)]
    InvalidMove(#[from] MoveError),
    /// Attempting to move with wild dice costing more jokers than the current player has.
    #[error("the move needs {required} jokers but only {remaining} remain")]
    NotEnoughJokers {
        /// The number of jokers the move costs.
        required: usize,
        /// The number of jokers the current player has.
        remaining: usize,
    },
}

/// What an accepted move changed.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct MoveOutcome {
    /// The resolved [color](Color) of the move.
    pub color: Color,
    /// The crossed squares.
    pub squares: Squares,
    /// The number of stars collected by the move.
    pub stars_collected: usize,
    /// Columns completed by the move.
    pub completed_columns: Columns,
    /// The [color](Color) completed by the move, if any.
    pub completed_color: Option<Color>,
    /// The number of jokers used by the move.
    pub jokers_used: usize,
    /// The index of the winner if the move ended the game.
    pub winner: Option<usize>,
}

/// A move with both dice resolved which only needs to be committed.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub(crate) struct ResolvedMove {
    pub(crate) color: Color,
    pub(crate) squares: Squares,
    pub(crate) color_die: DieId,
    pub(crate) number_die: DieId,
    pub(crate) jokers: usize,
}

impl GameState {
    /// Checks the squares against the pending choice of dice, then crosses the squares on the
    /// current player's board, collects stars, records completed columns and
    /// [colors](Color), spends jokers, uses both dice, and pauses for the next player unless
    /// the game is over.
    ///
    /// # Resolving Dice
    ///
    /// A wild color die takes the [color](Color) of the first square. A wild number die takes the
    /// number of squares.
    ///
    /// # Completions
    ///
    /// Every column and [color](Color) which becomes complete on the board is recorded once for
    /// the current player. The first player to complete a column or [color](Color) claims it
    /// forever and every later player records it as not first.
    ///
    /// # Errors
    ///
    /// * [ProposeMoveError::NotHumanSelection] Attempting to move outside of a selection phase
    /// of a person.
    /// * [ProposeMoveError::MissingColorDie] Attempting to move without an unused color die
    /// selected.
    /// * [ProposeMoveError::MissingNumberDie] Attempting to move without an unused number die
    /// selected.
    /// * [ProposeMoveError::UnresolvedWildColor] Attempting to move with a wild color die and
    /// no square on the board to take the color from.
    /// * [ProposeMoveError::WrongCount] Attempting to cross a different number of squares than
    /// the number die shows.
    /// * [ProposeMoveError::InvalidMove] Attempting to cross squares which break a rule of
    /// [check_move].
    /// * [ProposeMoveError::NotEnoughJokers] Attempting to move with wild dice costing more
    /// jokers than the current player has.
    ///
    /// # Returns
    ///
    /// The [outcome](MoveOutcome) of the move.
    pub fn propose_move(
        &mut self,
        squares: &[Coordinate],
    ) -> Result<MoveOutcome, HashSet<ProposeMoveError>> {
        let (turn, resolved) = self.check_proposal(squares)?;

        Ok(self.commit_move(turn, resolved))
    }

    /// # Returns
    ///
    /// Whether [proposing](GameState::propose_move) the squares would be accepted. Nothing is
    /// mutated.
    pub fn can_propose(&self, squares: &[Coordinate]) -> bool {
        self.check_proposal(squares).is_ok()
    }

    /// # Returns
    ///
    /// The group of the current player's board which
    /// [connects](crate::Board::find_connected_group) to `(row, column)` in the
    /// [color](Color) of the pending color die. A wild color die takes the [color](Color) of
    /// the cell itself. Empty when no color die is pending or the cell is off the board.
    pub fn hover_group(&self, row: usize, column: usize) -> BTreeSet<Coordinate> {
        let board = &self.current().board;
        let color = match self.pending_color_face() {
            Some(ColorFace::Color(color)) => Some(color),
            Some(ColorFace::Wild) => board.cell((row, column)).map(|cell| cell.color),
            None => None,
        };

        color
            .map(|color| board.find_connected_group((row, column), color))
            .unwrap_or_default()
    }

    fn check_proposal(
        &self,
        squares: &[Coordinate],
    ) -> Result<(Turn, ResolvedMove), HashSet<ProposeMoveError>> {
        let turn = match self.phase {
            Phase::ActiveSelection(Actor::Human) => Some(Turn::Active),
            Phase::PassiveSelection(Actor::Human) => Some(Turn::Passive),
            _ => None,
        };
        let resolved = self.resolve_move(squares);

        match (turn, resolved) {
            (Some(turn), Ok(resolved)) => Ok((turn, resolved)),
            (turn, resolved) => {
                let mut errors = resolved.err().unwrap_or_default();
                if turn.is_none() {
                    errors.insert(ProposeMoveError::NotHumanSelection { phase: self.phase });
                }
                log::debug!("rejected move {:?}: {:?}", squares, errors);
                Err(errors)
            }
        }
    }

    fn pending_color_face(&self) -> Option<ColorFace> {
        let id = self.selected_dice.color?;
        self.dice
            .iter()
            .find(|die| die.id == id && !die.used)
            .and_then(|die| match die.face {
                DieFace::Color(face) => Some(face),
                DieFace::Number(_) => None,
            })
    }

    fn pending_number_face(&self) -> Option<NumberFace> {
        let id = self.selected_dice.number?;
        self.dice
            .iter()
            .find(|die| die.id == id && !die.used)
            .and_then(|die| match die.face {
                DieFace::Number(face) => Some(face),
                DieFace::Color(_) => None,
            })
    }

    /// Resolves the pending choice of dice against the squares and checks the move on the
    /// current player's board, ignoring the phase.
    pub(crate) fn resolve_move(
        &self,
        squares: &[Coordinate],
    ) -> Result<ResolvedMove, HashSet<ProposeMoveError>> {
        let mut errors = HashSet::new();
        let color_face = self.pending_color_face();
        let number_face = self.pending_number_face();
        if color_face.is_none() {
            errors.insert(ProposeMoveError::MissingColorDie);
        }
        if number_face.is_none() {
            errors.insert(ProposeMoveError::MissingNumberDie);
        }
        let (Some(color_face), Some(number_face), Some(color_die), Some(number_die)) = (
            color_face,
            number_face,
            self.selected_dice.color,
            self.selected_dice.number,
        ) else {
            return Err(errors);
        };

        let player = self.current();
        let color = match color_face {
            ColorFace::Color(color) => Some(color),
            ColorFace::Wild => squares
                .first()
                .and_then(|&first| player.board.cell(first))
                .map(|cell| cell.color),
        };
        let expected = match number_face {
            NumberFace::Number(number) => usize::from(number),
            NumberFace::Wild => squares.len(),
        };
        if squares.len() != expected {
            errors.insert(ProposeMoveError::WrongCount {
                expected,
                actual: squares.len(),
            });
        }
        match color {
            Some(color) => {
                if let Err(error) = check_move(squares, color, &player.board) {
                    errors.insert(error.into());
                }
            }
            None => {
                errors.insert(ProposeMoveError::UnresolvedWildColor);
            }
        }
        let jokers = usize::from(color_face == ColorFace::Wild)
            + usize::from(number_face == NumberFace::Wild);
        if jokers > player.jokers_remaining {
            errors.insert(ProposeMoveError::NotEnoughJokers {
                required: jokers,
                remaining: player.jokers_remaining,
            });
        }

        match color {
            Some(color) if errors.is_empty() => Ok(ResolvedMove {
                color,
                squares: squares.to_vec(),
                color_die,
                number_die,
                jokers,
            }),
            _ => Err(errors),
        }
    }

    /// Applies an already [resolved](GameState::resolve_move) move for the current player
    /// who just finished `turn`.
    pub(crate) fn commit_move(&mut self, turn: Turn, resolved: ResolvedMove) -> MoveOutcome {
        let current = self.current_player;
        let player = &mut self.players[current];

        let stars_collected = resolved
            .squares
            .iter()
            .filter(|&&square| player.board.cross(square))
            .count();
        player.stars_collected += stars_collected;

        let mut completed_columns = Columns::new();
        for column in 0..COLUMNS {
            if !player.board.is_column_complete(column)
                || player.completed_columns_first.contains(&column)
                || player.completed_columns_not_first.contains(&column)
            {
                continue;
            }
            if self.claimed_first_column_bonus.contains_key(&column) {
                player.completed_columns_not_first.push(column);
            } else {
                self.claimed_first_column_bonus.insert(column, current);
                player.completed_columns_first.push(column);
                log::info!("player {} claimed column {} first", current, column);
            }
            completed_columns.push(column);
        }

        let mut completed_color = None;
        for color in Color::board_colors() {
            if !player.board.is_color_complete(color)
                || player.completed_colors().any(|completed| completed == color)
            {
                continue;
            }
            if self.claimed_first_color_bonus.contains_key(&color) {
                player.completed_colors_not_first.push(color);
            } else {
                self.claimed_first_color_bonus.insert(color, current);
                player.completed_colors_first.push(color);
                log::info!("player {} claimed {} first", current, color);
            }
            completed_color = Some(color);
        }

        player.jokers_remaining = player.jokers_remaining.saturating_sub(resolved.jokers);
        let game_over = player.completed_colors().count() >= COLORS_TO_WIN;

        for die in self.dice.iter_mut() {
            if die.id == resolved.color_die || die.id == resolved.number_die {
                die.used = true;
            }
        }
        self.clear_selection();

        if game_over {
            self.winner = Some(current);
            log::info!("player {} won game {}", current, self.game_id);
            self.dice.clear();
            self.enter(Phase::GameOver);
        } else {
            self.enter(Phase::PlayerSwitching { last: turn });
        }

        MoveOutcome {
            color: resolved.color,
            squares: resolved.squares,
            stars_collected,
            completed_columns,
            completed_color,
            jokers_used: resolved.jokers,
            winner: self.winner,
        }
    }
}
