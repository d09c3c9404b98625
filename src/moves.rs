use crate::{adjacent_coordinates, in_bounds, Board, Color, Coordinate, Squares, ANCHOR_COLUMN};
use itertools::Itertools;
use std::collections::BTreeSet;
use thiserror::Error;

/// Describes the first rule a proposed set of [squares](Squares) breaks.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum MoveError {
    /// Attempting to cross no squares.
    #[error("no squares were proposed")]
    EmptySquares,
    /// Attempting to cross squares off the board.
    #[error("squares {squares:?} are off the board")]
    OutOfBounds {
        /// [Squares](Squares) off the board.
        squares: Squares,
    },
    /// Attempting to cross the same square twice.
    #[error("squares {squares:?} were proposed more than once")]
    Duplicates {
        /// [Squares](Squares) proposed more than once.
        squares: Squares,
    },
    /// Attempting to cross squares which are already crossed.
    #[error("squares {squares:?} are already crossed")]
    Crossed {
        /// Already crossed [squares](Squares).
        squares: Squares,
    },
    /// Attempting to cross squares of a different [color](Color).
    #[error("squares {squares:?} are not {color}")]
    WrongColor {
        /// [Squares](Squares) of a different [color](Color).
        squares: Squares,
        /// The [color](Color) of the move.
        color: Color,
    },
    /// Attempting to cross squares which are not connected to each other through
    /// other proposed squares.
    #[error("squares {squares:?} are not connected to the first square")]
    NotConnected {
        /// [Squares](Squares) unreachable from the first square.
        squares: Squares,
    },
    /// Attempting the first move of a [color](Color) outside the
    /// [anchor column](ANCHOR_COLUMN).
    #[error("the first move of a color must include column H")]
    MissingAnchor,
    /// Attempting a move where no square is adjacent to a crossed square.
    #[error("no square is adjacent to a crossed square")]
    NotAdjacent,
}

/// Checks whether `squares` may be crossed on `board` for a move of `color`.
///
/// # Rules
///
/// In order:
///
/// 1. There is at least one square.
/// 2. Every square is on the board, uncrossed, of `color`, and proposed once.
/// 3. The squares are connected to each other through adjacent proposed squares alone. Being
/// part of the same group on the board is not enough.
/// 4. If no square of `color` is crossed yet, some square is in the
/// [anchor column](ANCHOR_COLUMN). Otherwise some square is adjacent to a crossed square of
/// any [color](Color).
///
/// # Errors
///
/// The [MoveError] of the first rule broken. Nothing is mutated either way.
pub fn check_move(squares: &[Coordinate], color: Color, board: &Board) -> Result<(), MoveError> {
    let Some(&first) = squares.first() else {
        return Err(MoveError::EmptySquares);
    };

    let out_of_bounds = squares
        .iter()
        .copied()
        .filter(|&square| !in_bounds(square))
        .collect_vec();
    if !out_of_bounds.is_empty() {
        return Err(MoveError::OutOfBounds {
            squares: out_of_bounds,
        });
    }

    let duplicates = squares.iter().copied().duplicates().collect_vec();
    if !duplicates.is_empty() {
        return Err(MoveError::Duplicates {
            squares: duplicates,
        });
    }

    let crossed = squares
        .iter()
        .copied()
        .filter(|&square| board.cell(square).map_or(false, |cell| cell.crossed))
        .collect_vec();
    if !crossed.is_empty() {
        return Err(MoveError::Crossed { squares: crossed });
    }

    let wrong_color = squares
        .iter()
        .copied()
        .filter(|&square| board.cell(square).map_or(false, |cell| cell.color != color))
        .collect_vec();
    if !wrong_color.is_empty() {
        return Err(MoveError::WrongColor {
            squares: wrong_color,
            color,
        });
    }

    let reached = reachable_within(first, squares);
    if reached.len() != squares.len() {
        return Err(MoveError::NotConnected {
            squares: squares
                .iter()
                .copied()
                .filter(|square| !reached.contains(square))
                .collect(),
        });
    }

    if !board.has_crossed_color(color) {
        if !squares.iter().any(|&(_, column)| column == ANCHOR_COLUMN) {
            return Err(MoveError::MissingAnchor);
        }
    } else if !squares.iter().any(|&square| board.touches_crossed(square)) {
        return Err(MoveError::NotAdjacent);
    }

    Ok(())
}

/// # Returns
///
/// Whether [check_move] accepts the move. A rejected move is logged at debug level.
pub fn is_valid_move(squares: &[Coordinate], color: Color, board: &Board) -> bool {
    match check_move(squares, color, board) {
        Ok(()) => true,
        Err(error) => {
            log::debug!("invalid {} move {:?}: {}", color, squares, error);
            false
        }
    }
}

/// Searches depth first from `start` through adjacent members of `squares`.
fn reachable_within(start: Coordinate, squares: &[Coordinate]) -> BTreeSet<Coordinate> {
    let members = squares.iter().copied().collect::<BTreeSet<_>>();
    let mut reached = BTreeSet::from([start]);
    let mut stack = vec![start];
    while let Some(square) = stack.pop() {
        for adjacent in adjacent_coordinates(square) {
            if members.contains(&adjacent) && reached.insert(adjacent) {
                stack.push(adjacent);
            }
        }
    }

    reached
}
