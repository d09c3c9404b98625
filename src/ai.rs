use crate::{
    is_valid_move, Color, ColorFace, Coordinate, Die, DieFace, DieId, NumberFace, Player, Squares,
};
use either::Either;
use itertools::Itertools;
use std::iter;

/// Points for every square crossed.
const SQUARE_POINTS: isize = 1;
/// Points for crossing a whole component.
const COMPONENT_POINTS: isize = 50;
/// Points for crossing the last squares of a [color](Color).
const COLOR_POINTS: isize = 200;
/// Points for every column the move finishes.
const COLUMN_POINTS: isize = 100;
/// Points lost for spending a joker on the color.
const WILD_PENALTY: isize = 5;

/// A move chosen for a computer player.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct AiMove {
    /// The id of the color [die](Die) to use.
    pub color_die: DieId,
    /// The id of the number [die](Die) to use.
    pub number_die: DieId,
    /// The [color](Color) the move crosses, which a wild color die resolves to.
    pub color: Color,
    /// The squares to cross.
    pub squares: Squares,
    /// The heuristic score of the move.
    pub score: isize,
}

/// Chooses the best move for `player` from the unused dice.
///
/// Every pair of an unused color die and an unused number die is considered. Wild number dice
/// are never used. A wild color die is tried as every [board color](Color::board_colors) unless
/// the player has no jokers left. For each [color](Color), the first `N` squares of every
/// [component](crate::Board::find_connected_components) with at least `N` squares form a
/// candidate, where `N` is the number on the number die. Each [valid](is_valid_move) candidate
/// earns points for:
///
/// * every crossed square
/// * crossing a whole component
/// * crossing the last squares of the [color](Color)
/// * every column it finishes
///
/// and loses points when the color die is wild.
///
/// # Returns
///
/// The candidate with the highest score, the first one found among ties, or [None] when no
/// candidate is valid and the player should skip.
pub fn select_move(player: &Player, dice: &[Die]) -> Option<AiMove> {
    let board = player.board();
    let color_dice = dice.iter().filter(|die| !die.used).filter_map(|die| match die.face {
        DieFace::Color(face) => Some((die.id, face)),
        DieFace::Number(_) => None,
    });
    let number_dice = dice
        .iter()
        .filter(|die| !die.used)
        .filter_map(|die| match die.face {
            DieFace::Number(NumberFace::Number(number)) => Some((die.id, usize::from(number))),
            DieFace::Number(NumberFace::Wild) | DieFace::Color(_) => None,
        })
        .collect::<Vec<_>>();

    let mut best: Option<AiMove> = None;
    for (color_die, face) in color_dice {
        for &(number_die, number) in &number_dice {
            let colors = match face {
                ColorFace::Color(color) => Either::Left(iter::once(color)),
                ColorFace::Wild if player.jokers_remaining() > 0 => {
                    Either::Right(Color::board_colors().into_iter())
                }
                ColorFace::Wild => continue,
            };

            for color in colors {
                for component in board.find_connected_components(color) {
                    if component.len() < number {
                        continue;
                    }
                    let squares = component[..number].to_vec();
                    if !is_valid_move(&squares, color, board) {
                        continue;
                    }

                    let mut score = SQUARE_POINTS * number as isize;
                    if component.len() == number {
                        score += COMPONENT_POINTS;
                    }
                    let uncrossed = board.uncrossed_in_color(color);
                    if uncrossed > 0 && uncrossed <= number {
                        score += COLOR_POINTS;
                    }
                    score += COLUMN_POINTS * finished_columns(player, &squares) as isize;
                    if face == ColorFace::Wild {
                        score -= WILD_PENALTY;
                    }

                    log::trace!(
                        "candidate {} {:?} with {} and {} scores {}",
                        color,
                        squares,
                        color_die,
                        number_die,
                        score
                    );
                    if best.as_ref().map_or(true, |best| score > best.score) {
                        best = Some(AiMove {
                            color_die,
                            number_die,
                            color,
                            squares,
                            score,
                        });
                    }
                }
            }
        }
    }
    best
}

/// # Returns
///
/// The number of columns where `squares` cover every uncrossed cell.
fn finished_columns(player: &Player, squares: &[Coordinate]) -> usize {
    squares
        .iter()
        .map(|&(_, column)| column)
        .unique()
        .filter(|&column| {
            let uncrossed = player.board().uncrossed_in_column(column);
            let marked = squares.iter().filter(|&&(_, other)| other == column).count();
            uncrossed > 0 && uncrossed <= marked
        })
        .count()
}
