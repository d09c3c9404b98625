use crate::{Color, Coordinate, Die, Player, COLUMNS, DICE_PER_KIND, PLAYER_CAPACITY};
use smallvec::SmallVec;
use std::collections::BTreeMap;

/// An ordered vector of [coordinates](Coordinate) proposed to be crossed. Order matters:
/// a wild color die takes the color of the first square.
///
/// # See Also
///
/// * [GameState::propose_move](crate::GameState::propose_move)
/// * [check_move](crate::check_move)
pub type Squares = Vec<Coordinate>;
/// A vector of [coordinates](Coordinate) of one connected group of uncrossed cells in
/// breadth first order from the first cell.
///
/// # See Also
///
/// * [Board::find_connected_components](crate::Board::find_connected_components)
pub type Component = Vec<Coordinate>;
/// A vector of players in seating order.
///
/// # See Also
///
/// * [PLAYER_CAPACITY]
/// * [GameState](crate::GameState)
/// * [GameView](crate::GameView)
pub type Players = SmallVec<[Player; PLAYER_CAPACITY]>;
/// A vector of the dice in the current roll, color dice first. Empty between rolls.
///
/// # See Also
///
/// * [Die]
/// * [GameState::roll_dice](crate::GameState::roll_dice)
pub type Dice = SmallVec<[Die; 2 * DICE_PER_KIND]>;
/// A vector of column indexes in the order they were completed.
///
/// # See Also
///
/// * [Player::completed_columns_first](crate::Player::completed_columns_first)
/// * [Player::completed_columns_not_first](crate::Player::completed_columns_not_first)
pub type Columns = SmallVec<[usize; COLUMNS]>;
/// A vector of [colors](Color) in the order they were completed.
///
/// # See Also
///
/// * [Player::completed_colors_first](crate::Player::completed_colors_first)
/// * [Player::completed_colors_not_first](crate::Player::completed_colors_not_first)
pub type Colors = SmallVec<[Color; Color::COLORS_LEN]>;
/// A map of column indexes to the index of the player who completed the column first.
/// Entries are never replaced once inserted.
///
/// # See Also
///
/// * [GameState::claimed_first_column_bonus](crate::GameState::claimed_first_column_bonus)
pub type ClaimedColumns = BTreeMap<usize, usize>;
/// A map of [colors](Color) to the index of the player who completed the color first.
/// Entries are never replaced once inserted.
///
/// # See Also
///
/// * [GameState::claimed_first_color_bonus](crate::GameState::claimed_first_color_bonus)
pub type ClaimedColors = BTreeMap<Color, usize>;
