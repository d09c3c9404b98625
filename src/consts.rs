use konst::primitive::{parse_u64, parse_usize};
use konst::{option, result};

/// The number of rows on every board. `7` rows.
pub const ROWS: usize = 7;
/// The number of columns on every board, labeled `A` through `O`. `15` columns.
pub const COLUMNS: usize = 15;
/// The column (`H`) where any [color](crate::Color) may be crossed for the first time
/// without touching an already crossed cell.
///
/// # See Also
///
/// * [check_move](crate::check_move)
pub const ANCHOR_COLUMN: usize = 7;
/// The number of stars on every board, one per column. `15` stars.
///
/// # See Also
///
/// * [star_penalty](crate::star_penalty)
pub const TOTAL_STARS: usize = 15;
/// The number of cells of each [board color](crate::Color::board_colors). `21` cells.
pub const CELLS_PER_COLOR: usize = 21;
/// The number of stars on cells of each [board color](crate::Color::board_colors). `3` stars.
pub const STARS_PER_COLOR: usize = 3;
/// The number of completed [colors](crate::Color) that ends the game. `2` colors.
pub const COLORS_TO_WIN: usize = 2;
/// The number of dice rolled of each [kind](crate::DieKind). `3` color dice and
/// `3` number dice.
pub const DICE_PER_KIND: usize = 3;
/// Points for the first player to complete each column, indexed by column.
///
/// # See Also
///
/// * [column_score](crate::column_score)
pub const COLUMN_FIRST_POINTS: [usize; COLUMNS] = [5, 3, 3, 3, 2, 2, 2, 1, 2, 2, 2, 3, 3, 3, 5];
/// Points for every later player to complete each column, indexed by column.
///
/// # See Also
///
/// * [column_score](crate::column_score)
pub const COLUMN_SECOND_POINTS: [usize; COLUMNS] = [3, 2, 2, 2, 1, 1, 1, 0, 1, 1, 1, 2, 2, 2, 3];
/// Points for the first player to complete a [color](crate::Color). `5` points.
pub const COLOR_FIRST_POINTS: usize = 5;
/// Points for every later player to complete a [color](crate::Color). `3` points.
pub const COLOR_SECOND_POINTS: usize = 3;
/// All small, dynamically allocated structs which store player data will be stored on the stack
/// until the number of players becomes greater than `PLAYER_CAPACITY`. When there are more than
/// `PLAYER_CAPACITY` players, player data will be heap allocated. If the environment variable
/// named `PLAYER_CAPACITY` is present at compile time and is able to be parsed into a `usize`,
/// set to the value of the environment variable. Otherwise, it is set to `4`.
///
/// # See Also
///
/// * [GameState](crate::GameState)
pub const PLAYER_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("PLAYER_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    4
);
const _: () = assert!(PLAYER_CAPACITY > 0);
/// The number of jokers each player starts with. If the environment variable named
/// `DEFAULT_JOKERS` is present at compile time and is able to be parsed into a `usize`,
/// set to the value of the environment variable. Otherwise, it is set to `8`.
///
/// # See Also
///
/// * [GameState::select_die](crate::GameState::select_die)
pub const DEFAULT_JOKERS: usize = option::unwrap_or!(
    option::and_then!(option_env!("DEFAULT_JOKERS"), |str| result::ok!(
        parse_usize(str)
    )),
    8
);
/// Milliseconds a computer player waits before rolling or deciding a move. If the environment
/// variable named `AI_DELAY_MS` is present at compile time and is able to be parsed into
/// a `u64`, set to the value of the environment variable. Otherwise, it is set to `1_000`.
///
/// # See Also
///
/// * [Timing](crate::Timing)
pub const AI_DELAY_MS: u64 = option::unwrap_or!(
    option::and_then!(option_env!("AI_DELAY_MS"), |str| result::ok!(parse_u64(
        str
    ))),
    1_000
);
/// Milliseconds of the pause between one player finishing and the next player starting.
/// If the environment variable named `SWITCH_DELAY_MS` is present at compile time and is able
/// to be parsed into a `u64`, set to the value of the environment variable. Otherwise, it is
/// set to `1_500`.
///
/// # See Also
///
/// * [Timing](crate::Timing)
pub const SWITCH_DELAY_MS: u64 = option::unwrap_or!(
    option::and_then!(option_env!("SWITCH_DELAY_MS"), |str| result::ok!(
        parse_u64(str)
    )),
    1_500
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn column_points_symmetric() {
        for column in 0..COLUMNS {
            assert_eq!(
                COLUMN_FIRST_POINTS[column],
                COLUMN_FIRST_POINTS[COLUMNS - 1 - column]
            );
            assert_eq!(
                COLUMN_SECOND_POINTS[column],
                COLUMN_SECOND_POINTS[COLUMNS - 1 - column]
            );
        }
    }

    #[test]
    fn anchor_column_lowest() {
        let min_first = COLUMN_FIRST_POINTS.into_iter().min();
        let min_second = COLUMN_SECOND_POINTS.into_iter().min();

        assert_eq!(min_first, Some(COLUMN_FIRST_POINTS[ANCHOR_COLUMN]));
        assert_eq!(min_second, Some(COLUMN_SECOND_POINTS[ANCHOR_COLUMN]));
    }

    #[test]
    fn cells_fill_board() {
        assert_eq!(ROWS * COLUMNS, CELLS_PER_COLOR * Color::BOARD_COLORS_LEN);
        assert_eq!(TOTAL_STARS, STARS_PER_COLOR * Color::BOARD_COLORS_LEN);
        assert_eq!(TOTAL_STARS, COLUMNS);
    }
}
