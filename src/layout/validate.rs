use crate::{
    in_bounds, Board, BoardLayout, Color, Coordinate, CELLS_PER_COLOR, COLUMNS, STARS_PER_COLOR,
    TOTAL_STARS,
};
use itertools::Itertools;
use std::collections::{BTreeSet, HashSet};
use thiserror::Error;

/// Describes the reason why a [layout](BoardLayout) cannot be played on.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Error)]
pub enum LayoutError {
    /// Some cell has a [color](Color) which is never rolled.
    #[error("{color} is not a board color but covers {cells} cells")]
    ForeignColor {
        /// The [color](Color) outside of [Color::board_colors].
        color: Color,
        /// The number of cells with the [color](Color).
        cells: usize,
    },
    /// Some [board color](Color::board_colors) does not cover [CELLS_PER_COLOR] cells.
    #[error("{color} must cover {} cells but covers {cells}", CELLS_PER_COLOR)]
    ColorCount {
        /// The [color](Color) with the wrong number of cells.
        color: Color,
        /// The number of cells with the [color](Color).
        cells: usize,
    },
    /// The connected groups of some [board color](Color::board_colors) are not exactly one group
    /// of each size from `1` to `6`.
    #[error("{color} must have groups of sizes 1 to 6 but has {sizes:?}")]
    GroupSizes {
        /// The [color](Color) with the wrong groups.
        color: Color,
        /// The sizes of the groups in ascending order.
        sizes: Vec<usize>,
    },
    /// The [layout](BoardLayout) does not have [TOTAL_STARS] stars.
    #[error("a board must have {} stars but has {stars}", TOTAL_STARS)]
    StarCount {
        /// The number of stars.
        stars: usize,
    },
    /// Some star is off the board.
    #[error("star at {star:?} is off the board")]
    StarOutOfBounds {
        /// The [coordinate](Coordinate) of the star.
        star: Coordinate,
    },
    /// Some column does not have a star.
    #[error("every column must have a star but only {columns} columns do")]
    StarColumns {
        /// The number of columns with at least one star.
        columns: usize,
    },
    /// Some [board color](Color::board_colors) does not have [STARS_PER_COLOR] stars.
    #[error("{color} must have {} stars but has {stars}", STARS_PER_COLOR)]
    StarsPerColor {
        /// The [color](Color) with the wrong number of stars.
        color: Color,
        /// The number of stars on cells with the [color](Color).
        stars: usize,
    },
}

/// Checks that a [layout](BoardLayout) can be played on: every
/// [board color](Color::board_colors) covers [CELLS_PER_COLOR] cells split into connected groups
/// of sizes `1` through `6`, and there are [TOTAL_STARS] stars with one in each column and
/// [STARS_PER_COLOR] on each [board color](Color::board_colors).
///
/// # Errors
///
/// Every [LayoutError] found. Stars off the board are not counted towards columns or colors.
pub fn validate_layout(layout: &BoardLayout) -> Result<(), HashSet<LayoutError>> {
    let mut errors = HashSet::new();
    let counts = layout.colors.iter().flatten().copied().counts();

    for color in Color::colors() {
        let cells = counts.get(&color).copied().unwrap_or(0);
        if !Color::board_colors().contains(&color) {
            if cells > 0 {
                errors.insert(LayoutError::ForeignColor { color, cells });
            }
            continue;
        }
        if cells != CELLS_PER_COLOR {
            errors.insert(LayoutError::ColorCount { color, cells });
        }
    }

    let board = Board::from_layout(layout);
    for color in Color::board_colors() {
        let sizes = board
            .find_connected_components(color)
            .iter()
            .map(Vec::len)
            .sorted()
            .collect_vec();
        if sizes != [1, 2, 3, 4, 5, 6] {
            errors.insert(LayoutError::GroupSizes { color, sizes });
        }
    }

    if layout.stars.len() != TOTAL_STARS {
        errors.insert(LayoutError::StarCount {
            stars: layout.stars.len(),
        });
    }

    let (on_board, off_board): (Vec<Coordinate>, Vec<Coordinate>) =
        layout.stars.iter().partition(|&&star| in_bounds(star));
    errors.extend(
        off_board
            .into_iter()
            .map(|star| LayoutError::StarOutOfBounds { star }),
    );

    let columns = on_board
        .iter()
        .map(|&(_, column)| column)
        .collect::<BTreeSet<_>>()
        .len();
    if columns != COLUMNS {
        errors.insert(LayoutError::StarColumns { columns });
    }

    let stars_by_color = on_board
        .iter()
        .filter_map(|&star| layout.color_at(star))
        .counts();
    for color in Color::board_colors() {
        let stars = stars_by_color.get(&color).copied().unwrap_or(0);
        if stars != STARS_PER_COLOR {
            errors.insert(LayoutError::StarsPerColor { color, stars });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        log::debug!("rejected layout with {} errors", errors.len());
        Err(errors)
    }
}
