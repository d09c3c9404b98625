use crate::{COLUMNS, ROWS};

/// A tuple with the row and the column of a [cell](crate::Cell) on the board, where the row
/// is in range `0..ROWS` and the column is in range `0..COLUMNS` for cells on the board.
///
/// # See Also
///
/// * [Squares](crate::Squares)
/// * [Board](crate::Board)
pub type Coordinate = (usize, usize);

/// # Returns
///
/// Whether the [coordinate](Coordinate) is on the board.
#[inline]
pub fn in_bounds((row, column): Coordinate) -> bool {
    row < ROWS && column < COLUMNS
}

/// Finds the adjacent [coordinates](Coordinate) from the argument [coordinate](Coordinate)
/// where adjacent is 4 directional and not diagonal. Neighbors off the board are skipped.
///
/// # See Also
///
/// * [Board::find_connected_group](crate::Board::find_connected_group)
/// * [check_move](crate::check_move)
///
/// # Returns
///
/// Up to 4 [coordinates](Coordinate) in natural lexicographic order.
pub fn adjacent_coordinates((row, column): Coordinate) -> impl Iterator<Item = Coordinate> {
    [
        row.checked_sub(1).map(|row| (row, column)),
        column.checked_sub(1).map(|column| (row, column)),
        Some((row, column + 1)).filter(|&(_, column)| column < COLUMNS),
        Some((row + 1, column)).filter(|&(row, _)| row < ROWS),
    ]
    .into_iter()
    .flatten()
}

/// # Returns
///
/// The letter printed above the column, `A` for `0` through `O` for `14`, or [None] when the
/// column is not on the board.
pub fn column_label(column: usize) -> Option<char> {
    if column >= COLUMNS {
        return None;
    }
    char::from_u32('A' as u32 + column as u32)
}

/// # Returns
///
/// The index of the column labeled by `label`, or [None] when no column has the label.
pub fn column_index(label: char) -> Option<usize> {
    let index = (label.to_ascii_uppercase() as usize).checked_sub('A' as usize)?;
    (index < COLUMNS).then_some(index)
}
