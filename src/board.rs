use crate::{adjacent_coordinates, BoardLayout, Color, Component, Coordinate, COLUMNS, ROWS};
use std::collections::{BTreeSet, VecDeque};

/// A single square on a player's [board](Board).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Cell {
    /// The printed [color](Color) of the cell.
    pub color: Color,
    /// Whether crossing the cell collects a star.
    pub has_star: bool,
    /// Whether the cell has been crossed. Crossed cells are never uncrossed.
    pub crossed: bool,
}

/// A player's board of [ROWS] by [COLUMNS] [cells](Cell), owned by the player and crossed in
/// place as the game goes on.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [[Cell; COLUMNS]; ROWS],
}

impl Board {
    /// Creates an uncrossed board from a [layout](BoardLayout).
    pub fn from_layout(layout: &BoardLayout) -> Self {
        let mut cells = [[Cell {
            color: Color::Yellow,
            has_star: false,
            crossed: false,
        }; COLUMNS]; ROWS];
        for (row, colors) in layout.colors.iter().enumerate() {
            for (column, &color) in colors.iter().enumerate() {
                cells[row][column] = Cell {
                    color,
                    has_star: layout.has_star((row, column)),
                    crossed: false,
                };
            }
        }

        Self { cells }
    }

    /// # Returns
    ///
    /// The [cell](Cell) at `coordinate` or [None] if it is off the board.
    pub fn cell(&self, (row, column): Coordinate) -> Option<&Cell> {
        self.cells.get(row)?.get(column)
    }

    /// # Returns
    ///
    /// Every [cell](Cell) indexed by row then column.
    pub fn cells(&self) -> &[[Cell; COLUMNS]; ROWS] {
        &self.cells
    }

    /// Crosses the [cell](Cell) at `coordinate`.
    ///
    /// # Returns
    ///
    /// Whether a star was collected, which is only when the cell has a star and
    /// was not already crossed.
    pub(crate) fn cross(&mut self, (row, column): Coordinate) -> bool {
        match self
            .cells
            .get_mut(row)
            .and_then(|cells| cells.get_mut(column))
        {
            Some(cell) if !cell.crossed => {
                cell.crossed = true;
                cell.has_star
            }
            _ => false,
        }
    }

    /// Whether the [cell](Cell) at `coordinate` is on the board, uncrossed, and has the
    /// [color](Color).
    fn is_open(&self, coordinate: Coordinate, color: Color) -> bool {
        self.cell(coordinate)
            .map_or(false, |cell| !cell.crossed && cell.color == color)
    }

    /// Searches breadth first from `start` through uncrossed [cells](Cell) of `color` which are
    /// adjacent to each other.
    ///
    /// # Returns
    ///
    /// The maximal group of connected uncrossed [cells](Cell) of `color` containing `start`, or
    /// an empty set when `start` is off the board, crossed, or a different [color](Color).
    pub fn find_connected_group(&self, start: Coordinate, color: Color) -> BTreeSet<Coordinate> {
        self.search(start, color, &mut BTreeSet::new())
            .into_iter()
            .collect()
    }

    /// Finds every maximal group of connected uncrossed [cells](Cell) of `color`.
    ///
    /// # Returns
    ///
    /// [Components](Component) in the order their first cell appears scanning rows top to bottom
    /// and columns left to right. Cells in each [component](Component) are in breadth first order
    /// from that first cell, visiting neighbors up, left, right, then down.
    pub fn find_connected_components(&self, color: Color) -> Vec<Component> {
        let mut visited = BTreeSet::new();
        let mut components = Vec::new();
        for row in 0..ROWS {
            for column in 0..COLUMNS {
                if !visited.contains(&(row, column)) && self.is_open((row, column), color) {
                    components.push(self.search((row, column), color, &mut visited));
                }
            }
        }

        components
    }

    fn search(
        &self,
        start: Coordinate,
        color: Color,
        visited: &mut BTreeSet<Coordinate>,
    ) -> Component {
        let mut component = Component::new();
        if !self.is_open(start, color) || !visited.insert(start) {
            return component;
        }

        let mut queue = VecDeque::from([start]);
        while let Some(coordinate) = queue.pop_front() {
            component.push(coordinate);
            for adjacent in adjacent_coordinates(coordinate) {
                // marked on enqueue so no cell is queued twice
                if self.is_open(adjacent, color) && visited.insert(adjacent) {
                    queue.push_back(adjacent);
                }
            }
        }

        component
    }

    /// # Returns
    ///
    /// Whether any [cell](Cell) of `color` is crossed.
    pub fn has_crossed_color(&self, color: Color) -> bool {
        self.cells
            .iter()
            .flatten()
            .any(|cell| cell.crossed && cell.color == color)
    }

    /// # Returns
    ///
    /// The number of uncrossed [cells](Cell) of `color`.
    pub fn uncrossed_in_color(&self, color: Color) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.crossed && cell.color == color)
            .count()
    }

    /// # Returns
    ///
    /// The number of uncrossed [cells](Cell) in `column`, `0` if the column is off the board.
    pub fn uncrossed_in_column(&self, column: usize) -> usize {
        self.cells
            .iter()
            .filter_map(|cells| cells.get(column))
            .filter(|cell| !cell.crossed)
            .count()
    }

    /// # Returns
    ///
    /// Whether every [cell](Cell) in `column` is crossed.
    pub fn is_column_complete(&self, column: usize) -> bool {
        column < COLUMNS && self.uncrossed_in_column(column) == 0
    }

    /// # Returns
    ///
    /// Whether every [cell](Cell) of `color` is crossed. Always false for a [color](Color)
    /// missing from the board.
    pub fn is_color_complete(&self, color: Color) -> bool {
        self.has_crossed_color(color) && self.uncrossed_in_color(color) == 0
    }

    /// # Returns
    ///
    /// Whether some [cell](Cell) adjacent to `coordinate` is crossed, whatever its
    /// [color](Color).
    pub fn touches_crossed(&self, coordinate: Coordinate) -> bool {
        adjacent_coordinates(coordinate)
            .filter_map(|adjacent| self.cell(adjacent))
            .any(|cell| cell.crossed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{random_crosses, OfficialBoard};
    use itertools::Itertools;
    use map_macro::btree_set;

    fn classic() -> Board {
        Board::from_layout(&OfficialBoard::Classic.layout())
    }

    #[test]
    fn from_layout_uncrossed() {
        let layout = OfficialBoard::Classic.layout();
        let board = Board::from_layout(&layout);

        for row in 0..ROWS {
            for column in 0..COLUMNS {
                let cell = board.cell((row, column)).unwrap();
                assert_eq!(layout.colors[row][column], cell.color);
                assert_eq!(layout.has_star((row, column)), cell.has_star);
                assert!(!cell.crossed);
            }
        }
        assert_eq!(None, board.cell((ROWS, 0)));
    }

    #[test]
    fn cross_collects_star_once() {
        let mut board = classic();

        assert!(board.cross((0, 7)));
        assert!(!board.cross((0, 7)));
        assert!(!board.cross((0, 0)));
        assert!(!board.cross((ROWS, COLUMNS)));
        assert!(board.cell((0, 7)).unwrap().crossed);
    }

    #[test]
    fn find_connected_group_whole_component() {
        let board = classic();
        let expected = btree_set! { (0, 0), (0, 1), (0, 2), (1, 1), (2, 1) };

        for &start in &expected {
            assert_eq!(expected, board.find_connected_group(start, Color::Green));
        }
    }

    #[test]
    fn find_connected_group_empty() {
        let mut board = classic();
        board.cross((0, 0));

        assert!(board.find_connected_group((0, 0), Color::Green).is_empty());
        assert!(board.find_connected_group((0, 1), Color::Yellow).is_empty());
        assert!(board.find_connected_group((ROWS, 0), Color::Green).is_empty());
    }

    #[test]
    fn find_connected_group_split_by_cross() {
        let mut board = classic();
        board.cross((0, 1));

        assert_eq!(
            btree_set! { (0, 0) },
            board.find_connected_group((0, 0), Color::Green)
        );
        assert_eq!(
            btree_set! { (0, 2) },
            board.find_connected_group((0, 2), Color::Green)
        );
        assert_eq!(
            btree_set! { (1, 1), (2, 1) },
            board.find_connected_group((2, 1), Color::Green)
        );
    }

    #[test]
    fn find_connected_components_classic_green() {
        let board = classic();

        assert_eq!(
            vec![
                vec![(0, 0), (0, 1), (0, 2), (1, 1), (2, 1)],
                vec![(0, 7)],
                vec![(1, 3), (2, 3), (2, 4), (3, 3), (2, 5), (2, 6)],
                vec![(1, 13), (1, 14), (2, 13), (2, 14)],
                vec![(3, 8), (3, 9)],
                vec![(6, 10), (6, 11), (6, 12)],
            ],
            board.find_connected_components(Color::Green)
        );
    }

    #[test]
    fn find_connected_components_cover_color() {
        let board = classic();

        for color in Color::board_colors() {
            let components = board.find_connected_components(color);
            let cells = components.iter().flatten().copied().collect_vec();

            assert_eq!(board.uncrossed_in_color(color), cells.len());
            assert_eq!(0, cells.iter().duplicates().count());
        }
        assert!(board.find_connected_components(Color::Purple).is_empty());
    }

    #[test]
    fn columns_and_colors() {
        let mut board = classic();

        assert_eq!(ROWS, board.uncrossed_in_column(0));
        assert!(!board.is_column_complete(0));
        for row in 0..ROWS {
            board.cross((row, 0));
        }
        assert_eq!(0, board.uncrossed_in_column(0));
        assert!(board.is_column_complete(0));
        assert!(!board.is_column_complete(COLUMNS));

        assert!(board.has_crossed_color(Color::Blue));
        assert!(!board.is_color_complete(Color::Blue));
        assert!(!board.is_color_complete(Color::Purple));
    }

    #[test]
    fn is_color_complete_every_cell() {
        let mut board = classic();
        let yellow = board
            .find_connected_components(Color::Yellow)
            .into_iter()
            .flatten()
            .collect_vec();

        for &coordinate in &yellow[1..] {
            board.cross(coordinate);
        }
        assert_eq!(1, board.uncrossed_in_color(Color::Yellow));
        assert!(!board.is_color_complete(Color::Yellow));

        board.cross(yellow[0]);
        assert_eq!(0, board.uncrossed_in_color(Color::Yellow));
        assert!(board.is_color_complete(Color::Yellow));
    }

    #[test]
    fn touches_crossed_any_color() {
        let mut board = classic();

        assert!(!board.touches_crossed((0, 8)));
        board.cross((0, 7));
        assert!(board.touches_crossed((0, 8)));
        assert!(board.touches_crossed((1, 7)));
        assert!(!board.touches_crossed((0, 7)));
    }

    #[test]
    fn find_connected_group_matches_components_random_crosses() {
        let mut board = classic();
        random_crosses(&mut rand::thread_rng(), &mut board);

        for color in Color::board_colors() {
            let components = board.find_connected_components(color);
            let covered = components.iter().map(Vec::len).sum::<usize>();
            assert_eq!(board.uncrossed_in_color(color), covered);

            for component in components {
                let group = board.find_connected_group(component[0], color);
                assert_eq!(component.iter().copied().collect::<BTreeSet<_>>(), group);
                assert!(component
                    .iter()
                    .filter_map(|&square| board.cell(square))
                    .all(|cell| !cell.crossed && cell.color == color));
            }
        }
    }
}
