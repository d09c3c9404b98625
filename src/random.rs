use crate::{Board, Coordinate, COLUMNS, ROWS};
use rand::Rng;

/// # Returns
///
/// A random [coordinate](Coordinate) on the board.
pub fn random_coordinate<R: Rng + ?Sized>(rng: &mut R) -> Coordinate {
    (rng.gen_range(0..ROWS), rng.gen_range(0..COLUMNS))
}

/// It crosses a random, small number of random [cells](crate::Cell) on the board. Some may
/// already be crossed.
///
/// # Returns
///
/// The number of newly crossed [cells](crate::Cell).
pub fn random_crosses<R: Rng + ?Sized>(rng: &mut R, board: &mut Board) -> usize {
    let crossed = |board: &Board| board.cells().iter().flatten().filter(|cell| cell.crossed).count();
    let before = crossed(board);

    for _ in 0..rng.gen_range(1..ROWS * COLUMNS / 2) {
        board.cross(random_coordinate(rng));
    }

    crossed(board) - before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{in_bounds, OfficialBoard};

    #[test]
    fn random_coordinate_in_bounds() {
        let mut rng = rand::thread_rng();

        for _ in 0..100 {
            assert!(in_bounds(random_coordinate(&mut rng)));
        }
    }

    #[test]
    fn random_crosses_counts() {
        let mut board = Board::from_layout(&OfficialBoard::Classic.layout());

        let crosses = random_crosses(&mut rand::thread_rng(), &mut board);

        let crossed = board.cells().iter().flatten().filter(|cell| cell.crossed).count();
        assert_eq!(crossed, crosses);
        assert!(crosses > 0);
    }
}
