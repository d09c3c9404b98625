use crate::{BoardLayout, Color, Coordinate, OfficialBoard, COLUMNS, ROWS};
use rand::seq::SliceRandom;
use rand::Rng;

/// Creates a new [layout](BoardLayout) by transforming a random
/// [printed layout](OfficialBoard). Each of a horizontal mirror, a vertical mirror, and a half
/// turn is applied with probability `0.5`, moving the stars with their cells. Afterwards the
/// [board colors](Color::board_colors) are shuffled.
///
/// Transformations only move cells and rename colors, so the result passes
/// [validate_layout](crate::validate_layout) whenever the template does.
pub fn random_layout<R: Rng + ?Sized>(rng: &mut R) -> BoardLayout {
    let template = OfficialBoard::boards()[rng.gen_range(0..OfficialBoard::OFFICIAL_BOARDS_LEN)];
    let mut layout = template.layout();

    if rng.gen_bool(0.5) {
        layout = transform(&layout, |(row, column)| (row, COLUMNS - 1 - column));
    }
    if rng.gen_bool(0.5) {
        layout = transform(&layout, |(row, column)| (ROWS - 1 - row, column));
    }
    if rng.gen_bool(0.5) {
        layout = transform(&layout, |(row, column)| {
            (ROWS - 1 - row, COLUMNS - 1 - column)
        });
    }

    let mut shuffled = Color::board_colors();
    shuffled.shuffle(rng);
    for color in layout.colors.iter_mut().flatten() {
        *color = shuffled.get(*color as usize).copied().unwrap_or(*color);
    }

    log::debug!("generated a random layout from {}", template.id());
    layout
}

/// Moves every cell and star of `layout` from `coordinate` to `f(coordinate)`, where `f` is a
/// bijection on the board.
fn transform<F>(layout: &BoardLayout, f: F) -> BoardLayout
where
    F: Fn(Coordinate) -> Coordinate,
{
    let mut colors = layout.colors;
    for (row, cells) in layout.colors.iter().enumerate() {
        for (column, &color) in cells.iter().enumerate() {
            let (new_row, new_column) = f((row, column));
            colors[new_row][new_column] = color;
        }
    }

    BoardLayout {
        colors,
        stars: layout.stars.iter().map(|&star| f(star)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TOTAL_STARS;

    #[test]
    fn transform_mirror_twice() {
        let layout = OfficialBoard::Classic.layout();
        let mirror = |(row, column): Coordinate| (row, COLUMNS - 1 - column);

        let mirrored = transform(&layout, mirror);

        assert_ne!(layout, mirrored);
        assert_eq!(layout, transform(&mirrored, mirror));
    }

    #[test]
    fn transform_moves_stars_with_cells() {
        let layout = OfficialBoard::Classic.layout();
        let turn = |(row, column): Coordinate| (ROWS - 1 - row, COLUMNS - 1 - column);

        let turned = transform(&layout, turn);

        for &star in &layout.stars {
            assert!(turned.has_star(turn(star)));
            assert_eq!(layout.color_at(star), turned.color_at(turn(star)));
        }
    }

    #[test]
    fn random_layout_board_colors_only() {
        let layout = random_layout(&mut rand::thread_rng());

        assert_eq!(TOTAL_STARS, layout.stars.len());
        for color in layout.colors.iter().flatten() {
            assert!(Color::board_colors().contains(color));
        }
    }
}
