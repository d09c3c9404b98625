use crate::{Color, Coordinate, COLUMNS, ROWS, TOTAL_STARS};

const Y: Color = Color::Yellow;
const G: Color = Color::Green;
const B: Color = Color::Blue;
const R: Color = Color::Red;
const O: Color = Color::Orange;

pub(super) const CLASSIC_COLORS: [[Color; COLUMNS]; ROWS] = [
    [G, G, G, Y, Y, Y, Y, G, B, B, B, O, Y, Y, Y],
    [O, G, Y, G, Y, Y, O, O, R, B, B, O, O, G, G],
    [B, G, R, G, G, G, G, R, R, R, Y, Y, O, G, G],
    [B, R, R, G, O, O, B, B, G, G, Y, Y, O, R, B],
    [R, O, O, O, O, R, B, B, O, O, O, R, R, R, R],
    [R, B, B, R, R, R, R, Y, Y, O, R, B, B, B, O],
    [Y, Y, B, B, B, B, R, Y, Y, Y, G, G, G, O, O],
];
pub(super) const CLASSIC_STARS: [Coordinate; TOTAL_STARS] = [
    (2, 0), (5, 1), (1, 2), (5, 3), (1, 4),
    (3, 5), (2, 6), (0, 7), (5, 8), (1, 9),
    (5, 10), (0, 11), (6, 12), (3, 13), (5, 14),
];
pub(super) const BLUE_COLORS: [[Color; COLUMNS]; ROWS] = [
    [R, R, G, G, Y, Y, Y, G, G, R, R, R, R, O, O],
    [O, R, R, B, B, G, Y, G, G, R, G, Y, R, O, O],
    [B, O, O, B, G, G, G, R, O, G, G, G, G, G, Y],
    [B, B, O, O, O, G, R, R, O, O, O, O, B, B, Y],
    [G, B, B, R, R, R, B, B, B, B, O, B, Y, Y, G],
    [G, G, Y, Y, R, B, B, Y, Y, Y, B, B, O, Y, B],
    [Y, Y, Y, Y, R, O, O, O, R, Y, Y, B, O, R, R],
];
pub(super) const BLUE_STARS: [Coordinate; TOTAL_STARS] = [
    (1, 0), (2, 1), (5, 2), (1, 3), (6, 4),
    (1, 5), (0, 6), (4, 7), (6, 8), (1, 9),
    (4, 10), (1, 11), (3, 12), (2, 13), (4, 14),
];
pub(super) const GREEN_COLORS: [[Color; COLUMNS]; ROWS] = [
    [O, G, B, B, R, R, R, G, G, G, Y, Y, Y, R, R],
    [G, G, G, G, R, Y, G, R, G, G, R, Y, Y, R, Y],
    [B, B, O, G, Y, Y, G, B, R, R, R, R, O, O, Y],
    [B, O, O, O, O, G, G, B, B, B, B, O, R, O, O],
    [B, R, O, R, B, O, O, O, B, Y, O, O, R, Y, O],
    [R, R, R, R, B, B, B, Y, Y, Y, O, B, G, G, G],
    [Y, Y, Y, Y, G, B, Y, Y, O, O, G, G, B, B, B],
];
pub(super) const GREEN_STARS: [Coordinate; TOTAL_STARS] = [
    (0, 0), (4, 1), (4, 2), (2, 3), (6, 4),
    (6, 5), (2, 6), (1, 7), (4, 8), (4, 9),
    (0, 10), (5, 11), (3, 12), (4, 13), (4, 14),
];
pub(super) const RED_COLORS: [[Color; COLUMNS]; ROWS] = [
    [G, G, O, O, O, R, R, R, Y, B, B, B, B, B, R],
    [R, O, O, Y, G, G, B, Y, Y, Y, G, O, O, O, R],
    [B, B, B, R, G, G, B, Y, R, R, R, O, G, O, O],
    [B, B, R, R, R, G, G, O, O, R, Y, G, G, G, G],
    [B, R, R, B, B, B, O, B, B, O, Y, Y, Y, Y, B],
    [O, Y, G, G, B, O, O, G, B, O, O, Y, R, R, Y],
    [Y, Y, Y, G, Y, Y, Y, G, G, G, O, R, R, R, Y],
];
pub(super) const RED_STARS: [Coordinate; TOTAL_STARS] = [
    (2, 0), (0, 1), (6, 2), (2, 3), (0, 4),
    (1, 5), (2, 6), (3, 7), (0, 8), (3, 9),
    (1, 10), (5, 11), (5, 12), (1, 13), (4, 14),
];
pub(super) const ORANGE_COLORS: [[Color; COLUMNS]; ROWS] = [
    [Y, G, G, R, R, R, G, G, G, B, R, Y, Y, Y, Y],
    [O, B, B, G, G, G, Y, Y, G, Y, Y, R, R, R, Y],
    [O, O, B, Y, Y, Y, Y, B, B, B, O, O, R, G, G],
    [O, G, G, B, O, O, O, O, B, G, O, O, G, G, G],
    [G, G, G, B, Y, Y, O, O, R, R, R, O, R, R, R],
    [O, G, O, B, Y, R, R, B, B, R, R, Y, R, R, R],
    [O, O, B, B, B, O, O, B, B, B, Y, Y, Y, B, B],
];
pub(super) const ORANGE_STARS: [Coordinate; TOTAL_STARS] = [
    (2, 0), (6, 1), (4, 2), (2, 3), (6, 4),
    (1, 5), (6, 6), (0, 7), (4, 8), (0, 9),
    (1, 10), (5, 11), (2, 12), (6, 13), (5, 14),
];