use num_derive::FromPrimitive;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::fmt;

/// Describes the color of a [cell](crate::Cell) on a board or the face of a color
/// [die](crate::Die).
///
/// Boards only use the first [`Color::BOARD_COLORS_LEN`] colors. [`Color::Purple`] is never
/// rolled and never printed on a board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, FromPrimitive)]
pub enum Color {
    /// `0`.
    Yellow = 0,
    /// `1`.
    Green = 1,
    /// `2`.
    Blue = 2,
    /// `3`.
    Red = 3,
    /// `4`.
    Orange = 4,
    /// `5`.
    Purple = 5,
}

impl Color {
    /// The number of [`Color`] variants. 6 colors.
    pub const COLORS_LEN: usize = 6;
    /// The number of [`Color`] variants printed on boards and rolled on dice. 5 colors.
    pub const BOARD_COLORS_LEN: usize = 5;

    /// # Returns
    ///
    /// An array of all [`Color`] variants in order.
    #[inline]
    pub fn colors() -> [Color; Color::COLORS_LEN] {
        [
            Color::Yellow,
            Color::Green,
            Color::Blue,
            Color::Red,
            Color::Orange,
            Color::Purple,
        ]
    }

    /// # Returns
    ///
    /// An array of the [`Color`] variants printed on boards and rolled on dice in order.
    #[inline]
    pub fn board_colors() -> [Color; Color::BOARD_COLORS_LEN] {
        [
            Color::Yellow,
            Color::Green,
            Color::Blue,
            Color::Red,
            Color::Orange,
        ]
    }

    /// The lowercase name of the color.
    pub fn name(self) -> &'static str {
        match self {
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Purple => "purple",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Samples one of the [board colors](Color::board_colors) uniformly.
impl Distribution<Color> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        let index = rng.gen_range(0..Color::BOARD_COLORS_LEN);
        num::FromPrimitive::from_usize(index).unwrap_or_else(|| {
            dbg!(index, Color::BOARD_COLORS_LEN);
            unreachable!(
                "index ({:?}) should be matched since colors cover all indexes \
                in range 0..Color::BOARD_COLORS_LEN (0..{:?}).",
                index,
                Color::BOARD_COLORS_LEN
            );
        })
    }
}
