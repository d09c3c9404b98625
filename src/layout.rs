use crate::{Color, Coordinate, COLUMNS, ROWS};
use rand::Rng;
use std::collections::BTreeSet;

pub use random::*;
pub use validate::*;

mod official;
mod random;
mod validate;

/// The printed description of a board before any cell is crossed: the [color](Color) of every
/// cell and the [coordinates](Coordinate) of the stars.
///
/// Layouts come from [OfficialBoard::layout] or [random_layout] and are checked by
/// [validate_layout] before a game starts.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct BoardLayout {
    /// The [color](Color) of each cell, indexed by row then column.
    pub colors: [[Color; COLUMNS]; ROWS],
    /// An ordered set of [coordinates](Coordinate) of cells with a star.
    pub stars: BTreeSet<Coordinate>,
}

impl BoardLayout {
    /// # Returns
    ///
    /// The [color](Color) of the cell at `coordinate` or [None] if it is off the board.
    pub fn color_at(&self, (row, column): Coordinate) -> Option<Color> {
        self.colors.get(row)?.get(column).copied()
    }

    /// # Returns
    ///
    /// Whether the cell at `coordinate` has a star.
    pub fn has_star(&self, coordinate: Coordinate) -> bool {
        self.stars.contains(&coordinate)
    }
}

/// Describes one of the printed board layouts.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum OfficialBoard {
    /// `"classic"`, the default board.
    Classic,
    /// `"blue"`.
    Blue,
    /// `"green"`.
    Green,
    /// `"red"`.
    Red,
    /// `"orange"`.
    Orange,
}

impl OfficialBoard {
    /// The number of [`OfficialBoard`] variants. 5 boards.
    pub const OFFICIAL_BOARDS_LEN: usize = 5;

    /// # Returns
    ///
    /// An array of all [`OfficialBoard`] variants in order.
    #[inline]
    pub fn boards() -> [OfficialBoard; OfficialBoard::OFFICIAL_BOARDS_LEN] {
        [
            OfficialBoard::Classic,
            OfficialBoard::Blue,
            OfficialBoard::Green,
            OfficialBoard::Red,
            OfficialBoard::Orange,
        ]
    }

    /// The identifier of the board used by board pickers.
    pub fn id(self) -> &'static str {
        match self {
            OfficialBoard::Classic => "classic",
            OfficialBoard::Blue => "blue",
            OfficialBoard::Green => "green",
            OfficialBoard::Red => "red",
            OfficialBoard::Orange => "orange",
        }
    }

    /// # Returns
    ///
    /// The board with the identifier `id` or [None] if no printed board has it.
    pub fn from_id(id: &str) -> Option<OfficialBoard> {
        OfficialBoard::boards()
            .into_iter()
            .find(|board| board.id() == id)
    }

    /// # Returns
    ///
    /// A new copy of the printed layout.
    pub fn layout(self) -> BoardLayout {
        let (colors, stars) = match self {
            OfficialBoard::Classic => (official::CLASSIC_COLORS, official::CLASSIC_STARS),
            OfficialBoard::Blue => (official::BLUE_COLORS, official::BLUE_STARS),
            OfficialBoard::Green => (official::GREEN_COLORS, official::GREEN_STARS),
            OfficialBoard::Red => (official::RED_COLORS, official::RED_STARS),
            OfficialBoard::Orange => (official::ORANGE_COLORS, official::ORANGE_STARS),
        };
        BoardLayout {
            colors,
            stars: stars.into_iter().collect(),
        }
    }
}

/// Describes which layout a player asked for at setup.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BoardChoice {
    /// One of the printed layouts.
    Official(OfficialBoard),
    /// A new layout from [random_layout].
    Random,
}

impl Default for BoardChoice {
    fn default() -> Self {
        BoardChoice::Official(OfficialBoard::Classic)
    }
}

impl BoardChoice {
    /// The identifier of the random board choice used by board pickers.
    pub const RANDOM_ID: &'static str = "random";

    /// # Returns
    ///
    /// The choice with the identifier `id` or [None] if no choice has it.
    pub fn from_id(id: &str) -> Option<BoardChoice> {
        if id == BoardChoice::RANDOM_ID {
            return Some(BoardChoice::Random);
        }
        OfficialBoard::from_id(id).map(BoardChoice::Official)
    }

    /// # Returns
    ///
    /// The layout for this choice, generating one when the choice is [BoardChoice::Random].
    pub fn resolve<R: Rng + ?Sized>(self, rng: &mut R) -> BoardLayout {
        match self {
            BoardChoice::Official(board) => board.layout(),
            BoardChoice::Random => random_layout(rng),
        }
    }
}
