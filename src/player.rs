use crate::{Board, BoardChoice, BoardLayout, Color, Colors, Columns, DEFAULT_JOKERS};

/// The choices a person makes about a seat before the game is created.
///
/// # See Also
///
/// * [GameState::new](crate::GameState::new)
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct PlayerSetup {
    /// The name shown for the player. Must not be blank.
    pub name: String,
    /// Whether the computer acts for the player.
    pub is_ai: bool,
    /// The layout of the player's [board](Board).
    pub board: BoardChoice,
}

impl PlayerSetup {
    /// A human seat on the [default board](BoardChoice::default).
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_ai: false,
            board: BoardChoice::default(),
        }
    }

    /// A computer seat on the [default board](BoardChoice::default).
    pub fn ai(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_ai: true,
            board: BoardChoice::default(),
        }
    }
}

/// A seat at the table with its own [board](Board) and its record of completions. Scores are
/// derived from the record by [final_score](crate::final_score).
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Player {
    pub(crate) id: usize,
    pub(crate) name: String,
    pub(crate) is_ai: bool,
    pub(crate) board: Board,
    pub(crate) stars_collected: usize,
    pub(crate) completed_colors_first: Colors,
    pub(crate) completed_colors_not_first: Colors,
    pub(crate) completed_columns_first: Columns,
    pub(crate) completed_columns_not_first: Columns,
    pub(crate) jokers_remaining: usize,
}

impl Player {
    pub(crate) fn new(id: usize, name: String, is_ai: bool, layout: &BoardLayout) -> Self {
        Self {
            id,
            name,
            is_ai,
            board: Board::from_layout(layout),
            stars_collected: 0,
            completed_colors_first: Colors::new(),
            completed_colors_not_first: Colors::new(),
            completed_columns_first: Columns::new(),
            completed_columns_not_first: Columns::new(),
            jokers_remaining: DEFAULT_JOKERS,
        }
    }

    /// The index of the player in seating order.
    pub fn id(&self) -> usize {
        self.id
    }

    /// The name shown for the player.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the computer acts for the player.
    pub fn is_ai(&self) -> bool {
        self.is_ai
    }

    /// The player's [board](Board).
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The number of crossed [cells](crate::Cell) with a star.
    pub fn stars_collected(&self) -> usize {
        self.stars_collected
    }

    /// [Colors](Color) this player completed before anyone else.
    pub fn completed_colors_first(&self) -> &Colors {
        &self.completed_colors_first
    }

    /// [Colors](Color) this player completed after someone else did.
    pub fn completed_colors_not_first(&self) -> &Colors {
        &self.completed_colors_not_first
    }

    /// # Returns
    ///
    /// Every completed [color](Color), the first completions followed by the later ones.
    pub fn completed_colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.completed_colors_first
            .iter()
            .chain(&self.completed_colors_not_first)
            .copied()
    }

    /// Columns this player completed before anyone else.
    pub fn completed_columns_first(&self) -> &Columns {
        &self.completed_columns_first
    }

    /// Columns this player completed after someone else did.
    pub fn completed_columns_not_first(&self) -> &Columns {
        &self.completed_columns_not_first
    }

    /// The number of wild dice the player may still use. Never negative.
    pub fn jokers_remaining(&self) -> usize {
        self.jokers_remaining
    }
}
