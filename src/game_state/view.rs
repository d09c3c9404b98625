use crate::{
    final_score, ClaimedColors, ClaimedColumns, Dice, GameState, JokerFlags, Phase, Players,
    ScoreBreakdown, SelectedDice,
};

/// Immutably borrows properties from [GameState] for a front end.
#[derive(Debug)]
pub struct GameView<'a> {
    /// Identifies the game.
    pub game_id: u64,
    /// The players in seating order.
    pub players: &'a Players,
    /// The index of the player whose choice is being processed.
    pub current_player: usize,
    /// The index of the player who rolled this round.
    pub active_player: usize,
    /// The current phase.
    pub phase: Phase,
    /// The dice of the current roll.
    pub dice: &'a Dice,
    /// The pending choice of dice.
    pub selected_dice: SelectedDice,
    /// Whether each pending die is wild.
    pub selected_from_joker: JokerFlags,
    /// A map of columns to the player who completed them first.
    pub claimed_first_column_bonus: &'a ClaimedColumns,
    /// A map of colors to the player who completed them first.
    pub claimed_first_color_bonus: &'a ClaimedColors,
    /// The index of the player who ended the game.
    pub winner: Option<usize>,
    /// The [score](final_score) of each player in seating order.
    pub scores: Vec<ScoreBreakdown>,
}

impl<'a> GameState {
    /// # Returns
    ///
    /// A new [GameView] struct, which immutably borrows properties from [GameState] and adds
    /// the [score](final_score) of every player.
    pub fn view(&'a self) -> GameView<'a> {
        GameView {
            game_id: self.game_id,
            players: &self.players,
            current_player: self.current_player,
            active_player: self.active_player,
            phase: self.phase,
            dice: &self.dice,
            selected_dice: self.selected_dice,
            selected_from_joker: self.selected_from_joker,
            claimed_first_column_bonus: &self.claimed_first_column_bonus,
            claimed_first_color_bonus: &self.claimed_first_color_bonus,
            winner: self.winner,
            scores: self.players.iter().map(final_score).collect(),
        }
    }
}
