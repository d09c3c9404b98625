use crate::{
    Actor, ClaimedColors, ClaimedColumns, ColorFace, Dice, DieId, GameState, NumberFace,
    OfficialBoard, Phase, Players, RolledFaces, DICE_PER_KIND,
};

impl GameState {
    /// Generates a game with one player per `(name, is_ai)` pair, every player on the
    /// [classic board](OfficialBoard::Classic).
    ///
    /// # Returns
    ///
    /// A [GameState] where the first player is about to roll.
    pub fn fixture(seats: &[(&str, bool)]) -> GameState {
        let seats = seats
            .iter()
            .map(|&(name, is_ai)| (name.to_string(), is_ai, OfficialBoard::Classic.layout()));

        GameState::from_layouts(0, seats).unwrap()
    }

    /// Two people on classic boards.
    pub fn two_humans() -> GameState {
        GameState::fixture(&[("Ann", false), ("Bo", false)])
    }

    /// A person who rolls first and a computer player.
    pub fn human_and_ai() -> GameState {
        GameState::fixture(&[("Ann", false), ("Bot", true)])
    }

    /// A computer player who rolls first and a person.
    pub fn ai_and_human() -> GameState {
        GameState::fixture(&[("Bot", true), ("Ann", false)])
    }

    /// Skips the rolling phase and lets the current player choose from a roll showing the
    /// faces as the active player.
    pub fn with_roll(
        mut self,
        colors: [ColorFace; DICE_PER_KIND],
        numbers: [NumberFace; DICE_PER_KIND],
    ) -> GameState {
        self.dice = RolledFaces { colors, numbers }.into_dice(&mut self.next_die_id);
        self.active_player = self.current_player;
        self.clear_selection();
        self.phase = Phase::ActiveSelection(Actor::of(self.current().is_ai));
        self
    }

    /// The id of the die at `index` of the current roll.
    pub fn die_id(&self, index: usize) -> DieId {
        self.dice[index].id
    }

    /// Selects the color die at `color` and the number die at `number` of the current roll.
    pub fn select(&mut self, color: usize, number: usize) {
        self.select_die(self.die_id(color)).unwrap();
        self.select_die(self.die_id(number)).unwrap();
    }

    /// A mutable reference to `self.players`.
    pub fn mut_players(&mut self) -> &mut Players {
        &mut self.players
    }

    /// A mutable reference to `self.phase`.
    pub fn mut_phase(&mut self) -> &mut Phase {
        &mut self.phase
    }

    /// A mutable reference to `self.dice`.
    pub fn mut_dice(&mut self) -> &mut Dice {
        &mut self.dice
    }

    /// A mutable reference to `self.current_player`.
    pub fn mut_current_player(&mut self) -> &mut usize {
        &mut self.current_player
    }

    /// A mutable reference to `self.active_player`.
    pub fn mut_active_player(&mut self) -> &mut usize {
        &mut self.active_player
    }

    /// A mutable reference to `self.claimed_first_column_bonus`.
    pub fn mut_claimed_first_column_bonus(&mut self) -> &mut ClaimedColumns {
        &mut self.claimed_first_column_bonus
    }

    /// A mutable reference to `self.claimed_first_color_bonus`.
    pub fn mut_claimed_first_color_bonus(&mut self) -> &mut ClaimedColors {
        &mut self.claimed_first_color_bonus
    }
}
