//! Concrete structs to represent and protect the state of a dice game where players cross
//! connected squares of color on their own boards, with methods to progress through the phases
//! of the game.
//!
//! ## Summary
//!
//! Every player owns a [board](Board) of `7` rows and `15` columns of colored [cells](Cell).
//! Each round, the active player [rolls](GameState::roll_dice) `3` color dice and `3` number
//! dice. The active player and then every other player in seating order may choose one color
//! die and one number die from the roll and [cross](GameState::propose_move) that many
//! connected squares of that [color](Color), or [skip](GameState::skip_turn). Players earn
//! points for completing columns and colors, lose points for stars left uncollected, and keep
//! the jokers they never spent. The game ends the moment some player completes
//! [COLORS_TO_WIN] colors.
//!
//! ## What are the phases of the game?
//!
//! * `Rolling`: The active player is about to [roll](GameState::roll_dice).
//! * `ActiveSelection`: The active player chooses dice and squares from the roll.
//! * `PassiveSelection`: Some other player chooses dice and squares from the same roll.
//! * `PlayerSwitching`: A pause between two players until
//! [the switch completes](GameState::complete_player_switch).
//! * `GameOver`: Nothing advances the game any more.
//!
//! Every phase but the last two is acted in either by a person or by the computer. Represented
//! by [Phase].
//!
//! ## How is the game created?
//!
//! [GameState::new] seats one player per [setup](PlayerSetup) on an
//! [official board](OfficialBoard) or a [random board](random_layout). Every
//! [layout](BoardLayout) is [validated](validate_layout) before the game starts.
//!
//! ## How is the game advanced?
//!
//! A person [rolls](GameState::roll_dice), [selects dice](GameState::select_die),
//! [proposes squares](GameState::propose_move) or [skips](GameState::skip_turn). Every
//! rejected call returns the reasons why it was rejected and leaves the state unchanged.
//!
//! The computer and the pause between players are driven by
//! [automations](GameState::pending_automation). Each automation carries a [Ticket] and
//! only [fires](GameState::fire) while the state is still in the phase it was scheduled for.
//!
//! Both kinds of input can also be fed as [events](GameEvent) through [GameState::apply] or
//! the pure [transition] function.
//!
//! ### What is a valid move?
//!
//! Squares are valid when [check_move] accepts them: they are uncrossed, of one
//! [color](Color), connected to each other, and either touch the
//! [anchor column](ANCHOR_COLUMN) for the first crossing of the [color](Color) or sit next to
//! an already crossed square afterwards.
//!
//! ### What are jokers?
//!
//! Wild dice may stand for any [color](Color) or number. Each wild die used in a move spends
//! one of the player's [jokers](DEFAULT_JOKERS), and remaining jokers are worth a point each at
//! the end.
//!
//! ## How are points calculated?
//!
//! [final_score] adds the [column points](column_score), the remaining jokers, and the
//! [color points](colors_score), then subtracts the [star penalty](star_penalty). The first
//! player to complete a column or [color](Color) claims the higher bonus forever.
//!
//! ## How does the computer play?
//!
//! [select_move] scores every candidate move from the unused dice and picks the best one, or
//! none when the computer should skip.
//!
//! ## How is the game viewed?
//!
//! [GameState::view] borrows an immutable [GameView] with the score of every player.
//!
//! ## How is the game run?
//!
//! [run_game] drives a game with [Participant]s at every seat and a [Clock] for the
//! automations until the game is over.
//!
//! ## How are game states tested when properties are private?
//!
//! The `test` build configuration adds many required methods for testing. [GameState]
//! implements methods to get mutable references to its properties and methods to set up
//! common scenarios.

// Document!
#![forbid(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]
// Don't leave a build in a half finished state!
#![deny(
    warnings,
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    unused,
    unreachable_pub,
    missing_debug_implementations,
    unsafe_code
)]

pub use ai::*;
pub use board::*;
pub use color::*;
pub use consts::*;
pub use coordinate::*;
pub use dice::*;
pub use game_state::*;
pub use layout::*;
pub use moves::*;
pub use player::*;
#[cfg(test)]
pub use random::*;
pub use runtime::*;
pub use scoring::*;
pub use types::*;

mod ai;
mod board;
mod color;
mod consts;
mod coordinate;
mod dice;
mod game_state;
mod layout;
mod moves;
mod player;
#[cfg(test)]
mod random;
mod runtime;
mod scoring;
mod types;
