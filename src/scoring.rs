use crate::{
    Player, COLOR_FIRST_POINTS, COLOR_SECOND_POINTS, COLUMN_FIRST_POINTS, COLUMN_SECOND_POINTS,
    TOTAL_STARS,
};

/// The parts of a player's score. Every part is derived from the player's record so the
/// breakdown can be computed at any time, not only when the game is over.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct ScoreBreakdown {
    /// Points from completed columns.
    pub columns_score: usize,
    /// One point for each unused joker.
    pub jokers_score: usize,
    /// Points from completed [colors](crate::Color).
    pub colors_score: usize,
    /// One point lost for each star not collected.
    pub star_penalty: usize,
    /// `columns_score + jokers_score + colors_score - star_penalty`, which may be negative.
    pub total_score: isize,
}

/// # Returns
///
/// The sum of [COLUMN_FIRST_POINTS] for each column the player completed first and
/// [COLUMN_SECOND_POINTS] for each column the player completed later. A column recorded as both
/// is only counted as first.
pub fn column_score(player: &Player) -> usize {
    let first = &player.completed_columns_first;
    let first_points: usize = first
        .iter()
        .filter_map(|&column| COLUMN_FIRST_POINTS.get(column))
        .sum();
    let second_points: usize = player
        .completed_columns_not_first
        .iter()
        .filter(|&&column| !first.contains(&column))
        .filter_map(|&column| COLUMN_SECOND_POINTS.get(column))
        .sum();

    first_points + second_points
}

/// # Returns
///
/// [COLOR_FIRST_POINTS] for each [color](crate::Color) the player completed first and
/// [COLOR_SECOND_POINTS] for each [color](crate::Color) the player completed later.
pub fn colors_score(player: &Player) -> usize {
    player.completed_colors_first.len() * COLOR_FIRST_POINTS
        + player.completed_colors_not_first.len() * COLOR_SECOND_POINTS
}

/// # Returns
///
/// The number of stars the player has not collected out of [TOTAL_STARS].
pub fn star_penalty(player: &Player) -> usize {
    TOTAL_STARS.saturating_sub(player.stars_collected)
}

/// # Returns
///
/// The [breakdown](ScoreBreakdown) of the player's score.
pub fn final_score(player: &Player) -> ScoreBreakdown {
    let columns_score = column_score(player);
    let jokers_score = player.jokers_remaining;
    let colors_score = colors_score(player);
    let star_penalty = star_penalty(player);
    let total_score = (columns_score + jokers_score + colors_score) as isize - star_penalty as isize;

    ScoreBreakdown {
        columns_score,
        jokers_score,
        colors_score,
        star_penalty,
        total_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{column_index, Color, OfficialBoard, DEFAULT_JOKERS};
    use smallvec::smallvec;
    use tap::Tap;

    fn player() -> Player {
        Player::new(0, "Di".to_string(), false, &OfficialBoard::Classic.layout())
    }

    #[test]
    fn final_score_recorded_lists() {
        let player = player().tap_mut(|player| {
            player.completed_columns_first = smallvec![column_index('A').unwrap()];
            player.completed_columns_not_first =
                smallvec![column_index('B').unwrap(), column_index('I').unwrap()];
            player.jokers_remaining = 3;
            player.stars_collected = 10;
            player.completed_colors_first = smallvec![Color::Red, Color::Blue];
            player.completed_colors_not_first = smallvec![Color::Green];
        });

        assert_eq!(
            ScoreBreakdown {
                columns_score: 8,
                jokers_score: 3,
                colors_score: 13,
                star_penalty: 5,
                total_score: 19,
            },
            final_score(&player)
        );
    }

    #[test]
    fn final_score_new_player_negative() {
        let breakdown = final_score(&player());

        assert_eq!(0, breakdown.columns_score);
        assert_eq!(DEFAULT_JOKERS, breakdown.jokers_score);
        assert_eq!(0, breakdown.colors_score);
        assert_eq!(TOTAL_STARS, breakdown.star_penalty);
        assert_eq!(
            DEFAULT_JOKERS as isize - TOTAL_STARS as isize,
            breakdown.total_score
        );
    }

    #[test]
    fn column_score_first_wins_over_not_first() {
        let player = player().tap_mut(|player| {
            player.completed_columns_first = smallvec![0];
            player.completed_columns_not_first = smallvec![0, 14];
        });

        assert_eq!(
            COLUMN_FIRST_POINTS[0] + COLUMN_SECOND_POINTS[14],
            column_score(&player)
        );
    }

    #[test]
    fn column_score_anchor() {
        let first = player().tap_mut(|player| player.completed_columns_first = smallvec![7]);
        let second = player().tap_mut(|player| player.completed_columns_not_first = smallvec![7]);

        assert_eq!(1, column_score(&first));
        assert_eq!(0, column_score(&second));
    }

    #[test]
    fn star_penalty_all_stars() {
        let player = player().tap_mut(|player| player.stars_collected = TOTAL_STARS);

        assert_eq!(0, star_penalty(&player));
    }
}
