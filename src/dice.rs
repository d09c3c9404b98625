use crate::{Color, Dice, DICE_PER_KIND};
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::fmt;

/// An opaque token which identifies a [die](Die) within a single game. Every roll creates dice
/// with new ids.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DieId(pub(crate) u64);

impl fmt::Display for DieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "die-{}", self.0)
    }
}

/// Describes the face of a color [die](Die).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ColorFace {
    /// A [board color](Color::board_colors).
    Color(Color),
    /// Takes the [color](Color) of the first square of a move and costs a joker.
    Wild,
}

/// Describes the face of a number [die](Die).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum NumberFace {
    /// A number in range `1..=5`.
    Number(u8),
    /// Takes the number of squares of a move and costs a joker.
    Wild,
}

impl NumberFace {
    /// The largest number printed on a number [die](Die).
    pub const MAX: u8 = 5;

    /// # Returns
    ///
    /// The face showing `number`, or [None] if no number die shows it.
    pub fn number(number: u8) -> Option<Self> {
        (1..=NumberFace::MAX)
            .contains(&number)
            .then_some(NumberFace::Number(number))
    }
}

/// Describes the face of any [die](Die).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DieFace {
    /// The face of a color [die](Die).
    Color(ColorFace),
    /// The face of a number [die](Die).
    Number(NumberFace),
}

/// Describes whether a [die](Die) chooses the [color](Color) or the number of squares.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DieKind {
    /// Chooses the [color](Color).
    Color,
    /// Chooses the number of squares.
    Number,
}

impl fmt::Display for DieKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DieKind::Color => "color",
            DieKind::Number => "number",
        })
    }
}

/// A rolled die which any player may select until the acting player uses it in a move.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Die {
    /// Identifies the die within the game.
    pub id: DieId,
    /// The rolled face.
    pub face: DieFace,
    /// Whether the die was used in an accepted move during this roll.
    pub used: bool,
}

impl Die {
    /// # Returns
    ///
    /// The [kind](DieKind) matching the face.
    pub fn kind(&self) -> DieKind {
        match self.face {
            DieFace::Color(_) => DieKind::Color,
            DieFace::Number(_) => DieKind::Number,
        }
    }

    /// # Returns
    ///
    /// Whether the face is wild and using the die costs a joker.
    pub fn is_wild(&self) -> bool {
        matches!(
            self.face,
            DieFace::Color(ColorFace::Wild) | DieFace::Number(NumberFace::Wild)
        )
    }
}

/// The faces of a single roll of [DICE_PER_KIND] color dice and [DICE_PER_KIND] number dice.
///
/// Rolling is split from [rolling dice](crate::GameState::roll_dice) so the transition stays
/// a function of its input.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RolledFaces {
    /// Faces of the color dice.
    pub colors: [ColorFace; DICE_PER_KIND],
    /// Faces of the number dice.
    pub numbers: [NumberFace; DICE_PER_KIND],
}

impl RolledFaces {
    /// Rolls every die uniformly over its `6` faces.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            colors: [rng.gen(), rng.gen(), rng.gen()],
            numbers: [rng.gen(), rng.gen(), rng.gen()],
        }
    }

    /// Creates [dice](Dice) with new ids taken from `next_id`, color dice first.
    pub(crate) fn into_dice(self, next_id: &mut u64) -> Dice {
        let faces = self
            .colors
            .into_iter()
            .map(DieFace::Color)
            .chain(self.numbers.into_iter().map(DieFace::Number));

        faces
            .map(|face| {
                let id = DieId(*next_id);
                *next_id += 1;
                Die {
                    id,
                    face,
                    used: false,
                }
            })
            .collect()
    }
}

/// Samples one of the [board colors](Color::board_colors) or wild uniformly.
impl Distribution<ColorFace> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ColorFace {
        let index = rng.gen_range(0..=Color::BOARD_COLORS_LEN);
        match num::FromPrimitive::from_usize(index) {
            Some(color) if index < Color::BOARD_COLORS_LEN => ColorFace::Color(color),
            _ => ColorFace::Wild,
        }
    }
}

/// Samples one of the numbers `1..=5` or wild uniformly.
impl Distribution<NumberFace> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> NumberFace {
        let number = rng.gen_range(1..=NumberFace::MAX + 1);
        NumberFace::number(number).unwrap_or(NumberFace::Wild)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn number_face_range() {
        assert_eq!(None, NumberFace::number(0));
        assert_eq!(Some(NumberFace::Number(1)), NumberFace::number(1));
        assert_eq!(Some(NumberFace::Number(5)), NumberFace::number(5));
        assert_eq!(None, NumberFace::number(6));
    }

    #[test]
    fn into_dice_ids_and_kinds() {
        let mut next_id = 10;
        let faces = RolledFaces {
            colors: [
                ColorFace::Color(Color::Red),
                ColorFace::Wild,
                ColorFace::Color(Color::Blue),
            ],
            numbers: [NumberFace::Number(2), NumberFace::Wild, NumberFace::Number(5)],
        };

        let dice = faces.into_dice(&mut next_id);

        assert_eq!(2 * DICE_PER_KIND, dice.len());
        assert_eq!(16, next_id);
        assert_eq!(
            (10..16).map(DieId).collect_vec(),
            dice.iter().map(|die| die.id).collect_vec()
        );
        assert_eq!(
            vec![
                DieKind::Color,
                DieKind::Color,
                DieKind::Color,
                DieKind::Number,
                DieKind::Number,
                DieKind::Number
            ],
            dice.iter().map(Die::kind).collect_vec()
        );
        assert_eq!(
            vec![false, true, false, false, true, false],
            dice.iter().map(Die::is_wild).collect_vec()
        );
        assert!(dice.iter().all(|die| !die.used));
    }

    #[test]
    fn random_faces_in_range() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let faces = RolledFaces::random(&mut rng);
            for face in faces.colors {
                assert_ne!(ColorFace::Color(Color::Purple), face);
            }
            for face in faces.numbers {
                if let NumberFace::Number(number) = face {
                    assert!((1..=NumberFace::MAX).contains(&number));
                }
            }
        }
    }

    #[test]
    fn random_faces_include_wild() {
        let mut rng = rand::thread_rng();
        let colors = (0..1000).map(|_| rng.gen::<ColorFace>()).collect_vec();
        let numbers = (0..1000).map(|_| rng.gen::<NumberFace>()).collect_vec();

        assert!(colors.contains(&ColorFace::Wild));
        assert!(numbers.contains(&NumberFace::Wild));
        assert_eq!(Color::BOARD_COLORS_LEN + 1, colors.iter().unique().count());
        assert_eq!(usize::from(NumberFace::MAX) + 1, numbers.iter().unique().count());
    }
}
