use log::debug;
use serde::Serialize;
use std::fmt;
use std::ops::RangeInclusive;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod moves;
pub mod settings;
pub mod state;
pub mod timers;
pub mod utils;

pub use moves::{Move, MoveCategory, Punch, Strike};
pub use settings::{ComboDuration, TrainerSettings};

/// Generation parameters
pub mod defaults {
    use std::ops::RangeInclusive;

    pub const DUCK_PROBABILITY: f64 = 0.5;
    /// Attacking moves when a duck will be added; keeps the total at five or fewer.
    pub const SLOTS_WITH_DUCK: RangeInclusive<usize> = 2..=4;
    pub const SLOTS_WITHOUT_DUCK: RangeInclusive<usize> = 3..=5;
    pub const MIN_STRIKES: usize = 1;
    pub const MAX_STRIKES: usize = 2;
    pub const MAX_COMBINATION_LEN: usize = 5;
}

/// Source of the random draws behind a combination.
///
/// Every [`rand::Rng`] is a `RandomSource`. Tests substitute a scripted
/// source to pin the exact output of [`generate_combination`].
pub trait RandomSource {
    /// Uniform index in `0..upper`. `upper` is never zero.
    fn below(&mut self, upper: usize) -> usize;

    /// `true` with probability `p`.
    fn chance(&mut self, p: f64) -> bool;
}

impl<R: rand::Rng> RandomSource for R {
    fn below(&mut self, upper: usize) -> usize {
        self.random_range(0..upper)
    }

    fn chance(&mut self, p: f64) -> bool {
        self.random_bool(p)
    }
}

/// One training prompt: the ordered moves to throw.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Combination {
    moves: Vec<Move>,
}

impl Combination {
    pub fn from_moves(moves: Vec<Move>) -> Self {
        Self { moves }
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    pub fn duck_position(&self) -> Option<usize> {
        self.moves.iter().position(Move::is_duck)
    }

    pub fn strike_count(&self) -> usize {
        self.moves.iter().filter(|m| m.is_strike()).count()
    }

    /// Number of punches and strikes, i.e. everything except the duck.
    pub fn attack_count(&self) -> usize {
        self.moves.iter().filter(|m| !m.is_duck()).count()
    }
}

impl<'a> IntoIterator for &'a Combination {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, m) in self.moves.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", m)?;
        }
        Ok(())
    }
}

fn draw_from<R: RandomSource + ?Sized>(range: &RangeInclusive<usize>, rng: &mut R) -> usize {
    range.start() + rng.below(range.end() - range.start() + 1)
}

fn draw_punch<R: RandomSource + ?Sized>(rng: &mut R) -> Move {
    Move::Punch(Punch::ALL[rng.below(Punch::ALL.len())])
}

fn draw_strike<R: RandomSource + ?Sized>(rng: &mut R) -> Move {
    Move::Strike(Strike::ALL[rng.below(Strike::ALL.len())])
}

/// Fisher–Yates shuffle driven by a [`RandomSource`].
///
/// Walks from the last index down, swapping each position with a uniformly
/// chosen index at or below it.
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}

/// Generates a random combination.
///
/// # Algorithm
/// 1. Flip a coin to decide whether a duck is added
/// 2. Draw the number of attacking moves: 2-4 with a duck, 3-5 without
/// 3. In strike mode, draw one or two strikes and fill the rest with punches;
///    otherwise use punches only (all draws are with replacement)
/// 4. Shuffle so strikes can land anywhere
/// 5. Insert the duck at a random inner position, never first or last
///
/// Draws are taken from `rng` in exactly that order.
pub fn generate_combination<R: RandomSource + ?Sized>(
    include_strikes: bool,
    rng: &mut R,
) -> Combination {
    let include_duck = rng.chance(defaults::DUCK_PROBABILITY);
    let slot_count = if include_duck {
        draw_from(&defaults::SLOTS_WITH_DUCK, rng)
    } else {
        draw_from(&defaults::SLOTS_WITHOUT_DUCK, rng)
    };

    let mut moves = Vec::with_capacity(slot_count + 1);
    if include_strikes {
        let strike_count = draw_from(&(defaults::MIN_STRIKES..=defaults::MAX_STRIKES), rng);
        for _ in 0..strike_count {
            moves.push(draw_strike(rng));
        }
        // the smallest slot count equals MAX_STRIKES, so this never underflows
        for _ in 0..slot_count - strike_count {
            moves.push(draw_punch(rng));
        }
    } else {
        for _ in 0..slot_count {
            moves.push(draw_punch(rng));
        }
    }

    shuffle(&mut moves, rng);

    if include_duck {
        let duck_index = 1 + rng.below(moves.len() - 1);
        moves.insert(duck_index, Move::Duck);
    }

    let combination = Combination::from_moves(moves);
    debug!(
        "Generated combination ({} moves, strikes: {}): {}",
        combination.len(),
        include_strikes,
        combination
    );
    combination
}

/// JavaScript entry point returning a fresh combination such as
/// `[2, "Duck", 5, 1]`, drawn from the thread RNG.
#[wasm_bindgen]
pub fn random_combination(include_strikes: bool) -> JsValue {
    let combination = generate_combination(include_strikes, &mut rand::rng());
    serde_wasm_bindgen::to_value(&combination).unwrap_or(JsValue::NULL)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::RandomSource;
    use std::collections::VecDeque;

    /// Replays pre-recorded draws; panics if the generator asks for more.
    #[derive(Debug, Default)]
    pub struct ScriptedSource {
        coins: VecDeque<bool>,
        picks: VecDeque<usize>,
    }

    impl ScriptedSource {
        pub fn new(coins: &[bool], picks: &[usize]) -> Self {
            Self {
                coins: coins.iter().copied().collect(),
                picks: picks.iter().copied().collect(),
            }
        }

        pub fn is_exhausted(&self) -> bool {
            self.coins.is_empty() && self.picks.is_empty()
        }
    }

    impl RandomSource for ScriptedSource {
        fn below(&mut self, upper: usize) -> usize {
            let pick = self.picks.pop_front().expect("script ran out of picks");
            assert!(pick < upper, "scripted pick {} out of range 0..{}", pick, upper);
            pick
        }

        fn chance(&mut self, _p: f64) -> bool {
            self.coins.pop_front().expect("script ran out of coin flips")
        }
    }
}
