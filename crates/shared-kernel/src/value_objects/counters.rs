// crates/shared-kernel/src/value_objects/counters.rs
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use super::counts::{CharCount, LineCount, WordCount};

/// Line, word and character totals for one source or a batch of sources.
///
/// `Counters` forms a monoid: [`Counters::identity`] is the neutral element
/// and [`Counters::combine`] is associative and commutative, so totals can be
/// folded in any order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Counters {
    pub lines: LineCount,
    pub words: WordCount,
    pub chars: CharCount,
}

impl Counters {
    #[inline]
    pub const fn new(lines: usize, words: usize, chars: usize) -> Self {
        Self {
            lines: LineCount::new(lines),
            words: WordCount::new(words),
            chars: CharCount::new(chars),
        }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::new(0, 0, 0)
    }

    #[inline]
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        Self {
            lines: self.lines + other.lines,
            words: self.words + other.words,
            chars: self.chars + other.chars,
        }
    }

    #[inline]
    pub const fn is_identity(&self) -> bool {
        self.lines.is_zero() && self.words.is_zero() && self.chars.is_zero()
    }
}

impl Add for Counters {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.combine(rhs)
    }
}

impl AddAssign for Counters {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.combine(rhs);
    }
}

impl Sum for Counters {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::identity(), Self::combine)
    }
}

impl<'a> Sum<&'a Counters> for Counters {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
