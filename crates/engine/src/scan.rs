// crates/engine/src/scan.rs
//! Per-character state machine that folds decoded text into [`Counters`].

use stream_wc_shared_kernel::Counters;

/// How a single character affects the running counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// `'\n'`: ends a line and any open word.
    Newline,
    /// Any other Unicode whitespace: ends an open word.
    Space,
    /// Everything else is word content.
    Word,
}

impl CharClass {
    #[inline]
    pub fn of(ch: char) -> Self {
        if ch == '\n' {
            Self::Newline
        } else if ch.is_whitespace() {
            Self::Space
        } else {
            Self::Word
        }
    }
}

/// Running counters plus whether the last character was word content.
///
/// A fresh state is created for every source. It is advanced one character
/// at a time with [`step`] and consumed by [`ScanState::finish`] once the
/// source is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanState {
    pub in_word: bool,
    pub counters: Counters,
}

impl ScanState {
    pub const fn new() -> Self {
        Self {
            in_word: false,
            counters: Counters::identity(),
        }
    }

    /// Feed every character of `text` through [`step`].
    #[must_use]
    pub fn feed(self, text: &str) -> Self {
        text.chars().fold(self, step)
    }

    /// Close a word left open at end of input and hand back the totals.
    pub fn finish(self) -> Counters {
        let mut counters = self.counters;
        if self.in_word {
            counters.words = counters.words.incremented();
        }
        counters
    }
}

/// Advance `state` by one character.
#[must_use]
pub fn step(state: ScanState, ch: char) -> ScanState {
    let mut counters = state.counters;
    counters.chars = counters.chars.incremented();

    let class = CharClass::of(ch);
    if class == CharClass::Newline {
        counters.lines = counters.lines.incremented();
    }

    match class {
        CharClass::Newline | CharClass::Space => {
            // 単語の終端は一度だけ数える
            if state.in_word {
                counters.words = counters.words.incremented();
            }
            ScanState {
                in_word: false,
                counters,
            }
        }
        CharClass::Word => ScanState {
            in_word: true,
            counters,
        },
    }
}
