use std::borrow::Cow;

use smallvec::SmallVec;

use super::char_trait::TrieChar;

/// Inline capacity of a word buffer. Longer words spill to the heap.
pub const WORD_INLINE: usize = 32;

/// A word collected into an inline buffer.
pub type WordBuf<C> = SmallVec<[C; WORD_INLINE]>;

/// Trait for types that can be inserted into, or looked up in, a [`Trie`](super::Trie).
///
/// Implemented for common string and sequence types so that
/// [`Trie::insert`](super::Trie::insert) and [`Trie::contains`](super::Trie::contains)
/// accept them directly without manual conversion.
pub trait IntoWord<C: TrieChar> {
    /// Collects this word into a character buffer.
    fn collect_word(self) -> WordBuf<C>;
}

/// Text types label their edges with `char`s.
macro_rules! text_words {
    ($($ty:ty),* $(,)?) => {$(
        impl IntoWord<char> for $ty {
            fn collect_word(self) -> WordBuf<char> {
                self.chars().collect()
            }
        }
    )*};
}

text_words!(&str, &&str, String, &String, Box<str>, Cow<'_, str>);

// Borrowed sequences copy their labels out.

impl<C: TrieChar> IntoWord<C> for &[C] {
    fn collect_word(self) -> WordBuf<C> {
        self.iter().copied().collect()
    }
}

impl<C: TrieChar, const N: usize> IntoWord<C> for &[C; N] {
    fn collect_word(self) -> WordBuf<C> {
        self.as_slice().collect_word()
    }
}

impl<C: TrieChar> IntoWord<C> for &Vec<C> {
    fn collect_word(self) -> WordBuf<C> {
        self.as_slice().collect_word()
    }
}

impl<C: TrieChar> IntoWord<C> for Vec<C> {
    fn collect_word(self) -> WordBuf<C> {
        WordBuf::from_vec(self)
    }
}

impl<C: TrieChar, const N: usize> IntoWord<C> for [C; N] {
    fn collect_word(self) -> WordBuf<C> {
        self.into_iter().collect()
    }
}
