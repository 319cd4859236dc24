use std::fmt::Debug;
use std::hash::Hash;

/// Trait for types that can serve as edge labels in a [`Trie`](super::Trie).
///
/// This trait is automatically implemented for any type satisfying all the
/// required bounds (`char`, `u8`, `u16`, `u32`, etc.).
///
/// - `Copy`: edges store labels by value
/// - `Eq + Ord`: comparing edge labels and keeping children sorted
/// - `Hash`: labels can key hash-based side tables
/// - `Debug`: debug printing of nodes
pub trait TrieChar: Copy + Eq + Ord + Hash + Debug {}

impl<T: Copy + Eq + Ord + Hash + Debug> TrieChar for T {}
