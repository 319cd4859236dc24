use std::fmt;

use super::arena::{NodeArena, NodeId};
use super::char_trait::TrieChar;

/// A compact representation of the children of a trie node that doesn't allocate until
/// there are at least three children.
///
/// Children are kept sorted by label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Children<C: TrieChar> {
    /// No children.
    None,
    /// Exactly one child (letter, node).
    One((C, NodeId)),
    /// Exactly two children (letter1, node1, letter2, node2).
    Two((C, NodeId, C, NodeId)),
    /// Three or more children stored in a vector.
    Many(Vec<(C, NodeId)>),
}

impl<C: TrieChar> Children<C> {
    /// Gets the child at the specified index.
    ///
    /// Returns `None` if the index is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<(C, NodeId)> {
        match self {
            Children::None => None,
            Children::One(child) => match index {
                0 => Some(*child),
                _ => None,
            },
            Children::Two((c1, n1, c2, n2)) => match index {
                0 => Some((*c1, *n1)),
                1 => Some((*c2, *n2)),
                _ => None,
            },
            Children::Many(children) => children.get(index).copied(),
        }
    }

    /// Returns the id the edge labeled `letter` leads to.
    #[inline]
    pub fn find(&self, letter: C) -> Option<NodeId> {
        match self {
            Children::None => None,
            Children::One((ch, node)) => (*ch == letter).then_some(*node),
            Children::Two((c1, n1, c2, n2)) => {
                if letter == *c1 {
                    Some(*n1)
                } else if letter == *c2 {
                    Some(*n2)
                } else {
                    None
                }
            }
            Children::Many(children) => {
                // Unrolling by 2 exposes load-level parallelism and beats a
                // binary search on the small fan-outs a word list produces.
                let chunks = children.chunks_exact(2);
                let remainder = chunks.remainder();
                for chunk in chunks {
                    if chunk[0].0 == letter {
                        return Some(chunk[0].1);
                    }
                    if chunk[1].0 == letter {
                        return Some(chunk[1].1);
                    }
                }
                remainder
                    .iter()
                    .find(|&&(ch, _)| ch == letter)
                    .map(|&(_, node)| node)
            }
        }
    }

    /// Returns the number of children.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Children::None => 0,
            Children::One(_) => 1,
            Children::Two(_) => 2,
            Children::Many(children) => children.len(),
        }
    }

    /// Adds an edge in sorted position.
    ///
    /// The caller guarantees that `letter` is not present yet.
    pub fn insert(&mut self, letter: C, child: NodeId) {
        debug_assert!(self.find(letter).is_none(), "insert: letter already exists");
        *self = match std::mem::replace(self, Children::None) {
            Children::None => Children::One((letter, child)),
            Children::One((c1, n1)) => {
                if letter < c1 {
                    Children::Two((letter, child, c1, n1))
                } else {
                    Children::Two((c1, n1, letter, child))
                }
            }
            Children::Two((c1, n1, c2, n2)) => {
                let mut v = vec![(c1, n1), (c2, n2), (letter, child)];
                v.sort_by_key(|&(c, _)| c);
                Children::Many(v)
            }
            Children::Many(mut children) => {
                let pos = children.partition_point(|&(c, _)| c < letter);
                children.insert(pos, (letter, child));
                Children::Many(children)
            }
        };
    }
}

/// Storage record of one prefix state.
#[derive(Clone, Debug)]
pub(crate) struct TrieNode<C: TrieChar> {
    pub(crate) children: Children<C>,
    pub(crate) word: bool,
}

impl<C: TrieChar> TrieNode<C> {
    pub(crate) fn new() -> Self {
        TrieNode {
            children: Children::None,
            word: false,
        }
    }
}

/// A read-only cursor into a [`Trie`](super::Trie).
///
/// `Node` is a cheap `Copy` handle borrowed from the trie, so it can be passed
/// down a recursive search by value. None of its methods can modify the trie;
/// growing the trie goes through [`Trie::insert`](super::Trie::insert) only.
pub struct Node<'t, C: TrieChar> {
    arena: &'t NodeArena<TrieNode<C>>,
    id: NodeId,
}

impl<C: TrieChar> Clone for Node<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: TrieChar> Copy for Node<'_, C> {}

impl<'t, C: TrieChar> Node<'t, C> {
    pub(crate) fn new(arena: &'t NodeArena<TrieNode<C>>, id: NodeId) -> Self {
        Node { arena, id }
    }

    #[inline]
    fn record(&self) -> &'t TrieNode<C> {
        &self.arena[self.id]
    }

    /// The arena id of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the node that letter's edge leads to, or None if no such edge exists.
    ///
    /// This is the prefix walk: `None` means no inserted word continues the
    /// path spelled so far with `letter`.
    #[inline]
    pub fn get(self, letter: C) -> Option<Node<'t, C>> {
        self.record()
            .children
            .find(letter)
            .map(|id| Node::new(self.arena, id))
    }

    /// True if the path from the root to this node spells an inserted word.
    #[inline]
    pub fn is_word(&self) -> bool {
        self.record().word
    }

    /// Returns true if this node has the given suffix as the path to a valid word.
    #[inline]
    pub fn has_suffix<I: Iterator<Item = C>>(self, suffix: &mut I) -> bool {
        suffix
            .try_fold(self, |no, ch| no.get(ch))
            .is_some_and(|n| n.is_word())
    }

    /// Returns an iterator over all children of this node, sorted by label.
    #[inline]
    pub fn children(self) -> ChildIter<'t, C> {
        ChildIter {
            node: self,
            index: 0,
        }
    }

    /// Returns the number of children.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.record().children.len()
    }

    /// True if no inserted word extends this prefix.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.child_count() == 0
    }
}

impl<C: TrieChar> PartialEq for Node<'_, C> {
    fn eq(&self, rhs: &Self) -> bool {
        std::ptr::eq(self.arena, rhs.arena) && self.id == rhs.id
    }
}

impl<C: TrieChar> Eq for Node<'_, C> {}

impl<C: TrieChar> fmt::Debug for Node<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("word", &self.is_word())
            .field("children", &self.children().map(|(c, _)| c).collect::<Vec<_>>())
            .finish()
    }
}

/// An iterator over the children of a [`Node`].
#[derive(Clone)]
pub struct ChildIter<'t, C: TrieChar> {
    node: Node<'t, C>,
    index: usize,
}

impl<'t, C: TrieChar> Iterator for ChildIter<'t, C> {
    type Item = (C, Node<'t, C>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (letter, id) = self.node.record().children.get(self.index)?;
        self.index += 1;
        Some((letter, Node::new(self.node.arena, id)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.node.child_count().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<C: TrieChar> ExactSizeIterator for ChildIter<'_, C> {}

#[cfg(test)]
mod test {
    use super::*;

    fn labels(children: &Children<char>) -> Vec<char> {
        (0..children.len())
            .filter_map(|i| children.get(i))
            .map(|(c, _)| c)
            .collect()
    }

    #[test]
    fn no_children() {
        let c = Children::<char>::None;
        assert_eq!(c.len(), 0);
        assert_eq!(c.get(0), None);
        assert_eq!(c.find('a'), None);
    }

    #[test]
    fn children_stay_sorted_through_every_representation() {
        let mut arena = NodeArena::new();
        let mut c = Children::None;
        for letter in ['m', 'c', 'x', 'a', 'q'] {
            let id = arena.alloc(letter);
            c.insert(letter, id);
        }
        assert!(matches!(c, Children::Many(_)));
        assert_eq!(labels(&c), vec!['a', 'c', 'm', 'q', 'x']);
    }

    #[test]
    fn two_children_sorted() {
        let mut arena = NodeArena::new();
        let mut c = Children::None;
        c.insert('b', arena.alloc(()));
        c.insert('a', arena.alloc(()));
        assert!(matches!(c, Children::Two(_)));
        assert_eq!(labels(&c), vec!['a', 'b']);
    }

    #[test]
    fn find_covers_chunks_and_remainder() {
        let mut arena = NodeArena::new();
        let mut c = Children::None;
        let mut ids = Vec::new();
        for letter in 'a'..='e' {
            let id = arena.alloc(letter);
            ids.push((letter, id));
            c.insert(letter, id);
        }
        for (letter, id) in ids {
            assert_eq!(c.find(letter), Some(id));
        }
        assert_eq!(c.find('z'), None);
    }

    #[test]
    fn a_thousand_children() {
        let mut arena = NodeArena::new();
        let mut c = Children::None;
        let letters: Vec<char> = (0..).filter_map(std::char::from_u32).take(1000).collect();
        for &ch in letters.iter().rev() {
            c.insert(ch, arena.alloc(()));
        }
        assert_eq!(c.len(), 1000);
        assert_eq!(labels(&c), letters);
    }
}
