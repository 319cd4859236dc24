//! Prefix trie used to prune the grid search.
//!
//! Unlike a minimized word graph, the trie accepts words in any order and
//! grows one node per new prefix. Insertion is the only operation that can
//! create nodes; every read goes through the [`Node`] cursor, which cannot.

/// Index arena holding the trie nodes.
pub mod arena;
/// Trait for types that can serve as trie edge labels.
pub mod char_trait;
/// Trie node cursor and compact child storage.
pub mod node;
/// Conversion of strings and sequences into trie words.
pub mod word;

pub use arena::NodeId;
pub use char_trait::TrieChar;
pub use node::{ChildIter, Node};
pub use word::{IntoWord, WordBuf, WORD_INLINE};

use arena::NodeArena;
use node::TrieNode;

/// A prefix tree over edge labels of type `C`.
///
/// # Examples
///
/// ```
/// use knightword::trie::Trie;
///
/// let mut trie: Trie = Trie::new();
/// trie.insert("bake");
/// trie.insert("baker");
///
/// let root = trie.root();
/// let n = "bak".chars().try_fold(root, |n, ch| n.get(ch)).unwrap();
/// assert!(!n.is_word());
/// assert!(n.get('e').unwrap().is_word());
/// assert!(n.get('i').is_none());
/// ```
#[derive(Clone)]
pub struct Trie<C: TrieChar = char> {
    arena: NodeArena<TrieNode<C>>,
    words: usize,
    max_depth: usize,
}

impl<C: TrieChar> Trie<C> {
    /// Creates a trie holding only the root (the empty prefix).
    pub fn new() -> Self {
        let mut arena = NodeArena::new();
        let root = arena.alloc(TrieNode::new());
        debug_assert_eq!(root, NodeId::ROOT);
        Trie {
            arena,
            words: 0,
            max_depth: 0,
        }
    }

    /// Returns a cursor at the root node.
    #[inline]
    pub fn root(&self) -> Node<'_, C> {
        Node::new(&self.arena, NodeId::ROOT)
    }

    /// Inserts a word, creating any missing prefix nodes.
    ///
    /// Returns `true` if the word was not present before. Inserting the empty
    /// word marks the root itself as a word.
    pub fn insert(&mut self, word: impl IntoWord<C>) -> bool {
        let word = word.collect_word();
        let mut current = NodeId::ROOT;
        for &letter in word.iter() {
            current = self.child_or_insert(current, letter);
        }
        let node = &mut self.arena[current];
        if node.word {
            return false;
        }
        node.word = true;
        self.words += 1;
        self.max_depth = self.max_depth.max(word.len());
        true
    }

    /// Follows the edge labeled `letter` out of `parent`, creating it if absent.
    fn child_or_insert(&mut self, parent: NodeId, letter: C) -> NodeId {
        if let Some(child) = self.arena[parent].children.find(letter) {
            return child;
        }
        let child = self.arena.alloc(TrieNode::new());
        self.arena[parent].children.insert(letter, child);
        child
    }

    /// Walks `prefix` from the root without creating anything.
    pub fn walk(&self, prefix: impl IntoWord<C>) -> Option<Node<'_, C>> {
        prefix
            .collect_word()
            .into_iter()
            .try_fold(self.root(), |n, ch| n.get(ch))
    }

    /// Returns `true` if the given word was inserted.
    pub fn contains(&self, word: impl IntoWord<C>) -> bool {
        self.walk(word).is_some_and(|n| n.is_word())
    }

    /// Returns `true` if any inserted word starts with `prefix`.
    pub fn has_prefix(&self, prefix: impl IntoWord<C>) -> bool {
        self.walk(prefix).is_some()
    }

    /// Number of distinct words inserted.
    pub fn len(&self) -> usize {
        self.words
    }

    /// True if no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Length of the longest inserted word, which bounds the depth of any walk.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns every inserted word in sorted order.
    pub fn words(&self) -> Vec<Vec<C>> {
        let mut words = Vec::with_capacity(self.words);
        let mut prefix = Vec::with_capacity(self.max_depth);
        Self::collect_words(self.root(), &mut prefix, &mut words);
        words
    }

    fn collect_words(node: Node<'_, C>, prefix: &mut Vec<C>, words: &mut Vec<Vec<C>>) {
        if node.is_word() {
            words.push(prefix.clone());
        }
        for (ch, child) in node.children() {
            prefix.push(ch);
            Self::collect_words(child, prefix, words);
            prefix.pop();
        }
    }
}

impl<C: TrieChar> Default for Trie<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: TrieChar, W: IntoWord<C>> Extend<W> for Trie<C> {
    fn extend<I: IntoIterator<Item = W>>(&mut self, words: I) {
        for word in words {
            self.insert(word);
        }
    }
}

impl<C: TrieChar, W: IntoWord<C>> FromIterator<W> for Trie<C> {
    fn from_iter<I: IntoIterator<Item = W>>(words: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(words);
        trie
    }
}

impl<C: TrieChar> std::fmt::Debug for Trie<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trie")
            .field("words", &self.words)
            .field("node_count", &self.node_count())
            .field("max_depth", &self.max_depth)
            .finish()
    }
}
