use crate::grid::Cell;

/// The longest complete word found so far, with the cells that spell it.
///
/// Only a strictly longer word replaces the current one, so among equally
/// long words the first one offered is kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BestWord {
    word: String,
    len: usize,
    route: Vec<Cell>,
}

impl BestWord {
    /// Offers a candidate; returns `true` if it became the new best.
    pub fn offer(&mut self, path: &[char], route: &[Cell]) -> bool {
        debug_assert_eq!(path.len(), route.len());
        if path.len() <= self.len {
            return false;
        }
        self.word.clear();
        self.word.extend(path);
        self.len = path.len();
        self.route.clear();
        self.route.extend_from_slice(route);
        true
    }

    /// Keeps `self` unless `other` is strictly longer.
    ///
    /// Folding results in starting-cell order with this gives the same answer
    /// as one sequential search.
    pub fn merge(self, other: BestWord) -> BestWord {
        if other.len > self.len {
            other
        } else {
            self
        }
    }

    /// The best word, empty if none was offered.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True until a non-empty word is accepted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The cells spelling the best word.
    pub fn route(&self) -> &[Cell] {
        &self.route
    }

    /// Splits into word and route.
    pub fn into_parts(self) -> (String, Vec<Cell>) {
        (self.word, self.route)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn cells(n: usize) -> Vec<Cell> {
        (0..n).map(|i| Cell::new(i, 0)).collect()
    }

    #[test]
    fn strictly_longer_replaces() {
        let mut best = BestWord::default();
        assert!(best.is_empty());
        assert!(best.offer(&['a', 'b'], &cells(2)));
        assert!(best.offer(&['a', 'b', 'c'], &cells(3)));
        assert_eq!(best.word(), "abc");
        assert_eq!(best.route().len(), 3);
    }

    #[test]
    fn ties_keep_the_first_word() {
        let mut best = BestWord::default();
        assert!(best.offer(&['a', 'c'], &cells(2)));
        assert!(!best.offer(&['b', 'd'], &cells(2)));
        assert!(!best.offer(&['x'], &cells(1)));
        assert_eq!(best.word(), "ac");
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        let mut best = BestWord::default();
        best.offer(&['å', 'ä'], &cells(2));
        assert!(best.offer(&['a', 'b', 'c'], &cells(3)));
        assert_eq!(best.len(), 3);
    }

    #[test]
    fn merge_prefers_left_on_ties() {
        let mut left = BestWord::default();
        left.offer(&['a', 'c'], &cells(2));
        let mut right = BestWord::default();
        right.offer(&['b', 'd'], &cells(2));
        assert_eq!(left.clone().merge(right.clone()).word(), "ac");

        let mut longer = BestWord::default();
        longer.offer(&['b', 'd', 'b'], &cells(3));
        assert_eq!(left.merge(longer).word(), "bdb");
    }
}
