//! Loading a word collection from free-form text.
//!
//! Every whitespace-delimited token becomes a case-folded word. Punctuation is
//! not stripped: `"word,"` and `"word"` are different entries.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use hashbrown::HashSet;
use tracing::debug;

use crate::casefold;
use crate::error::CorpusError;

/// Distinct case-folded tokens of a corpus.
pub type WordSet = HashSet<String>;

/// Reads every whitespace-delimited token from `reader`.
///
/// # Examples
///
/// ```
/// use knightword::corpus::load_words;
///
/// let words = load_words("To be, or NOT to be\n".as_bytes()).unwrap();
/// assert!(words.contains("not"));
/// assert!(words.contains("be,"));
/// assert_eq!(words.len(), 5);
/// ```
pub fn load_words<R: BufRead>(mut reader: R) -> Result<WordSet, CorpusError> {
    let mut words = WordSet::new();
    let mut lines = 0usize;

    // One buffer for every line instead of a fresh String per `lines()` item.
    let mut buf = String::with_capacity(80);
    loop {
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        lines += 1;
        for token in buf.split_whitespace() {
            words.insert(casefold(token));
        }
        buf.clear();
    }

    debug!(lines, words = words.len(), "loaded corpus");
    Ok(words)
}

/// Reads every whitespace-delimited token from the file at `path`.
pub fn load_words_from_file(path: impl AsRef<Path>) -> Result<WordSet, CorpusError> {
    let path = path.as_ref();
    let io_error = |source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_error)?;
    load_words(BufReader::new(file)).map_err(|e| match e {
        CorpusError::Read(source) => io_error(source),
        other => other,
    })
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn tokens_are_casefolded_and_deduplicated() {
        let text = "Fortran ALGOL\n  simula\tfortran\n\nAlgol";
        let words = load_words(text.as_bytes()).unwrap();
        let mut sorted: Vec<_> = words.into_iter().collect();
        sorted.sort();
        assert_eq!(sorted, vec!["algol", "fortran", "simula"]);
    }

    #[test]
    fn empty_input_gives_empty_set() {
        assert!(load_words("".as_bytes()).unwrap().is_empty());
        assert!(load_words("   \n\n".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn last_line_without_newline_is_read() {
        let words = load_words("alpha\nomega".as_bytes()).unwrap();
        assert!(words.contains("omega"));
    }

    #[test]
    fn invalid_utf8_is_a_read_error() {
        let bytes: &[u8] = b"ok\n\xff\xfe\n";
        let err = load_words(bytes).unwrap_err();
        assert!(matches!(err, CorpusError::Read(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Honorificabilitudinitatibus thou").unwrap();
        writeln!(file, "THOU art").unwrap();
        let words = load_words_from_file(file.path()).unwrap();
        assert_eq!(words.len(), 3);
        assert!(words.contains("honorificabilitudinitatibus"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_words_from_file("/nonexistent/corpus.txt").unwrap_err();
        match err {
            CorpusError::Io { path, .. } => assert_eq!(path, Path::new("/nonexistent/corpus.txt")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
