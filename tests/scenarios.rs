// End-to-end scenarios through the public API

use knightword::corpus::load_words;
use knightword::search::is_knight_move;
use knightword::{find_longest_word, find_longest_word_with, Grid, SearchError, SearchOptions};

fn rows(lines: &[&str]) -> Vec<Vec<char>> {
    lines.iter().map(|l| l.chars().collect()).collect()
}

fn programming_grid() -> Vec<Vec<char>> {
    rows(&[
        "qwertnui", "opaadfgh", "tklzxcvb", "nmrwfrty", "uiopasdf", "ghjolzxc", "vbamqwer",
        "tyuiopas",
    ])
}

fn shakespeare_grid() -> Vec<Vec<char>> {
    rows(&[
        "extrahop", "networks", "qihaciqt", "lfunurxb", "bwdilatv", "ossynack", "qwopmtcp",
        "kipacket",
    ])
}

#[test]
fn two_letter_word_on_a_knight_move() {
    let grid = rows(&["a...", "..b.", "...."]);
    assert_eq!(find_longest_word(&grid, ["ab"]).unwrap(), "ab");
}

#[test]
fn traceable_word_beats_untraceable_one() {
    let grid = rows(&["c...", "..a.", "r..t"]);
    assert_eq!(find_longest_word(&grid, ["cat", "car"]).unwrap(), "car");
}

#[test]
fn single_letter_word() {
    let grid = rows(&["xyz", "zya"]);
    assert_eq!(find_longest_word(&grid, ["a"]).unwrap(), "a");
}

#[test]
fn missing_first_letter_means_no_match() {
    let grid = rows(&["abc", "def"]);
    assert_eq!(find_longest_word(&grid, ["xyz"]).unwrap(), "");
}

#[test]
fn equal_length_words_resolve_in_traversal_order() {
    let grid = rows(&["ab..", "..cd", "...."]);
    // "ac" starts at (0,0), "bd" at (0,1); row-major order reaches "ac" first
    assert_eq!(find_longest_word(&grid, ["bd", "ac"]).unwrap(), "ac");
    assert_eq!(find_longest_word(&grid, ["ac", "bd"]).unwrap(), "ac");
}

#[test]
fn fortran_on_the_programming_grid() {
    let grid = programming_grid();
    let longest = find_longest_word(&grid, ["algol", "fortran", "simula"]).unwrap();
    assert_eq!(longest, "fortran");
}

#[test]
fn long_word_with_reused_cells() {
    let corpus = "Honorificabilitudinitatibus network packet";
    let words = load_words(corpus.as_bytes()).unwrap();
    let grid = shakespeare_grid();
    let report = find_longest_word_with(&grid, &words, &SearchOptions::default()).unwrap();
    assert_eq!(report.word, "honorificabilitudinitatibus");

    let g = Grid::from_rows(&grid).unwrap();
    for pair in report.route.windows(2) {
        assert!(is_knight_move(pair[0], pair[1]));
    }
    let spelled: String = report.route.iter().filter_map(|&c| g.get(c)).collect();
    assert_eq!(spelled, report.word);

    // the route is longer than the number of distinct cells it touches
    let mut distinct = report.route.clone();
    distinct.sort();
    distinct.dedup();
    assert!(distinct.len() < report.route.len());
}

#[test]
fn mixed_case_inputs() {
    let grid = rows(&["QWERTNUI", "OPAADFGH", "TKLZXCVB", "NMRWFRTY", "UIOPASDF", "GHJOLZXC", "VBAMQWER", "TYUIOPAS"]);
    assert_eq!(find_longest_word(&grid, ["FORTRAN"]).unwrap(), "fortran");
}

#[test]
fn repeated_runs_agree() {
    let grid = shakespeare_grid();
    let words = ["honorificabilitudinitatibus", "hop", "tra", "net"];
    let first = find_longest_word(&grid, words).unwrap();
    for _ in 0..3 {
        assert_eq!(find_longest_word(&grid, words).unwrap(), first);
    }
}

#[test]
fn invalid_inputs_are_errors_not_words() {
    let empty: Vec<Vec<char>> = Vec::new();
    assert!(matches!(
        find_longest_word(&empty, ["a"]),
        Err(SearchError::InvalidInput { .. })
    ));

    let no_words: Vec<&str> = Vec::new();
    assert!(matches!(
        find_longest_word(&programming_grid(), no_words),
        Err(SearchError::InvalidInput { .. })
    ));

    let ragged = rows(&["abc", "ab", "abc"]);
    assert_eq!(
        find_longest_word(&ragged, ["a"]),
        Err(SearchError::MalformedGrid {
            row: 1,
            expected: 3,
            found: 2
        })
    );
}

#[test]
fn parallel_option_agrees_with_sequential() {
    let grid = shakespeare_grid();
    let words = ["honorificabilitudinitatibus", "hop", "tra", "net"];
    let options = SearchOptions::default().with_parallel(true);
    let report = find_longest_word_with(&grid, words, &options).unwrap();
    assert_eq!(report.word, find_longest_word(&grid, words).unwrap());
}
