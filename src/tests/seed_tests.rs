//! Tests for seed vocabulary loading.

use crate::data_structures::LehuaTrie;
use crate::error::OleloError;
use crate::seed::{load_words, seed_trie};
use crate::tests::test_utils::{create_test_dir, write_test_file};

#[test]
fn load_words_skips_blanks_and_comments() {
    let dir = create_test_dir().expect("temp dir");
    let path = write_test_file(
        &dir,
        "words.txt",
        "# demo vocabulary\napple\n\n  banana  \napple\n# trailing comment\n",
    )
    .expect("word file");

    let words = load_words(&path).expect("words load");
    assert_eq!(words, vec!["apple", "banana", "apple"]);
}

#[test]
fn load_words_missing_file_is_io_error() {
    let dir = create_test_dir().expect("temp dir");
    let result = load_words(dir.path().join("absent.txt"));
    assert!(matches!(result, Err(OleloError::Io(_))));
}

#[test]
fn seed_trie_accumulates_duplicate_frequencies() {
    let words: Vec<String> = ["kaleidoscope", "kiwi", "kaleidoscope"]
        .iter()
        .map(|w| w.to_string())
        .collect();

    let mut trie = LehuaTrie::new();
    seed_trie(&mut trie, &words);

    assert_eq!(trie.len(), 2);
    // The duplicated word outranks the unique one.
    assert_eq!(trie.top_n_suggestions("k", 2), vec!["kaleidoscope", "kiwi"]);
}
