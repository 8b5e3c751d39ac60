//! Integration tests for the Boggle word finder.
//!
//! These run the whole pipeline from word list to found words and check the results
//! against a brute force path search that does not use the trie.

use std::collections::HashSet;
use std::fs;

use boggle::boggle::dictionary::{load_word_list, parse_word_list};
use boggle::boggle::util::Position;
use boggle::utils::serialization::{load_from_disk, save_to_disk};
use boggle::{find_words, Board, BoggleError, FoundWords, Searcher, Trie};

const SAMPLE_BOARD: &str = "tlbi/edes/pang/pths";

const SAMPLE_WORDS: &str = "\
bed
beds
bide
bides
dean
deans
den
dens
edge
gnat
hang
hangs
ide
ides
nab
nap
pant
pants
pat
pet
pets
sand
sign
tan
tap
taps
the
then
";

fn sample_trie() -> Trie {
    Trie::from_words(parse_word_list(SAMPLE_WORDS, 3)).unwrap()
}

fn words(list: &[&str]) -> FoundWords {
    list.iter().map(|w| w.to_string()).collect()
}

/// True if `word` can be traced on the board through distinct, adjacent cells
fn has_path(board: &Board, word: &str) -> bool {
    fn extend(board: &Board, rest: &[char], at: Position, used: &mut Vec<Position>) -> bool {
        let Some((&c, tail)) = rest.split_first() else {
            return true;
        };
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                let next = Position::new(row, col);
                if board[next] == c && at.is_adjacent(next) && !used.contains(&next) {
                    used.push(next);
                    if extend(board, tail, next, used) {
                        return true;
                    }
                    used.pop();
                }
            }
        }
        false
    }

    let chars = word.chars().collect::<Vec<_>>();
    board.positions().any(|start| {
        board[start] == chars[0] && extend(board, &chars[1..], start, &mut vec![start])
    })
}

#[cfg(test)]
mod scenarios {
    use super::*;

    #[test]
    fn test_two_by_two() {
        let board: Board = "ab/cd".parse().unwrap();
        let trie = Trie::from_words(["ab", "abc", "abd"]).unwrap();
        assert_eq!(find_words(&board, &trie, 3), words(&["abc", "abd"]));
    }

    #[test]
    fn test_sample_board() {
        let board: Board = SAMPLE_BOARD.parse().unwrap();
        let found = find_words(&board, &sample_trie(), 3);

        assert!(found.contains("pet"));
        assert!(found.contains("tap"));
        assert!(found.contains("pant"));
        assert!(!found.contains("pets"));
        assert!(!found.contains("sand"));
    }

    #[test]
    fn test_empty_dictionary() {
        for rows in ["ab/cd", SAMPLE_BOARD, "q"] {
            let board: Board = rows.parse().unwrap();
            assert!(find_words(&board, &Trie::new(), 3).is_empty());
        }
    }

    #[test]
    fn test_letters_present_but_not_adjacent() {
        // Every letter of "tab" is on the board, but neither t nor b touches the a
        let board: Board = "txb/xxx/xax".parse().unwrap();
        let trie = Trie::from_words(["tab", "bat", "xax"]).unwrap();
        assert_eq!(find_words(&board, &trie, 3), words(&["xax"]));
    }

    #[test]
    fn test_word_on_two_paths_found_once() {
        let board: Board = "cat/tac".parse().unwrap();
        let trie = Trie::from_words(["cat", "act"]).unwrap();
        let found = find_words(&board, &trie, 3);
        assert_eq!(found.len(), 2);
        assert_eq!(found, words(&["cat", "act"]));
    }
}

#[cfg(test)]
mod properties {
    use super::*;

    #[test]
    fn test_prefix_monotonicity() {
        let trie = sample_trie();
        for w in parse_word_list(SAMPLE_WORDS, 3) {
            for end in 0..=w.len() {
                assert!(trie.query_prefix(&w[..end]).exists, "prefix {:?} of {}", &w[..end], w);
            }
        }
    }

    #[test]
    fn test_count_conservation() {
        let list = ["tap", "taps", "tap", "pet", "pet", "pet"];
        let trie = Trie::from_words(list).unwrap();
        assert_eq!(trie.word_count(), list.len());
        assert_eq!(trie.query_prefix("").count, list.len());
        assert_eq!(trie.query_prefix("ta").count, 3);
    }

    #[test]
    fn test_every_found_word_has_a_path() {
        let board: Board = SAMPLE_BOARD.parse().unwrap();
        let trie = sample_trie();
        let found = find_words(&board, &trie, 3);

        assert!(!found.is_empty());
        for w in &found {
            assert!(trie.contains(w));
            assert!(has_path(&board, w), "{} has no path", w);
        }
    }

    #[test]
    fn test_no_traceable_word_is_missed() {
        let board: Board = SAMPLE_BOARD.parse().unwrap();
        let list = parse_word_list(SAMPLE_WORDS, 3);
        let found = find_words(&board, &sample_trie(), 3);

        let expected = list
            .iter()
            .filter(|w| has_path(&board, w))
            .cloned()
            .collect::<HashSet<_>>();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_minimum_length() {
        let board: Board = SAMPLE_BOARD.parse().unwrap();
        let trie = Trie::from_words(parse_word_list(SAMPLE_WORDS, 1)).unwrap();
        for min_length in [3, 4, 5] {
            let found = find_words(&board, &trie, min_length);
            assert!(found.iter().all(|w| w.len() >= min_length));
        }
    }

    #[test]
    fn test_determinism() {
        let board: Board = SAMPLE_BOARD.parse().unwrap();
        let trie = sample_trie();
        let searcher = Searcher::new(&trie);
        let first = searcher.find_words(&board);
        assert_eq!(first, searcher.find_words(&board));
        assert_eq!(first, searcher.find_words_par(&board));
    }

    #[test]
    fn test_duplicate_inserts() {
        let board: Board = SAMPLE_BOARD.parse().unwrap();
        let mut trie = sample_trie();
        trie.insert("pet").unwrap();
        trie.insert("pet").unwrap();

        let found = find_words(&board, &trie, 3);
        assert_eq!(found, find_words(&board, &sample_trie(), 3));
    }
}

#[cfg(test)]
mod files {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("boggle-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_load_word_list() {
        let path = temp_path("words.txt");
        fs::write(&path, "Pet\nTAP\nit's\nox\n\ngnat\n").unwrap();
        let words = load_word_list(&path, 3).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, vec!["pet", "tap", "gnat"]);
    }

    #[test]
    fn test_missing_word_list() {
        let result = load_word_list(temp_path("missing.txt"), 3);
        assert!(matches!(result, Err(BoggleError::Io(_))));
    }

    #[test]
    fn test_board_file_and_cache() {
        let board_path = temp_path("board.json");
        fs::write(
            &board_path,
            r#"[["T","L","B","I"],["E","D","E","S"],["P","A","N","G"],["P","T","H","S"]]"#,
        )
        .unwrap();
        let board = Board::from_file(&board_path).unwrap();
        fs::remove_file(&board_path).unwrap();
        assert_eq!(board, SAMPLE_BOARD.parse::<Board>().unwrap());

        let cache_path = temp_path("trie.bin");
        save_to_disk(&sample_trie(), &cache_path).unwrap();
        let trie: Trie = load_from_disk(&cache_path).unwrap();
        fs::remove_file(&cache_path).unwrap();

        assert_eq!(find_words(&board, &trie, 3), find_words(&board, &sample_trie(), 3));
    }
}
