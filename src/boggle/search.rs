use std::collections::HashSet;

use rayon::prelude::*;

use super::board::Board;
use super::dictionary::Trie;
use super::util::Position;
use super::visited::VisitedSet;

/// Shortest word reported unless configured otherwise
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// Distinct words found on a board
pub type FoundWords = HashSet<String>;

/// One pending unit of exploration. Each state owns its visited snapshot and is never
/// modified after being pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    /// Letters spelled by the path so far
    pub word: String,
    /// Cells used by the path
    pub visited: VisitedSet,
    /// Cell the path ends on
    pub last: Position,
}

/// Work list activity for one or more explorations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub pushed: usize,
    pub popped: usize,
    /// Largest number of states waiting on the work list at once
    pub max_pending: usize,
}

impl SearchStats {
    pub fn merge(self, other: Self) -> Self {
        Self {
            pushed: self.pushed + other.pushed,
            popped: self.popped + other.popped,
            max_pending: self.max_pending.max(other.max_pending),
        }
    }
}

/// Depth first word search over a board, pruned by a prefix trie. The trie must not
/// change while a search is running.
#[derive(Debug, Clone, Copy)]
pub struct Searcher<'a> {
    trie: &'a Trie,
    /// Minimum length for anything to be considered a word
    min_length: usize,
}

impl<'a> Searcher<'a> {
    pub fn new(trie: &'a Trie) -> Self {
        Self {
            trie,
            min_length: DEFAULT_MIN_LENGTH,
        }
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Finds every word on the board. Starting cells are explored in row-major order.
    pub fn find_words(&self, board: &Board) -> FoundWords {
        self.find_words_with_stats(board).0
    }

    pub fn find_words_with_stats(&self, board: &Board) -> (FoundWords, SearchStats) {
        let mut found = FoundWords::new();
        let stats = board
            .positions()
            .map(|start| self.explore_from(board, start, &mut found))
            .fold(SearchStats::default(), SearchStats::merge);

        log::debug!(
            "Explored {} starting cells on a {}x{} board: {:?}, {} words",
            board.n_cells(),
            board.rows(),
            board.cols(),
            stats,
            found.len()
        );
        (found, stats)
    }

    /// Same result as [`Searcher::find_words`], with one independent exploration per
    /// starting cell spread over the rayon pool.
    pub fn find_words_par(&self, board: &Board) -> FoundWords {
        board
            .positions()
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|start| {
                let mut found = FoundWords::new();
                self.explore_from(board, start, &mut found);
                found
            })
            .reduce(FoundWords::new, |mut acc, words| {
                acc.extend(words);
                acc
            })
    }

    /// Runs the search for a single starting cell with its own work list and a fresh
    /// visited set, adding any words to `found`.
    pub fn explore_from(&self, board: &Board, start: Position, found: &mut FoundWords) -> SearchStats {
        let word = board[start].to_string();
        // Letters that begin no word never make it onto the work list
        if !self.trie.query_prefix(&word).exists {
            return SearchStats::default();
        }

        let mut stack = vec![SearchState {
            word,
            visited: VisitedSet::empty().with(board.index_of(start)),
            last: start,
        }];
        let mut stats = self.drain(board, &mut stack, found);
        stats.pushed += 1;
        stats
    }

    /// Pops states until the work list is empty, pushing every neighbour that still spells
    /// a dictionary prefix.
    ///
    /// Panics if a popped state does not spell a prefix in the trie.
    pub(crate) fn drain(
        &self,
        board: &Board,
        stack: &mut Vec<SearchState>,
        found: &mut FoundWords,
    ) -> SearchStats {
        let mut stats = SearchStats {
            max_pending: stack.len(),
            ..Default::default()
        };

        while let Some(state) = stack.pop() {
            stats.popped += 1;
            let query = self.trie.query_prefix(&state.word);
            assert!(
                query.exists,
                "search state \"{}\" is not a dictionary prefix",
                state.word
            );

            if query.is_word_end && state.word.chars().count() >= self.min_length {
                found.insert(state.word.clone());
            }
            // Nothing in the dictionary extends this word
            if query.is_exhausted() {
                continue;
            }

            for next in board.neighbours(state.last) {
                let index = board.index_of(next);
                if state.visited.contains(index) {
                    continue;
                }
                let mut word = String::with_capacity(state.word.len() + 1);
                word.push_str(&state.word);
                word.push(board[next]);
                if !self.trie.query_prefix(&word).exists {
                    continue;
                }
                stack.push(SearchState {
                    word,
                    visited: state.visited.with(index),
                    last: next,
                });
                stats.pushed += 1;
            }
            stats.max_pending = stats.max_pending.max(stack.len());
        }

        stats
    }
}

/// Finds every dictionary word of at least `min_length` letters that can be traced on the
/// board through adjacent cells, using each cell at most once per word.
pub fn find_words(board: &Board, trie: &Trie, min_length: usize) -> FoundWords {
    Searcher::new(trie).with_min_length(min_length).find_words(board)
}
