use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::BoggleError;

/// Prefix tree node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieNode {
    letter: char,
    next: HashMap<char, TrieNode>,
    terminal: bool,
    /// Number of inserted words that pass through this node, duplicates included
    count: usize,
}

impl TrieNode {
    fn new(letter: char) -> Self {
        Self {
            letter,
            ..Default::default()
        }
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn next_node(&self, c: char) -> Option<&TrieNode> {
        self.next.get(&c)
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn children(&self) -> impl Iterator<Item = &TrieNode> {
        self.next.values()
    }
}

/// Result of walking the trie along a prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrefixQuery {
    /// The whole prefix was found
    pub exists: bool,
    /// How many inserted words share the prefix
    pub count: usize,
    /// The prefix is itself a complete word
    pub is_word_end: bool,
}

impl PrefixQuery {
    const MISSING: PrefixQuery = PrefixQuery {
        exists: false,
        count: 0,
        is_word_end: false,
    };

    /// True when no inserted word extends past this node. Only meaningful when `exists`.
    pub fn is_exhausted(&self) -> bool {
        self.is_word_end && self.count == 1
    }
}

/// Dictionary of lowercase words supporting prefix queries. Built once, then only read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a trie from a list of words, stopping at the first malformed one
    pub fn from_words<I, S>(words: I) -> Result<Self, BoggleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for w in words {
            trie.insert(w.as_ref())?;
        }
        Ok(trie)
    }

    /// Adds a word to the trie. The word must be non-empty lowercase a-z; nothing is
    /// changed if it is not. Inserting a word twice bumps the counts along its path again.
    pub fn insert(&mut self, word: &str) -> Result<(), BoggleError> {
        if word.is_empty() {
            return Err(BoggleError::EmptyWord);
        }
        if let Some(invalid_char) = word.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(BoggleError::InvalidWordChar {
                word: word.to_string(),
                invalid_char,
            });
        }

        let mut node = &mut self.root;
        node.count += 1;
        for c in word.chars() {
            node = node.next.entry(c).or_insert_with(|| TrieNode::new(c));
            node.count += 1;
        }
        node.terminal = true;
        Ok(())
    }

    /// Walks the trie along `prefix`. An empty trie reports every prefix as missing,
    /// including the empty one.
    pub fn query_prefix(&self, prefix: &str) -> PrefixQuery {
        if self.root.next.is_empty() {
            return PrefixQuery::MISSING;
        }
        let mut node = &self.root;
        for c in prefix.chars() {
            match node.next_node(c) {
                Some(n) => node = n,
                None => return PrefixQuery::MISSING,
            }
        }
        PrefixQuery {
            exists: true,
            count: node.count,
            is_word_end: node.terminal,
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        let q = self.query_prefix(word);
        q.exists && q.is_word_end
    }

    /// Number of insert calls made, which is the root's pass-through count
    pub fn word_count(&self) -> usize {
        self.root.count
    }

    pub fn is_empty(&self) -> bool {
        self.root.next.is_empty()
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }
}

/// Normalises a raw word list: one word per line, trimmed and lowercased. Lines that are
/// empty, contain anything but ASCII letters, or are shorter than `min_len` are dropped.
pub fn parse_word_list(contents: &str, min_len: usize) -> Vec<String> {
    contents
        .lines()
        .filter_map(|raw_line| {
            let word = raw_line.trim();
            if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
                return None;
            }
            if word.len() < min_len {
                return None;
            }
            Some(word.to_ascii_lowercase())
        })
        .collect()
}

/// Reads a word list from disk. See [`parse_word_list`].
pub fn load_word_list<P: AsRef<Path>>(path: P, min_len: usize) -> Result<Vec<String>, BoggleError> {
    let mut file = File::open(path.as_ref())?;
    let mut data = String::new();
    file.read_to_string(&mut data)?;

    let words = parse_word_list(&data, min_len);
    log::info!("Read {} words from {}", words.len(), path.as_ref().display());
    Ok(words)
}
