pub mod board;
pub mod dictionary;
pub mod search;
pub mod util;
pub mod visited;

pub use self::board::Board;
pub use self::dictionary::{PrefixQuery, Trie};
pub use self::search::{find_words, FoundWords, Searcher, DEFAULT_MIN_LENGTH};
