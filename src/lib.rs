// Library API shared by the CLI and the integration tests
pub mod boggle;
pub mod errors;
pub mod log;
pub mod utils;

pub use boggle::{find_words, Board, FoundWords, Searcher, Trie};
pub use errors::BoggleError;
