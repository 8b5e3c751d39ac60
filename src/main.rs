use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
#[macro_use]
extern crate text_io;

use boggle::boggle::dictionary;
use boggle::utils::serialization;
use boggle::{BoggleError, Board, Searcher, Trie};

/// Finds every dictionary word that can be traced on a Boggle board
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board rows separated by '/', e.g. "tlbi/edes/pang/pths". Read from stdin if omitted
    board: Option<String>,

    /// JSON file holding the board rows, e.g. [["t","l"],["e","d"]]
    #[arg(short, long, conflicts_with = "board")]
    board_file: Option<PathBuf>,

    /// Word list, one word per line
    #[arg(short, long, default_value = "words_alpha.txt")]
    dictionary: PathBuf,

    /// Prebuilt dictionary; written from the word list when it does not exist yet
    #[arg(short, long)]
    cache: Option<PathBuf>,

    /// Shortest word to report
    #[arg(short, long, default_value_t = boggle::boggle::DEFAULT_MIN_LENGTH)]
    min_length: usize,

    /// Search starting cells in parallel
    #[arg(short, long)]
    parallel: bool,
}

fn main() -> ExitCode {
    let debug_enabled = std::env::var("BOGGLE_DEBUG").is_ok();
    boggle::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        eprintln!("Error: {}", e.display_detailed());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn read_board(cli: &Cli) -> Result<Board, BoggleError> {
    if let Some(rows) = &cli.board {
        return rows.parse();
    }
    if let Some(path) = &cli.board_file {
        return Board::from_file(path);
    }

    eprintln!("Enter board rows separated by '/':");
    let rows: String = try_read!("{}\n").map_err(|e| BoggleError::InvalidInput {
        str: e.to_string(),
    })?;
    rows.parse()
}

fn build_trie(cli: &Cli) -> Result<Trie, BoggleError> {
    if let Some(cache) = &cli.cache {
        if cache.exists() {
            let trie: Trie = serialization::load_from_disk(cache)?;
            log::info!("Loaded {} words from {}", trie.word_count(), cache.display());
            return Ok(trie);
        }
    }

    let words = dictionary::load_word_list(&cli.dictionary, cli.min_length)?;
    let trie = Trie::from_words(&words)?;

    if let Some(cache) = &cli.cache {
        serialization::save_to_disk(&trie, cache)?;
        log::info!("Wrote dictionary cache to {}", cache.display());
    }
    Ok(trie)
}

fn try_main() -> Result<(), BoggleError> {
    let cli = Cli::parse();

    let board = read_board(&cli)?;

    let t_load = Instant::now();
    let trie = build_trie(&cli)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    let t_search = Instant::now();
    let searcher = Searcher::new(&trie).with_min_length(cli.min_length);
    let found = if cli.parallel {
        searcher.find_words_par(&board)
    } else {
        searcher.find_words(&board)
    };
    let search_secs = t_search.elapsed().as_secs_f64();

    let mut words = found.into_iter().collect::<Vec<_>>();
    words.sort_unstable();
    for w in &words {
        println!("{}", w);
    }

    eprintln!("Found {} words", words.len());
    log::info!("Dictionary ready in {load_secs:.3}s; searched in {search_secs:.3}s");
    Ok(())
}
