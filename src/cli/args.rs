//! Command line argument parsing for the jiucuo CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::spelling::corrector::RankingStrategy;

/// jiucuo - pinyin-aware spelling correction for Chinese text
#[derive(Parser, Debug, Clone)]
#[command(name = "jiucuo")]
#[command(about = "Pinyin-aware spelling correction for Chinese text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct JiucuoArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl JiucuoArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Correct sentences
    Correct(CorrectArgs),

    /// Check a single word and list suggestions
    Check(CheckArgs),

    /// Show dictionary statistics
    Stats(StatsArgs),
}

/// Lexicon and pipeline options shared by correcting commands
#[derive(Parser, Debug, Clone)]
pub struct LexiconArgs {
    /// Path to the word-frequency dictionary file (word frequency per line)
    #[arg(short, long, value_name = "DICT_FILE")]
    pub dict: PathBuf,

    /// Path to the substitution alphabet file (flat character list)
    #[arg(short, long, value_name = "ALPHABET_FILE")]
    pub alphabet: PathBuf,

    /// Pinyin table file (character pinyin per line); built-in table if omitted
    #[arg(short, long, value_name = "PINYIN_FILE")]
    pub pinyin: Option<PathBuf>,

    /// Keep tone marks when comparing pronunciations
    #[arg(long)]
    pub tones: bool,

    /// Ranking strategy
    #[arg(long, value_enum, default_value = "tier-frequency")]
    pub strategy: StrategyArg,

    /// Tolerate fuzzy initial pairs (z/zh, c/ch, s/sh, n/l, ...)
    #[arg(long)]
    pub fuzzy: bool,
}

/// Arguments for correcting sentences
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    #[command(flatten)]
    pub lexicon: LexiconArgs,

    /// Sentences to correct
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Read sentences from a file, one per line
    #[arg(short, long, value_name = "INPUT_FILE")]
    pub input: Option<PathBuf>,
}

/// Arguments for checking a single word
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub lexicon: LexiconArgs,

    /// The word to check
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Maximum number of suggestions
    #[arg(short = 'k', long, default_value_t = 5)]
    pub top_k: usize,
}

/// Arguments for dictionary statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the word-frequency dictionary file
    #[arg(short, long, value_name = "DICT_FILE")]
    pub dict: PathBuf,

    /// Number of top words to list
    #[arg(long, default_value_t = 10)]
    pub top: usize,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Ranking strategy options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyArg {
    /// Tier priority, then dictionary frequency
    TierFrequency,
    /// Tier priority, then weighted similarity score
    WeightedScore,
}

impl From<StrategyArg> for RankingStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::TierFrequency => RankingStrategy::TierFrequency,
            StrategyArg::WeightedScore => RankingStrategy::WeightedScore,
        }
    }
}
