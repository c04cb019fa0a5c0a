//! Command implementations for the jiucuo CLI.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::sync::Arc;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{JiucuoError, Result};
use crate::lexicon::{Alphabet, FrequencyDictionary, Word};
use crate::pinyin::{PinyinTable, ToneStyle};
use crate::segment::MaxMatchSegmenter;
use crate::spelling::corrector::{Corrector, CorrectorConfig};
use crate::spelling::sentence::SentenceCorrector;

/// Execute a CLI command.
pub fn execute_command(args: JiucuoArgs) -> Result<()> {
    match &args.command {
        Command::Correct(correct_args) => correct(correct_args.clone(), &args),
        Command::Check(check_args) => check(check_args.clone(), &args),
        Command::Stats(stats_args) => stats(stats_args.clone(), &args),
    }
}

/// Build a corrector and its shared dictionary from lexicon options.
fn build_corrector(
    lexicon: &LexiconArgs,
    cli_args: &JiucuoArgs,
) -> Result<(Arc<FrequencyDictionary>, Corrector)> {
    if cli_args.verbosity() > 1 {
        println!("Loading dictionary from: {}", lexicon.dict.display());
    }
    let dictionary = Arc::new(FrequencyDictionary::load_from_file(&lexicon.dict)?);

    if cli_args.verbosity() > 1 {
        println!("Loading alphabet from: {}", lexicon.alphabet.display());
    }
    let alphabet = Alphabet::load_from_file(&lexicon.alphabet)?;

    let table = match &lexicon.pinyin {
        Some(path) => PinyinTable::load_from_file(path)?,
        None => PinyinTable::builtin(),
    };
    let table = if lexicon.tones {
        table.with_tone_style(ToneStyle::Marked)
    } else {
        table
    };

    let config = CorrectorConfig {
        strategy: lexicon.strategy.into(),
        fuzzy_initials: lexicon.fuzzy,
    };

    let corrector = Corrector::with_config(
        Arc::clone(&dictionary),
        alphabet,
        Box::new(table),
        config,
    );
    Ok((dictionary, corrector))
}

/// Correct sentences from arguments or an input file.
fn correct(args: CorrectArgs, cli_args: &JiucuoArgs) -> Result<()> {
    let sentences = if let Some(path) = &args.input {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut lines = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if !line.trim().is_empty() {
                lines.push(line);
            }
        }
        lines
    } else if !args.text.is_empty() {
        args.text.clone()
    } else {
        return Err(JiucuoError::invalid_argument(
            "no sentences given; pass TEXT arguments or --input",
        ));
    };

    let (dictionary, corrector) = build_corrector(&args.lexicon, cli_args)?;
    let sentence_corrector =
        SentenceCorrector::new(corrector, Box::new(MaxMatchSegmenter::new(dictionary)));

    let results = sentence_corrector.correct_batch(&sentences)?;

    if cli_args.verbosity() > 1 {
        let corrected = results.iter().filter(|r| r.was_corrected()).count();
        println!("Corrected {corrected} of {} sentences", results.len());
    }

    output_result(&CorrectOutput { sentences: results }, cli_args)
}

/// Check a single word and list ranked suggestions.
fn check(args: CheckArgs, cli_args: &JiucuoArgs) -> Result<()> {
    let (_, corrector) = build_corrector(&args.lexicon, cli_args)?;
    let word = Word::new(&args.word);

    let known = corrector.is_known(word.as_str());
    let frequency = corrector.dictionary().frequency(word.as_str());
    let suggestions = corrector.suggestions(&word, args.top_k)?;

    output_result(
        &CheckOutput {
            word,
            known,
            frequency,
            suggestions,
        },
        cli_args,
    )
}

/// Show dictionary statistics.
fn stats(args: StatsArgs, cli_args: &JiucuoArgs) -> Result<()> {
    let dictionary = FrequencyDictionary::load_from_file(&args.dict)?;

    let top_words = dictionary
        .most_frequent(args.top)
        .into_iter()
        .map(|(word, frequency)| TopWord { word, frequency })
        .collect();

    output_result(
        &StatsOutput {
            words: dictionary.len(),
            total_frequency: dictionary.total_frequency(),
            max_word_chars: dictionary.max_word_chars(),
            top_words,
        },
        cli_args,
    )
}
