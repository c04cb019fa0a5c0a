//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::Serialize;

use crate::cli::args::{JiucuoArgs, OutputFormat};
use crate::error::Result;
use crate::lexicon::Word;
use crate::spelling::corrector::WordCorrection;
use crate::spelling::rank::ScoredCandidate;
use crate::spelling::sentence::SentenceCorrection;

/// Render a result for human-readable output.
pub trait HumanRender {
    fn human(&self) -> String;
}

/// Result structure for sentence correction.
#[derive(Debug, Serialize)]
pub struct CorrectOutput {
    pub sentences: Vec<SentenceCorrection>,
}

impl HumanRender for CorrectOutput {
    fn human(&self) -> String {
        let mut out = String::new();
        for sentence in &self.sentences {
            let _ = writeln!(out, "{}", sentence.corrected);
            for correction in &sentence.corrections {
                let _ = writeln!(out, "  {}", render_correction(correction));
            }
        }
        out.trim_end().to_string()
    }
}

/// Result structure for the word check.
#[derive(Debug, Serialize)]
pub struct CheckOutput {
    pub word: Word,
    pub known: bool,
    pub frequency: u64,
    pub suggestions: Vec<ScoredCandidate>,
}

impl HumanRender for CheckOutput {
    fn human(&self) -> String {
        let mut out = String::new();
        if self.known {
            let _ = writeln!(out, "{}: known (frequency {})", self.word, self.frequency);
        } else {
            let _ = writeln!(out, "{}: unknown", self.word);
        }
        for suggestion in &self.suggestions {
            let _ = writeln!(
                out,
                "  {} ({}, frequency {}, score {:.3})",
                suggestion.word, suggestion.tier, suggestion.frequency, suggestion.score
            );
        }
        out.trim_end().to_string()
    }
}

/// Result structure for dictionary statistics.
#[derive(Debug, Serialize)]
pub struct StatsOutput {
    pub words: usize,
    pub total_frequency: u64,
    pub max_word_chars: usize,
    pub top_words: Vec<TopWord>,
}

/// One entry of the most-frequent-words listing.
#[derive(Debug, Serialize)]
pub struct TopWord {
    pub word: Word,
    pub frequency: u64,
}

impl HumanRender for StatsOutput {
    fn human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "words: {}", self.words);
        let _ = writeln!(out, "total frequency: {}", self.total_frequency);
        let _ = writeln!(out, "longest word: {} characters", self.max_word_chars);
        for top in &self.top_words {
            let _ = writeln!(out, "  {} {}", top.word, top.frequency);
        }
        out.trim_end().to_string()
    }
}

fn render_correction(correction: &WordCorrection) -> String {
    format!(
        "{} -> {} ({}, frequency {})",
        correction.original, correction.corrected, correction.tier, correction.frequency
    )
}

/// Output a result in the format selected on the command line.
pub fn output_result<T: Serialize + HumanRender>(result: &T, args: &JiucuoArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("{}", result.human());
            Ok(())
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            println!("{json}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::classify::Tier;

    #[test]
    fn test_correct_output_human() {
        let output = CorrectOutput {
            sentences: vec![SentenceCorrection {
                original: "机七学习".to_string(),
                corrected: "机器学习".to_string(),
                corrections: vec![WordCorrection {
                    original: Word::new("机七"),
                    corrected: Word::new("机器"),
                    tier: Tier::Exact,
                    frequency: 100,
                }],
            }],
        };

        let human = output.human();
        assert!(human.contains("机器学习"));
        assert!(human.contains("机七 -> 机器 (exact, frequency 100)"));
    }

    #[test]
    fn test_check_output_human() {
        let output = CheckOutput {
            word: Word::new("机七"),
            known: false,
            frequency: 0,
            suggestions: vec![ScoredCandidate {
                word: Word::new("机器"),
                score: 0.8,
                frequency: 100,
                tier: Tier::Exact,
            }],
        };

        let human = output.human();
        assert!(human.contains("机七: unknown"));
        assert!(human.contains("机器 (exact, frequency 100, score 0.800)"));
    }

    #[test]
    fn test_output_serializes_to_json() {
        let output = CheckOutput {
            word: Word::new("机器"),
            known: true,
            frequency: 100,
            suggestions: vec![],
        };

        let json = serde_json::to_string(&output).unwrap();
        assert!(json.contains("\"known\":true"));
        assert!(json.contains("机器"));
    }
}
