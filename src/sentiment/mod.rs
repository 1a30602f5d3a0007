//! Description sentiment scoring
//!
//! Lexicon-based polarity: each description's score is the mean polarity of
//! its matched words, with a simple negation flip, clamped to [-1, 1]. Texts
//! with no matched words - including missing descriptions - score exactly
//! 0.0 (neutral).

mod lexicon;

use crate::catalog::Record;
use lexicon::{LEXICON, NEGATORS};
use rayon::prelude::*;
use std::collections::HashMap;

/// Negation weakens as well as inverts: "not good" reads as mildly negative,
/// not as the mirror image of "good".
const NEGATION_FACTOR: f64 = -0.5;

/// Polarity scorer over the embedded lexicon.
pub struct SentimentScorer {
    words: HashMap<&'static str, f64>,
}

impl SentimentScorer {
    pub fn new() -> Self {
        Self {
            words: LEXICON.iter().copied().collect(),
        }
    }

    /// Polarity of one text, in [-1.0, 1.0]. Empty text scores 0.0.
    pub fn score(&self, text: &str) -> f64 {
        let tokens: Vec<String> = text
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric() && c != '\'')
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect();

        let mut total = 0.0;
        let mut matched = 0usize;

        for (i, token) in tokens.iter().enumerate() {
            if let Some(&polarity) = self.words.get(token.as_str()) {
                let negated = i > 0 && NEGATORS.contains(&tokens[i - 1].as_str());
                total += if negated {
                    polarity * NEGATION_FACTOR
                } else {
                    polarity
                };
                matched += 1;
            }
        }

        if matched == 0 {
            return 0.0;
        }
        (total / matched as f64).clamp(-1.0, 1.0)
    }

    /// Score every record's description, missing descriptions as empty text.
    /// Returned scores align with the input slice.
    pub fn score_records(&self, records: &[Record]) -> Vec<f64> {
        records
            .par_iter()
            .map(|r| self.score(r.description.as_deref().unwrap_or("")))
            .collect()
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}
