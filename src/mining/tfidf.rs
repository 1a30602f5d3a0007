//! TF-IDF vectorization of short tag strings
//!
//! Matches the usual smoothed formulation: idf = ln((1+n)/(1+df)) + 1, rows
//! l2-normalised. The vocabulary here is genre tags, so matrices stay small
//! and dense storage is fine.

use std::collections::{HashMap, HashSet};

/// English stop words removed before counting. Tag strings are short, so the
/// list only needs the connective words that actually occur in them.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him", "his", "how",
    "if", "in", "into", "is", "it", "its", "just", "me", "more", "most", "my", "no", "nor",
    "not", "now", "of", "off", "on", "once", "only", "or", "other", "our", "out", "over", "own",
    "same", "she", "should", "so", "some", "such", "than", "that", "the", "their", "them",
    "then", "there", "these", "they", "this", "those", "through", "to", "too", "under", "until",
    "up", "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom",
    "why", "will", "with", "you", "your", "yours",
];

/// Fitted vectorizer: alphabetical vocabulary plus per-term idf weights.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: Vec<String>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Fit on `docs` and return the vectorizer together with the dense
    /// document-term matrix (one l2-normalised row per input document).
    ///
    /// Documents with no surviving tokens (empty string, all stop words)
    /// produce an all-zero row.
    pub fn fit_transform(docs: &[&str]) -> (TfidfVectorizer, Vec<Vec<f64>>) {
        let stop: HashSet<&str> = STOP_WORDS.iter().copied().collect();
        let tokenized: Vec<Vec<String>> = docs
            .iter()
            .map(|doc| tokenize(doc, &stop))
            .collect();

        // Document frequency per term.
        let mut df: HashMap<&str, usize> = HashMap::new();
        for tokens in &tokenized {
            let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for term in unique {
                *df.entry(term).or_insert(0) += 1;
            }
        }

        let mut vocabulary: Vec<String> = df.keys().map(|t| t.to_string()).collect();
        vocabulary.sort();

        let n = docs.len() as f64;
        let idf: Vec<f64> = vocabulary
            .iter()
            .map(|term| ((1.0 + n) / (1.0 + df[term.as_str()] as f64)).ln() + 1.0)
            .collect();

        let index: HashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.as_str(), i))
            .collect();

        let matrix: Vec<Vec<f64>> = tokenized
            .iter()
            .map(|tokens| {
                let mut row = vec![0.0; vocabulary.len()];
                for token in tokens {
                    row[index[token.as_str()]] += 1.0;
                }
                for (value, weight) in row.iter_mut().zip(&idf) {
                    *value *= weight;
                }
                l2_normalize(&mut row);
                row
            })
            .collect();

        (TfidfVectorizer { vocabulary, idf }, matrix)
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn idf(&self) -> &[f64] {
        &self.idf
    }
}

/// Lowercase word tokenizer: alphanumeric runs of length >= 2, stop words
/// removed.
fn tokenize(text: &str, stop: &HashSet<&str>) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= 2)
        .filter(|token| !stop.contains(token))
        .map(String::from)
        .collect()
}

fn l2_normalize(row: &mut [f64]) {
    let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm > 0.0 {
        for value in row.iter_mut() {
            *value /= norm;
        }
    }
}
