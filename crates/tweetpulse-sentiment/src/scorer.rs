//! Lexicon scorer for tweet text.

use std::collections::HashMap;

use thiserror::Error;

use crate::lexicon::LEXICON;

/// Tokens that flip the weight of the word that follows them.
const NEGATORS: &[&str] = &[
    "cant", "can't", "dont", "don't", "doesnt", "doesn't", "not", "non", "wont", "won't", "isnt",
    "isn't",
];

/// Characters the tokenizer treats as separators, in addition to whitespace.
const SEPARATORS: &[char] = &[
    '.', ',', '/', '#', '!', '?', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '_', '`', '"',
    '~', '(', ')',
];

/// Output of scoring a single text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreResult {
    /// Sum of all word contributions. Sign decides the label.
    pub score: i64,
    /// Words that contributed negatively, last occurrence in the text first.
    pub negative: Vec<String>,
    /// Words that contributed positively, last occurrence in the text first.
    pub positive: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("scoring failed: {0}")]
    Failed(String),
}

/// Turns text into a [`ScoreResult`].
pub trait SentimentScorer: Send + Sync {
    /// # Errors
    ///
    /// Returns [`ScoreError`] if the text cannot be scored.
    fn score(&self, text: &str) -> Result<ScoreResult, ScoreError>;
}

/// AFINN-style scorer over the embedded word list.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    weights: HashMap<&'static str, i64>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            weights: LEXICON.iter().copied().collect(),
        }
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> Result<ScoreResult, ScoreError> {
        let tokens = tokenize(text);
        let mut result = ScoreResult::default();

        // Walk backwards so each hit can look at the token before it for a negator.
        for (i, token) in tokens.iter().enumerate().rev() {
            let Some(&weight) = self.weights.get(token.as_str()) else {
                continue;
            };
            let negated = i > 0 && NEGATORS.contains(&tokens[i - 1].as_str());
            let weight = if negated { -weight } else { weight };

            if weight > 0 {
                result.positive.push(token.clone());
            } else if weight < 0 {
                result.negative.push(token.clone());
            }
            result.score += weight;
        }

        Ok(result)
    }
}

/// Lowercase, turn separator punctuation into spaces, split on whitespace.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .replace(SEPARATORS, " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
