//! # Sentiment Scorer
//!
//! Lexicon-based polarity scoring. Each token found in the embedded
//! AFINN-165 word list contributes its integer weight to the total score;
//! a weight is inverted when the token directly follows a negator
//! ("not good" scores like "bad"). `comparative` normalizes the score by the
//! number of tokens in the input.
//!
//! Tokens are scanned from last to first, so `calculation`, `positive` and
//! `negative` list contributions in reverse text order.
//!
//! The lexicon is parsed once at startup by [`Sentiment::new`] and shared
//! read-only between workers.

mod tokenizer;

use common::model::sentiment::{Assessment, SentimentAnalysis, TokenScore};
use std::collections::HashMap;
use thiserror::Error;

pub use tokenizer::tokenize;

const AFINN: &str = include_str!("afinn.txt");

const NEGATORS: &[&str] = &[
    "aint", "ain't", "arent", "aren't", "cannot", "cant", "can't", "couldnt", "couldn't",
    "didnt", "didn't", "doesnt", "doesn't", "dont", "don't", "hadnt", "hadn't", "hasnt",
    "hasn't", "havent", "haven't", "isnt", "isn't", "mightnt", "mightn't", "mustnt",
    "mustn't", "neednt", "needn't", "never", "not", "shouldnt", "shouldn't", "wasnt",
    "wasn't", "werent", "weren't", "wont", "won't", "wouldnt", "wouldn't",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LexiconError {
    #[error("lexicon line {line}: expected `word<TAB>weight`, got `{content}`")]
    Malformed { line: usize, content: String },
}

pub struct Sentiment {
    lexicon: HashMap<String, i32>,
}

impl Sentiment {
    /// Builds a scorer from the embedded word list.
    pub fn new() -> Result<Self, LexiconError> {
        Self::from_lexicon(AFINN)
    }

    /// Parses a `word<TAB>weight` list. Blank lines and `#` comments are skipped.
    pub fn from_lexicon(source: &str) -> Result<Self, LexiconError> {
        let mut lexicon = HashMap::new();
        for (idx, raw) in source.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let malformed = || LexiconError::Malformed {
                line: idx + 1,
                content: raw.to_string(),
            };
            let (word, weight) = line.rsplit_once('\t').ok_or_else(malformed)?;
            let weight: i32 = weight.trim().parse().map_err(|_| malformed())?;
            lexicon.insert(word.trim().to_lowercase(), weight);
        }
        Ok(Sentiment { lexicon })
    }

    pub fn word_count(&self) -> usize {
        self.lexicon.len()
    }

    /// Scores `text`. Pure: the same text always yields the same analysis.
    pub fn analyze(&self, text: &str) -> SentimentAnalysis {
        let tokens = tokenize(text);

        let mut score = 0i32;
        let mut calculation = Vec::new();
        let mut positive = Vec::new();
        let mut negative = Vec::new();

        for (i, token) in tokens.iter().enumerate().rev() {
            let Some(&weight) = self.lexicon.get(token) else {
                continue;
            };
            let negated = i > 0 && NEGATORS.contains(&tokens[i - 1].as_str());
            let weight = if negated { -weight } else { weight };

            if weight > 0 {
                positive.push(token.clone());
            } else if weight < 0 {
                negative.push(token.clone());
            }
            calculation.push(TokenScore {
                token: token.clone(),
                score: weight,
            });
            score = score.saturating_add(weight);
        }

        let comparative = if tokens.is_empty() {
            0.0
        } else {
            f64::from(score) / tokens.len() as f64
        };

        SentimentAnalysis {
            score,
            comparative,
            calculation,
            tokens,
            positive,
            negative,
            assessment: Assessment::from_score(score),
        }
    }
}
