use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Human-readable label derived from the sign of a sentiment score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Assessment {
    Positive,
    Negative,
    Neutral,
}

impl Assessment {
    /// Strictly positive scores are `Positive`, strictly negative ones `Negative`,
    /// and zero is `Neutral`.
    pub fn from_score(score: i32) -> Self {
        if score > 0 {
            Assessment::Positive
        } else if score < 0 {
            Assessment::Negative
        } else {
            Assessment::Neutral
        }
    }
}

/// Weight a single token contributed to the score.
///
/// Serialized as a one-entry object, e.g. `{"great": 3}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenScore {
    pub token: String,
    pub score: i32,
}

impl Serialize for TokenScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.token, &self.score)?;
        map.end()
    }
}

/// Response of `POST /api/analyze-sentiment`.
#[derive(Debug, Clone, Serialize)]
pub struct SentimentAnalysis {
    pub score: i32,
    pub comparative: f64,
    pub calculation: Vec<TokenScore>,
    pub tokens: Vec<String>,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
    pub assessment: Assessment,
}
