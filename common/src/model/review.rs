use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// A review embedded in exactly one `Dealer`.
///
/// `user`, `rating` and `comment` are stored exactly as submitted, so any of
/// them may be `null`. The rating keeps the JSON number it arrived as
/// (`5` stays `5`, `4.5` stays `4.5`) and has no enforced range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: Option<String>,
    pub rating: Option<Number>,
    pub comment: Option<String>,
    pub date: DateTime<Utc>,
}

/// Body of `POST /api/dealers/{id}/reviews`.
///
/// Missing fields deserialize to `None`. The id and date are filled in by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewReview {
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default, deserialize_with = "numeric_rating")]
    pub rating: Option<Number>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Accepts a JSON number or a numeric string (`"4"`, `"4.5"`). Anything else
/// is stored as `null`.
fn numeric_rating<'de, D>(deserializer: D) -> Result<Option<Number>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => Some(n),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .map(Number::from)
                .or_else(|| s.parse::<f64>().ok().and_then(Number::from_f64))
        }
        _ => None,
    })
}

impl NewReview {
    pub fn new(user: &str, rating: i64, comment: &str) -> Self {
        Self {
            user: Some(user.to_string()),
            rating: Some(Number::from(rating)),
            comment: Some(comment.to_string()),
        }
    }

    /// Turns the submission into a stored review stamped with `date`.
    pub fn into_review(self, id: String, date: DateTime<Utc>) -> Review {
        Review {
            id,
            user: self.user,
            rating: self.rating,
            comment: self.comment,
            date,
        }
    }
}
