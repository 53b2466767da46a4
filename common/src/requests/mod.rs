use serde::Deserialize;

#[derive(Deserialize)]
/// Request payload for the sentiment endpoint.
/// `text` is optional here so that a missing field can be reported as a 400.
pub struct AnalyzeSentimentRequest {
    #[serde(default)]
    pub text: Option<String>,
}
