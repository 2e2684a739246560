use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct FeedbackRequest {
    pub text: String,
}

/// Every field is printed as-is, so none of them is validated. A missing
/// key prints as `undefined`, a `null` as `null`.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackResponse {
    #[serde(default = "undefined", deserialize_with = "opaque_text")]
    pub sentiment: String,
    #[serde(default = "undefined", deserialize_with = "opaque_text")]
    pub score: String,
    /// Lists are flattened the way the page prints them
    #[serde(default = "undefined", deserialize_with = "opaque_text")]
    pub suggestions: String,
    #[serde(default = "undefined", deserialize_with = "opaque_text")]
    pub summary: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentIntentRequest {
    /// Minor currency units, not validated
    pub amount: i64,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    pub client_secret: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

/// Body of the `feedbackForm` submission
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackForm {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentForm {
    pub amount: i64,
}

fn opaque_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(page_text(&value))
}

fn undefined() -> String {
    "undefined".to_string()
}

fn page_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_text(n),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => page_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}

// Whole floats print without a fraction: `7.0` -> `7`
fn number_text(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(f) = n.as_f64() {
        f.to_string()
    } else {
        n.to_string()
    }
}
