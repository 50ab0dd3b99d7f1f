use serde::Deserialize;
use serde_json::Value;

/// Body returned by the parsing endpoint on HTTP 200.
///
/// Every key is optional: the service contract is not guaranteed, so a
/// missing key deserializes to `None` instead of failing.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ParseResponse {
    pub filename: Option<Value>,
    pub source: Option<Value>,
    pub parsing_result: Option<ParsingResult>,
}

/// Extracted resume fields. Types are free-form and shown as-is.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ParsingResult {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub mobile_number: Option<Value>,
    pub skills: Option<Value>,
    pub education: Option<Value>,
    pub experience: Option<Value>,
}
