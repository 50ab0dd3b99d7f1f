//! Console rendering of a probe outcome.

use std::io::{self, Write};

use serde_json::Value;

use crate::models::ParsingResult;
use crate::prober::ProbeOutcome;

/// Shown for keys the service omitted or sent as `null`.
pub const MISSING: &str = "None";

/// Writes the human-readable summary of `outcome` to `out`.
pub fn write_outcome<W: Write>(out: &mut W, outcome: &ProbeOutcome) -> io::Result<()> {
    match outcome {
        ProbeOutcome::Parsed(response) => {
            writeln!(out, "✅ PDF parsing successful!")?;
            writeln!(out, "📄 Filename: {}", display_value(response.filename.as_ref()))?;
            writeln!(out, "📊 Source: {}", display_value(response.source.as_ref()))?;

            let result = response.parsing_result.as_ref();
            let field = |get: fn(&ParsingResult) -> Option<&Value>| {
                display_value(result.and_then(get))
            };
            writeln!(out)?;
            writeln!(out, "👤 Name: {}", field(|r| r.name.as_ref()))?;
            writeln!(out, "📧 Email: {}", field(|r| r.email.as_ref()))?;
            writeln!(out, "📱 Phone: {}", field(|r| r.mobile_number.as_ref()))?;
            writeln!(out, "🎯 Skills: {}", field(|r| r.skills.as_ref()))?;
            writeln!(out, "🎓 Education: {}", field(|r| r.education.as_ref()))?;
            writeln!(out, "💼 Experience: {}", field(|r| r.experience.as_ref()))?;
        }
        ProbeOutcome::Rejected { status, body } => {
            writeln!(out, "❌ PDF parsing failed with status {status}")?;
            writeln!(out, "Response: {body}")?;
        }
    }
    Ok(())
}

/// Strings print verbatim, lists of scalars comma-joined, anything else as
/// compact JSON.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => MISSING.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) if items.iter().all(is_scalar) => items
            .iter()
            .map(|item| display_value(Some(item)))
            .collect::<Vec<_>>()
            .join(", "),
        Some(other) => other.to_string(),
    }
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}
