use crate::core::{DiffSummary, GeminiSummary, SummaryResponse};
use crate::utils::error::{ResultsError, Result};
use serde_json::Value;

/// Lodash-style emptiness: null, `{}` and `[]` all count as "no artifact".
fn is_empty_document(raw: &Value) -> bool {
    match raw {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn field(source: Option<&Value>, name: &str) -> Option<Value> {
    source.and_then(|s| s.get(name)).cloned()
}

pub fn summarize_gemini(raw: &Value) -> GeminiSummary {
    if is_empty_document(raw) {
        return GeminiSummary::default();
    }

    let result = raw.get("result");
    if result.is_none() {
        tracing::warn!("Gemini results have no 'result' object");
    }

    GeminiSummary {
        write_ops: field(result, "write_ops"),
        write_errors: field(result, "write_errors"),
        read_ops: field(result, "read_ops"),
        read_errors: field(result, "read_errors"),
    }
}

pub fn summarize_diff(raw: &Value) -> DiffSummary {
    if is_empty_document(raw) {
        return DiffSummary::default();
    }

    let source = Some(raw);
    DiffSummary {
        matched_partitions: field(source, "matched_partitions"),
        matched_rows: field(source, "matched_rows"),
        matched_values: field(source, "matched_values"),
        mismatched_partitions: field(source, "mismatched_partitions"),
        mismatched_values: field(source, "mismatched_values"),
        partitions_only_in_source: field(source, "partitions_only_in_source"),
        partitions_only_in_target: field(source, "partitions_only_in_target"),
    }
}

/// Any JSON number counts. Fractions round away from zero so a non-zero
/// value never collapses to zero; out-of-range values saturate.
fn as_count(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    if value.as_u64().is_some() {
        return Some(i64::MAX);
    }
    value
        .as_f64()
        .filter(|f| f.is_finite())
        .map(|f| (if f >= 0.0 { f.ceil() } else { f.floor() }) as i64)
}

fn require_count(
    artifact: &'static str,
    field: &'static str,
    value: &Option<Value>,
) -> Result<i64> {
    value
        .as_ref()
        .and_then(as_count)
        .ok_or(ResultsError::MissingErrorField { artifact, field })
}

/// Total of the four error-contributing fields. Any of them being absent or
/// non-numeric is an error rather than an implicit zero.
pub fn count_errors(summary: &SummaryResponse) -> Result<i64> {
    let counts = [
        require_count("gemini", "write_errors", &summary.gemini.write_errors)?,
        require_count("gemini", "read_errors", &summary.gemini.read_errors)?,
        require_count(
            "cassandra_diff",
            "mismatched_partitions",
            &summary.cassandra_diff.mismatched_partitions,
        )?,
        require_count(
            "cassandra_diff",
            "mismatched_values",
            &summary.cassandra_diff.mismatched_values,
        )?,
    ];

    Ok(counts.iter().fold(0i64, |total, c| total.saturating_add(*c)))
}

pub fn build_summary(gemini_raw: &Value, diff_raw: &Value) -> SummaryResponse {
    SummaryResponse {
        gemini: summarize_gemini(gemini_raw),
        cassandra_diff: summarize_diff(diff_raw),
    }
}
