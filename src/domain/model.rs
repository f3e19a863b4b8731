use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key load-generator (gemini) metrics. Fields absent upstream are omitted on
/// serialization, so a summary built from an empty artifact serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_ops: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_errors: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_ops: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_errors: Option<Value>,
}

/// Key data-diff (cassandra-diff) metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_partitions: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_rows: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_values: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mismatched_partitions: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mismatched_values: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partitions_only_in_source: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partitions_only_in_target: Option<Value>,
}

impl GeminiSummary {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl DiffSummary {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Response body of `GET /results/summary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub gemini: GeminiSummary,
    pub cassandra_diff: DiffSummary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Failed,
}

impl Verdict {
    pub fn from_error_count(error_count: i64) -> Self {
        if error_count > 0 {
            Verdict::Failed
        } else {
            Verdict::Passed
        }
    }

    pub fn http_status(self) -> u16 {
        match self {
            Verdict::Passed => 200,
            Verdict::Failed => 500,
        }
    }
}

/// Outcome of one summary request.
#[derive(Debug, Clone)]
pub struct SummaryReport {
    pub body: SummaryResponse,
    /// `None` when the error-contributing fields could not all be read.
    pub error_count: Option<i64>,
    pub verdict: Verdict,
}
