//! Conversion of raw run records into [`Run`].
use crate::{Metrics, Run, RunState};
use serde_json::Value;

/// Builds a [`Run`] from a run record returned by the tracking service.
///
/// The record is expected to carry the fields `id`, `name`, `displayName`, `state`,
/// `sweepName`, `createdAt`, `updatedAt`, `summaryMetrics` and `historyTail`.
/// Fields that are missing or have an unexpected type are treated as absent.
///
/// `metrics` of the returned run is `summaryMetrics` overridden by the latest
/// history row. `historyTail` may be a list of rows, in which case the last row is
/// used, or a single row. Any other shape contributes nothing.
///
/// This function never fails.
///
/// ```rust
/// use runboard_core::normalize;
/// use serde_json::json;
///
/// let run = normalize(&json!({
///     "id": "r1",
///     "name": "run-1",
///     "state": "running",
///     "summaryMetrics": {"loss": 1.0, "epoch": 3},
///     "historyTail": [{"loss": 0.9}, {"loss": 0.5}],
/// }));
///
/// assert_eq!(run.metrics.get_f64("loss"), Some(0.5));
/// assert_eq!(run.metrics.get_i64("epoch"), Some(3));
/// ```
pub fn normalize(node: &Value) -> Run {
    let summary = object_metrics(node.get("summaryMetrics"));
    let tail = latest_history_row(node.get("historyTail"));

    Run {
        id: string_field(node, "id").unwrap_or_default(),
        name: string_field(node, "name").unwrap_or_default(),
        display_name: string_field(node, "displayName"),
        state: string_field(node, "state").map(RunState::from),
        sweep_name: string_field(node, "sweepName"),
        created_at: string_field(node, "createdAt"),
        updated_at: string_field(node, "updatedAt"),
        metrics: summary.merge(tail),
    }
}

fn string_field(node: &Value, key: &str) -> Option<String> {
    node.get(key).and_then(Value::as_str).map(str::to_string)
}

fn object_metrics(value: Option<&Value>) -> Metrics {
    match value {
        Some(Value::Object(object)) => Metrics::from_object(object),
        _ => Metrics::empty(),
    }
}

fn latest_history_row(tail: Option<&Value>) -> Metrics {
    match tail {
        Some(Value::Array(rows)) => object_metrics(rows.last()),
        row => object_metrics(row),
    }
}
