//! Reading well-known metrics out of free-form run metrics.
//!
//! Training scripts name the same quantity differently (`train/loss`, `loss`,
//! `train_loss`, ...). Each quantity has an ordered list of candidate keys and
//! the first one present in the metrics wins.
use crate::Metrics;
use serde_json::Value;

/// Candidate keys of the training loss.
pub const TRAIN_LOSS_KEYS: &[&str] = &["train/loss", "loss", "train_loss"];

/// Candidate keys of the validation loss.
pub const VAL_LOSS_KEYS: &[&str] = &["val/loss", "validation/loss", "val_loss"];

/// Candidate keys of the accuracy.
pub const ACCURACY_KEYS: &[&str] = &["accuracy", "acc", "val/accuracy", "eval/accuracy"];

/// Candidate keys of the current step.
pub const STEP_KEYS: &[&str] = &["global_step", "_step", "step"];

/// Candidate keys of the total number of steps.
pub const MAX_STEP_KEYS: &[&str] = &["max_steps", "total_steps", "training_steps"];

/// Candidate keys of the current epoch.
pub const EPOCH_KEYS: &[&str] = &["epoch", "current_epoch"];

/// Candidate keys of the total number of epochs.
pub const MAX_EPOCH_KEYS: &[&str] = &["max_epochs", "epochs"];

/// Returns the first candidate key present in `metrics`, with its value.
///
/// `null` values count as present, as the tracking service reports them.
pub fn pick_metric<'a>(metrics: &'a Metrics, keys: &[&'a str]) -> Option<(&'a str, &'a Value)> {
    keys.iter()
        .find_map(|k| metrics.get(k).map(|v| (*k, v)))
}

fn first_number(metrics: &Metrics, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|k| metrics.get_f64(k))
}

/// Formats a metric value for display.
///
/// Large numbers lose their decimals, small ones switch to scientific notation.
pub fn format_metric(value: &Value) -> String {
    match value {
        Value::Null => "—".to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(v) if v.abs() >= 1000.0 => format!("{:.0}", v),
            Some(v) if v.abs() >= 100.0 => format!("{:.1}", v),
            Some(v) if v.abs() >= 1.0 => format!("{:.3}", v),
            Some(v) => format!("{:.2e}", v),
            None => n.to_string(),
        },
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Coarse level of progress, used to pick a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTier {
    /// Up to 50%.
    Low,

    /// Above 50%, up to 90%.
    Mid,

    /// Above 90%.
    High,
}

/// Progress of a run, derived from its metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    /// Percentage in `[0, 100]`.
    pub percent: f64,

    /// Text describing the progress, like `Step 120 / 4000`.
    pub label: String,
}

impl Progress {
    /// Computes the progress of a run.
    ///
    /// Steps take precedence over epochs. When only the current step is known,
    /// the percentage is a placeholder between 15% and 85% growing with the step.
    pub fn from_metrics(metrics: &Metrics) -> Self {
        let step = first_number(metrics, STEP_KEYS).unwrap_or(0.0);

        if let Some(max) = first_number(metrics, MAX_STEP_KEYS).filter(|v| *v != 0.0) {
            return Self {
                percent: clamp(step * 100.0 / max),
                label: format!("Step {} / {}", fmt_count(step), fmt_count(max)),
            };
        }

        if let Some(max_epochs) = first_number(metrics, MAX_EPOCH_KEYS).filter(|v| *v != 0.0) {
            let epoch = first_number(metrics, EPOCH_KEYS).unwrap_or(0.0);
            return Self {
                percent: clamp(epoch * 100.0 / max_epochs),
                label: format!("Epoch {} / {}", fmt_count(epoch), fmt_count(max_epochs)),
            };
        }

        if step != 0.0 {
            return Self {
                percent: 15.0 + step.min(1000.0) / 1000.0 * 70.0,
                label: format!("Step {}", fmt_count(step)),
            };
        }

        Self {
            percent: 0.0,
            label: "Progress unknown".to_string(),
        }
    }

    /// Tier of the percentage.
    pub fn tier(&self) -> ProgressTier {
        if self.percent > 90.0 {
            ProgressTier::High
        } else if self.percent > 50.0 {
            ProgressTier::Mid
        } else {
            ProgressTier::Low
        }
    }
}

fn clamp(percent: f64) -> f64 {
    percent.max(0.0).min(100.0)
}

// Integral counts print without a fractional part.
fn fmt_count(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}
