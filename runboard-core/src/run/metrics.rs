//! Free-form metrics of a run.
//!
//! The tracking service does not impose any schema on metrics: keys like
//! `global_step`, `max_steps` or `train/loss` are chosen by the training script.
//! [`Metrics`] therefore stores raw JSON values and offers typed accessors on top.
use crate::error::RunboardError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{
    collections::{
        btree_map::{IntoIter, Iter, Keys},
        BTreeMap,
    },
    iter::FromIterator,
};

/// A mapping from metric names to JSON values, usually numbers.
///
/// # Examples
///
/// ```rust
/// use runboard_core::Metrics;
/// use serde_json::json;
///
/// let mut metrics = Metrics::empty();
/// metrics.insert("train/loss", json!(0.25));
/// metrics.insert("global_step", json!(1200));
///
/// assert_eq!(metrics.get_f64("train/loss"), Some(0.25));
/// assert_eq!(metrics.get_i64("global_step"), Some(1200));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metrics(BTreeMap<String, Value>);

impl Metrics {
    /// Creates an empty set of metrics.
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Creates metrics from the entries of a JSON object.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        Self(
            object
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }

    /// Inserts a metric, replacing any previous value under the same key.
    pub fn insert(&mut self, k: impl Into<String>, v: Value) {
        self.0.insert(k.into(), v);
    }

    /// Gets the raw value of a metric.
    pub fn get(&self, k: &str) -> Option<&Value> {
        self.0.get(k)
    }

    /// Returns `true` if the metric exists.
    pub fn contains_key(&self, k: &str) -> bool {
        self.0.contains_key(k)
    }

    /// Returns an iterator over the metric names.
    pub fn keys(&self) -> Keys<String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the metrics, sorted by name.
    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Number of metrics.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there is no metric.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merges `other` into `self`.
    ///
    /// Values in `other` win on conflicting keys.
    ///
    /// # Arguments
    ///
    /// * `other` - Metrics overriding the current ones
    ///
    /// # Returns
    ///
    /// The merged metrics
    pub fn merge(mut self, other: Metrics) -> Self {
        for (k, v) in other.0.into_iter() {
            self.0.insert(k, v);
        }
        self
    }

    /// Gets a metric as a floating point number.
    ///
    /// Returns `None` if the metric is missing or not a number.
    pub fn get_f64(&self, k: &str) -> Option<f64> {
        self.0.get(k).and_then(Value::as_f64)
    }

    /// Gets a metric as an integer.
    ///
    /// Floating point values are truncated toward zero. Returns `None` if the
    /// metric is missing or not a finite number.
    pub fn get_i64(&self, k: &str) -> Option<i64> {
        match self.0.get(k)? {
            Value::Number(n) => match n.as_i64() {
                Some(v) => Some(v),
                None => n.as_f64().filter(|v| v.is_finite()).map(|v| v as i64),
            },
            _ => None,
        }
    }

    /// Gets a metric as a floating point number.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The key does not exist
    /// - The value is not a number
    pub fn get_scalar(&self, k: &str) -> Result<f64, RunboardError> {
        match self.0.get(k) {
            Some(v) => v
                .as_f64()
                .ok_or_else(|| RunboardError::MetricValueTypeError("number".to_string())),
            None => Err(RunboardError::MetricKeyError(k.to_string())),
        }
    }

    /// Returns the first of `keys` holding a non-zero number.
    ///
    /// Missing, zero and non-numeric values are skipped, so that a key holding `0`
    /// falls through to the next alias.
    pub fn first_nonzero_f64(&self, keys: &[&str]) -> Option<f64> {
        keys.iter()
            .filter_map(|k| self.get_f64(k))
            .find(|v| *v != 0.0)
    }
}

impl IntoIterator for Metrics {
    type Item = (String, Value);
    type IntoIter = IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Metrics {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
