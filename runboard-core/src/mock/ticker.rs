use super::MockConfig;
use crate::{Run, RunState};
use chrono::{DateTime, SecondsFormat, Utc};
use rand::Rng;
use serde_json::json;

const MIN_LOSS: f64 = 0.01;
const MAX_ACCURACY: f64 = 0.999;

/// Advances synthetic runs by one simulated time step.
///
/// Runs that are not running are returned unchanged. A running run moves forward
/// by a random number of steps, never past its `max_steps`. Once at its last step
/// it finishes with probability [`MockConfig::finish_probability`] per tick, so
/// completion lags behind full progress by a random number of ticks. Losses decay
/// and accuracy grows with some noise.
///
/// The output has the same length and order as `runs`.
pub fn tick_mock_runs<R: Rng + ?Sized>(
    runs: &[Run],
    config: &MockConfig,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Vec<Run> {
    runs.iter()
        .map(|run| {
            if run.is_running() {
                tick_run(run, config, rng, now)
            } else {
                run.clone()
            }
        })
        .collect()
}

fn tick_run<R: Rng + ?Sized>(
    run: &Run,
    config: &MockConfig,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Run {
    let m = &run.metrics;
    let max = m
        .first_nonzero_f64(&["max_steps", "total_steps"])
        .map(|v| v as i64)
        .unwrap_or(config.default_max_steps);
    let current = m
        .first_nonzero_f64(&["global_step", "_step"])
        .map(|v| v as i64)
        .unwrap_or(0);
    let increment = if config.max_step_increment > 0 {
        rng.gen_range(0..config.max_step_increment)
    } else {
        0
    };
    let next = max.min(current.saturating_add(increment));

    let finished =
        next >= max && rng.gen_bool(MockConfig::clamp_probability(config.finish_probability));
    let epoch_increment =
        if rng.gen_bool(MockConfig::clamp_probability(config.epoch_probability)) {
            1
        } else {
            0
        };
    let epoch = m.get_i64("epoch").unwrap_or(0).saturating_add(epoch_increment);

    let train_loss = m.first_nonzero_f64(&["train/loss"]).unwrap_or(1.2);
    let val_loss = m.first_nonzero_f64(&["val/loss"]).unwrap_or(1.1);
    let accuracy = m.first_nonzero_f64(&["accuracy"]).unwrap_or(0.6);

    let mut metrics = run.metrics.clone();
    metrics.insert("global_step", json!(next));
    metrics.insert("epoch", json!(epoch));
    metrics.insert(
        "train/loss",
        json!((train_loss * (0.95 + rng.gen::<f64>() * 0.05)).max(MIN_LOSS)),
    );
    metrics.insert(
        "val/loss",
        json!((val_loss * (0.96 + rng.gen::<f64>() * 0.06)).max(MIN_LOSS)),
    );
    metrics.insert(
        "accuracy",
        json!((accuracy * (1.001 + rng.gen::<f64>() * 0.01)).min(MAX_ACCURACY)),
    );

    Run {
        state: Some(if finished {
            RunState::Finished
        } else {
            RunState::Running
        }),
        updated_at: Some(now.to_rfc3339_opts(SecondsFormat::Millis, true)),
        metrics,
        ..run.clone()
    }
}
