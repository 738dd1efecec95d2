use super::MockConfig;
use crate::{Metrics, Run, RunState};
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use rand::Rng;
use serde_json::json;

/// Number of runs generated when the dashboard starts in demo mode.
pub const DEFAULT_MOCK_RUNS: usize = 9;

/// States of generated runs, assigned round-robin by index.
pub const STATE_CYCLE: [RunState; 9] = [
    RunState::Running,
    RunState::Running,
    RunState::Finished,
    RunState::Running,
    RunState::Failed,
    RunState::Queued,
    RunState::Running,
    RunState::Finished,
    RunState::Running,
];

const ID_CHARS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

const MIN_MAX_STEPS: i64 = 2000;
const MAX_MAX_STEPS: i64 = 6000;
const MAX_INITIAL_STEP: i64 = 1600;
const N_SWEEPS: usize = 3;

/// Generates `count` synthetic runs.
///
/// The `i`-th run gets the state `STATE_CYCLE[i % 9]`. Finished runs are at their
/// last step, other runs start partially progressed. Timestamps lie within the
/// hour before `now`. Ids are unique within the returned runs.
pub fn generate_mock_runs<R: Rng + ?Sized>(
    count: usize,
    config: &MockConfig,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Vec<Run> {
    (0..count).map(|i| generate_run(i, config, rng, now)).collect()
}

fn generate_run<R: Rng + ?Sized>(
    i: usize,
    config: &MockConfig,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Run {
    let state = STATE_CYCLE[i % STATE_CYCLE.len()].clone();
    let max_steps = rng.gen_range(MIN_MAX_STEPS..MAX_MAX_STEPS);
    let global_step = if state == RunState::Finished {
        max_steps
    } else {
        rng.gen_range(0..MAX_INITIAL_STEP.min(max_steps))
    };
    let steps_per_epoch = config.steps_per_epoch.max(1);

    let sweep_name = if rng.gen_bool(MockConfig::clamp_probability(config.sweep_probability)) {
        Some(format!("sweep-{}", (i % N_SWEEPS) + 1))
    } else {
        None
    };
    let created_at = now - Duration::milliseconds(rng.gen_range(0..3_600_000));
    let updated_at = now - Duration::milliseconds(rng.gen_range(0..1_200_000));

    let mut metrics = Metrics::empty();
    metrics.insert("global_step", json!(global_step));
    metrics.insert("max_steps", json!(max_steps));
    metrics.insert("epoch", json!(global_step / steps_per_epoch));
    metrics.insert("max_epochs", json!(max_steps / steps_per_epoch));
    metrics.insert("train/loss", json!(round3(rng.gen::<f64>() * 2.0 + 0.1)));
    metrics.insert("val/loss", json!(round3(rng.gen::<f64>() * 2.0 + 0.1)));
    metrics.insert("accuracy", json!(round3(rng.gen::<f64>() * 0.4 + 0.5)));

    Run {
        id: format!("demo-{}-{}", i, random_suffix(rng)),
        name: format!("run-{}", i + 1),
        display_name: Some(format!("Experiment {}", i + 1)),
        state: Some(state),
        sweep_name,
        created_at: Some(created_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
        updated_at: Some(updated_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
        metrics,
    }
}

fn random_suffix<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..5)
        .map(|_| ID_CHARS[rng.gen_range(0..ID_CHARS.len())] as char)
        .collect()
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    fn generate(count: usize, seed: u64) -> Vec<Run> {
        let mut rng = StdRng::seed_from_u64(seed);
        generate_mock_runs(count, &MockConfig::default(), &mut rng, Utc::now())
    }

    #[test]
    fn test_generate_nine_runs() {
        let runs = generate(DEFAULT_MOCK_RUNS, 42);
        assert_eq!(runs.len(), 9);

        let ids: HashSet<&str> = runs.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), 9);

        for (i, run) in runs.iter().enumerate() {
            assert_eq!(run.state.as_ref(), Some(&STATE_CYCLE[i]));
            assert_eq!(run.name, format!("run-{}", i + 1));
            assert!(run.id.starts_with(&format!("demo-{}-", i)));
        }
    }

    #[test]
    fn test_finished_runs_are_complete() {
        for seed in 0..10 {
            for run in generate(27, seed) {
                let step = run.metrics.get_i64("global_step").unwrap();
                let max = run.metrics.get_i64("max_steps").unwrap();
                assert!(max >= 2000 && max < 6000);
                if run.state == Some(RunState::Finished) {
                    assert_eq!(step, max);
                } else {
                    assert!(step >= 0 && step < 1600);
                }
                assert_eq!(run.metrics.get_i64("epoch"), Some(step / 200));
                assert_eq!(run.metrics.get_i64("max_epochs"), Some(max / 200));
            }
        }
    }

    #[test]
    fn test_metric_ranges() {
        for run in generate(50, 7) {
            let train_loss = run.metrics.get_f64("train/loss").unwrap();
            let val_loss = run.metrics.get_f64("val/loss").unwrap();
            let accuracy = run.metrics.get_f64("accuracy").unwrap();
            assert!(train_loss >= 0.1 && train_loss <= 2.1);
            assert!(val_loss >= 0.1 && val_loss <= 2.1);
            assert!(accuracy >= 0.5 && accuracy <= 0.9);
        }
    }

    #[test]
    fn test_sweeps_and_timestamps() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(1);
        let runs = generate_mock_runs(30, &MockConfig::default(), &mut rng, now);

        for (i, run) in runs.iter().enumerate() {
            if let Some(sweep) = &run.sweep_name {
                assert_eq!(sweep, &format!("sweep-{}", (i % 3) + 1));
            }
            let created = DateTime::parse_from_rfc3339(run.created_at.as_ref().unwrap())
                .unwrap()
                .with_timezone(&Utc);
            let updated = DateTime::parse_from_rfc3339(run.updated_at.as_ref().unwrap())
                .unwrap()
                .with_timezone(&Utc);
            assert!(created <= now && now - created <= Duration::hours(1));
            assert!(updated <= now && now - updated <= Duration::minutes(20));
        }

        let mut rng = StdRng::seed_from_u64(1);
        let config = MockConfig::default().sweep_probability(0.0);
        let runs = generate_mock_runs(30, &config, &mut rng, now);
        assert!(runs.iter().all(|r| r.sweep_name.is_none()));
    }

    #[test]
    fn test_same_seed_same_runs() {
        let now = Utc::now();
        let runs1 = generate_mock_runs(5, &MockConfig::default(), &mut StdRng::seed_from_u64(9), now);
        let runs2 = generate_mock_runs(5, &MockConfig::default(), &mut StdRng::seed_from_u64(9), now);
        assert_eq!(runs1, runs2);
    }
}
