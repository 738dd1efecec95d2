//! Text rendering of the dashboard.
use crate::Dashboard;
use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use runboard_core::{
    format_metric, pick_metric, Progress, Run, RunFilter, ACCURACY_KEYS, TRAIN_LOSS_KEYS,
    VAL_LOSS_KEYS,
};
use runboard_wandb::Transport;

const BAR_WIDTH: usize = 24;

/// Renders one run as a card of four lines.
pub fn render_card(run: &Run) -> String {
    let progress = Progress::from_metrics(&run.metrics);
    let filled = ((progress.percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let bar = format!(
        "{}{}",
        "#".repeat(filled.min(BAR_WIDTH)),
        "-".repeat(BAR_WIDTH - filled.min(BAR_WIDTH))
    );
    let time = run.last_activity().map(short_time).unwrap_or_default();

    let metrics: Vec<String> = [TRAIN_LOSS_KEYS, VAL_LOSS_KEYS, ACCURACY_KEYS]
        .iter()
        .map(|keys| match pick_metric(&run.metrics, keys) {
            Some((key, value)) => format!("{} {}", key, format_metric(value)),
            None => "—".to_string(),
        })
        .collect();

    format!(
        "{}  [{}]\n  {}\n  [{}] {:>3.0}%  {}  {}\n  {}\n",
        run.label(),
        run.state_label(),
        run.subtitle(),
        bar,
        progress.percent,
        progress.label,
        time,
        metrics.join(" | ")
    )
}

/// Renders the header, the last error and the cards of the runs passing `filter`.
pub fn render_dashboard<T: Transport>(dashboard: &Dashboard<T>, filter: &RunFilter) -> String {
    let mut out = String::new();
    let status = if dashboard.is_demo() {
        "Demo mode".to_string()
    } else {
        match dashboard.last_updated() {
            Some(t) => format!("Updated {}", time_ago(t, Local::now())),
            None => "—".to_string(),
        }
    };
    out.push_str(&format!("W&B runs  ({})\n", status));
    if let Some(error) = dashboard.error() {
        out.push_str(&format!("! {}\n", error));
    }
    out.push('\n');

    let runs = dashboard.filtered(filter);
    if runs.is_empty() {
        out.push_str("No runs to display yet\n");
    }
    for run in runs {
        out.push_str(&render_card(run));
        out.push('\n');
    }
    out
}

/// Formats the time of an ISO-8601 timestamp as local `HH:MM`.
///
/// Timestamps without offset are taken as UTC. Unparsable text gives an empty
/// string.
pub fn short_time(timestamp: &str) -> String {
    let parsed = DateTime::parse_from_rfc3339(timestamp)
        .map(|t| t.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|t| Utc.from_utc_datetime(&t))
        });
    match parsed {
        Ok(t) => t.with_timezone(&Local).format("%H:%M").to_string(),
        Err(_) => String::new(),
    }
}

/// Formats the time elapsed from `then` to `now`, like `42s ago` or `3h ago`.
pub fn time_ago(then: DateTime<Local>, now: DateTime<Local>) -> String {
    let secs = now.signed_duration_since(then).num_seconds().max(0);
    if secs < 60 {
        format!("{}s ago", secs)
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else if secs < 86400 {
        format!("{}h ago", secs / 3600)
    } else {
        format!("{}d ago", secs / 86400)
    }
}
