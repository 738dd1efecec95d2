use runboard_core::{Progress, RunState, Settings};
use runboard_wandb::{FetchError, FetchRunsConfig, HttpResponse, Transport, WandbClient};
use serde::Serialize;
use serde_json::json;
use std::cell::Cell;

struct CountingTransport {
    body: String,
    calls: Cell<usize>,
}

impl Transport for CountingTransport {
    fn post_json<B: Serialize>(
        &self,
        _url: &str,
        _bearer: &str,
        _body: &B,
    ) -> Result<HttpResponse, FetchError> {
        self.calls.set(self.calls.get() + 1);
        Ok(HttpResponse {
            status: 200,
            body: self.body.clone(),
        })
    }
}

fn client(body: serde_json::Value) -> WandbClient<CountingTransport> {
    WandbClient::with_transport(CountingTransport {
        body: body.to_string(),
        calls: Cell::new(0),
    })
}

#[test]
fn test_fetch_with_settings() {
    let client = client(json!({"data": {"project": {"runs": {"edges": [
        {"node": {
            "id": "r1",
            "name": "pretrain",
            "state": "Preempted",
            "summaryMetrics": {"_step": 300, "total_steps": 1200, "loss": 3.2},
            "historyTail": [{"_step": 600, "loss": 2.4}],
        }},
    ]}}}}));

    let settings = Settings::default()
        .api_key("key")
        .entity("team")
        .project("proj")
        .per_page(10);
    let config = FetchRunsConfig::from(&settings);
    assert_eq!(config.per_page, 10);

    let runs = client.fetch_runs(&config).unwrap();
    assert_eq!(client.transport().calls.get(), 1);
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].state, Some(RunState::Preempted));

    let progress = Progress::from_metrics(&runs[0].metrics);
    assert_eq!(progress.percent, 50.0);
    assert_eq!(progress.label, "Step 600 / 1200");
}

#[test]
fn test_settings_without_credentials() {
    let client = client(json!({}));
    let config = FetchRunsConfig::from(&Settings::default());
    assert_eq!(client.fetch_runs(&config), Err(FetchError::MissingCredentials));
    assert_eq!(client.transport().calls.get(), 0);
}

#[test]
fn test_unexpected_shape_gives_no_runs() {
    let client = client(json!({"data": {"viewer": {"entity": "team"}}}));
    let runs = client
        .fetch_runs(&FetchRunsConfig::new("key", "team", "proj"))
        .unwrap();
    assert!(runs.is_empty());
}
