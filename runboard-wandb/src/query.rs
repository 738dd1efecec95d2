//! GraphQL query for the runs of a project.
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Runs of a project, newest first, with their latest history row.
pub(crate) const PROJECT_RUNS_QUERY: &str = r#"
query ProjectRuns($entity: String!, $project: String!, $first: Int) {
  project(name: $project, entityName: $entity) {
    runs(first: $first, order: "-created_at") {
      edges {
        node {
          id
          name
          displayName
          state
          sweepName
          createdAt
          updatedAt
          summaryMetrics
          historyTail(k: 1)
        }
      }
    }
  }
}
"#;

#[derive(Debug, Serialize)]
pub(crate) struct ProjectRunsVariables<'a> {
    pub entity: &'a str,
    pub project: &'a str,
    pub first: usize,
}

#[derive(Debug, Serialize)]
pub(crate) struct GraphQlRequest<'a> {
    pub query: &'static str,
    pub variables: ProjectRunsVariables<'a>,
}

/// Top level of a GraphQL response.
///
/// `data` is kept as raw JSON: its shape is walked leniently in
/// [`run_nodes()`].
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse {
    #[serde(default)]
    pub data: Value,

    #[serde(default)]
    pub errors: Option<Value>,
}

impl GraphQlResponse {
    /// Message of the first reported error, if the response reports any.
    ///
    /// Falsy values (`null`, `false`, `0`, `""`) are not errors. An empty error
    /// list is not an error either, although a bare truthiness check would count
    /// it as one: GraphQL only sends `errors` with at least one entry.
    pub fn first_error(&self) -> Option<String> {
        let first = match self.errors.as_ref()? {
            Value::Array(errors) => errors.first()?,
            Value::Null | Value::Bool(false) => return None,
            Value::Number(n) if n.as_f64() == Some(0.0) => return None,
            Value::String(s) if s.is_empty() => return None,
            other => other,
        };
        Some(
            first
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("GraphQL error")
                .to_string(),
        )
    }

    /// Run records under `data.project.runs.edges[*].node`.
    ///
    /// Missing levels give an empty list; edges without a node object are skipped.
    pub fn run_nodes(&self) -> Vec<&Value> {
        let edges = match self.data.pointer("/project/runs/edges") {
            Some(Value::Array(edges)) => edges,
            _ => return vec![],
        };
        edges
            .iter()
            .filter_map(|edge| match edge.get("node") {
                Some(node @ Value::Object(_)) => Some(node),
                _ => {
                    log::warn!("Skip run edge without node: {}", edge);
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::GraphQlResponse;
    use serde_json::json;

    fn parse(v: serde_json::Value) -> GraphQlResponse {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn test_first_error() {
        let resp = parse(json!({"errors": [{"message": "project not found"}, {"message": "x"}]}));
        assert_eq!(resp.first_error(), Some("project not found".to_string()));

        let resp = parse(json!({"errors": [{"path": ["project"]}]}));
        assert_eq!(resp.first_error(), Some("GraphQL error".to_string()));

        assert_eq!(parse(json!({"errors": []})).first_error(), None);
        assert_eq!(parse(json!({"errors": null})).first_error(), None);
        assert_eq!(parse(json!({"data": {}})).first_error(), None);
    }

    #[test]
    fn test_falsy_errors_are_ignored() {
        assert_eq!(parse(json!({"errors": false})).first_error(), None);
        assert_eq!(parse(json!({"errors": 0})).first_error(), None);
        assert_eq!(parse(json!({"errors": ""})).first_error(), None);

        assert_eq!(
            parse(json!({"errors": true})).first_error(),
            Some("GraphQL error".to_string())
        );
        assert_eq!(
            parse(json!({"errors": {"message": "bad query"}})).first_error(),
            Some("bad query".to_string())
        );
    }

    #[test]
    fn test_run_nodes_path() {
        let resp = parse(json!({"data": {"project": {"runs": {"edges": [
            {"node": {"id": "a"}},
            {"cursor": "c"},
            {"node": {"id": "b"}},
        ]}}}}));
        let ids: Vec<&str> = resp
            .run_nodes()
            .into_iter()
            .map(|n| n["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);

        assert!(parse(json!({"data": {"project": null}})).run_nodes().is_empty());
        assert!(parse(json!({"data": {"project": {"runs": {}}}})).run_nodes().is_empty());
        assert!(parse(json!({})).run_nodes().is_empty());
    }
}
