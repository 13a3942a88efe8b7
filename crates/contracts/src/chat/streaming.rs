use serde::{Deserialize, Serialize};

/// Kind of a streaming step reported by `POST /query/stream`.
///
/// `Complete` and `Error` are terminal: the server sends nothing useful after
/// them and the client stops reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Retrieving,
    Retrieved,
    Analyzing,
    Generating,
    Complete,
    Error,
}

impl StepKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::Retrieving => "retrieving",
            StepKind::Retrieved => "retrieved",
            StepKind::Analyzing => "analyzing",
            StepKind::Generating => "generating",
            StepKind::Complete => "complete",
            StepKind::Error => "error",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, StepKind::Complete | StepKind::Error)
    }
}

/// One JSON event from a `data: ` line of the streaming query response.
///
/// `result` and `meta` are only populated on the terminal `complete` event,
/// `count` accompanies retrieval progress. `meta` stays opaque to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamEvent {
    pub step: StepKind,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

/// Request body for `POST /query` and `POST /query/stream`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

/// Response body of the synchronous `POST /query`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub answer: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_kind_uses_lowercase_wire_names() {
        assert_eq!(serde_json::to_string(&StepKind::Retrieving).unwrap(), "\"retrieving\"");
        let kind: StepKind = serde_json::from_str("\"complete\"").unwrap();
        assert_eq!(kind, StepKind::Complete);
    }

    #[test]
    fn terminal_kinds() {
        assert!(StepKind::Complete.is_terminal());
        assert!(StepKind::Error.is_terminal());
        assert!(!StepKind::Retrieving.is_terminal());
        assert!(!StepKind::Generating.is_terminal());
    }

    #[test]
    fn parses_progress_event_without_optionals() {
        let event: StreamEvent =
            serde_json::from_str(r#"{"step":"retrieving","message":"Searching docs"}"#).unwrap();
        assert_eq!(event.step, StepKind::Retrieving);
        assert_eq!(event.message, "Searching docs");
        assert_eq!(event.count, None);
        assert_eq!(event.result, None);
        assert_eq!(event.meta, None);
    }

    #[test]
    fn parses_complete_event_with_result_and_meta() {
        let event: StreamEvent = serde_json::from_str(
            r#"{"step":"complete","message":"done","result":"You get 15 days.","meta":{"documents":[]}}"#,
        )
        .unwrap();
        assert_eq!(event.step, StepKind::Complete);
        assert_eq!(event.result.as_deref(), Some("You get 15 days."));
        assert!(event.meta.is_some());
    }

    #[test]
    fn rejects_unknown_step() {
        assert!(serde_json::from_str::<StreamEvent>(r#"{"step":"pondering","message":"?"}"#).is_err());
    }

    #[test]
    fn query_response_tolerates_missing_answer() {
        let response: QueryResponse = serde_json::from_str("{}").unwrap();
        assert!(response.answer.is_empty());
    }
}
