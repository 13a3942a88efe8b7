use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::streaming::{StepKind, StreamEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Sending,
    Streaming,
    Complete,
    Error,
}

/// One recorded thinking step attached to a bot message.
///
/// Steps are append-only and immutable once appended; `timestamp` is epoch
/// milliseconds taken at receipt time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThinkingStep {
    pub step: StepKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    pub timestamp: f64,
}

impl ThinkingStep {
    pub fn from_event(event: &StreamEvent, timestamp: f64) -> Self {
        Self {
            step: event.step,
            message: event.message.clone(),
            count: event.count,
            timestamp,
        }
    }
}

/// One entry of the conversation. Created on send (user) or stream start
/// (bot placeholder) and then mutated in place, identified by `id`, as
/// streaming events arrive. Field names serialize in camelCase so stored
/// history matches the wire conventions of the rest of the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    #[serde(default)]
    pub is_streaming: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub thinking_steps: Vec<ThinkingStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MessageStatus>,
}

impl Message {
    /// A finished user message; never mutated afterwards.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender: Sender::User,
            text: text.into(),
            is_streaming: false,
            thinking_steps: Vec::new(),
            status: None,
        }
    }

    /// The empty bot placeholder appended when a streaming query starts.
    pub fn streaming_placeholder() -> Self {
        Self {
            id: Uuid::new_v4(),
            sender: Sender::Bot,
            text: String::new(),
            is_streaming: true,
            thinking_steps: Vec::new(),
            status: Some(MessageStatus::Streaming),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self.status,
            Some(MessageStatus::Complete) | Some(MessageStatus::Error)
        )
    }

    /// Append one thinking step. Steps on a finished message are dropped;
    /// nothing is allowed to change a message after its terminal transition.
    pub fn push_step(&mut self, step: ThinkingStep) {
        if self.is_terminal() {
            return;
        }
        self.thinking_steps.push(step);
    }

    /// Terminal transition: final answer arrived. Idempotent, so a message
    /// reaches a terminal status at most once.
    pub fn complete_with(&mut self, result: impl Into<String>) {
        if self.is_terminal() {
            return;
        }
        self.text = result.into();
        self.is_streaming = false;
        self.status = Some(MessageStatus::Complete);
    }

    /// Terminal transition: the stream (or the request itself) failed.
    pub fn fail_with(&mut self, detail: &str) {
        if self.is_terminal() {
            return;
        }
        self.text = format!("Sorry, I encountered an error: {detail}");
        self.is_streaming = false;
        self.status = Some(MessageStatus::Error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(kind: StepKind, message: &str) -> ThinkingStep {
        ThinkingStep {
            step: kind,
            message: message.to_string(),
            count: None,
            timestamp: 0.0,
        }
    }

    #[test]
    fn user_message_is_plain() {
        let msg = Message::user("What is the PTO policy?");
        assert_eq!(msg.sender, Sender::User);
        assert_eq!(msg.text, "What is the PTO policy?");
        assert!(!msg.is_streaming);
        assert!(msg.thinking_steps.is_empty());
        assert_eq!(msg.status, None);
    }

    #[test]
    fn placeholder_starts_streaming_and_empty() {
        let msg = Message::streaming_placeholder();
        assert_eq!(msg.sender, Sender::Bot);
        assert_eq!(msg.text, "");
        assert!(msg.is_streaming);
        assert_eq!(msg.status, Some(MessageStatus::Streaming));
    }

    #[test]
    fn steps_append_in_order() {
        let mut msg = Message::streaming_placeholder();
        msg.push_step(step(StepKind::Retrieving, "Searching docs"));
        msg.push_step(step(StepKind::Analyzing, "Reading"));
        msg.push_step(step(StepKind::Generating, "Writing"));
        let kinds: Vec<_> = msg.thinking_steps.iter().map(|s| s.step).collect();
        assert_eq!(
            kinds,
            vec![StepKind::Retrieving, StepKind::Analyzing, StepKind::Generating]
        );
    }

    #[test]
    fn complete_is_terminal_exactly_once() {
        let mut msg = Message::streaming_placeholder();
        msg.complete_with("You get 15 days.");
        assert_eq!(msg.status, Some(MessageStatus::Complete));
        assert_eq!(msg.text, "You get 15 days.");
        assert!(!msg.is_streaming);

        // A late error must not override the terminal state.
        msg.fail_with("network down");
        assert_eq!(msg.status, Some(MessageStatus::Complete));
        assert_eq!(msg.text, "You get 15 days.");

        // Nor may late steps sneak in.
        msg.push_step(step(StepKind::Generating, "late"));
        assert!(msg.thinking_steps.is_empty());
    }

    #[test]
    fn error_embeds_detail_and_is_terminal() {
        let mut msg = Message::streaming_placeholder();
        msg.fail_with("upstream timeout");
        assert_eq!(msg.status, Some(MessageStatus::Error));
        assert!(msg.text.contains("upstream timeout"));

        msg.complete_with("too late");
        assert_eq!(msg.status, Some(MessageStatus::Error));
    }

    #[test]
    fn serializes_camel_case() {
        let mut msg = Message::streaming_placeholder();
        msg.push_step(step(StepKind::Retrieving, "Searching docs"));
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"isStreaming\":true"));
        assert!(json.contains("\"thinkingSteps\""));
        assert!(!json.contains("\"is_streaming\""));
    }

    #[test]
    fn history_round_trips() {
        let mut bot = Message::streaming_placeholder();
        bot.push_step(ThinkingStep {
            step: StepKind::Retrieved,
            message: "Found 3 documents".to_string(),
            count: Some(3),
            timestamp: 1_700_000_000_000.0,
        });
        bot.complete_with("You get 15 days.");
        let history = vec![Message::user("What is the PTO policy?"), bot];

        let json = serde_json::to_string(&history).unwrap();
        let restored: Vec<Message> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, history);
    }
}
