//! Chat page - View Model

use contracts::chat::{Message, ThinkingStep};
use leptos::prelude::*;
use uuid::Uuid;

#[derive(Clone, Copy)]
pub struct ChatVm {
    pub messages: RwSignal<Vec<Message>>,
    pub input: RwSignal<String>,
    pub is_loading: RwSignal<bool>,
}

impl ChatVm {
    pub fn new(initial_messages: Vec<Message>) -> Self {
        Self {
            messages: RwSignal::new(initial_messages),
            input: RwSignal::new(String::new()),
            is_loading: RwSignal::new(false),
        }
    }

    /// Append a thinking step to the in-flight bot message, located by id.
    pub fn push_step(&self, id: Uuid, step: ThinkingStep) {
        self.messages.update(|messages| {
            if let Some(message) = messages.iter_mut().find(|m| m.id == id) {
                message.push_step(step);
            }
        });
    }

    /// Terminal transition of the in-flight bot message: final answer.
    pub fn complete_message(&self, id: Uuid, result: String) {
        self.messages.update(|messages| {
            if let Some(message) = messages.iter_mut().find(|m| m.id == id) {
                message.complete_with(result);
            }
        });
        self.is_loading.set(false);
    }

    /// Terminal transition of the in-flight bot message: failure.
    pub fn fail_message(&self, id: Uuid, detail: &str) {
        self.messages.update(|messages| {
            if let Some(message) = messages.iter_mut().find(|m| m.id == id) {
                message.fail_with(detail);
            }
        });
        self.is_loading.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::chat::{MessageStatus, StepKind, StreamEvent};

    fn event(step: StepKind, message: &str) -> StreamEvent {
        StreamEvent {
            step,
            message: message.to_string(),
            count: None,
            result: None,
            meta: None,
        }
    }

    #[test]
    fn pto_scenario_records_one_step_and_completes() {
        let vm = ChatVm::new(Vec::new());

        let user = Message::user("What is the PTO policy?");
        let user_snapshot = user.clone();
        vm.messages.update(|messages| messages.push(user));

        let placeholder = Message::streaming_placeholder();
        let bot_id = placeholder.id;
        vm.messages.update(|messages| messages.push(placeholder));
        vm.is_loading.set(true);

        vm.push_step(
            bot_id,
            ThinkingStep::from_event(&event(StepKind::Retrieving, "Searching docs"), 1.0),
        );
        vm.complete_message(bot_id, "You get 15 days.".to_string());

        let messages = vm.messages.get_untracked();
        assert_eq!(messages.len(), 2);
        // the user message is never touched after send
        assert_eq!(messages[0], user_snapshot);

        let bot = &messages[1];
        assert_eq!(bot.thinking_steps.len(), 1);
        assert_eq!(bot.thinking_steps[0].message, "Searching docs");
        assert_eq!(bot.text, "You get 15 days.");
        assert_eq!(bot.status, Some(MessageStatus::Complete));
        assert!(!bot.is_streaming);
        assert!(!vm.is_loading.get_untracked());
    }

    #[test]
    fn failure_updates_placeholder_in_place() {
        let vm = ChatVm::new(Vec::new());
        let placeholder = Message::streaming_placeholder();
        let bot_id = placeholder.id;
        vm.messages.update(|messages| messages.push(placeholder));
        vm.is_loading.set(true);

        vm.fail_message(bot_id, "retriever unavailable");

        let messages = vm.messages.get_untracked();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].status, Some(MessageStatus::Error));
        assert!(messages[0].text.contains("retriever unavailable"));
        assert!(!vm.is_loading.get_untracked());
    }

    #[test]
    fn updates_for_unknown_ids_are_dropped() {
        let vm = ChatVm::new(vec![Message::user("hi")]);
        let before = vm.messages.get_untracked();

        let stray = Uuid::new_v4();
        vm.push_step(
            stray,
            ThinkingStep::from_event(&event(StepKind::Analyzing, "?"), 0.0),
        );
        vm.complete_message(stray, "nobody asked".to_string());

        assert_eq!(vm.messages.get_untracked(), before);
    }
}
