//! Session-storage adapter for the chat history.
//!
//! All access to the browser's session storage goes through this module, so
//! the pages never touch the global singleton directly. The snapshot codec is
//! split out as pure functions for host-side tests. Storage failures are
//! logged and swallowed; a corrupt snapshot yields an empty history.

use contracts::chat::Message;
use web_sys::window;

const CHAT_HISTORY_KEY: &str = "chat_history";

fn session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

/// Serialize a history snapshot to its stored JSON form.
pub fn encode_history(messages: &[Message]) -> Result<String, serde_json::Error> {
    serde_json::to_string(messages)
}

/// Parse a stored JSON snapshot back into a message list.
pub fn decode_history(raw: &str) -> Result<Vec<Message>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Save the chat history to session storage.
pub fn save_chat_history(messages: &[Message]) {
    match encode_history(messages) {
        Ok(json) => {
            if let Some(storage) = session_storage() {
                let _ = storage.set_item(CHAT_HISTORY_KEY, &json);
            }
        }
        Err(e) => log::error!("failed to serialize chat history: {e}"),
    }
}

/// Load the chat history from session storage; empty if absent or corrupt.
pub fn load_chat_history() -> Vec<Message> {
    let raw = session_storage().and_then(|s| s.get_item(CHAT_HISTORY_KEY).ok().flatten());
    let Some(raw) = raw else {
        return Vec::new();
    };
    match decode_history(&raw) {
        Ok(messages) => messages,
        Err(e) => {
            log::warn!("corrupt chat history in session storage, starting empty: {e}");
            Vec::new()
        }
    }
}

/// Drop the stored history.
pub fn clear_chat_history() {
    if let Some(storage) = session_storage() {
        let _ = storage.remove_item(CHAT_HISTORY_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_round_trips() {
        let mut bot = Message::streaming_placeholder();
        bot.complete_with("You get 15 days.");
        let history = vec![Message::user("What is the PTO policy?"), bot];

        let json = encode_history(&history).unwrap();
        let restored = decode_history(&json).unwrap();
        assert_eq!(restored, history);
    }

    #[test]
    fn corrupt_snapshot_is_an_error() {
        assert!(decode_history("not json at all").is_err());
        assert!(decode_history(r#"{"id":"half a message"#).is_err());
    }

    #[test]
    fn empty_history_encodes_to_empty_array() {
        assert_eq!(encode_history(&[]).unwrap(), "[]");
        assert!(decode_history("[]").unwrap().is_empty());
    }
}
