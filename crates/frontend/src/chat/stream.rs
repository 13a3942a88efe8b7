//! Streaming-response decoder.
//!
//! The query stream arrives as chunked text: one `data: <json>` line per step
//! event. `StreamDecoder` is the pure state machine over that text (no fetch,
//! no callbacks), so the protocol handling is testable on the host. The fetch
//! driver in `model.rs` feeds it chunks and dispatches `StreamCallbacks`.

use std::cell::Cell;
use std::rc::Rc;

use contracts::chat::{StepKind, StreamEvent};
use web_sys::AbortController;

const DATA_PREFIX: &str = "data: ";

/// Decoder state: `Reading` until a terminal event is seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderState {
    Reading,
    Complete,
    Error,
}

/// Line-oriented decoder for the `/query/stream` body.
///
/// Chunks are split on newlines; an unterminated trailing line is carried
/// over to the next chunk. Lines without the data prefix are ignored.
/// A malformed JSON payload skips that line only. After the terminal
/// `complete`/`error` event the decoder consumes nothing further.
pub struct StreamDecoder {
    buffer: String,
    state: DecoderState,
}

impl StreamDecoder {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            state: DecoderState::Reading,
        }
    }

    pub fn state(&self) -> DecoderState {
        self.state
    }

    pub fn is_terminal(&self) -> bool {
        self.state != DecoderState::Reading
    }

    /// Feed one decoded text chunk; returns the parsed events in receipt
    /// order, ending with the terminal event if one was reached.
    pub fn feed(&mut self, chunk: &str) -> Vec<StreamEvent> {
        if self.is_terminal() {
            return Vec::new();
        }

        self.buffer.push_str(chunk);
        let mut events = Vec::new();

        while let Some(newline) = self.buffer.find('\n') {
            let line: String = self.buffer.drain(..=newline).collect();
            let line = line.trim_end_matches(['\n', '\r']);

            let Some(payload) = line.strip_prefix(DATA_PREFIX) else {
                continue;
            };

            match serde_json::from_str::<StreamEvent>(payload) {
                Ok(event) => {
                    let terminal = event.step.is_terminal();
                    if terminal {
                        self.state = if event.step == StepKind::Error {
                            DecoderState::Error
                        } else {
                            DecoderState::Complete
                        };
                    }
                    events.push(event);
                    if terminal {
                        self.buffer.clear();
                        break;
                    }
                }
                Err(e) => {
                    log::warn!("skipping malformed stream line: {e}");
                }
            }
        }

        events
    }
}

impl Default for StreamDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Callbacks driven by the streaming query.
///
/// Every parsed event goes to `on_step` in receipt order; the terminal event
/// additionally triggers exactly one of `on_complete`/`on_error`.
pub struct StreamCallbacks {
    pub on_step: Box<dyn Fn(StreamEvent)>,
    pub on_complete: Box<dyn Fn(String, Option<serde_json::Value>)>,
    pub on_error: Box<dyn Fn(String)>,
}

/// Cancel handle for an in-flight streaming query.
///
/// `close()` aborts the underlying fetch; the driver checks the shared flag
/// before every dispatch, so no callback fires after abort and the resulting
/// abort rejection is swallowed rather than reported.
pub struct StreamHandle {
    controller: AbortController,
    closed: Rc<Cell<bool>>,
}

impl StreamHandle {
    pub(crate) fn new(controller: AbortController, closed: Rc<Cell<bool>>) -> Self {
        Self { controller, closed }
    }

    pub fn close(&self) {
        self.closed.set(true);
        self.controller.abort();
    }
}
