//! Chat data model: messages, thinking steps and the streaming wire format.

pub mod message;
pub mod streaming;

pub use message::{Message, MessageStatus, Sender, ThinkingStep};
pub use streaming::{QueryRequest, QueryResponse, StepKind, StreamEvent};
