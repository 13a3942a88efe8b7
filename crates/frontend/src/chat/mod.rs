//! Chat page (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions (query, streaming query)
//! - stream.rs: transport-independent streaming decoder + cancel handle
//! - view_model.rs: ChatVm with RwSignals
//! - view.rs: Main component ChatPage

mod model;
mod stream;
mod view;
mod view_model;

pub use stream::{StreamCallbacks, StreamDecoder, StreamHandle};
pub use view::ChatPage;
pub use view_model::ChatVm;
