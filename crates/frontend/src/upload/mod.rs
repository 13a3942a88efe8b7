//! Upload page (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions (multipart upload)
//! - view_model.rs: UploadVm with RwSignals
//! - view.rs: Main component UploadPage

mod model;
mod view;
mod view_model;

pub use view::UploadPage;
pub use view_model::UploadVm;
