//! Upload page - View Model

use leptos::prelude::*;

/// Upload lifecycle state. The selected `web_sys::File` is not `Send`, so it
/// lives in thread-local storage; the name is mirrored into a plain signal
/// for the reactive parts of the view.
#[derive(Clone, Copy)]
pub struct UploadVm {
    pub file: StoredValue<Option<web_sys::File>, LocalStorage>,
    pub file_name: RwSignal<Option<String>>,
    pub is_uploading: RwSignal<bool>,
    pub status_message: RwSignal<String>,
}

impl UploadVm {
    pub fn new() -> Self {
        Self {
            file: StoredValue::new_local(None),
            file_name: RwSignal::new(None),
            is_uploading: RwSignal::new(false),
            status_message: RwSignal::new(String::new()),
        }
    }

    /// Retain the most recently picked file and reset the status line.
    pub fn select_file(&self, file: web_sys::File) {
        self.file_name.set(Some(file.name()));
        self.file.set_value(Some(file));
        self.status_message.set(String::new());
    }
}
