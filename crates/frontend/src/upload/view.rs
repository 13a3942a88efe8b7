//! Upload page - View Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::*;
use wasm_bindgen::JsCast;

use super::model;
use super::view_model::UploadVm;
use crate::shared::icons::icon;

#[component]
pub fn UploadPage() -> impl IntoView {
    let vm = UploadVm::new();
    let navigate = use_navigate();

    let on_file_change = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok());
        if let Some(file) = input.and_then(|input| input.files()).and_then(|files| files.get(0)) {
            vm.select_file(file);
        }
    };

    let open_picker = move |_| {
        if let Some(input) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("file-upload"))
            .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok())
        {
            input.click();
        }
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        let file = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            vm.select_file(file);
        }
    };

    let handle_upload = move |_| {
        if vm.is_uploading.get() {
            return;
        }
        let Some(file) = vm.file.with_value(|file| file.clone()) else {
            return;
        };

        vm.is_uploading.set(true);
        vm.status_message.set(format!("Uploading \"{}\"...", file.name()));

        spawn_local(async move {
            match model::upload_file(file).await {
                Ok(message) => vm.status_message.set(message),
                Err(detail) => vm.status_message.set(detail),
            }
            // the in-progress flag clears in every outcome
            vm.is_uploading.set(false);
        });
    };

    let return_to_chat = move |_| navigate("/", Default::default());

    view! {
        <div class="upload-page">
            <div class="upload-card">
                <div class="upload-card-header">
                    <h1>"Upload Knowledge Document"</h1>
                    <p>"Upload a PDF or DOCX file to update the knowledge base."</p>
                </div>

                <input
                    id="file-upload"
                    type="file"
                    accept=".pdf,.docx"
                    style="display: none;"
                    on:change=on_file_change
                />
                <div
                    class="upload-dropzone"
                    on:click=open_picker
                    on:dragover=move |ev: web_sys::DragEvent| ev.prevent_default()
                    on:drop=on_drop
                >
                    {icon("document")}
                    <p>
                        {move || {
                            vm.file_name
                                .get()
                                .unwrap_or_else(|| "Drag & drop or click to select a file".to_string())
                        }}
                    </p>
                </div>

                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || {
                        vm.file_name.get().is_none() || vm.is_uploading.get()
                    })
                    on_click=handle_upload
                >
                    {icon("upload")}
                    {move || if vm.is_uploading.get() { " Uploading..." } else { " Upload" }}
                </Button>

                <Show when=move || !vm.status_message.get().is_empty()>
                    <div class="upload-status">
                        <p>{move || vm.status_message.get()}</p>
                    </div>
                </Show>

                <button class="link-button" on:click=return_to_chat>
                    "Return to Chat"
                </button>
            </div>
        </div>
    }
}
