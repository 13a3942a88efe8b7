//! Upload page - Model (API functions)

use contracts::knowledge::{UploadError, UploadResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Send one file to the knowledge base as a multipart form (field `file`).
/// Returns the server status message; on failure prefers the server's
/// `detail` string over a generic status line.
pub async fn upload_file(file: web_sys::File) -> Result<String, String> {
    let form_data = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_blob("file", &file)
        .map_err(|e| format!("{e:?}"))?;

    let response = Request::post(&api_url("/upload"))
        .body(form_data)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        if let Ok(error) = response.json::<UploadError>().await {
            return Err(error.detail);
        }
        return Err(format!("Upload failed: {}", response.status()));
    }

    let data: UploadResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data.message)
}
