//! Chat page - Model (API functions)

use std::cell::Cell;
use std::rc::Rc;

use contracts::chat::{QueryRequest, QueryResponse, StepKind};
use gloo_net::http::Request;

use super::stream::{StreamCallbacks, StreamDecoder, StreamHandle};
use crate::shared::api_utils::api_url;

/// Synchronous query: one request, one answer string.
pub async fn query(message: &str) -> Result<String, String> {
    let request = QueryRequest {
        query: message.to_string(),
    };

    let response = Request::post(&api_url("/query"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Query failed: {}", response.status()));
    }

    let data: QueryResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    data.answer
        .into_iter()
        .next()
        .ok_or_else(|| "empty answer from server".to_string())
}

/// Streaming query. Opens the request immediately and reads the body
/// incrementally through `StreamDecoder`, dispatching to `callbacks`.
/// The returned handle cancels the request; after `close()` no callback
/// fires and the abort rejection is swallowed.
pub fn query_streaming(
    message: &str,
    callbacks: StreamCallbacks,
) -> Result<StreamHandle, String> {
    let controller = web_sys::AbortController::new().map_err(|e| format!("{e:?}"))?;
    let signal = controller.signal();
    let closed = Rc::new(Cell::new(false));
    let handle = StreamHandle::new(controller, Rc::clone(&closed));

    let message = message.to_string();
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = run_stream(&message, &signal, &callbacks, &closed).await {
            if closed.get() {
                // cancelled by the caller; the rejection is expected
                return;
            }
            log::error!("streaming query failed: {err}");
            (callbacks.on_error)(err);
        }
    });

    Ok(handle)
}

async fn run_stream(
    message: &str,
    signal: &web_sys::AbortSignal,
    callbacks: &StreamCallbacks,
    closed: &Rc<Cell<bool>>,
) -> Result<(), String> {
    use wasm_bindgen::JsCast;
    use web_sys::{ReadableStreamDefaultReader, Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_signal(Some(signal));
    let dto = QueryRequest {
        query: message.to_string(),
    };
    let body = serde_json::to_string(&dto).map_err(|e| format!("{e}"))?;
    opts.set_body(&wasm_bindgen::JsValue::from_str(&body));

    let url = api_url("/query/stream");
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "text/event-stream")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let body = resp
        .body()
        .ok_or_else(|| "response has no body".to_string())?;
    let reader: ReadableStreamDefaultReader =
        body.get_reader().dyn_into().map_err(|e| format!("{e:?}"))?;

    let mut decoder = StreamDecoder::new();

    loop {
        let next = wasm_bindgen_futures::JsFuture::from(reader.read())
            .await
            .map_err(|e| format!("{e:?}"))?;

        let done = js_sys::Reflect::get(&next, &"done".into())
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(true);
        if done {
            // end of body without a terminal event: no terminal callback
            return Ok(());
        }

        let value = js_sys::Reflect::get(&next, &"value".into()).map_err(|e| format!("{e:?}"))?;
        let bytes = js_sys::Uint8Array::new(&value).to_vec();
        let text = String::from_utf8_lossy(&bytes);

        for event in decoder.feed(&text) {
            if closed.get() {
                return Ok(());
            }
            match event.step {
                StepKind::Complete => {
                    let result = event.result.clone().unwrap_or_default();
                    let meta = event.meta.clone();
                    (callbacks.on_step)(event);
                    (callbacks.on_complete)(result, meta);
                    return Ok(());
                }
                StepKind::Error => {
                    let detail = event.message.clone();
                    (callbacks.on_step)(event);
                    (callbacks.on_error)(detail);
                    return Ok(());
                }
                _ => (callbacks.on_step)(event),
            }
        }
    }
}
