//! Calls to the site server.

use gloo_net::http::Request;
use serde::Serialize;
use web_types::{ApiError, AuthResponse, LogRequest};

/// POST a form to an auth endpoint.
///
/// Returns the server's success message, or the message to show the user.
pub async fn submit_form<T: Serialize>(path: &str, form: &T) -> Result<String, String> {
    let response = Request::post(path)
        .json(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        return response
            .json::<AuthResponse>()
            .await
            .map(|body| body.message)
            .map_err(|e| e.to_string());
    }

    match response.json::<ApiError>().await {
        Ok(err) => Err(err.error),
        Err(_) => Err(format!("Request failed ({})", response.status())),
    }
}

/// Report a client-side failure to the browser console and the server log.
pub fn report_error(message: String) {
    web_sys::console::error_1(&message.clone().into());

    wasm_bindgen_futures::spawn_local(async move {
        let body = LogRequest { message };
        if let Ok(request) = Request::post("/api/log").json(&body) {
            let _ = request.send().await;
        }
    });
}
