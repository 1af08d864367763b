//! API utilities for dashboard-backend communication
//!
//! Every request goes to the single configured base URL, carries the bearer
//! token when one is given and is aborted once the configured timeout
//! elapses. A timeout surfaces as [`ApiError::Timeout`] and is handled by
//! callers exactly like a failed response.

use contracts::system::auth::ErrorDetail;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::Cell;
use std::rc::Rc;
use thiserror::Error;
use web_sys::AbortController;

use super::config::config;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("richiesta non riuscita: {0}")]
    Transport(String),
    #[error("nessuna risposta entro {0} ms")]
    Timeout(u32),
    #[error("il server ha risposto {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("sessione scaduta")]
    Unauthorized,
    #[error("impossibile preparare la richiesta: {0}")]
    Encode(String),
    #[error("risposta non valida: {0}")]
    Decode(String),
    #[error("errore del browser: {0}")]
    Browser(String),
}

impl ApiError {
    /// Server-provided explanation, when the response carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn from_status(status: u16, detail: Option<String>) -> Self {
        if status == 401 {
            ApiError::Unauthorized
        } else {
            ApiError::Status { status, detail }
        }
    }
}

/// Request payload variants used by the API.
pub enum Body {
    Empty,
    Json(String),
    Form(String),
    Multipart(web_sys::FormData),
}

impl Body {
    pub fn json<T: Serialize>(value: &T) -> Result<Self, ApiError> {
        serde_json::to_string(value)
            .map(Body::Json)
            .map_err(|e| ApiError::Encode(e.to_string()))
    }

    /// `application/x-www-form-urlencoded` body.
    pub fn form<T: Serialize>(value: &T) -> Result<Self, ApiError> {
        serde_qs::to_string(value)
            .map(Body::Form)
            .map_err(|e| ApiError::Encode(e.to_string()))
    }
}

/// Base URL for API requests, e.g. "http://127.0.0.1:8000"
pub fn api_base() -> String {
    config().api.base_url.clone()
}

/// Build a full API URL from a path starting with "/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Append the serialized query to `path`; unset fields are left out.
pub fn with_query<Q: Serialize>(path: &str, query: &Q) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::Encode(e.to_string()))?;
    if qs.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, qs))
    }
}

pub fn get(path: &str, token: Option<&str>) -> RequestBuilder {
    authorize(Request::get(&api_url(path)), token)
}

pub fn post(path: &str, token: Option<&str>) -> RequestBuilder {
    authorize(Request::post(&api_url(path)), token)
}

fn authorize(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Send the request and decode a JSON response.
pub async fn send_json<T: DeserializeOwned>(builder: RequestBuilder, body: Body) -> Result<T, ApiError> {
    let deadline = Deadline::start(config().api.request_timeout_ms)?;
    let response = execute(builder, body, &deadline).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| deadline.classify(e, ApiError::Decode))
}

/// Send the request and return the raw response body.
pub async fn send_bytes(builder: RequestBuilder, body: Body) -> Result<Vec<u8>, ApiError> {
    let deadline = Deadline::start(config().api.request_timeout_ms)?;
    let response = execute(builder, body, &deadline).await?;
    response
        .binary()
        .await
        .map_err(|e| deadline.classify(e, ApiError::Decode))
}

async fn execute(builder: RequestBuilder, body: Body, deadline: &Deadline) -> Result<Response, ApiError> {
    let signal = deadline.controller.signal();
    let builder = builder.abort_signal(Some(&signal));
    let request = match body {
        Body::Empty => builder.build(),
        Body::Json(json) => builder.header("Content-Type", "application/json").body(json),
        Body::Form(form) => builder
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(form),
        // the browser sets the multipart boundary itself
        Body::Multipart(data) => builder.body(data),
    }
    .map_err(|e| ApiError::Encode(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| deadline.classify(e, ApiError::Transport))?;

    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let detail = response
        .json::<ErrorDetail>()
        .await
        .ok()
        .and_then(|d| d.message());
    Err(ApiError::from_status(status, detail))
}

/// Aborts the in-flight fetch when the timer fires; dropping it cancels the timer.
struct Deadline {
    controller: AbortController,
    fired: Rc<Cell<bool>>,
    timeout_ms: u32,
    _timer: Timeout,
}

impl Deadline {
    fn start(timeout_ms: u32) -> Result<Self, ApiError> {
        let controller =
            AbortController::new().map_err(|e| ApiError::Browser(format!("{:?}", e)))?;
        let fired = Rc::new(Cell::new(false));
        let timer = {
            let controller = controller.clone();
            let fired = fired.clone();
            Timeout::new(timeout_ms, move || {
                fired.set(true);
                controller.abort();
            })
        };
        Ok(Self {
            controller,
            fired,
            timeout_ms,
            _timer: timer,
        })
    }

    fn classify(&self, err: gloo_net::Error, otherwise: fn(String) -> ApiError) -> ApiError {
        failure(self.fired.get(), self.timeout_ms, err.to_string(), otherwise)
    }
}

/// A fetch aborted by the deadline is a timeout whatever gloo-net reported.
fn failure(
    fired: bool,
    timeout_ms: u32,
    message: String,
    otherwise: fn(String) -> ApiError,
) -> ApiError {
    if fired {
        ApiError::Timeout(timeout_ms)
    } else {
        otherwise(message)
    }
}
