// src/presentation/http/error.rs
use super::sink::ResponseSink;
use crate::{config::ReportConfig, domain::errors::UnknownErrorCode};
use axum::{
    Json,
    http::{HeaderValue, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::{collections::BTreeMap, fmt};
use thiserror::Error;

/// The only key of an error response body.
pub const ERROR_KEY: &str = "error";

const APPLICATION_JSON: &str = "application/json";
const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Turns `err` into `{"error": "<message>"}`.
pub fn error_map<E>(err: &E) -> BTreeMap<String, String>
where
    E: fmt::Display + ?Sized,
{
    BTreeMap::from([(ERROR_KEY.to_string(), err.to_string())])
}

/// Writes `err` to `sink` as a JSON error body with `status`. In debug mode
/// the error is also logged; the response is the same either way.
pub fn report_err<S, E>(sink: &mut S, err: &E, status: StatusCode, config: &ReportConfig)
where
    S: ResponseSink + ?Sized,
    E: fmt::Display + ?Sized,
{
    log_if_debug(config, err, status);
    write_json_response(sink, &error_map(err), status);
}

/// Serializes `source` and writes it with `status`. If serialization fails a
/// plain-text 500 is written instead.
pub fn write_json_response<S, T>(sink: &mut S, source: &T, status: StatusCode)
where
    S: ResponseSink + ?Sized,
    T: Serialize + ?Sized,
{
    let content = match serde_json::to_vec(source) {
        Ok(content) => content,
        Err(err) => {
            tracing::error!(error = %err, "failed to serialize JSON response");
            sink.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static(TEXT_PLAIN));
            sink.write_status(StatusCode::INTERNAL_SERVER_ERROR);
            let msg = format!("error when marshalling response to JSON: {err}");
            write_or_log(sink, msg.as_bytes());
            return;
        }
    };

    sink.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
    sink.write_status(status);
    write_or_log(sink, &content);
}

/// Writes `err` as `{"error": "<message>"}` with `status`.
pub fn respond_with_error<S, E>(sink: &mut S, status: StatusCode, err: &E)
where
    S: ResponseSink + ?Sized,
    E: fmt::Display + ?Sized,
{
    let body = serde_json::to_vec(&error_map(err))
        .unwrap_or_else(|ser_err| format!("error: {ser_err}").into_bytes());
    respond_with_json(sink, status, Some(&body));
}

/// Writes an already encoded JSON payload. `None` writes an empty body.
pub fn respond_with_json<S>(sink: &mut S, status: StatusCode, payload: Option<&[u8]>)
where
    S: ResponseSink + ?Sized,
{
    sink.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
    sink.write_status(status);
    write_or_log(sink, payload.unwrap_or_default());
}

fn write_or_log<S>(sink: &mut S, body: &[u8])
where
    S: ResponseSink + ?Sized,
{
    if let Err(err) = sink.write_body(body) {
        tracing::warn!(error = %err, bytes = body.len(), "unable to write response body");
    }
}

fn log_if_debug<E>(config: &ReportConfig, err: &E, status: StatusCode)
where
    E: fmt::Display + ?Sized,
{
    if config.debug() {
        tracing::info!(error = %err, status = status.as_u16(), "reporting error");
    }
}

/// JSON error response for axum handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct JsonError {
    status: StatusCode,
    message: String,
}

pub type JsonResult<T> = Result<T, JsonError>;

impl JsonError {
    pub fn new<E>(status: StatusCode, err: &E) -> Self
    where
        E: fmt::Display + ?Sized,
    {
        Self {
            status,
            message: err.to_string(),
        }
    }

    pub fn bad_request<E: fmt::Display + ?Sized>(err: &E) -> Self {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn not_found<E: fmt::Display + ?Sized>(err: &E) -> Self {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn internal<E: fmt::Display + ?Sized>(err: &E) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Logs the error when debug mode is on and hands it back.
    pub fn report(self, config: &ReportConfig) -> Self {
        log_if_debug(config, &self.message, self.status);
        self
    }
}

impl From<UnknownErrorCode> for JsonError {
    fn from(err: UnknownErrorCode) -> Self {
        Self::bad_request(&err)
    }
}

impl IntoResponse for JsonError {
    fn into_response(self) -> Response {
        (self.status, Json(error_map(&self.message))).into_response()
    }
}
