//! Error codes shared across backend services, and helpers that write errors
//! back to HTTP callers as `{"error": "<message>"}` JSON bodies.

pub mod config;
pub mod domain;
pub mod presentation;

pub use config::ReportConfig;
pub use domain::{CustomError, ErrorCode, UnknownErrorCode};
pub use presentation::http::{
    JsonError, ResponseRecorder, ResponseSink, SinkError, error_map, report_err,
    respond_with_error, respond_with_json, write_json_response,
};
