// tests/support/helpers.rs
use axum::{
    Json, Router,
    body::{self, Body},
    extract::{Path, State},
    http::{Request, StatusCode},
    response::Response,
    routing::get,
};
use errorcode_util::{
    CustomError, ErrorCode, JsonError, ReportConfig, ResponseRecorder, presentation::http::JsonResult,
    report_err,
};
use serde_json::{Value, json};
use std::{
    io,
    sync::{Arc, Mutex},
};
use tracing_subscriber::fmt::MakeWriter;

/// Router exercising both the sink-based helpers and `JsonError`.
pub fn make_test_router(config: ReportConfig) -> Router {
    Router::new()
        .route("/profiles/{id}", get(get_profile))
        .route("/codes/{code}", get(describe_code))
        .route("/recorded", get(recorded_error))
        .with_state(config)
}

async fn get_profile(
    State(config): State<ReportConfig>,
    Path(id): Path<String>,
) -> JsonResult<Json<Value>> {
    if id == "known" {
        return Ok(Json(json!({ "id": id })));
    }
    let err = CustomError::new(ErrorCode::ProfileNotFound, format!("no profile with id {id}"));
    Err(JsonError::not_found(&err).report(&config))
}

async fn describe_code(Path(code): Path<i32>) -> JsonResult<Json<Value>> {
    let code = ErrorCode::try_from(code)?;
    Ok(Json(json!({ "code": code, "name": code.name() })))
}

async fn recorded_error(State(config): State<ReportConfig>) -> ResponseRecorder {
    let mut rec = ResponseRecorder::new();
    report_err(&mut rec, "a test error", StatusCode::BAD_REQUEST, &config);
    rec
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn read_json(resp: Response) -> Value {
    let body_bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body_bytes).expect("expected valid json body")
}

/// Assert that a response is a `{"error": ..}` JSON body with the expected status and message.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);

    let json = read_json(resp).await;
    let obj = json.as_object().expect("error body must be an object");
    assert_eq!(obj.len(), 1, "unexpected keys in error body: {:?}", obj.keys());
    assert_eq!(obj.get("error").and_then(Value::as_str), Some(expected_error));
}

/// Log sink for a scoped fmt subscriber.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` under a fmt subscriber and return everything it logged.
pub fn with_captured_logs<F: FnOnce()>(f: F) -> String {
    let capture = LogCapture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    capture.contents()
}
