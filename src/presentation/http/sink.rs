// src/presentation/http/sink.rs
use axum::{
    body::Body,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("response body rejected: {0}")]
    Rejected(String),
}

/// An HTTP response being written back to a caller.
pub trait ResponseSink {
    fn headers_mut(&mut self) -> &mut HeaderMap;

    fn write_status(&mut self, status: StatusCode);

    fn write_body(&mut self, body: &[u8]) -> Result<usize, SinkError>;
}

/// In-memory [`ResponseSink`].
///
/// The first status written wins; writing a body before any status commits
/// `200 OK`. Returning the recorder from an axum handler sends whatever was
/// recorded.
#[derive(Debug, Clone)]
pub struct ResponseRecorder {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
    status_written: bool,
}

impl Default for ResponseRecorder {
    fn default() -> Self {
        Self {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: Vec::new(),
            status_written: false,
        }
    }
}

impl ResponseRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Recorded body as UTF-8, lossily.
    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl ResponseSink for ResponseRecorder {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    fn write_status(&mut self, status: StatusCode) {
        if self.status_written {
            tracing::debug!(
                current = self.status.as_u16(),
                ignored = status.as_u16(),
                "status already written"
            );
            return;
        }
        self.status = status;
        self.status_written = true;
    }

    fn write_body(&mut self, body: &[u8]) -> Result<usize, SinkError> {
        if !self.status_written {
            self.write_status(StatusCode::OK);
        }
        self.body.extend_from_slice(body);
        Ok(body.len())
    }
}

impl IntoResponse for ResponseRecorder {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::CONTENT_TYPE;

    #[test]
    fn defaults_to_ok_and_empty_body() {
        let rec = ResponseRecorder::new();
        assert_eq!(rec.status(), StatusCode::OK);
        assert!(rec.body().is_empty());
        assert!(rec.headers().is_empty());
    }

    #[test]
    fn first_status_wins() {
        let mut rec = ResponseRecorder::new();
        rec.write_status(StatusCode::NOT_FOUND);
        rec.write_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(rec.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn body_write_commits_ok_status() {
        let mut rec = ResponseRecorder::new();
        assert_eq!(rec.write_body(b"hello").unwrap(), 5);
        rec.write_status(StatusCode::BAD_REQUEST);
        assert_eq!(rec.status(), StatusCode::OK);
        assert_eq!(rec.body_string(), "hello");
    }

    #[test]
    fn converts_into_axum_response() {
        let mut rec = ResponseRecorder::new();
        rec.headers_mut()
            .insert(CONTENT_TYPE, "application/json".parse().unwrap());
        rec.write_status(StatusCode::CONFLICT);
        rec.write_body(b"{}").unwrap();

        let resp = rec.into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        assert_eq!(resp.headers()[CONTENT_TYPE], "application/json");
    }
}
