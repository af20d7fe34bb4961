// tests/support/sinks.rs
use axum::http::{HeaderMap, StatusCode};
use errorcode_util::{ResponseSink, SinkError};

/// Sink that fails on empty bodies, to drive the write-error path.
#[derive(Default)]
pub struct FakeSink {
    pub headers: HeaderMap,
    pub status: Option<StatusCode>,
    pub body: Vec<u8>,
}

impl FakeSink {
    pub fn assert(&self, status: StatusCode, body: &str) {
        assert_eq!(self.status, Some(status), "unexpected status");
        assert_eq!(String::from_utf8_lossy(&self.body), body, "unexpected body");
    }
}

impl ResponseSink for FakeSink {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    fn write_status(&mut self, status: StatusCode) {
        self.status = Some(status);
    }

    fn write_body(&mut self, body: &[u8]) -> Result<usize, SinkError> {
        self.body = body.to_vec();
        if body.is_empty() {
            return Err(SinkError::Rejected("body is empty".into()));
        }
        Ok(body.len())
    }
}
