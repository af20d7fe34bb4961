// src/domain/custom_error.rs
use crate::domain::error_code::ErrorCode;
use serde::{Serialize, Serializer, ser::SerializeStruct};
use std::{error::Error as StdError, fmt};

type BoxedSource = Box<dyn StdError + Send + Sync + 'static>;

/// An error tagged with a registered [`ErrorCode`].
///
/// Renders as `"<code>: <message>"`. A missing code renders as `0`, so the
/// default value is `"0: "`.
#[derive(Debug, Default)]
pub struct CustomError {
    code: Option<ErrorCode>,
    message: String,
    source: Option<BoxedSource>,
}

impl CustomError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<BoxedSource>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn raw_code(&self) -> i32 {
        self.code.map(ErrorCode::code).unwrap_or(0)
    }
}

impl fmt::Display for CustomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.raw_code(), self.message)
    }
}

impl StdError for CustomError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|err| err as &(dyn StdError + 'static))
    }
}

// Empty fields are omitted: {"error": .., "message": .., "code": ..}
impl Serialize for CustomError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = usize::from(self.source.is_some())
            + usize::from(!self.message.is_empty())
            + usize::from(self.code.is_some());
        let mut state = serializer.serialize_struct("CustomError", len)?;
        match &self.source {
            Some(source) => state.serialize_field("error", &source.to_string())?,
            None => state.skip_field("error")?,
        }
        if self.message.is_empty() {
            state.skip_field("message")?;
        } else {
            state.serialize_field("message", &self.message)?;
        }
        match self.code {
            Some(code) => state.serialize_field("code", &code)?,
            None => state.skip_field("code")?,
        }
        state.end()
    }
}
