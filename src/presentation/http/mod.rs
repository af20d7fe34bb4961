pub mod error;
pub mod sink;

pub use error::{
    ERROR_KEY, JsonError, JsonResult, error_map, report_err, respond_with_error,
    respond_with_json, write_json_response,
};
pub use sink::{ResponseRecorder, ResponseSink, SinkError};
