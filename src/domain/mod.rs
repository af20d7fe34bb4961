pub mod custom_error;
pub mod error_code;
pub mod errors;

pub use custom_error::CustomError;
pub use error_code::ErrorCode;
pub use errors::UnknownErrorCode;
