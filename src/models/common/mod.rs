pub mod error_code;
pub mod field_errors;
pub mod response;
pub mod status;
