pub mod request_log;

pub use request_log::{RequestLog, REQUEST_ID_HEADER};
