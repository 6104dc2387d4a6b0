//! REST API endpoint implementations.

mod request;
mod tours;

pub use request::send_request;
pub use tours::list_tours;
