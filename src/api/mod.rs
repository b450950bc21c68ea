pub mod envelope;
pub mod session;

pub use envelope::{ApiResponse, Payload, parse_payload, read_payload};
pub use session::Session;
