pub mod person_request;
pub mod status_compat;

pub use person_request::PersonPayload;
pub use status_compat::{StatusMode, apply_status_mode};
