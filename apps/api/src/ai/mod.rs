//! AI gateway: cover letters, resume review and interview preparation.

pub mod gateway;
pub mod handlers;
pub mod prompts;
pub mod schema;
