pub mod lifecycle;
pub mod store;

pub use lifecycle::{Landing, RequestSlot};
pub use store::{Session, SessionStore, SessionView};
