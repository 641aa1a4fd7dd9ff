//! Capability traits implemented across the application.

pub mod id;

pub use id::{IdGenerator, MonotonicIdGenerator};
