//! User registration.

pub mod service;

pub use service::UserService;
