pub mod handler;
pub(super) mod service;
pub(super) mod types;
