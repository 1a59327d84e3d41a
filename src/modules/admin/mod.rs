//! Read-only management console over the meal table.

pub mod routes;

pub use routes::get_router;
