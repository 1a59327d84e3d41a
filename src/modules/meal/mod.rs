pub mod repository;
pub mod routes;
pub mod serializer;

pub use routes::get_router;
