pub mod admin;
pub mod docs;
pub mod meal;

mod router;
pub use router::get_router;
