pub mod models;
mod mongo;
pub mod repository;

pub use mongo::Database;
