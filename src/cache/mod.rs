//! In-process caching built on Moka.
//!
//! Repositories own a write-through [`TypedCache`] in front of their
//! collection. The process is the only writer, so an entry refreshed on
//! every save stays coherent with the database.

mod config;
mod typed;

pub use config::CacheConfig;
pub use typed::TypedCache;
