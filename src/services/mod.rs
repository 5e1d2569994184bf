//! Service layer for business logic.
//!
//! `store` owns the persisted file; `books` holds the pure collection
//! operations that callers compose between a load and a save.

pub mod books;
pub mod store;

// Re-export commonly used types
pub use store::BookStore;
