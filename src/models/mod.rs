//! Data models for the book collection.
//!
//! This module contains the core data structures used throughout the application.
//! Models are independent of UI and persistence.

pub mod book;
pub mod progress;

// Re-export all model types
pub use book::{Book, BookField, ValidationError};
pub use progress::ReadingProgress;
