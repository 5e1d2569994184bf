//! LazyBooks Library
//!
//! Core functionality for the LazyBooks book-collection tracker: the book
//! model, the JSON record store, configuration, and the terminal and
//! command-line front ends.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod logging;
pub mod models;
pub mod services;
pub mod shortcuts;
pub mod tui;
