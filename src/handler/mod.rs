//! Request handler module
//!
//! Turns a request into a response drawn from the static directory.

mod listing;
pub mod path;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
