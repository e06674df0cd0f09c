//! colorweb library crate.
//!
//! Kept separate from the binary so integration tests can build the router
//! and drive it over real HTTP.
//!
/// Configuration management and settings
pub mod config;
/// HTML rendering
pub mod html;
/// HTTP server implementation and request handling
pub mod server;
