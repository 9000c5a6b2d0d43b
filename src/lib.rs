//! Skiff - One-Shot Static File Responder
//!
//! Core library for answering a single HTTP request per accepted
//! connection from a local serving root.

pub mod config;
pub mod http;
pub mod server;
