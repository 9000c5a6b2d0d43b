//! HTTP responder implementation.
//!
//! This module implements a single-request HTTP/1.1 responder: each accepted
//! connection carries exactly one request and is closed after the response.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The per-connection worker implementing the request-response state machine
//! - **`parser`**: Frames the request head in a byte buffer and extracts the resource path
//! - **`request`**: The parsed request head
//! - **`resolve`**: Maps a resource path to a file, a status, and a content type
//! - **`response`**: Status codes and the response head
//! - **`template`**: Literal token substitution applied to served text lines
//! - **`writer`**: Serializes the header block and streams the body to the client
//!
//! # Connection State Machine
//!
//! Each client connection moves through the states once, in order:
//!
//! ```text
//!        ┌─────────────┐
//!        │    Start    │ ← Wait for the request head
//!        └──────┬──────┘
//!               │ Head read (or found malformed)
//!               ▼
//!        ┌──────────────────┐
//!        │   RequestRead    │ ← Resolve the resource path
//!        └──────┬───────────┘
//!               │ Resolution ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Resolved      │ ← Write status line + headers
//!        └──────┬───────────┘
//!               │ Header block sent
//!               ▼
//!        ┌──────────────────┐
//!        │   HeaderSent     │ ← Write the body
//!        └──────┬───────────┘
//!               │ Body sent
//!               ▼
//!        ┌──────────────────┐
//!        │ BodySent → Closed│ ← Flush and close, always
//!        └──────────────────┘
//! ```
//!
//! No state is ever revisited; an error at any point abandons the
//! connection, and dropping it closes the stream.
//!
//! # Example
//!
//! ```ignore
//! use skiff::config::ServeConfig;
//! use skiff::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, ServeConfig::default());
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod request;
pub mod resolve;
pub mod response;
pub mod parser;
pub mod connection;
pub mod template;
pub mod writer;
