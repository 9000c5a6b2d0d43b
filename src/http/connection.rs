use bytes::{Buf, BytesMut};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::config::ServeConfig;
use crate::http::parser::{ParseError, parse_request_head};
use crate::http::request::Request;
use crate::http::resolve::{self, Resolution};
use crate::http::response::ResponseHead;
use crate::http::writer;

const MAX_HEADER_BYTES: usize = 64 * 1024;

/// Worker for exactly one accepted connection: reads one request head,
/// answers it, closes the stream. Owns the stream for its whole life.
pub struct Connection {
    stream: TcpStream,
    serve: ServeConfig,
    buffer: BytesMut,
    state: WorkerState,
}

enum WorkerState {
    Start,
    /// Head read; `None` means it was malformed but the stream is still
    /// writable, so a best-effort 404 goes out
    RequestRead(Option<Request>),
    Resolved(Resolution),
    HeaderSent(Resolution),
    BodySent,
    Closed,
}

enum ReadOutcome {
    Request(Request),
    Malformed,
    Disconnected,
}

impl Connection {
    pub fn new(stream: TcpStream, serve: ServeConfig) -> Self {
        Self {
            stream,
            serve,
            buffer: BytesMut::with_capacity(4096),
            state: WorkerState::Start,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let state = std::mem::replace(&mut self.state, WorkerState::Closed);

            self.state = match state {
                WorkerState::Start => {
                    let outcome = timeout(self.serve.read_timeout(), self.read_request())
                        .await
                        .map_err(|_| anyhow::anyhow!("timed out waiting for request head"))??;

                    match outcome {
                        ReadOutcome::Request(req) => WorkerState::RequestRead(Some(req)),
                        ReadOutcome::Malformed => WorkerState::RequestRead(None),
                        ReadOutcome::Disconnected => WorkerState::Closed,
                    }
                }

                WorkerState::RequestRead(req) => {
                    let resolution = match req {
                        Some(req) => resolve::resolve(&self.serve.web_root, &req.resource),
                        None => Resolution::not_found(""),
                    };

                    WorkerState::Resolved(resolution)
                }

                WorkerState::Resolved(resolution) => {
                    let head = ResponseHead {
                        status: resolution.status,
                        content_type: resolution.content_type,
                        server: &self.serve.server_name,
                    };
                    writer::write_head(&mut self.stream, &head).await?;

                    WorkerState::HeaderSent(resolution)
                }

                WorkerState::HeaderSent(resolution) => {
                    writer::write_body(&mut self.stream, &resolution, &self.serve.server_name)
                        .await?;

                    tracing::info!(
                        resource = %resolution.resource,
                        status = resolution.status.as_u16(),
                        "Response sent"
                    );

                    WorkerState::BodySent
                }

                WorkerState::BodySent => {
                    self.stream.shutdown().await?;
                    WorkerState::Closed
                }

                WorkerState::Closed => break,
            };
        }

        Ok(())
    }

    async fn read_request(&mut self) -> anyhow::Result<ReadOutcome> {
        loop {
            // Try parsing whatever we already have
            match parse_request_head(&self.buffer) {
                Ok((request, consumed)) => {
                    self.buffer.advance(consumed);

                    for line in &request.lines {
                        tracing::debug!("Request line: ({})", line);
                    }

                    return Ok(ReadOutcome::Request(request));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(e) => {
                    tracing::warn!("Malformed request: {:?}", e);
                    return Ok(ReadOutcome::Malformed);
                }
            }

            // Prevent unbounded header growth
            if self.buffer.len() > MAX_HEADER_BYTES {
                anyhow::bail!("request header block too large");
            }

            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                if self.buffer.is_empty() {
                    // Client connected and left without sending anything
                    return Ok(ReadOutcome::Disconnected);
                }

                tracing::warn!("Connection closed before request head was complete");
                return Ok(ReadOutcome::Malformed);
            }
        }
    }
}
