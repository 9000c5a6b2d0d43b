use anyhow::Context;
use chrono::{DateTime, Local, Utc};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::resolve::Resolution;
use crate::http::response::{ResponseHead, StatusCode};
use crate::http::template::{self, DATE_TOKEN, SERVER_TOKEN};

const HTTP_VERSION: &str = "HTTP/1.1";

const NOT_FOUND_PAGE: &str = "<html><head></head><body>\n<h3>404 NOT FOUND</h3>\n</body></html>\n";
const WELCOME_PAGE: &str =
    "<html><head></head><body>\n<h3>My web server works!</h3>\n</body></html>\n";

/// Serializes the header block: status line, Date, Server,
/// Connection: close, Content-Type, blank line. No Content-Length is
/// emitted; closing the connection marks the end of the body.
///
/// Public so tests can assert on the exact block.
pub fn serialize_head(head: &ResponseHead<'_>, now: DateTime<Utc>) -> Vec<u8> {
    let mut buf = Vec::new();

    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        head.status.as_u16(),
        head.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    let date = now.format("%a, %d %b %Y %H:%M:%S GMT");
    buf.extend_from_slice(format!("Date: {}\r\n", date).as_bytes());
    buf.extend_from_slice(format!("Server: {}\r\n", head.server).as_bytes());
    buf.extend_from_slice(b"Connection: close\r\n");
    buf.extend_from_slice(format!("Content-Type: {}\r\n", head.content_type.as_str()).as_bytes());

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    buf
}

pub async fn write_head(stream: &mut TcpStream, head: &ResponseHead<'_>) -> anyhow::Result<()> {
    stream.write_all(&serialize_head(head, Utc::now())).await?;
    Ok(())
}

/// Writes the response body for a resolution, choosing exactly one
/// strategy: error page, raw file bytes, welcome page, or line-wise
/// template expansion of a text file.
pub async fn write_body(
    stream: &mut TcpStream,
    resolution: &Resolution,
    server_name: &str,
) -> anyhow::Result<()> {
    if resolution.status != StatusCode::Ok {
        stream.write_all(NOT_FOUND_PAGE.as_bytes()).await?;
        return Ok(());
    }

    if resolution.content_type.is_binary() {
        let file = resolution
            .file
            .as_deref()
            .context("binary resource resolved without a file")?;
        // Whole file, untransformed
        let data = tokio::fs::read(file)
            .await
            .with_context(|| format!("failed to read {}", file.display()))?;
        stream.write_all(&data).await?;
        return Ok(());
    }

    if resolution.resource.is_empty() {
        stream.write_all(WELCOME_PAGE.as_bytes()).await?;
        return Ok(());
    }

    let file = resolution
        .file
        .as_deref()
        .context("text resource resolved without a file")?;
    let text = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("failed to read {}", file.display()))?;

    let today = Local::now().date_naive().to_string();
    let substitutions = [(DATE_TOKEN, today.as_str()), (SERVER_TOKEN, server_name)];

    // split_inclusive keeps each line's own terminator, so boundaries
    // survive and no newline is invented for an unterminated last line
    let mut body = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        body.push_str(&template::expand_line(line, &substitutions));
    }

    stream.write_all(body.as_bytes()).await?;
    Ok(())
}
