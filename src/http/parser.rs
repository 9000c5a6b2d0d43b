use crate::http::request::Request;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidRequest,
    MissingPath,
    Incomplete,
}

/// Parses a request head out of `buf`.
///
/// Succeeds once the buffer holds the whole header block (terminated by
/// the first blank line) and the request line yields a resource path.
/// Returns the request and the number of bytes consumed.
pub fn parse_request_head(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    let (head_len, consumed) = find_header_end(buf).ok_or(ParseError::Incomplete)?;

    let head = std::str::from_utf8(&buf[..head_len]).map_err(|_| ParseError::InvalidRequest)?;

    let lines: Vec<String> = head
        .lines()
        .map(|l| l.trim_end_matches('\r').to_string())
        .collect();

    let request_line = lines.first().ok_or(ParseError::InvalidRequest)?;
    if request_line.is_empty() {
        return Err(ParseError::InvalidRequest);
    }

    let resource = extract_resource(request_line)?;

    Ok((Request { resource, lines }, consumed))
}

/// Pulls the resource path out of a request line such as
/// `GET /index.html HTTP/1.1`: everything between the first `/` and the
/// next space, without the leading slash.
fn extract_resource(line: &str) -> Result<String, ParseError> {
    let slash = line.find('/').ok_or(ParseError::MissingPath)?;
    let rest = &line[slash..];
    let space = rest.find(' ').ok_or(ParseError::MissingPath)?;

    Ok(rest[1..space].to_string())
}

/// Finds the first blank line. Returns the length of the header text
/// before it and the total bytes consumed including the terminator.
/// Accepts both CRLF and bare LF line endings.
fn find_header_end(buf: &[u8]) -> Option<(usize, usize)> {
    let crlf = buf
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .map(|p| (p, p + 4));
    let lf = buf.windows(2).position(|w| w == b"\n\n").map(|p| (p, p + 2));

    match (crlf, lf) {
        (Some(a), Some(b)) => Some(if a.0 <= b.0 { a } else { b }),
        (a, b) => a.or(b),
    }
}
