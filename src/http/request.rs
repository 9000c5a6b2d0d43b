/// Represents a parsed HTTP request head.
///
/// Only the resource path from the request line is interpreted. The rest
/// of the header lines are drained off the connection so the response can
/// be written, and are kept solely for logging.
#[derive(Debug, Clone)]
pub struct Request {
    /// The requested resource, with the leading slash removed.
    /// Empty means the root page.
    pub resource: String,
    /// Every line of the request head, request line included
    pub lines: Vec<String>,
}

impl Request {
    /// True when the request names the synthetic root page rather
    /// than a file.
    pub fn is_root(&self) -> bool {
        self.resource.is_empty()
    }
}
