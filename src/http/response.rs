use crate::http::resolve::ContentType;

/// HTTP status codes the responder can emit.
///
/// This server answers every request with one of exactly two outcomes:
/// - `Ok` (200): the resource (or the root page) was found
/// - `NotFound` (404): the resource is missing or the request was unusable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 NOT FOUND
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use skiff::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the reason phrase written into the status line.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "NOT FOUND",
        }
    }
}

/// Everything the header block depends on. The block's shape is fixed;
/// only the status line and the content type vary between responses.
#[derive(Debug)]
pub struct ResponseHead<'a> {
    pub status: StatusCode,
    pub content_type: ContentType,
    /// Server identification, also used as the server-name template value
    pub server: &'a str,
}
