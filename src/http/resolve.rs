use crate::http::response::StatusCode;
use std::path::{Component, Path, PathBuf};

/// Content types the responder can emit.
///
/// The mapping from file extension to type is fixed; everything the
/// server does not recognize as an image is served as HTML text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    TextHtml,
    ImageGif,
    ImagePng,
    ImageJpg,
}

impl ContentType {
    /// Returns the MIME string written into the Content-Type header.
    ///
    /// # Example
    ///
    /// ```
    /// # use skiff::http::resolve::ContentType;
    /// assert_eq!(ContentType::TextHtml.as_str(), "text/html");
    /// assert_eq!(ContentType::ImageGif.as_str(), "image/gif");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::TextHtml => "text/html",
            ContentType::ImageGif => "image/gif",
            ContentType::ImagePng => "image/png",
            ContentType::ImageJpg => "image/jpg",
        }
    }

    /// Binary types are streamed to the client byte for byte; text
    /// types go through line-wise template expansion.
    pub fn is_binary(&self) -> bool {
        !matches!(self, ContentType::TextHtml)
    }
}

/// Outcome of mapping a resource path onto the serving root.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// The resource as requested; empty means the root page
    pub resource: String,
    /// Where the file lives under the serving root, when the resource
    /// names one that may be read
    pub file: Option<PathBuf>,
    pub status: StatusCode,
    pub content_type: ContentType,
}

impl Resolution {
    /// A not-found resolution carrying no file, used both for missing
    /// resources and for requests that never produced a usable path.
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            file: None,
            status: StatusCode::NotFound,
            content_type: ContentType::TextHtml,
        }
    }
}

/// Maps a resource path to a file under `web_root` and decides status
/// and content type. Absence of the file is a normal outcome, never an
/// error.
pub fn resolve(web_root: &Path, resource: &str) -> Resolution {
    if resource.is_empty() {
        // Root page is synthesized, it always exists
        return Resolution {
            resource: String::new(),
            file: None,
            status: StatusCode::Ok,
            content_type: ContentType::TextHtml,
        };
    }

    let Some(file) = confine(web_root, resource) else {
        return Resolution::not_found(resource);
    };

    if !file.is_file() {
        return Resolution::not_found(resource);
    }

    Resolution {
        resource: resource.to_string(),
        file: Some(file),
        status: StatusCode::Ok,
        content_type: content_type_for(resource),
    }
}

/// Content type from the substring after the last `.` of the resource
/// name. Only called for resources that exist; anything unrecognized
/// falls back to HTML text.
fn content_type_for(resource: &str) -> ContentType {
    match resource.rfind('.').map(|i| &resource[i..]) {
        Some(".gif") => ContentType::ImageGif,
        Some(".png") => ContentType::ImagePng,
        Some(".jpg") => ContentType::ImageJpg,
        _ => ContentType::TextHtml,
    }
}

/// Joins the resource onto the serving root component by component.
/// Parent, root, and prefix components are rejected so resolution can
/// never escape `web_root`.
fn confine(web_root: &Path, resource: &str) -> Option<PathBuf> {
    let mut path = web_root.to_path_buf();

    for component in Path::new(resource).components() {
        match component {
            Component::Normal(part) => path.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traversal_components_are_rejected() {
        assert!(confine(Path::new("www"), "../secret").is_none());
        assert!(confine(Path::new("www"), "a/../../b").is_none());
        assert!(confine(Path::new("www"), "/etc/passwd").is_none());
    }

    #[test]
    fn plain_paths_stay_under_the_root() {
        let joined = confine(Path::new("www"), "img/photo.gif").unwrap();
        assert_eq!(joined, Path::new("www").join("img").join("photo.gif"));
    }
}
