use skiff::http::resolve::{ContentType, resolve};
use skiff::http::response::StatusCode;
use std::fs;
use std::path::PathBuf;

/// Throwaway serving root under the system temp dir, removed on drop.
struct Fixture {
    root: PathBuf,
}

impl Fixture {
    fn new(name: &str) -> Self {
        let root = std::env::temp_dir().join(format!("skiff-resolve-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(&root).unwrap();
        Self { root }
    }

    fn write(&self, name: &str, bytes: &[u8]) {
        let path = self.root.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, bytes).unwrap();
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

#[test]
fn test_empty_resource_is_the_root_page() {
    let fx = Fixture::new("root");

    let res = resolve(&fx.root, "");

    assert_eq!(res.status, StatusCode::Ok);
    assert_eq!(res.content_type, ContentType::TextHtml);
    assert!(res.file.is_none());
}

#[test]
fn test_missing_file_is_not_found() {
    let fx = Fixture::new("missing");

    let res = resolve(&fx.root, "nope.html");

    assert_eq!(res.status, StatusCode::NotFound);
    assert_eq!(res.content_type, ContentType::TextHtml);
}

#[test]
fn test_missing_file_ignores_extension() {
    // A recognized extension never rescues a missing file
    let fx = Fixture::new("missing-gif");

    let res = resolve(&fx.root, "ghost.gif");

    assert_eq!(res.status, StatusCode::NotFound);
    assert_eq!(res.content_type, ContentType::TextHtml);
}

#[test]
fn test_existing_image_types() {
    let fx = Fixture::new("images");
    fx.write("a.gif", b"GIF89a");
    fx.write("b.png", b"\x89PNG");
    fx.write("c.jpg", b"\xff\xd8\xff");

    let gif = resolve(&fx.root, "a.gif");
    assert_eq!(gif.status, StatusCode::Ok);
    assert_eq!(gif.content_type, ContentType::ImageGif);

    let png = resolve(&fx.root, "b.png");
    assert_eq!(png.content_type, ContentType::ImagePng);

    let jpg = resolve(&fx.root, "c.jpg");
    assert_eq!(jpg.content_type, ContentType::ImageJpg);
}

#[test]
fn test_existing_html_file() {
    let fx = Fixture::new("html");
    fx.write("page.html", b"<p>hi</p>");

    let res = resolve(&fx.root, "page.html");

    assert_eq!(res.status, StatusCode::Ok);
    assert_eq!(res.content_type, ContentType::TextHtml);
    assert_eq!(res.file.as_deref(), Some(fx.root.join("page.html").as_path()));
}

#[test]
fn test_existing_file_with_unrecognized_extension_is_still_ok() {
    let fx = Fixture::new("unknown-ext");
    fx.write("report.pdf", b"%PDF");

    let res = resolve(&fx.root, "report.pdf");

    assert_eq!(res.status, StatusCode::Ok);
    assert_eq!(res.content_type, ContentType::TextHtml);
}

#[test]
fn test_existing_file_without_extension() {
    let fx = Fixture::new("no-ext");
    fx.write("README", b"hello");

    let res = resolve(&fx.root, "README");

    assert_eq!(res.status, StatusCode::Ok);
    assert_eq!(res.content_type, ContentType::TextHtml);
}

#[test]
fn test_last_extension_separator_wins() {
    let fx = Fixture::new("multi-dot");
    fx.write("pic.old.gif", b"GIF89a");
    fx.write("archive.tar.gz", b"\x1f\x8b");

    assert_eq!(resolve(&fx.root, "pic.old.gif").content_type, ContentType::ImageGif);
    assert_eq!(resolve(&fx.root, "archive.tar.gz").content_type, ContentType::TextHtml);
}

#[test]
fn test_nested_resource_paths() {
    let fx = Fixture::new("nested");
    fx.write("img/photo.gif", b"GIF89a");

    let res = resolve(&fx.root, "img/photo.gif");

    assert_eq!(res.status, StatusCode::Ok);
    assert_eq!(res.content_type, ContentType::ImageGif);
}

#[test]
fn test_parent_traversal_is_rejected() {
    let fx = Fixture::new("traversal");
    // A real file one level above the serving root
    fs::write(fx.root.parent().unwrap().join("outside.html"), b"secret").unwrap();

    let res = resolve(&fx.root, "../outside.html");

    assert_eq!(res.status, StatusCode::NotFound);
    assert!(res.file.is_none());

    let _ = fs::remove_file(fx.root.parent().unwrap().join("outside.html"));
}

#[test]
fn test_absolute_resource_is_rejected() {
    let fx = Fixture::new("absolute");

    let res = resolve(&fx.root, "/etc/hostname");

    assert_eq!(res.status, StatusCode::NotFound);
}

#[test]
fn test_directory_is_not_a_servable_file() {
    let fx = Fixture::new("dir");
    fs::create_dir_all(fx.root.join("sub")).unwrap();

    let res = resolve(&fx.root, "sub");

    assert_eq!(res.status, StatusCode::NotFound);
}

#[test]
fn test_resolution_is_repeatable() {
    let fx = Fixture::new("repeat");
    fx.write("a.gif", b"GIF89a");

    let first = resolve(&fx.root, "a.gif");
    let second = resolve(&fx.root, "a.gif");

    assert_eq!(first.status, second.status);
    assert_eq!(first.content_type, second.content_type);
    assert_eq!(first.file, second.file);
}
