//! MIME type detection for uploaded files.
//!
//! The analyze endpoint only accepts images; everything else is rejected
//! before any provider call is made.

/// Detect MIME type from a filename's extension.
pub fn detect_mime_type(filename: &str) -> &'static str {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png"          => "image/png",
        "gif"          => "image/gif",
        "webp"         => "image/webp",
        "bmp"          => "image/bmp",
        "tiff" | "tif" => "image/tiff",

        _              => "application/octet-stream",
    }
}

/// Whether a MIME type is for an image.
pub fn is_image(mime: &str) -> bool {
    mime.starts_with("image/")
}
