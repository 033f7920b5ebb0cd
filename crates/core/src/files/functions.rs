use std::fmt;

/// Builds the object path for an upload: `<rank_id>/<new_id><ext>`.
///
/// The extension is taken from the last path segment of `filename`,
/// including the dot. Names without a dot in that segment get none.
pub fn upload_path(rank_id: &str, new_id: &str, filename: &str) -> String {
    format!("{rank_id}/{new_id}{}", extension(filename))
}

fn extension(filename: &str) -> &str {
    let segment = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    match segment.rfind('.') {
        Some(idx) => &segment[idx..],
        None => "",
    }
}

/// Image formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageType {
    Png,
    Jpeg,
    Gif,
    Bmp,
    Webp,
    Icon,
}

impl ImageType {
    pub fn mime_type(self) -> &'static str {
        match self {
            ImageType::Png => "image/png",
            ImageType::Jpeg => "image/jpeg",
            ImageType::Gif => "image/gif",
            ImageType::Bmp => "image/bmp",
            ImageType::Webp => "image/webp",
            ImageType::Icon => "image/x-icon",
        }
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime_type())
    }
}

/// Sniffs the leading bytes of a file for a known image signature.
pub fn detect_image_type(content: &[u8]) -> Option<ImageType> {
    if content.starts_with(b"\x89PNG\r\n\x1a\n") {
        Some(ImageType::Png)
    } else if content.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some(ImageType::Jpeg)
    } else if content.starts_with(b"GIF87a") || content.starts_with(b"GIF89a") {
        Some(ImageType::Gif)
    } else if content.starts_with(b"BM") {
        Some(ImageType::Bmp)
    } else if content.len() >= 14 && &content[..4] == b"RIFF" && &content[8..14] == b"WEBPVP" {
        Some(ImageType::Webp)
    } else if content.starts_with(&[0, 0, 1, 0]) || content.starts_with(&[0, 0, 2, 0]) {
        Some(ImageType::Icon)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_path_keeps_extension() {
        assert_eq!(upload_path("R1", "F1", "snes.png"), "R1/F1.png");
    }

    #[test]
    fn test_upload_path_uses_last_dot() {
        assert_eq!(upload_path("R1", "F1", "archive.tar.gz"), "R1/F1.gz");
    }

    #[test]
    fn test_upload_path_without_extension() {
        assert_eq!(upload_path("R1", "F1", "snes"), "R1/F1");
        assert_eq!(upload_path("R1", "F1", ""), "R1/F1");
    }

    #[test]
    fn test_upload_path_ignores_dots_in_directories() {
        assert_eq!(upload_path("R1", "F1", "images.d/snes"), "R1/F1");
        assert_eq!(upload_path("R1", "F1", "C:\\pics.v2\\snes.jpg"), "R1/F1.jpg");
    }

    #[test]
    fn test_detect_png() {
        let content = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
        assert_eq!(detect_image_type(content), Some(ImageType::Png));
    }

    #[test]
    fn test_detect_jpeg_and_gif() {
        assert_eq!(
            detect_image_type(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00]),
            Some(ImageType::Jpeg)
        );
        assert_eq!(detect_image_type(b"GIF89a\x01\x00"), Some(ImageType::Gif));
    }

    #[test]
    fn test_detect_webp() {
        let content = b"RIFF\x24\x00\x00\x00WEBPVP8 ";
        assert_eq!(detect_image_type(content), Some(ImageType::Webp));
        assert_eq!(detect_image_type(b"RIFF\x24\x00\x00\x00WAVEfmt "), None);
    }

    #[test]
    fn test_detect_rejects_text() {
        assert_eq!(detect_image_type(b"hello world"), None);
        assert_eq!(detect_image_type(b""), None);
        assert_eq!(detect_image_type(b"%PDF-1.7"), None);
    }

    #[test]
    fn test_mime_type() {
        assert_eq!(ImageType::Icon.to_string(), "image/x-icon");
        assert_eq!(ImageType::Png.mime_type(), "image/png");
    }
}
