use std::path::{Path, PathBuf};

use crate::Destination;

/// A request to share content to one destination.
///
/// Built at call time and consumed by a single dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    /// Target app.
    pub destination: Destination,
    /// Plain text or a URL, depending on the destination.
    pub content: Option<String>,
    /// Local media files, in the order the caller gave them.
    pub media: Vec<PathBuf>,
    /// Open the destination's web share page when the app is missing.
    pub open_browser_on_failure: bool,
}

impl ShareRequest {
    /// Create an empty request for a destination.
    #[must_use]
    pub const fn new(destination: Destination) -> Self {
        Self {
            destination,
            content: None,
            media: Vec::new(),
            open_browser_on_failure: false,
        }
    }

    /// Set the text content.
    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Append a media file.
    #[must_use]
    pub fn media(mut self, path: impl Into<PathBuf>) -> Self {
        self.media.push(path.into());
        self
    }

    /// Fall back to the web share page when no app handles the request.
    #[must_use]
    pub const fn open_browser(mut self, open: bool) -> Self {
        self.open_browser_on_failure = open;
        self
    }

    /// The MIME hint for this request's media list.
    #[must_use]
    pub fn media_kind(&self) -> MediaKind {
        MediaKind::infer(&self.media)
    }
}

/// MIME hint attached to the share payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// No media, text only.
    Text,
    /// One or more images.
    Image,
    /// A single video.
    Video,
}

impl MediaKind {
    /// Infer the hint from a media list.
    ///
    /// A batch of more than one file is always reported as images, even when
    /// every file is a video.
    #[must_use]
    pub fn infer<P: AsRef<Path>>(media: &[P]) -> Self {
        match media {
            [] => Self::Text,
            [single] => Self::of_path(single.as_ref()),
            _ => Self::Image,
        }
    }

    /// Hint for a single file: `.mp4` is video, anything else is an image.
    #[must_use]
    pub fn of_path(path: &Path) -> Self {
        let is_mp4 = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("mp4"));
        if is_mp4 { Self::Video } else { Self::Image }
    }

    /// MIME type string used for intents.
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Text => "text/plain",
            Self::Image => "image/*",
            Self::Video => "video/*",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_media_is_text() {
        let none: [&str; 0] = [];
        assert_eq!(MediaKind::infer(&none), MediaKind::Text);
        assert_eq!(MediaKind::Text.mime_type(), "text/plain");
    }

    #[test]
    fn single_file_follows_extension() {
        assert_eq!(MediaKind::infer(&["clip.mp4"]), MediaKind::Video);
        assert_eq!(MediaKind::infer(&["CLIP.MP4"]), MediaKind::Video);
        assert_eq!(MediaKind::infer(&["photo.png"]), MediaKind::Image);
        assert_eq!(MediaKind::infer(&["clip.mov"]), MediaKind::Image);
        assert_eq!(MediaKind::infer(&["no_extension"]), MediaKind::Image);
    }

    #[test]
    fn batches_are_always_images() {
        assert_eq!(MediaKind::infer(&["a.mp4", "b.mp4"]), MediaKind::Image);
        assert_eq!(MediaKind::infer(&["a.png", "b.mp4", "c.jpg"]), MediaKind::Image);
    }

    #[test]
    fn builder_collects_media_in_order() {
        let request = ShareRequest::new(Destination::Telegram)
            .content("hi")
            .media("/tmp/one.png")
            .media("/tmp/two.png")
            .open_browser(true);

        assert_eq!(request.content.as_deref(), Some("hi"));
        assert_eq!(
            request.media,
            vec![PathBuf::from("/tmp/one.png"), PathBuf::from("/tmp/two.png")]
        );
        assert!(request.open_browser_on_failure);
        assert_eq!(request.media_kind(), MediaKind::Image);
    }
}
