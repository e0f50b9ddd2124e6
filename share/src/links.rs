//! Deep link and web fallback URL construction.

use url::Url;

use crate::{DestinationProfile, MediaHandle, MediaKind, Result, ShareError};

/// Percent-encode a value for use inside a URL query component.
///
/// Everything except `A-Z a-z 0-9 - . _ ~` is encoded, so `hello world`
/// becomes `hello%20world`.
#[must_use]
pub fn encode_component(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// The destination's web share page for `content`.
///
/// When the destination takes media and a handle is given, the handle is
/// appended as an `image_url` or `video_url` parameter.
///
/// # Errors
/// Returns [`ShareError::Url`] if the assembled string is not a valid URL.
pub fn web_fallback_url(
    profile: &DestinationProfile,
    content: Option<&str>,
    media: Option<&MediaHandle>,
) -> Result<Url> {
    let mut url = String::from(profile.web_template);
    if profile.injects_content {
        url.push_str(&encode_component(content.unwrap_or_default()));

        if let Some(handle) = media.filter(|_| profile.supports_media) {
            let param = match MediaKind::of_path(&handle.path) {
                MediaKind::Video => "video_url",
                _ => "image_url",
            };
            url.push('&');
            url.push_str(param);
            url.push('=');
            url.push_str(&encode_component(&handle.uri));
        }
    }
    parse(url)
}

/// The destination's app scheme URL.
///
/// Falls back to the bare scheme when there is no content to carry. Text
/// without media uses the profile's `text_only_scheme` when it has one.
///
/// # Errors
/// Returns [`ShareError::Url`] if the assembled string is not a valid URL.
pub fn app_scheme_url(
    profile: &DestinationProfile,
    content: Option<&str>,
    has_media: bool,
) -> Result<Url> {
    let Some(content) = content.filter(|c| !c.is_empty()) else {
        return parse(profile.bare_scheme.to_owned());
    };
    let prefix = match profile.text_only_scheme {
        Some(prefix) if !has_media => prefix,
        _ => profile.app_scheme,
    };
    parse(format!("{prefix}{}", encode_component(content)))
}

fn parse(url: String) -> Result<Url> {
    Url::parse(&url).map_err(|source| ShareError::Url { url, source })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::Destination;

    fn handle(path: &str, uri: &str) -> MediaHandle {
        MediaHandle {
            path: PathBuf::from(path),
            uri: uri.to_owned(),
        }
    }

    #[test]
    fn web_urls_match_templates() {
        let expected = [
            (
                Destination::Facebook,
                "https://www.facebook.com/sharer/sharer.php?u=hello%20world",
            ),
            (Destination::Twitter, "https://x.com/intent/tweet?text=hello%20world"),
            (
                Destination::LinkedIn,
                "https://www.linkedin.com/sharing/share-offsite/?url=hello%20world",
            ),
            (
                Destination::WhatsApp,
                "https://api.whatsapp.com/send?text=hello%20world",
            ),
            (
                Destination::Reddit,
                "https://www.reddit.com/submit?title=hello%20world",
            ),
            (Destination::Telegram, "https://t.me/share/url?url=hello%20world"),
            (Destination::Instagram, "https://www.instagram.com/"),
        ];

        for (destination, url) in expected {
            let built = web_fallback_url(destination.profile(), Some("hello world"), None).unwrap();
            assert_eq!(built.as_str(), url, "{destination}");
        }
    }

    #[test]
    fn content_is_encoded_as_a_component() {
        let url = web_fallback_url(
            Destination::Facebook.profile(),
            Some("https://example.com/a?b=c&d=é"),
            None,
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fexample.com%2Fa%3Fb%3Dc%26d%3D%C3%A9"
        );
    }

    #[test]
    fn missing_content_leaves_parameter_empty() {
        let url = web_fallback_url(Destination::WhatsApp.profile(), None, None).unwrap();
        assert_eq!(url.as_str(), "https://api.whatsapp.com/send?text=");
    }

    #[test]
    fn media_parameter_follows_handle_kind() {
        let photo = handle("/tmp/a.png", "file:///tmp/a.png");
        let url = web_fallback_url(Destination::Twitter.profile(), Some("hi"), Some(&photo)).unwrap();
        assert_eq!(
            url.as_str(),
            "https://x.com/intent/tweet?text=hi&image_url=file%3A%2F%2F%2Ftmp%2Fa.png"
        );

        let clip = handle("/tmp/b.mp4", "content://app.fileprovider/b.mp4");
        let url = web_fallback_url(Destination::Telegram.profile(), Some("hi"), Some(&clip)).unwrap();
        assert_eq!(
            url.as_str(),
            "https://t.me/share/url?url=hi&video_url=content%3A%2F%2Fapp.fileprovider%2Fb.mp4"
        );
    }

    #[test]
    fn media_parameter_skipped_where_unsupported() {
        let photo = handle("/tmp/a.png", "file:///tmp/a.png");
        let url = web_fallback_url(Destination::Reddit.profile(), Some("hi"), Some(&photo)).unwrap();
        assert_eq!(url.as_str(), "https://www.reddit.com/submit?title=hi");

        let url = web_fallback_url(Destination::Instagram.profile(), Some("hi"), Some(&photo)).unwrap();
        assert_eq!(url.as_str(), "https://www.instagram.com/");
    }

    #[test]
    fn app_scheme_carries_content() {
        let twitter = Destination::Twitter.profile();
        let url = app_scheme_url(twitter, Some("hello world"), false).unwrap();
        assert_eq!(url.as_str(), "twitter://post?message=hello%20world");

        let linkedin = Destination::LinkedIn.profile();
        let url = app_scheme_url(linkedin, Some("https://a.b"), true).unwrap();
        assert_eq!(
            url.as_str(),
            "linkedin://shareArticle?mini=true&url=https%3A%2F%2Fa.b"
        );
    }

    #[test]
    fn app_scheme_without_content_is_bare() {
        let url = app_scheme_url(Destination::Telegram.profile(), None, false).unwrap();
        assert_eq!(url.scheme(), "tg");

        let url = app_scheme_url(Destination::Instagram.profile(), Some(""), true).unwrap();
        assert_eq!(url.scheme(), "instagram");
    }

    #[test]
    fn instagram_text_without_media_uses_url_sheet() {
        let profile = Destination::Instagram.profile();
        let url = app_scheme_url(profile, Some("https://a.b"), false).unwrap();
        assert_eq!(url.as_str(), "instagram://sharesheet?url=https%3A%2F%2Fa.b");

        let url = app_scheme_url(profile, Some("caption"), true).unwrap();
        assert_eq!(url.as_str(), "instagram://sharesheet?text=caption");
    }
}
