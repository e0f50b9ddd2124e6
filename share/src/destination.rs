//! The supported social destinations and their static launch profiles.

use std::fmt;

/// A social app that can receive shared content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    /// Facebook.
    Facebook,
    /// Twitter / X.
    Twitter,
    /// LinkedIn.
    LinkedIn,
    /// WhatsApp.
    WhatsApp,
    /// Reddit.
    Reddit,
    /// Telegram.
    Telegram,
    /// Instagram.
    Instagram,
}

/// How a destination is reached on each platform. Compiled in, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DestinationProfile {
    /// The destination this profile describes.
    pub destination: Destination,
    /// Host method name that selects this destination.
    pub method: &'static str,
    /// Android application package the share intent is pinned to.
    pub android_package: &'static str,
    /// App URL scheme prefix; the encoded content is appended.
    pub app_scheme: &'static str,
    /// Scheme prefix used instead of `app_scheme` when there is content but
    /// no media.
    pub text_only_scheme: Option<&'static str>,
    /// App URL scheme with no payload.
    pub bare_scheme: &'static str,
    /// Web fallback prefix. The encoded content is appended when
    /// `injects_content` is set.
    pub web_template: &'static str,
    /// Whether the content is substituted into `web_template`.
    pub injects_content: bool,
    /// Whether the destination accepts a media attachment.
    pub supports_media: bool,
}

static PROFILES: [DestinationProfile; 7] = [
    DestinationProfile {
        destination: Destination::Facebook,
        method: "shareToFacebook",
        android_package: "com.facebook.katana",
        app_scheme: "fb://publish/profile/me?text=",
        text_only_scheme: None,
        bare_scheme: "fb://",
        web_template: "https://www.facebook.com/sharer/sharer.php?u=",
        injects_content: true,
        supports_media: false,
    },
    DestinationProfile {
        destination: Destination::Twitter,
        method: "shareToTwitter",
        android_package: "com.twitter.android",
        app_scheme: "twitter://post?message=",
        text_only_scheme: None,
        bare_scheme: "twitter://",
        web_template: "https://x.com/intent/tweet?text=",
        injects_content: true,
        supports_media: true,
    },
    DestinationProfile {
        destination: Destination::LinkedIn,
        method: "shareToLinkedIn",
        android_package: "com.linkedin.android",
        app_scheme: "linkedin://shareArticle?mini=true&url=",
        text_only_scheme: None,
        bare_scheme: "linkedin://",
        web_template: "https://www.linkedin.com/sharing/share-offsite/?url=",
        injects_content: true,
        supports_media: false,
    },
    DestinationProfile {
        destination: Destination::WhatsApp,
        method: "shareToWhatsApp",
        android_package: "com.whatsapp",
        app_scheme: "whatsapp://send?text=",
        text_only_scheme: None,
        bare_scheme: "whatsapp://",
        web_template: "https://api.whatsapp.com/send?text=",
        injects_content: true,
        supports_media: true,
    },
    DestinationProfile {
        destination: Destination::Reddit,
        method: "shareToReddit",
        android_package: "com.reddit.frontpage",
        app_scheme: "reddit://submit?url=",
        text_only_scheme: None,
        bare_scheme: "reddit://",
        web_template: "https://www.reddit.com/submit?title=",
        injects_content: true,
        supports_media: false,
    },
    DestinationProfile {
        destination: Destination::Telegram,
        method: "shareToTelegram",
        android_package: "org.telegram.messenger",
        app_scheme: "tg://msg?text=",
        text_only_scheme: None,
        bare_scheme: "tg://",
        web_template: "https://t.me/share/url?url=",
        injects_content: true,
        supports_media: true,
    },
    DestinationProfile {
        destination: Destination::Instagram,
        method: "shareToInstagram",
        android_package: "com.instagram.android",
        app_scheme: "instagram://sharesheet?text=",
        text_only_scheme: Some("instagram://sharesheet?url="),
        bare_scheme: "instagram://",
        web_template: "https://www.instagram.com/",
        injects_content: false,
        supports_media: true,
    },
];

impl Destination {
    /// Every supported destination, in table order.
    pub const ALL: [Self; 7] = [
        Self::Facebook,
        Self::Twitter,
        Self::LinkedIn,
        Self::WhatsApp,
        Self::Reddit,
        Self::Telegram,
        Self::Instagram,
    ];

    /// The static launch profile for this destination.
    #[must_use]
    pub fn profile(self) -> &'static DestinationProfile {
        &PROFILES[self as usize]
    }

    /// Look up a destination by its host method name (e.g. `shareToTwitter`).
    #[must_use]
    pub fn from_method(method: &str) -> Option<Self> {
        PROFILES
            .iter()
            .find(|profile| profile.method == method)
            .map(|profile| profile.destination)
    }

    /// Human readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Facebook => "Facebook",
            Self::Twitter => "Twitter",
            Self::LinkedIn => "LinkedIn",
            Self::WhatsApp => "WhatsApp",
            Self::Reddit => "Reddit",
            Self::Telegram => "Telegram",
            Self::Instagram => "Instagram",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_line_up_with_variants() {
        for destination in Destination::ALL {
            assert_eq!(destination.profile().destination, destination);
        }
    }

    #[test]
    fn method_names_round_trip() {
        for destination in Destination::ALL {
            let method = destination.profile().method;
            assert_eq!(Destination::from_method(method), Some(destination));
        }
        assert_eq!(Destination::from_method("shareToMySpace"), None);
        assert_eq!(Destination::from_method("sharetotwitter"), None);
    }

    #[test]
    fn instagram_has_no_web_text_fallback() {
        let profile = Destination::Instagram.profile();
        assert!(!profile.injects_content);
        assert_eq!(profile.web_template, "https://www.instagram.com/");
    }
}
