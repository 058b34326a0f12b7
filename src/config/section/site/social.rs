//! `[site.social]` configuration (Open Graph / Twitter Card).

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

pub struct SocialFields {
    pub og_image: FieldPath,
    pub twitter_creator: FieldPath,
}

/// Social link-preview settings.
///
/// Image paths are site-absolute (leading `/`); they are resolved against
/// the base URL at render time since preview crawlers require absolute URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    /// Preview image, site-absolute path.
    pub og_image: String,

    /// Preview image width in pixels.
    pub og_image_width: u32,

    /// Preview image height in pixels.
    pub og_image_height: u32,

    /// Preview image alt text.
    pub og_image_alt: String,

    /// Twitter card type.
    pub twitter_card: String,

    /// Twitter handle of the content creator (e.g., "@musicblog").
    pub twitter_creator: String,
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            og_image: "/images/og-image.jpg".into(),
            og_image_width: 1200,
            og_image_height: 630,
            og_image_alt: String::new(),
            twitter_card: "summary_large_image".into(),
            twitter_creator: String::new(),
        }
    }
}

impl SocialConfig {
    pub const FIELDS: SocialFields = SocialFields {
        og_image: FieldPath::new("site.social.og_image"),
        twitter_creator: FieldPath::new("site.social.twitter_creator"),
    };

    /// Validate social preview settings.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.og_image.is_empty() && !self.og_image.starts_with('/') {
            diag.error_with_hint(
                Self::FIELDS.og_image,
                format!("'{}' is not site-absolute", self.og_image),
                "use a leading slash, e.g. \"/images/og-image.jpg\"",
            );
        }

        if !self.twitter_creator.is_empty() && !self.twitter_creator.starts_with('@') {
            diag.warn(
                Self::FIELDS.twitter_creator,
                format!("'{}' does not start with '@'", self.twitter_creator),
            );
        }
    }
}
