//! `[site.info]` configuration.
//!
//! Basic site information: title, tagline, description, author, language.
//! These values feed the document head, the structured data block, and the
//! auxiliary generators (sitemap, robots, manifest).

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Hand-written field path table (referenced by validation diagnostics).
pub struct SiteInfoFields {
    pub title: FieldPath,
    pub description: FieldPath,
    pub url: FieldPath,
    pub locale: FieldPath,
}

/// Site metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site name (e.g., "Music Blog"). Used as the title-template suffix.
    pub title: String,

    /// Short tagline appended to the default title.
    pub tagline: String,

    /// Site description (meta description, OG/Twitter, structured data).
    pub description: String,

    /// Meta keywords.
    pub keywords: Vec<String>,

    /// Author organization name.
    pub author: String,

    /// Publisher organization name.
    pub publisher: String,

    /// Publisher logo, site-absolute path (e.g., "/images/logo.png").
    pub logo: Option<String>,

    /// Language code for the `<html lang>` attribute (e.g., "ko").
    pub language: String,

    /// Locale for Open Graph / structured data (e.g., "ko_KR").
    pub locale: String,

    /// Copyright notice shown in the footer.
    pub copyright: String,

    /// Site URL. Overridden by the MUSEBLOG_SITE_URL environment variable
    /// and the --site-url CLI flag; defaults to the local placeholder.
    pub url: Option<String>,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            tagline: String::new(),
            description: String::new(),
            keywords: Vec::new(),
            author: String::new(),
            publisher: String::new(),
            logo: None,
            language: "en".into(),
            locale: "en_US".into(),
            copyright: String::new(),
            url: None,
        }
    }
}

impl SiteInfoConfig {
    pub const FIELDS: SiteInfoFields = SiteInfoFields {
        title: FieldPath::new("site.info.title"),
        description: FieldPath::new("site.info.description"),
        url: FieldPath::new("site.info.url"),
        locale: FieldPath::new("site.info.locale"),
    };

    /// Default document title: `"{title} - {tagline}"`, or just the title
    /// when no tagline is configured.
    pub fn default_title(&self) -> String {
        if self.tagline.is_empty() {
            self.title.clone()
        } else {
            format!("{} - {}", self.title, self.tagline)
        }
    }

    /// Per-page document title: `"{page} | {title}"`.
    pub fn page_title(&self, page: &str) -> String {
        format!("{} | {}", page, self.title)
    }

    /// Validate site metadata.
    ///
    /// # Checks
    /// - `title` and `description` must be set
    /// - `url`, when present, must be a valid http(s) URL with a host
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.is_empty() {
            diag.error(Self::FIELDS.title, "site title is required");
        }
        if self.description.is_empty() {
            diag.error(Self::FIELDS.description, "site description is required");
        }

        // OG locale format is "ll_TT"; warn on the common "ll-TT" mistake
        if self.locale.contains('-') {
            diag.warn(
                Self::FIELDS.locale,
                format!(
                    "locale '{}' uses '-'; Open Graph expects '_' (e.g., ko_KR)",
                    self.locale
                ),
            );
        }

        if let Some(url_str) = &self.url {
            Self::validate_url(url_str, diag);
        }
    }

    /// URL format check using url crate for strict validation
    fn validate_url(url_str: &str, diag: &mut ConfigDiagnostics) {
        match url::Url::parse(url_str) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.url,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let info = SiteInfoConfig::default();
        assert_eq!(info.language, "en");
        assert_eq!(info.locale, "en_US");
        assert!(info.url.is_none());
        assert!(info.keywords.is_empty());
    }

    #[test]
    fn test_parse_info_section() {
        let config = test_parse_config(
            "[site.info]\ntitle = \"Music Blog\"\ntagline = \"음악 리뷰와 이야기\"\n\
             description = \"desc\"\nkeywords = [\"음악\", \"리뷰\"]\nlocale = \"ko_KR\"",
        );
        assert_eq!(config.site.info.title, "Music Blog");
        assert_eq!(config.site.info.tagline, "음악 리뷰와 이야기");
        assert_eq!(config.site.info.keywords.len(), 2);
        assert_eq!(config.site.info.locale, "ko_KR");
    }

    #[test]
    fn test_default_title_with_tagline() {
        let mut info = SiteInfoConfig::default();
        info.title = "Music Blog".into();
        info.tagline = "음악 리뷰와 이야기".into();
        assert_eq!(info.default_title(), "Music Blog - 음악 리뷰와 이야기");
    }

    #[test]
    fn test_default_title_without_tagline() {
        let mut info = SiteInfoConfig::default();
        info.title = "Music Blog".into();
        assert_eq!(info.default_title(), "Music Blog");
    }

    #[test]
    fn test_page_title_template() {
        let mut info = SiteInfoConfig::default();
        info.title = "Music Blog".into();
        assert_eq!(info.page_title("소개"), "소개 | Music Blog");
    }

    #[test]
    fn test_validate_requires_title_and_description() {
        let info = SiteInfoConfig::default();
        let mut diag = ConfigDiagnostics::new();
        info.validate(&mut diag);
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_validate_rejects_bad_scheme() {
        let mut info = SiteInfoConfig::default();
        info.title = "t".into();
        info.description = "d".into();
        info.url = Some("ftp://example.com".into());

        let mut diag = ConfigDiagnostics::new();
        info.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("ftp"));
    }

    #[test]
    fn test_validate_accepts_http_and_https() {
        for url in ["http://localhost:3000", "https://music.example.com"] {
            let mut info = SiteInfoConfig::default();
            info.title = "t".into();
            info.description = "d".into();
            info.url = Some(url.into());

            let mut diag = ConfigDiagnostics::new();
            info.validate(&mut diag);
            assert!(diag.is_empty(), "{url} should validate");
        }
    }

    #[test]
    fn test_validate_rejects_invalid_url() {
        let mut info = SiteInfoConfig::default();
        info.title = "t".into();
        info.description = "d".into();
        info.url = Some("not a url".into());

        let mut diag = ConfigDiagnostics::new();
        info.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }
}
