//! `[site.icons]` configuration (favicon and manifest references).

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

pub struct IconsFields {
    pub favicon: FieldPath,
    pub shortcut: FieldPath,
    pub apple_touch: FieldPath,
    pub manifest: FieldPath,
}

/// Icon link references emitted into the document head.
///
/// All paths are site-absolute. The binaries themselves live in the
/// static directory; the manifest file is generated at build time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IconsConfig {
    /// Classic favicon.
    pub favicon: String,

    /// Shortcut icon (small PNG).
    pub shortcut: String,

    /// Apple touch icon.
    pub apple_touch: String,

    /// Web app manifest reference.
    pub manifest: String,
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            favicon: "/favicon.ico".into(),
            shortcut: "/favicon-16x16.png".into(),
            apple_touch: "/apple-touch-icon.png".into(),
            manifest: "/site.webmanifest".into(),
        }
    }
}

impl IconsConfig {
    pub const FIELDS: IconsFields = IconsFields {
        favicon: FieldPath::new("site.icons.favicon"),
        shortcut: FieldPath::new("site.icons.shortcut"),
        apple_touch: FieldPath::new("site.icons.apple_touch"),
        manifest: FieldPath::new("site.icons.manifest"),
    };

    /// Validate that every configured reference is site-absolute.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let entries = [
            (&self.favicon, Self::FIELDS.favicon),
            (&self.shortcut, Self::FIELDS.shortcut),
            (&self.apple_touch, Self::FIELDS.apple_touch),
            (&self.manifest, Self::FIELDS.manifest),
        ];
        for (value, field) in entries {
            if !value.is_empty() && !value.starts_with('/') {
                diag.error_with_hint(
                    field,
                    format!("'{}' is not site-absolute", value),
                    "use a leading slash, e.g. \"/favicon.ico\"",
                );
            }
        }
    }
}
