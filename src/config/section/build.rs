//! `[build]` section configuration.
//!
//! Output paths and toggles for the generated artifacts.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "public"       # Output directory (relative to project root)
//! static = "static"       # Directory copied verbatim into the output
//! minify = true           # Minify generated XML
//!
//! [build.sitemap]
//! enable = true
//! path = "sitemap.xml"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub struct BuildFields {
    pub output: FieldPath,
    pub static_dir: FieldPath,
    pub theme_color: FieldPath,
    pub background_color: FieldPath,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Enable sitemap generation
    pub enable: bool,
    /// Output path for sitemap file
    pub path: PathBuf,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "sitemap.xml".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotsConfig {
    /// Enable robots.txt generation
    pub enable: bool,
    /// Output path for robots file
    pub path: PathBuf,
}

impl Default for RobotsConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "robots.txt".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    /// Enable web manifest generation
    pub enable: bool,
    /// Theme color for light scheme
    pub theme_color: String,
    /// Manifest background color
    pub background_color: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            enable: true,
            theme_color: "#ffffff".into(),
            background_color: "#ffffff".into(),
        }
    }
}

/// Build settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Output directory, relative to the project root.
    pub output: PathBuf,

    /// Static files directory, copied verbatim into the output.
    #[serde(rename = "static")]
    pub static_dir: PathBuf,

    /// Minify generated XML output.
    pub minify: bool,

    /// Remove the output directory before building (CLI only).
    #[serde(skip)]
    pub clean: bool,

    /// Sitemap generation settings
    pub sitemap: SitemapConfig,

    /// robots.txt generation settings
    pub robots: RobotsConfig,

    /// Web manifest generation settings
    pub manifest: ManifestConfig,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            output: "public".into(),
            static_dir: "static".into(),
            minify: true,
            clean: false,
            sitemap: SitemapConfig::default(),
            robots: RobotsConfig::default(),
            manifest: ManifestConfig::default(),
        }
    }
}

impl BuildSectionConfig {
    pub const FIELDS: BuildFields = BuildFields {
        output: FieldPath::new("build.output"),
        static_dir: FieldPath::new("build.static"),
        theme_color: FieldPath::new("build.manifest.theme_color"),
        background_color: FieldPath::new("build.manifest.background_color"),
    };

    /// Pre-validate raw paths before normalization.
    ///
    /// Must run before paths are made absolute, otherwise user-specified
    /// absolute paths cannot be detected.
    pub fn validate_paths(&self, diag: &mut ConfigDiagnostics) {
        if self.output.is_absolute() {
            diag.error_with_hint(
                Self::FIELDS.output,
                format!("'{}' must be relative to the project root", self.output.display()),
                "use a relative path like \"public\"",
            );
        }
        if self.static_dir.is_absolute() {
            diag.error_with_hint(
                Self::FIELDS.static_dir,
                format!(
                    "'{}' must be relative to the project root",
                    self.static_dir.display()
                ),
                "use a relative path like \"static\"",
            );
        }
    }

    /// Validate manifest colors.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (value, field) in [
            (&self.manifest.theme_color, Self::FIELDS.theme_color),
            (&self.manifest.background_color, Self::FIELDS.background_color),
        ] {
            if !is_hex_color(value) {
                diag.error_with_hint(
                    field,
                    format!("'{}' is not a hex color", value),
                    "use format like \"#ffffff\"",
                );
            }
        }
    }
}

/// Check for a `#rgb` or `#rrggbb` hex color.
fn is_hex_color(s: &str) -> bool {
    let Some(digits) = s.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let build = BuildSectionConfig::default();
        assert_eq!(build.output, PathBuf::from("public"));
        assert_eq!(build.static_dir, PathBuf::from("static"));
        assert!(build.minify);
        assert!(build.sitemap.enable);
        assert!(build.robots.enable);
        assert!(build.manifest.enable);
        assert!(!build.clean);
    }

    #[test]
    fn test_parse_build_section() {
        let config = test_parse_config(
            "[build]\noutput = \"dist\"\nstatic = \"assets\"\nminify = false\n\
             [build.sitemap]\nenable = false",
        );
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert_eq!(config.build.static_dir, PathBuf::from("assets"));
        assert!(!config.build.minify);
        assert!(!config.build.sitemap.enable);
        // untouched sub-sections keep defaults
        assert!(config.build.robots.enable);
    }

    #[test]
    fn test_validate_paths_rejects_absolute_output() {
        let mut build = BuildSectionConfig::default();
        build.output = "/var/www".into();

        let mut diag = ConfigDiagnostics::new();
        build.validate_paths(&mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_is_hex_color() {
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#ffffff"));
        assert!(is_hex_color("#1A2b3C"));
        assert!(!is_hex_color("ffffff"));
        assert!(!is_hex_color("#ffff"));
        assert!(!is_hex_color("#gggggg"));
    }

    #[test]
    fn test_validate_rejects_bad_manifest_color() {
        let mut build = BuildSectionConfig::default();
        build.manifest.theme_color = "white".into();

        let mut diag = ConfigDiagnostics::new();
        build.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }
}
