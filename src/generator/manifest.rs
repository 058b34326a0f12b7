//! Web app manifest generation.
//!
//! The head links `/site.webmanifest`; this generator writes it from the
//! configured site metadata and icon references.

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result};
use serde_json::{Value, json};

/// Build site.webmanifest if enabled.
pub fn build_manifest(config: &SiteConfig) -> Result<()> {
    if !config.build.manifest.enable {
        return Ok(());
    }

    let filename = config.site.icons.manifest.trim_start_matches('/');
    let manifest_path = config.build.output.join(filename);

    let manifest = render_manifest(config);
    let content = if config.build.minify {
        manifest.to_string()
    } else {
        serde_json::to_string_pretty(&manifest)?
    };

    std::fs::write(&manifest_path, content)
        .with_context(|| format!("Failed to write manifest to {}", manifest_path.display()))?;

    log!("manifest"; "{}", filename);
    Ok(())
}

fn render_manifest(config: &SiteConfig) -> Value {
    let info = &config.site.info;
    let icons = &config.site.icons;

    json!({
        "name": info.default_title(),
        "short_name": info.title,
        "description": info.description,
        "lang": info.language,
        "start_url": "/",
        "display": "standalone",
        "theme_color": config.build.manifest.theme_color,
        "background_color": config.build.manifest.background_color,
        "icons": [
            {
                "src": icons.shortcut,
                "sizes": "16x16",
                "type": "image/png",
            },
            {
                "src": icons.apple_touch,
                "sizes": "180x180",
                "type": "image/png",
            },
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.site.info.title = "Music Blog".into();
        config.site.info.tagline = "음악 리뷰와 이야기".into();
        config.site.info.description = "desc".into();
        config.site.info.language = "ko".into();
        config
    }

    #[test]
    fn test_manifest_names() {
        let manifest = render_manifest(&config());
        assert_eq!(manifest["name"], "Music Blog - 음악 리뷰와 이야기");
        assert_eq!(manifest["short_name"], "Music Blog");
        assert_eq!(manifest["lang"], "ko");
        assert_eq!(manifest["start_url"], "/");
    }

    #[test]
    fn test_manifest_icons_follow_config() {
        let manifest = render_manifest(&config());
        let icons = manifest["icons"].as_array().unwrap();
        assert_eq!(icons.len(), 2);
        assert_eq!(icons[0]["src"], "/favicon-16x16.png");
        assert_eq!(icons[1]["src"], "/apple-touch-icon.png");
        assert_eq!(icons[1]["sizes"], "180x180");
    }

    #[test]
    fn test_manifest_colors() {
        let mut config = config();
        config.build.manifest.theme_color = "#111111".into();

        let manifest = render_manifest(&config);
        assert_eq!(manifest["theme_color"], "#111111");
        assert_eq!(manifest["background_color"], "#ffffff");
    }

    #[test]
    fn test_manifest_round_trips_as_json() {
        let rendered = render_manifest(&config()).to_string();
        let parsed: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["short_name"], "Music Blog");
    }
}
