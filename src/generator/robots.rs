//! robots.txt generation.
//!
//! The site indexes fully (`robots: index, follow` in the head metadata),
//! so the generated file allows everything and points at the sitemap.

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result};

/// Build robots.txt if enabled.
pub fn build_robots(config: &SiteConfig) -> Result<()> {
    if !config.build.robots.enable {
        return Ok(());
    }

    let robots_path = config.build.output.join(&config.build.robots.path);
    let content = render_robots(config);

    std::fs::write(&robots_path, content)
        .with_context(|| format!("Failed to write robots to {}", robots_path.display()))?;

    log!("robots"; "{}", robots_path.file_name().unwrap_or_default().to_string_lossy());
    Ok(())
}

fn render_robots(config: &SiteConfig) -> String {
    let mut content = String::from("User-agent: *\nAllow: /\n");

    if config.build.sitemap.enable {
        let sitemap_route = format!(
            "/{}",
            config.build.sitemap.path.display().to_string().trim_start_matches('/')
        );
        content.push_str("\nSitemap: ");
        content.push_str(&config.absolute_url(&sitemap_route));
        content.push('\n');
    }

    content
}
