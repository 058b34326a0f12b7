//! Site building orchestration.
//!
//! Build phases:
//! - **Init** - clean/create output dir, write embedded stylesheet
//! - **Render** - render every registered page in parallel
//! - **Static** - copy the static directory verbatim into the output

use crate::{
    config::SiteConfig,
    embed, log,
    page::{PAGES, Page},
    render::render_document,
};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Build the entire site into the output directory.
///
/// Returns the number of rendered pages.
pub fn build_site(config: &SiteConfig) -> Result<usize> {
    init_build(config)?;

    PAGES
        .par_iter()
        .try_for_each(|page| write_page(config, page))?;

    let copied = copy_static_dir(config)?;

    log!(
        "build";
        "{} pages, {} static files -> {}",
        PAGES.len(),
        copied,
        config.build.output.display()
    );

    Ok(PAGES.len())
}

/// Initialize build environment: output directory + embedded assets.
fn init_build(config: &SiteConfig) -> Result<()> {
    let output = &config.build.output;

    if config.build.clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clean {}", output.display()))?;
    }

    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;

    embed::site::write_embedded_assets(output)
}

/// Render a page and write it as `<route>/index.html`.
fn write_page(config: &SiteConfig, page: &Page) -> Result<()> {
    let html = render_document(config, page);
    let path = output_path(&config.build.output, page.route);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))?;

    crate::debug!("build"; "{} -> {}", page.route, path.display());
    Ok(())
}

/// Map a page route to its output file.
///
/// `/` -> `index.html`, `/about/` -> `about/index.html`
fn output_path(output: &Path, route: &str) -> PathBuf {
    let rel = route.trim_matches('/');
    if rel.is_empty() {
        output.join("index.html")
    } else {
        output.join(rel).join("index.html")
    }
}

/// Copy the static directory verbatim into the output.
///
/// Missing static directory is fine - icons and images are optional.
fn copy_static_dir(config: &SiteConfig) -> Result<usize> {
    let static_dir = &config.build.static_dir;
    if !static_dir.is_dir() {
        return Ok(0);
    }
    copy_dir_recursive(static_dir, &config.build.output)
}

/// Recursively copy a directory, returning the number of files copied.
fn copy_dir_recursive(from: &Path, to: &Path) -> Result<usize> {
    let mut copied = 0;

    for entry in fs::read_dir(from).with_context(|| format!("Failed to read {}", from.display()))? {
        let entry = entry?;
        let source = entry.path();
        let target = to.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("Failed to create {}", target.display()))?;
            copied += copy_dir_recursive(&source, &target)?;
        } else {
            fs::copy(&source, &target)
                .with_context(|| format!("Failed to copy {}", source.display()))?;
            copied += 1;
        }
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(output_root: &Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.site.info.title = "Music Blog".into();
        config.site.info.tagline = "음악 리뷰와 이야기".into();
        config.site.info.description = "desc".into();
        config.build.output = output_root.join("public");
        config.build.static_dir = output_root.join("static");
        config
    }

    #[test]
    fn test_output_path_mapping() {
        let output = Path::new("/site/public");
        assert_eq!(output_path(output, "/"), PathBuf::from("/site/public/index.html"));
        assert_eq!(
            output_path(output, "/about/"),
            PathBuf::from("/site/public/about/index.html")
        );
    }

    #[test]
    fn test_build_site_writes_pages_and_stylesheet() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());

        let pages = build_site(&config).unwrap();
        assert_eq!(pages, PAGES.len());

        let index = fs::read_to_string(config.build.output.join("index.html")).unwrap();
        assert!(index.contains("<html lang="));

        let about = fs::read_to_string(config.build.output.join("about/index.html")).unwrap();
        assert!(about.contains("Music Blog에 오신 것을 환영합니다!"));

        assert!(config.build.output.join("site.css").is_file());
    }

    #[test]
    fn test_build_site_copies_static_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());

        let images = config.build.static_dir.join("images");
        fs::create_dir_all(&images).unwrap();
        fs::write(config.build.static_dir.join("favicon.ico"), b"icon").unwrap();
        fs::write(images.join("og-image.jpg"), b"jpg").unwrap();

        build_site(&config).unwrap();

        assert!(config.build.output.join("favicon.ico").is_file());
        assert!(config.build.output.join("images/og-image.jpg").is_file());
    }

    #[test]
    fn test_clean_removes_stale_output() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config(dir.path());

        fs::create_dir_all(&config.build.output).unwrap();
        let stale = config.build.output.join("stale.html");
        fs::write(&stale, "old").unwrap();

        config.build.clean = true;
        build_site(&config).unwrap();

        assert!(!stale.exists());
        assert!(config.build.output.join("index.html").is_file());
    }

    #[test]
    fn test_rebuild_without_clean_keeps_extra_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());

        build_site(&config).unwrap();
        let extra = config.build.output.join("extra.txt");
        fs::write(&extra, "keep me").unwrap();

        build_site(&config).unwrap();
        assert!(extra.exists());
    }
}
