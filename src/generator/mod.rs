//! Generators for auxiliary site artifacts.
//!
//! Generates files the document head and crawlers expect next to the pages:
//!
//! - **Sitemap**: search engine indexing (`sitemap.xml`)
//! - **Robots**: crawler directives (`robots.txt`)
//! - **Manifest**: web app manifest (`site.webmanifest`)
//!
//! All generators read the static page registry and the loaded config;
//! nothing is scanned from disk.

pub mod manifest;
pub mod robots;
pub mod sitemap;

use std::borrow::Cow;

/// Minify XML content if enabled.
pub fn minify_xml(content: &[u8], enabled: bool) -> Cow<'_, [u8]> {
    if enabled {
        let xml_str = std::str::from_utf8(content).unwrap_or("");
        let minified = xml_str
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("");
        Cow::Owned(minified.into_bytes())
    } else {
        Cow::Borrowed(content)
    }
}
