//! Structured data (JSON-LD) for search engines.
//!
//! Emits a single schema.org `Blog` entity describing the site. Key order
//! is stable across renders (serde_json with `preserve_order`).

use crate::config::SiteConfig;
use serde_json::{Value, json};

/// Build the schema.org `Blog` entity for the site.
pub fn blog_entity(config: &SiteConfig) -> Value {
    let info = &config.site.info;
    let base = config.base_url();

    let mut publisher = json!({
        "@type": "Organization",
        "name": info.publisher,
    });
    if let Some(logo) = &info.logo {
        publisher["logo"] = json!({
            "@type": "ImageObject",
            "url": config.absolute_url(logo),
        });
    }

    json!({
        "@context": "https://schema.org",
        "@type": "Blog",
        "name": info.title,
        "description": info.description,
        "url": base,
        "author": {
            "@type": "Organization",
            "name": info.author,
        },
        "publisher": publisher,
        // BCP 47 tag ("ko-KR"), unlike the underscore OG locale
        "inLanguage": info.locale.replace('_', "-"),
    })
}

/// Render the embedded structured-data script tag.
pub fn render_script(config: &SiteConfig) -> String {
    format!(
        "<script type=\"application/ld+json\">{}</script>",
        blog_entity(config)
    )
}
