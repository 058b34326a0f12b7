//! Document head assembly.
//!
//! Emits the metadata block for a page: charset/viewport, title (default or
//! `page | site` template), description/keywords/author, robots directives,
//! canonical link, Open Graph and Twitter Card tags, icon and manifest
//! links, and the font stylesheet links.

use crate::config::SiteConfig;
use crate::embed::site::STYLESHEET_NAME;
use crate::page::Page;
use crate::utils::html::escape_attr;

/// Google Fonts origins, preconnected before the stylesheet request.
const FONT_ORIGINS: [&str; 2] = ["https://fonts.googleapis.com", "https://fonts.gstatic.com"];

/// Inter + Noto Sans KR, swapped in to avoid invisible text during load.
const FONT_STYLESHEET: &str = "https://fonts.googleapis.com/css2\
    ?family=Inter:wght@400;500;600;700\
    &family=Noto+Sans+KR:wght@300;400;500;700\
    &display=swap";

/// Render the `<head>` metadata block for a page.
///
/// The JSON-LD script is appended separately by the document renderer.
pub fn render_head(config: &SiteConfig, page: &Page) -> String {
    let info = &config.site.info;
    let social = &config.site.social;
    let icons = &config.site.icons;

    let title = page.document_title(info);
    let description = page.description_or(info);
    let canonical = config.absolute_url(page.route);

    let mut head = String::with_capacity(4096);

    head.push_str("<meta charset=\"utf-8\">\n");
    head.push_str("<title>");
    head.push_str(&escape_attr(&title));
    head.push_str("</title>\n");
    push_meta(
        &mut head,
        "viewport",
        "width=device-width, initial-scale=1, maximum-scale=5",
    );
    head.push_str("<meta name=\"theme-color\" media=\"(prefers-color-scheme: light)\" content=\"white\">\n");
    head.push_str("<meta name=\"theme-color\" media=\"(prefers-color-scheme: dark)\" content=\"black\">\n");

    push_meta(&mut head, "description", description);
    if !info.keywords.is_empty() {
        push_meta(&mut head, "keywords", &info.keywords.join(", "));
    }
    if !info.author.is_empty() {
        push_meta(&mut head, "author", &info.author);
    }
    if !info.publisher.is_empty() {
        push_meta(&mut head, "publisher", &info.publisher);
    }
    push_meta(&mut head, "robots", "index, follow");
    push_meta(
        &mut head,
        "googlebot",
        "index, follow, max-video-preview:-1, max-image-preview:large, max-snippet:-1",
    );
    push_meta(
        &mut head,
        "format-detection",
        "telephone=no, address=no, email=no",
    );

    push_link(&mut head, "canonical", &canonical);

    // Open Graph
    push_property(&mut head, "og:type", "website");
    push_property(&mut head, "og:locale", &info.locale);
    push_property(&mut head, "og:url", &canonical);
    push_property(&mut head, "og:site_name", &info.title);
    push_property(&mut head, "og:title", &title);
    push_property(&mut head, "og:description", description);
    if !social.og_image.is_empty() {
        let image = config.absolute_url(&social.og_image);
        push_property(&mut head, "og:image", &image);
        push_property(&mut head, "og:image:width", &social.og_image_width.to_string());
        push_property(&mut head, "og:image:height", &social.og_image_height.to_string());
        if !social.og_image_alt.is_empty() {
            push_property(&mut head, "og:image:alt", &social.og_image_alt);
        }
    }

    // Twitter Card
    push_meta(&mut head, "twitter:card", &social.twitter_card);
    push_meta(&mut head, "twitter:title", &title);
    push_meta(&mut head, "twitter:description", description);
    if !social.og_image.is_empty() {
        push_meta(&mut head, "twitter:image", &config.absolute_url(&social.og_image));
    }
    if !social.twitter_creator.is_empty() {
        push_meta(&mut head, "twitter:creator", &social.twitter_creator);
    }

    // Icons and manifest
    push_link(&mut head, "icon", &icons.favicon);
    push_link(&mut head, "shortcut icon", &icons.shortcut);
    push_link(&mut head, "apple-touch-icon", &icons.apple_touch);
    push_link(&mut head, "manifest", &icons.manifest);

    // Fonts and stylesheet
    for origin in FONT_ORIGINS {
        head.push_str("<link rel=\"preconnect\" href=\"");
        head.push_str(origin);
        if origin.contains("gstatic") {
            head.push_str("\" crossorigin>\n");
        } else {
            head.push_str("\">\n");
        }
    }
    push_link(&mut head, "stylesheet", FONT_STYLESHEET);
    head.push_str("<link rel=\"stylesheet\" href=\"/");
    head.push_str(STYLESHEET_NAME);
    head.push_str("\">\n");

    head
}

/// Push a `<meta name=...>` tag.
fn push_meta(head: &mut String, name: &str, content: &str) {
    head.push_str("<meta name=\"");
    head.push_str(name);
    head.push_str("\" content=\"");
    head.push_str(&escape_attr(content));
    head.push_str("\">\n");
}

/// Push a `<meta property=...>` tag (Open Graph vocabulary).
fn push_property(head: &mut String, property: &str, content: &str) {
    head.push_str("<meta property=\"");
    head.push_str(property);
    head.push_str("\" content=\"");
    head.push_str(&escape_attr(content));
    head.push_str("\">\n");
}

/// Push a `<link rel=...>` tag.
fn push_link(head: &mut String, rel: &str, href: &str) {
    head.push_str("<link rel=\"");
    head.push_str(rel);
    head.push_str("\" href=\"");
    head.push_str(&escape_attr(href));
    head.push_str("\">\n");
}
