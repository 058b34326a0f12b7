//! Document rendering.
//!
//! Assembles the full HTML document for a page: head metadata, structured
//! data, and the body chrome (skip link, header, main, footer) around the
//! page content. Rendering is pure - same config and page, same markup.

pub mod chrome;
pub mod head;
pub mod jsonld;

use crate::config::SiteConfig;
use crate::page::Page;

/// Render the complete HTML document for a page.
pub fn render_document(config: &SiteConfig, page: &Page) -> String {
    let info = &config.site.info;

    let mut doc = String::with_capacity(8192);

    doc.push_str("<!doctype html>\n<html lang=\"");
    doc.push_str(&crate::utils::html::escape_attr(&info.language));
    doc.push_str("\">\n<head>\n");
    doc.push_str(&head::render_head(config, page));
    doc.push_str(&jsonld::render_script(config));
    doc.push_str("\n</head>\n<body>\n");

    doc.push_str(&chrome::render_skip_link());
    doc.push_str("\n<div class=\"site-shell\">\n");
    doc.push_str(&chrome::render_header(config, page));
    doc.push_str("\n<main id=\"");
    doc.push_str(chrome::MAIN_CONTENT_ID);
    doc.push_str("\" class=\"site-main\">\n<div class=\"container\">\n");
    doc.push_str(&page.body(config));
    doc.push_str("\n</div>\n</main>\n");
    doc.push_str(&chrome::render_footer(config));
    doc.push_str("\n</div>\n</body>\n</html>\n");

    doc
}
