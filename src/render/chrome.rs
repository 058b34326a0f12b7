//! Layout chrome: skip link, header, footer.

use crate::config::SiteConfig;
use crate::page::{PAGES, Page};
use crate::utils::html::{escape, escape_attr};

/// Skip link target, also the `<main>` element id.
pub const MAIN_CONTENT_ID: &str = "main-content";

/// Render the accessibility skip link (first element in the body).
pub fn render_skip_link() -> String {
    format!(
        "<a class=\"skip-link\" href=\"#{}\">메인 콘텐츠로 건너뛰기</a>",
        MAIN_CONTENT_ID
    )
}

/// Render the site header with navigation derived from the page registry.
pub fn render_header(config: &SiteConfig, active: &Page) -> String {
    let mut header = String::with_capacity(512);

    header.push_str("<header class=\"site-header\">\n<div class=\"container\">\n");
    header.push_str("<a class=\"site-title\" href=\"/\">");
    header.push_str(&escape(&config.site.info.title));
    header.push_str("</a>\n<nav class=\"site-nav\" aria-label=\"주 메뉴\">\n");

    for page in PAGES {
        let Some(label) = page.nav_label else {
            continue;
        };
        header.push_str("<a href=\"");
        header.push_str(&escape_attr(page.route));
        if page.route == active.route {
            header.push_str("\" aria-current=\"page");
        }
        header.push_str("\">");
        header.push_str(&escape(label));
        header.push_str("</a>\n");
    }

    header.push_str("</nav>\n</div>\n</header>");
    header
}

/// Render the site footer.
pub fn render_footer(config: &SiteConfig) -> String {
    let info = &config.site.info;
    let notice = if info.copyright.is_empty() {
        &info.title
    } else {
        &info.copyright
    };

    format!(
        "<footer class=\"site-footer\">\n<div class=\"container\">\n<p>{}</p>\n</div>\n</footer>",
        escape(notice)
    )
}
