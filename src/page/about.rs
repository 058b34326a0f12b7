//! About page (static content).

use super::Page;
use crate::config::SiteConfig;
use crate::embed::site::ABOUT_HTML;

pub const ABOUT: Page = Page {
    route: "/about/",
    title: "소개",
    nav_label: Some("소개"),
    description: None,
    body: render_body,
};

fn render_body(_config: &SiteConfig) -> String {
    ABOUT_HTML.to_string()
}
