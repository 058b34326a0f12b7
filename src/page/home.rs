//! Home page.

use super::Page;
use crate::config::SiteConfig;
use crate::embed::site::{HOME_HTML, HomeVars};

pub const HOME: Page = Page {
    route: "/",
    title: "홈",
    nav_label: Some("홈"),
    description: None,
    body: render_body,
};

fn render_body(config: &SiteConfig) -> String {
    let info = &config.site.info;
    HOME_HTML.render(&HomeVars {
        title: &info.title,
        tagline: &info.tagline,
        description: &info.description,
    })
}
