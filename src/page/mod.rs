//! Static page registry.
//!
//! The site's pages are code: each page contributes a route, document
//! metadata, and a body renderer. The registry drives page rendering, the
//! header navigation, and the sitemap.

mod about;
mod home;

pub use about::ABOUT;
pub use home::HOME;

use crate::config::{SiteConfig, SiteInfoConfig};

/// A single site page.
pub struct Page {
    /// Route with leading and trailing slash (`/`, `/about/`).
    pub route: &'static str,

    /// Short page name, fed through the `page | site` title template.
    pub title: &'static str,

    /// Label shown in the header navigation, if any.
    pub nav_label: Option<&'static str>,

    /// Page-specific meta description. Falls back to the site description.
    pub description: Option<&'static str>,

    /// Body renderer.
    body: fn(&SiteConfig) -> String,
}

impl Page {
    /// Render the page body markup.
    pub fn body(&self, config: &SiteConfig) -> String {
        (self.body)(config)
    }

    /// The home page uses the default site title instead of the template.
    pub fn is_home(&self) -> bool {
        self.route == "/"
    }

    /// Document title for this page.
    pub fn document_title(&self, info: &SiteInfoConfig) -> String {
        if self.is_home() {
            info.default_title()
        } else {
            info.page_title(self.title)
        }
    }

    /// Meta description for this page.
    pub fn description_or<'a>(&self, info: &'a SiteInfoConfig) -> &'a str {
        match self.description {
            Some(desc) => desc,
            None => &info.description,
        }
    }
}

/// All registered pages, in navigation order.
pub static PAGES: &[Page] = &[HOME, ABOUT];

#[cfg(test)]
mod tests {
    use super::*;

    fn info() -> SiteInfoConfig {
        let mut info = SiteInfoConfig::default();
        info.title = "Music Blog".into();
        info.tagline = "음악 리뷰와 이야기".into();
        info.description = "사이트 설명".into();
        info
    }

    #[test]
    fn test_routes_are_well_formed() {
        for page in PAGES {
            assert!(page.route.starts_with('/'), "{} missing leading /", page.route);
            assert!(page.route.ends_with('/'), "{} missing trailing /", page.route);
        }
    }

    #[test]
    fn test_routes_are_unique() {
        let mut routes: Vec<_> = PAGES.iter().map(|p| p.route).collect();
        routes.sort_unstable();
        routes.dedup();
        assert_eq!(routes.len(), PAGES.len());
    }

    #[test]
    fn test_home_is_registered_first() {
        assert!(PAGES[0].is_home());
    }

    #[test]
    fn test_document_title_home_vs_subpage() {
        let info = info();
        assert_eq!(HOME.document_title(&info), "Music Blog - 음악 리뷰와 이야기");
        assert_eq!(ABOUT.document_title(&info), "소개 | Music Blog");
    }

    #[test]
    fn test_description_fallback() {
        let info = info();
        // About inherits the site description (the source page declares none)
        assert_eq!(ABOUT.description_or(&info), "사이트 설명");
    }

    #[test]
    fn test_about_body_contains_welcome_heading() {
        let config = SiteConfig::default();
        let body = ABOUT.body(&config);
        assert!(body.contains("Music Blog에 오신 것을 환영합니다!"));
        assert!(body.contains("다양한 음악 이야기를 만나보세요"));
        assert!(body.contains("🎶 음악과 함께하는 블로그"));
    }
}
