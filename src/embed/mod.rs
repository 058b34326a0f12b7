//! Embedded static resources.
//!
//! - `template` - Template types for typed variable injection
//! - `site` - Embedded page bodies and the site stylesheet
//!
//! Page bodies live in `site/*.html` and are compiled in via `include_str!`;
//! the stylesheet is written into the output directory at build time.

mod template;

pub use template::{Template, TemplateVars};

pub mod site {
    use super::{Template, TemplateVars};
    use crate::utils::html::escape;
    use anyhow::{Context, Result};
    use std::path::Path;

    /// Filename of the stylesheet in the output directory.
    pub const STYLESHEET_NAME: &str = "site.css";

    /// Site stylesheet, written to the output at build time.
    pub const SITE_CSS: &str = include_str!("site/site.css");

    /// About page body (static content).
    pub const ABOUT_HTML: &str = include_str!("site/about.html");

    /// Variables for the home page body.
    pub struct HomeVars<'a> {
        pub title: &'a str,
        pub tagline: &'a str,
        pub description: &'a str,
    }

    impl TemplateVars for HomeVars<'_> {
        fn apply(&self, content: &str) -> String {
            content
                .replace("__TITLE__", &escape(self.title))
                .replace("__TAGLINE__", &escape(self.tagline))
                .replace("__DESCRIPTION__", &escape(self.description))
        }
    }

    /// Home page body template.
    pub const HOME_HTML: Template<HomeVars<'static>> =
        Template::new(include_str!("site/home.html"));

    /// Write embedded assets into the output directory.
    pub fn write_embedded_assets(output_dir: &Path) -> Result<()> {
        let css_path = output_dir.join(STYLESHEET_NAME);
        std::fs::write(&css_path, SITE_CSS)
            .with_context(|| format!("Failed to write {}", css_path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::site::{ABOUT_HTML, HOME_HTML, HomeVars};

    #[test]
    fn test_about_body_is_static() {
        assert!(ABOUT_HTML.contains("Music Blog에 오신 것을 환영합니다!"));
        assert!(!ABOUT_HTML.contains("__"));
    }

    #[test]
    fn test_home_template_injects_vars() {
        let body = HOME_HTML.render(&HomeVars {
            title: "Music Blog",
            tagline: "음악 리뷰와 이야기",
            description: "테스트 설명",
        });
        assert!(body.contains("Music Blog"));
        assert!(body.contains("음악 리뷰와 이야기"));
        assert!(body.contains("테스트 설명"));
        assert!(!body.contains("__TITLE__"));
    }

    #[test]
    fn test_home_template_escapes_vars() {
        let body = HOME_HTML.render(&HomeVars {
            title: "A & B",
            tagline: "<tag>",
            description: "ok",
        });
        assert!(body.contains("A &amp; B"));
        assert!(body.contains("&lt;tag&gt;"));
    }
}
