//! Configuration section definitions.

pub mod build;
pub mod serve;
pub mod site;

pub use build::{BuildSectionConfig, ManifestConfig, RobotsConfig, SitemapConfig};
pub use serve::ServeConfig;
pub use site::{IconsConfig, SiteInfoConfig, SiteSectionConfig, SocialConfig};
