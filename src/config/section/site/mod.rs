//! `[site]` configuration sections.
//!
//! - `[site.info]`   - site metadata (title, description, author, url)
//! - `[site.social]` - Open Graph / Twitter Card preview settings
//! - `[site.icons]`  - favicon and web-manifest references

mod icons;
mod info;
mod social;

pub use icons::IconsConfig;
pub use info::SiteInfoConfig;
pub use social::SocialConfig;

use serde::{Deserialize, Serialize};

/// Grouping struct for everything under `[site]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site metadata
    pub info: SiteInfoConfig,

    /// Social preview settings
    pub social: SocialConfig,

    /// Icon and manifest references
    pub icons: IconsConfig,
}
