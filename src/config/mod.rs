//! Site configuration management for `museblog.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build] and sub-sections
//! │   ├── serve      # [serve]
//! │   └── site/      # [site.info], [site.social], [site.icons]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section         | Purpose                                       |
//! |-----------------|-----------------------------------------------|
//! | `[site.info]`   | Site metadata (title, description, author)    |
//! | `[site.social]` | Open Graph / Twitter Card preview settings    |
//! | `[site.icons]`  | Favicon and web-manifest references           |
//! | `[build]`       | Output paths, sitemap/robots/manifest toggles |
//! | `[serve]`       | Local preview server (port, interface)        |

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

// Re-export from section/
pub use section::{
    BuildSectionConfig, IconsConfig, ManifestConfig, RobotsConfig, ServeConfig, SiteInfoConfig,
    SiteSectionConfig, SitemapConfig, SocialConfig,
};

// Re-export from types/
pub use types::{ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config};

use crate::{
    cli::{BuildArgs, Cli, Commands},
    log,
};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Environment variable consulted for the site base URL.
pub const SITE_URL_ENV: &str = "MUSEBLOG_SITE_URL";

/// Base URL used when neither CLI, environment, nor config provide one.
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing museblog.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// CLI arguments reference (internal use only)
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site configuration (info, social, icons)
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildSectionConfig,

    /// Local preview server settings
    #[serde(default)]
    pub serve: ServeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            cli: None,
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            site: SiteSectionConfig::default(),
            build: BuildSectionConfig::default(),
            serve: ServeConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file. The project root is
    /// determined by the config file's parent directory.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        if !exists {
            log!(
                "error";
                "Config file '{}' not found in this directory or any parent.",
                cli.config.display()
            );
            std::process::exit(1);
        }

        let mut config = Self::from_path(&config_path)?;

        // Validate raw paths before normalization
        config.validate_paths()?;

        // Set paths and apply CLI options
        config.config_path = config_path;
        config.cli = Some(cli);
        config.finalize(cli);

        config.validate()?;

        Ok(config)
    }

    /// Resolve config file path by searching upward from cwd.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir()?;
        match find_config_file(&cli.config) {
            Some(path) => Ok((path, true)),
            None => Ok((cwd.join(&cli.config), false)),
        }
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        let root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        self.set_root(&root);
        self.normalize_paths(&root);
        self.apply_command_options(cli);
        self.resolve_base_url(cli);
    }

    /// Resolve the site base URL once, with the documented precedence:
    /// CLI `--site-url` > `MUSEBLOG_SITE_URL` environment > config file.
    ///
    /// In serve mode an unset URL falls back to the bound address so local
    /// previews get working absolute links; everywhere else the hard-coded
    /// default applies at read time via [`SiteConfig::base_url`].
    fn resolve_base_url(&mut self, cli: &Cli) {
        let (Commands::Build { build_args } | Commands::Serve { build_args, .. }) = &cli.command;

        let env_url = std::env::var(SITE_URL_ENV).ok();
        if let Some(url) = pick_base_url(
            build_args.site_url.as_deref(),
            env_url.as_deref(),
            self.site.info.url.as_deref(),
        ) {
            self.site.info.url = Some(url);
        } else if matches!(cli.command, Commands::Serve { .. }) {
            self.site.info.url = Some(format!(
                "http://{}:{}",
                self.serve.interface, self.serve.port
            ));
        }
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if !Self::prompt_continue()? {
                bail!("Aborted due to unknown config fields");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, Write};

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        // Default no (empty input), explicit "y" or "yes" to continue
        Ok(input == "y" || input == "yes")
    }

    // ========================================================================
    // accessors
    // ========================================================================

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Resolved base URL, without trailing slash.
    ///
    /// Falls back to the local placeholder when nothing was configured.
    pub fn base_url(&self) -> &str {
        self.site.info.url.as_deref().unwrap_or(DEFAULT_SITE_URL)
    }

    /// Absolute URL for a site-absolute path or page route.
    pub fn absolute_url(&self, route: &str) -> String {
        format!("{}{}", self.base_url(), route)
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Build { build_args } => {
                self.apply_build_args(build_args);
            }
            Commands::Serve {
                build_args,
                interface,
                port,
            } => {
                self.apply_build_args(build_args);
                Self::update_option(&mut self.serve.interface, interface.as_ref());
                Self::update_option(&mut self.serve.port, port.as_ref());
            }
        }
    }

    /// Apply build arguments from CLI.
    fn apply_build_args(&mut self, args: &BuildArgs) {
        // Set verbose mode globally
        crate::logger::set_verbose(args.verbose);

        Self::update_option(&mut self.build.minify, args.minify.as_ref());
        self.build.clean = args.clean;
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Normalize all paths relative to root directory.
    fn normalize_paths(&mut self, root: &Path) {
        let root = crate::utils::path::normalize_path(root);
        self.set_root(&root);

        self.config_path = crate::utils::path::normalize_path(&self.config_path);
        self.build.output = crate::utils::path::normalize_path(&root.join(&self.build.output));
        self.build.static_dir =
            crate::utils::path::normalize_path(&root.join(&self.build.static_dir));
        // Note: sitemap.path and robots.path are kept as relative filenames,
        // resolved against build.output at write time.
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Pre-validate paths before normalization.
    ///
    /// This must be called before `finalize()` because path normalization
    /// converts relative paths to absolute paths, making it impossible to
    /// detect if the user specified an absolute path in the config.
    fn validate_paths(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();
        self.build.validate_paths(&mut diag);
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        if !self.config_path.exists() {
            bail!(ConfigError::Validation("config file not found".into()));
        }

        self.site.info.validate(&mut diag);
        self.site.social.validate(&mut diag);
        self.site.icons.validate(&mut diag);
        self.build.validate(&mut diag);

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

/// First set, non-empty value wins: CLI flag, then environment, then config.
/// Trailing slashes are stripped so route joining stays uniform.
fn pick_base_url(cli: Option<&str>, env: Option<&str>, config: Option<&str>) -> Option<String> {
    [cli, env, config]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|u| !u.is_empty())
        .map(|u| u.trim_end_matches('/').to_string())
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_parse_config`)
// ============================================================================

/// Parse a config snippet, panicking on unknown fields (catches typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result: Result<SiteConfig, _> = toml::from_str("[site\ntitle = \"My Blog\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert!(config.cli.is_none());
        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.site.info.title, "");
        assert!(config.build.minify);
        assert_eq!(config.serve.port, 3000);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site.info]\ntitle = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.info.title, "Test");
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site.info]\ntitle = \"Test\"\ndescription = \"Test\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_base_url_default() {
        let config = SiteConfig::default();
        assert_eq!(config.base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_absolute_url_joins_route() {
        let mut config = SiteConfig::default();
        config.site.info.url = Some("https://music.example.com".into());
        assert_eq!(
            config.absolute_url("/about/"),
            "https://music.example.com/about/"
        );
    }

    #[test]
    fn test_pick_base_url_precedence() {
        // CLI beats environment beats config
        assert_eq!(
            pick_base_url(Some("https://cli.example"), Some("https://env.example"), Some("https://cfg.example")),
            Some("https://cli.example".to_string())
        );
        assert_eq!(
            pick_base_url(None, Some("https://env.example"), Some("https://cfg.example")),
            Some("https://env.example".to_string())
        );
        assert_eq!(
            pick_base_url(None, None, Some("https://cfg.example")),
            Some("https://cfg.example".to_string())
        );
        assert_eq!(pick_base_url(None, None, None), None);
    }

    #[test]
    fn test_pick_base_url_skips_empty_and_trims_slash() {
        // Empty environment values are treated as unset
        assert_eq!(
            pick_base_url(None, Some(""), Some("https://cfg.example/")),
            Some("https://cfg.example".to_string())
        );
    }
}
