use crate::cli::Cli;
use crate::output::OutputFormat;
use crate::paths;
use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use gcrslicer_core::{ResolverOptions, SUPPORTED_READ_EXTENSIONS};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix of environment variables that override configuration values
pub const ENV_PREFIX: &str = "GCRSLICER_";

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct DiscoveryConfig {
    /// Accepted extensions; empty accepts every file
    pub extensions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_dir: Option<PathBuf>,
    pub follow_links: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_enabled: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            extensions: SUPPORTED_READ_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            root_dir: None,
            follow_links: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color_enabled: true,
        }
    }
}

impl AppConfig {
    /// Apply CLI argument overrides to the configuration
    pub fn apply_cli_overrides(&mut self, cli: &Cli) {
        if cli.all_files {
            self.discovery.extensions.clear();
        } else if !cli.extensions.is_empty() {
            self.discovery.extensions = cli.extensions.clone();
        }
        if let Some(root_dir) = &cli.root_dir {
            self.discovery.root_dir = Some(root_dir.clone());
        }
        if let Some(format) = cli.format {
            self.output.format = format;
        }
    }

    /// Resolver options described by the discovery section
    pub fn resolver_options(&self) -> ResolverOptions {
        let options = ResolverOptions::new()
            .with_extensions(self.discovery.extensions.iter().cloned())
            .with_follow_links(self.discovery.follow_links);

        match &self.discovery.root_dir {
            Some(root_dir) => options.with_root_dir(root_dir),
            None => options,
        }
    }
}

/// Configuration manager that handles XDG-compliant paths and layered configuration
pub struct ConfigManager {
    config_path: PathBuf,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    /// Create a new ConfigManager with default XDG-compliant paths
    pub fn new() -> Self {
        Self {
            config_path: paths::get_config_path(),
        }
    }

    /// Create a ConfigManager reading a specific file
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the configuration file path
    pub fn get_config_path(&self) -> PathBuf {
        self.config_path.clone()
    }

    /// Load configuration with layered priority: ENV > File > Defaults
    ///
    /// CLI flags are applied on top by [`AppConfig::apply_cli_overrides`].
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new();

        // Layer 1: Defaults
        figment = figment.merge(Serialized::defaults(AppConfig::default()));

        // Layer 2: Config file (if exists)
        if self.config_path.exists() {
            log::debug!("Loading configuration from {}", self.config_path.display());
            figment = figment.merge(Toml::file(&self.config_path));
        }

        // Layer 3: Environment variables
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().context("Failed to load configuration")
    }
}
