#![doc = include_str!("../README.md")]

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use unic_langid::{LanguageIdentifier, LanguageIdentifierError};

/// Default custom block tag, as in `<fluent locale="en">`.
pub const DEFAULT_BLOCK_TYPE: &str = "fluent";

/// Conventional name of the options file.
pub const CONFIG_FILE_NAME: &str = "fluent-vue.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("configuration file not found at {0}")]
    NotFound(PathBuf),
    /// Failed to read configuration file.
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse a TOML configuration file.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Failed to parse options handed over as JSON.
    #[error("Failed to parse plugin options: {0}")]
    JsonError(#[from] serde_json::Error),
    /// `blockType` was set to an empty string.
    #[error("blockType must not be empty")]
    EmptyBlockType,
    /// A locale in `external.locales` is not a valid language identifier.
    #[error("Invalid locale '{name}' in external.locales")]
    InvalidLocale {
        /// The invalid identifier.
        name: String,
        /// The parsing error produced by `unic-langid`.
        #[source]
        source: LanguageIdentifierError,
    },
    /// An extra anchor row has an empty anchor or target.
    #[error("extraAnchors entry #{index} must have a non-empty anchor and target")]
    EmptyAnchor {
        /// Position of the offending row.
        index: usize,
    },
}

/// Settings for injecting translations from `.ftl` files that live next to,
/// rather than inside, the components.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalConfig {
    /// Root used to compute each component's relative path.
    pub base_dir: PathBuf,
    /// Root of the per-locale resource trees.
    /// Expected structure: {ftl_dir}/{locale}/{relative component path}.ftl
    pub ftl_dir: PathBuf,
    /// Locales to probe, in injection order.
    pub locales: IndexSet<String>,
    /// Report locales without a resource file as warnings instead of skipping
    /// them silently.
    #[serde(default)]
    pub warn_missing: bool,
}

impl ExternalConfig {
    /// Creates a config with `warn_missing` off.
    pub fn new<I, S>(base_dir: impl Into<PathBuf>, ftl_dir: impl Into<PathBuf>, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            base_dir: base_dir.into(),
            ftl_dir: ftl_dir.into(),
            locales: locales.into_iter().map(Into::into).collect(),
            warn_missing: false,
        }
    }

    /// Joins relative directories onto `root`. Absolute ones are kept.
    pub fn resolve_relative_to(&mut self, root: &Path) {
        if self.base_dir.is_relative() {
            self.base_dir = root.join(&self.base_dir);
        }
        if self.ftl_dir.is_relative() {
            self.ftl_dir = root.join(&self.ftl_dir);
        }
    }

    /// Returns the locales parsed as language identifiers.
    pub fn language_identifiers(&self) -> Result<Vec<LanguageIdentifier>, ConfigError> {
        self.locales
            .iter()
            .map(|name| {
                name.parse::<LanguageIdentifier>()
                    .map_err(|source| ConfigError::InvalidLocale {
                        name: name.clone(),
                        source,
                    })
            })
            .collect()
    }
}

/// An additional insertion anchor for compiler output shapes the built-in
/// table does not know about.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AnchorConfig {
    /// Literal text that marks the insertion point.
    pub anchor: String,
    /// Expression naming the component options object at that point.
    pub target: String,
}

/// Plugin options.
///
/// Without `external` the plugin works on inline custom blocks; with it, the
/// plugin injects `.ftl` files into compiled `.vue` modules instead.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginOptions {
    /// Custom block tag to pick up.
    #[serde(default = "default_block_type")]
    pub block_type: String,
    /// External `.ftl` mode settings.
    #[serde(default)]
    pub external: Option<ExternalConfig>,
    /// Reject resources that contain Fluent syntax errors. Off by default, in
    /// which case junk is left for `FluentResource` to skip at runtime.
    #[serde(default)]
    pub check_syntax: bool,
    /// Appended after the built-in insertion anchors.
    #[serde(default)]
    pub extra_anchors: Vec<AnchorConfig>,
}

fn default_block_type() -> String {
    DEFAULT_BLOCK_TYPE.to_string()
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self {
            block_type: default_block_type(),
            external: None,
            check_syntax: false,
            extra_anchors: Vec::new(),
        }
    }
}

impl PluginOptions {
    /// Options for external mode with everything else at its default.
    pub fn external(config: ExternalConfig) -> Self {
        Self {
            external: Some(config),
            ..Self::default()
        }
    }

    /// Reads the options from a TOML file.
    ///
    /// Relative directories under `[external]` are resolved against the
    /// directory containing the file.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs_err::read_to_string(path)?;
        let mut options: PluginOptions = toml::from_str(&content)?;

        if let Some(external) = options.external.as_mut() {
            let root = path.parent().unwrap_or_else(|| Path::new("."));
            external.resolve_relative_to(root);
        }

        options.validate()?;
        Ok(options)
    }

    /// Reads `fluent-vue.toml` from a project directory.
    pub fn from_project_dir(project_dir: &Path) -> Result<Self, ConfigError> {
        Self::read_from_path(project_dir.join(CONFIG_FILE_NAME))
    }

    /// Parses options passed by the host as JSON. Paths are taken as given.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let options: PluginOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Checks the invariants the injector relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.block_type.is_empty() {
            return Err(ConfigError::EmptyBlockType);
        }

        if let Some(external) = &self.external {
            external.language_identifiers()?;
        }

        for (index, row) in self.extra_anchors.iter().enumerate() {
            if row.anchor.is_empty() || row.target.is_empty() {
                return Err(ConfigError::EmptyAnchor { index });
            }
        }

        Ok(())
    }
}
