//! Configuration file schema and loading.

use std::fmt;
use std::path::{Path, PathBuf};

use concentra_core::types::{SECTOR_ALIASES, SYMBOL_ALIASES, VALUE_ALIASES};
use concentra_core::{
    AnalysisConfig, Analyzer, ColumnAliases, DEFAULT_SECTOR_LIMIT, DEFAULT_SINGLE_HOLDING_LIMIT,
    DEFAULT_TOP_HOLDINGS,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};

/// Largest accepted `top_holdings` value.
pub const MAX_TOP_HOLDINGS: usize = 100;

/// `[analysis]` section: limits and report sizing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisSection {
    /// Number of holdings listed in the report.
    pub top_holdings: usize,

    /// Single-holding limit as a fraction of total value.
    pub single_holding_limit: Decimal,

    /// Sector limit as a fraction of total value.
    pub sector_limit: Decimal,
}

impl Default for AnalysisSection {
    fn default() -> Self {
        Self {
            top_holdings: DEFAULT_TOP_HOLDINGS,
            single_holding_limit: DEFAULT_SINGLE_HOLDING_LIMIT,
            sector_limit: DEFAULT_SECTOR_LIMIT,
        }
    }
}

/// `[columns]` section: header aliases per column role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnsSection {
    /// Aliases for the symbol column.
    pub symbol: Vec<String>,

    /// Aliases for the value column.
    pub value: Vec<String>,

    /// Aliases for the sector column.
    pub sector: Vec<String>,
}

impl Default for ColumnsSection {
    fn default() -> Self {
        let owned = |a: &[&str]| a.iter().map(|s| (*s).to_string()).collect();
        Self {
            symbol: owned(SYMBOL_ALIASES),
            value: owned(VALUE_ALIASES),
            sector: owned(SECTOR_ALIASES),
        }
    }
}

/// Complete configuration file.
///
/// Every field has a default, so an empty file is a valid configuration.
///
/// ```toml
/// [analysis]
/// top_holdings = 5
/// single_holding_limit = 0.10
/// sector_limit = 0.25
///
/// [columns]
/// symbol = ["symbol", "ticker", "instrument"]
/// value = ["market value", "value", "amount", "current value"]
/// sector = ["sector", "industry", "category"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConcentraConfig {
    /// Limits and report sizing.
    pub analysis: AnalysisSection,

    /// Header aliases.
    pub columns: ColumnsSection,
}

/// Where a loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Built-in defaults; no file was read.
    Defaults,
    /// Read from this file.
    File(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Defaults => write!(f, "built-in defaults"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl ConcentraConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns a deserialization error for malformed TOML or unknown keys,
    /// and a validation error for out-of-range values.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if the file does not exist, plus the
    /// errors of [`ConcentraConfig::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        tracing::debug!(path = %path.display(), "loaded configuration file");
        Self::from_toml_str(&content)
    }

    /// Resolves the effective configuration.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// read if present and built-in defaults are used otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if a file is read and fails to parse or validate, or
    /// if an explicit path does not exist.
    pub fn load(explicit: Option<&Path>) -> ConfigResult<(Self, ConfigSource)> {
        if let Some(path) = explicit {
            return Ok((Self::from_file(path)?, ConfigSource::File(path.to_path_buf())));
        }

        match default_path() {
            Ok(path) if path.exists() => {
                let config = Self::from_file(&path)?;
                Ok((config, ConfigSource::File(path)))
            }
            Ok(_) | Err(ConfigError::NoConfigDir) => Ok((Self::default(), ConfigSource::Defaults)),
            Err(e) => Err(e),
        }
    }

    /// Encodes the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if encoding fails.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Writes the configuration to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, self.to_toml_string()?).map_err(io_err)
    }

    /// Analyzer limits derived from this configuration.
    #[must_use]
    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig::new()
            .with_top_holdings(self.analysis.top_holdings)
            .with_single_holding_limit(self.analysis.single_holding_limit)
            .with_sector_limit(self.analysis.sector_limit)
    }

    /// Column aliases derived from this configuration.
    #[must_use]
    pub fn column_aliases(&self) -> ColumnAliases {
        ColumnAliases {
            symbol: self.columns.symbol.clone(),
            value: self.columns.value.clone(),
            sector: self.columns.sector.clone(),
        }
    }

    /// An analyzer configured from this file.
    #[must_use]
    pub fn analyzer(&self) -> Analyzer {
        Analyzer::new()
            .with_config(self.analysis_config())
            .with_aliases(self.column_aliases())
    }
}

/// Default configuration file location: `<config dir>/concentra/config.toml`.
///
/// # Errors
///
/// Returns [`ConfigError::NoConfigDir`] if neither a config nor a home
/// directory can be determined.
pub fn default_path() -> ConfigResult<PathBuf> {
    let base = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or(ConfigError::NoConfigDir)?;
    Ok(base.join("concentra").join("config.toml"))
}

fn check_limit(errors: &mut Vec<ValidationError>, field: &str, limit: Decimal) {
    if limit <= Decimal::ZERO || limit > Decimal::ONE {
        errors.push(ValidationError::with_rule(
            field,
            format!("must be in (0, 1], got {limit}"),
            "fraction",
        ));
    }
}

fn check_aliases(errors: &mut Vec<ValidationError>, field: &str, aliases: &[String], required: bool) {
    if required && aliases.is_empty() {
        errors.push(ValidationError::with_rule(
            field,
            "at least one alias is required",
            "non_empty",
        ));
    }
    if aliases.iter().any(|a| a.trim().is_empty()) {
        errors.push(ValidationError::with_rule(
            field,
            "aliases must not be blank",
            "non_blank",
        ));
    }
}

impl Validate for ConcentraConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !(1..=MAX_TOP_HOLDINGS).contains(&self.analysis.top_holdings) {
            errors.push(ValidationError::with_rule(
                "analysis.top_holdings",
                format!(
                    "must be between 1 and {MAX_TOP_HOLDINGS}, got {}",
                    self.analysis.top_holdings
                ),
                "range",
            ));
        }
        check_limit(
            &mut errors,
            "analysis.single_holding_limit",
            self.analysis.single_holding_limit,
        );
        check_limit(&mut errors, "analysis.sector_limit", self.analysis.sector_limit);

        let roles = [
            ("columns.symbol", &self.columns.symbol, true),
            ("columns.value", &self.columns.value, true),
            ("columns.sector", &self.columns.sector, false),
        ];
        for (field, aliases, required) in roles {
            check_aliases(&mut errors, field, aliases, required);
        }

        for (i, (field_a, aliases_a, _)) in roles.iter().enumerate() {
            for (field_b, aliases_b, _) in &roles[i + 1..] {
                if let Some(shared) = aliases_a
                    .iter()
                    .find(|a| ColumnAliases::matches(aliases_b, a))
                {
                    errors.push(ValidationError::with_rule(
                        *field_b,
                        format!("alias '{shared}' is also listed in {field_a}"),
                        "distinct",
                    ));
                }
            }
        }

        errors
    }
}
