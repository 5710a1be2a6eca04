use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::scanner::BracePair;

/// Resolved configuration for one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSettings {
    /// File to scan.
    pub target_path: PathBuf,
    /// Delimiter pair to balance.
    pub pair: BracePair,
}

/// Values supplied on the command line; these win over every other layer.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub target_path: Option<PathBuf>,
    pub pair: Option<BracePair>,
}

/// What the config file and environment layers provide before overrides apply.
#[derive(Debug, Default, Deserialize)]
struct LayeredSettings {
    #[serde(default)]
    target_path: Option<PathBuf>,
    #[serde(default)]
    pair: Option<BracePair>,
}

impl ScanSettings {
    const ENV_PREFIX: &'static str = "BRACE_BALANCE";

    /// Resolve settings from, in increasing precedence:
    ///
    /// * an optional config file (format picked from its extension),
    /// * `BRACE_BALANCE_TARGET_PATH` / `BRACE_BALANCE_PAIR`,
    /// * command-line overrides.
    ///
    /// Overrides are applied after the other layers are resolved, so a
    /// command-line path reaches the scanner byte for byte.
    pub fn load(config_file: Option<&Path>, overrides: SettingsOverrides) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder = builder.add_source(Environment::with_prefix(Self::ENV_PREFIX));

        let config = builder.build().with_context(|| match config_file {
            Some(path) => format!("failed to load settings from {}", path.display()),
            None => "failed to load settings".to_string(),
        })?;
        let layered: LayeredSettings = config
            .try_deserialize()
            .context("invalid `pair` setting (expected curly, paren, square or angle)")?;

        let target_path = overrides
            .target_path
            .or(layered.target_path)
            .context(
                "no target path configured (pass a PATH argument or set BRACE_BALANCE_TARGET_PATH)",
            )?;
        let pair = overrides.pair.or(layered.pair).unwrap_or_default();

        Ok(Self { target_path, pair })
    }
}
