//! Verifier settings: defaults, then an optional JSON file, then flags.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use recovery_core::VerifierConfig;

use crate::args::Cli;

pub fn load(cli: &Cli) -> Result<VerifierConfig> {
    let mut config = match &cli.config {
        Some(path) => from_file(path)?,
        None => VerifierConfig::default(),
    };
    if let Some(limit) = cli.exhaustive_limit {
        config = config.with_exhaustive_limit(limit);
    }
    config.validate()?;
    Ok(config)
}

fn from_file(path: &Path) -> Result<VerifierConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn flag_overrides_default() {
        let cli = Cli::parse_from(["recover", "--exhaustive-limit", "7"]);
        assert_eq!(load(&cli).unwrap().exhaustive_limit, 7);
    }

    #[test]
    fn zero_limit_is_rejected() {
        let cli = Cli::parse_from(["recover", "--exhaustive-limit", "0"]);
        assert!(load(&cli).is_err());
    }

    #[test]
    fn missing_config_file_is_reported() {
        let cli = Cli::parse_from(["recover", "--config", "/nonexistent.json"]);
        let err = load(&cli).unwrap_err();
        assert!(err.to_string().contains("reading config"));
    }
}
