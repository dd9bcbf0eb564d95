/// CLI configuration
use crate::error::{CliError, Result};
use reel_storage::Catalogue;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Config file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "reel.toml";

/// Catalogue used when no catalogue path is configured
pub const SAMPLE_CATALOGUE: &str = include_str!("../data/videos.txt");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CliConfig {
    /// Catalogue file; the bundled sample is used when unset
    #[serde(default)]
    pub catalogue_path: Option<PathBuf>,

    /// `tracing` filter directives, overridden by `RUST_LOG`
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    #[serde(default = "default_prompt")]
    pub prompt: String,

    #[serde(default)]
    pub output: OutputFormat,
}

/// How command outcomes are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain status lines
    #[default]
    Text,
    /// One `{"ok":..,"lines":[..]}` object per outcome
    Json,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            catalogue_path: None,
            log_filter: default_log_filter(),
            prompt: default_prompt(),
            output: OutputFormat::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from file and environment
    ///
    /// `file` must exist when given. Otherwise `reel.toml` in the working
    /// directory is read if present. `REEL_`-prefixed environment variables
    /// override both.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        Self::load_with(file, config::Environment::with_prefix("REEL"))
    }

    /// Load with an explicit environment source
    pub fn load_with(file: Option<&Path>, environment: config::Environment) -> Result<Self> {
        let mut settings = config::Config::builder();

        match file {
            Some(path) => {
                settings = settings.add_source(config::File::from(path).required(true));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(environment.try_parsing(true));

        let config = settings.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if let Err(e) = EnvFilter::try_new(&self.log_filter) {
            return Err(CliError::Config(format!(
                "invalid log filter {:?}: {}",
                self.log_filter, e
            )));
        }

        if let Some(path) = &self.catalogue_path {
            if !path.is_file() {
                return Err(CliError::Config(format!(
                    "Catalogue not found at {:?}",
                    path
                )));
            }
        }

        if self.prompt.contains('\n') {
            return Err(CliError::Config(
                "prompt must fit on one line".to_string(),
            ));
        }

        Ok(())
    }

    /// Load the configured catalogue, or the bundled sample
    pub fn load_catalogue(&self) -> Result<Catalogue> {
        let catalogue = match &self.catalogue_path {
            Some(path) => Catalogue::load(path)?,
            None => {
                tracing::info!("no catalogue configured, using the bundled sample");
                Catalogue::from_reader(SAMPLE_CATALOGUE.as_bytes())?
            }
        };
        Ok(catalogue)
    }
}

// Default values
fn default_log_filter() -> String {
    "warn,reel=info,reel_cli=info".to_string()
}

fn default_prompt() -> String {
    "REEL> ".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = CliConfig::default();
        assert_eq!(config.output, OutputFormat::Text);
        assert!(config.catalogue_path.is_none());
        config.validate().unwrap();
    }

    #[test]
    fn bundled_sample_loads() {
        let catalogue = CliConfig::default().load_catalogue().unwrap();
        assert_eq!(catalogue.len(), 5);
    }

    #[test]
    fn bad_filter_is_rejected() {
        let config = CliConfig {
            log_filter: "reel=loud".to_string(),
            ..CliConfig::default()
        };
        assert!(matches!(config.validate(), Err(CliError::Config(_))));
    }

    #[test]
    fn multi_line_prompt_is_rejected() {
        let config = CliConfig {
            prompt: "a\nb".to_string(),
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
