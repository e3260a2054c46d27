use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Repository-local configuration file picked up from the working directory
const REPO_CONFIG: &str = "wordfreq.toml";

const ENV_PREFIX: &str = "WORDFREQ_";

/// Fully resolved configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordfreqConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub statistics: StatisticsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Directory holding the text files
    pub directory: PathBuf,
    /// File name suffix, without the leading dot
    pub extension: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving the report files (created if absent)
    pub directory: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsConfig {
    /// Length of the ranked most-common list
    pub top_n: usize,
    /// Chunks used by the chunk-then-merge computation
    pub chunks: usize,
}

/// Values given on the command line; `None` leaves the merged value alone
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub top_n: Option<usize>,
}

impl ConfigOverrides {
    /// Scalar overrides, merged as the last figment layer
    fn to_value(&self) -> serde_json::Value {
        let mut root = serde_json::Map::new();
        if let Some(top_n) = self.top_n {
            root.insert("statistics".into(), serde_json::json!({ "top_n": top_n }));
        }
        serde_json::Value::Object(root)
    }

    /// Path overrides bypass serialization so non-UTF-8 paths are kept as given
    fn apply_paths(&self, config: &mut WordfreqConfig) {
        if let Some(input) = &self.input {
            config.input.directory = input.clone();
        }
        if let Some(output) = &self.output {
            config.output.directory = output.clone();
        }
    }
}

impl WordfreqConfig {
    /// Load the built-in defaults only
    pub fn defaults() -> Result<Self> {
        Figment::new()
            .merge(Toml::string(DEFAULT_CONFIG))
            .extract::<Self>()
            .context("Embedded default configuration is invalid")?
            .validated()
    }

    /// Load configuration from every layer, lowest priority first:
    /// embedded defaults, `wordfreq.toml` or the custom file, `WORDFREQ_`
    /// environment variables, then CLI overrides.
    pub fn load(custom_config: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self> {
        tracing::trace!("CONFIG LOAD: Starting");

        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        figment = match custom_config {
            Some(path) => {
                if !path.exists() {
                    tracing::warn!(
                        "Config file {} not found, using defaults",
                        path.display()
                    );
                }
                Self::merge_file(figment, path)
            }
            None => figment.merge(Toml::file(REPO_CONFIG)),
        };

        let figment = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(Serialized::defaults(overrides.to_value()));

        let mut config: Self = figment
            .extract()
            .context("Failed to parse configuration")?;
        overrides.apply_paths(&mut config);

        tracing::trace!("CONFIG LOAD: Final config = {:?}", config);
        config.validated()
    }

    /// Merge a config file, choosing the format from its extension
    fn merge_file(figment: Figment, path: &Path) -> Figment {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => figment.merge(Json::file(path)),
            Some("yaml") | Some("yml") => figment.merge(Yaml::file(path)),
            _ => figment.merge(Toml::file(path)),
        }
    }

    fn validated(mut self) -> Result<Self> {
        self.input.extension = self.input.extension.trim_start_matches('.').to_string();

        if self.input.extension.is_empty() {
            anyhow::bail!("input.extension must not be empty");
        }
        if self.statistics.top_n == 0 {
            anyhow::bail!("statistics.top_n must be at least 1");
        }
        if self.statistics.chunks == 0 {
            anyhow::bail!("statistics.chunks must be at least 1");
        }
        Ok(self)
    }
}
