//! Cooperative configuration management.

use serde::Deserialize;

/// Cooperative configuration.
///
/// Loaded once by the embedding application and handed to the period
/// service; the engine itself never reads files or the environment.
#[derive(Debug, Clone, Deserialize)]
pub struct CoopConfig {
    /// Cooperative identity.
    #[serde(default)]
    pub cooperative: CooperativeConfig,
    /// Journal description texts.
    #[serde(default)]
    pub journal: JournalConfig,
}

/// Cooperative identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CooperativeConfig {
    /// Registered cooperative name, used in audit descriptions.
    #[serde(default = "default_name")]
    pub name: String,
}

/// Description texts used when posting engine-generated journals.
#[derive(Debug, Clone, Deserialize)]
pub struct JournalConfig {
    /// Description for the opening-balance journal.
    #[serde(default = "default_opening_description")]
    pub opening_description: String,
    /// Description for correction journals.
    #[serde(default = "default_correction_description")]
    pub correction_description: String,
}

fn default_name() -> String {
    "Koperasi".to_string()
}

fn default_opening_description() -> String {
    "Saldo awal periode".to_string()
}

fn default_correction_description() -> String {
    "Jurnal koreksi saldo awal".to_string()
}

impl Default for CooperativeConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
        }
    }
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            opening_description: default_opening_description(),
            correction_description: default_correction_description(),
        }
    }
}

impl Default for CoopConfig {
    fn default() -> Self {
        Self {
            cooperative: CooperativeConfig::default(),
            journal: JournalConfig::default(),
        }
    }
}

impl CoopConfig {
    /// Loads configuration from config files and the environment.
    ///
    /// Sources, later ones overriding earlier ones:
    /// 1. `config/default.toml` (optional)
    /// 2. `config/{RUN_MODE}.toml` (optional)
    /// 3. `ARTHA__`-prefixed environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or deserialized.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("ARTHA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
