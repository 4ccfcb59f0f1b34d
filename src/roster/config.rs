use crate::error::{Result, RosterError};
use crate::model::DEFAULT_BONUS;
use crate::store::StoreOptions;
use crate::validation::ValidationMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Settings stored next to the data, in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RosterConfig {
    /// Amount a bonus adds when none is given explicitly
    #[serde(default = "default_bonus_amount")]
    pub bonus_amount: f64,

    /// Reject empty names/departments and negative salaries
    #[serde(default)]
    pub strict: bool,

    /// Start a brand new store with the sample employees
    #[serde(default = "default_seed_samples")]
    pub seed_samples: bool,
}

fn default_bonus_amount() -> f64 {
    DEFAULT_BONUS
}

fn default_seed_samples() -> bool {
    true
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            bonus_amount: default_bonus_amount(),
            strict: false,
            seed_samples: default_seed_samples(),
        }
    }
}

impl RosterConfig {
    pub const KEYS: [&'static str; 3] = ["bonus-amount", "strict", "seed-samples"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RosterError::Io)?;
        let config: RosterConfig =
            serde_json::from_str(&content).map_err(RosterError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RosterError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RosterError::Serialization)?;
        fs::write(config_path, content).map_err(RosterError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "bonus-amount" => Some(self.bonus_amount.to_string()),
            "strict" => Some(self.strict.to_string()),
            "seed-samples" => Some(self.seed_samples.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "bonus-amount" => {
                let amount: f64 = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("bonus-amount must be a number, got {}", value))?;
                if !amount.is_finite() || amount < 0.0 {
                    return Err(format!("bonus-amount cannot be negative, got {}", value));
                }
                self.bonus_amount = amount;
            }
            "strict" => self.strict = parse_bool(key, value)?,
            "seed-samples" => self.seed_samples = parse_bool(key, value)?,
            other => return Err(format!("Unknown config key: {}", other)),
        }
        Ok(())
    }

    pub fn validation_mode(&self) -> ValidationMode {
        if self.strict {
            ValidationMode::Strict
        } else {
            ValidationMode::Lenient
        }
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            seed_sample_data: self.seed_samples,
            mode: self.validation_mode(),
        }
    }
}

fn parse_bool(key: &str, value: &str) -> std::result::Result<bool, String> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(format!("{} must be true or false, got {}", key, value)),
    }
}
