//! User settings for AhorrApp
//!
//! Manages user preferences: the monthly budget limit used by the summary
//! statistics, display formats, and the week convention.

use serde::{Deserialize, Serialize};

use super::paths::AhorrPaths;
use crate::error::AhorrError;
use crate::models::Money;

/// User settings for AhorrApp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Monthly expense ceiling used for the budget-usage statistic
    #[serde(default = "default_budget_limit")]
    pub budget_limit: Money,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// First day of week (0 = Sunday, 1 = Monday)
    #[serde(default = "default_first_day_of_week")]
    pub first_day_of_week: u8,
}

fn default_schema_version() -> u32 {
    1
}

fn default_budget_limit() -> Money {
    Money::from_cents(200_000) // 2000.00
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

fn default_first_day_of_week() -> u8 {
    0 // Sunday
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            budget_limit: default_budget_limit(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            first_day_of_week: default_first_day_of_week(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if the file
    /// doesn't exist yet.
    pub fn load_or_create(paths: &AhorrPaths) -> Result<Self, AhorrError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| AhorrError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| AhorrError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            let settings = Settings::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AhorrPaths) -> Result<(), AhorrError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| AhorrError::Json(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| AhorrError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
