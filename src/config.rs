use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub plans: PlansConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlansConfig {
    /// JSON document holding the meal plan snapshot
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScheduleConfig {
    /// Upper bound for the number of weeks in a rotation
    #[serde(default = "default_max_weeks")]
    pub max_weeks: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            max_weeks: default_max_weeks(),
        }
    }
}

fn default_max_weeks() -> u32 {
    mealwheel_mealplan::DEFAULT_MAX_WEEKS
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MEALWHEEL__PLANS__PATH, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("plans.path", "meal_plans.json")?
            .set_default("schedule.max_weeks", i64::from(default_max_weeks()))?
            .set_default("observability.log_level", default_log_level())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // The config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEALWHEEL")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.plans.path.trim().is_empty() {
            return Err("Meal plans path must not be empty".to_string());
        }
        if self.schedule.max_weeks < 1 {
            return Err("Schedule max_weeks must be at least 1".to_string());
        }
        if self.schedule.max_weeks > mealwheel_mealplan::MAX_WEEK {
            return Err(format!(
                "Schedule max_weeks must not exceed {}",
                mealwheel_mealplan::MAX_WEEK
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use temp_dir::TempDir;

    fn config(path: &str, max_weeks: u32) -> Config {
        Config {
            plans: PlansConfig {
                path: path.to_string(),
            },
            schedule: ScheduleConfig { max_weeks },
            observability: ObservabilityConfig::default(),
        }
    }

    #[test]
    fn test_load_defaults_without_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.child("missing.toml");

        let config = Config::load(Some(missing.to_string_lossy().into_owned())).unwrap();

        assert_eq!(config.plans.path, "meal_plans.json");
        assert_eq!(config.schedule.max_weeks, 12);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.child("mealwheel.toml");
        std::fs::write(
            &path,
            "[plans]\npath = \"/srv/plans.json\"\n\n[schedule]\nmax_weeks = 8\n",
        )
        .unwrap();

        let config = Config::load(Some(path.to_string_lossy().into_owned())).unwrap();

        assert_eq!(config.plans.path, "/srv/plans.json");
        assert_eq!(config.schedule.max_weeks, 8);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_validation_empty_plans_path() {
        assert!(config("  ", 12).validate().is_err());
    }

    #[test]
    fn test_validation_zero_max_weeks() {
        assert!(config("plans.json", 0).validate().is_err());
    }

    #[test]
    fn test_validation_max_weeks_beyond_encoding() {
        assert!(config("plans.json", 8000).validate().is_err());
        assert!(config("plans.json", 12).validate().is_ok());
    }
}
