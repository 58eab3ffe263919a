use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;

pub const DEFAULT_HISTORY_FILE: &str = "race_history.json";
pub const DEFAULT_LOG_FILE: &str = "program.log";
pub const DEFAULT_LOGGING_LEVEL: &str = "INFO";

/// # runtime settings
/// read from the environment, a `.env` file is loaded first when present.
///
/// | variable        | default             |
/// |-----------------|---------------------|
/// | `HISTORY_FILE`  | `race_history.json` |
/// | `LOGGING_LEVEL` | `INFO`              |
/// | `LOG_FILE`      | `program.log`       |
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub history_file: PathBuf,
    pub logging_level: String,
    pub log_file: PathBuf,
}

impl Settings {
    pub fn from_env() -> Settings {
        dotenv().ok();

        Settings::from_lookup(|key| env::var(key).ok())
    }

    /// build the settings from any key lookup, empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Settings
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Settings {
            history_file: PathBuf::from(get("HISTORY_FILE", DEFAULT_HISTORY_FILE)),
            logging_level: get("LOGGING_LEVEL", DEFAULT_LOGGING_LEVEL).to_uppercase(),
            log_file: PathBuf::from(get("LOG_FILE", DEFAULT_LOG_FILE)),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let settings = Settings::default();

        assert_eq!(settings.history_file, PathBuf::from("race_history.json"));
        assert_eq!(settings.logging_level, "INFO");
        assert_eq!(settings.log_file, PathBuf::from("program.log"));
    }

    #[test]
    fn reads_values_from_lookup() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("HISTORY_FILE", "/tmp/history.json"),
            ("LOGGING_LEVEL", "debug"),
            ("LOG_FILE", ""),
        ]);
        let settings = Settings::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(settings.history_file, PathBuf::from("/tmp/history.json"));
        assert_eq!(settings.logging_level, "DEBUG");
        assert_eq!(settings.log_file, PathBuf::from("program.log"));
    }
}
