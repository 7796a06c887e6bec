use std::{env, fmt, path::PathBuf, str::FromStr};

/// Name of the process variable consulted by [`Mode::from_env`].
pub const MODE_VAR: &str = "MODE";
const DEVELOPMENT_MARKER: &str = "DEVELOPMENT";
const PRODUCTION_MARKER: &str = "PRODUCTION";

/// Runtime mode. Only `Development` lets debug records through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    Development,
    #[default]
    Production,
}

impl Mode {
    /// Read `MODE` from the process environment.
    ///
    /// Exactly `DEVELOPMENT` selects [`Mode::Development`]; anything else, unset included,
    /// is [`Mode::Production`].
    pub fn from_env() -> Self {
        match env::var(MODE_VAR) {
            Ok(value) => Self::from_marker(&value),
            Err(_) => Self::Production,
        }
    }

    fn from_marker(value: &str) -> Self {
        if value == DEVELOPMENT_MARKER {
            Self::Development
        } else {
            Self::Production
        }
    }

    pub fn is_development(self) -> bool {
        self == Self::Development
    }
}

/// Parses a user-supplied mode name (`development` / `production`, any case).
///
/// Unlike [`Mode::from_env`], unknown names are rejected.
impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            _ => Err(format!("unknown mode `{}`", s)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => f.write_str(DEVELOPMENT_MARKER),
            Self::Production => f.write_str(PRODUCTION_MARKER),
        }
    }
}

/// Where a [`Logger`](crate::Logger) writes, and how it gates debug records.
#[derive(Debug, Clone, Default)]
pub struct LoggerConfig {
    pub log_directory_path: PathBuf,
    pub log_name: String,
    pub mode: Mode,
}

impl LoggerConfig {
    pub fn new(log_directory_path: impl Into<PathBuf>, log_name: impl Into<String>) -> Self {
        Self {
            log_directory_path: log_directory_path.into(),
            log_name: log_name.into(),
            mode: Mode::default(),
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_marker_is_development() {
        assert_eq!(Mode::from_marker("DEVELOPMENT"), Mode::Development);
        assert_eq!(Mode::from_marker("development"), Mode::Production);
        assert_eq!(Mode::from_marker("DEVELOPMENT "), Mode::Production);
        assert_eq!(Mode::from_marker(""), Mode::Production);
    }

    // The only test in the crate that touches MODE.
    #[test]
    fn from_env_reads_mode_variable() {
        env::set_var(MODE_VAR, "DEVELOPMENT");
        assert_eq!(Mode::from_env(), Mode::Development);
        env::set_var(MODE_VAR, "STAGING");
        assert_eq!(Mode::from_env(), Mode::Production);
        env::remove_var(MODE_VAR);
        assert_eq!(Mode::from_env(), Mode::Production);
    }

    #[test]
    fn parse_accepts_names_in_any_case() {
        assert_eq!("Development".parse::<Mode>(), Ok(Mode::Development));
        assert_eq!("PRODUCTION".parse::<Mode>(), Ok(Mode::Production));
        assert!("staging".parse::<Mode>().is_err());
        assert_eq!(Mode::Development.to_string().parse::<Mode>(), Ok(Mode::Development));
    }

    #[test]
    fn config_defaults_to_production() {
        let config = LoggerConfig::new("/tmp/logs", "app.log");
        assert_eq!(config.mode, Mode::Production);
        assert_eq!(config.with_mode(Mode::Development).mode, Mode::Development);
    }
}
