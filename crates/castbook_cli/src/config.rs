//! Startup configuration.
//!
//! Each setting resolves flag, then environment variable, then built-in
//! default. Blank values count as unset.

use castbook_core::default_log_level;
use clap::Parser;
use std::path::{Path, PathBuf};

const DEFAULT_DB_FILE_NAME: &str = "cast_management.db";
const DEFAULT_LOG_DIR_NAME: &str = "castbook-logs";

#[derive(Debug, Parser)]
#[command(name = "castbook", version, about = "Cross-store cast list in a terminal form")]
pub struct Cli {
    /// SQLite file holding the cast list.
    #[arg(long, env = "CASTBOOK_DB_PATH", value_name = "PATH")]
    pub db: Option<String>,

    /// Directory for rotated log files.
    #[arg(long, env = "CASTBOOK_LOG_DIR", value_name = "DIR")]
    pub log_dir: Option<String>,

    /// One of trace, debug, info, warn, error.
    #[arg(long, env = "CASTBOOK_LOG_LEVEL", value_name = "LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl Cli {
    /// Resolves defaults; relative paths are anchored at `cwd`.
    pub fn into_config(self, cwd: &Path) -> AppConfig {
        let db_path = non_blank(self.db)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE_NAME));
        let log_dir = non_blank(self.log_dir)
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME));
        let log_level =
            non_blank(self.log_level).unwrap_or_else(|| default_log_level().to_string());

        AppConfig {
            db_path: anchor(cwd, db_path),
            log_dir: anchor(cwd, log_dir),
            log_level,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

fn anchor(cwd: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;
    use std::path::Path;

    #[test]
    fn defaults_apply_when_nothing_is_given() {
        let cli = Cli {
            db: None,
            log_dir: Some("   ".to_string()),
            log_level: None,
        };
        let config = cli.into_config(Path::new("/work"));
        assert_eq!(config.db_path, Path::new("/work/cast_management.db"));
        assert!(config.log_dir.ends_with("castbook-logs"));
        assert!(config.log_dir.is_absolute());
        assert!(!config.log_level.is_empty());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "castbook",
            "--db",
            "data/casts.db",
            "--log-dir",
            "/var/log/castbook",
            "--log-level",
            "warn",
        ])
        .expect("flags should parse");
        let config = cli.into_config(Path::new("/work"));
        assert_eq!(config.db_path, Path::new("/work/data/casts.db"));
        assert_eq!(config.log_dir, Path::new("/var/log/castbook"));
        assert_eq!(config.log_level, "warn");
    }
}
