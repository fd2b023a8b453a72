use crate::repl::start_repl;
use anyhow::{anyhow, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

const PREFS_DB_FILE_NAME: &str = "calcpad_prefs.sqlite3";
const LOG_DIR_NAME: &str = "calcpad-logs";

#[derive(Parser, Debug)]
#[command(author, version, about = "Keyboard-driven calculator with session history", long_about = None)]
pub struct Args {
    /// Log level (trace|debug|info|warn|error); defaults by build mode
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Absolute directory for rotating log files
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// SQLite file holding the theme preference
    #[arg(short, long)]
    pub db_path: Option<PathBuf>,
}

pub fn run(args: Args) -> Result<()> {
    let level = args
        .log_level
        .unwrap_or_else(|| calcpad_core::default_log_level().to_string());
    let log_dir = args
        .log_dir
        .unwrap_or_else(|| std::env::temp_dir().join(LOG_DIR_NAME));
    eprintln!("{}", start_logging(&level, &log_dir)?);

    let db_path = args
        .db_path
        .unwrap_or_else(|| std::env::temp_dir().join(PREFS_DB_FILE_NAME));
    start_repl(db_path)
}

/// Starts core logging and describes where it writes.
fn start_logging(level: &str, log_dir: &Path) -> Result<String> {
    let log_dir_text = log_dir
        .to_str()
        .ok_or_else(|| anyhow!("log dir is not valid UTF-8: {}", log_dir.display()))?;
    calcpad_core::init_logging(level, log_dir_text).map_err(|err| anyhow!(err))?;

    let (active_level, active_dir) =
        calcpad_core::logging_status().ok_or_else(|| anyhow!("logging did not start"))?;
    Ok(format!(
        "logging {active_level} to {}",
        active_dir.display()
    ))
}

#[cfg(test)]
mod tests {
    use super::{start_logging, Args};
    use clap::Parser;

    #[test]
    fn start_logging_reports_active_config() {
        let dir = tempfile::tempdir().expect("temp dir");

        let status = start_logging("warn", dir.path()).expect("logging should start");
        assert_eq!(status, format!("logging warn to {}", dir.path().display()));
        assert!(start_logging("warn", std::path::Path::new("relative/logs")).is_err());
    }

    #[test]
    fn args_default_to_none() {
        let args = Args::parse_from(["calcpad"]);
        assert!(args.log_level.is_none());
        assert!(args.log_dir.is_none());
        assert!(args.db_path.is_none());
    }

    #[test]
    fn args_accept_overrides() {
        let args = Args::parse_from(["calcpad", "-l", "warn", "--db-path", "/tmp/prefs.db"]);
        assert_eq!(args.log_level.as_deref(), Some("warn"));
        assert_eq!(
            args.db_path.as_deref(),
            Some(std::path::Path::new("/tmp/prefs.db"))
        );
    }
}
