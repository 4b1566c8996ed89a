//! Logging setup for the wizard binary.
//!
//! The TUI owns the terminal (alternate screen, raw mode), so log lines go to
//! a file instead of stderr while the wizard runs. If the file cannot be
//! opened (permissions, readonly FS, etc.), fall back to stderr.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Log file location: `VC_ONBOARD_LOG` when set (tests use this), otherwise
/// `vc-onboard.log` in the system temp dir.
pub fn log_file_path() -> PathBuf {
    resolve_log_path(std::env::var_os("VC_ONBOARD_LOG"))
}

fn resolve_log_path(override_path: Option<OsString>) -> PathBuf {
    match override_path {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => std::env::temp_dir().join("vc-onboard.log"),
    }
}

fn open_log_file(path: &std::path::Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::OpenOptions::new().create(true).append(true).open(path)
}

pub fn init() {
    use env_logger::Target;

    let target = open_log_file(&log_file_path())
        .map(|file| Target::Pipe(Box::new(file)))
        .unwrap_or(Target::Stderr);

    env_logger::Builder::from_default_env()
        .target(target)
        .filter_level(log::LevelFilter::Info)
        .init();
}
