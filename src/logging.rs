use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file for terminal mode.
pub const LOG_FILE_ENV: &str = "SECTIONFEED_LOG";

const DEFAULT_FILTER: &str = "info";

/// `RUST_LOG` when set and valid, `info` otherwise.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Log to stderr. Used by headless runs where stdout carries the output.
pub fn init_stderr_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();
}

/// Initialize tracing for terminal mode.
///
/// Disabled unless `SECTIONFEED_LOG` names a file; writing to the terminal
/// would corrupt the UI.
pub fn init_file_tracing() {
    let Some(base) = std::env::var_os(LOG_FILE_ENV) else {
        return;
    };

    let path = log_file_path(Path::new(&base), SystemTime::now(), std::process::id());
    let file = match open_log_file(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: Failed to create log file {}: {}", path.display(), err);
            return;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .init();
}

/// `<base>.<unix-seconds>.<pid>`, so concurrent instances get separate files.
pub fn log_file_path(base: &Path, now: SystemTime, pid: u32) -> PathBuf {
    let secs = now
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut name = base.as_os_str().to_owned();
    name.push(format!(".{}.{}", secs, pid));
    PathBuf::from(name)
}

/// Create the log file, including missing parent directories.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    File::create(path)
}
