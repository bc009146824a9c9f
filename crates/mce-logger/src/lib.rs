//! Console and log-file output for the mce CLI
//!
//! Every message is appended to `~/.config/mce/mce.log` (truncated per run).
//! Console output goes to stderr so that stdout stays free for machine
//! readable output such as export maps and bundle configs.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

static LOG_FILE: Mutex<Option<PathBuf>> = Mutex::new(None);
static VERBOSITY: Mutex<u8> = Mutex::new(0);
static SPINNER: Mutex<Option<ProgressBar>> = Mutex::new(None);

const LOG_FILE_NAME: &str = "mce.log";

/// Get the current verbosity level
pub fn get_verbosity() -> u8 {
    VERBOSITY.lock().ok().map_or(0, |v| *v)
}

/// Map the verbosity level to a `tracing` filter directive
/// 0 = warn only, 1 = debug (-v), 2 = trace (-vv)
pub fn verbosity_to_filter() -> &'static str {
    match get_verbosity() {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Initialize the logger with a verbosity level
pub fn init_with_verbosity(verbosity: u8) -> Result<(), String> {
    if let Ok(mut v) = VERBOSITY.lock() {
        *v = verbosity;
    }

    init()
}

fn init() -> Result<(), String> {
    let config_dir = get_config_dir()?;
    fs::create_dir_all(&config_dir)
        .map_err(|e| format!("Failed to create config directory: {}", e))?;

    let log_file = config_dir.join(LOG_FILE_NAME);

    // Truncate log file on each run (overwrite instead of append)
    if log_file.exists() {
        let _ = fs::remove_file(&log_file);
    }

    let mut guard = LOG_FILE
        .lock()
        .map_err(|_| "Log file lock poisoned".to_string())?;
    *guard = Some(log_file);

    Ok(())
}

fn get_config_dir() -> Result<PathBuf, String> {
    #[cfg(not(target_os = "windows"))]
    let config_dir = dirs::home_dir()
        .ok_or("Could not determine home directory")?
        .join(".config")
        .join("mce");

    #[cfg(target_os = "windows")]
    let config_dir = dirs::config_dir()
        .ok_or("Could not determine config directory")?
        .join("mce");

    Ok(config_dir)
}

fn write_to_log(message: &str) {
    if let Ok(guard) = LOG_FILE.lock() {
        if let Some(ref log_path) = *guard {
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(log_path) {
                let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
                let _ = writeln!(file, "[{}] {}", timestamp, message);
            }
        }
    }
}

/// Log a debug message (to console if verbose >= 1, always to file)
pub fn debug(message: &str) {
    write_to_log(&format!("DEBUG {}", message));
    if get_verbosity() >= 1 {
        eprintln!("{} {}", "DEBUG:".blue().bold(), message);
    }
}

/// Log a warning message (to both file and console)
pub fn warn(message: &str) {
    write_to_log(&format!("WARN {}", message));
    eprintln!("{} {}", "warning:".yellow().bold(), message);
}

/// Log an error message (to both file and console)
pub fn error(message: &str) {
    write_to_log(&format!("ERROR {}", message));
    eprintln!("{} {}", "\u{274c}".red().bold(), message);
}

/// Log a success message
pub fn success(message: &str) {
    write_to_log(&format!("SUCCESS {}", message));
    eprintln!("{} {}", "\u{2705}".green().bold(), message);
}

/// Log a step message (shown on console at -vv)
pub fn step(message: &str) {
    if get_verbosity() >= 2 {
        eprintln!("TRACE: {}", message);
    }
    write_to_log(&format!("STEP: {}", message));
}

fn get_log_path() -> Option<PathBuf> {
    LOG_FILE.lock().ok().and_then(|guard| guard.clone())
}

/// Point the user at the log file, after a failure
pub fn show_log_path() {
    if let Some(path) = get_log_path() {
        eprintln!("Log file: {}", path.display());
    } else if let Ok(config_dir) = get_config_dir() {
        eprintln!("Log file: {}", config_dir.join(LOG_FILE_NAME).display());
    } else {
        eprintln!("Log file location not available");
    }
}

/// Start a spinner with the given message (only if not verbose)
pub fn spinner_start(message: &str) {
    if get_verbosity() > 0 {
        return;
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.cyan} {msg}")
    {
        spinner.set_style(style);
    }
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(message.to_string());

    if let Ok(mut guard) = SPINNER.lock() {
        *guard = Some(spinner);
    }
}

/// Stop the spinner without any message
pub fn spinner_stop() {
    if let Ok(mut guard) = SPINNER.lock() {
        if let Some(spinner) = guard.take() {
            spinner.finish_and_clear();
        }
    }
}

/// Stop the spinner with an error message
pub fn spinner_error(message: &str) {
    spinner_stop();
    error(message);
}
