use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, OnceLock};

struct Logger {
    warp: Mutex<File>,
    error: Mutex<File>,
}

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Opens the append-only log files under `<root>/log`. Safe to call more
/// than once; later calls are no-ops.
pub fn init(root: &Path) -> Result<(), String> {
    if LOGGER.get().is_some() {
        return Ok(());
    }
    let log_dir = root.join("log");
    std::fs::create_dir_all(&log_dir)
        .map_err(|err| format!("log directory create failed: {}", err))?;
    let warp = open_log(&log_dir, "warp.log")?;
    let error = open_log(&log_dir, "error.log")?;
    LOGGER
        .set(Logger {
            warp: Mutex::new(warp),
            error: Mutex::new(error),
        })
        .map_err(|_| "log system already initialized".to_string())?;
    Ok(())
}

/// Audit line for a warp operation. No-op before `init`.
pub fn log_warp(message: &str) {
    if let Some(logger) = LOGGER.get() {
        write_line(&logger.warp, message);
    }
}

/// Error line, e.g. a skipped record during load. No-op before `init`.
pub fn log_error(message: &str) {
    if let Some(logger) = LOGGER.get() {
        write_line(&logger.error, message);
    }
}

fn open_log(dir: &Path, name: &str) -> Result<File, String> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(name))
        .map_err(|err| format!("open log {} failed: {}", name, err))
}

fn write_line(file: &Mutex<File>, message: &str) {
    let line = format!("{} {}\n", format_timestamp(), message);
    if let Ok(mut file) = file.lock() {
        let _ = file.write_all(line.as_bytes());
        let _ = file.flush();
    }
}

fn format_timestamp() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0);
    let days = secs / 86_400;
    let seconds_of_day = (secs % 86_400) as u32;
    let (year, month, day) = civil_from_days(days);
    format!(
        "{:02}.{:02}.{} {:02}:{:02}:{:02}",
        day,
        month,
        year,
        seconds_of_day / 3_600,
        (seconds_of_day % 3_600) / 60,
        seconds_of_day % 60
    )
}

// Gregorian date from days since the Unix epoch.
fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (mp + if mp < 10 { 3 } else { -9 }) as u32;
    let year = (yoe + era * 400 + i64::from(month <= 2)) as i32;
    (year, month, day)
}
