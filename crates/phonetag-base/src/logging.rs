use log::{LevelFilter, Log, Metadata, Record};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// Writes every record to stdout.
pub struct StdoutLogger;

/// Appends records to `<dir>/<YYYY-MM-DD>.log`, switching files when the UTC date changes.
pub struct FileLogger {
    state: Mutex<FileLoggerState>,
}

struct FileLoggerState {
    dir: PathBuf,
    current_date: String,
    file: File,
}

fn open_day_file(dir: &Path, date: &str) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(format!("{date}.log")))
}

/// Renders a record as one line (without trailing newline).
pub fn format_record(record: &Record) -> String {
    format!(
        "{} [{}] [thread:{:?}] {}:{} - {}",
        format_timestamp(),
        record.level(),
        std::thread::current().id(),
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
        record.args()
    )
}

impl FileLogger {
    pub fn new(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;

        let current_date = format_today();
        let file = open_day_file(&dir, &current_date)?;

        Ok(FileLogger {
            state: Mutex::new(FileLoggerState {
                dir,
                current_date,
                file,
            }),
        })
    }

    /// Path of the file the next record will be written to.
    pub fn current_path(&self) -> PathBuf {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.dir.join(format!("{}.log", state.current_date))
    }
}

impl Log for StdoutLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        println!("{}", format_record(record));
    }

    fn flush(&self) {
        std::io::stdout().flush().ok();
    }
}

impl Log for FileLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());

        let today = format_today();
        if today != state.current_date {
            match open_day_file(&state.dir, &today) {
                Ok(file) => {
                    state.file = file;
                    state.current_date = today;
                }
                // keep writing to the previous day's file
                Err(e) => eprintln!("Failed to open log file for {today}: {e}"),
            }
        }

        let line = format_record(record);
        if let Err(e) = writeln!(state.file, "{line}") {
            eprintln!("Failed to write to log file: {e}");
            eprintln!("{line}");
        }
    }

    fn flush(&self) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.file.flush().ok();
    }
}

fn unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Format current time as YYYY-MM-DDTHH:MM:SS (UTC)
pub fn format_timestamp() -> String {
    let secs = unix_seconds();
    let (year, month, day) = civil_from_days((secs / 86400) as i64);
    let time_of_day = secs % 86400;

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
        year,
        month,
        day,
        time_of_day / 3600,
        (time_of_day % 3600) / 60,
        time_of_day % 60
    )
}

/// Format current date as YYYY-MM-DD (UTC)
pub fn format_today() -> String {
    let (year, month, day) = civil_from_days((unix_seconds() / 86400) as i64);
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Days since the Unix epoch to (year, month, day), Howard Hinnant's algorithm.
fn civil_from_days(z: i64) -> (i64, u32, u32) {
    let z = z + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    (y, m, d)
}

fn default_max_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install `StdoutLogger` as the global logger.
///
/// Only the first installation in a process takes effect; later calls are ignored.
pub fn init_stdout_logger() {
    static LOGGER: StdoutLogger = StdoutLogger;

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(default_max_level());
    }
}

/// Install a `FileLogger` writing into `dir` as the global logger.
///
/// Fails only if the directory or today's file cannot be created.
pub fn init_file_logger(dir: impl Into<PathBuf>) -> std::io::Result<()> {
    let logger = FileLogger::new(dir)?;

    // set_logger needs a &'static; the leak happens once per process
    if log::set_logger(Box::leak(Box::new(logger))).is_ok() {
        log::set_max_level(default_max_level());
    }

    Ok(())
}
