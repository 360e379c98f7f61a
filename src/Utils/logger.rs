use chrono::Local;
use simplelog::*;
use std::fs::File;

/// level names accepted on the command line: debug, info, warn, error, trace, off/none
pub fn parse_log_level(level: &str) -> Result<LevelFilter, String> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(LevelFilter::Trace),
        "debug" => Ok(LevelFilter::Debug),
        "info" => Ok(LevelFilter::Info),
        "warn" => Ok(LevelFilter::Warn),
        "error" => Ok(LevelFilter::Error),
        "off" | "none" => Ok(LevelFilter::Off),
        _ => Err(format!(
            "loglevel must be trace, debug, info, warn, error or off, got '{}'",
            level
        )),
    }
}

/// name of the log file for this run: log_<date>_<time>.txt
pub fn log_file_name() -> String {
    let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
    format!("log_{}.txt", date_and_time)
}

/// install the global logger: terminal (stderr, stdout is reserved for the report) and optionally a file.
/// A logger that is already installed is kept.
pub fn init_logger(level: LevelFilter, log_to_file: bool) {
    if level == LevelFilter::Off {
        return;
    }
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    loggers.push(TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ));
    if log_to_file {
        let name = log_file_name();
        match File::create(&name) {
            Ok(file) => loggers.push(WriteLogger::new(level, Config::default(), file)),
            Err(e) => eprintln!("cannot create log file {}: {}", name, e),
        }
    }
    let _ = CombinedLogger::init(loggers);
}
