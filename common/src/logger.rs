use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

impl LogLevel {
    fn tag(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Error => "ERROR",
        }
    }
}

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn format_line(&self, level: LogLevel, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!(
                "[{}][{}][{}][{}:{}] {}",
                timestamp,
                level.tag(),
                prefix,
                file_name,
                line,
                message
            ),
            None => format!(
                "[{}][{}][{}:{}] {}",
                timestamp,
                level.tag(),
                file_name,
                line,
                message
            ),
        }
    }

    pub fn log(&self, level: LogLevel, file: &str, line: u32, message: &str) {
        let formatted = self.format_line(level, file, line, message);
        match level {
            LogLevel::Info => println!("{}", formatted),
            LogLevel::Error => eprintln!("{}", formatted),
        }
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

/// Returns whether the message was written. Messages logged before
/// `init_logger` is called are dropped.
pub fn log(level: LogLevel, file: &str, line: u32, message: &str) -> bool {
    match LOGGER.get() {
        Some(logger) => {
            logger.log(level, file, line, message);
            true
        }
        None => false,
    }
}

pub fn is_initialized() -> bool {
    LOGGER.get().is_some()
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Info, file!(), line!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Error, file!(), line!(), &format!($($arg)*))
    };
}
