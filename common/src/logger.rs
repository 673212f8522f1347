use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
    verbose: bool,
}

impl Logger {
    fn new(prefix: Option<String>, verbose: bool) -> Self {
        Self { prefix, verbose }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        println!("{}", self.format(file, line, message));
    }

    fn format(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }
}

/// First call wins; later calls keep the existing logger.
pub fn init_logger(prefix: Option<String>, verbose: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, verbose));
}

// Messages sent before init_logger are dropped, which keeps library users
// and unit tests quiet.
pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

pub fn debug_enabled() -> bool {
    LOGGER.get().is_some_and(|logger| logger.verbose)
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if $crate::logger::debug_enabled() {
            $crate::logger::log(file!(), line!(), &format!($($arg)*))
        }
    };
}
