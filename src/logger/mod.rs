//! Named loggers with a shared level, a replaceable output handler and an optional user callback.

use chrono::{SecondsFormat, Utc};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, LazyLock, Mutex, RwLock, Weak};

static GLOBAL_LOG_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);
static INSTANCES: LazyLock<Mutex<Vec<Weak<LoggerInner>>>> =
    LazyLock::new(|| Mutex::new(Vec::new()));

type SharedLogHandler = Arc<dyn Fn(&Logger, LogLevel, &str) + Send + Sync + 'static>;

#[derive(Clone)]
pub struct Logger {
    inner: Arc<LoggerInner>,
}

impl Logger {
    pub fn new(name: impl Into<String>) -> Self {
        let inner = Arc::new(LoggerInner::new(name.into()));
        INSTANCES.lock().unwrap().push(Arc::downgrade(&inner));
        Self { inner }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn log_level(&self) -> LogLevel {
        LogLevel::from_u8(self.inner.log_level.load(Ordering::SeqCst))
    }

    pub fn set_log_level<L>(&self, level: L) -> Result<(), LogError>
    where
        L: IntoLogLevel,
    {
        let level = level.into_log_level()?;
        self.inner.log_level.store(level as u8, Ordering::SeqCst);
        Ok(())
    }

    pub fn set_log_handler<F>(&self, handler: F)
    where
        F: Fn(&Logger, LogLevel, &str) + Send + Sync + 'static,
    {
        *self.inner.log_handler.write().unwrap() = Arc::new(handler);
    }

    pub fn reset_log_handler(&self) {
        *self.inner.log_handler.write().unwrap() = Arc::new(default_log_handler);
    }

    pub fn has_user_log_handler(&self) -> bool {
        self.inner.user_log_handler.read().unwrap().is_some()
    }

    pub fn debug(&self, message: impl Into<String>) {
        self.dispatch(LogLevel::Debug, message.into());
    }

    pub fn log(&self, message: impl Into<String>) {
        self.dispatch(LogLevel::Verbose, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.dispatch(LogLevel::Info, message.into());
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.dispatch(LogLevel::Warn, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.dispatch(LogLevel::Error, message.into());
    }

    fn dispatch(&self, level: LogLevel, message: String) {
        let user_handler = self.inner.user_log_handler.read().unwrap().clone();
        if let Some(handler) = user_handler {
            handler(self, level, &message);
        }
        let handler = self.inner.log_handler.read().unwrap().clone();
        handler(self, level, &message);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name())
            .field("level", &self.log_level())
            .finish()
    }
}

struct LoggerInner {
    name: String,
    log_level: AtomicU8,
    log_handler: RwLock<SharedLogHandler>,
    user_log_handler: RwLock<Option<SharedLogHandler>>,
}

impl LoggerInner {
    fn new(name: String) -> Self {
        Self {
            name,
            log_level: AtomicU8::new(GLOBAL_LOG_LEVEL.load(Ordering::SeqCst)),
            log_handler: RwLock::new(Arc::new(default_log_handler)),
            user_log_handler: RwLock::new(None),
        }
    }
}

fn default_log_handler(logger: &Logger, level: LogLevel, message: &str) {
    if level < logger.log_level() || level == LogLevel::Silent {
        return;
    }

    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let line = format!("[{}]  {}: {}", now, logger.name(), message);

    match level {
        LogLevel::Warn | LogLevel::Error => eprintln!("{line}"),
        _ => println!("{line}"),
    }
}

fn with_instances<F>(mut f: F)
where
    F: FnMut(&Logger),
{
    let mut instances = INSTANCES.lock().unwrap();
    instances.retain(|weak| match weak.upgrade() {
        Some(inner) => {
            f(&Logger { inner });
            true
        }
        None => false,
    });
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LogLevel {
    Debug = 0,
    Verbose = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Silent = 5,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Verbose => "verbose",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Silent => "silent",
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Debug,
            1 => LogLevel::Verbose,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            4 => LogLevel::Error,
            _ => LogLevel::Silent,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_ascii_uppercase())
    }
}

impl FromStr for LogLevel {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "verbose" => Ok(LogLevel::Verbose),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "silent" => Ok(LogLevel::Silent),
            other => Err(LogError::InvalidLogLevel(other.to_string())),
        }
    }
}

pub trait IntoLogLevel {
    fn into_log_level(self) -> Result<LogLevel, LogError>;
}

impl IntoLogLevel for LogLevel {
    fn into_log_level(self) -> Result<LogLevel, LogError> {
        Ok(self)
    }
}

impl IntoLogLevel for &str {
    fn into_log_level(self) -> Result<LogLevel, LogError> {
        LogLevel::from_str(self)
    }
}

#[derive(Debug, Clone)]
pub struct LogCallbackParams {
    pub level: LogLevel,
    pub message: String,
    pub logger_type: String,
}

#[derive(Debug, Clone)]
pub enum LogError {
    InvalidLogLevel(String),
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogError::InvalidLogLevel(level) => {
                write!(f, "Invalid value \"{level}\" assigned to `logLevel`")
            }
        }
    }
}

impl std::error::Error for LogError {}

/// Sets the level of every live logger and of loggers created afterwards.
pub fn set_log_level<L>(level: L) -> Result<(), LogError>
where
    L: IntoLogLevel,
{
    let level = level.into_log_level()?;
    GLOBAL_LOG_LEVEL.store(level as u8, Ordering::SeqCst);
    with_instances(|logger| {
        let _ = logger.set_log_level(level);
    });
    Ok(())
}

/// Installs (or with `None`, removes) a callback on every live logger. The callback only sees
/// messages at or above `level`, or the logger's own level when `level` is `None`.
pub fn set_user_log_handler<F>(callback: Option<F>, level: Option<LogLevel>)
where
    F: Fn(LogCallbackParams) + Send + Sync + 'static,
{
    let callback = callback.map(Arc::new);
    with_instances(|logger| {
        let handler = callback.clone().map(|cb| {
            Arc::new(move |instance: &Logger, msg_level: LogLevel, message: &str| {
                let threshold = level.unwrap_or_else(|| instance.log_level());
                if msg_level < threshold {
                    return;
                }
                cb(LogCallbackParams {
                    level: msg_level,
                    message: message.to_owned(),
                    logger_type: instance.name().to_owned(),
                });
            }) as SharedLogHandler
        });
        *logger.inner.user_log_handler.write().unwrap() = handler;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    static TEST_GUARD: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

    fn reset_logging() {
        set_log_level(LogLevel::Info).unwrap();
        set_user_log_handler(None::<fn(LogCallbackParams)>, None);
    }

    fn capture(logger: &Logger) -> Arc<Mutex<Vec<(LogLevel, String)>>> {
        let records = Arc::new(Mutex::new(Vec::new()));
        let handler_records = Arc::clone(&records);
        logger.set_log_handler(move |instance, level, message| {
            if level < instance.log_level() {
                return;
            }
            handler_records
                .lock()
                .unwrap()
                .push((level, message.to_string()));
        });
        records
    }

    #[test]
    fn global_level_applies_to_live_loggers() {
        let _guard = TEST_GUARD.lock().unwrap();
        reset_logging();
        let logger = Logger::new("@ads-gtag/level-test");
        let records = capture(&logger);

        set_log_level("warn").unwrap();
        logger.debug("debug message");
        logger.info("info message");
        logger.warn("warn message");
        logger.error("error message");

        let stored = records.lock().unwrap();
        let levels: Vec<_> = stored.iter().map(|(level, _)| *level).collect();
        assert_eq!(levels, [LogLevel::Warn, LogLevel::Error]);
        assert_eq!(stored[0].1, "warn message");
    }

    #[test]
    fn invalid_level_is_rejected() {
        let _guard = TEST_GUARD.lock().unwrap();
        let err = set_log_level("loud").unwrap_err();
        assert_eq!(err.to_string(), "Invalid value \"loud\" assigned to `logLevel`");
    }

    #[test]
    fn user_handler_respects_custom_level() {
        let _guard = TEST_GUARD.lock().unwrap();
        reset_logging();
        let logger = Logger::new("@ads-gtag/user-handler-test");
        let logger_name = logger.name().to_owned();

        let captured = Arc::new(Mutex::new(Vec::new()));
        let captured_cb = Arc::clone(&captured);
        set_user_log_handler(
            Some(move |params: LogCallbackParams| {
                if params.logger_type == logger_name {
                    captured_cb.lock().unwrap().push(params.level);
                }
            }),
            Some(LogLevel::Warn),
        );
        assert!(logger.has_user_log_handler());

        logger.info("info message");
        logger.warn("warn message");
        logger.error("error message");

        assert_eq!(
            captured.lock().unwrap().as_slice(),
            &[LogLevel::Warn, LogLevel::Error]
        );
        reset_logging();
        assert!(!logger.has_user_log_handler());
    }
}
