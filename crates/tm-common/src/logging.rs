//! Logging bootstrap shared by the talent matchmaking binaries.
//!
//! Environment:
//! - `RUST_LOG`: filter directives; falls back to [`DEFAULT_FILTER`].
//! - `TM_LOG_DIR`: when set, logs go to `<TM_LOG_DIR>/<app>.log` rotated daily
//!   instead of stdout.
//! - `TM_LOG_INCLUDE_BACKTRACE`: `1`/`true` also runs the default panic hook,
//!   which prints the backtrace.

use std::any::Any;
use std::panic;
use std::path::PathBuf;
use std::sync::OnceLock;

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

pub const LOG_DIR_ENV: &str = "TM_LOG_DIR";
pub const BACKTRACE_ENV: &str = "TM_LOG_INCLUDE_BACKTRACE";

/// Our crates at `info`, HTTP spans at `info`, everything else at `warn`.
pub const DEFAULT_FILTER: &str = "warn,tm_api=info,tm_common=info,tm_metrics=info,tower_http=info";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub app_name: &'static str,
    pub log_dir: Option<PathBuf>,
    pub include_backtrace: bool,
}

impl LoggingConfig {
    pub fn from_env(app_name: &'static str) -> Self {
        Self {
            app_name,
            log_dir: std::env::var_os(LOG_DIR_ENV)
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from),
            include_backtrace: std::env::var(BACKTRACE_ENV)
                .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }

    pub fn log_file_name(&self) -> String {
        format!("{}.log", self.app_name)
    }

    /// Daily rotating writer under `log_dir`. `None` means log to stdout.
    fn file_writer(&self) -> Option<(BoxMakeWriter, WorkerGuard)> {
        let dir = self.log_dir.as_deref()?;
        if let Err(err) = std::fs::create_dir_all(dir) {
            eprintln!(
                "{}: cannot create {LOG_DIR_ENV} {}: {err}; logging to stdout",
                self.app_name,
                dir.display()
            );
            return None;
        }

        let appender = tracing_appender::rolling::daily(dir, self.log_file_name());
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);
        Some((BoxMakeWriter::new(non_blocking), guard))
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize the global subscriber from [`LoggingConfig::from_env`].
pub fn init_tracing_subscriber(app_name: &'static str) {
    let config = LoggingConfig::from_env(app_name);
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter());

    let log_dir = match config.file_writer() {
        Some((writer, guard)) => {
            let _ = LOG_GUARD.set(guard);
            let _ = builder.with_writer(writer).try_init();
            config.log_dir.as_ref().map(|dir| dir.display().to_string())
        }
        None => {
            let _ = builder.try_init();
            None
        }
    };

    info!(
        application = app_name,
        log_dir = log_dir.as_deref().unwrap_or("stdout"),
        "logging initialised"
    );
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".into())
}

/// Report panics as `tracing` errors. Installed at most once per process.
pub fn install_tracing_panic_hook(app_name: &'static str) {
    static INSTALLED: OnceLock<()> = OnceLock::new();

    INSTALLED.get_or_init(|| {
        let include_backtrace = LoggingConfig::from_env(app_name).include_backtrace;
        let default_hook = panic::take_hook();

        panic::set_hook(Box::new(move |info| {
            let thread = std::thread::current();
            let location = info
                .location()
                .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()));

            tracing::error!(
                application = app_name,
                thread = thread.name().unwrap_or("unnamed"),
                location = location.as_deref().unwrap_or("unknown"),
                panic_message = %panic_message(info.payload()),
                "panic captured"
            );

            if include_backtrace {
                default_hook(info);
            }
        }));
    });
}
