//! Tracing setup: a runtime-adjustable filter, a stdout layer that can be
//! muted, and a log file that can be attached once the config is known.

use std::{
    fs::File,
    io::{self, IsTerminal, Write},
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError},
};

use chrono::Local;
use thiserror::Error;
use tracing::{Event, Level, Subscriber, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::ParseError,
    fmt::{
        FmtContext, MakeWriter,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
};

use crate::config::AppConfig;

const DEFAULT_FILTER: &str = "info,soat_ui=debug,soat_core=debug";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("logging has not been initialized")]
    NotInitialized,

    #[error("invalid log filter '{filter}'")]
    InvalidFilter {
        filter: String,
        #[source]
        source: ParseError,
    },

    #[error("failed to swap log filter")]
    Reload(#[from] reload::Error),

    #[error("cannot open log file {}", path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

// --- Formatter ---

/// `HH:MM:SS.mmm LEVEL target: fields`, colored on terminals.
struct QuoteLogFormat;

fn paint(
    writer: &mut Writer<'_>,
    style: &str,
    text: impl std::fmt::Display,
) -> std::fmt::Result {
    if writer.has_ansi_escapes() {
        write!(writer, "\x1b[{style}m{text}\x1b[0m ")
    } else {
        write!(writer, "{text} ")
    }
}

impl<S, N> FormatEvent<S, N> for QuoteLogFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let level_style = match *meta.level() {
            Level::ERROR => "1;31",
            Level::WARN => "1;33",
            Level::INFO => "1;32",
            Level::DEBUG => "1;34",
            Level::TRACE => "1;35",
        };

        paint(&mut writer, "2", Local::now().format("%H:%M:%S%.3f"))?;
        paint(&mut writer, level_style, format_args!("{:>5}", meta.level()))?;
        paint(&mut writer, "36", format_args!("{}:", meta.target()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// --- Log file ---

type SharedFile = Arc<Mutex<Option<File>>>;

fn lock_file(slot: &SharedFile) -> MutexGuard<'_, Option<File>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Writer target that discards output until a file is attached.
#[derive(Clone)]
struct LogFile(SharedFile);

struct LogFileWriter<'a>(MutexGuard<'a, Option<File>>);

impl Write for LogFileWriter<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        self.0.as_mut().map_or(Ok(buf.len()), |file| file.write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.as_mut().map_or(Ok(()), |file| file.flush())
    }
}

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = LogFileWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        LogFileWriter(lock_file(&self.0))
    }
}

// --- Runtime controls ---

type FilterSwap = Box<dyn Fn(EnvFilter) -> Result<(), reload::Error> + Send + Sync>;

/// Reload handles captured when the subscriber is installed. Their concrete
/// types name the whole layer stack, so they are kept behind closures.
struct LogControls {
    level: FilterSwap,
    stdout: FilterSwap,
    file: SharedFile,
}

static CONTROLS: OnceLock<LogControls> = OnceLock::new();

fn controls() -> Result<&'static LogControls, LoggingError> {
    CONTROLS.get().ok_or(LoggingError::NotInitialized)
}

fn swap<S>(handle: reload::Handle<EnvFilter, S>) -> FilterSwap
where
    S: Subscriber + Send + Sync + 'static,
{
    Box::new(move |filter: EnvFilter| handle.reload(filter))
}

/// Installs the global subscriber. Call once, before anything logs.
///
/// The filter starts from `RUST_LOG`, or debug for this workspace and info
/// elsewhere. Stdout is on and no file is attached.
pub fn init_default_logging() {
    let file: SharedFile = Arc::new(Mutex::new(None));

    let initial =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let (level_filter, level_handle) = reload::Layer::new(initial);
    let (stdout_gate, stdout_handle) = reload::Layer::new(EnvFilter::new("trace"));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .event_format(QuoteLogFormat)
        .with_ansi(io::stdout().is_terminal())
        .with_filter(stdout_gate);

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(QuoteLogFormat)
        .with_ansi(false)
        .with_writer(LogFile(file.clone()));

    let installed = tracing_subscriber::registry()
        .with(level_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init();

    if installed.is_ok() {
        let _ = CONTROLS.set(LogControls {
            level: swap(level_handle),
            stdout: swap(stdout_handle),
            file,
        });
    }
}

/// Replaces the active filter. Takes a bare level (`warn`) or a full
/// `EnvFilter` directive.
pub fn set_log_level(filter: &str) -> Result<(), LoggingError> {
    let parsed = EnvFilter::try_new(filter).map_err(|source| LoggingError::InvalidFilter {
        filter: filter.to_string(),
        source,
    })?;
    Ok((controls()?.level)(parsed)?)
}

/// Mutes or unmutes stdout. The file keeps receiving records.
pub fn set_stdout_enabled(enabled: bool) -> Result<(), LoggingError> {
    let gate = EnvFilter::new(if enabled { "trace" } else { "off" });
    Ok((controls()?.stdout)(gate)?)
}

/// Appends records to `path` from now on, or stops file output on `None`.
pub fn set_log_file(path: Option<&Path>) -> Result<(), LoggingError> {
    let controls = controls()?;
    let file = path
        .map(|path| {
            File::options()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LoggingError::OpenFile {
                    path: path.to_path_buf(),
                    source,
                })
        })
        .transpose()?;

    *lock_file(&controls.file) = file;
    Ok(())
}

/// Applies the logging section of a loaded [`AppConfig`].
///
/// An explicit `RUST_LOG` keeps precedence over `log_level`.
pub fn apply_config(config: &AppConfig) -> Result<(), LoggingError> {
    if std::env::var_os("RUST_LOG").is_none() {
        set_log_level(&config.log_level)?;
    }
    set_stdout_enabled(config.log_stdout)?;
    set_log_file(config.log_file.as_deref())?;

    if let Some(path) = &config.log_file {
        info!(path = %path.display(), "file logging enabled");
    }
    Ok(())
}
