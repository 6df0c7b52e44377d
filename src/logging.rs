use std::path::Path;

use time::{format_description::well_known::Rfc3339, UtcOffset};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    fmt::{time::OffsetTime, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

use crate::{
    config::{LogFormat, LoggingConfig},
    errors::InitializationError,
    AppError,
};

/// File written inside `log_dir`, `gin-log-parser.log`.
const LOG_FILE_PREFIX: &str = "gin-log-parser";
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Installs the global subscriber.
///
/// Events go to stderr, leaving stdout to the report itself. When `log_dir` is
/// set, events are mirrored to a file through a non-blocking writer whose guard
/// must be kept alive until the program exits.
pub fn setup_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>, AppError> {
    // Validate logging config before proceeding
    config.validate()?;

    let timer = OffsetTime::new(
        UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC),
        Rfc3339,
    );

    let mut layers = vec![fmt_layer(std::io::stderr, config, timer.clone(), true)];
    let mut guard = None;

    if let Some(dir) = &config.log_dir {
        let appender = RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix(LOG_FILE_PREFIX)
            .filename_suffix(LOG_FILE_SUFFIX)
            .build(Path::new(dir))
            .map_err(|e| InitializationError::log_file(dir, e.to_string()))?;
        let (writer, file_guard) = tracing_appender::non_blocking(appender);
        layers.push(fmt_layer(writer, config, timer, false));
        guard = Some(file_guard);
    }

    Registry::default().with(layers).try_init().map_err(|e| {
        AppError::Init(InitializationError::logging(format!(
            "Failed to initialize logging: {}",
            e
        )))
    })?;

    Ok(guard)
}

fn fmt_layer<W>(
    writer: W,
    config: &LoggingConfig,
    timer: OffsetTime<Rfc3339>,
    ansi: bool,
) -> BoxedLayer
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .with_file(config.include_location)
        .with_line_number(config.include_location)
        .with_level(true)
        .with_timer(timer);

    let layer: BoxedLayer = match config.format {
        LogFormat::Pretty => layer.pretty().boxed(),
        LogFormat::Compact => layer.compact().boxed(),
        LogFormat::Json => layer.json().boxed(),
    };

    let env_filter = EnvFilter::default().add_directive(config.get_level_filter().into());
    layer.with_filter(env_filter).boxed()
}
