//! Tracing subscriber setup for the native binaries

use std::fmt;

use chrono::Local;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::stamp::{format_timestamp, STAMP_SEPARATOR};
use crate::config::LoggingConfig;

/// Event formatter producing `YYYY/MM/DD HH:MM:SS.mmm> LEVEL target: message`
#[derive(Debug, Clone, Copy, Default)]
pub struct StampedFormat;

impl<S, N> FormatEvent<S, N> for StampedFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        write!(
            writer,
            "{}{}{} {}: ",
            format_timestamp(&Local::now()),
            STAMP_SEPARATOR,
            meta.level(),
            meta.target()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Install the global subscriber described by `config`.
///
/// `RUST_LOG` wins over the configured level when set.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("photobook={},tower_http=debug", config.level)));

    let registry = tracing_subscriber::registry().with(filter);

    match config.format.as_str() {
        "json" => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        "pretty" => registry
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init(),
        _ => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .event_format(StampedFormat)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}
