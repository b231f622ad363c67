// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! File logging for the `sel` binary and for embedders that want to watch
//! the event loop traces. Writes to a never-rolling appender, so you can use
//! `tail -f <log file>` to follow along.

use std::path::PathBuf;

use miette::IntoDiagnostic;
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

/// Install a global `tracing` subscriber that writes DEBUG-level logs to the
/// given file.
///
/// # Errors
///
/// Fails if the path has no accessible parent folder or if a global
/// subscriber is already installed.
pub fn try_initialize_logging(path_str: &str) -> miette::Result<()> {
    let file_appender = try_create_rolling_file_appender(path_str)?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_filter(LevelFilter::DEBUG);

    tracing_subscriber::registry()
        .with(file_layer)
        .try_init()
        .into_diagnostic()?;

    Ok(())
}

/// Note that if you wrap this up in a non blocking writer, as shown below, it
/// doesn't work:
///
/// ```ignore
/// tracing_appender::non_blocking(try_create_rolling_file_appender("foo")?);
/// ```
pub fn try_create_rolling_file_appender(
    path_str: &str,
) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let parent = path.parent().ok_or_else(|| {
        miette::miette!(
            "Can't access current folder {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    let file_stem = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't access file name {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    Ok(tracing_appender::rolling::never(parent, file_stem))
}
