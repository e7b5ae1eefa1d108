// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;
use std::io::Write;

use crate::Flags;
use crate::LogLevel;
use crate::Record;
use crate::Severity;

mod builder;
mod log_impl;
#[allow(clippy::module_inception)]
mod logger;
mod sync;

pub use self::builder::Builder;
pub use self::logger::LevelLogger;
pub use self::sync::SyncLevelLogger;

/// A leveled logger: four severity methods gated by a level mask.
///
/// Call sites written against this trait work with any implementation, including
/// [`NopLogger`] in tests. Loggers that can be reconfigured while shared implement
/// [`SharedLogger`] as well.
///
/// # Examples
///
/// ```
/// use levelog::LogLevel;
/// use levelog::Logger;
/// use levelog::NopLogger;
///
/// fn serve(logger: &dyn Logger) {
///     logger.info(format_args!("listening on port {}", 8080));
/// }
///
/// serve(&NopLogger);
/// serve(&levelog::new(std::io::stderr(), LogLevel::all()));
/// ```
pub trait Logger: fmt::Debug + Send + Sync {
    /// Returns whether lines of `severity` would be written.
    fn enabled(&self, severity: Severity) -> bool;

    /// Writes `record` if its severity is enabled.
    ///
    /// Write failures are not reported to the caller.
    fn log(&self, record: &Record);

    /// Flushes the destination.
    ///
    /// Default to a no-op.
    fn flush(&self) {}

    #[track_caller]
    fn debug(&self, args: fmt::Arguments) {
        self.log(&Record::caller(Severity::Debug, args));
    }

    #[track_caller]
    fn info(&self, args: fmt::Arguments) {
        self.log(&Record::caller(Severity::Info, args));
    }

    #[track_caller]
    fn warning(&self, args: fmt::Arguments) {
        self.log(&Record::caller(Severity::Warning, args));
    }

    #[track_caller]
    fn error(&self, args: fmt::Arguments) {
        self.log(&Record::caller(Severity::Error, args));
    }
}

impl<T: Logger + 'static> From<T> for Box<dyn Logger> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

/// A [`Logger`] whose configuration can be replaced through a shared reference.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use levelog::Flags;
/// use levelog::LogLevel;
/// use levelog::Logger;
/// use levelog::SharedLogger;
/// use levelog::SyncLevelLogger;
///
/// let logger: Arc<dyn SharedLogger> =
///     Arc::new(SyncLevelLogger::new(std::io::stderr(), LogLevel::all()));
/// logger.set_flags(Flags::STD | Flags::SHORT_FILE);
/// logger.info(format_args!("reconfigured"));
/// ```
pub trait SharedLogger: Logger {
    /// Replaces the destination of every severity.
    fn set_output(&self, output: Box<dyn Write + Send>);

    /// Replaces the formatting flags of every severity.
    fn set_flags(&self, flags: Flags);

    /// Replaces the level mask.
    fn set_level(&self, level: LogLevel);
}

impl<T: SharedLogger + 'static> From<T> for Box<dyn SharedLogger> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

/// A logger that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NopLogger;

impl Logger for NopLogger {
    fn enabled(&self, _: Severity) -> bool {
        false
    }

    fn log(&self, _: &Record) {}
}

impl SharedLogger for NopLogger {
    fn set_output(&self, _: Box<dyn Write + Send>) {}

    fn set_flags(&self, _: Flags) {}

    fn set_level(&self, _: LogLevel) {}
}

fn handle_error(record: &Record, error: anyhow::Error) {
    // the destination is broken; stderr is the only place left to report it
    let _ = std::io::stderr().write_all(error_report(record, &error).as_bytes());
}

fn handle_flush_error(error: anyhow::Error) {
    let _ = write!(
        std::io::stderr(),
        r###"
Error flushing log output.
    Error: {error:#}
"###
    );
}

fn error_report(record: &Record, error: &anyhow::Error) -> String {
    let file = match record.file() {
        "" => "???",
        file => file,
    };
    format!(
        r###"
Error performing logging.
    Attempted to log: {args}
    Severity: {severity}
    Location: {file}:{line}
    Error: {error:#}
"###,
        args = record.args(),
        severity = record.severity(),
        line = record.line(),
    )
}
