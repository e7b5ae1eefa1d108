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

use std::io::Write;

use crate::Flags;
use crate::LogLevel;
use crate::Record;
use crate::Severity;
use crate::logger::Builder;
use crate::logger::Logger;
use crate::logger::handle_error;
use crate::logger::handle_flush_error;
use crate::writer;
use crate::writer::LineWriter;

/// A logger gating four prefixed line writers behind a [`LogLevel`] mask.
///
/// Configuration is changed through `&mut self`, so a `LevelLogger` shared between threads cannot
/// be reconfigured and it does not implement [`SharedLogger`](crate::SharedLogger). Use
/// [`SyncLevelLogger`](crate::SyncLevelLogger) when it needs to be.
///
/// # Examples
///
/// ```
/// use levelog::Flags;
/// use levelog::LogLevel;
/// use levelog::Logger;
/// use levelog::output::Buffer;
///
/// let buffer = Buffer::new();
/// let mut logger = levelog::new(buffer.clone(), LogLevel::INFO | LogLevel::ERROR);
/// logger.set_flags(Flags::empty());
///
/// logger.debug(format_args!("x"));
/// logger.info(format_args!("y"));
/// assert_eq!(buffer.contents(), "INFO y\n");
/// ```
#[derive(Debug)]
pub struct LevelLogger {
    level: LogLevel,
    debug: LineWriter,
    info: LineWriter,
    warning: LineWriter,
    error: LineWriter,
}

impl LevelLogger {
    /// Creates a logger writing every enabled severity to `output` with [`Flags::STD`].
    pub fn new(output: impl Write + Send + 'static, level: LogLevel) -> Self {
        Self::with_flags(output, level, Flags::default())
    }

    pub(crate) fn with_flags(
        output: impl Write + Send + 'static,
        level: LogLevel,
        flags: Flags,
    ) -> Self {
        let output = writer::shared(output);
        Self {
            level,
            debug: LineWriter::new(Severity::Debug, flags, output.clone()),
            info: LineWriter::new(Severity::Info, flags, output.clone()),
            warning: LineWriter::new(Severity::Warning, flags, output.clone()),
            error: LineWriter::new(Severity::Error, flags, output),
        }
    }

    /// Creates a [`Builder`] with every severity enabled, [`Flags::STD`] and stderr output.
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }

    pub fn flags(&self) -> Flags {
        self.debug.flags()
    }

    pub fn set_flags(&mut self, flags: Flags) {
        for writer in self.writers_mut() {
            writer.set_flags(flags);
        }
    }

    pub fn set_output(&mut self, output: impl Write + Send + 'static) {
        let output = writer::shared(output);
        for writer in self.writers_mut() {
            writer.set_output(output.clone());
        }
    }

    pub fn enabled(&self, severity: Severity) -> bool {
        self.level.enables(severity)
    }

    /// Writes `record` if its severity passes the mask.
    ///
    /// Nothing is formatted for a disabled severity.
    pub fn log(&self, record: &Record) {
        let severity = record.severity();
        if !self.enabled(severity) {
            return;
        }

        if let Err(err) = self.writer(severity).write(record) {
            handle_error(record, err);
        }
    }

    pub fn flush(&self) {
        // all writers share one destination
        if let Err(err) = self.debug.flush() {
            handle_flush_error(err);
        }
    }

    fn writer(&self, severity: Severity) -> &LineWriter {
        match severity {
            Severity::Debug => &self.debug,
            Severity::Info => &self.info,
            Severity::Warning => &self.warning,
            Severity::Error => &self.error,
        }
    }

    fn writers_mut(&mut self) -> [&mut LineWriter; 4] {
        [
            &mut self.debug,
            &mut self.info,
            &mut self.warning,
            &mut self.error,
        ]
    }
}

impl Logger for LevelLogger {
    fn enabled(&self, severity: Severity) -> bool {
        LevelLogger::enabled(self, severity)
    }

    fn log(&self, record: &Record) {
        LevelLogger::log(self, record);
    }

    fn flush(&self) {
        LevelLogger::flush(self);
    }
}
