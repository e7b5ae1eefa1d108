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

use std::borrow::Cow;
use std::fmt;
use std::fmt::Write as _;
use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

use jiff::Zoned;
use jiff::tz::TimeZone;

use crate::Flags;
use crate::Record;
use crate::Severity;

/// An output destination shared by the line writers of one logger.
pub(crate) type Output = Arc<Mutex<Box<dyn Write + Send>>>;

pub(crate) fn shared(output: impl Write + Send + 'static) -> Output {
    Arc::new(Mutex::new(Box::new(output)))
}

/// Writes the lines of a single severity: its prefix, a header derived from the flags, and the
/// message.
pub(crate) struct LineWriter {
    severity: Severity,
    flags: Flags,
    output: Output,
}

impl fmt::Debug for LineWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineWriter")
            .field("severity", &self.severity)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

impl LineWriter {
    pub(crate) fn new(severity: Severity, flags: Flags, output: Output) -> Self {
        Self {
            severity,
            flags,
            output,
        }
    }

    pub(crate) fn flags(&self) -> Flags {
        self.flags
    }

    pub(crate) fn set_flags(&mut self, flags: Flags) {
        self.flags = flags;
    }

    pub(crate) fn set_output(&mut self, output: Output) {
        self.output = output;
    }

    fn output(&self) -> MutexGuard<'_, Box<dyn Write + Send>> {
        self.output.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Formats `record` and writes it as one line.
    ///
    /// The line is rendered up front so that concurrent writers never interleave within a line.
    pub(crate) fn write(&self, record: &Record) -> anyhow::Result<()> {
        let line = self.format(record, &Zoned::now())?;
        let mut output = self.output();
        output.write_all(line.as_bytes())?;
        Ok(())
    }

    pub(crate) fn flush(&self) -> anyhow::Result<()> {
        let mut output = self.output();
        output.flush()?;
        Ok(())
    }

    pub(crate) fn format(&self, record: &Record, now: &Zoned) -> anyhow::Result<String> {
        let flags = self.flags;
        let mut text = String::new();

        if !flags.contains(Flags::MSG_PREFIX) {
            write!(&mut text, "{} ", self.prefix())?;
        }

        if flags.has_timestamp() {
            let now = if flags.contains(Flags::UTC) {
                now.with_time_zone(TimeZone::UTC)
            } else {
                now.clone()
            };
            if flags.contains(Flags::DATE) {
                write!(&mut text, "{} ", now.strftime("%Y/%m/%d"))?;
            }
            if flags.intersects(Flags::TIME | Flags::MICROSECONDS) {
                write!(&mut text, "{}", now.strftime("%H:%M:%S"))?;
                if flags.contains(Flags::MICROSECONDS) {
                    write!(&mut text, ".{}", now.strftime("%6f"))?;
                }
                text.push(' ');
            }
        }

        if flags.has_location() {
            let file = if flags.contains(Flags::SHORT_FILE) {
                short_file(record.file())
            } else {
                record.file()
            };
            let file = if file.is_empty() { "???" } else { file };
            write!(&mut text, "{file}:{}: ", record.line())?;
        }

        if flags.contains(Flags::MSG_PREFIX) {
            write!(&mut text, "{} ", self.prefix())?;
        }

        text.write_fmt(*record.args())?;
        if !text.ends_with('\n') {
            text.push('\n');
        }
        Ok(text)
    }

    // the flag decides, regardless of whether the process writes to a terminal
    #[cfg(feature = "colored")]
    fn prefix(&self) -> Cow<'static, str> {
        use colored::Color;

        let prefix = self.severity.prefix();
        if !self.flags.contains(Flags::COLOR) {
            return Cow::Borrowed(prefix);
        }

        let color = match self.severity {
            Severity::Debug => Color::Blue,
            Severity::Info => Color::Green,
            Severity::Warning => Color::Yellow,
            Severity::Error => Color::Red,
        };
        Cow::Owned(format!("\x1b[{}m{prefix}\x1b[0m", color.to_fg_str()))
    }

    #[cfg(not(feature = "colored"))]
    fn prefix(&self) -> Cow<'static, str> {
        Cow::Borrowed(self.severity.prefix())
    }
}

fn short_file(file: &str) -> &str {
    match file.rfind(['/', '\\']) {
        Some(idx) => &file[idx + 1..],
        None => file,
    }
}
