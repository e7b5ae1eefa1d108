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

use crate::Record;
use crate::Severity;
use crate::SyncLevelLogger;

/// Bridges the [`log`] facade into a [`SyncLevelLogger`].
///
/// `Trace` records are written as [`Severity::Debug`].
impl log::Log for SyncLevelLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        SyncLevelLogger::enabled(self, metadata.level().into())
    }

    fn log(&self, record: &log::Record) {
        let severity = Severity::from(record.level());
        let file = record.file().unwrap_or_default();
        let line = record.line().unwrap_or_default();
        SyncLevelLogger::log(
            self,
            &Record::new(severity, *record.args()).with_location(file, line),
        );
    }

    fn flush(&self) {
        SyncLevelLogger::flush(self);
    }
}

impl SyncLevelLogger {
    /// Set up the global logger of the [`log`] facade with this logger.
    ///
    /// The maximum level of the facade is derived from the current mask.
    ///
    /// # Errors
    ///
    /// An error is returned if the global logger has already been set.
    pub fn apply(self) -> Result<(), log::SetLoggerError> {
        let max_level = self.level().max_level_filter();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);
        Ok(())
    }
}
