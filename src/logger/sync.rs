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
use std::sync::RwLock;
use std::sync::RwLockReadGuard;
use std::sync::RwLockWriteGuard;

use crate::Flags;
use crate::LevelLogger;
use crate::LogLevel;
use crate::Record;
use crate::Severity;
use crate::logger::Logger;
use crate::logger::SharedLogger;

/// A [`LevelLogger`] that can be reconfigured while other threads log through it.
///
/// Log calls hold a shared lock while formatting and writing, so they proceed in parallel.
/// [`set_output`](Self::set_output), [`set_flags`](Self::set_flags) and
/// [`set_level`](Self::set_level) hold the exclusive lock: a line never mixes two configurations.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use levelog::LogLevel;
/// use levelog::Logger;
/// use levelog::SyncLevelLogger;
/// use levelog::output::Buffer;
///
/// let logger = Arc::new(SyncLevelLogger::new(std::io::stderr(), LogLevel::all()));
///
/// let worker = {
///     let logger = logger.clone();
///     std::thread::spawn(move || logger.info(format_args!("working")))
/// };
/// logger.set_output(Buffer::new());
/// worker.join().unwrap();
/// ```
#[derive(Debug)]
pub struct SyncLevelLogger {
    inner: RwLock<LevelLogger>,
}

impl From<LevelLogger> for SyncLevelLogger {
    fn from(logger: LevelLogger) -> Self {
        Self {
            inner: RwLock::new(logger),
        }
    }
}

impl SyncLevelLogger {
    /// Creates a logger writing every enabled severity to `output` with [`Flags::STD`].
    pub fn new(output: impl Write + Send + 'static, level: LogLevel) -> Self {
        LevelLogger::new(output, level).into()
    }

    fn read(&self) -> RwLockReadGuard<'_, LevelLogger> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, LevelLogger> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn level(&self) -> LogLevel {
        self.read().level()
    }

    pub fn set_level(&self, level: LogLevel) {
        self.write().set_level(level);
    }

    pub fn flags(&self) -> Flags {
        self.read().flags()
    }

    pub fn set_flags(&self, flags: Flags) {
        self.write().set_flags(flags);
    }

    pub fn set_output(&self, output: impl Write + Send + 'static) {
        self.write().set_output(output);
    }

    pub fn enabled(&self, severity: Severity) -> bool {
        self.read().enabled(severity)
    }

    pub fn log(&self, record: &Record) {
        self.read().log(record);
    }

    pub fn flush(&self) {
        self.read().flush();
    }

    pub fn into_inner(self) -> LevelLogger {
        self.inner.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl Logger for SyncLevelLogger {
    fn enabled(&self, severity: Severity) -> bool {
        SyncLevelLogger::enabled(self, severity)
    }

    fn log(&self, record: &Record) {
        SyncLevelLogger::log(self, record);
    }

    fn flush(&self) {
        SyncLevelLogger::flush(self);
    }
}

impl SharedLogger for SyncLevelLogger {
    fn set_output(&self, output: Box<dyn Write + Send>) {
        SyncLevelLogger::set_output(self, output);
    }

    fn set_flags(&self, flags: Flags) {
        SyncLevelLogger::set_flags(self, flags);
    }

    fn set_level(&self, level: LogLevel) {
        SyncLevelLogger::set_level(self, level);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use crate::output::Buffer;

    #[test]
    fn test_reconfigure_through_trait_object_from_another_thread() {
        let first = Buffer::new();
        let logger: Arc<dyn SharedLogger> =
            Arc::new(SyncLevelLogger::new(first.clone(), LogLevel::all()));
        logger.set_flags(Flags::empty());
        logger.info(format_args!("one"));

        let second = Buffer::new();
        let reconfigurer = {
            let logger = logger.clone();
            let second = second.clone();
            thread::spawn(move || {
                logger.set_output(Box::new(second));
                logger.set_level(LogLevel::ERROR);
            })
        };
        reconfigurer.join().unwrap();

        logger.info(format_args!("dropped"));
        logger.error(format_args!("two"));
        assert_eq!(first.lines(), vec!["INFO one"]);
        assert_eq!(second.lines(), vec!["ERROR two"]);
    }

    #[test]
    fn test_setters_through_shared_reference() {
        let first = Buffer::new();
        let logger = SyncLevelLogger::new(first.clone(), LogLevel::WARNING);
        logger.set_flags(Flags::empty());
        logger.warning(format_args!("one"));

        let second = Buffer::new();
        logger.set_output(second.clone());
        logger.set_level(LogLevel::WARNING | LogLevel::DEBUG);
        logger.debug(format_args!("two"));
        logger.info(format_args!("dropped"));

        assert_eq!(first.lines(), vec!["WARNING one"]);
        assert_eq!(second.lines(), vec!["DEBUG two"]);
        assert_eq!(logger.flags(), Flags::empty());
        assert_eq!(logger.level(), LogLevel::WARNING | LogLevel::DEBUG);
    }

    #[test]
    fn test_into_inner_keeps_configuration() {
        let logger = SyncLevelLogger::new(Buffer::new(), LogLevel::ERROR);
        logger.set_flags(Flags::UTC | Flags::DATE);
        let inner = logger.into_inner();
        assert_eq!(inner.level(), LogLevel::ERROR);
        assert_eq!(inner.flags(), Flags::UTC | Flags::DATE);
    }
}
