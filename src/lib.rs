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

//! Levelog is a minimal leveled logger: four severities, a bitmask choosing which of them are
//! written, and one destination and set of formatting flags shared by all of them.
//!
//! # Overview
//!
//! A [`LevelLogger`] holds one line writer per [`Severity`], each with a fixed prefix (`DEBUG`,
//! `INFO`, `WARNING`, `ERROR`). A call is written only if its severity bit is set in the
//! [`LogLevel`] mask; otherwise nothing is formatted. [`Flags`] choose the header of each line:
//! date, time, microseconds, call site.
//!
//! Call sites should depend on the [`Logger`] trait so that [`SyncLevelLogger`] or [`NopLogger`]
//! can be substituted. Call sites that also reconfigure a logger they share with other threads
//! depend on [`SharedLogger`].
//!
//! # Examples
//!
//! ```
//! use levelog::Flags;
//! use levelog::LogLevel;
//! use levelog::Logger;
//! use levelog::output::Buffer;
//!
//! let buffer = Buffer::new();
//! let mut logger = levelog::new(buffer.clone(), LogLevel::INFO | LogLevel::ERROR);
//! logger.set_flags(Flags::empty());
//!
//! logger.debug(format_args!("x"));
//! levelog::info!(logger, "y");
//! levelog::warning!(logger, "z");
//! levelog::error!(logger, "{}", "w");
//!
//! assert_eq!(buffer.contents(), "INFO y\nERROR w\n");
//! ```
//!
//! Bridging the `log` facade:
//!
//! ```
//! use levelog::LogLevel;
//! use levelog::SyncLevelLogger;
//!
//! SyncLevelLogger::new(std::io::stderr(), LogLevel::all()).apply().unwrap();
//!
//! log::warn!("written as a WARNING line");
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

use std::io::Write;

mod flags;
mod level;
mod logger;
mod macros;
pub mod output;
mod record;
mod writer;

pub use self::flags::Flags;
pub use self::level::DEFAULT_LEVEL_ENV;
pub use self::level::LogLevel;
pub use self::level::Severity;
pub use self::logger::Builder;
pub use self::logger::LevelLogger;
pub use self::logger::Logger;
pub use self::logger::NopLogger;
pub use self::logger::SharedLogger;
pub use self::logger::SyncLevelLogger;
pub use self::record::Record;

/// Creates a [`LevelLogger`] writing the severities in `level` to `output`.
///
/// Lines carry [`Flags::STD`] until [`LevelLogger::set_flags`] is called.
pub fn new(output: impl Write + Send + 'static, level: LogLevel) -> LevelLogger {
    LevelLogger::new(output, level)
}

/// Returns every valid level flag, for loggers that should write everything.
pub fn log_levels() -> LogLevel {
    LogLevel::DEBUG | LogLevel::INFO | LogLevel::WARNING | LogLevel::ERROR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_levels_is_union_of_all_flags() {
        assert_eq!(log_levels().bits(), 15);
        assert_eq!(log_levels(), LogLevel::all());
    }
}
