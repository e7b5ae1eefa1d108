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

//! Severities and the level mask used to gate them.

use std::borrow::Cow;
use std::fmt;

use anyhow::Context;

/// The environment variable read by [`LogLevel::from_default_env`].
pub const DEFAULT_LEVEL_ENV: &str = "LEVELOG";

/// The importance of a single log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
}

impl Severity {
    /// All severities, from the most to the least verbose.
    pub const ALL: [Severity; 4] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
    ];

    /// The [`LogLevel`] flag that enables this severity.
    pub const fn bit(self) -> LogLevel {
        match self {
            Severity::Debug => LogLevel::DEBUG,
            Severity::Info => LogLevel::INFO,
            Severity::Warning => LogLevel::WARNING,
            Severity::Error => LogLevel::ERROR,
        }
    }

    /// The fixed prefix written in front of every line of this severity.
    pub const fn prefix(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// `Trace` has no severity of its own and is folded into [`Severity::Debug`].
impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Severity::Error,
            log::Level::Warn => Severity::Warning,
            log::Level::Info => Severity::Info,
            log::Level::Debug | log::Level::Trace => Severity::Debug,
        }
    }
}

bitflags::bitflags! {
    /// A union of the severities a logger emits.
    ///
    /// Unlike [`log::LevelFilter`], the mask is not ordered: `INFO | ERROR` emits info and error
    /// lines while dropping warnings.
    ///
    /// # Examples
    ///
    /// ```
    /// use levelog::LogLevel;
    /// use levelog::Severity;
    ///
    /// let level = LogLevel::INFO | LogLevel::ERROR;
    /// assert!(level.enables(Severity::Error));
    /// assert!(!level.enables(Severity::Warning));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LogLevel: u8 {
        const DEBUG = 1;
        const INFO = 1 << 1;
        const WARNING = 1 << 2;
        const ERROR = 1 << 3;
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::all()
    }
}

impl LogLevel {
    /// Returns whether lines of `severity` pass this mask.
    pub fn enables(self, severity: Severity) -> bool {
        self.intersects(severity.bit())
    }

    /// The most verbose [`log::LevelFilter`] that lets every enabled severity through.
    ///
    /// This is only a coarse pre-filter for the `log` facade: the mask itself is still checked
    /// for every record.
    pub fn max_level_filter(self) -> log::LevelFilter {
        if self.contains(LogLevel::DEBUG) {
            log::LevelFilter::Trace
        } else if self.contains(LogLevel::INFO) {
            log::LevelFilter::Info
        } else if self.contains(LogLevel::WARNING) {
            log::LevelFilter::Warn
        } else if self.contains(LogLevel::ERROR) {
            log::LevelFilter::Error
        } else {
            log::LevelFilter::Off
        }
    }

    /// Parses a mask from text.
    ///
    /// Accepted forms are a decimal mask (`0..=15`), or severity names separated by `|` or `,`.
    /// Names are case insensitive; `warn` is accepted for `warning`, `all` enables everything and
    /// `none` or `off` enables nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use levelog::LogLevel;
    ///
    /// assert_eq!(
    ///     LogLevel::parse("info|error").unwrap(),
    ///     LogLevel::INFO | LogLevel::ERROR
    /// );
    /// assert_eq!(LogLevel::parse("15").unwrap(), LogLevel::all());
    /// ```
    pub fn parse(text: &str) -> anyhow::Result<LogLevel> {
        let text = text.trim();
        if let Ok(bits) = text.parse::<u8>() {
            return LogLevel::from_bits(bits)
                .with_context(|| format!("log level mask out of range: {bits}"));
        }

        let mut level = LogLevel::empty();
        for name in text.split(['|', ',']).map(str::trim) {
            if name.is_empty() {
                continue;
            }
            level |= match name.to_ascii_lowercase().as_str() {
                "debug" => LogLevel::DEBUG,
                "info" => LogLevel::INFO,
                "warning" | "warn" => LogLevel::WARNING,
                "error" => LogLevel::ERROR,
                "all" => LogLevel::all(),
                "none" | "off" => LogLevel::empty(),
                _ => anyhow::bail!("unknown log level: {name}"),
            };
        }
        Ok(level)
    }

    /// Reads the mask from the [`DEFAULT_LEVEL_ENV`] environment variable.
    ///
    /// All severities are enabled if the variable is not set.
    pub fn from_default_env() -> anyhow::Result<LogLevel> {
        LogLevel::from_env(DEFAULT_LEVEL_ENV)
    }

    /// Reads the mask from the environment variable `name`.
    ///
    /// All severities are enabled if the variable is not set.
    ///
    /// # Examples
    ///
    /// ```
    /// use levelog::LogLevel;
    ///
    /// let level = LogLevel::from_env("MY_APP_LOG_LEVELS").unwrap();
    /// ```
    pub fn from_env<'a, E>(name: E) -> anyhow::Result<LogLevel>
    where
        E: Into<Cow<'a, str>>,
    {
        LogLevel::from_env_or(name, LogLevel::all())
    }

    /// Reads the mask from the environment variable `name`, or falls back to `default` if the
    /// variable is not set.
    pub fn from_env_or<'a, E>(name: E, default: LogLevel) -> anyhow::Result<LogLevel>
    where
        E: Into<Cow<'a, str>>,
    {
        let name = name.into();
        match std::env::var(&*name) {
            Ok(text) => LogLevel::parse(&text)
                .with_context(|| format!("invalid log levels in environment variable {name}")),
            Err(std::env::VarError::NotPresent) => Ok(default),
            Err(err) => Err(err).with_context(|| format!("failed to read environment variable {name}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_match_severity_order() {
        let bits: Vec<u8> = Severity::ALL.iter().map(|s| s.bit().bits()).collect();
        assert_eq!(bits, vec![1, 2, 4, 8]);
        assert_eq!(LogLevel::all().bits(), 15);
    }

    #[test]
    fn test_enables_every_subset() {
        for bits in 0..16u8 {
            let level = LogLevel::from_bits_truncate(bits);
            for severity in Severity::ALL {
                let expected = bits & severity.bit().bits() != 0;
                assert_eq!(level.enables(severity), expected, "mask {bits} {severity}");
            }
        }
    }

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(Severity::from(log::Level::Trace), Severity::Debug);
        assert_eq!(Severity::from(log::Level::Debug), Severity::Debug);
        assert_eq!(Severity::from(log::Level::Info), Severity::Info);
        assert_eq!(Severity::from(log::Level::Warn), Severity::Warning);
        assert_eq!(Severity::from(log::Level::Error), Severity::Error);
    }

    #[test]
    fn test_max_level_filter() {
        assert_eq!(LogLevel::all().max_level_filter(), log::LevelFilter::Trace);
        assert_eq!(
            (LogLevel::INFO | LogLevel::ERROR).max_level_filter(),
            log::LevelFilter::Info
        );
        assert_eq!(LogLevel::ERROR.max_level_filter(), log::LevelFilter::Error);
        assert_eq!(LogLevel::empty().max_level_filter(), log::LevelFilter::Off);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(
            LogLevel::parse("Debug, WARN").unwrap(),
            LogLevel::DEBUG | LogLevel::WARNING
        );
        assert_eq!(LogLevel::parse("all").unwrap(), LogLevel::all());
        assert_eq!(LogLevel::parse("off").unwrap(), LogLevel::empty());
        assert_eq!(LogLevel::parse("").unwrap(), LogLevel::empty());
        assert_eq!(LogLevel::parse(" 10 ").unwrap(), LogLevel::INFO | LogLevel::ERROR);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = LogLevel::parse("info|verbose").unwrap_err();
        assert_eq!(err.to_string(), "unknown log level: verbose");
        assert!(LogLevel::parse("16").is_err());
    }

    #[test]
    fn test_from_env_unset_enables_all() {
        let level = LogLevel::from_env("LEVELOG_TEST_SURELY_UNSET_VARIABLE").unwrap();
        assert_eq!(level, LogLevel::all());

        let level =
            LogLevel::from_env_or("LEVELOG_TEST_SURELY_UNSET_VARIABLE", LogLevel::ERROR).unwrap();
        assert_eq!(level, LogLevel::ERROR);
    }
}
