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
use crate::LevelLogger;
use crate::LogLevel;
use crate::SyncLevelLogger;

/// A builder for configuring a logger. See also [`LevelLogger::builder`].
///
/// Unless configured otherwise, every severity is enabled, lines carry [`Flags::STD`] and go to
/// stderr.
///
/// ## Examples
///
/// ```rust
/// use levelog::Flags;
/// use levelog::LevelLogger;
/// use levelog::LogLevel;
///
/// let logger = LevelLogger::builder()
///     .level(LogLevel::from_env_or("MY_APP_LOG_LEVELS", LogLevel::INFO | LogLevel::ERROR).unwrap())
///     .flags(Flags::STD | Flags::MICROSECONDS | Flags::UTC)
///     .output(std::io::stdout())
///     .build();
/// ```
#[must_use = "call `build` or `build_sync` to construct the logger"]
pub struct Builder {
    level: LogLevel,
    flags: Flags,
    output: Option<Box<dyn Write + Send>>,
}

impl fmt::Debug for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("level", &self.level)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    pub fn new() -> Self {
        Self {
            level: LogLevel::all(),
            flags: Flags::STD,
            output: None,
        }
    }

    /// Set the severities to emit.
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the formatting flags of every severity.
    pub fn flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    /// Set the destination of every severity.
    pub fn output(mut self, output: impl Write + Send + 'static) -> Self {
        self.output = Some(Box::new(output));
        self
    }

    /// Construct a [`LevelLogger`], reconfigurable through `&mut self`.
    pub fn build(self) -> LevelLogger {
        match self.output {
            Some(output) => LevelLogger::with_flags(output, self.level, self.flags),
            None => LevelLogger::with_flags(std::io::stderr(), self.level, self.flags),
        }
    }

    /// Construct a [`SyncLevelLogger`], reconfigurable while shared between threads.
    pub fn build_sync(self) -> SyncLevelLogger {
        self.build().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Logger;
    use crate::output::Buffer;

    #[test]
    fn test_defaults() {
        let logger = Builder::default().build();
        assert_eq!(logger.level(), LogLevel::all());
        assert_eq!(logger.flags(), Flags::STD);
    }

    #[test]
    fn test_configured() {
        let buffer = Buffer::new();
        let logger = LevelLogger::builder()
            .level(LogLevel::WARNING)
            .flags(Flags::MSG_PREFIX)
            .output(buffer.clone())
            .build_sync();

        logger.info(format_args!("dropped"));
        logger.warning(format_args!("kept"));
        assert_eq!(buffer.contents(), "WARNING kept\n");
    }
}
