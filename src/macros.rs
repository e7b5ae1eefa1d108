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

/// Logs a debug line through any [`Logger`](crate::Logger).
///
/// ```
/// use levelog::LogLevel;
///
/// let logger = levelog::new(std::io::stderr(), LogLevel::all());
/// levelog::debug!(logger, "cache hit ratio {:.2}", 0.93);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        ($logger).debug(::std::format_args!($($arg)+))
    }};
}

/// Logs an info line through any [`Logger`](crate::Logger).
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        ($logger).info(::std::format_args!($($arg)+))
    }};
}

/// Logs a warning line through any [`Logger`](crate::Logger).
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        ($logger).warning(::std::format_args!($($arg)+))
    }};
}

/// Logs an error line through any [`Logger`](crate::Logger).
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        ($logger).error(::std::format_args!($($arg)+))
    }};
}

#[cfg(test)]
mod tests {
    use crate::Flags;
    use crate::LogLevel;
    use crate::SyncLevelLogger;
    use crate::output::Buffer;

    #[test]
    fn test_macros_format_and_locate() {
        let buffer = Buffer::new();
        let logger = SyncLevelLogger::new(buffer.clone(), LogLevel::all());
        logger.set_flags(Flags::SHORT_FILE);

        let user = "ferris";
        crate::debug!(logger, "hello {user}");
        crate::info!(&logger, "{} + {} = {}", 1, 2, 1 + 2);
        crate::warning!(logger, "plain");
        crate::error!(logger, "{:>4}|", 7);

        let line = line!();
        assert_eq!(
            buffer.lines(),
            vec![
                format!("DEBUG macros.rs:{}: hello ferris", line - 5),
                format!("INFO macros.rs:{}: 1 + 2 = 3", line - 4),
                format!("WARNING macros.rs:{}: plain", line - 3),
                format!("ERROR macros.rs:{}:    7|", line - 2),
            ]
        );
    }
}
