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

bitflags::bitflags! {
    /// Formatting options applied uniformly to every severity of a logger.
    ///
    /// The header written after the severity prefix depends on the flags:
    ///
    /// ```text
    /// INFO 2024/08/11 22:44:57.172105 main.rs:23: Hello info!
    ///      ^^^^^^^^^^ DATE
    ///                 ^^^^^^^^ TIME
    ///                         ^^^^^^^ MICROSECONDS
    ///                                 ^^^^^^^^^^^ SHORT_FILE or LONG_FILE
    /// ```
    ///
    /// With [`Flags::MSG_PREFIX`] the prefix moves in front of the message:
    ///
    /// ```text
    /// 2024/08/11 22:44:57 INFO Hello info!
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flags: u32 {
        /// The date in the local time zone: `2009/01/23`.
        const DATE = 1;
        /// The time in the local time zone: `01:23:23`.
        const TIME = 1 << 1;
        /// Microsecond resolution: `01:23:23.123123`. Implies [`Flags::TIME`].
        const MICROSECONDS = 1 << 2;
        /// Full file path and line number: `/a/b/c/d.rs:23`.
        const LONG_FILE = 1 << 3;
        /// Final path component and line number: `d.rs:23`. Overrides [`Flags::LONG_FILE`].
        const SHORT_FILE = 1 << 4;
        /// Use UTC rather than the local time zone.
        const UTC = 1 << 5;
        /// Move the severity prefix from the beginning of the line to before the message.
        const MSG_PREFIX = 1 << 6;
        /// Color the severity prefix with ANSI escape codes, whether or not the output is a
        /// terminal. Requires the `colored` feature.
        const COLOR = 1 << 7;
        /// Initial values for a new logger.
        const STD = Self::DATE.bits() | Self::TIME.bits();
    }
}

impl Default for Flags {
    fn default() -> Self {
        Flags::STD
    }
}

impl Flags {
    pub(crate) fn has_timestamp(self) -> bool {
        self.intersects(Flags::DATE | Flags::TIME | Flags::MICROSECONDS)
    }

    pub(crate) fn has_location(self) -> bool {
        self.intersects(Flags::SHORT_FILE | Flags::LONG_FILE)
    }
}
