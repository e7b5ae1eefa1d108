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
use std::panic::Location;

use crate::Severity;

/// A single log call.
///
/// The arguments are kept unformatted; they are only rendered once the record has passed the
/// level mask.
#[derive(Clone, Debug)]
pub struct Record<'a> {
    severity: Severity,
    args: fmt::Arguments<'a>,
    file: &'a str,
    line: u32,
}

impl<'a> Record<'a> {
    /// Creates a record without call site information.
    pub fn new(severity: Severity, args: fmt::Arguments<'a>) -> Self {
        Self {
            severity,
            args,
            file: "",
            line: 0,
        }
    }

    /// Creates a record located at the caller of this function.
    #[track_caller]
    pub fn caller(severity: Severity, args: fmt::Arguments<'a>) -> Self {
        let location = Location::caller();
        Self::new(severity, args).with_location(location.file(), location.line())
    }

    /// Sets the call site.
    pub fn with_location(mut self, file: &'a str, line: u32) -> Self {
        self.file = file;
        self.line = line;
        self
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn args(&self) -> &fmt::Arguments<'a> {
        &self.args
    }

    /// The source file of the call site, or an empty string if unknown.
    pub fn file(&self) -> &'a str {
        self.file
    }

    /// The line of the call site, or `0` if unknown.
    pub fn line(&self) -> u32 {
        self.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_located_here(record: Record<'_>, line: u32) {
        assert!(record.file().ends_with("record.rs"));
        assert_eq!(record.line(), line);
        assert_eq!(record.args().to_string(), "hello");
    }

    #[test]
    fn test_caller_location() {
        assert_located_here(
            Record::caller(Severity::Info, format_args!("hello")),
            line!() - 1,
        );
    }

    #[test]
    fn test_unknown_location() {
        let unknown = |record: Record<'_>| (record.file().to_owned(), record.line());
        let (file, line) = unknown(Record::new(Severity::Error, format_args!("")));
        assert_eq!(file, "");
        assert_eq!(line, 0);
    }
}
