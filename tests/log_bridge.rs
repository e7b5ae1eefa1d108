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

use levelog::Flags;
use levelog::LogLevel;
use levelog::SyncLevelLogger;
use levelog::output::Buffer;

// the global logger can only be set once per process, so this is the only test in this binary
#[test]
fn test_log_facade_goes_through_mask() {
    let buffer = Buffer::new();
    let logger = SyncLevelLogger::new(buffer.clone(), LogLevel::DEBUG | LogLevel::WARNING);
    logger.set_flags(Flags::SHORT_FILE);
    logger.apply().unwrap();

    log::trace!("t");
    log::debug!("d {}", 1);
    log::info!("i");
    log::warn!("w");
    log::error!("e");

    let line = line!();
    assert_eq!(
        buffer.lines(),
        vec![
            format!("DEBUG log_bridge.rs:{}: t", line - 6),
            format!("DEBUG log_bridge.rs:{}: d 1", line - 5),
            format!("WARNING log_bridge.rs:{}: w", line - 3),
        ]
    );

    let metadata = |level| log::Metadata::builder().level(level).build();
    assert!(log::logger().enabled(&metadata(log::Level::Warn)));
    assert!(!log::logger().enabled(&metadata(log::Level::Error)));
    log::logger().flush();

    let second = SyncLevelLogger::new(Buffer::new(), LogLevel::all());
    assert!(second.apply().is_err());
}
