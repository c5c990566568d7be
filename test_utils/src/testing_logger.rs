// Copyright (C) 2025 The waddl developers.
//
// This file is part of waddl. waddl is free software: you can redistribute it
// and/or modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the License,
// or (at your option) any later version.
//
// waddl is distributed in the hope that it will be useful, but WITHOUT ANY
// WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more
// details.
//
// You should have received a copy of the GNU General Public License along with
// waddl. If not, see [http://www.gnu.org/licenses](http://www.gnu.org/licenses).
//
//! `testing_logger.rs` -- capture `log` records so tests can assert on them
//! ======================================================================
//!
//! Records are kept in a thread-local buffer, so tests running in parallel on
//! separate threads only see their own output. Nothing is forwarded to a real
//! logging backend.
//!
//! ```
//! use log::{Level, warn};
//! test_utils::testing_logger::setup();
//! warn!("Something went wrong with {}", 10);
//! test_utils::testing_logger::validate(|captured_logs| {
//!     assert_eq!(captured_logs.len(), 1);
//!     assert_eq!(captured_logs[0].body, "Something went wrong with 10");
//!     assert_eq!(captured_logs[0].level, Level::Warn);
//! });
//! ```
use std::cell::RefCell;
use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};

/// A captured call to the logging system. A `Vec` of these is passed to the
/// closure supplied to [`validate`].
#[derive(Debug)]
pub struct CapturedLog {
    /// The formatted log message.
    pub body: String,
    /// The level.
    pub level: Level,
    /// The target, usually the module path of the caller.
    pub target: String,
}

thread_local!(static LOG_RECORDS: RefCell<Vec<CapturedLog>> = RefCell::new(Vec::with_capacity(3)));

struct TestingLogger;

impl Log for TestingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        // Capture all log levels.
        true
    }

    fn log(&self, record: &Record) {
        LOG_RECORDS.with(|records| {
            records.borrow_mut().push(CapturedLog {
                body: format!("{}", record.args()),
                level: record.level(),
                target: record.target().to_string(),
            });
        });
    }

    fn flush(&self) {}
}

static FIRST_TEST: Once = Once::new();

static TEST_LOGGER: TestingLogger = TestingLogger;

/// Prepare to capture log messages for a test. Call this before anything the
/// test wants to inspect is logged; it installs the logger on first use and
/// clears this thread's buffer.
pub fn setup() {
    FIRST_TEST.call_once(|| {
        // Another logger may already be installed by the host process; in
        // that case records simply aren't captured.
        if log::set_logger(&TEST_LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
    LOG_RECORDS.with(|records| records.borrow_mut().clear());
}

/// Run `asserter` over the records captured on this thread, then clear them.
pub fn validate<F>(asserter: F)
where
    F: Fn(&Vec<CapturedLog>),
{
    LOG_RECORDS.with(|records| {
        asserter(&records.borrow());
        records.borrow_mut().clear();
    });
}

/// Return the bodies of the records captured at `level` without clearing the
/// buffer.
pub fn bodies_at(level: Level) -> Vec<String> {
    LOG_RECORDS.with(|records| {
        records
            .borrow()
            .iter()
            .filter(|captured| captured.level == level)
            .map(|captured| captured.body.clone())
            .collect()
    })
}
