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
/// `logging.rs` -- Install a logger for the command-line tool
/// ==========================================================
///
/// Library code only talks to the `log` facade. The binary picks where those
/// records go: stderr, so that they never mix with the results printed to
/// stdout.
// Imports
// -------
//
// ### Standard library
use std::path::Path;

// ### Third-party
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

/// Name of the one appender in the default configuration.
const STDERR_APPENDER: &str = "stderr";

/// Time, level, module, message.
pub const LOG_PATTERN: &str = "{d(%H:%M:%S%.3f)} {h({l:5})} {t} - {m}{n}";

// Code
// ----
//
/// Build the default configuration: everything at `level` or above goes to
/// stderr.
pub fn build_config(level: LevelFilter) -> Result<Config, String> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    Config::builder()
        .appender(Appender::builder().build(STDERR_APPENDER, Box::new(stderr)))
        .build(Root::builder().appender(STDERR_APPENDER).build(level))
        .map_err(|err| format!("Invalid logging configuration: {err}"))
}

pub fn configure_logger(level: LevelFilter) -> Result<(), String> {
    log4rs::init_config(build_config(level)?)
        .map_err(|err| format!("Unable to install the logger: {err}"))?;
    Ok(())
}

/// Configure logging from a log4rs YAML file instead.
pub fn configure_logger_from_file(path: &Path) -> Result<(), String> {
    log4rs::init_file(path, Default::default()).map_err(|err| {
        format!(
            "Unable to load the logging configuration {}: {err}",
            path.display()
        )
    })
}

#[cfg(test)]
mod tests {
    use log::LevelFilter;

    use super::{build_config, STDERR_APPENDER};

    #[test]
    fn test_build_config() {
        for level in [LevelFilter::Off, LevelFilter::Warn, LevelFilter::Trace] {
            let config = build_config(level).unwrap();
            assert_eq!(config.root().level(), level);
            assert_eq!(config.root().appenders(), [STDERR_APPENDER.to_string()]);
            assert_eq!(config.appenders().len(), 1);
            assert_eq!(config.appenders()[0].name(), STDERR_APPENDER);
        }
    }
}
