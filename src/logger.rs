// gl-nullify/src/logger.rs
//
//! The diagnostic stream.
//!
//! Intercepted calls are recorded through the `log` facade. This module supplies the one logger
//! that ever gets installed, which writes each record as a single `[gl_nullify] ...` line.
//! Writing is best effort: a failed write is dropped and never reaches the stand-in that
//! produced it.

use crate::config::{CallClass, Config};
use crate::error::Error;

use log::{LevelFilter, Log, Metadata, Record};
use std::fmt::{self, Write as FmtWrite};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Mutex;

/// Prefix of every diagnostic line.
pub(crate) const TAG: &str = "[gl_nullify]";

/// Target for lines about the shim itself rather than an intercepted call.
pub(crate) const LIFECYCLE_TARGET: &str = "gl_nullify";

enum Sink {
    Stderr,
    File(Mutex<File>),
}

impl Sink {
    fn open(config: &Config) -> Result<Sink, Error> {
        match config.log_file {
            None => Ok(Sink::Stderr),
            Some(ref path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(Error::LogFileOpenFailed)?;
                Ok(Sink::File(Mutex::new(file)))
            }
        }
    }

    fn write_line(&self, line: &str) {
        match *self {
            Sink::Stderr => write_stderr(line),
            Sink::File(ref file) => {
                if let Ok(mut file) = file.lock() {
                    let _ = file.write_all(line.as_bytes());
                }
            }
        }
    }

    fn flush(&self) {
        if let Sink::File(ref file) = *self {
            if let Ok(mut file) = file.lock() {
                let _ = file.flush();
            }
        }
    }
}

// One `write(2)` per line keeps lines from different threads whole and avoids the standard
// library's stderr lock, which the host may be holding when it calls into GL.
#[cfg(unix)]
fn write_stderr(line: &str) {
    unsafe {
        libc::write(libc::STDERR_FILENO, line.as_ptr() as *const libc::c_void, line.len());
    }
}

#[cfg(not(unix))]
fn write_stderr(line: &str) {
    let _ = std::io::stderr().write_all(line.as_bytes());
}

struct DiagnosticLogger {
    classes: CallClass,
    sink: Sink,
}

impl Log for DiagnosticLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        match CallClass::from_target(metadata.target()) {
            Some(class) => self.classes.contains(class),
            None => metadata.target() == LIFECYCLE_TARGET,
        }
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.sink.write_line(&format_line(record.args()));
        }
    }

    fn flush(&self) {
        self.sink.flush();
    }
}

/// Formats one line of the diagnostic stream, trailing newline included.
pub(crate) fn format_line(args: &fmt::Arguments) -> String {
    let mut line = String::with_capacity(64);
    let _ = writeln!(line, "{} {}", TAG, args);
    line
}

/// Writes a line straight to standard error, for problems that occur before (or instead of)
/// logger installation.
pub(crate) fn emit(args: fmt::Arguments) {
    write_stderr(&format_line(&args));
}

/// Installs the diagnostic logger described by `config`.
///
/// With no call classes enabled nothing is installed and the `log` macros stay disabled. A log
/// file that can't be opened falls back to standard error.
pub(crate) fn init(config: &Config) -> Result<(), Error> {
    if config.log_classes.is_empty() {
        log::set_max_level(LevelFilter::Off);
        return Ok(());
    }

    let sink = Sink::open(config).unwrap_or_else(|err| {
        emit(format_args!("{}; logging to stderr", err));
        Sink::Stderr
    });
    let logger = Box::new(DiagnosticLogger { classes: config.log_classes, sink });
    log::set_logger(Box::leak(logger))?;
    log::set_max_level(LevelFilter::Debug);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_format() {
        assert_eq!(
            format_line(&format_args!("glClear(mask=0x{:x})", 0x4000)),
            "[gl_nullify] glClear(mask=0x4000)\n"
        );
        assert_eq!(
            format_line(&format_args!(
                "glClearColor({:.2}, {:.2}, {:.2}, {:.2})",
                0.0f32,
                0.25f32,
                0.5f32,
                1.0f32
            )),
            "[gl_nullify] glClearColor(0.00, 0.25, 0.50, 1.00)\n"
        );
    }

    #[test]
    fn test_class_filter() {
        let logger = DiagnosticLogger {
            classes: CallClass::DRAW | CallClass::QUERY,
            sink: Sink::Stderr,
        };
        let metadata = |target: &'static str| Metadata::builder().target(target).build();
        assert!(logger.enabled(&metadata(CallClass::DRAW.target())));
        assert!(logger.enabled(&metadata(CallClass::QUERY.target())));
        assert!(!logger.enabled(&metadata(CallClass::TEXTURE.target())));
        assert!(logger.enabled(&metadata(LIFECYCLE_TARGET)));
        assert!(!logger.enabled(&metadata("some_other_crate")));
    }

    #[test]
    fn test_log_file_sink() {
        let path = std::env::temp_dir()
            .join(format!("gl_nullify_logger_test_{}.log", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let config = Config { log_file: Some(path.clone()), ..Config::default() };
        let sink = Sink::open(&config).unwrap();
        let logger = DiagnosticLogger { classes: CallClass::all(), sink };
        logger.sink.write_line(&format_line(&format_args!("glXSwapBuffers")));
        logger.sink.write_line(&format_line(&format_args!("glFinish")));
        logger.flush();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "[gl_nullify] glXSwapBuffers\n[gl_nullify] glFinish\n");
        let _ = std::fs::remove_file(&path);
    }
}
