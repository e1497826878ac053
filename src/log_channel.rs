use log::{Level, Log, Metadata, Record};
use std::error::Error;
use std::fmt;

/// Target for file access and parsing events.
pub const FILE_TARGET: &str = "FILE";
/// Target for aggregate transaction statistics.
pub const TRANSACTIONS_TARGET: &str = "TRANSACTIONS";

/// A named log channel writing to an injected `log::Log` implementation.
#[derive(Clone, Copy)]
pub struct LogChannel<'a> {
    target: &'static str,
    logger: &'a dyn Log,
}

impl<'a> LogChannel<'a> {
    pub fn new(target: &'static str, logger: &'a dyn Log) -> Self {
        LogChannel { target, logger }
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Level::Debug, message, None);
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.log(Level::Info, message, None);
    }

    pub fn warn(&self, message: impl fmt::Display, error: Option<&dyn Error>) {
        self.log(Level::Warn, message, error);
    }

    pub fn error(&self, message: impl fmt::Display, error: Option<&dyn Error>) {
        self.log(Level::Error, message, error);
    }

    /// Emits `message` at `level`, followed by `error` and its whole source chain if given.
    pub fn log(&self, level: Level, message: impl fmt::Display, error: Option<&dyn Error>) {
        let metadata = Metadata::builder().level(level).target(self.target).build();
        if !self.logger.enabled(&metadata) {
            return;
        }
        match error {
            Some(error) => self.emit(level, format_args!("{message}: {}", ErrorChain(error))),
            None => self.emit(level, format_args!("{message}")),
        }
    }

    fn emit(&self, level: Level, args: fmt::Arguments<'_>) {
        self.logger.log(
            &Record::builder()
                .args(args)
                .level(level)
                .target(self.target)
                .build(),
        );
    }
}

impl fmt::Debug for LogChannel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogChannel").field("target", &self.target).finish()
    }
}

struct ErrorChain<'e>(&'e dyn Error);

impl fmt::Display for ErrorChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        let mut source = self.0.source();
        while let Some(cause) = source {
            write!(f, ": {cause}")?;
            source = cause.source();
        }
        Ok(())
    }
}
