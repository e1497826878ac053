use crate::error::{ImportError, LineError};
use crate::log_channel::LogChannel;
use crate::transaction::{Transaction, TransactionRaw};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

const FIELD_COUNT: usize = 3;

/// Everything produced by importing a single source.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub transactions: Vec<Transaction>,
    pub errors: Vec<ImportError>,
}

/// Reads `id,amount,dd-mm-yyyy` lines and reports what happened on the injected channel.
#[derive(Debug)]
pub struct TransactionImporter<'a> {
    log: LogChannel<'a>,
}

impl<'a> TransactionImporter<'a> {
    pub fn new(log: LogChannel<'a>) -> Self {
        TransactionImporter { log }
    }

    /// Imports every well-formed line of the file at `path`. Never fails as a whole:
    /// problems end up in the returned report and on the log channel.
    pub fn import_from(&self, path: impl AsRef<Path>) -> ImportReport {
        let path = path.as_ref();
        let source_name = path.display().to_string();
        self.log.info(format_args!("import data from {source_name}"));

        match File::open(path) {
            Ok(file) => self.import_reader(&source_name, file),
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                let error = ImportError::SourceNotFound { source_name, source };
                self.log.warn(&error, error_source(&error));
                ImportReport {
                    transactions: Vec::new(),
                    errors: vec![error],
                }
            }
            Err(source) => {
                let error = ImportError::Io {
                    source_name,
                    source: csv::Error::from(source),
                };
                self.log.error(&error, error_source(&error));
                ImportReport {
                    transactions: Vec::new(),
                    errors: vec![error],
                }
            }
        }
    }

    /// Same as [`import_from`](Self::import_from) for an already opened source.
    /// `reader` is dropped before this returns, whichever way the import ends.
    pub fn import_reader<R: Read>(&self, source_name: &str, reader: R) -> ImportReport {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(reader);

        let mut report = ImportReport::default();
        let mut record = csv::ByteRecord::new();
        loop {
            match reader.read_byte_record(&mut record) {
                Ok(true) => {}
                Ok(false) => break,
                Err(source) => {
                    let error = ImportError::Io {
                        source_name: source_name.to_string(),
                        source,
                    };
                    self.log.error(&error, error_source(&error));
                    report.errors.push(error);
                    break;
                }
            }

            match parse_record(&record) {
                Ok(transaction) => {
                    self.log.debug(format_args!("imported transaction {transaction}"));
                    report.transactions.push(transaction);
                }
                Err(source) => {
                    let error = ImportError::LineParse {
                        source_name: source_name.to_string(),
                        line_number: record.position().map_or(0, |p| p.line()),
                        line: line_text(&record),
                        source,
                    };
                    self.log.error(&error, error_source(&error));
                    report.errors.push(error);
                }
            }
        }
        report
    }
}

/// Fields are trimmed here rather than by the reader so `line_text` still sees the raw line.
fn parse_record(record: &csv::ByteRecord) -> Result<Transaction, LineError> {
    if record.len() != FIELD_COUNT {
        return Err(LineError::FieldCount(record.len()));
    }
    let mut trimmed = record.clone();
    trimmed.trim();
    let raw: TransactionRaw = trimmed.deserialize(None).map_err(LineError::Malformed)?;
    Transaction::try_from(raw)
}

/// The line as read, without its terminator. Exact because quoting is off.
fn line_text(record: &csv::ByteRecord) -> String {
    record
        .iter()
        .map(String::from_utf8_lossy)
        .collect::<Vec<_>>()
        .join(",")
}

fn error_source(error: &ImportError) -> Option<&dyn std::error::Error> {
    std::error::Error::source(error)
}
