use std::io;
use thiserror::Error;

/// Why a single line could not be turned into a transaction.
#[derive(Debug, Error)]
pub enum LineError {
    #[error("expected 3 fields but found {0}")]
    FieldCount(usize),

    #[error("malformed record")]
    Malformed(#[source] csv::Error),

    #[error("cannot parse amount from string {text:?}")]
    Amount {
        text: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("cannot parse date from string {text:?}, expected dd-mm-yyyy")]
    Date {
        text: String,
        #[source]
        source: chrono::ParseError,
    },
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("file {source_name} does not exist - skip")]
    SourceNotFound {
        source_name: String,
        #[source]
        source: io::Error,
    },

    #[error("problem reading file {source_name}")]
    Io {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    #[error("cannot parse line {line_number} of {source_name} - please check syntax: {line}")]
    LineParse {
        source_name: String,
        line_number: u64,
        line: String,
        #[source]
        source: LineError,
    },
}
