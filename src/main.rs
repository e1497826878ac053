use crate::csv_handler::TransactionImporter;
use crate::log_channel::{FILE_TARGET, LogChannel, TRANSACTIONS_TARGET};
use crate::summary::Summary;
use std::path::PathBuf;

mod csv_handler;
mod error;
mod log_channel;
mod summary;
mod transaction;

const DEFAULT_SOURCES: [&str; 4] = [
    "transactions1.csv",
    "transactions2.csv",
    "transactions3.csv",
    "transactions4.csv",
];

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut sources: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    if sources.is_empty() {
        sources = DEFAULT_SOURCES.iter().map(PathBuf::from).collect();
    }

    let file_log = LogChannel::new(FILE_TARGET, log::logger());
    let importer = TransactionImporter::new(file_log);
    let mut transactions = Vec::new();
    for source in &sources {
        let report = importer.import_from(source);
        file_log.debug(format_args!(
            "{}: {} transactions, {} problems",
            source.display(),
            report.transactions.len(),
            report.errors.len()
        ));
        transactions.extend(report.transactions);
    }

    Summary::of(&transactions).log(&LogChannel::new(TRANSACTIONS_TARGET, log::logger()));
    log::logger().flush();
}
