//! File logging
//!
//! The terminal belongs to the UI, so log records go to a file. Nothing is
//! initialized when no file is configured.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use env_logger::{Env, Target};

use crate::error::PredictorError;

const DEFAULT_FILTER: &str = "info";

/// Route `log` records to `path`, appending
///
/// The filter comes from `RUST_LOG`, defaulting to `info`.
pub fn init_file_logging(path: &Path) -> Result<(), PredictorError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .map_err(|e| PredictorError::Config(format!("logger already initialized: {}", e)))
}
