//! File logging for terminal front-ends, which cannot log to stdout.

use std::fs::File;
use std::path::Path;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::Result;

/// Route `log` output to `path`, truncating it.
pub fn init_file_logger(path: impl AsRef<Path>, level: LevelFilter) -> Result<()> {
    let log_file = File::create(path)?;
    WriteLogger::init(level, Config::default(), log_file)?;
    Ok(())
}
