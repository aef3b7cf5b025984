mod args;
mod errors;
mod logfile;

pub use args::Args;
pub use errors::{Error, Result};

use crate::filter::LineFilteringReader;
use crate::serial::PortSettings;
use crate::shutdown;
use std::io;

/// Runs until a signal arrives and returns its number.
///
/// Startup order: arguments, log file, signal handler, serial device. Only
/// the first three can fail; device problems are reported and the loop
/// runs regardless. The log file and the port are owned by the reader and
/// closed before this returns.
pub fn run<I>(args: I) -> Result<i32>
where
    I: IntoIterator<Item = String>,
{
    let args = Args::parse(args)?;
    let log = logfile::create(&args.log_path)?;
    shutdown::install().map_err(Error::Signal)?;

    let settings = PortSettings::default();
    log::info!(
        "Tracing {} to {}",
        settings.path,
        args.log_path.display()
    );
    let connection = crate::serial::open(&settings);

    let mut reader = LineFilteringReader::new(connection, log, io::stdout());
    let signum = reader.run(shutdown::caught);

    println!("Caught signal {}", signum);
    if let Err(e) = reader.close() {
        log::error!("{}", e);
    }
    Ok(signum)
}
