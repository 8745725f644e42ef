// use like:
//   progmem-headers ./site headers
// to turn every .html/.css/.js under ./site into a PROGMEM header under ./headers
use anyhow::Result;
use clap::Parser;
use log::debug;
use std::path::PathBuf;
mod config;
mod generator;
mod header;
mod sanitize;
mod types;
mod util;
mod walker;
use crate::config::load_config;
use crate::generator::generate;

/// Convert static web files to Arduino PROGMEM .h files.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory containing .html/.css/.js files
    input_dir: PathBuf,
    /// Directory where .h files will be written
    output_dir: PathBuf,
    /// RON config file (log level, log file)
    #[arg(short = 'c', long = "config")]
    config_path: Option<PathBuf>,
    /// More logging; repeat for more
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let cfg = load_config(args.config_path.clone())?;
    let loglevel = util::level_with_verbosity(cfg.loglevel, args.verbose);
    util::configure_logging(loglevel, cfg.logfile.clone())?;
    debug!("Loaded config: {:?}", &cfg);

    let summary = generate(&args.input_dir, &args.output_dir)?;
    if summary.input_found {
        debug!("Done, {} header(s) written.", summary.generated.len());
    }
    Ok(())
}
