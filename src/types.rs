use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
#[derive(Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_loglevel")]
    pub loglevel: usize, //0: off, 1: error, 2: warn, 3: info, 4: debug, 5: pedantic
    #[serde(default = "default_logfile")]
    pub logfile: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            loglevel: default_loglevel(),
            logfile: default_logfile(),
        }
    }
}

fn default_loglevel() -> usize {
    2
}

fn default_logfile() -> Option<PathBuf> {
    None
}

/// What a finished run did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// False when the input directory was missing and nothing was attempted.
    pub input_found: bool,
    pub generated: Vec<PathBuf>,
}
