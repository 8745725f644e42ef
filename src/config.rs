/// Manages the configuration; related tools.
use crate::types::*;
use anyhow::{Context, Result};
use log::debug;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "progmem-headers";

/// Where we look for a config when none is given on the command line.
pub fn default_config_file() -> Option<PathBuf> {
    let mut cfgpath = dirs::config_dir()?;
    cfgpath.push(APP_DIR);
    cfgpath.push("config.ron");
    Some(cfgpath)
}

pub fn parse_config(text: &str) -> Result<Config> {
    let cfg: Config = ron::de::from_str(text)?;
    Ok(cfg)
}

fn read_config(path: &Path) -> Result<Config> {
    let cfgfile = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {:?}", path))?;
    parse_config(&cfgfile).with_context(|| format!("Failed to parse config {:?}", path))
}

/// An explicit path must exist. The per-user file is optional; defaults fill in otherwise.
pub fn load_config(explicit: Option<PathBuf>) -> Result<Config> {
    match explicit {
        Some(path) => read_config(&path),
        None => match default_config_file() {
            Some(path) if path.is_file() => read_config(&path),
            _ => {
                debug!("No config file found, using defaults.");
                Ok(Config::default())
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full() {
        let cfg = parse_config(r#"(loglevel: 4, logfile: Some("/tmp/headers.log"))"#).unwrap();
        assert_eq!(cfg.loglevel, 4);
        assert_eq!(cfg.logfile, Some(PathBuf::from("/tmp/headers.log")));
    }

    #[test]
    fn test_parse_defaults() {
        let cfg = parse_config("()").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.loglevel, 2);
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_config("(loglevel: \"loud\")").is_err());
    }

    #[test]
    fn test_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.ron");
        std::fs::write(&path, "(loglevel: 3)").unwrap();
        assert_eq!(load_config(Some(path)).unwrap().loglevel, 3);
    }

    #[test]
    fn test_explicit_path_missing() {
        let dir = TempDir::new().unwrap();
        assert!(load_config(Some(dir.path().join("nope.ron"))).is_err());
    }

    #[test]
    fn test_roundtrip_pretty() {
        let cfg = Config {
            loglevel: 5,
            logfile: Some(PathBuf::from("out.log")),
        };
        let text = ron::ser::to_string_pretty(&cfg, ron::ser::PrettyConfig::default()).unwrap();
        assert_eq!(parse_config(&text).unwrap(), cfg);
    }
}
