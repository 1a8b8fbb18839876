use anyhow::{Context, Result, anyhow};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub static_dir: PathBuf,
    pub is_dev: bool,
    pub enable_file_log: bool,
    pub log_dir: PathBuf,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Every variable is optional; unset values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .context("PORT must be a valid u16 integer")?,
            None => 8080,
        };

        let is_dev = parse_flag("DEV_MODE", lookup("DEV_MODE"))?;
        let enable_file_log = parse_flag("ENABLE_FILE_LOG", lookup("ENABLE_FILE_LOG"))?;

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static")));

        let log_dir = lookup("LOG_DIR").map(PathBuf::from).unwrap_or_else(|| {
            if is_dev {
                PathBuf::from("./logs")
            } else {
                PathBuf::from("/var/log/app")
            }
        });

        Ok(Self {
            port,
            static_dir,
            is_dev,
            enable_file_log,
            log_dir,
        })
    }
}

fn parse_flag(name: &str, value: Option<String>) -> Result<bool> {
    match value.as_deref() {
        None | Some("") => Ok(false),
        Some("true") | Some("1") => Ok(true),
        Some("false") | Some("0") => Ok(false),
        Some(other) => Err(anyhow!("{name} must be 'true' or 'false', got '{other}'")),
    }
}
