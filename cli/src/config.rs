use std::{fs, io::ErrorKind, path::Path};

use log::info;
use serde::Deserialize;

/// App-level settings consumed by the renderer. The core never sees these.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Color the sticker letters with ANSI escapes.
    pub colored: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config { colored: true }
    }
}

impl Config {
    /// Reads the configuration document, falling back to defaults when the
    /// file does not exist. Unknown fields are ignored.
    pub fn load_or_default(path: &Path) -> color_eyre::Result<Config> {
        match fs::read_to_string(path) {
            Ok(doc) => Ok(serde_json::from_str(&doc)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("no config at {}, using defaults", path.display());
                Ok(Config::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}
