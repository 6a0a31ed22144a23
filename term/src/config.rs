use std::fs;
use std::path::{Path, PathBuf};

use minesweep_core::{CellCount, Coord, GameConfig};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// One source of settings. Unset fields fall through to the next layer.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigLayer {
    pub width: Option<Coord>,
    pub height: Option<Coord>,
    pub mines: Option<CellCount>,
    pub ascii: Option<bool>,
    pub color: Option<bool>,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl ConfigLayer {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::parse(&text, path)
    }

    fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    /// Fields set on `self` win over `lower`.
    pub fn layered_over(self, lower: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            width: self.width.or(lower.width),
            height: self.height.or(lower.height),
            mines: self.mines.or(lower.mines),
            ascii: self.ascii.or(lower.ascii),
            color: self.color.or(lower.color),
            seed: self.seed.or(lower.seed),
            log_file: self.log_file.or(lower.log_file),
        }
    }

    pub fn resolve(self) -> Settings {
        Settings {
            width: self.width.unwrap_or(Settings::DEFAULT_WIDTH),
            height: self.height.unwrap_or(Settings::DEFAULT_HEIGHT),
            mines: self.mines.unwrap_or(Settings::DEFAULT_MINES),
            ascii: self.ascii.unwrap_or(false),
            color: self.color.unwrap_or(true),
            seed: self.seed,
            log_file: self.log_file,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
    pub ascii: bool,
    pub color: bool,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    pub const DEFAULT_WIDTH: Coord = 30;
    pub const DEFAULT_HEIGHT: Coord = 30;
    pub const DEFAULT_MINES: CellCount = 99;

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new((self.width, self.height), self.mines)
    }
}

impl Default for Settings {
    fn default() -> Self {
        ConfigLayer::default().resolve()
    }
}
