//! Optional JSON configuration file.

use crate::theme::ThemeName;
use anyhow::Context;
use board::PositionSource;
use notation::Position;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Start position as board notation.
    pub fen: Option<String>,
    /// Start position as a square -> piece token map. `fen` wins when
    /// both are set.
    pub position: Option<BTreeMap<String, String>>,
    pub theme: Option<ThemeName>,
    pub orientation: Option<StartOrientation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartOrientation {
    White,
    Black,
}

pub fn load(path: &Path) -> anyhow::Result<FileConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let config: FileConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config file {}", path.display()))?;
    Ok(config)
}

impl FileConfig {
    /// The configured start position, if any. Token errors in the map
    /// form surface here, before any board state is touched.
    pub fn start_position(&self) -> anyhow::Result<Option<PositionSource>> {
        if let Some(fen) = &self.fen {
            return Ok(Some(PositionSource::Fen(fen.clone())));
        }
        if let Some(map) = &self.position {
            let position =
                Position::from_entries(map.iter().map(|(s, p)| (s.as_str(), p.as_str())))
                    .context("config position map")?;
            return Ok(Some(PositionSource::Map(position)));
        }
        Ok(None)
    }
}
