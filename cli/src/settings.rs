use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use twenty48_core::{Game, GameConfig, Tile};

/// Contents of the optional `--config` TOML file.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub seed: Option<u64>,
    pub game: GameConfig,
    pub initial_state: Option<Vec<Vec<Tile>>>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let settings: Self = toml::from_str(text)?;
        settings.game.validate()?;
        Ok(settings)
    }

    pub fn build_game(&self, seed: u64) -> Result<Game> {
        let game = match &self.initial_state {
            Some(rows) => Game::from_rows(rows.as_slice(), self.game, seed)?,
            None => Game::with_config(self.game.validate()?, seed),
        };
        Ok(game)
    }
}
