use std::fs;
use std::path::Path;

use anyhow::Context;
use mazerun_core::{CellCount, Coord, GameConfig};
use serde::Deserialize;

/// How frames are drawn on stdout.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub(crate) enum RenderMode {
    /// Glyph grid for a terminal
    #[default]
    Text,
    /// One JSON snapshot per line for an external renderer
    Json,
}

/// Game settings from the config file or the command line; unset fields fall back to the classic game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Settings {
    pub(crate) height: Option<Coord>,
    pub(crate) width: Option<Coord>,
    pub(crate) checkpoints: Option<CellCount>,
    pub(crate) walls: Option<CellCount>,
    pub(crate) seed: Option<u64>,
    pub(crate) render: Option<RenderMode>,
}

impl Settings {
    pub(crate) fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("could not read settings from {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid settings in {}", path.display()))
    }

    pub(crate) fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Values set in `other` win.
    pub(crate) fn merge(self, other: Settings) -> Settings {
        Settings {
            height: other.height.or(self.height),
            width: other.width.or(self.width),
            checkpoints: other.checkpoints.or(self.checkpoints),
            walls: other.walls.or(self.walls),
            seed: other.seed.or(self.seed),
            render: other.render.or(self.render),
        }
    }

    pub(crate) fn game_config(&self) -> mazerun_core::Result<GameConfig> {
        let classic = GameConfig::classic();
        GameConfig::new(
            (
                self.height.unwrap_or(classic.size.0),
                self.width.unwrap_or(classic.size.1),
            ),
            self.checkpoints.unwrap_or(classic.checkpoints),
            self.walls.unwrap_or(classic.walls),
        )
    }

    pub(crate) fn render_mode(&self) -> RenderMode {
        self.render.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazerun_core::{ConfigError, GameError};

    #[test]
    fn empty_settings_give_classic_game() {
        let settings = Settings::parse("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.game_config().unwrap(), GameConfig::classic());
        assert_eq!(settings.render_mode(), RenderMode::Text);
    }

    #[test]
    fn parses_toml_file_fields() {
        let settings = Settings::parse(
            r#"
            height = 12
            width = 20
            checkpoints = 4
            walls = 50
            seed = 99
            render = "json"
            "#,
        )
        .unwrap();

        let config = settings.game_config().unwrap();
        assert_eq!(config.size, (12, 20));
        assert_eq!(config.checkpoints, 4);
        assert_eq!(config.walls, 50);
        assert_eq!(settings.seed, Some(99));
        assert_eq!(settings.render_mode(), RenderMode::Json);
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(Settings::parse("depth = 3").is_err());
    }

    #[test]
    fn command_line_overrides_file() {
        let file = Settings {
            height: Some(12),
            walls: Some(10),
            seed: Some(1),
            ..Default::default()
        };
        let args = Settings {
            walls: Some(0),
            seed: Some(2),
            ..Default::default()
        };

        let merged = file.merge(args);

        assert_eq!(merged.height, Some(12));
        assert_eq!(merged.walls, Some(0));
        assert_eq!(merged.seed, Some(2));
        assert_eq!(merged.width, None);
    }

    #[test]
    fn impossible_config_is_reported() {
        let settings = Settings {
            height: Some(5),
            width: Some(5),
            checkpoints: Some(9),
            ..Default::default()
        };
        assert_eq!(
            settings.game_config(),
            Err(GameError::Configuration(ConfigError::TooManyCheckpoints {
                requested: 9,
                max: 4,
            }))
        );
    }
}
