#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use direction::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use search::*;
pub use snapshot::*;
pub use tile::*;
pub use types::*;

mod direction;
mod engine;
mod error;
mod generator;
mod grid;
mod search;
mod snapshot;
mod tile;
mod types;

/// Grid dimensions and how many checkpoints and extra walls to scatter over the interior.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// `(height, width)`, border included
    pub size: Coord2,
    pub checkpoints: CellCount,
    /// Wall draws; duplicates and draws landing on entities are dropped, so fewer may end up placed
    pub walls: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, checkpoints: CellCount, walls: CellCount) -> Self {
        Self {
            size,
            checkpoints,
            walls,
        }
    }

    pub fn new(size: Coord2, checkpoints: CellCount, walls: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, checkpoints, walls);
        config.validate()?;
        Ok(config)
    }

    /// 10x15 grid with 2 checkpoints and 30 wall draws.
    pub const fn classic() -> Self {
        Self::new_unchecked((10, 15), 2, 30)
    }

    pub fn validate(&self) -> Result<()> {
        if self.interior_cells() < 2 {
            return Err(ConfigError::GridTooSmall.into());
        }

        let max = self.max_checkpoints();
        if self.checkpoints > max {
            return Err(ConfigError::TooManyCheckpoints {
                requested: self.checkpoints,
                max,
            }
            .into());
        }

        Ok(())
    }

    /// `(height, width)` without the border ring.
    pub const fn interior_size(&self) -> Coord2 {
        (self.size.0.saturating_sub(2), self.size.1.saturating_sub(2))
    }

    pub const fn interior_cells(&self) -> CellCount {
        let (rows, cols) = self.interior_size();
        mult(rows, cols)
    }

    /// Upper bound on checkpoints: they must keep a Chebyshev distance of 2 from each other and leave two cells free
    /// for the player and the goal.
    pub const fn max_checkpoints(&self) -> CellCount {
        let (rows, cols) = self.interior_size();
        let packed = mult(rows.div_ceil(2), cols.div_ceil(2));
        let free = self.interior_cells().saturating_sub(2);
        if packed < free { packed } else { free }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}

/// What a single move did to the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Stepped onto an empty cell
    Moved,
    /// Walked into a wall and stayed put
    Blocked,
    ReachedGoal,
    HitCheckpoint,
}

impl MoveOutcome {
    /// Whether this outcome ends the game
    pub const fn is_terminal(self) -> bool {
        use MoveOutcome::*;
        match self {
            Moved => false,
            Blocked => false,
            ReachedGoal => true,
            HitCheckpoint => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_config_is_valid() {
        let config = GameConfig::classic();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.interior_size(), (8, 13));
        assert_eq!(config.interior_cells(), 104);
        assert_eq!(config.max_checkpoints(), 28);
        assert_eq!(GameConfig::default(), config);
    }

    #[test]
    fn rejects_grids_without_room() {
        assert_eq!(
            GameConfig::new((3, 3), 0, 0),
            Err(GameError::Configuration(ConfigError::GridTooSmall))
        );
        assert_eq!(
            GameConfig::new((2, 40), 0, 0),
            Err(GameError::Configuration(ConfigError::GridTooSmall))
        );
        assert!(GameConfig::new((3, 4), 0, 10).is_ok());
    }

    #[test]
    fn rejects_checkpoints_beyond_packing_bound() {
        assert_eq!(
            GameConfig::new((6, 6), 5, 0),
            Err(GameError::Configuration(ConfigError::TooManyCheckpoints {
                requested: 5,
                max: 4,
            }))
        );
        assert_eq!(
            GameConfig::new((3, 4), 1, 0),
            Err(GameError::Configuration(ConfigError::TooManyCheckpoints {
                requested: 1,
                max: 0,
            }))
        );
        assert!(GameConfig::new((6, 6), 4, 0).is_ok());
    }
}
