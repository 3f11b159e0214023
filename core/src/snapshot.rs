use alloc::vec::Vec;
use core::fmt;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Read-only copy of a game handed to renderers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: Coord2,
    pub tiles: Array2<Tile>,
    pub player: Coord2,
    pub goal: Coord2,
    pub checkpoints: Vec<Coord2>,
    pub state: EngineState,
    pub depth_bound: Depth,
    pub turn: u32,
}

impl Snapshot {
    pub fn from_engine(engine: &GameEngine) -> Self {
        let grid = engine.grid();
        Self {
            size: grid.size(),
            tiles: grid.tiles(),
            player: grid.player(),
            goal: grid.goal(),
            checkpoints: grid.checkpoints().to_vec(),
            state: engine.state(),
            depth_bound: engine.depth_bound(),
            turn: engine.turn(),
        }
    }

    pub fn tile_at(&self, coords: Coord2) -> Tile {
        self.tiles[coords.to_nd_index()]
    }
}

/// One text row per grid row, using [`Tile::glyph`].
impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.rows() {
            for tile in row {
                write!(f, "{}", tile.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
