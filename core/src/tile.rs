use serde::{Deserialize, Serialize};

/// Terrain stored in the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Wall,
}

impl Cell {
    pub const fn is_wall(self) -> bool {
        matches!(self, Self::Wall)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

/// Marker that can sit on top of an empty cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entity {
    Player,
    Goal,
    Checkpoint,
}

/// What a renderer sees at one position: terrain merged with the entity on top of it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Empty,
    Wall,
    Player,
    Goal,
    Checkpoint,
}

impl Tile {
    pub const fn new(cell: Cell, entity: Option<Entity>) -> Self {
        match (cell, entity) {
            (Cell::Wall, _) => Tile::Wall,
            (Cell::Empty, None) => Tile::Empty,
            (Cell::Empty, Some(Entity::Player)) => Tile::Player,
            (Cell::Empty, Some(Entity::Goal)) => Tile::Goal,
            (Cell::Empty, Some(Entity::Checkpoint)) => Tile::Checkpoint,
        }
    }

    /// Glyph used by text renderers
    pub const fn glyph(self) -> char {
        use Tile::*;
        match self {
            Empty => ' ',
            Wall => '\u{2588}',
            Player => 'P',
            Goal => 'G',
            Checkpoint => 'C',
        }
    }
}
