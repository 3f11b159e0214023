use alloc::vec::Vec;
use core::ops::Index;

use ndarray::Array2;
use serde::Serialize;

use crate::*;

/// Maze terrain plus the positions of every entity on it.
///
/// The wall layout, goal, and checkpoints are fixed once built; only the player position changes, and only through
/// [`GameEngine`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GridModel {
    cells: Array2<Cell>,
    player: Coord2,
    goal: Coord2,
    checkpoints: Vec<Coord2>,
}

impl GridModel {
    /// Builds a model from explicit parts, checking every layout invariant.
    ///
    /// Border walls are always added; `walls` lists extra interior walls.
    pub fn from_parts(
        size: Coord2,
        walls: &[Coord2],
        player: Coord2,
        goal: Coord2,
        checkpoints: &[Coord2],
    ) -> Result<Self> {
        if size.0 < 3 || size.1 < 3 {
            return Err(ConfigError::GridTooSmall.into());
        }

        let mut cells = bordered_cells(size);
        for &coords in walls {
            if !in_bounds(size, coords) {
                return Err(GameError::InvalidCoords);
            }
            cells[coords.to_nd_index()] = Cell::Wall;
        }

        let entities: Vec<Coord2> = [player, goal]
            .into_iter()
            .chain(checkpoints.iter().copied())
            .collect();
        for (i, &coords) in entities.iter().enumerate() {
            if !is_interior(size, coords) {
                return Err(GameError::InvalidCoords);
            }
            if cells[coords.to_nd_index()].is_wall() {
                return Err(GameError::InvalidLayout("entity placed on a wall"));
            }
            if entities[..i].contains(&coords) {
                return Err(GameError::InvalidLayout("entities overlap"));
            }
        }

        Ok(Self::new_unchecked(cells, player, goal, checkpoints.to_vec()))
    }

    pub(crate) fn new_unchecked(
        cells: Array2<Cell>,
        player: Coord2,
        goal: Coord2,
        checkpoints: Vec<Coord2>,
    ) -> Self {
        Self {
            cells,
            player,
            goal,
            checkpoints,
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn in_bounds(&self, coords: Coord2) -> bool {
        in_bounds(self.size(), coords)
    }

    pub fn is_interior(&self, coords: Coord2) -> bool {
        is_interior(self.size(), coords)
    }

    /// Cell at `coords`, `None` when out of bounds.
    pub fn get(&self, coords: Coord2) -> Option<Cell> {
        self.in_bounds(coords).then(|| self[coords])
    }

    /// In bounds and not a wall.
    pub fn is_open(&self, coords: Coord2) -> bool {
        matches!(self.get(coords), Some(Cell::Empty))
    }

    pub fn player(&self) -> Coord2 {
        self.player
    }

    pub fn goal(&self) -> Coord2 {
        self.goal
    }

    pub fn checkpoints(&self) -> &[Coord2] {
        &self.checkpoints
    }

    pub fn is_checkpoint(&self, coords: Coord2) -> bool {
        self.checkpoints.contains(&coords)
    }

    pub fn entity_at(&self, coords: Coord2) -> Option<Entity> {
        if coords == self.player {
            Some(Entity::Player)
        } else if coords == self.goal {
            Some(Entity::Goal)
        } else if self.is_checkpoint(coords) {
            Some(Entity::Checkpoint)
        } else {
            None
        }
    }

    pub fn tile_at(&self, coords: Coord2) -> Tile {
        Tile::new(self[coords], self.entity_at(coords))
    }

    /// Renderer view of the whole grid.
    pub fn tiles(&self) -> Array2<Tile> {
        Array2::from_shape_fn(self.cells.dim(), |(row, col)| {
            self.tile_at((row as Coord, col as Coord))
        })
    }

    /// Total wall cells, border included.
    pub fn wall_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.is_wall())
            .count()
            .try_into()
            .unwrap()
    }

    /// Adjacent position in `direction`, `None` when it would leave the grid.
    pub fn step(&self, coords: Coord2, direction: Direction) -> Option<Coord2> {
        apply_delta(coords, direction.delta(), self.size())
    }

    /// Where a move from `from` ends up: the adjacent cell, or `from` itself when that cell is a wall.
    pub fn move_destination(&self, from: Coord2, direction: Direction) -> Coord2 {
        match self.step(from, direction) {
            Some(next) if self.is_open(next) => next,
            _ => from,
        }
    }

    pub(crate) fn set_player(&mut self, coords: Coord2) {
        debug_assert!(self.is_open(coords), "player moved onto a wall at {coords:?}");
        debug_assert!(coords != self.goal && !self.is_checkpoint(coords));
        self.player = coords;
    }
}

impl Index<Coord2> for GridModel {
    type Output = Cell;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.cells[(row as usize, col as usize)]
    }
}

/// Empty grid of `size` with the outer ring set to walls.
pub(crate) fn bordered_cells(size: Coord2) -> Array2<Cell> {
    let (rows, cols) = size;
    Array2::from_shape_fn(size.to_nd_index(), |(row, col)| {
        if row == 0 || col == 0 || row + 1 == rows as usize || col + 1 == cols as usize {
            Cell::Wall
        } else {
            Cell::Empty
        }
    })
}

pub(crate) fn in_bounds(size: Coord2, coords: Coord2) -> bool {
    coords.0 < size.0 && coords.1 < size.1
}

pub(crate) fn is_interior(size: Coord2, coords: Coord2) -> bool {
    (1..size.0.saturating_sub(1)).contains(&coords.0)
        && (1..size.1.saturating_sub(1)).contains(&coords.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid() -> GridModel {
        GridModel::from_parts((5, 6), &[(2, 3)], (1, 1), (3, 4), &[(3, 1)]).unwrap()
    }

    #[test]
    fn border_is_wall_and_interior_open() {
        let grid = open_grid();
        let (rows, cols) = grid.size();
        for row in 0..rows {
            for col in 0..cols {
                let coords = (row, col);
                let border = row == 0 || col == 0 || row == rows - 1 || col == cols - 1;
                if border || coords == (2, 3) {
                    assert_eq!(grid[coords], Cell::Wall, "{coords:?}");
                } else {
                    assert_eq!(grid[coords], Cell::Empty, "{coords:?}");
                }
            }
        }
        assert_eq!(grid.wall_count(), 2 * 5 + 2 * 6 - 4 + 1);
    }

    #[test]
    fn tiles_merge_entities() {
        let grid = open_grid();
        assert_eq!(grid.tile_at((1, 1)), Tile::Player);
        assert_eq!(grid.tile_at((3, 4)), Tile::Goal);
        assert_eq!(grid.tile_at((3, 1)), Tile::Checkpoint);
        assert_eq!(grid.tile_at((2, 3)), Tile::Wall);
        assert_eq!(grid.tile_at((2, 2)), Tile::Empty);
        assert_eq!(grid.tiles()[(1, 1)], Tile::Player);
    }

    #[test]
    fn move_destination_absorbs_walls() {
        let grid = open_grid();
        assert_eq!(grid.move_destination((2, 2), Direction::Right), (2, 2));
        assert_eq!(grid.move_destination((2, 2), Direction::Left), (2, 1));
        assert_eq!(grid.move_destination((1, 1), Direction::Up), (1, 1));
    }

    #[test]
    fn from_parts_rejects_invalid_layouts() {
        assert_eq!(
            GridModel::from_parts((2, 5), &[], (1, 1), (1, 2), &[]),
            Err(GameError::Configuration(ConfigError::GridTooSmall))
        );
        assert_eq!(
            GridModel::from_parts((5, 5), &[], (0, 1), (2, 2), &[]),
            Err(GameError::InvalidCoords)
        );
        assert_eq!(
            GridModel::from_parts((5, 5), &[(9, 9)], (1, 1), (2, 2), &[]),
            Err(GameError::InvalidCoords)
        );
        assert_eq!(
            GridModel::from_parts((5, 5), &[(2, 2)], (1, 1), (2, 2), &[]),
            Err(GameError::InvalidLayout("entity placed on a wall"))
        );
        assert_eq!(
            GridModel::from_parts((5, 5), &[], (1, 1), (2, 2), &[(1, 1)]),
            Err(GameError::InvalidLayout("entities overlap"))
        );
    }

    #[test]
    fn get_is_none_out_of_bounds() {
        let grid = open_grid();
        assert_eq!(grid.get((5, 0)), None);
        assert_eq!(grid.get((0, 0)), Some(Cell::Wall));
        assert!(!grid.is_open((4, 6)));
        assert!(grid.is_interior((3, 4)));
        assert!(!grid.is_interior((4, 4)));
    }
}
