use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use super::*;

/// Rejection-sampling draws per placement before falling back to a scan of every eligible cell.
pub const MAX_SAMPLE_ATTEMPTS: u32 = 1024;

/// Purely random placement: player, goal, and checkpoints are drawn uniformly from the interior, then walls are
/// scattered over whatever is left. No attempt is made to keep the goal reachable.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMazeGenerator {
    seed: u64,
}

impl RandomMazeGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MazeGenerator for RandomMazeGenerator {
    fn generate(self, config: GameConfig) -> Result<GridModel> {
        config.validate()?;

        let size = config.size;
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut cells = bordered_cells(size);

        let player = sample_interior(&mut rng, size);
        log::debug!("Placed player at {:?}", player);

        let mut checkpoints: Vec<Coord2> = Vec::with_capacity(config.checkpoints.into());

        // checkpoints are still empty here, the check only matters if the order ever changes
        let goal = sample_interior_where(&mut rng, size, Entity::Goal, |coords| {
            coords != player && !checkpoints.contains(&coords)
        })?;
        log::debug!("Placed goal at {:?}", goal);

        // only other checkpoints get an exclusion zone, the player and goal may sit right next to one
        for _ in 0..config.checkpoints {
            let checkpoint = sample_interior_where(&mut rng, size, Entity::Checkpoint, |coords| {
                coords != player
                    && coords != goal
                    && checkpoints.iter().all(|&other| chebyshev(coords, other) >= 2)
            })?;
            log::debug!("Placed checkpoint at {:?}", checkpoint);
            checkpoints.push(checkpoint);
        }

        let mut walls_placed: CellCount = 0;
        for _ in 0..config.walls {
            let coords = sample_interior(&mut rng, size);
            if coords == player || coords == goal || checkpoints.contains(&coords) {
                log::trace!("Skipping wall on entity at {:?}", coords);
                continue;
            }
            let cell = &mut cells[coords.to_nd_index()];
            if !cell.is_wall() {
                *cell = Cell::Wall;
                walls_placed += 1;
            }
        }
        log::debug!(
            "Placed {} interior walls out of {} draws",
            walls_placed,
            config.walls
        );

        Ok(GridModel::new_unchecked(cells, player, goal, checkpoints))
    }
}

fn sample_interior<R: Rng + ?Sized>(rng: &mut R, (rows, cols): Coord2) -> Coord2 {
    (rng.random_range(1..rows - 1), rng.random_range(1..cols - 1))
}

/// Uniform draw over the interior cells accepted by `accept`.
fn sample_interior_where<R, F>(rng: &mut R, size: Coord2, entity: Entity, accept: F) -> Result<Coord2>
where
    R: Rng + ?Sized,
    F: Fn(Coord2) -> bool,
{
    for attempt in 1..=MAX_SAMPLE_ATTEMPTS {
        let coords = sample_interior(rng, size);
        if accept(coords) {
            return Ok(coords);
        }
        log::trace!("Rejected {:?} candidate {:?} (attempt {})", entity, coords, attempt);
    }

    log::warn!(
        "No {:?} spot after {} draws, scanning the interior",
        entity,
        MAX_SAMPLE_ATTEMPTS
    );
    let candidates: Vec<Coord2> = interior_coords(size).filter(|&coords| accept(coords)).collect();
    candidates
        .choose(rng)
        .copied()
        .ok_or_else(|| ConfigError::NoRoomFor(entity).into())
}

fn interior_coords((rows, cols): Coord2) -> impl Iterator<Item = Coord2> {
    (1..rows - 1).flat_map(move |row| (1..cols - 1).map(move |col| (row, col)))
}
