use core::fmt;

use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Playing,
    Won,
    Lost,
}

impl EngineState {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Playing
    }
}

/// Result of the path search run after a non-terminal move.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    pub depth_bound: Depth,
    pub path: Option<Path>,
}

/// Everything that happened during one accepted move.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnReport {
    pub turn: u32,
    pub direction: Direction,
    pub outcome: MoveOutcome,
    /// Player position after a non-terminal move; on a win or loss the goal or checkpoint that was hit, the player
    /// itself stays put
    pub position: Coord2,
    /// Absent once the game has ended
    pub search: Option<SearchReport>,
}

impl fmt::Display for TurnReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (row, col) = self.position;
        match self.outcome {
            MoveOutcome::ReachedGoal => {
                return f.write_str("Congratulations, you reached the goal!");
            }
            MoveOutcome::HitCheckpoint => {
                return write!(f, "Caught by a checkpoint at ({}, {})! Game over.", row, col);
            }
            MoveOutcome::Blocked => {
                writeln!(f, "Blocked by a wall, staying at ({}, {}).", row, col)?;
            }
            MoveOutcome::Moved => {}
        }

        match &self.search {
            Some(SearchReport {
                depth_bound,
                path: Some(path),
            }) => write!(f, "Path to goal (depth limit {}): {}", depth_bound, path),
            Some(SearchReport {
                depth_bound,
                path: None,
            }) => write!(f, "No path found within depth limit {}.", depth_bound),
            None => Ok(()),
        }
    }
}

/// Turn-based game over a generated maze.
///
/// Each accepted move is applied, checked for a win or loss, and followed by a path search from the player to the
/// goal whose depth bound grows by one every turn.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameEngine {
    grid: GridModel,
    state: EngineState,
    depth_bound: Depth,
    turn: u32,
}

impl GameEngine {
    pub fn new(grid: GridModel) -> Self {
        Self {
            grid,
            state: Default::default(),
            depth_bound: 1,
            turn: 0,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Bound the next search will use.
    pub fn depth_bound(&self) -> Depth {
        self.depth_bound
    }

    /// Accepted moves so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    pub fn player(&self) -> Coord2 {
        self.grid.player()
    }

    /// Parse a raw direction token and apply it.
    ///
    /// Unrecognized tokens fail with [`GameError::InvalidDirection`] and leave the game untouched.
    pub fn apply_input(&mut self, token: &str) -> Result<TurnReport> {
        self.check_playing()?;
        let direction = token.parse()?;
        self.apply_move(direction)
    }

    pub fn apply_move(&mut self, direction: Direction) -> Result<TurnReport> {
        use MoveOutcome::*;

        self.check_playing()?;

        let from = self.grid.player();
        let candidate = self.grid.move_destination(from, direction);
        self.turn += 1;

        let outcome = if candidate == self.grid.goal() {
            self.end_game(true);
            ReachedGoal
        } else if self.grid.is_checkpoint(candidate) {
            self.end_game(false);
            HitCheckpoint
        } else if candidate == from {
            Blocked
        } else {
            self.grid.set_player(candidate);
            Moved
        };
        log::debug!(
            "Turn {}: {} from {:?} to {:?}, {:?}",
            self.turn,
            direction,
            from,
            candidate,
            outcome
        );

        let search = (!outcome.is_terminal()).then(|| self.search_goal());

        Ok(TurnReport {
            turn: self.turn,
            direction,
            outcome,
            position: candidate,
            search,
        })
    }

    /// Searches from the player to the goal with the current bound, then raises the bound whatever the result.
    fn search_goal(&mut self) -> SearchReport {
        let depth_bound = self.depth_bound;
        let path = search(&self.grid, self.grid.player(), self.grid.goal(), depth_bound);
        self.depth_bound = self.depth_bound.saturating_add(1);
        SearchReport { depth_bound, path }
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won {
            EngineState::Won
        } else {
            EngineState::Lost
        };
        log::info!("Game ended after {} turns: {:?}", self.turn, self.state);
    }

    fn check_playing(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
