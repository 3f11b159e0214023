use crate::*;
pub use random::*;

mod random;

pub trait MazeGenerator {
    fn generate(self, config: GameConfig) -> Result<GridModel>;
}
