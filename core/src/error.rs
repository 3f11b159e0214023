use alloc::string::String;
use thiserror::Error;

use crate::{CellCount, Entity};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    Configuration(#[from] ConfigError),
    #[error("Invalid move {0:?}, expected up/down/left/right or w/s/a/d")]
    InvalidDirection(String),
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Invalid grid layout: {0}")]
    InvalidLayout(&'static str),
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

/// Requested grid cannot be built.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid is too small to hold a player and a goal")]
    GridTooSmall,
    #[error("too many checkpoints, requested {requested} but at most {max} fit")]
    TooManyCheckpoints { requested: CellCount, max: CellCount },
    #[error("no free interior cell left to place the {0:?}")]
    NoRoomFor(Entity),
}

pub type Result<T> = core::result::Result<T, GameError>;
