use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::*;

/// One orthogonal step on the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Neighbor exploration order used by the path search: down, up, right, left.
    pub const SEARCH_ORDER: [Direction; 4] = [
        Direction::Down,
        Direction::Up,
        Direction::Right,
        Direction::Left,
    ];

    /// `(Δrow, Δcol)` for one step in this direction.
    pub const fn delta(self) -> (i8, i8) {
        use Direction::*;
        match self {
            Up => (-1, 0),
            Down => (1, 0),
            Left => (0, -1),
            Right => (0, 1),
        }
    }

    pub const fn name(self) -> &'static str {
        use Direction::*;
        match self {
            Up => "up",
            Down => "down",
            Left => "left",
            Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts `up/down/left/right` and the `w/s/a/d` keys, ignoring case and surrounding whitespace.
impl FromStr for Direction {
    type Err = GameError;

    fn from_str(token: &str) -> Result<Self> {
        let token = token.trim();
        let eq = |name: &str| token.eq_ignore_ascii_case(name);
        if eq("up") || eq("w") {
            Ok(Direction::Up)
        } else if eq("down") || eq("s") {
            Ok(Direction::Down)
        } else if eq("left") || eq("a") {
            Ok(Direction::Left)
        } else if eq("right") || eq("d") {
            Ok(Direction::Right)
        } else {
            Err(GameError::InvalidDirection(token.to_string()))
        }
    }
}
