use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::iter;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Route found by [`search`], from its source to its target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    /// Source first, target last; a single entry when source and target coincide
    route: Vec<Coord2>,
}

impl Path {
    pub fn source(&self) -> Coord2 {
        self.route[0]
    }

    pub fn target(&self) -> Coord2 {
        self.route[self.route.len() - 1]
    }

    /// Steps to take, source excluded. A path that starts on its target is just `[target]`.
    pub fn positions(&self) -> &[Coord2] {
        match self.route.len() {
            1 => &self.route[..],
            _ => &self.route[1..],
        }
    }

    /// Number of edges traversed.
    pub fn len(&self) -> usize {
        self.route.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, (row, col)) in self.positions().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({}, {})", row, col)?;
        }
        f.write_str("]")
    }
}

#[derive(Debug)]
struct Frame {
    coords: Coord2,
    remaining: Depth,
    /// Index into [`Direction::SEARCH_ORDER`] of the next neighbor to try
    next: usize,
}

impl Frame {
    fn new(coords: Coord2, remaining: Depth) -> Self {
        Self {
            coords,
            remaining,
            next: 0,
        }
    }
}

/// Depth-first search from `source` to `target` traversing at most `depth_bound` edges.
///
/// Neighbors are tried down, up, right, left and the first route reached is returned, which is not necessarily the
/// shortest. Every cell remembers the most depth it had left when entered during this call and is only entered again
/// with strictly more, so no route within the bound is missed and a branch never loops back on itself.
///
/// Endpoints outside the grid or on a wall yield `None`.
pub fn search(grid: &GridModel, source: Coord2, target: Coord2, depth_bound: Depth) -> Option<Path> {
    if !grid.is_open(source) || !grid.is_open(target) {
        log::debug!(
            "Search endpoints {:?} -> {:?} are not open cells",
            source,
            target
        );
        return None;
    }

    if source == target {
        return Some(Path {
            route: vec![target],
        });
    }

    if depth_bound == 0 {
        return None;
    }

    let mut best_remaining: Array2<Option<Depth>> =
        Array2::from_elem(grid.size().to_nd_index(), None);
    best_remaining[source.to_nd_index()] = Some(depth_bound);
    let mut stack = vec![Frame::new(source, depth_bound)];
    let mut entered: usize = 1;

    while let Some(frame) = stack.last_mut() {
        let Some(&direction) = Direction::SEARCH_ORDER.get(frame.next) else {
            stack.pop();
            continue;
        };
        frame.next += 1;

        // frames are only pushed with depth left
        let remaining = frame.remaining - 1;
        let Some(next) = grid.step(frame.coords, direction) else {
            continue;
        };
        if !grid.is_open(next) {
            continue;
        }

        if next == target {
            let route: Vec<Coord2> = stack
                .iter()
                .map(|frame| frame.coords)
                .chain(iter::once(next))
                .collect();
            log::trace!(
                "Found {:?} -> {:?} in {} steps within {}, entered {} cells",
                source,
                target,
                route.len() - 1,
                depth_bound,
                entered
            );
            return Some(Path { route });
        }

        if remaining == 0 {
            continue;
        }
        let seen = &mut best_remaining[next.to_nd_index()];
        if seen.is_some_and(|seen| seen >= remaining) {
            continue;
        }
        *seen = Some(remaining);
        entered += 1;
        stack.push(Frame::new(next, remaining));
    }

    log::trace!(
        "No path {:?} -> {:?} within {}, entered {} cells",
        source,
        target,
        depth_bound,
        entered
    );
    None
}
