/// Single coordinate axis used for grid height, width, and positions.
pub type Coord = u8;

/// Count type used for checkpoint, wall, and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional position `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Number of edges a single search may traverse.
pub type Depth = u32;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// `max(|Δrow|, |Δcol|)`, the king-move distance between two positions.
pub const fn chebyshev(a: Coord2, b: Coord2) -> Coord {
    let d_row = a.0.abs_diff(b.0);
    let d_col = a.1.abs_diff(b.1);
    if d_row > d_col { d_row } else { d_col }
}

/// Whether `a` and `b` share an edge.
pub const fn is_orthogonal_neighbor(a: Coord2, b: Coord2) -> bool {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1) == 1
}

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
pub(crate) fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}
