use serde::{Deserialize, Serialize};

/// Arena width and height, and zero-based arena positions as stored in layouts.
pub type Dim = u8;

/// Zero-based arena position `(x, y)`.
pub type Dim2 = (Dim, Dim);

/// Position on the padded grid, where the arena occupies `1..=width` by `1..=height`.
pub type Coord = u16;

/// Padded grid coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Ordinal position around the firing range, clockwise from the cell above arena column 1.
pub type RangeNo = u16;

/// Number shown on both ends of a laser that crossed the arena.
pub type LaserNo = u16;

/// Count type used for ball and guess counts.
pub type BallCount = u16;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Dim2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Dim, b: Dim) -> BallCount {
    let a = a as BallCount;
    let b = b as BallCount;
    a.saturating_mul(b)
}

/// Direction of travel on the grid. Declaration order is clockwise.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    pub const fn clockwise(self) -> Self {
        use Direction::*;
        match self {
            Up => Right,
            Right => Down,
            Down => Left,
            Left => Up,
        }
    }

    pub const fn counter_clockwise(self) -> Self {
        use Direction::*;
        match self {
            Up => Left,
            Right => Up,
            Down => Right,
            Left => Down,
        }
    }

    pub const fn opposite(self) -> Self {
        self.clockwise().clockwise()
    }

    /// Unit displacement `(dx, dy)`, with `y` growing downwards.
    pub const fn offset(self) -> (i16, i16) {
        use Direction::*;
        match self {
            Up => (0, -1),
            Right => (1, 0),
            Down => (0, 1),
            Left => (-1, 0),
        }
    }
}

/// Moves one cell from `coords` in `direction`, returning nothing if that leaves the coordinate space.
pub fn step(coords: Coord2, direction: Direction) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = direction.offset();
    Some((x.checked_add_signed(dx)?, y.checked_add_signed(dy)?))
}
