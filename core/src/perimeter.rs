use serde::{Deserialize, Serialize};

use crate::*;

/// Maps between firing-range numbers and padded grid coordinates.
///
/// The range is numbered clockwise: the top row left to right, the right column top to bottom, the bottom row right
/// to left and finally the left column bottom to top. The four corner cells of the padded grid belong to neither the
/// arena nor the range.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Perimeter {
    width: Dim,
    height: Dim,
}

impl Perimeter {
    pub const fn new(width: Dim, height: Dim) -> Self {
        Self { width, height }
    }

    pub const fn width(self) -> Dim {
        self.width
    }

    pub const fn height(self) -> Dim {
        self.height
    }

    /// Number of firing-range cells.
    pub const fn len(self) -> RangeNo {
        2 * (self.width as RangeNo + self.height as RangeNo)
    }

    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    pub fn iter(self) -> impl Iterator<Item = RangeNo> {
        0..self.len()
    }

    /// Grid cell of range number `index` and the direction pointing into the arena from it.
    pub fn to_grid(self, index: RangeNo) -> Option<(Coord2, Direction)> {
        let w = Coord::from(self.width);
        let h = Coord::from(self.height);
        let mut rest = index;

        if rest < w {
            return Some(((rest + 1, 0), Direction::Down));
        }
        rest -= w;
        if rest < h {
            return Some(((w + 1, rest + 1), Direction::Left));
        }
        rest -= h;
        if rest < w {
            return Some(((w - rest, h + 1), Direction::Up));
        }
        rest -= w;
        if rest < h {
            return Some(((0, h - rest), Direction::Right));
        }
        None
    }

    /// Range number of the grid cell at `coords`, if it is on the firing range.
    pub fn from_grid(self, (x, y): Coord2) -> Option<RangeNo> {
        let w = Coord::from(self.width);
        let h = Coord::from(self.height);
        let (x1, y1) = (w + 1, h + 1);

        if x > x1 || y > y1 || self.in_arena((x, y)) {
            return None;
        }
        if (x == 0 || x == x1) && (y == 0 || y == y1) {
            return None;
        }

        Some(if y == 0 {
            x - 1
        } else if x == x1 {
            w + y - 1
        } else if y == y1 {
            w + h + (w - x)
        } else {
            w + h + w + (h - y)
        })
    }

    pub fn in_arena(self, (x, y): Coord2) -> bool {
        (1..=Coord::from(self.width)).contains(&x) && (1..=Coord::from(self.height)).contains(&y)
    }

    /// Zero-based arena position of the grid cell at `coords`.
    pub fn to_arena(self, coords: Coord2) -> Option<Dim2> {
        if !self.in_arena(coords) {
            return None;
        }
        // in_arena bounds both axes by a Dim
        Some(((coords.0 - 1) as Dim, (coords.1 - 1) as Dim))
    }

    pub fn from_arena(self, (x, y): Dim2) -> Coord2 {
        (Coord::from(x) + 1, Coord::from(y) + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbering_walks_clockwise_from_top_left() {
        let perimeter = Perimeter::new(5, 3);

        assert_eq!(perimeter.len(), 16);
        assert_eq!(perimeter.to_grid(0), Some(((1, 0), Direction::Down)));
        assert_eq!(perimeter.to_grid(4), Some(((5, 0), Direction::Down)));
        assert_eq!(perimeter.to_grid(5), Some(((6, 1), Direction::Left)));
        assert_eq!(perimeter.to_grid(7), Some(((6, 3), Direction::Left)));
        assert_eq!(perimeter.to_grid(8), Some(((5, 4), Direction::Up)));
        assert_eq!(perimeter.to_grid(12), Some(((1, 4), Direction::Up)));
        assert_eq!(perimeter.to_grid(13), Some(((0, 3), Direction::Right)));
        assert_eq!(perimeter.to_grid(15), Some(((0, 1), Direction::Right)));
        assert_eq!(perimeter.to_grid(16), None);
    }

    #[test]
    fn from_grid_rejects_arena_corners_and_outside() {
        let perimeter = Perimeter::new(4, 6);

        assert_eq!(perimeter.from_grid((2, 3)), None);
        assert_eq!(perimeter.from_grid((0, 0)), None);
        assert_eq!(perimeter.from_grid((5, 0)), None);
        assert_eq!(perimeter.from_grid((5, 7)), None);
        assert_eq!(perimeter.from_grid((0, 7)), None);
        assert_eq!(perimeter.from_grid((6, 3)), None);
        assert_eq!(perimeter.from_grid((2, 8)), None);
    }

    #[test]
    fn mappings_are_inverse_on_every_range_cell() {
        let perimeter = Perimeter::new(7, 3);

        for index in perimeter.iter() {
            let (coords, _) = perimeter.to_grid(index).unwrap();
            assert_eq!(perimeter.from_grid(coords), Some(index));
        }

        for x in 0..=8 {
            for y in 0..=4 {
                if let Some(index) = perimeter.from_grid((x, y)) {
                    assert_eq!(perimeter.to_grid(index).map(|(coords, _)| coords), Some((x, y)));
                }
            }
        }
    }

    #[test]
    fn range_cells_face_the_arena() {
        let perimeter = Perimeter::new(3, 3);

        for index in perimeter.iter() {
            let (coords, dir) = perimeter.to_grid(index).unwrap();
            let inward = step(coords, dir).unwrap();
            assert!(perimeter.in_arena(inward), "{index} faces away from arena");
        }
    }

    #[test]
    fn arena_coordinates_are_offset_by_one() {
        let perimeter = Perimeter::new(3, 2);

        assert_eq!(perimeter.to_arena((1, 1)), Some((0, 0)));
        assert_eq!(perimeter.to_arena((3, 2)), Some((2, 1)));
        assert_eq!(perimeter.to_arena((0, 1)), None);
        assert_eq!(perimeter.from_arena((2, 1)), (3, 2));
    }
}
