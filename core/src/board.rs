use alloc::vec;
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// The padded grid: arena cells, firing-range cells and the exit table.
///
/// Arena cells are addressed with padded grid coordinates, so `(1, 1)` is the top-left arena cell. Range cells and
/// exits are addressed by range number.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    perimeter: Perimeter,
    arena: Array2<ArenaCell>,
    range: Vec<RangeCell>,
    exits: Vec<Exit>,
    next_laser: LaserNo,
}

impl Board {
    pub fn new(layout: &BallLayout) -> Self {
        let size = layout.size();
        let perimeter = Perimeter::new(size.0, size.1);
        let mut arena: Array2<ArenaCell> = Array2::default(size.to_nd_index());
        for &coords in layout.balls() {
            arena[coords.to_nd_index()].ball = true;
        }

        let range_len = usize::from(perimeter.len());
        Self {
            perimeter,
            arena,
            range: vec![RangeCell::Empty; range_len],
            exits: vec![Exit::default(); range_len],
            next_laser: 1,
        }
    }

    pub fn perimeter(&self) -> Perimeter {
        self.perimeter
    }

    pub fn size(&self) -> Dim2 {
        (self.perimeter.width(), self.perimeter.height())
    }

    /// Arena cell at padded grid coordinates, or nothing when `coords` is not in the arena.
    pub fn cell_at(&self, coords: Coord2) -> Option<ArenaCell> {
        let pos = self.perimeter.to_arena(coords)?;
        Some(self.arena[pos.to_nd_index()])
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> Option<&mut ArenaCell> {
        let pos = self.perimeter.to_arena(coords)?;
        Some(&mut self.arena[pos.to_nd_index()])
    }

    pub fn has_ball_at(&self, coords: Coord2) -> bool {
        self.cell_at(coords).is_some_and(|cell| cell.ball)
    }

    /// All arena cells with their padded grid coordinates, column by column.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, ArenaCell)> + '_ {
        self.arena
            .indexed_iter()
            .map(|((x, y), &cell)| ((x as Coord + 1, y as Coord + 1), cell))
    }

    pub(crate) fn iter_cells_mut(&mut self) -> impl Iterator<Item = &mut ArenaCell> + '_ {
        self.arena.iter_mut()
    }

    pub fn range_cell(&self, index: RangeNo) -> Option<RangeCell> {
        self.range.get(usize::from(index)).copied()
    }

    pub fn exit(&self, index: RangeNo) -> Option<Exit> {
        self.exits.get(usize::from(index)).copied()
    }

    pub fn is_fired(&self, index: RangeNo) -> bool {
        self.exit(index).is_some_and(Exit::is_fired)
    }

    /// Other end of the laser through `index`, so both ends can be highlighted together.
    pub fn partner(&self, index: RangeNo) -> Option<RangeNo> {
        self.exit(index)?.laser.peer()
    }

    /// Number the next laser crossing the arena will be labelled with.
    pub fn next_laser_no(&self) -> LaserNo {
        self.next_laser
    }

    pub fn ball_count(&self) -> BallCount {
        self.count_cells(|cell| cell.ball)
    }

    pub fn guess_count(&self) -> BallCount {
        self.count_cells(|cell| cell.guess)
    }

    fn count_cells(&self, pred: impl Fn(&ArenaCell) -> bool) -> BallCount {
        self.arena
            .iter()
            .filter(|cell| pred(cell))
            .count()
            .try_into()
            .unwrap_or(BallCount::MAX)
    }

    pub(crate) fn record_hit(&mut self, index: RangeNo) -> LaserExit {
        self.set_end(index, RangeCell::Hit, LaserExit::Hit);
        LaserExit::Hit
    }

    pub(crate) fn record_reflect(&mut self, index: RangeNo) -> LaserExit {
        self.set_end(index, RangeCell::Reflect, LaserExit::Reflect);
        LaserExit::Reflect
    }

    /// Links two range cells with a fresh laser number.
    pub(crate) fn record_pair(&mut self, entry: RangeNo, exit: RangeNo) -> LaserExit {
        debug_assert_ne!(entry, exit, "a laser leaving where it entered is a reflection");
        let number = self.next_laser;
        self.next_laser += 1;
        self.set_end(entry, RangeCell::Laser(number), LaserExit::Exit(exit));
        self.set_end(exit, RangeCell::Laser(number), LaserExit::Exit(entry));
        LaserExit::Exit(exit)
    }

    /// Records `laser` as the outcome at `index`, linking the peer as well for exits.
    pub(crate) fn record(&mut self, index: RangeNo, laser: LaserExit) {
        match laser {
            LaserExit::Unfired => {}
            LaserExit::Hit => {
                self.record_hit(index);
            }
            LaserExit::Reflect => {
                self.record_reflect(index);
            }
            LaserExit::Exit(peer) => {
                self.record_pair(index, peer);
            }
        }
    }

    pub(crate) fn mark_exit(&mut self, index: RangeNo, mark: ExitMark) {
        self.exits[usize::from(index)].mark = Some(mark);
    }

    /// Forgets every fired laser; the laser counter keeps running.
    pub(crate) fn clear_lasers(&mut self) {
        self.range.fill(RangeCell::Empty);
        self.exits.fill(Exit::default());
    }

    fn set_end(&mut self, index: RangeNo, cell: RangeCell, laser: LaserExit) {
        let index = usize::from(index);
        self.range[index] = cell;
        self.exits[index].laser = laser;
    }
}
