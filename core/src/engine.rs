use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    /// Guesses, locks and lasers may still change.
    Placing,
    /// Balls are shown, no further moves apply.
    Revealed,
}

impl EngineState {
    pub const fn is_placing(self) -> bool {
        matches!(self, Self::Placing)
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Placing
    }
}

/// Summary a host can turn into a status line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Placing { guesses: BallCount },
    Checked(Verdict),
    /// Revealed through [`Move::Solve`] without checking the guesses.
    Shown,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    params: GameParams,
    board: Board,
    guess_count: BallCount,
    state: EngineState,
    verdict: Option<Verdict>,
}

impl PlayEngine {
    pub fn new(params: GameParams, layout: &BallLayout) -> Result<Self> {
        params.validate()?;
        if layout.size() != (params.width, params.height) {
            return Err(DescriptorError::SizeMismatch.into());
        }
        if !params.allows_ball_count(layout.ball_count()) {
            return Err(DescriptorError::WrongLength.into());
        }

        Ok(Self {
            params,
            board: Board::new(layout),
            guess_count: 0,
            state: Default::default(),
            verdict: None,
        })
    }

    pub fn from_descriptor(params: GameParams, desc: &str) -> Result<Self> {
        params.validate()?;
        let layout = desc::decode(&params, desc)?;
        Self::new(params, &layout)
    }

    pub fn params(&self) -> &GameParams {
        &self.params
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state.is_revealed()
    }

    pub fn guess_count(&self) -> BallCount {
        self.guess_count
    }

    pub fn total_balls(&self) -> BallCount {
        self.board.ball_count()
    }

    /// Outcome of the last submission; nothing before one or after a solve.
    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    pub fn status(&self) -> Status {
        match (self.state, self.verdict) {
            (EngineState::Placing, _) => Status::Placing {
                guesses: self.guess_count,
            },
            (EngineState::Revealed, Some(verdict)) => Status::Checked(verdict),
            (EngineState::Revealed, None) => Status::Shown,
        }
    }

    pub fn can_submit(&self) -> bool {
        self.state.is_placing() && self.params.allows_ball_count(self.guess_count)
    }

    /// Whether the submitted guesses were accepted.
    pub fn is_solved(&self) -> bool {
        self.verdict.is_some_and(|verdict| {
            verdict.tally.wrong == 0
                && verdict.tally.missed == 0
                && verdict.tally.right >= self.params.min_balls
        })
    }

    pub const fn solve_move() -> Move {
        Move::Solve
    }

    /// Produces the state after `mv`, leaving `self` untouched.
    pub fn apply(&self, mv: Move) -> Result<Self> {
        let mut next = self.clone();
        next.execute(mv)?;
        Ok(next)
    }

    /// Parses and applies a move in its text form.
    pub fn apply_str(&self, mv: &str) -> Result<Self> {
        self.apply(mv.parse()?)
    }

    /// Applies `mv` in place. A rejected move leaves the engine unchanged.
    pub fn execute(&mut self, mv: Move) -> Result<()> {
        use Move::*;

        match mv {
            ToggleGuess(coords) => self.toggle_guess(coords).map(drop),
            ToggleLock(coords) => self.toggle_lock(coords).map(drop),
            ToggleColumnLock(x) => self.toggle_column_lock(x).map(drop),
            ToggleRowLock(y) => self.toggle_row_lock(y).map(drop),
            Fire(index) => self.fire(index).map(drop),
            Submit => self.submit().map(drop),
            Solve => {
                self.solve();
                Ok(())
            }
        }?;
        log::debug!("Applied move {}", mv);
        Ok(())
    }

    /// Flips the guess at `coords`, returning whether the cell is now guessed.
    pub fn toggle_guess(&mut self, coords: Coord2) -> Result<bool> {
        self.check_placing()?;
        let cell = self.board.cell_mut(coords).ok_or(IllegalMove::NotInArena)?;
        if cell.locked {
            return Err(IllegalMove::Locked.into());
        }

        cell.guess = !cell.guess;
        if cell.guess {
            self.guess_count += 1;
        } else {
            self.guess_count -= 1;
        }
        Ok(cell.guess)
    }

    /// Flips the lock at `coords`, returning whether the cell is now locked.
    pub fn toggle_lock(&mut self, coords: Coord2) -> Result<bool> {
        self.check_placing()?;
        let cell = self.board.cell_mut(coords).ok_or(IllegalMove::NotInArena)?;
        cell.locked = !cell.locked;
        Ok(cell.locked)
    }

    /// Unlocks column `x` if more than half of it is locked, otherwise locks all of it.
    pub fn toggle_column_lock(&mut self, x: Coord) -> Result<bool> {
        self.check_placing()?;
        let height = Coord::from(self.params.height);
        if !(1..=Coord::from(self.params.width)).contains(&x) {
            return Err(IllegalMove::NotInArena.into());
        }
        Ok(self.toggle_line_lock((1..=height).map(|y| (x, y)).collect()))
    }

    /// Unlocks row `y` if more than half of it is locked, otherwise locks all of it.
    pub fn toggle_row_lock(&mut self, y: Coord) -> Result<bool> {
        self.check_placing()?;
        let width = Coord::from(self.params.width);
        if !(1..=Coord::from(self.params.height)).contains(&y) {
            return Err(IllegalMove::NotInArena.into());
        }
        Ok(self.toggle_line_lock((1..=width).map(|x| (x, y)).collect()))
    }

    fn toggle_line_lock(&mut self, line: Vec<Coord2>) -> bool {
        let locked = line
            .iter()
            .filter(|&&coords| self.board.cell_at(coords).is_some_and(|cell| cell.locked))
            .count();
        let lock = locked <= line.len() / 2;
        for coords in line {
            if let Some(cell) = self.board.cell_mut(coords) {
                cell.locked = lock;
            }
        }
        lock
    }

    pub fn fire(&mut self, index: RangeNo) -> Result<LaserExit> {
        self.check_placing()?;
        self.board.fire(index)
    }

    /// Checks the guesses and reveals the balls.
    pub fn submit(&mut self) -> Result<Verdict> {
        self.check_placing()?;
        if !self.params.allows_ball_count(self.guess_count) {
            return Err(IllegalMove::GuessCountOutOfRange.into());
        }

        let verdict = self.board.check_guesses();
        self.verdict = Some(verdict);
        self.state = EngineState::Revealed;
        Ok(verdict)
    }

    /// Reveals the balls unconditionally.
    pub fn solve(&mut self) {
        self.state = EngineState::Revealed;
    }

    fn check_placing(&self) -> Result<()> {
        if self.state.is_placing() {
            Ok(())
        } else {
            Err(IllegalMove::AlreadyRevealed.into())
        }
    }
}
