use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Per-cell comparison of guesses against balls.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Guessed cells holding a ball.
    pub right: BallCount,
    /// Guessed cells without a ball.
    pub wrong: BallCount,
    /// Balls nobody guessed.
    pub missed: BallCount,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Whether the guesses answer every possible laser the same way the balls do.
    pub equivalent: bool,
    pub tally: Tally,
}

impl Board {
    /// Judges the guesses against the balls over the full set of lasers.
    ///
    /// Both layouts are traced on private copies. When they agree everywhere the guesses become the balls, so later
    /// display matches what the player proved. Otherwise every disagreeing exit is marked on this board: lasers the
    /// player fired are marked [`ExitMark::Wrong`], and lasers the player never fired are filled in from the real
    /// layout and marked [`ExitMark::Omitted`].
    pub fn check_guesses(&mut self) -> Verdict {
        let mut solution = self.clone();
        solution.clear_lasers();
        let mut guesses = solution.clone();
        for cell in guesses.iter_cells_mut() {
            cell.ball = cell.guess;
        }

        let perimeter = self.perimeter();
        for index in perimeter.iter() {
            if !solution.is_fired(index) {
                solution.trace(index);
            }
            if !guesses.is_fired(index) {
                guesses.trace(index);
            }
        }

        let fired_by_player: Vec<bool> = perimeter.iter().map(|index| self.is_fired(index)).collect();
        let mut equivalent = true;
        for index in perimeter.iter() {
            let truth = exit_of(&solution, index);
            if truth == exit_of(&guesses, index) {
                continue;
            }
            equivalent = false;

            if fired_by_player[usize::from(index)] {
                log::debug!("Laser {} contradicts the guesses", index);
                self.mark_exit(index, ExitMark::Wrong);
            } else {
                // the far end of an omitted pair is filled in when its partner is
                if exit_of(self, index) != truth {
                    self.record(index, truth);
                }
                log::debug!("Laser {} added to show the guesses are wrong", index);
                self.mark_exit(index, ExitMark::Omitted);
            }
        }

        if equivalent {
            for cell in self.iter_cells_mut() {
                cell.ball = cell.guess;
            }
        }

        let tally = self.tally();
        log::debug!("Guesses checked, equivalent: {}, {:?}", equivalent, tally);
        Verdict { equivalent, tally }
    }

    pub fn tally(&self) -> Tally {
        let mut tally = Tally::default();
        for (_, cell) in self.iter_cells() {
            match (cell.guess, cell.ball) {
                (true, true) => tally.right += 1,
                (true, false) => tally.wrong += 1,
                (false, true) => tally.missed += 1,
                (false, false) => {}
            }
        }
        tally
    }
}

fn exit_of(board: &Board, index: RangeNo) -> LaserExit {
    board.exit(index).map(|exit| exit.laser).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_guesses(size: Dim2, balls: &[Dim2], guesses: &[Dim2]) -> Board {
        let layout = BallLayout::from_ball_coords(size, balls).unwrap();
        let mut board = Board::new(&layout);
        for &pos in guesses {
            let coords = board.perimeter().from_arena(pos);
            board.cell_mut(coords).unwrap().guess = true;
        }
        board
    }

    #[test]
    fn exact_guess_is_equivalent() {
        let balls = &[(0, 0), (2, 3), (4, 1)];
        let mut board = board_with_guesses((5, 5), balls, balls);

        let verdict = board.check_guesses();

        assert!(verdict.equivalent);
        assert_eq!(
            verdict.tally,
            Tally {
                right: 3,
                wrong: 0,
                missed: 0
            }
        );
        assert!(board.perimeter().iter().all(|index| board.exit(index).unwrap().mark.is_none()));
    }

    #[test]
    fn checking_does_not_fire_lasers_on_the_board() {
        let balls = &[(1, 1)];
        let mut board = board_with_guesses((4, 4), balls, balls);
        board.fire(0).unwrap();

        board.check_guesses();

        assert!(board.is_fired(0));
        assert!(!board.is_fired(1));
    }

    const RING: [Dim2; 8] = [
        (1, 1),
        (2, 1),
        (3, 1),
        (1, 2),
        (3, 2),
        (1, 3),
        (2, 3),
        (3, 3),
    ];

    #[test]
    fn equivalent_layout_replaces_balls() {
        // no laser can get close enough to see a ball enclosed by a full ring
        let mut balls = RING.to_vec();
        balls.push((2, 2));
        let mut board = board_with_guesses((5, 5), &balls, &RING);

        let verdict = board.check_guesses();

        assert!(verdict.equivalent);
        assert!(!board.has_ball_at((3, 3)));
        assert_eq!(
            verdict.tally,
            Tally {
                right: 8,
                wrong: 0,
                missed: 0
            }
        );
    }

    #[test]
    fn partial_guess_counts_missed_balls() {
        let balls = &[(0, 0), (1, 0), (0, 1), (1, 1)];
        let guesses = &[(1, 0), (0, 1), (1, 1)];
        let mut board = board_with_guesses((3, 3), balls, guesses);

        let verdict = board.check_guesses();

        // the corner ball stops the laser down column 1 that the guesses would reflect
        assert!(!verdict.equivalent);
        assert_eq!(
            verdict.tally,
            Tally {
                right: 3,
                wrong: 0,
                missed: 1
            }
        );
        assert!(board.exit(0).unwrap().is_omitted());
    }

    #[test]
    fn unfired_disagreements_are_added_as_omitted() {
        let mut board = board_with_guesses((5, 5), &[(2, 2)], &[(0, 0)]);

        let verdict = board.check_guesses();

        assert!(!verdict.equivalent);
        assert_eq!(
            verdict.tally,
            Tally {
                right: 0,
                wrong: 1,
                missed: 1
            }
        );
        // column 3 from the top runs straight into the real ball
        assert_eq!(board.exit(2).unwrap().laser, LaserExit::Hit);
        assert!(board.exit(2).unwrap().is_omitted());
        assert_eq!(board.range_cell(2), Some(RangeCell::Hit));
    }

    #[test]
    fn fired_disagreements_are_marked_wrong() {
        let mut board = board_with_guesses((5, 5), &[(2, 2)], &[(0, 0)]);
        board.fire(2).unwrap();

        board.check_guesses();

        let exit = board.exit(2).unwrap();
        assert_eq!(exit.laser, LaserExit::Hit);
        assert!(exit.is_wrong());
    }

    #[test]
    fn omitted_pairs_stay_symmetric() {
        let mut board = board_with_guesses((5, 5), &[(2, 2)], &[(0, 0)]);

        board.check_guesses();

        for index in board.perimeter().iter() {
            if let Some(peer) = board.partner(index) {
                assert_eq!(board.partner(peer), Some(index));
                assert_eq!(board.range_cell(index), board.range_cell(peer));
            }
        }
    }
}
