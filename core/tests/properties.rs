//! Invariants of the tracer, the verifier and the move engine over generated layouts.

use blackbox_core::*;
use proptest::prelude::*;

fn arena() -> impl Strategy<Value = (Dim, Dim)> {
    (2..=9u8, 2..=9u8)
}

fn mask(size: (Dim, Dim)) -> impl Strategy<Value = Vec<Dim2>> {
    let (w, h) = size;
    proptest::collection::vec(prop::bool::weighted(0.2), usize::from(w) * usize::from(h)).prop_map(move |cells| {
        cells
            .iter()
            .enumerate()
            .filter(|&(_, &ball)| ball)
            .map(|(i, _)| ((i % usize::from(w)) as Dim, (i / usize::from(w)) as Dim))
            .collect()
    })
}

fn layout() -> impl Strategy<Value = BallLayout> {
    arena().prop_flat_map(|size| mask(size).prop_map(move |balls| BallLayout::from_ball_coords(size, &balls).unwrap()))
}

/// Engine with the given layout that accepts any number of guesses.
fn open_engine(layout: &BallLayout) -> PlayEngine {
    let (w, h) = layout.size();
    let params = GameParams::new(w, h, 0, mult(w, h));
    PlayEngine::new(params, layout).unwrap()
}

fn guess_all(mut engine: PlayEngine, guesses: &[Dim2]) -> PlayEngine {
    for &pos in guesses {
        let coords = engine.board().perimeter().from_arena(pos);
        engine.toggle_guess(coords).unwrap();
    }
    engine
}

proptest! {
    #[test]
    fn perimeter_mapping_is_inverse((w, h) in arena()) {
        let perimeter = Perimeter::new(w, h);

        for index in perimeter.iter() {
            let (coords, dir) = perimeter.to_grid(index).unwrap();
            prop_assert_eq!(perimeter.from_grid(coords), Some(index));
            prop_assert!(perimeter.in_arena(step(coords, dir).unwrap()));
        }
        prop_assert_eq!(perimeter.to_grid(perimeter.len()), None);
    }

    #[test]
    fn lasers_are_symmetric(layout in layout(), seed in any::<u16>()) {
        let board = Board::new(&layout);
        let index = seed % board.perimeter().len();

        let mut forward = board.clone();
        let exit = forward.fire(index).unwrap();

        if let LaserExit::Exit(peer) = exit {
            prop_assert_ne!(peer, index);
            let mut backward = board.clone();
            prop_assert_eq!(backward.fire(peer).unwrap(), LaserExit::Exit(index));
            prop_assert_eq!(forward.partner(peer), Some(index));
        }
        prop_assert_eq!(forward.fire(index), Err(IllegalMove::AlreadyFired.into()));
    }

    #[test]
    fn firing_every_laser_keeps_exits_symmetric(layout in layout()) {
        let mut board = Board::new(&layout);

        for index in board.perimeter().iter() {
            if !board.is_fired(index) {
                board.fire(index).unwrap();
            }
        }

        for index in board.perimeter().iter() {
            let exit = board.exit(index).unwrap();
            prop_assert!(exit.is_fired());
            if let Some(peer) = exit.laser.peer() {
                prop_assert_eq!(board.partner(peer), Some(index));
            }
        }
    }

    #[test]
    fn exact_guesses_are_always_correct(layout in layout()) {
        let engine = guess_all(open_engine(&layout), layout.balls());

        let verdict = engine.apply(Move::Submit).unwrap().verdict().unwrap();

        prop_assert!(verdict.equivalent);
        prop_assert_eq!(verdict.tally.right, layout.ball_count());
        prop_assert_eq!(verdict.tally.wrong, 0);
        prop_assert_eq!(verdict.tally.missed, 0);
    }

    #[test]
    fn tallies_add_up(
        (layout, guesses) in layout().prop_flat_map(|layout| {
            let size = layout.size();
            (Just(layout), mask(size))
        }),
        fired in proptest::collection::vec(any::<u16>(), 0..6),
    ) {
        let mut engine = guess_all(open_engine(&layout), &guesses);
        for index in fired {
            let index = index % engine.board().perimeter().len();
            let _ = engine.fire(index);
        }

        let verdict = engine.submit().unwrap();
        let balls = engine.total_balls();

        prop_assert_eq!(verdict.tally.right + verdict.tally.missed, balls);
        prop_assert_eq!(verdict.tally.right + verdict.tally.wrong, guesses.len() as BallCount);
        if verdict.equivalent {
            prop_assert_eq!(verdict.tally.wrong + verdict.tally.missed, 0);
        }

        let board = engine.board();
        for index in board.perimeter().iter() {
            let exit = board.exit(index).unwrap();
            if let Some(peer) = exit.laser.peer() {
                prop_assert_eq!(board.partner(peer), Some(index));
            }
            if verdict.equivalent {
                prop_assert_eq!(exit.mark, None);
            }
        }
    }

    #[test]
    fn descriptor_round_trip(layout in layout()) {
        let (w, h) = layout.size();
        let count = layout.ball_count();
        let params = GameParams::new(w, h, count, count);

        let desc = layout.to_descriptor();

        prop_assert_eq!(BallLayout::from_descriptor(&params, &desc), Ok(layout));
    }

    #[test]
    fn rejected_moves_change_nothing(layout in layout(), moves in proptest::collection::vec("(T|LB|LC|LR|F|R|S)[0-9]{0,2}(,[0-9]{1,2})?", 1..30)) {
        let mut engine = open_engine(&layout);

        for mv in moves {
            let before = engine.clone();
            match mv.parse::<Move>() {
                Ok(mv) => {
                    if engine.execute(mv).is_err() {
                        prop_assert_eq!(&engine, &before);
                    }
                }
                Err(err) => prop_assert_eq!(err, GameError::ProtocolMismatch),
            }
        }
    }
}
