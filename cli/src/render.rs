use blackbox_core::*;
use std::fmt::Write;

const CELL_WIDTH: usize = 4;

/// Plain text drawing of the board, firing range included.
///
/// Range cells show `H` for a hit, `R` for a reflection or the laser number, with `!` after a laser that contradicts
/// the guesses and `?` after one the verifier filled in. Arena cells show `O` for a guess and `#` for a locked cell;
/// once revealed a missed ball shows as `o` and a wrong guess as `X`.
pub fn board(engine: &PlayEngine) -> String {
    let board = engine.board();
    let perimeter = board.perimeter();
    let (w, h) = board.size();
    let revealed = engine.is_revealed();

    let mut out = String::new();
    for y in 0..Coord::from(h) + 2 {
        for x in 0..Coord::from(w) + 2 {
            let text = if let Some(index) = perimeter.from_grid((x, y)) {
                range_text(board, index)
            } else if let Some(cell) = board.cell_at((x, y)) {
                arena_text(cell, revealed).to_string()
            } else {
                String::new()
            };
            let _ = write!(out, "{text:>CELL_WIDTH$}");
        }
        out.push('\n');
    }
    out
}

fn range_text(board: &Board, index: RangeNo) -> String {
    let mut text = match board.range_cell(index) {
        Some(RangeCell::Hit) => "H".to_string(),
        Some(RangeCell::Reflect) => "R".to_string(),
        Some(RangeCell::Laser(laser)) => laser.to_string(),
        Some(RangeCell::Empty) | None => "-".to_string(),
    };
    match board.exit(index).and_then(|exit| exit.mark) {
        Some(ExitMark::Wrong) => text.push('!'),
        Some(ExitMark::Omitted) => text.push('?'),
        None => {}
    }
    text
}

fn arena_text(cell: ArenaCell, revealed: bool) -> char {
    match (revealed, cell.guess, cell.ball) {
        (true, true, true) => 'O',
        (true, true, false) => 'X',
        (true, false, true) => 'o',
        (false, true, _) => 'O',
        _ if cell.locked => '#',
        _ => '.',
    }
}

pub fn status_line(engine: &PlayEngine) -> String {
    let params = engine.params();
    match engine.status() {
        Status::Checked(_) if engine.is_solved() => "CORRECT!".to_string(),
        Status::Checked(verdict) => format!(
            "{} wrong and {} missed balls.",
            verdict.tally.wrong, verdict.tally.missed
        ),
        Status::Shown => "Solution shown.".to_string(),
        Status::Placing { guesses } if guesses > params.max_balls => {
            format!("{} too many balls marked.", guesses - params.max_balls)
        }
        Status::Placing { .. } if engine.can_submit() => "Submit to verify guesses.".to_string(),
        Status::Placing { guesses } if params.min_balls == params.max_balls => {
            format!("Balls marked: {} / {}", guesses, params.min_balls)
        }
        Status::Placing { guesses } => format!(
            "Balls marked: {} / {}-{}.",
            guesses, params.min_balls, params.max_balls
        ),
    }
}
