use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// A player action, in the text form hosts exchange with the engine.
///
/// Arena cells use padded grid coordinates, so `T1,1` toggles the top-left arena cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    /// `T<x>,<y>`
    ToggleGuess(Coord2),
    /// `LB<x>,<y>`
    ToggleLock(Coord2),
    /// `LC<x>`
    ToggleColumnLock(Coord),
    /// `LR<y>`
    ToggleRowLock(Coord),
    /// `F<range number>`
    Fire(RangeNo),
    /// `R`
    Submit,
    /// `S`, shows the balls without checking anything.
    Solve,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Move::*;
        match *self {
            ToggleGuess((x, y)) => write!(f, "T{x},{y}"),
            ToggleLock((x, y)) => write!(f, "LB{x},{y}"),
            ToggleColumnLock(x) => write!(f, "LC{x}"),
            ToggleRowLock(y) => write!(f, "LR{y}"),
            Fire(index) => write!(f, "F{index}"),
            Submit => f.write_str("R"),
            Solve => f.write_str("S"),
        }
    }
}

impl FromStr for Move {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        use Move::*;

        let parsed = if let Some(rest) = s.strip_prefix("LB") {
            parse_pair(rest).map(ToggleLock)
        } else if let Some(rest) = s.strip_prefix("LC") {
            parse_number(rest).map(ToggleColumnLock)
        } else if let Some(rest) = s.strip_prefix("LR") {
            parse_number(rest).map(ToggleRowLock)
        } else if let Some(rest) = s.strip_prefix('T') {
            parse_pair(rest).map(ToggleGuess)
        } else if let Some(rest) = s.strip_prefix('F') {
            parse_number(rest).map(Fire)
        } else {
            match s {
                "R" => Some(Submit),
                "S" => Some(Solve),
                _ => None,
            }
        };

        parsed.ok_or_else(|| {
            log::debug!("Unrecognized move {:?}", s);
            GameError::ProtocolMismatch
        })
    }
}

fn parse_number(s: &str) -> Option<u16> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn parse_pair(s: &str) -> Option<Coord2> {
    let (x, y) = s.split_once(',')?;
    Some((parse_number(x)?, parse_number(y)?))
}
