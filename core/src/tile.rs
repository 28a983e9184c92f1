use serde::{Deserialize, Serialize};

use crate::*;

/// Arena cell state. `ball` is the hidden truth, the other two belong to the player.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaCell {
    pub ball: bool,
    pub guess: bool,
    pub locked: bool,
}

/// What a firing-range cell displays once a laser has gone through it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeCell {
    Empty,
    Hit,
    Reflect,
    Laser(LaserNo),
}

impl RangeCell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl Default for RangeCell {
    fn default() -> Self {
        Self::Empty
    }
}

/// Where a laser entering at some range cell ends up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaserExit {
    Unfired,
    Hit,
    Reflect,
    Exit(RangeNo),
}

impl LaserExit {
    pub const fn is_fired(self) -> bool {
        !matches!(self, Self::Unfired)
    }

    pub const fn peer(self) -> Option<RangeNo> {
        match self {
            Self::Exit(peer) => Some(peer),
            _ => None,
        }
    }
}

impl Default for LaserExit {
    fn default() -> Self {
        Self::Unfired
    }
}

/// Decoration added to an exit by verification.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExitMark {
    /// The player fired this laser and the guess would have answered differently.
    Wrong,
    /// The player never fired this laser; it was added to show why the guess fails.
    Omitted,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exit {
    pub laser: LaserExit,
    pub mark: Option<ExitMark>,
}

impl Exit {
    pub const fn is_fired(self) -> bool {
        self.laser.is_fired()
    }

    pub const fn is_wrong(self) -> bool {
        matches!(self.mark, Some(ExitMark::Wrong))
    }

    pub const fn is_omitted(self) -> bool {
        matches!(self.mark, Some(ExitMark::Omitted))
    }
}
