use alloc::format;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameParams {
    pub width: Dim,
    pub height: Dim,
    pub min_balls: BallCount,
    pub max_balls: BallCount,
}

impl GameParams {
    pub const fn new(width: Dim, height: Dim, min_balls: BallCount, max_balls: BallCount) -> Self {
        Self {
            width,
            height,
            min_balls,
            max_balls,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.width < 2 || self.height < 2 {
            return Err(ParamsError::TooSmall.into());
        }
        if self.min_balls > self.max_balls {
            return Err(ParamsError::BallRangeInverted.into());
        }
        if self.min_balls >= self.total_cells() {
            return Err(ParamsError::TooManyBalls.into());
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> BallCount {
        mult(self.width, self.height)
    }

    pub const fn allows_ball_count(&self, count: BallCount) -> bool {
        self.min_balls <= count && count <= self.max_balls
    }

    /// Human readable summary, such as `8x8, 3-6 balls`.
    pub fn name(&self) -> String {
        if self.min_balls == self.max_balls {
            format!("{}x{}, {} balls", self.width, self.height, self.min_balls)
        } else {
            format!(
                "{}x{}, {}-{} balls",
                self.width, self.height, self.min_balls, self.max_balls
            )
        }
    }
}

impl Default for GameParams {
    fn default() -> Self {
        Self::new(8, 8, 5, 5)
    }
}

pub const PRESETS: [GameParams; 5] = [
    GameParams::new(5, 5, 3, 3),
    GameParams::new(8, 8, 5, 5),
    GameParams::new(8, 8, 3, 6),
    GameParams::new(10, 10, 5, 5),
    GameParams::new(10, 10, 4, 10),
];

/// Compact form `w8h8m3M6`.
impl fmt::Display for GameParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "w{}h{}m{}M{}",
            self.width, self.height, self.min_balls, self.max_balls
        )
    }
}

/// Reads the compact form. Unknown keys are skipped and missing keys keep their defaults; the result is not validated.
impl FromStr for GameParams {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let mut params = Self::default();
        let mut rest = s;

        while let Some(key) = rest.chars().next() {
            rest = &rest[key.len_utf8()..];
            let digits = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
            let (number, tail) = rest.split_at(digits);
            rest = tail;

            let field = match key {
                'w' | 'h' => {
                    let value = number.parse::<Dim>().map_err(|_| ParamsError::Malformed)?;
                    if key == 'w' {
                        params.width = value;
                    } else {
                        params.height = value;
                    }
                    continue;
                }
                'm' => &mut params.min_balls,
                'M' => &mut params.max_balls,
                _ => continue,
            };
            *field = number.parse().map_err(|_| ParamsError::Malformed)?;
        }

        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        for preset in PRESETS {
            assert_eq!(preset.validate(), Ok(()));
        }
        assert_eq!(PRESETS[0].name(), "5x5, 3 balls");
        assert_eq!(PRESETS[2].name(), "8x8, 3-6 balls");
    }

    #[test]
    fn validate_rejects_bad_shapes() {
        assert_eq!(
            GameParams::new(1, 5, 1, 1).validate(),
            Err(ParamsError::TooSmall.into())
        );
        assert_eq!(GameParams::new(255, 255, 1, 1).validate(), Ok(()));
        assert_eq!(
            GameParams::new(5, 5, 4, 3).validate(),
            Err(ParamsError::BallRangeInverted.into())
        );
        assert_eq!(
            GameParams::new(2, 2, 4, 4).validate(),
            Err(ParamsError::TooManyBalls.into())
        );
    }

    #[test]
    fn compact_form_parses_back() {
        let params = GameParams::new(10, 7, 4, 10);

        assert_eq!(format!("{params}"), "w10h7m4M10");
        assert_eq!(format!("{params}").parse::<GameParams>(), Ok(params));
    }

    #[test]
    fn compact_form_keeps_defaults_and_skips_unknown_keys() {
        let params: GameParams = "h6x99m2".parse().unwrap();

        assert_eq!(params, GameParams::new(8, 6, 2, 5));
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        assert_eq!("wh5".parse::<GameParams>(), Err(ParamsError::Malformed.into()));
        assert_eq!("w300".parse::<GameParams>(), Err(ParamsError::Malformed.into()));
    }
}
