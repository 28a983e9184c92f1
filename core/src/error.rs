use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid parameters: {0}")]
    InvalidParams(ParamsError),
    #[error("Malformed game description: {0}")]
    MalformedDescriptor(DescriptorError),
    #[error("Illegal move: {0}")]
    IllegalMove(IllegalMove),
    #[error("Unrecognized move")]
    ProtocolMismatch,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParamsError {
    #[error("Grid must be at least 2 wide and 2 high")]
    TooSmall,
    #[error("Parameters are not of the form w<width>h<height>m<min>M<max>")]
    Malformed,
    #[error("Min. balls must be <= max. balls")]
    BallRangeInverted,
    #[error("Too many balls for grid")]
    TooManyBalls,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("game description is wrong length")]
    WrongLength,
    #[error("game description is not hexadecimal")]
    NotHex,
    #[error("grid size does not match parameters")]
    SizeMismatch,
    #[error("ball lies outside the arena")]
    BallOutOfRange,
    #[error("two balls share a cell")]
    DuplicateBall,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum IllegalMove {
    #[error("guesses have already been revealed")]
    AlreadyRevealed,
    #[error("cell is not inside the arena")]
    NotInArena,
    #[error("position is not on the firing range")]
    NotOnPerimeter,
    #[error("cell is locked")]
    Locked,
    #[error("laser has already been fired")]
    AlreadyFired,
    #[error("number of guessed balls is out of range")]
    GuessCountOutOfRange,
}

impl From<ParamsError> for GameError {
    fn from(err: ParamsError) -> Self {
        Self::InvalidParams(err)
    }
}

impl From<DescriptorError> for GameError {
    fn from(err: DescriptorError) -> Self {
        Self::MalformedDescriptor(err)
    }
}

impl From<IllegalMove> for GameError {
    fn from(err: IllegalMove) -> Self {
        Self::IllegalMove(err)
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
