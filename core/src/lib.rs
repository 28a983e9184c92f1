#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use moves::*;
pub use params::*;
pub use perimeter::*;
pub use tile::*;
pub use types::*;
pub use verify::*;

mod board;
pub mod desc;
mod engine;
mod error;
mod generator;
mod laser;
mod moves;
mod params;
mod perimeter;
mod tile;
mod types;
mod verify;

/// The hidden truth of a game: arena size and ball positions, in zero-based arena coordinates.
///
/// Balls keep the order they were given in, so a layout survives a trip through its description unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallLayout {
    size: Dim2,
    balls: Vec<Dim2>,
}

impl BallLayout {
    pub fn from_ball_coords(size: Dim2, balls: &[Dim2]) -> Result<Self> {
        let mut occupied: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in balls {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(DescriptorError::BallOutOfRange.into());
            }
            if occupied[coords.to_nd_index()] {
                return Err(DescriptorError::DuplicateBall.into());
            }
            occupied[coords.to_nd_index()] = true;
        }

        Ok(Self {
            size,
            balls: balls.to_vec(),
        })
    }

    pub fn from_descriptor(params: &GameParams, desc: &str) -> Result<Self> {
        desc::decode(params, desc)
    }

    pub fn to_descriptor(&self) -> String {
        desc::encode(self)
    }

    pub fn size(&self) -> Dim2 {
        self.size
    }

    pub fn balls(&self) -> &[Dim2] {
        &self.balls
    }

    pub fn ball_count(&self) -> BallCount {
        // from_ball_coords rejects duplicates, so this is bounded by the arena area
        self.balls.len() as BallCount
    }

    pub fn contains_ball(&self, coords: Dim2) -> bool {
        self.balls.contains(&coords)
    }
}
