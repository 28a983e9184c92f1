use alloc::vec::Vec;
use ndarray::Array2;

use super::*;

/// Seeded generator that picks a ball count in the allowed range and scatters that many balls uniformly.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomLayoutGenerator {
    seed: u64,
}

impl RandomLayoutGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(self, params: &GameParams) -> BallLayout {
        use rand::prelude::*;

        let size = (params.width, params.height);
        let total_cells = params.total_cells();
        let mut rng = SmallRng::seed_from_u64(self.seed);

        let mut ball_count = if params.max_balls > params.min_balls {
            rng.random_range(params.min_balls..=params.max_balls)
        } else {
            params.min_balls
        };
        if ball_count > total_cells {
            log::warn!(
                "Arena already full, requested {} balls but only {} fit",
                ball_count,
                total_cells
            );
            ball_count = total_cells;
        }

        let mut occupied: Array2<bool> = Array2::default(size.to_nd_index());
        let mut balls = Vec::with_capacity(usize::from(ball_count));
        let mut free_cells = total_cells;
        while balls.len() < usize::from(ball_count) && free_cells > 0 {
            // rank among the free cells, in row order
            let mut place = rng.random_range(0..free_cells);
            'search: for y in 0..params.height {
                for x in 0..params.width {
                    if occupied[(x, y).to_nd_index()] {
                        continue;
                    }
                    if place == 0 {
                        occupied[(x, y).to_nd_index()] = true;
                        balls.push((x, y));
                        free_cells -= 1;
                        break 'search;
                    }
                    place -= 1;
                }
            }
        }

        log::debug!("Generated {} balls with seed {}", balls.len(), self.seed);
        BallLayout::from_ball_coords(size, &balls).expect("generated balls are distinct and inside the arena")
    }
}
