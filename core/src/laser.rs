use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Look {
    Left,
    Forward,
    Right,
}

impl Board {
    /// Fires the laser at range number `index` and records where it went.
    pub fn fire(&mut self, index: RangeNo) -> Result<LaserExit> {
        if self.perimeter().to_grid(index).is_none() {
            return Err(IllegalMove::NotOnPerimeter.into());
        }
        if self.is_fired(index) {
            return Err(IllegalMove::AlreadyFired.into());
        }
        Ok(self.trace(index))
    }

    /// Traces an unfired laser from `index`. Callers guarantee `index` is a valid, unfired range number.
    pub(crate) fn trace(&mut self, index: RangeNo) -> LaserExit {
        let (start, mut dir) = self
            .perimeter()
            .to_grid(index)
            .expect("laser must start on the firing range");

        // Hit wins over reflection when a ball sits both ahead and diagonally ahead of the range cell. No canonical
        // rule exists for this case; keep the choice stable.
        if self.sees_ball(start, dir, Look::Forward) {
            log::debug!("Laser {} hit instantly", index);
            return self.record_hit(index);
        }
        if self.sees_ball(start, dir, Look::Left) || self.sees_ball(start, dir, Look::Right) {
            log::debug!("Laser {} reflected instantly", index);
            return self.record_reflect(index);
        }

        let mut pos = step(start, dir).expect("range cells face the arena");
        // every (cell, direction) pair is visited at most once
        let (w, h) = self.size();
        let mut budget = 4 * (usize::from(w) + 2) * (usize::from(h) + 2);
        loop {
            assert!(budget > 0, "laser {index} is trapped in a cycle");
            budget -= 1;

            if let Some(exit) = self.perimeter().from_grid(pos) {
                return if exit == index {
                    log::debug!("Laser {} reflected back out", index);
                    self.record_reflect(index)
                } else {
                    log::debug!("Laser {} exits at {}", index, exit);
                    self.record_pair(index, exit)
                };
            }
            assert!(
                !self.has_ball_at(pos),
                "laser {index} stepped onto a ball at {pos:?}"
            );

            if self.sees_ball(pos, dir, Look::Forward) {
                log::debug!("Laser {} hit a ball ahead of {:?}", index, pos);
                return self.record_hit(index);
            }
            if self.sees_ball(pos, dir, Look::Left) {
                dir = dir.clockwise();
                log::trace!("Ball ahead-left of {:?}, turning {:?}", pos, dir);
                continue;
            }
            if self.sees_ball(pos, dir, Look::Right) {
                dir = dir.counter_clockwise();
                log::trace!("Ball ahead-right of {:?}, turning {:?}", pos, dir);
                continue;
            }

            pos = step(pos, dir).expect("arena cells are surrounded by the firing range");
            log::trace!("Laser {} moves {:?} to {:?}", index, dir, pos);
        }
    }

    fn sees_ball(&self, pos: Coord2, dir: Direction, look: Look) -> bool {
        let Some(ahead) = step(pos, dir) else {
            return false;
        };
        let target = match look {
            Look::Forward => Some(ahead),
            Look::Left => step(ahead, dir.counter_clockwise()),
            Look::Right => step(ahead, dir.clockwise()),
        };
        target.is_some_and(|coords| self.has_ball_at(coords))
    }
}
