use crate::{
    grid::{GridState, Rect, Room},
    sampling,
};

use rand::Rng;

/// Room placement phase. Each driver step consumes exactly one unit of the
/// attempt budget but keeps sampling candidates in-step until one is
/// accepted, so the budget counts driver-visible attempts, not raw samples.
pub struct RoomPlacement {
    attempted: usize,
    budget: usize,
}

impl RoomPlacement {
    pub fn new(budget: usize) -> Self {
        RoomPlacement {
            attempted: 0,
            budget,
        }
    }

    /// Returns true once the budget is exhausted and the phase is over.
    pub fn step(&mut self, grid: &mut GridState, rng: &mut impl Rng) -> bool {
        if self.attempted >= self.budget {
            return true;
        }
        self.attempted += 1;

        // Bounded loop standing in for the original's retry-in-place
        // recursion; giving up leaves this step roomless but still spent.
        for _ in 0..self.budget {
            let rect = sampling::sample_room_rect(grid.size, rng);
            if !accepts(grid, &rect) {
                continue;
            }
            log::debug!("accepted room {:?}", rect);
            grid.rooms.push(Room {
                rect,
                color: sampling::sample_color(rng),
            });
            break;
        }

        false
    }
}

fn accepts(grid: &GridState, rect: &Rect) -> bool {
    // Margin is only enforced on the high edges; the sampled corner can't go
    // negative, so the low sides get no symmetric check.
    if rect.x + rect.width >= grid.size || rect.y + rect.height >= grid.size {
        return false;
    }

    !grid.rect_touches_room(rect)
}
