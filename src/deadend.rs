use crate::{grid::GridState, Point};

use std::mem;

/// Dead-end removal phase. Corridor cells with at most one open neighbor are
/// deleted sweep by sweep; each deletion exposes its neighbors as candidates
/// for the next sweep.
pub struct DeadEndRemoval {
    queue: Vec<Point>,
}

impl DeadEndRemoval {
    pub fn new() -> Self {
        DeadEndRemoval { queue: Vec::new() }
    }

    /// One removal sub-sweep. Returns true when the queue drains, meaning no
    /// dead end remains anywhere.
    pub fn step(&mut self, grid: &mut GridState) -> bool {
        if self.queue.is_empty() {
            self.queue = grid
                .maze
                .iter()
                .copied()
                .filter(|c| grid.open_neighbor_count(*c) <= 1)
                .collect();
        }

        let sweep = mem::replace(&mut self.queue, Vec::new());
        for cell in sweep {
            // Candidates are queued unchecked and earlier deletions in this
            // sweep may have changed the picture, so requalify before
            // deleting.
            if !grid.maze.contains(&cell) || grid.open_neighbor_count(cell) > 1 {
                continue;
            }
            grid.maze.remove(&cell);
            grid.main.remove(&cell);
            for n in grid.neighbors4(cell) {
                self.queue.push(n);
            }
        }

        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Rect, Room};

    fn run_phase(grid: &mut GridState) -> usize {
        let mut phase = DeadEndRemoval::new();
        let mut steps = 0;
        while !phase.step(grid) {
            steps += 1;
            assert!(steps < 1000, "removal never drained");
        }
        steps
    }

    #[test]
    fn test_free_standing_corridor_is_consumed_entirely() {
        let mut grid = GridState::new(9);
        for x in 1..6 {
            grid.maze.insert(Point::new(x, 4));
        }
        run_phase(&mut grid);
        // Both ends are dead ends; the cascade eats the whole line.
        assert!(grid.maze.is_empty());
    }

    #[test]
    fn test_loop_survives_removal() {
        let mut grid = GridState::new(9);
        let ring = [
            (1, 1),
            (2, 1),
            (3, 1),
            (3, 2),
            (3, 3),
            (2, 3),
            (1, 3),
            (1, 2),
        ];
        for &p in ring.iter() {
            grid.maze.insert(Point::from(p));
        }
        run_phase(&mut grid);
        assert_eq!(grid.maze.len(), ring.len());
    }

    #[test]
    fn test_stub_off_a_room_is_pruned() {
        let mut grid = GridState::new(9);
        grid.rooms.push(Room {
            rect: Rect::new(1, 1, 3, 3),
            color: [0; 3],
        });
        let stub = Point::new(4, 2);
        grid.maze.insert(stub);
        grid.main.insert(stub);
        run_phase(&mut grid);
        assert!(grid.maze.is_empty());
        assert!(grid.main.is_empty());
    }

    #[test]
    fn test_clean_grid_finishes_in_one_step() {
        let mut grid = GridState::new(9);
        let mut phase = DeadEndRemoval::new();
        assert!(phase.step(&mut grid));
    }
}
