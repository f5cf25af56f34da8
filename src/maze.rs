use crate::{
    direction::{Direction, ALL_DIRECTIONS},
    grid::GridState,
    Point,
};

use rand::{seq::SliceRandom, Rng};

/// Maze growth phase. A LIFO queue of (cell, travel direction) entries drives
/// a depth-first fill; pushing each claimed cell's neighbors in shuffled
/// order is what gives corridors their winding character.
pub struct MazeGrowth {
    queue: Vec<(Point, Direction)>,
}

impl MazeGrowth {
    pub fn new() -> Self {
        MazeGrowth { queue: Vec::new() }
    }

    /// Pops queue entries until one claims a cell. When the queue runs dry,
    /// scans for the next seed; no seed left means the phase is over.
    pub fn step(&mut self, grid: &mut GridState, rng: &mut impl Rng) -> bool {
        while let Some((cell, dir)) = self.queue.pop() {
            if self.try_claim(grid, cell, dir, rng) {
                return false;
            }
        }

        if let Some(seed) = find_seed(grid) {
            log::debug!("maze seed at {:?}", seed);
            grid.maze.insert(seed);
            self.push_neighbors(grid, seed, rng);
            return false;
        }

        true
    }

    fn try_claim(
        &mut self,
        grid: &mut GridState,
        cell: Point,
        dir: Direction,
        rng: &mut impl Rng,
    ) -> bool {
        if !grid.is_empty_cell(cell) || grid.touches_room(cell) {
            return false;
        }
        // The five frontier cells must be free of maze or the corridor would
        // merge with itself or touch on the diagonal.
        for off in dir.frontier().iter() {
            if grid.maze.contains(&cell.offset(*off)) {
                return false;
            }
        }

        grid.maze.insert(cell);
        self.push_neighbors(grid, cell, rng);
        true
    }

    fn push_neighbors(&mut self, grid: &GridState, cell: Point, rng: &mut impl Rng) {
        let mut dirs: Vec<Direction> = ALL_DIRECTIONS
            .iter()
            .copied()
            .filter(|d| grid.in_bounds(d.apply(cell)))
            .collect();
        dirs.shuffle(rng);
        for d in dirs {
            self.queue.push((d.apply(cell), d));
        }
    }
}

/// First valid seed in scan order: x ascending, y descending.
fn find_seed(grid: &GridState) -> Option<Point> {
    for x in 0..grid.size {
        for y in (0..grid.size).rev() {
            let p = Point::new(x, y);
            if valid_seed(grid, p) {
                return Some(p);
            }
        }
    }

    None
}

/// A seed must be empty, clear of room halos, and have no maze among any of
/// its eight neighbors, so each fill starts a fresh corridor region.
fn valid_seed(grid: &GridState, p: Point) -> bool {
    grid.is_empty_cell(p)
        && !grid.touches_room(p)
        && !grid.neighbors8(p).iter().any(|n| grid.maze.contains(n))
}
