use crate::{
    grid::{GridState, Rect},
    Point,
};

use rand::{seq::SliceRandom, Rng};
use std::mem;

/// One extra connector is opened for roughly every five merges, so rooms are
/// not all reached through a single corridor-width bottleneck.
const EXTRA_CONNECTOR_CHANCE: u32 = 5;

/// Connection phase. The first accepted room seeds the main region; opening
/// a connector then flood-fills the newly joined territory into it, until no
/// valid connectors remain.
pub struct Connection {
    connectors: Vec<Point>,
    merge_queue: Vec<Point>,
    started: bool,
}

impl Connection {
    pub fn new() -> Self {
        Connection {
            connectors: Vec::new(),
            merge_queue: Vec::new(),
            started: false,
        }
    }

    /// Returns true once no connectors remain and the last merge has drained.
    pub fn step(&mut self, grid: &mut GridState, rng: &mut impl Rng) -> bool {
        if !self.started {
            self.start(grid);
        }

        if self.merge_queue.is_empty() {
            // Stale connectors drop out as the main region absorbs territory.
            self.connectors.retain(|c| is_connector(grid, *c));
            if self.connectors.is_empty() {
                return true;
            }
            if !self.open_connector(grid, rng) {
                // Nothing left borders the main region, so nothing left can
                // ever join; drop the stragglers.
                self.connectors.clear();
                return true;
            }
        }

        self.merge_substep(grid);
        false
    }

    fn start(&mut self, grid: &mut GridState) {
        self.started = true;

        // The first accepted room (list order) is the fixed main room.
        if let Some(rect) = grid.rooms.first().map(|r| r.rect) {
            for cell in rect.cells() {
                grid.main.insert(cell);
            }
        }

        for x in 0..grid.size {
            for y in (0..grid.size).rev() {
                let p = Point::new(x, y);
                if is_connector(grid, p) {
                    self.connectors.push(p);
                }
            }
        }
        log::debug!("{} connectors found", self.connectors.len());
    }

    /// Opens one uniform-random connector bordering the main region, and
    /// sometimes a second one into the same newly joined room. Returns false
    /// if no connector borders the main region.
    fn open_connector(&mut self, grid: &mut GridState, rng: &mut impl Rng) -> bool {
        let candidates: Vec<usize> = (0..self.connectors.len())
            .filter(|&i| touches_main(grid, self.connectors[i]))
            .collect();
        let &pick = match candidates.choose(rng) {
            Some(i) => i,
            None => return false,
        };

        let cell = self.connectors.swap_remove(pick);
        self.open(grid, cell);

        if rng.gen_range(0, EXTRA_CONNECTOR_CHANCE) == 0 {
            self.open_extra(grid, cell, rng);
        }

        true
    }

    /// An opened connector becomes a corridor cell and seeds the merge fill.
    fn open(&mut self, grid: &mut GridState, cell: Point) {
        log::debug!("opening connector {:?}", cell);
        grid.maze.insert(cell);
        self.merge_queue.push(cell);
    }

    /// Find a room being joined through `cell` and open a second connector
    /// along its halo.
    fn open_extra(&mut self, grid: &mut GridState, cell: Point, rng: &mut impl Rng) {
        let joined = grid
            .rooms
            .iter()
            .map(|r| r.rect)
            .find(|r| !rect_in_main(grid, r) && borders_rect(grid, cell, r));
        let bounds = match joined {
            Some(r) => r.expand(1),
            None => return,
        };

        let candidates: Vec<usize> = (0..self.connectors.len())
            .filter(|&i| {
                let c = self.connectors[i];
                bounds.contains(c) && touches_main(grid, c)
            })
            .collect();
        if let Some(&i) = candidates.choose(rng) {
            let extra = self.connectors.swap_remove(i);
            self.open(grid, extra);
        }
    }

    /// One flood-fill sub-step: mark the current frontier as main region and
    /// queue up the next frontier of unmerged room or maze cells.
    fn merge_substep(&mut self, grid: &mut GridState) {
        let frontier = mem::replace(&mut self.merge_queue, Vec::new());
        for cell in frontier {
            grid.main.insert(cell);
            for n in grid.neighbors4(cell) {
                if grid.main.contains(&n) {
                    continue;
                }
                if !grid.intersects_room(n) && !grid.maze.contains(&n) {
                    continue;
                }
                if !self.merge_queue.contains(&n) {
                    self.merge_queue.push(n);
                }
            }
        }
    }
}

/// A connector is an empty cell whose 4-neighborhood spans more than one
/// region: +1 for any main-region contact, +1 for any unmerged maze contact,
/// plus one per distinct adjacent room interior.
pub fn is_connector(grid: &GridState, p: Point) -> bool {
    if !grid.is_empty_cell(p) {
        return false;
    }

    let neighbors = grid.neighbors4(p);
    let mut tally = 0;
    if neighbors.iter().any(|n| grid.main.contains(n)) {
        tally += 1;
    }
    if neighbors
        .iter()
        .any(|n| grid.maze.contains(n) && !grid.main.contains(n))
    {
        tally += 1;
    }
    tally += grid
        .rooms
        .iter()
        .filter(|r| neighbors.iter().any(|n| r.rect.contains(*n)))
        .count();

    tally > 1
}

fn touches_main(grid: &GridState, p: Point) -> bool {
    grid.neighbors4(p).iter().any(|n| grid.main.contains(n))
}

fn borders_rect(grid: &GridState, p: Point, rect: &Rect) -> bool {
    grid.neighbors4(p).iter().any(|n| rect.contains(*n))
}

/// Merges run a whole region at a time, so any-cell membership is enough.
fn rect_in_main(grid: &GridState, rect: &Rect) -> bool {
    rect.cells().any(|c| grid.main.contains(&c))
}
