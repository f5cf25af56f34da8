use crate::Point;

use fnv::FnvHashSet;
use serde::{Deserialize, Serialize};

const AXIS_OFFSETS: [(i32, i32); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];
const DIAG_OFFSETS: [(i32, i32); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// An axis-aligned rectangle of cells.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }

    /// The rectangle grown by `amount` cells on every side.
    pub fn expand(&self, amount: i32) -> Rect {
        Rect::new(
            self.x - amount,
            self.y - amount,
            self.width + 2 * amount,
            self.height + 2 * amount,
        )
    }

    pub fn cells(self) -> impl Iterator<Item = Point> {
        (self.y..self.y + self.height)
            .flat_map(move |y| (self.x..self.x + self.width).map(move |x| Point::new(x, y)))
    }
}

/// A placed room. The color is sampled at acceptance for drivers that paint
/// rooms; the generator itself never reads it.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Room {
    pub rect: Rect,
    pub color: [u8; 3],
}

/// Occupancy state shared by all generation phases: the accepted rooms, the
/// corridor cells, and the subset of cells merged into the main region.
///
/// Queries are plain reads over the current sets, so phase code can mutate
/// the sets directly and query results stay current.
pub struct GridState {
    pub size: i32,
    pub rooms: Vec<Room>,
    pub maze: FnvHashSet<Point>,
    pub main: FnvHashSet<Point>,
}

impl GridState {
    pub fn new(size: i32) -> Self {
        GridState {
            size,
            rooms: Vec::new(),
            maze: FnvHashSet::default(),
            main: FnvHashSet::default(),
        }
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.size && p.y < self.size
    }

    /// Is `p` inside some room's interior?
    pub fn intersects_room(&self, p: Point) -> bool {
        self.rooms.iter().any(|r| r.rect.contains(p))
    }

    /// Is `p` inside some room's interior or its one-cell halo? Halo contact
    /// includes diagonal adjacency by construction.
    pub fn touches_room(&self, p: Point) -> bool {
        self.rooms.iter().any(|r| r.rect.expand(1).contains(p))
    }

    /// Does `rect`, grown by its one-cell halo, overlap any room interior?
    pub fn rect_touches_room(&self, rect: &Rect) -> bool {
        let grown = rect.expand(1);
        self.rooms.iter().any(|r| grown.intersects(&r.rect))
    }

    /// Empty means neither room interior nor corridor.
    pub fn is_empty_cell(&self, p: Point) -> bool {
        !self.intersects_room(p) && !self.maze.contains(&p)
    }

    /// In-bounds 4-connected neighbors of `p`.
    pub fn neighbors4(&self, p: Point) -> Vec<Point> {
        AXIS_OFFSETS
            .iter()
            .map(|&d| p.offset(d))
            .filter(|q| self.in_bounds(*q))
            .collect()
    }

    /// In-bounds diagonal neighbors of `p`.
    pub fn neighbors_diag(&self, p: Point) -> Vec<Point> {
        DIAG_OFFSETS
            .iter()
            .map(|&d| p.offset(d))
            .filter(|q| self.in_bounds(*q))
            .collect()
    }

    /// All eight in-bounds neighbors.
    pub fn neighbors8(&self, p: Point) -> Vec<Point> {
        let mut all = self.neighbors4(p);
        all.extend(self.neighbors_diag(p));
        all
    }

    /// How many 4-connected neighbors of `p` are non-empty (room or maze).
    /// Off-grid neighbors count as empty.
    pub fn open_neighbor_count(&self, p: Point) -> usize {
        self.neighbors4(p)
            .into_iter()
            .filter(|n| !self.is_empty_cell(*n))
            .count()
    }
}
