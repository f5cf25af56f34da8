use crate::Point;

/// Travel direction of the maze flood fill. Exactly these four variants; the
/// frontier tables below are tied to them and must not be generalized.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::Left,
    Direction::Up,
    Direction::Right,
    Direction::Down,
];

impl Direction {
    /// Unit cell offset for this direction. Y grows downward.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }

    /// Offsets (from a candidate cell) of the five cells that must hold no
    /// maze before the fill may claim the candidate: the two flanks plus the
    /// three cells ahead. Any maze there would merge the corridor with itself
    /// or touch it on the diagonal.
    pub fn frontier(self) -> [(i32, i32); 5] {
        match self {
            Direction::Left => [(0, -1), (0, 1), (-1, 0), (-1, -1), (-1, 1)],
            Direction::Up => [(-1, 0), (1, 0), (0, -1), (-1, -1), (1, -1)],
            Direction::Right => [(0, -1), (0, 1), (1, 0), (1, -1), (1, 1)],
            Direction::Down => [(-1, 0), (1, 0), (0, 1), (-1, 1), (1, 1)],
        }
    }

    pub fn apply(self, p: Point) -> Point {
        p.offset(self.offset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontier_excludes_approach_side() {
        // The cell we came from (opposite the travel direction) must never be
        // in the frontier; it is already maze.
        for dir in ALL_DIRECTIONS.iter() {
            let (dx, dy) = dir.offset();
            let behind = (-dx, -dy);
            assert!(!dir.frontier().contains(&behind), "{:?}", dir);
        }
    }

    #[test]
    fn test_frontier_contains_forward_cell() {
        for dir in ALL_DIRECTIONS.iter() {
            assert!(dir.frontier().contains(&dir.offset()), "{:?}", dir);
        }
    }
}
