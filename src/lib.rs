pub mod connect;
pub mod deadend;
pub mod generator;
pub mod grid;
pub mod maze;
pub mod rooms;
pub mod sampling;

mod direction;

pub use crate::generator::{DungeonGenerator, DungeonSpec, Phase, SpecError};

use serde::{Deserialize, Serialize};

/// A cell coordinate on the generation grid.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    pub fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Point::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}
