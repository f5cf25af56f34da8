use crate::{
    connect::Connection,
    deadend::DeadEndRemoval,
    grid::{GridState, Room},
    maze::MazeGrowth,
    rooms::RoomPlacement,
    sampling, Point,
};

use fnv::FnvHashSet;
use rand::{rngs::SmallRng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_GRID_SIZE: i32 = 27;
pub const DEFAULT_ROOM_ATTEMPTS: usize = 200;
pub const MIN_GRID_SIZE: i32 = 9;

/// Generation parameters. The grid is always square with odd size; `seed` of
/// `None` draws entropy, so two runs only reproduce each other when seeded.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct DungeonSpec {
    pub grid_size: i32,
    pub room_attempts: usize,
    pub seed: Option<[u32; 4]>,
}

impl Default for DungeonSpec {
    fn default() -> Self {
        DungeonSpec {
            grid_size: DEFAULT_GRID_SIZE,
            room_attempts: DEFAULT_ROOM_ATTEMPTS,
            seed: None,
        }
    }
}

impl DungeonSpec {
    pub fn from_ron(s: &str) -> Result<Self, ron::de::Error> {
        ron::de::from_str(s)
    }

    fn validate(&self) -> Result<(), SpecError> {
        if self.grid_size < MIN_GRID_SIZE {
            return Err(SpecError::GridTooSmall(self.grid_size));
        }
        if self.grid_size % 2 == 0 {
            return Err(SpecError::GridSizeEven(self.grid_size));
        }
        if self.room_attempts == 0 {
            return Err(SpecError::NoRoomAttempts);
        }

        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum SpecError {
    #[error("grid size must be at least 9, got {0}")]
    GridTooSmall(i32),
    #[error("grid size must be odd, got {0}")]
    GridSizeEven(i32),
    #[error("room attempt budget must be positive")]
    NoRoomAttempts,
}

/// The four ordered generation stages plus the terminal state. Transitions
/// run strictly forward and no stage is ever revisited.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Phase {
    RoomPlacement,
    MazeGrowth,
    Connection,
    Removal,
    Done,
}

/// The generator owns all phase state; a host driver calls `step` whenever it
/// wants the dungeon to advance and reads the snapshots for presentation.
pub struct DungeonGenerator {
    spec: DungeonSpec,
    rng: SmallRng,
    phase: Phase,
    grid: GridState,
    rooms_phase: RoomPlacement,
    maze_phase: MazeGrowth,
    connect_phase: Connection,
    removal_phase: DeadEndRemoval,
}

impl DungeonGenerator {
    pub fn new(spec: DungeonSpec) -> Result<Self, SpecError> {
        spec.validate()?;

        Ok(Self::from_valid_spec(spec))
    }

    fn from_valid_spec(spec: DungeonSpec) -> Self {
        let rng = match spec.seed {
            Some(seed) => sampling::small_rng(seed),
            None => SmallRng::from_entropy(),
        };

        DungeonGenerator {
            rng,
            phase: Phase::RoomPlacement,
            grid: GridState::new(spec.grid_size),
            rooms_phase: RoomPlacement::new(spec.room_attempts),
            maze_phase: MazeGrowth::new(),
            connect_phase: Connection::new(),
            removal_phase: DeadEndRemoval::new(),
            spec,
        }
    }

    /// Advance one bounded unit of the active phase's work. A no-op once the
    /// run is Done.
    pub fn step(&mut self) {
        match self.phase {
            Phase::RoomPlacement => {
                if self.rooms_phase.step(&mut self.grid, &mut self.rng) {
                    self.transition(Phase::MazeGrowth);
                }
            }
            Phase::MazeGrowth => {
                if self.maze_phase.step(&mut self.grid, &mut self.rng) {
                    self.transition(Phase::Connection);
                }
            }
            Phase::Connection => {
                if self.connect_phase.step(&mut self.grid, &mut self.rng) {
                    self.transition(Phase::Removal);
                }
            }
            Phase::Removal => {
                if self.removal_phase.step(&mut self.grid) {
                    self.transition(Phase::Done);
                }
            }
            Phase::Done => {}
        }
    }

    /// Drive the whole run to completion. Panics if Done is not reached
    /// within a ceiling that every valid run stays far below.
    pub fn run(&mut self) {
        let area = (self.spec.grid_size * self.spec.grid_size) as usize;
        let ceiling = self.spec.room_attempts + 10 * area + 100;
        for _ in 0..ceiling {
            if self.phase == Phase::Done {
                return;
            }
            self.step();
        }

        panic!("dungeon generation did not finish within {} steps", ceiling);
    }

    fn transition(&mut self, next: Phase) {
        log::debug!("phase {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }

    /// Discard all progress and start over from the stored spec.
    pub fn reset(&mut self) {
        *self = Self::from_valid_spec(self.spec);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn spec(&self) -> &DungeonSpec {
        &self.spec
    }

    pub fn grid_size(&self) -> i32 {
        self.grid.size
    }

    /// Accepted rooms in acceptance order.
    pub fn rooms(&self) -> &[Room] {
        &self.grid.rooms
    }

    pub fn maze_cells(&self) -> &FnvHashSet<Point> {
        &self.grid.maze
    }

    pub fn main_region_cells(&self) -> &FnvHashSet<Point> {
        &self.grid.main
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
