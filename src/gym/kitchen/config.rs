use std::collections::HashSet;

use log::warn;
use strum::{Display, EnumIter, IntoEnumIterator};

use super::KitchenError;

/// Grid coordinates `(x, y)` with the origin in the bottom-left corner
pub type Pos = (usize, usize);

/// Dimensions of the kitchen floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridGeometry {
    width: usize,
    height: usize,
}

impl GridGeometry {
    /// **Errors** if either dimension is zero
    pub fn new(width: usize, height: usize) -> Result<Self, KitchenError> {
        if width == 0 || height == 0 {
            return Err(KitchenError::InvalidConfig(format!(
                "grid must be at least 1x1, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of cells in the grid
    pub const fn cells(&self) -> usize {
        self.width * self.height
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.0 < self.width && pos.1 < self.height
    }

    pub fn clamp(&self, pos: Pos) -> Pos {
        (pos.0.min(self.width - 1), pos.1.min(self.height - 1))
    }

    /// Row-major index of a cell, rows ordered by `y`
    pub fn index(&self, pos: Pos) -> usize {
        pos.1 * self.width + pos.0
    }

    /// Cells of row `y`, left to right
    pub fn row(&self, y: usize) -> impl Iterator<Item = Pos> {
        (0..self.width).map(move |x| (x, y))
    }
}

/// A cell with a special interaction effect
#[derive(EnumIter, Display, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum Station {
    Fridge,
    Cutting,
    Stove,
    Counter,
}

impl Station {
    /// Marker used by the text renderers
    pub const fn marker(self) -> char {
        match self {
            Station::Fridge => 'F',
            Station::Cutting => 'C',
            Station::Stove => 'S',
            Station::Counter => 'X',
        }
    }
}

/// Where each [`Station`] sits on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocationTable {
    pub fridge: Pos,
    pub cutting: Pos,
    pub stove: Pos,
    pub counter: Pos,
}

impl Default for LocationTable {
    fn default() -> Self {
        Self {
            fridge: (0, 2),
            cutting: (1, 2),
            stove: (2, 2),
            counter: (3, 1),
        }
    }
}

impl LocationTable {
    pub fn get(&self, station: Station) -> Pos {
        match station {
            Station::Fridge => self.fridge,
            Station::Cutting => self.cutting,
            Station::Stove => self.stove,
            Station::Counter => self.counter,
        }
    }

    /// The first station at `pos`, in [`Station`] declaration order
    pub fn station_at(&self, pos: Pos) -> Option<Station> {
        Station::iter().find(|&s| self.get(s) == pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Station, Pos)> + '_ {
        Station::iter().map(|s| (s, self.get(s)))
    }
}

/// Configuration for the [`Kitchen`](super::Kitchen) environment
///
/// The default is the 4x3 reference hawker stall.
#[derive(Debug, Clone, PartialEq)]
pub struct KitchenConfig {
    pub width: usize,
    pub height: usize,
    /// Episode length limit
    pub max_steps: u32,
    /// Consecutive qualifying steps on the stove before the food is cooked
    pub frying_steps: u32,
    /// Reward paid when the dish is delivered to the counter
    pub delivery_reward: f32,
    pub locations: LocationTable,
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self {
            width: 4,
            height: 3,
            max_steps: 50,
            frying_steps: 3,
            delivery_reward: 10.0,
            locations: LocationTable::default(),
        }
    }
}

impl KitchenConfig {
    /// Check the configuration and build its grid
    ///
    /// Stations sharing a cell are allowed but logged.
    pub fn validate(&self) -> Result<GridGeometry, KitchenError> {
        let geometry = GridGeometry::new(self.width, self.height)?;

        if self.max_steps == 0 {
            return Err(KitchenError::InvalidConfig(
                "`max_steps` must be at least 1".into(),
            ));
        }
        if self.frying_steps == 0 {
            return Err(KitchenError::InvalidConfig(
                "`frying_steps` must be at least 1".into(),
            ));
        }

        let mut occupied = HashSet::new();
        for (station, pos) in self.locations.iter() {
            if !geometry.contains(pos) {
                return Err(KitchenError::InvalidConfig(format!(
                    "{station} at {pos:?} is outside the {}x{} grid",
                    geometry.width(),
                    geometry.height()
                )));
            }
            if !occupied.insert(pos) {
                warn!("{station} shares cell {pos:?} with another station");
            }
        }

        Ok(geometry)
    }
}
