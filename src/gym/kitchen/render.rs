use std::fmt;

use super::{GridGeometry, LocationTable, Pos, TaskProgress, VisitHeatmap};

const EMPTY: char = '.';
const AGENT: char = 'A';

/// Draw the kitchen as text, one line per row with `y = 0` at the bottom
///
/// Stations use their [marker](super::Station::marker); the agent is drawn over whatever it stands on.
pub fn draw(geometry: GridGeometry, locations: &LocationTable, agent: Pos) -> String {
    (0..geometry.height())
        .rev()
        .map(|y| {
            geometry
                .row(y)
                .map(|pos| marker(locations, agent, pos).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The character shown for `pos`
pub fn marker(locations: &LocationTable, agent: Pos, pos: Pos) -> char {
    if pos == agent {
        AGENT
    } else {
        locations
            .station_at(pos)
            .map(|s| s.marker())
            .unwrap_or(EMPTY)
    }
}

/// Read-only copy of everything a renderer needs from a [`Kitchen`](super::Kitchen)
#[derive(Debug, Clone, PartialEq)]
pub struct KitchenSnapshot {
    pub geometry: GridGeometry,
    pub locations: LocationTable,
    pub agent: Pos,
    pub heatmap: VisitHeatmap,
    pub progress: TaskProgress,
    pub steps_taken: u32,
    pub frying_remaining: u32,
}

impl KitchenSnapshot {
    /// The character shown for `pos` in this frame
    pub fn marker(&self, pos: Pos) -> char {
        marker(&self.locations, self.agent, pos)
    }
}

impl fmt::Display for KitchenSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&draw(self.geometry, &self.locations, self.agent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_reference_kitchen() {
        let grid = GridGeometry::new(4, 3).unwrap();
        let table = LocationTable::default();

        assert_eq!(draw(grid, &table, (0, 0)), "F C S .\n. . . X\nA . . .");
        assert_eq!(
            draw(grid, &table, (2, 2)),
            "F C A .\n. . . X\n. . . .",
            "Agent hides the stove marker"
        );
    }

    #[test]
    fn snapshot_displays_frame() {
        let grid = GridGeometry::new(2, 1).unwrap();
        let table = LocationTable {
            fridge: (0, 0),
            cutting: (0, 0),
            stove: (1, 0),
            counter: (1, 0),
        };
        let snapshot = KitchenSnapshot {
            geometry: grid,
            locations: table,
            agent: (0, 0),
            heatmap: VisitHeatmap::new(grid),
            progress: TaskProgress::default(),
            steps_taken: 0,
            frying_remaining: 0,
        };

        assert_eq!(snapshot.to_string(), "A S");
    }
}
