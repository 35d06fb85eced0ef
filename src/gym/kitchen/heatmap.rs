use std::fmt;

use super::{GridGeometry, Pos};

/// Per-cell visit counts for one episode
///
/// Purely diagnostic: nothing in the simulation reads it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitHeatmap {
    geometry: GridGeometry,
    counts: Vec<u32>,
}

impl VisitHeatmap {
    pub fn new(geometry: GridGeometry) -> Self {
        Self {
            geometry,
            counts: vec![0; geometry.cells()],
        }
    }

    pub fn geometry(&self) -> GridGeometry {
        self.geometry
    }

    /// Count one visit at `pos`; positions off the grid are ignored
    pub fn record(&mut self, pos: Pos) {
        if self.geometry.contains(pos) {
            self.counts[self.geometry.index(pos)] += 1;
        }
    }

    /// Visits at `pos`, zero for positions off the grid
    pub fn get(&self, pos: Pos) -> u32 {
        if self.geometry.contains(pos) {
            self.counts[self.geometry.index(pos)]
        } else {
            0
        }
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// The highest count on the grid
    pub fn max(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn clear(&mut self) {
        self.counts.fill(0);
    }

    /// Counts in row-major order, rows ordered by `y`
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }
}

/// Rows top to bottom, so `y = 0` is the last line
impl fmt::Display for VisitHeatmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max().to_string().len();
        for y in (0..self.geometry.height()).rev() {
            let row = self
                .geometry
                .row(y)
                .map(|pos| format!("{:>width$}", self.get(pos)))
                .collect::<Vec<_>>()
                .join(" ");
            if y > 0 {
                writeln!(f, "{row}")?;
            } else {
                write!(f, "{row}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_and_clear() {
        let mut heatmap = VisitHeatmap::new(GridGeometry::new(4, 3).unwrap());
        heatmap.record((0, 0));
        heatmap.record((0, 0));
        heatmap.record((3, 2));
        heatmap.record((9, 9));

        assert_eq!(heatmap.get((0, 0)), 2);
        assert_eq!(heatmap.get((3, 2)), 1);
        assert_eq!(heatmap.get((9, 9)), 0, "Off-grid visits are dropped");
        assert_eq!(heatmap.total(), 3);
        assert_eq!(heatmap.max(), 2);
        assert_eq!(heatmap.counts()[11], 1, "Top-right is the last cell");

        heatmap.clear();
        assert_eq!(heatmap.total(), 0, "Cleared");
    }

    #[test]
    fn display_flips_rows() {
        let mut heatmap = VisitHeatmap::new(GridGeometry::new(3, 2).unwrap());
        for _ in 0..12 {
            heatmap.record((0, 0));
        }
        heatmap.record((2, 1));

        assert_eq!(heatmap.to_string(), " 0  0  1\n12  0  0");
    }
}
