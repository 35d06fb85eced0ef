use std::ops::Deref;

use super::{GridGeometry, Pos, TaskProgress};

/// Feature vector handed to the policy
///
/// A one-hot encoding of the agent's cell over the row-major grid, followed by the
/// [`TaskProgress`] flags. Length is `width * height + 3` and every value is `0.0` or `1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation(Vec<f32>);

impl Observation {
    pub(crate) fn encode(geometry: GridGeometry, agent: Pos, progress: &TaskProgress) -> Self {
        let mut features = vec![0.0; geometry.cells() + 3];
        features[geometry.index(agent)] = 1.0;
        features[geometry.cells()..].copy_from_slice(&progress.features());
        Self(features)
    }

    /// Index of the occupied cell in the one-hot block
    pub fn agent_cell(&self) -> Option<usize> {
        self.0[..self.0.len() - 3].iter().position(|&v| v == 1.0)
    }

    /// The `[has_veg, has_chopped, has_cooked]` tail
    pub fn progress(&self) -> &[f32] {
        &self.0[self.0.len() - 3..]
    }

    pub fn into_inner(self) -> Vec<f32> {
        self.0
    }
}

impl Deref for Observation {
    type Target = [f32];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_reference_grid() {
        let grid = GridGeometry::new(4, 3).unwrap();
        let progress = TaskProgress {
            has_veg: true,
            ..Default::default()
        };
        let obs = Observation::encode(grid, (1, 2), &progress);

        assert_eq!(obs.len(), 15, "12 cells plus 3 flags");
        assert_eq!(obs.agent_cell(), Some(9), "Cell (1, 2) is index 2 * 4 + 1");
        assert_eq!(obs.iter().filter(|&&v| v == 1.0).count(), 2);
        assert_eq!(obs.progress(), &[1.0, 0.0, 0.0]);
        assert!(obs.iter().all(|&v| (0.0..=1.0).contains(&v)), "Values in [0, 1]");
    }
}
