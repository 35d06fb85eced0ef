use strum::{EnumIter, FromRepr, VariantArray};

use super::KitchenError;

/// Actions for the [`Kitchen`](super::Kitchen) environment
///
/// The discriminants are the raw action indices an external policy emits.
#[derive(FromRepr, EnumIter, VariantArray, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KitchenAction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
    /// Use the station under the agent
    Interact = 4,
}

impl KitchenAction {
    /// Movement as `(dx, dy)`, or `None` for [`KitchenAction::Interact`]
    pub fn delta(self) -> Option<(isize, isize)> {
        match self {
            KitchenAction::Up => Some((0, 1)),
            KitchenAction::Down => Some((0, -1)),
            KitchenAction::Left => Some((-1, 0)),
            KitchenAction::Right => Some((1, 0)),
            KitchenAction::Interact => None,
        }
    }
}

impl TryFrom<usize> for KitchenAction {
    type Error = KitchenError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::from_repr(value).ok_or(KitchenError::InvalidAction(value))
    }
}

impl From<KitchenAction> for usize {
    fn from(action: KitchenAction) -> Self {
        action as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_indices() {
        assert_eq!(KitchenAction::try_from(0), Ok(KitchenAction::Up));
        assert_eq!(KitchenAction::try_from(4), Ok(KitchenAction::Interact));
        assert_eq!(
            KitchenAction::try_from(5),
            Err(KitchenError::InvalidAction(5)),
            "Out of range index is rejected"
        );

        for &action in KitchenAction::VARIANTS {
            let index: usize = action.into();
            assert_eq!(KitchenAction::try_from(index), Ok(action), "{action:?} index is stable");
        }
    }

    #[test]
    fn only_interact_stays_put() {
        let movers = KitchenAction::VARIANTS
            .iter()
            .filter(|a| a.delta().is_some())
            .count();
        assert_eq!(movers, 4, "Four movement actions");
        assert_eq!(KitchenAction::Interact.delta(), None);
    }
}
