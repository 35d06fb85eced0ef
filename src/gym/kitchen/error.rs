use thiserror::Error;

/// Errors raised by the [`Kitchen`](super::Kitchen) environment
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KitchenError {
    #[error("Invalid action index {0}, expected 0..=4")]
    InvalidAction(usize),

    #[error("Kitchen failed to return to its initial state: {0}")]
    InvalidResetState(String),

    #[error("Invalid kitchen configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_action_display() {
        let e = KitchenError::InvalidAction(7);
        assert_eq!(e.to_string(), "Invalid action index 7, expected 0..=4");
    }

    #[test]
    fn invalid_config_display() {
        let e = KitchenError::InvalidConfig("grid must be at least 1x1".into());
        assert!(e.to_string().contains("at least 1x1"));
    }
}
