/// Environment
pub mod env;

/// Simulation environments
pub mod gym;

/// Terminal viewer for kitchen episodes
#[cfg(feature = "viz")]
pub mod viz;
