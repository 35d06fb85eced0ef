pub mod help;
pub mod kitchen;
pub mod logs;

pub use kitchen::KitchenView;
pub use logs::Logs;
