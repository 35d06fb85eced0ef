pub mod kitchen;

pub use kitchen::Kitchen;
