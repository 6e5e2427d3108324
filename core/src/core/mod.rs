pub mod bus;
pub mod component;
pub mod machine;

pub use bus::{Bus, BusDir};
pub use component::Component;
pub use machine::Machine;
