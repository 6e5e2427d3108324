pub mod core;
pub mod cpu;
pub mod device;

pub mod prelude {
    pub use crate::core::machine::Machine;
    pub use crate::core::{Bus, BusDir, Component};
    pub use crate::cpu::Cpu;
}
