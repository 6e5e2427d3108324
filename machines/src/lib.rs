pub mod program;
pub mod simple6502;

pub use program::{ProgramImage, ProgramLoadError};
pub use simple6502::Simple6502System;
