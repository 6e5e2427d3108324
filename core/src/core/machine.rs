/// Machine-agnostic interface for a wired system.
///
/// A machine owns its bus and devices and advances them in lockstep. The
/// stepping order of the devices within a tick is part of the machine's
/// contract, not an implementation detail.
pub trait Machine {
    /// Advance the whole system by exactly one clock tick.
    fn cycle(&mut self);

    /// Re-enter the CPU reset sequence. Only valid between instructions.
    fn reset(&mut self);
}
