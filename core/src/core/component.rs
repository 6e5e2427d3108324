use super::bus::Bus;

/// Anything that advances by discrete clock ticks against the shared bus.
///
/// The driver steps every memory-mapped device before the CPU within a tick,
/// which is what gives a bus request its fixed one-tick turnaround.
pub trait Component {
    /// Advance one clock cycle. Returns true if a significant event occurred
    /// (for a CPU, an instruction retired on this tick).
    fn cycle(&mut self, bus: &mut Bus) -> bool;
}
