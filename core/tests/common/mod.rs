use quartz_machines::Simple6502System;

/// Build a system with `program` in RAM at `origin` and the reset vector
/// pointing at it.
pub fn system_with(origin: u16, program: &[u8]) -> Simple6502System {
    let mut sys = Simple6502System::new();
    sys.load_program(origin, program);
    sys.set_reset_vector(origin);
    sys
}

/// Run the reset sequence to completion. Afterwards the first opcode fetch
/// is asserted on the bus and the next tick dispatches it.
pub fn run_reset(sys: &mut Simple6502System) {
    let mut ticks = 0;
    while !sys.cycle() {
        ticks += 1;
        assert!(ticks < 64, "reset sequence did not complete");
    }
}

/// Run until the next instruction boundary and return the ticks consumed,
/// counted from the opcode's arrival (its fetch cycle) through retirement.
pub fn run_instruction(sys: &mut Simple6502System) -> u64 {
    let mut ticks = 0;
    loop {
        ticks += 1;
        if sys.cycle() {
            return ticks;
        }
        assert!(ticks < 32, "instruction did not retire");
    }
}
