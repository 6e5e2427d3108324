use crate::core::Bus;

use super::{M6502, Status};

impl M6502 {
    /// AND - A = A & M. Sets N, Z.
    pub(crate) fn op_and(&mut self, bus: &mut Bus) -> bool {
        self.read_step(bus, |cpu, value| {
            cpu.a &= value;
            let a = cpu.a;
            cpu.set_nz(a);
        })
    }

    /// ORA - A = A | M. Sets N, Z.
    pub(crate) fn op_ora(&mut self, bus: &mut Bus) -> bool {
        self.read_step(bus, |cpu, value| {
            cpu.a |= value;
            let a = cpu.a;
            cpu.set_nz(a);
        })
    }

    /// EOR - A = A ^ M. Sets N, Z.
    pub(crate) fn op_eor(&mut self, bus: &mut Bus) -> bool {
        self.read_step(bus, |cpu, value| {
            cpu.a ^= value;
            let a = cpu.a;
            cpu.set_nz(a);
        })
    }

    /// BIT - N = M bit 7, V = M bit 6, Z = (A & M) == 0. A unchanged.
    pub(crate) fn op_bit(&mut self, bus: &mut Bus) -> bool {
        self.read_step(bus, |cpu, value| {
            cpu.p.set(Status::NEGATIVE, value & 0x80 != 0);
            cpu.p.set(Status::OVERFLOW, value & 0x40 != 0);
            cpu.p.set(Status::ZERO, cpu.a & value == 0);
        })
    }
}
