use crate::core::Bus;

use super::{M6502, Status};

impl M6502 {
    /// ASL - arithmetic shift left. C = old bit 7.
    pub(crate) fn op_asl(&mut self, bus: &mut Bus) -> bool {
        self.modify_step(bus, |cpu, value| {
            let result = value << 1;
            cpu.set_nzc(result, value & 0x80 != 0);
            result
        })
    }

    /// LSR - logical shift right. C = old bit 0.
    pub(crate) fn op_lsr(&mut self, bus: &mut Bus) -> bool {
        self.modify_step(bus, |cpu, value| {
            let result = value >> 1;
            cpu.set_nzc(result, value & 0x01 != 0);
            result
        })
    }

    /// ROL - rotate left through carry.
    pub(crate) fn op_rol(&mut self, bus: &mut Bus) -> bool {
        self.modify_step(bus, |cpu, value| {
            let carry_in = u8::from(cpu.p.contains(Status::CARRY));
            let result = (value << 1) | carry_in;
            cpu.set_nzc(result, value & 0x80 != 0);
            result
        })
    }

    /// ROR - rotate right through carry.
    pub(crate) fn op_ror(&mut self, bus: &mut Bus) -> bool {
        self.modify_step(bus, |cpu, value| {
            let carry_in = u8::from(cpu.p.contains(Status::CARRY));
            let result = (value >> 1) | (carry_in << 7);
            cpu.set_nzc(result, value & 0x01 != 0);
            result
        })
    }
}
