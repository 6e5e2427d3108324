use crate::core::Bus;

use super::{M6502, Status};

impl M6502 {
    // ---- ALU helpers ----

    /// Perform ADC: A = A + M + C. Sets N, Z, C, V.
    ///
    /// Binary arithmetic only; the Decimal flag is tracked but BCD mode is
    /// not implemented, matching the 2A03 variant of the chip.
    #[inline]
    pub(crate) fn perform_adc(&mut self, operand: u8) {
        let a = self.a;
        let carry = u8::from(self.p.contains(Status::CARRY));
        let sum = u16::from(a) + u16::from(operand) + u16::from(carry);
        let result = sum as u8;
        self.p.set(Status::CARRY, sum > 0xFF);
        self.p
            .set(Status::OVERFLOW, (!(a ^ operand) & (a ^ result)) & 0x80 != 0);
        self.a = result;
        self.set_nz(result);
    }

    /// Perform SBC: A = A - M - !C, computed as A + ~M + C. Sets N, Z, C, V.
    #[inline]
    pub(crate) fn perform_sbc(&mut self, operand: u8) {
        self.perform_adc(operand ^ 0xFF);
    }

    /// Perform compare (CMP/CPX/CPY). Sets N, Z, C; no register changes.
    #[inline]
    pub(crate) fn perform_compare(&mut self, register: u8, operand: u8) {
        let result = register.wrapping_sub(operand);
        self.p.set(Status::CARRY, register >= operand);
        self.set_nz(result);
    }

    // ---- Operations ----

    /// ADC - add with carry.
    pub(crate) fn op_adc(&mut self, bus: &mut Bus) -> bool {
        self.read_step(bus, |cpu, value| cpu.perform_adc(value))
    }

    /// SBC - subtract with carry.
    pub(crate) fn op_sbc(&mut self, bus: &mut Bus) -> bool {
        self.read_step(bus, |cpu, value| cpu.perform_sbc(value))
    }

    /// CMP - compare with accumulator.
    pub(crate) fn op_cmp(&mut self, bus: &mut Bus) -> bool {
        self.read_step(bus, |cpu, value| {
            let a = cpu.a;
            cpu.perform_compare(a, value);
        })
    }

    /// CPX - compare with X register.
    pub(crate) fn op_cpx(&mut self, bus: &mut Bus) -> bool {
        self.read_step(bus, |cpu, value| {
            let x = cpu.x;
            cpu.perform_compare(x, value);
        })
    }

    /// CPY - compare with Y register.
    pub(crate) fn op_cpy(&mut self, bus: &mut Bus) -> bool {
        self.read_step(bus, |cpu, value| {
            let y = cpu.y;
            cpu.perform_compare(y, value);
        })
    }
}
