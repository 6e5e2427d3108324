use crate::core::Bus;

use super::M6502;

impl M6502 {
    // ---- Loads ----

    /// LDA - load accumulator. N, Z from the loaded value.
    pub(crate) fn op_lda(&mut self, bus: &mut Bus) -> bool {
        self.read_step(bus, |cpu, value| {
            cpu.a = value;
            cpu.set_nz(value);
        })
    }

    /// LDX - load X register. N, Z affected.
    pub(crate) fn op_ldx(&mut self, bus: &mut Bus) -> bool {
        self.read_step(bus, |cpu, value| {
            cpu.x = value;
            cpu.set_nz(value);
        })
    }

    /// LDY - load Y register. N, Z affected.
    pub(crate) fn op_ldy(&mut self, bus: &mut Bus) -> bool {
        self.read_step(bus, |cpu, value| {
            cpu.y = value;
            cpu.set_nz(value);
        })
    }

    // ---- Stores (no flags affected) ----

    /// STA - store accumulator.
    pub(crate) fn op_sta(&mut self, bus: &mut Bus) -> bool {
        let value = self.a;
        self.store_step(bus, value)
    }

    /// STX - store X register.
    pub(crate) fn op_stx(&mut self, bus: &mut Bus) -> bool {
        let value = self.x;
        self.store_step(bus, value)
    }

    /// STY - store Y register.
    pub(crate) fn op_sty(&mut self, bus: &mut Bus) -> bool {
        let value = self.y;
        self.store_step(bus, value)
    }
}
