use crate::core::Bus;

use super::M6502;

impl M6502 {
    /// INC - increment memory modulo 256. N, Z from the result.
    pub(crate) fn op_inc(&mut self, bus: &mut Bus) -> bool {
        self.modify_step(bus, |cpu, value| {
            let result = value.wrapping_add(1);
            cpu.set_nz(result);
            result
        })
    }

    /// DEC - decrement memory modulo 256. N, Z from the result.
    pub(crate) fn op_dec(&mut self, bus: &mut Bus) -> bool {
        self.modify_step(bus, |cpu, value| {
            let result = value.wrapping_sub(1);
            cpu.set_nz(result);
            result
        })
    }

    /// INX - increment X register.
    pub(crate) fn op_inx(&mut self, _bus: &mut Bus) -> bool {
        self.x = self.x.wrapping_add(1);
        let x = self.x;
        self.set_nz(x);
        true
    }

    /// INY - increment Y register.
    pub(crate) fn op_iny(&mut self, _bus: &mut Bus) -> bool {
        self.y = self.y.wrapping_add(1);
        let y = self.y;
        self.set_nz(y);
        true
    }

    /// DEX - decrement X register.
    pub(crate) fn op_dex(&mut self, _bus: &mut Bus) -> bool {
        self.x = self.x.wrapping_sub(1);
        let x = self.x;
        self.set_nz(x);
        true
    }

    /// DEY - decrement Y register.
    pub(crate) fn op_dey(&mut self, _bus: &mut Bus) -> bool {
        self.y = self.y.wrapping_sub(1);
        let y = self.y;
        self.set_nz(y);
        true
    }
}
