use crate::core::Bus;

use super::{M6502, Status};

impl M6502 {
    /// CLC - clear carry.
    pub(crate) fn op_clc(&mut self, _bus: &mut Bus) -> bool {
        self.p.remove(Status::CARRY);
        true
    }

    /// SEC - set carry.
    pub(crate) fn op_sec(&mut self, _bus: &mut Bus) -> bool {
        self.p.insert(Status::CARRY);
        true
    }

    /// CLI - clear interrupt disable.
    pub(crate) fn op_cli(&mut self, _bus: &mut Bus) -> bool {
        self.p.remove(Status::IRQ_DISABLE);
        true
    }

    /// SEI - set interrupt disable.
    pub(crate) fn op_sei(&mut self, _bus: &mut Bus) -> bool {
        self.p.insert(Status::IRQ_DISABLE);
        true
    }

    /// CLV - clear overflow.
    pub(crate) fn op_clv(&mut self, _bus: &mut Bus) -> bool {
        self.p.remove(Status::OVERFLOW);
        true
    }

    /// CLD - clear decimal mode.
    pub(crate) fn op_cld(&mut self, _bus: &mut Bus) -> bool {
        self.p.remove(Status::DECIMAL);
        true
    }

    /// SED - set decimal mode. The flag is tracked even though BCD
    /// arithmetic itself is not implemented.
    pub(crate) fn op_sed(&mut self, _bus: &mut Bus) -> bool {
        self.p.insert(Status::DECIMAL);
        true
    }

    /// NOP - no effect.
    pub(crate) fn op_nop(&mut self, _bus: &mut Bus) -> bool {
        true
    }

    /// BRK - enter the terminal halted state. Every subsequent tick is a
    /// no-op until an explicit reset.
    pub(crate) fn op_brk(&mut self, _bus: &mut Bus) -> bool {
        self.halted = true;
        true
    }
}
