use crate::core::Bus;

use super::M6502;

impl M6502 {
    /// TAX - transfer A to X. N, Z affected.
    pub(crate) fn op_tax(&mut self, _bus: &mut Bus) -> bool {
        self.x = self.a;
        let x = self.x;
        self.set_nz(x);
        true
    }

    /// TAY - transfer A to Y. N, Z affected.
    pub(crate) fn op_tay(&mut self, _bus: &mut Bus) -> bool {
        self.y = self.a;
        let y = self.y;
        self.set_nz(y);
        true
    }

    /// TXA - transfer X to A. N, Z affected.
    pub(crate) fn op_txa(&mut self, _bus: &mut Bus) -> bool {
        self.a = self.x;
        let a = self.a;
        self.set_nz(a);
        true
    }

    /// TYA - transfer Y to A. N, Z affected.
    pub(crate) fn op_tya(&mut self, _bus: &mut Bus) -> bool {
        self.a = self.y;
        let a = self.a;
        self.set_nz(a);
        true
    }

    /// TSX - transfer SP to X. N, Z affected.
    pub(crate) fn op_tsx(&mut self, _bus: &mut Bus) -> bool {
        self.x = self.sp;
        let x = self.x;
        self.set_nz(x);
        true
    }

    /// TXS - transfer X to SP. No flags affected.
    pub(crate) fn op_txs(&mut self, _bus: &mut Bus) -> bool {
        self.sp = self.x;
        true
    }
}
