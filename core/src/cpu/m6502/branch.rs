use crate::core::Bus;

use super::{M6502, Status};

impl M6502 {
    /// Take the branch to the relative target when `cond` holds: one extra
    /// stall for the taken branch, one more when the destination lands on a
    /// different page than the instruction that follows.
    fn branch_step(&mut self, cond: bool) -> bool {
        if cond {
            let dest = self.target_address();
            self.extra_stalls += 1;
            if (dest ^ self.pc) & 0xFF00 != 0 {
                self.extra_stalls += 1;
            }
            self.pc = dest;
        }
        true
    }

    /// BCC - branch if carry clear.
    pub(crate) fn op_bcc(&mut self, _bus: &mut Bus) -> bool {
        let cond = !self.p.contains(Status::CARRY);
        self.branch_step(cond)
    }

    /// BCS - branch if carry set.
    pub(crate) fn op_bcs(&mut self, _bus: &mut Bus) -> bool {
        let cond = self.p.contains(Status::CARRY);
        self.branch_step(cond)
    }

    /// BEQ - branch if zero set.
    pub(crate) fn op_beq(&mut self, _bus: &mut Bus) -> bool {
        let cond = self.p.contains(Status::ZERO);
        self.branch_step(cond)
    }

    /// BNE - branch if zero clear.
    pub(crate) fn op_bne(&mut self, _bus: &mut Bus) -> bool {
        let cond = !self.p.contains(Status::ZERO);
        self.branch_step(cond)
    }

    /// BMI - branch if negative set.
    pub(crate) fn op_bmi(&mut self, _bus: &mut Bus) -> bool {
        let cond = self.p.contains(Status::NEGATIVE);
        self.branch_step(cond)
    }

    /// BPL - branch if negative clear.
    pub(crate) fn op_bpl(&mut self, _bus: &mut Bus) -> bool {
        let cond = !self.p.contains(Status::NEGATIVE);
        self.branch_step(cond)
    }

    /// BVC - branch if overflow clear.
    pub(crate) fn op_bvc(&mut self, _bus: &mut Bus) -> bool {
        let cond = !self.p.contains(Status::OVERFLOW);
        self.branch_step(cond)
    }

    /// BVS - branch if overflow set.
    pub(crate) fn op_bvs(&mut self, _bus: &mut Bus) -> bool {
        let cond = self.p.contains(Status::OVERFLOW);
        self.branch_step(cond)
    }

    /// JMP - load PC with the effective address.
    pub(crate) fn op_jmp(&mut self, _bus: &mut Bus) -> bool {
        self.pc = self.target_address();
        true
    }
}
