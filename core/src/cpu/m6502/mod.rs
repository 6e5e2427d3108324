mod addressing;
mod alu;
mod binary;
mod branch;
mod load_store;
mod misc;
mod shift;
mod stack;
mod table;
mod transfer;
mod unary;

use bitflags::bitflags;
use log::{trace, warn};

use crate::core::{Bus, Component};
use crate::cpu::{
    Cpu,
    state::{CpuStateTrait, M6502State},
};

use addressing::Target;
use table::OpcodeEntry;

/// Low byte of the reset vector; the high byte lives one address above.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Stall cycles consumed by the reset sequence after the two vector reads.
pub const RESET_STALL_CYCLES: u8 = 8;

bitflags! {
    /// Processor status register.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Status: u8 {
        const CARRY       = 0x01;
        const ZERO        = 0x02;
        const IRQ_DISABLE = 0x04;
        const DECIMAL     = 0x08;
        const BREAK       = 0x10;
        const UNUSED      = 0x20; // reads as 1 on real silicon
        const OVERFLOW    = 0x40;
        const NEGATIVE    = 0x80;
    }
}

/// Signature shared by every operation routine in the dispatch table.
///
/// The routine is called once per tick while its instruction is in the
/// operation phase; it returns true when its semantic effect is complete and
/// the stall accounting may run.
pub(crate) type OpFn = fn(&mut M6502, &mut Bus) -> bool;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ExecState {
    /// No instruction in flight; an opcode fetch is outstanding or ready.
    Fetch,
    /// A bound micro-operation sequence is in flight.
    Execute,
    /// The dedicated reset microsequence (vector reads + fixed stall).
    Reset(u8),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Addressing,
    Operation,
    Stall,
}

/// The MOS 6502 CPU.
///
/// Each `cycle()` advances exactly one clock tick. The CPU talks to memory
/// only through the shared bus record: a read asserted at the end of tick N
/// is serviced by the addressed device at tick N+1 (devices step before the
/// CPU) and consumed when the CPU's own tick N+1 step resumes. Instructions
/// are sequenced as an explicit resumable state machine with one suspension
/// point per bus access or stall cycle, so the tick count of every
/// instruction matches its documented hardware timing.
pub struct M6502 {
    // Registers. The field widths are the write-side masking: PC is 16 bits,
    // everything else 8.
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub p: Status,

    state: ExecState,
    halted: bool,

    // Bus protocol: `read_pending` marks a read asserted on the prior tick;
    // `value_read` holds at most one unconsumed latched byte.
    read_pending: bool,
    value_read: Option<u8>,

    // In-flight instruction.
    entry: Option<&'static OpcodeEntry>,
    phase: Phase,
    /// Suspension points elapsed for the in-flight instruction.
    step: u8,
    mode_step: u8,
    op_step: u8,
    stalls_left: u8,
    extra_stalls: u8,
    target: Target,

    // Scratch bytes for multi-cycle address computation and stack pulls.
    lo: u8,
    hi: u8,
    ptr: u8,
}

impl M6502 {
    /// Create a CPU wired to `bus` and enter the reset sequence, asserting
    /// the first vector read on the bus immediately.
    pub fn new(bus: &mut Bus) -> Self {
        let mut cpu = Self {
            a: 0,
            x: 0,
            y: 0,
            sp: 0xFD,
            pc: 0,
            p: Status::UNUSED | Status::IRQ_DISABLE,
            state: ExecState::Reset(0),
            halted: false,
            read_pending: false,
            value_read: None,
            entry: None,
            phase: Phase::Addressing,
            step: 0,
            mode_step: 0,
            op_step: 0,
            stalls_left: 0,
            extra_stalls: 0,
            target: Target::Implied,
            lo: 0,
            hi: 0,
            ptr: 0,
        };
        cpu.begin_reset(bus);
        cpu
    }

    /// Query the terminal halted state.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    // ---- Bus protocol primitives ----

    /// Assert a read on the bus. The value arrives one tick later and is
    /// consumed with `take_value`.
    #[inline]
    pub(crate) fn request_read(&mut self, bus: &mut Bus, address: u16) {
        bus.request_read(address);
        self.read_pending = true;
    }

    /// Assert a write on the bus. The addressed device applies it on the
    /// next tick; no value comes back.
    #[inline]
    pub(crate) fn request_write(&mut self, bus: &mut Bus, address: u16, value: u8) {
        bus.request_write(address, value);
    }

    /// Consume the latched bus value. The protocol guarantees a value is
    /// present whenever a micro-step resumes after a read request.
    #[inline]
    pub(crate) fn take_value(&mut self) -> u8 {
        self.value_read.take().unwrap_or(0)
    }

    // ---- Fetch/execute state machine ----

    /// Assert the next opcode fetch. PC auto-increments on each fetch.
    fn request_fetch(&mut self, bus: &mut Bus) {
        self.request_read(bus, self.pc);
        self.pc = self.pc.wrapping_add(1);
    }

    /// Retire the in-flight sequence and immediately queue the next fetch.
    fn retire(&mut self, bus: &mut Bus) {
        self.state = ExecState::Fetch;
        self.entry = None;
        self.request_fetch(bus);
    }

    fn begin_instruction(&mut self, entry: &'static OpcodeEntry) {
        self.state = ExecState::Execute;
        self.entry = Some(entry);
        self.phase = Phase::Addressing;
        self.step = 0;
        self.mode_step = 0;
        self.op_step = 0;
        self.stalls_left = 0;
        self.extra_stalls = 0;
        self.target = Target::Implied;
    }

    /// Advance the in-flight sequence by one suspension point. Returns true
    /// if the instruction retired on this tick.
    fn advance(&mut self, bus: &mut Bus) -> bool {
        self.step += 1;
        loop {
            match self.phase {
                Phase::Addressing => match self.addressing_step(bus) {
                    None => return false,
                    Some(target) => {
                        // The addressing mode finished without consuming this
                        // tick; the operation starts within the same cycle.
                        self.target = target;
                        self.phase = Phase::Operation;
                        self.op_step = 0;
                    }
                },
                Phase::Operation => {
                    let Some(entry) = self.entry else { return false };
                    if !(entry.op)(self, bus) {
                        return false;
                    }
                    if self.halted {
                        // The halt opcode retires without a stall and without
                        // queueing another fetch.
                        return false;
                    }
                    return self.begin_stall(entry, bus);
                }
                Phase::Stall => {
                    self.stalls_left -= 1;
                    if self.stalls_left == 0 {
                        self.retire(bus);
                        return true;
                    }
                    return false;
                }
            }
        }
    }

    /// Pad the instruction out to its documented total cycle count.
    fn begin_stall(&mut self, entry: &'static OpcodeEntry, bus: &mut Bus) -> bool {
        let extra = self.extra_stalls;
        self.extra_stalls = 0;
        let remaining = i16::from(entry.cycles) - i16::from(self.step) + i16::from(extra);
        if remaining < 0 {
            warn!(
                "{} consumed {} cycles against a documented total of {}",
                entry.name, self.step, entry.cycles
            );
        }
        if remaining <= 0 {
            self.retire(bus);
            return true;
        }
        self.stalls_left = remaining as u8;
        self.phase = Phase::Stall;
        false
    }

    // ---- Reset sequence ----

    fn begin_reset(&mut self, bus: &mut Bus) {
        self.state = ExecState::Reset(0);
        self.reset_step(0, bus);
    }

    fn reset_step(&mut self, step: u8, bus: &mut Bus) -> bool {
        match step {
            0 => {
                self.request_read(bus, RESET_VECTOR);
                self.state = ExecState::Reset(1);
                false
            }
            1 => {
                self.lo = self.take_value();
                self.request_read(bus, RESET_VECTOR.wrapping_add(1));
                self.state = ExecState::Reset(2);
                false
            }
            2 => {
                let hi = self.take_value();
                self.pc = u16::from_le_bytes([self.lo, hi]);
                self.a = 0;
                self.x = 0;
                self.y = 0;
                self.stalls_left = RESET_STALL_CYCLES;
                self.state = ExecState::Reset(3);
                false
            }
            _ => {
                self.stalls_left -= 1;
                if self.stalls_left == 0 {
                    self.retire(bus);
                    return true;
                }
                false
            }
        }
    }

    // ---- Flag helpers ----

    /// Set N and Z from a result (loads, transfers, logical ops).
    #[inline]
    pub(crate) fn set_nz(&mut self, value: u8) {
        self.p.set(Status::NEGATIVE, value & 0x80 != 0);
        self.p.set(Status::ZERO, value == 0);
    }

    /// Set N, Z and C for shift/rotate results.
    #[inline]
    pub(crate) fn set_nzc(&mut self, value: u8, carry: bool) {
        self.set_nz(value);
        self.p.set(Status::CARRY, carry);
    }

    // ---- Operation micro-step helpers ----

    /// Effective address produced by the addressing phase.
    #[inline]
    pub(crate) fn target_address(&self) -> u16 {
        match self.target {
            Target::Address(addr) => addr,
            _ => 0,
        }
    }

    /// Read-class operation: fetch the byte at the effective address, then
    /// apply `f` to it.
    pub(crate) fn read_step(&mut self, bus: &mut Bus, f: impl FnOnce(&mut Self, u8)) -> bool {
        match self.op_step {
            0 => {
                let addr = self.target_address();
                self.request_read(bus, addr);
                self.op_step = 1;
                false
            }
            _ => {
                let value = self.take_value();
                f(self, value);
                true
            }
        }
    }

    /// Store-class operation: write `value` to the effective address.
    pub(crate) fn store_step(&mut self, bus: &mut Bus, value: u8) -> bool {
        match self.op_step {
            0 => {
                let addr = self.target_address();
                self.request_write(bus, addr, value);
                self.op_step = 1;
                false
            }
            _ => true,
        }
    }

    /// Read-modify-write operation. Acts directly on A for the accumulator
    /// addressing mode, otherwise reads, transforms and writes back.
    pub(crate) fn modify_step(&mut self, bus: &mut Bus, f: impl FnOnce(&mut Self, u8) -> u8) -> bool {
        if self.target == Target::Accumulator {
            let value = self.a;
            let result = f(self, value);
            self.a = result;
            return true;
        }
        match self.op_step {
            0 => {
                let addr = self.target_address();
                self.request_read(bus, addr);
                self.op_step = 1;
                false
            }
            1 => {
                let value = self.take_value();
                let result = f(self, value);
                let addr = self.target_address();
                self.request_write(bus, addr, result);
                self.op_step = 2;
                false
            }
            _ => true,
        }
    }

    /// Push a byte onto the page-1 stack.
    pub(crate) fn push(&mut self, bus: &mut Bus, value: u8) {
        self.request_write(bus, 0x0100 | u16::from(self.sp), value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Assert the read for the next byte pulled off the page-1 stack.
    pub(crate) fn pull_request(&mut self, bus: &mut Bus) {
        self.sp = self.sp.wrapping_add(1);
        self.request_read(bus, 0x0100 | u16::from(self.sp));
    }
}

impl Component for M6502 {
    fn cycle(&mut self, bus: &mut Bus) -> bool {
        if self.halted {
            return false;
        }

        // Resolve a read asserted on the prior tick: the addressed device
        // published its byte during this tick's device phase.
        if self.read_pending {
            self.value_read = Some(bus.value);
            self.read_pending = false;
        }

        match self.state {
            ExecState::Reset(step) => self.reset_step(step, bus),
            ExecState::Fetch => {
                let Some(opcode) = self.value_read.take() else {
                    return false;
                };
                match table::entry(opcode) {
                    None => {
                        warn!(
                            "illegal opcode {:#04X} at {:#06X}, discarding",
                            opcode,
                            self.pc.wrapping_sub(1)
                        );
                        self.request_fetch(bus);
                        false
                    }
                    Some(entry) => {
                        trace!("{:#06X} {}", self.pc.wrapping_sub(1), entry.name);
                        // Dispatch costs nothing on its own: the fetch cycle
                        // and the first execution cycle overlap.
                        self.begin_instruction(entry);
                        self.advance(bus)
                    }
                }
            }
            ExecState::Execute => self.advance(bus),
        }
    }
}

impl Cpu for M6502 {
    fn reset(&mut self, bus: &mut Bus) {
        self.halted = false;
        self.read_pending = false;
        self.value_read = None;
        self.entry = None;
        self.stalls_left = 0;
        self.extra_stalls = 0;
        self.begin_reset(bus);
    }

    fn is_halted(&self) -> bool {
        self.halted
    }
}

impl CpuStateTrait for M6502 {
    type Snapshot = M6502State;

    fn snapshot(&self) -> M6502State {
        M6502State {
            a: self.a,
            x: self.x,
            y: self.y,
            pc: self.pc,
            sp: self.sp,
            p: self.p.bits(),
        }
    }
}
