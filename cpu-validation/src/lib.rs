use quartz_core::core::{Bus, BusDir, Component};
use serde::{Deserialize, Serialize};

// --- TracingRam: windowed memory with per-tick transaction recording ---

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum BusOp {
    Read,
    Write,
}

/// One serviced bus transaction, stamped with the tick it was serviced on.
#[derive(Clone, Debug, PartialEq)]
pub struct BusCycle {
    pub tick: u64,
    pub addr: u16,
    pub value: u8,
    pub op: BusOp,
}

/// A windowed RAM that records every transaction it services. Used to check
/// that instructions produce exactly their documented bus activity, with the
/// one-tick request/response latency intact.
pub struct TracingRam {
    pub memory: Vec<u8>,
    start: u16,
    tick: u64,
    pub cycles: Vec<BusCycle>,
}

impl TracingRam {
    pub fn new(size: usize, start: u16) -> Self {
        Self {
            memory: vec![0; size],
            start,
            tick: 0,
            cycles: Vec::new(),
        }
    }

    pub fn load(&mut self, addr: u16, data: &[u8]) {
        for (i, &byte) in data.iter().enumerate() {
            let off = addr.wrapping_add(i as u16).wrapping_sub(self.start) as usize;
            if off < self.memory.len() {
                self.memory[off] = byte;
            }
        }
    }

    pub fn peek(&self, addr: u16) -> u8 {
        let off = addr.wrapping_sub(self.start) as usize;
        if off < self.memory.len() {
            self.memory[off]
        } else {
            0
        }
    }

    pub fn clear_cycles(&mut self) {
        self.cycles.clear();
    }

    /// Ticks this device has been stepped for.
    pub fn tick(&self) -> u64 {
        self.tick
    }
}

impl Component for TracingRam {
    fn cycle(&mut self, bus: &mut Bus) -> bool {
        self.tick += 1;
        let off = bus.address.wrapping_sub(self.start) as usize;
        if bus.address >= self.start && off < self.memory.len() {
            match bus.dir {
                BusDir::Read => {
                    bus.value = self.memory[off];
                    self.cycles.push(BusCycle {
                        tick: self.tick,
                        addr: bus.address,
                        value: bus.value,
                        op: BusOp::Read,
                    });
                }
                BusDir::Write => {
                    self.memory[off] = bus.value;
                    self.cycles.push(BusCycle {
                        tick: self.tick,
                        addr: bus.address,
                        value: bus.value,
                        op: BusOp::Write,
                    });
                }
            }
        }
        false
    }
}

// --- JSON test vector types (SingleStepTests-style format) ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub initial: CpuState,
    #[serde(rename = "final")]
    pub final_state: CpuState,
    pub cycles: Vec<(u16, u8, String)>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CpuState {
    pub pc: u16,
    pub s: u8,
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub p: u8,
    pub ram: Vec<(u16, u8)>,
}
