//! Generate randomized single-instruction test vectors for the 6502 core.
//!
//! For each official opcode (the halt opcode aside), NUM_TESTS cases are run
//! on a freshly reset system with randomized registers and memory, recording
//! the serviced bus transactions and the final state in a
//! SingleStepTests-style JSON layout.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use quartz_core::core::{Bus, Component};
use quartz_core::cpu::m6502::{M6502, Status};
use quartz_cpu_validation::{BusOp, CpuState, TestCase, TracingRam};
use rand::Rng;

const NUM_TESTS: usize = 200;

/// Upper bound on ticks per instruction; the longest legal instruction is
/// well under this.
const MAX_INSTRUCTION_TICKS: usize = 16;

fn snapshot_cpu(cpu: &M6502) -> CpuState {
    CpuState {
        pc: cpu.pc,
        s: cpu.sp,
        a: cpu.a,
        x: cpu.x,
        y: cpu.y,
        p: cpu.p.bits(),
        ram: Vec::new(),
    }
}

fn build_ram(memory: &[u8], addresses: &BTreeSet<u16>) -> Vec<(u16, u8)> {
    addresses
        .iter()
        .map(|&addr| (addr, memory[addr as usize]))
        .collect()
}

/// True for the official opcodes that retire normally (the halt opcode 0x00
/// is generated separately since it never reaches an instruction boundary).
#[rustfmt::skip]
fn official(opcode: u8) -> bool {
    matches!(opcode,
        0x01 | 0x05 | 0x06 | 0x08 | 0x09 | 0x0A | 0x0D | 0x0E | 0x10 | 0x11 | 0x15 | 0x16
      | 0x18 | 0x19 | 0x1D | 0x1E
      | 0x20 | 0x21 | 0x24 | 0x25 | 0x26 | 0x28 | 0x29 | 0x2A | 0x2C | 0x2D | 0x2E | 0x30
      | 0x31 | 0x35 | 0x36 | 0x38 | 0x39 | 0x3D | 0x3E
      | 0x40 | 0x41 | 0x45 | 0x46 | 0x48 | 0x49 | 0x4A | 0x4C | 0x4D | 0x4E | 0x50 | 0x51
      | 0x55 | 0x56 | 0x58 | 0x59 | 0x5D | 0x5E
      | 0x60 | 0x61 | 0x65 | 0x66 | 0x68 | 0x69 | 0x6A | 0x6C | 0x6D | 0x6E | 0x70 | 0x71
      | 0x75 | 0x76 | 0x78 | 0x79 | 0x7D | 0x7E
      | 0x81 | 0x84 | 0x85 | 0x86 | 0x88 | 0x8A | 0x8C | 0x8D | 0x8E | 0x90 | 0x91 | 0x94
      | 0x95 | 0x96 | 0x98 | 0x99 | 0x9A | 0x9D
      | 0xA0 | 0xA1 | 0xA2 | 0xA4 | 0xA5 | 0xA6 | 0xA8 | 0xA9 | 0xAA | 0xAC | 0xAD | 0xAE
      | 0xB0 | 0xB1 | 0xB4 | 0xB5 | 0xB6 | 0xB8 | 0xB9 | 0xBA | 0xBC | 0xBD | 0xBE
      | 0xC0 | 0xC1 | 0xC4 | 0xC5 | 0xC6 | 0xC8 | 0xC9 | 0xCA | 0xCC | 0xCD | 0xCE | 0xD0
      | 0xD1 | 0xD5 | 0xD6 | 0xD8 | 0xD9 | 0xDD | 0xDE
      | 0xE0 | 0xE1 | 0xE4 | 0xE5 | 0xE6 | 0xE8 | 0xE9 | 0xEA | 0xEC | 0xED | 0xEE | 0xF0
      | 0xF1 | 0xF5 | 0xF6 | 0xF8 | 0xF9 | 0xFD | 0xFE
    )
}

/// Generate NUM_TESTS randomized test vectors for a single opcode.
fn generate_opcode(rng: &mut impl Rng, opcode: u8) -> Vec<TestCase> {
    let mut tests = Vec::with_capacity(NUM_TESTS);

    for i in 0..NUM_TESTS {
        let mut bus = Bus::new();
        let mut ram = TracingRam::new(0x10000, 0);
        rng.fill(&mut ram.memory[..]);

        // Keep the opcode clear of the vector page so the reset reads are
        // not disturbed by the instruction's own operand bytes.
        let pc: u16 = rng.gen_range(0x0200..0xFF00);
        ram.load(0xFFFC, &[pc as u8, (pc >> 8) as u8]);
        ram.memory[pc as usize] = opcode;

        // Run the reset sequence to its boundary; this leaves the opcode
        // fetch asserted on the bus.
        let mut cpu = M6502::new(&mut bus);
        loop {
            ram.cycle(&mut bus);
            if cpu.cycle(&mut bus) {
                break;
            }
        }

        // Randomize everything the reset pinned down.
        cpu.a = rng.r#gen();
        cpu.x = rng.r#gen();
        cpu.y = rng.r#gen();
        cpu.sp = rng.r#gen();
        cpu.p = Status::from_bits_retain(rng.r#gen());

        let pre_memory = ram.memory.clone();
        let mut initial = snapshot_cpu(&cpu);
        initial.pc = pc;

        ram.clear_cycles();
        let mut ticks = 0;
        loop {
            ram.cycle(&mut bus);
            let done = cpu.cycle(&mut bus);
            ticks += 1;
            if done || ticks >= MAX_INSTRUCTION_TICKS {
                break;
            }
        }

        let touched: BTreeSet<u16> = ram.cycles.iter().map(|c| c.addr).collect();
        initial.ram = build_ram(&pre_memory, &touched);

        let mut final_state = snapshot_cpu(&cpu);
        // Retirement has already asserted the next fetch and advanced PC
        // past it; report the next opcode address.
        final_state.pc = cpu.pc.wrapping_sub(1);
        final_state.ram = build_ram(&ram.memory, &touched);

        let cycles = ram
            .cycles
            .iter()
            .map(|c| {
                let op = match c.op {
                    BusOp::Read => "read",
                    BusOp::Write => "write",
                };
                (c.addr, c.value, op.to_string())
            })
            .collect();

        tests.push(TestCase {
            name: format!("{opcode:02x} {i}"),
            initial,
            final_state,
            cycles,
        });
    }

    tests
}

fn main() {
    let out_dir = Path::new("test-vectors");
    fs::create_dir_all(out_dir).expect("create output directory");

    let mut rng = rand::thread_rng();
    let mut written = 0;

    for opcode in 0x00..=0xFFu8 {
        if !official(opcode) {
            continue;
        }
        let tests = generate_opcode(&mut rng, opcode);
        let path = out_dir.join(format!("{opcode:02x}.json"));
        let json = serde_json::to_string(&tests).expect("serialize test cases");
        fs::write(&path, json).expect("write test vector file");
        written += 1;
    }

    println!("wrote {written} vector files to {}", out_dir.display());
}
