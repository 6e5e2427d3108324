//! The instruction dispatch table.
//!
//! 256 opcode slots built once as immutable configuration data; unpopulated
//! slots are illegal opcodes. Each entry binds a mnemonic (diagnostic only),
//! an addressing mode, an operation routine, and the documented total cycle
//! count the stall accounting pads the instruction out to. A total must
//! cover the entry's intrinsic bus activity: the fixed 4-cycle LDA/STA and
//! 6-cycle INC timings apply everywhere except the indirect entries, which
//! need their full datasheet totals.

use super::addressing::AddrMode;
use super::{M6502, OpFn};

/// One populated slot of the dispatch table.
#[derive(Clone, Copy)]
pub(crate) struct OpcodeEntry {
    /// Mnemonic, used only for diagnostics.
    pub name: &'static str,
    pub mode: AddrMode,
    pub op: OpFn,
    /// Documented total cycle count for the whole instruction, opcode fetch
    /// included.
    pub cycles: u8,
}

/// Look up an opcode. None means an illegal opcode.
#[inline]
pub(crate) fn entry(opcode: u8) -> Option<&'static OpcodeEntry> {
    OPCODES[opcode as usize].as_ref()
}

macro_rules! op {
    ($name:literal, $mode:ident, $f:ident, $cycles:literal) => {
        Some(OpcodeEntry {
            name: $name,
            mode: AddrMode::$mode,
            op: M6502::$f,
            cycles: $cycles,
        })
    };
}

#[rustfmt::skip]
static OPCODES: [Option<OpcodeEntry>; 256] = {
    let mut t: [Option<OpcodeEntry>; 256] = [None; 256];

    // Loads
    t[0xA9] = op!("LDA", Immediate,       op_lda, 4);
    t[0xA5] = op!("LDA", ZeroPage,        op_lda, 4);
    t[0xB5] = op!("LDA", ZeroPageX,       op_lda, 4);
    t[0xAD] = op!("LDA", Absolute,        op_lda, 4);
    t[0xBD] = op!("LDA", AbsoluteX,       op_lda, 4);
    t[0xB9] = op!("LDA", AbsoluteY,       op_lda, 4);
    t[0xA1] = op!("LDA", IndexedIndirect, op_lda, 6);
    t[0xB1] = op!("LDA", IndirectIndexed, op_lda, 5);
    t[0xA2] = op!("LDX", Immediate,       op_ldx, 2);
    t[0xA6] = op!("LDX", ZeroPage,        op_ldx, 3);
    t[0xB6] = op!("LDX", ZeroPageY,       op_ldx, 4);
    t[0xAE] = op!("LDX", Absolute,        op_ldx, 4);
    t[0xBE] = op!("LDX", AbsoluteY,       op_ldx, 4);
    t[0xA0] = op!("LDY", Immediate,       op_ldy, 2);
    t[0xA4] = op!("LDY", ZeroPage,        op_ldy, 3);
    t[0xB4] = op!("LDY", ZeroPageX,       op_ldy, 4);
    t[0xAC] = op!("LDY", Absolute,        op_ldy, 4);
    t[0xBC] = op!("LDY", AbsoluteX,       op_ldy, 4);

    // Stores
    t[0x85] = op!("STA", ZeroPage,        op_sta, 4);
    t[0x95] = op!("STA", ZeroPageX,       op_sta, 4);
    t[0x8D] = op!("STA", Absolute,        op_sta, 4);
    t[0x9D] = op!("STA", AbsoluteX,       op_sta, 4);
    t[0x99] = op!("STA", AbsoluteY,       op_sta, 4);
    t[0x81] = op!("STA", IndexedIndirect, op_sta, 6);
    t[0x91] = op!("STA", IndirectIndexed, op_sta, 6);
    t[0x86] = op!("STX", ZeroPage,        op_stx, 3);
    t[0x96] = op!("STX", ZeroPageY,       op_stx, 4);
    t[0x8E] = op!("STX", Absolute,        op_stx, 4);
    t[0x84] = op!("STY", ZeroPage,        op_sty, 3);
    t[0x94] = op!("STY", ZeroPageX,       op_sty, 4);
    t[0x8C] = op!("STY", Absolute,        op_sty, 4);

    // Arithmetic
    t[0x69] = op!("ADC", Immediate,       op_adc, 2);
    t[0x65] = op!("ADC", ZeroPage,        op_adc, 3);
    t[0x75] = op!("ADC", ZeroPageX,       op_adc, 4);
    t[0x6D] = op!("ADC", Absolute,        op_adc, 4);
    t[0x7D] = op!("ADC", AbsoluteX,       op_adc, 4);
    t[0x79] = op!("ADC", AbsoluteY,       op_adc, 4);
    t[0x61] = op!("ADC", IndexedIndirect, op_adc, 6);
    t[0x71] = op!("ADC", IndirectIndexed, op_adc, 5);
    t[0xE9] = op!("SBC", Immediate,       op_sbc, 2);
    t[0xE5] = op!("SBC", ZeroPage,        op_sbc, 3);
    t[0xF5] = op!("SBC", ZeroPageX,       op_sbc, 4);
    t[0xED] = op!("SBC", Absolute,        op_sbc, 4);
    t[0xFD] = op!("SBC", AbsoluteX,       op_sbc, 4);
    t[0xF9] = op!("SBC", AbsoluteY,       op_sbc, 4);
    t[0xE1] = op!("SBC", IndexedIndirect, op_sbc, 6);
    t[0xF1] = op!("SBC", IndirectIndexed, op_sbc, 5);

    // Compares
    t[0xC9] = op!("CMP", Immediate,       op_cmp, 2);
    t[0xC5] = op!("CMP", ZeroPage,        op_cmp, 3);
    t[0xD5] = op!("CMP", ZeroPageX,       op_cmp, 4);
    t[0xCD] = op!("CMP", Absolute,        op_cmp, 4);
    t[0xDD] = op!("CMP", AbsoluteX,       op_cmp, 4);
    t[0xD9] = op!("CMP", AbsoluteY,       op_cmp, 4);
    t[0xC1] = op!("CMP", IndexedIndirect, op_cmp, 6);
    t[0xD1] = op!("CMP", IndirectIndexed, op_cmp, 5);
    t[0xE0] = op!("CPX", Immediate,       op_cpx, 2);
    t[0xE4] = op!("CPX", ZeroPage,        op_cpx, 3);
    t[0xEC] = op!("CPX", Absolute,        op_cpx, 4);
    t[0xC0] = op!("CPY", Immediate,       op_cpy, 2);
    t[0xC4] = op!("CPY", ZeroPage,        op_cpy, 3);
    t[0xCC] = op!("CPY", Absolute,        op_cpy, 4);

    // Logic
    t[0x29] = op!("AND", Immediate,       op_and, 2);
    t[0x25] = op!("AND", ZeroPage,        op_and, 3);
    t[0x35] = op!("AND", ZeroPageX,       op_and, 4);
    t[0x2D] = op!("AND", Absolute,        op_and, 4);
    t[0x3D] = op!("AND", AbsoluteX,       op_and, 4);
    t[0x39] = op!("AND", AbsoluteY,       op_and, 4);
    t[0x21] = op!("AND", IndexedIndirect, op_and, 6);
    t[0x31] = op!("AND", IndirectIndexed, op_and, 5);
    t[0x09] = op!("ORA", Immediate,       op_ora, 2);
    t[0x05] = op!("ORA", ZeroPage,        op_ora, 3);
    t[0x15] = op!("ORA", ZeroPageX,       op_ora, 4);
    t[0x0D] = op!("ORA", Absolute,        op_ora, 4);
    t[0x1D] = op!("ORA", AbsoluteX,       op_ora, 4);
    t[0x19] = op!("ORA", AbsoluteY,       op_ora, 4);
    t[0x01] = op!("ORA", IndexedIndirect, op_ora, 6);
    t[0x11] = op!("ORA", IndirectIndexed, op_ora, 5);
    t[0x49] = op!("EOR", Immediate,       op_eor, 2);
    t[0x45] = op!("EOR", ZeroPage,        op_eor, 3);
    t[0x55] = op!("EOR", ZeroPageX,       op_eor, 4);
    t[0x4D] = op!("EOR", Absolute,        op_eor, 4);
    t[0x5D] = op!("EOR", AbsoluteX,       op_eor, 4);
    t[0x59] = op!("EOR", AbsoluteY,       op_eor, 4);
    t[0x41] = op!("EOR", IndexedIndirect, op_eor, 6);
    t[0x51] = op!("EOR", IndirectIndexed, op_eor, 5);
    t[0x24] = op!("BIT", ZeroPage,        op_bit, 3);
    t[0x2C] = op!("BIT", Absolute,        op_bit, 4);

    // Shifts and rotates
    t[0x0A] = op!("ASL", Accumulator,     op_asl, 2);
    t[0x06] = op!("ASL", ZeroPage,        op_asl, 5);
    t[0x16] = op!("ASL", ZeroPageX,       op_asl, 6);
    t[0x0E] = op!("ASL", Absolute,        op_asl, 6);
    t[0x1E] = op!("ASL", AbsoluteX,       op_asl, 7);
    t[0x4A] = op!("LSR", Accumulator,     op_lsr, 2);
    t[0x46] = op!("LSR", ZeroPage,        op_lsr, 5);
    t[0x56] = op!("LSR", ZeroPageX,       op_lsr, 6);
    t[0x4E] = op!("LSR", Absolute,        op_lsr, 6);
    t[0x5E] = op!("LSR", AbsoluteX,       op_lsr, 7);
    t[0x2A] = op!("ROL", Accumulator,     op_rol, 2);
    t[0x26] = op!("ROL", ZeroPage,        op_rol, 5);
    t[0x36] = op!("ROL", ZeroPageX,       op_rol, 6);
    t[0x2E] = op!("ROL", Absolute,        op_rol, 6);
    t[0x3E] = op!("ROL", AbsoluteX,       op_rol, 7);
    t[0x6A] = op!("ROR", Accumulator,     op_ror, 2);
    t[0x66] = op!("ROR", ZeroPage,        op_ror, 5);
    t[0x76] = op!("ROR", ZeroPageX,       op_ror, 6);
    t[0x6E] = op!("ROR", Absolute,        op_ror, 6);
    t[0x7E] = op!("ROR", AbsoluteX,       op_ror, 7);

    // Increments and decrements
    t[0xE6] = op!("INC", ZeroPage,        op_inc, 6);
    t[0xF6] = op!("INC", ZeroPageX,       op_inc, 6);
    t[0xEE] = op!("INC", Absolute,        op_inc, 6);
    t[0xFE] = op!("INC", AbsoluteX,       op_inc, 6);
    t[0xC6] = op!("DEC", ZeroPage,        op_dec, 5);
    t[0xD6] = op!("DEC", ZeroPageX,       op_dec, 6);
    t[0xCE] = op!("DEC", Absolute,        op_dec, 6);
    t[0xDE] = op!("DEC", AbsoluteX,       op_dec, 7);
    t[0xE8] = op!("INX", Implied,         op_inx, 2);
    t[0xC8] = op!("INY", Implied,         op_iny, 2);
    t[0xCA] = op!("DEX", Implied,         op_dex, 2);
    t[0x88] = op!("DEY", Implied,         op_dey, 2);

    // Branches
    t[0x90] = op!("BCC", Relative,        op_bcc, 2);
    t[0xB0] = op!("BCS", Relative,        op_bcs, 2);
    t[0xF0] = op!("BEQ", Relative,        op_beq, 2);
    t[0xD0] = op!("BNE", Relative,        op_bne, 2);
    t[0x30] = op!("BMI", Relative,        op_bmi, 2);
    t[0x10] = op!("BPL", Relative,        op_bpl, 2);
    t[0x50] = op!("BVC", Relative,        op_bvc, 2);
    t[0x70] = op!("BVS", Relative,        op_bvs, 2);

    // Jumps and subroutines
    t[0x4C] = op!("JMP", Absolute,         op_jmp, 3);
    t[0x6C] = op!("JMP", AbsoluteIndirect, op_jmp, 5);
    t[0x20] = op!("JSR", Absolute,         op_jsr, 6);
    t[0x60] = op!("RTS", Implied,          op_rts, 6);
    t[0x40] = op!("RTI", Implied,          op_rti, 6);

    // Stack
    t[0x48] = op!("PHA", Implied,         op_pha, 3);
    t[0x08] = op!("PHP", Implied,         op_php, 3);
    t[0x68] = op!("PLA", Implied,         op_pla, 4);
    t[0x28] = op!("PLP", Implied,         op_plp, 4);

    // Transfers
    t[0xAA] = op!("TAX", Implied,         op_tax, 2);
    t[0xA8] = op!("TAY", Implied,         op_tay, 2);
    t[0x8A] = op!("TXA", Implied,         op_txa, 2);
    t[0x98] = op!("TYA", Implied,         op_tya, 2);
    t[0xBA] = op!("TSX", Implied,         op_tsx, 2);
    t[0x9A] = op!("TXS", Implied,         op_txs, 2);

    // Flag operations
    t[0x18] = op!("CLC", Implied,         op_clc, 2);
    t[0x38] = op!("SEC", Implied,         op_sec, 2);
    t[0x58] = op!("CLI", Implied,         op_cli, 2);
    t[0x78] = op!("SEI", Implied,         op_sei, 2);
    t[0xB8] = op!("CLV", Implied,         op_clv, 2);
    t[0xD8] = op!("CLD", Implied,         op_cld, 2);
    t[0xF8] = op!("SED", Implied,         op_sed, 2);

    // Control
    t[0xEA] = op!("NOP", Implied,         op_nop, 2);
    t[0x00] = op!("BRK", Implied,         op_brk, 1);

    t
};
