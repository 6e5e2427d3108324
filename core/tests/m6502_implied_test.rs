use quartz_core::cpu::m6502::Status;

mod common;
use common::{run_instruction, run_reset, system_with};

fn flag_set(p: u8, flag: Status) -> bool {
    p & flag.bits() != 0
}

// =============================================================================
// Transfers
// =============================================================================

#[test]
fn tax_and_tay_copy_a_with_flags() {
    let mut sys = system_with(0x0200, &[0xA9, 0x80, 0xAA, 0xA8]);
    run_reset(&mut sys);
    run_instruction(&mut sys);
    assert_eq!(run_instruction(&mut sys), 2);
    assert_eq!(sys.cpu_state().x, 0x80);
    assert!(flag_set(sys.cpu_state().p, Status::NEGATIVE));
    run_instruction(&mut sys);
    assert_eq!(sys.cpu_state().y, 0x80);
}

#[test]
fn txa_and_tya_copy_into_a() {
    let mut sys = system_with(0x0200, &[0xA2, 0x11, 0x8A, 0xA0, 0x22, 0x98]);
    run_reset(&mut sys);
    run_instruction(&mut sys);
    run_instruction(&mut sys);
    assert_eq!(sys.cpu_state().a, 0x11);
    run_instruction(&mut sys);
    run_instruction(&mut sys);
    assert_eq!(sys.cpu_state().a, 0x22);
}

#[test]
fn txs_does_not_touch_flags() {
    // LDX #$00 sets Z; TXS must not clear or set anything.
    let mut sys = system_with(0x0200, &[0xA2, 0x00, 0x9A]);
    run_reset(&mut sys);
    run_instruction(&mut sys);
    let before = sys.cpu_state().p;
    assert_eq!(run_instruction(&mut sys), 2);
    assert_eq!(sys.cpu_state().sp, 0x00);
    assert_eq!(sys.cpu_state().p, before);
}

#[test]
fn tsx_copies_sp_with_flags() {
    let mut sys = system_with(0x0200, &[0xBA]);
    run_reset(&mut sys);
    run_instruction(&mut sys);
    assert_eq!(sys.cpu_state().x, 0xFD);
    assert!(flag_set(sys.cpu_state().p, Status::NEGATIVE));
}

// =============================================================================
// Flag operations
// =============================================================================

#[test]
fn carry_set_and_clear() {
    let mut sys = system_with(0x0200, &[0x38, 0x18]);
    run_reset(&mut sys);
    assert_eq!(run_instruction(&mut sys), 2);
    assert!(flag_set(sys.cpu_state().p, Status::CARRY));
    assert_eq!(run_instruction(&mut sys), 2);
    assert!(!flag_set(sys.cpu_state().p, Status::CARRY));
}

#[test]
fn interrupt_disable_set_and_clear() {
    let mut sys = system_with(0x0200, &[0x58, 0x78]);
    run_reset(&mut sys);
    run_instruction(&mut sys);
    assert!(!flag_set(sys.cpu_state().p, Status::IRQ_DISABLE));
    run_instruction(&mut sys);
    assert!(flag_set(sys.cpu_state().p, Status::IRQ_DISABLE));
}

#[test]
fn decimal_flag_is_tracked() {
    let mut sys = system_with(0x0200, &[0xF8, 0xD8]);
    run_reset(&mut sys);
    run_instruction(&mut sys);
    assert!(flag_set(sys.cpu_state().p, Status::DECIMAL));
    run_instruction(&mut sys);
    assert!(!flag_set(sys.cpu_state().p, Status::DECIMAL));
}

#[test]
fn clv_clears_overflow() {
    // ADC #$50 twice sets V, then CLV clears it.
    let mut sys = system_with(0x0200, &[0xA9, 0x50, 0x69, 0x50, 0xB8]);
    run_reset(&mut sys);
    for _ in 0..2 {
        run_instruction(&mut sys);
    }
    assert!(flag_set(sys.cpu_state().p, Status::OVERFLOW));
    assert_eq!(run_instruction(&mut sys), 2);
    assert!(!flag_set(sys.cpu_state().p, Status::OVERFLOW));
}

// =============================================================================
// NOP
// =============================================================================

#[test]
fn nop_takes_2_and_changes_nothing_but_pc() {
    let mut sys = system_with(0x0200, &[0xEA, 0xEA]);
    run_reset(&mut sys);
    let before = sys.cpu_state();
    assert_eq!(run_instruction(&mut sys), 2);
    let after = sys.cpu_state();
    assert_eq!(after.pc, before.pc.wrapping_add(1));
    assert_eq!(after.a, before.a);
    assert_eq!(after.p, before.p);
    assert_eq!(after.sp, before.sp);
}
