//! Disassembler output for each supported encoding.

use minirv_core::isa::disasm::disassemble;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::builder::instruction::*;

#[rstest]
#[case(addi(10, 0, 10), "addi a0, zero, 10")]
#[case(addi(2, 2, -16), "addi sp, sp, -16")]
#[case(add(5, 6, 7), "add t0, t1, t2")]
#[case(sub(5, 6, 7), "sub t0, t1, t2")]
#[case(lw(10, 2, 8), "lw a0, 8(sp)")]
#[case(lbu(11, 10, -1), "lbu a1, -1(a0)")]
#[case(sw(2, 1, 12), "sw ra, 12(sp)")]
#[case(sb(10, 11, 3), "sb a1, 3(a0)")]
#[case(lui(5, 0x12345), "lui t0, 0x12345")]
#[case(jalr(0, 1, 0), "jalr zero, 0(ra)")]
fn renders_supported_encodings(#[case] raw: u32, #[case] expected: &str) {
    assert_eq!(disassemble(raw), expected);
}

#[test]
fn renders_immediate_shifts() {
    // slli a0, a0, 3
    assert_eq!(disassemble(0x0035_1513), "slli a0, a0, 3");
    // srai a0, a0, 3
    assert_eq!(disassemble(0x4035_5513), "srai a0, a0, 3");
}

#[test]
fn unsupported_widths_are_marked() {
    let lh = lw(1, 2, 0) & !(0x7 << 12) | (1 << 12);
    assert_eq!(disassemble(lh), "load.1 ra, 0(sp)");
    let sh = sw(2, 1, 0) & !(0x7 << 12) | (1 << 12);
    assert_eq!(disassemble(sh), "store.1 ra, 0(sp)");
}

#[rstest]
#[case(0x0000_0063)]
#[case(0x0000_006F)]
#[case(0x0000_0073)]
#[case(0x0000_0017)]
fn unknown_words_are_marked(#[case] raw: u32) {
    assert_eq!(disassemble(raw), format!("unknown {raw:#010x}"));
}
