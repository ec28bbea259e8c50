//! Run statistics: cycles, instruction mix, faults, and frames.

use minirv_core::isa::Category;
use minirv_core::stats::SimStats;
use pretty_assertions::assert_eq;

use crate::common::builder::instruction::*;
use crate::common::harness::TestContext;

#[test]
fn fresh_stats_are_zero() {
    let stats = SimStats::default();
    assert_eq!(stats.cycles, 0);
    assert_eq!(stats.total_faults(), 0);
    for category in Category::ALL {
        assert_eq!(stats.retired(category), 0);
    }
}

#[test]
fn counts_every_category() {
    let program = [
        lui(1, 0x20000),
        addi(2, 0, 0x11),
        add(3, 2, 2),
        sw(1, 2, 0),
        sw(0, 2, 0x100),
        lw(4, 0, 0x100),
        jalr(5, 0, 0x20),
    ];
    let mut ctx = TestContext::new().load_program(0, &program);
    for _ in 0..program.len() {
        let _ = ctx.step();
    }

    let stats = &ctx.cpu().stats;
    assert_eq!(stats.cycles, 7);
    assert_eq!(stats.retired(Category::Lui), 1);
    assert_eq!(stats.retired(Category::OpImm), 1);
    assert_eq!(stats.retired(Category::OpReg), 1);
    assert_eq!(stats.retired(Category::Store), 2);
    assert_eq!(stats.retired(Category::Load), 1);
    assert_eq!(stats.retired(Category::Jalr), 1);
    assert_eq!(stats.frames_presented, 1);
    // add has no immediate form.
    assert_eq!(stats.faults_immediate, 1);
    assert_eq!(stats.total_faults(), 1);
}

#[test]
fn counts_faults_by_kind() {
    let lh = lw(4, 0, 0) & !(0x7 << 12) | (1 << 12);
    let sh = sw(0, 2, 0) & !(0x7 << 12) | (1 << 12);
    let far_load = lw(4, 1, 0);
    let program = [0x0000_0063, lh, sh, far_load];

    let mut ctx = TestContext::new().load_program(0, &program);
    ctx.set_reg(1, 0xF000_0000);
    for _ in 0..program.len() {
        let _ = ctx.step();
    }

    let stats = &ctx.cpu().stats;
    assert_eq!(stats.faults_decode, 1);
    assert_eq!(stats.faults_load, 2);
    assert_eq!(stats.faults_save, 1);
    assert_eq!(stats.faults_addressing, 0);
    assert_eq!(stats.total_faults(), 4);
    // The undecodable word executed as immediate arithmetic.
    assert_eq!(stats.retired(Category::OpImm), 1);
}
