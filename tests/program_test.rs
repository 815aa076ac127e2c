mod common;
use boxscript::lang::ErrorCode;
use boxscript::mach::{run, Memory, Runtime, DEFAULT_CYCLE_LIMIT};
use common::*;
use pretty_assertions::assert_eq;

#[test]
fn test_zero() {
    assert_eq!(output(&program("zero.bs")), "0\n");
}

#[test]
fn test_count_to_9() {
    let mut memory = Memory::default();
    let s = run(&program("count_to_9.bs"), &mut memory, DEFAULT_CYCLE_LIMIT);
    assert_eq!(s, "0123456789\n");
    assert_eq!(memory.fetch(0), 10);
    assert_eq!(memory.fetch(1), 0);
    assert_eq!(memory.fetch(2), 2);
}

#[test]
fn test_count_to_7() {
    let mut memory = Memory::default();
    let s = run(&program("count_to_7.bs"), &mut memory, DEFAULT_CYCLE_LIMIT);
    assert_eq!(s, "01234567\n");
    assert_eq!(memory.fetch(0), 8);
    assert_eq!(memory.fetch(1), 0);
    assert_eq!(memory.fetch(2), 8);
}

#[test]
fn test_comments_do_not_change_output() {
    assert_eq!(
        output(&program("commented.bs")),
        output(&program("count_to_9.bs"))
    );
}

#[test]
fn test_runs_are_deterministic() {
    let source = program("count_to_7.bs");
    let mut r1 = Runtime::default();
    let mut r2 = Runtime::default();
    r1.load(&source).unwrap();
    r2.load(&source).unwrap();
    assert_eq!(exec(&mut r1), exec_n(&mut r2, 7));
    assert_eq!(r1.cycles(), r2.cycles());
    assert_eq!(r1.memory(), r2.memory());
}

#[test]
fn test_rejected_program_prints_only_diagnostic() {
    let source = "┌──┐\n│▀▀│\n└─ ┘\n";
    assert_eq!(output(source), "Discontinuous box at line 2\n");
}

#[test]
fn test_duplicate_box_prints_only_diagnostic() {
    let source = "┌─┐┌─┐\n│▭││▭│\n└─┘└─┘\n";
    let mut memory = Memory::default();
    let s = run(source, &mut memory, DEFAULT_CYCLE_LIMIT);
    assert_eq!(s, "Duplicate box at line 0\n");
    assert!(memory.is_empty());
}

#[test]
fn test_seeded_memory() {
    let source = "┌──────┐\n│▭◇▀   │\n└──────┘\n";
    let mut memory: Memory = vec![(0, 65)].into_iter().collect();
    assert_eq!(run(source, &mut memory, DEFAULT_CYCLE_LIMIT), "A\n");
}

#[test]
fn test_negative_output_halts_cleanly() {
    let source = "┌────────┐\n│▭▀▀▀▄▄▄▄│\n│▭▄▀▀    │\n│▭▀▀▀▄▄▄▄│\n└────────┘\n";
    let mut runtime = Runtime::default();
    runtime.load(source).unwrap();
    assert_eq!(exec(&mut runtime), "0\n");
    assert!(runtime.halted().unwrap().is(ErrorCode::NegativeOutput));
}

#[test]
fn test_box_runs_while_its_if_holds() {
    let source = "┏━━━━━━┓\n┃◇▀    ┃\n┡━━━━━━┩\n│▀▀◈▀▀ │\n└──────┘\n";
    // memory[0] is zero, so the box ends at once
    assert_eq!(output(source), "\n");

    let source = "┏━━━━━━┓\n┃▀▀    ┃\n┡━━━━━━┩\n│▀▀◈▀▀ │\n└──────┘\n";
    let mut memory = Memory::default();
    assert_eq!(run(source, &mut memory, 10_000), "\n");
    assert_eq!(memory.fetch(1), 1);
}

#[test]
fn test_empty_program() {
    assert_eq!(output(""), "\n");
}
