use super::*;
use crate::lang::ErrorCode;

fn exec(runtime: &mut Runtime) -> String {
    let mut s = String::new();
    loop {
        match runtime.execute(SLICE) {
            Event::Stopped => break,
            Event::Running => {}
            Event::Print(ps) => s.push_str(&ps),
        }
    }
    s
}

fn load(source: &str) -> Runtime {
    let mut runtime = Runtime::default();
    runtime.load(source).unwrap();
    runtime
}

#[test]
fn test_failed_if_ends_box() {
    let mut r = load(
        "\
┌──────────┐
│▭▀▀▀▄▄▄▄  │
┢━━━━━━━━━━┪
┃▀         ┃
┗━━━━━━━━━━┛
",
    );
    assert_eq!(exec(&mut r), "0\n");
    assert_eq!(r.halted(), None);
    assert!(r.cycles() < 20);
}

#[test]
fn test_failed_inner_box_lets_outer_continue() {
    let mut r = load(
        "\
┌───────────┐
│┏━━━━━━━━┓ │
│┃▀       ┃ │
│┡━━━━━━━━┩ │
││▭▀▀▀▄▄▄▀│ │
│└────────┘ │
│▭▀▀▀▄▄▄▄   │
└───────────┘
",
    );
    assert_eq!(exec(&mut r), "0\n");
    assert_eq!(r.halted(), None);
}

#[test]
fn test_box_without_if_runs_once() {
    let mut r = load("┌─────────┐\n│▭▀▀▀▄▄▄▄ │\n└─────────┘\n");
    assert_eq!(exec(&mut r), "0\n");
    assert_eq!(r.halted(), None);
}

#[test]
fn test_endless_box_hits_cycle_limit() {
    let mut r = load("┏━━━━┓\n┃▀▀  ┃\n┗━━━━┛\n");
    r.set_cycle_limit(1000);
    assert_eq!(exec(&mut r), "\n");
    assert!(r.halted().unwrap().is(ErrorCode::CyclesExceeded));
    assert_eq!(r.cycles(), 1000);
}

#[test]
fn test_slices() {
    let mut r = load("┏━━━━┓\n┃▀▀  ┃\n┗━━━━┛\n");
    r.set_cycle_limit(25);
    assert_eq!(r.execute(10), Event::Running);
    assert_eq!(r.execute(10), Event::Running);
    assert_eq!(r.execute(10), Event::Print("\n".to_string()));
    assert_eq!(r.execute(10), Event::Stopped);
    assert_eq!(r.cycles(), 25);
}

#[test]
fn test_interrupt() {
    let mut r = load("┏━━━━┓\n┃▀▀  ┃\n┗━━━━┛\n");
    assert_eq!(r.execute(100), Event::Running);
    r.interrupt();
    assert_eq!(r.execute(100), Event::Print("\n".to_string()));
    assert_eq!(r.execute(100), Event::Stopped);
    assert!(r.halted().unwrap().is(ErrorCode::Interrupted));
}

#[test]
fn test_negative_output_stops_quietly() {
    let mut r = load(
        "\
┌─────────┐
│▭▀▀▀▄▄▄▄ │
│▭▄▀▀     │
│▭▀▀▀▄▄▄▀ │
└─────────┘
",
    );
    assert_eq!(exec(&mut r), "0\n");
    assert!(r.halted().unwrap().is(ErrorCode::NegativeOutput));
}

#[test]
fn test_missing_operand_stops_quietly() {
    let mut r = load("┌──────┐\n│▭▒▒▀▀ │\n└──────┘\n");
    assert_eq!(exec(&mut r), "\n");
    assert!(r.halted().unwrap().is(ErrorCode::MissingOperand));
}

#[test]
fn test_memory_is_handed_back() {
    let mut memory: Memory = vec![(5, 48)].into_iter().collect();
    let source = "┌──────────┐\n│▭◇▀▀▄▀    │\n│▀▀◈▀▀▄▄   │\n└──────────┘\n";
    assert_eq!(run(source, &mut memory, DEFAULT_CYCLE_LIMIT), "0\n");
    assert_eq!(memory.fetch(1), 4);
    assert_eq!(memory.fetch(5), 48);
}

#[test]
fn test_rejected_source() {
    let mut memory = Memory::default();
    assert_eq!(
        run("┌──┐\n│▭a│\n└──┘\n", &mut memory, DEFAULT_CYCLE_LIMIT),
        "Invalid character `a` at line 1\n"
    );
}
