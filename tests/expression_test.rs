mod common;
use boxscript::lang::ErrorCode;
use boxscript::mach::{run, Memory, Runtime, DEFAULT_CYCLE_LIMIT};
use common::*;
use pretty_assertions::assert_eq;

/// Draw a single box around `lines`.
fn boxed(lines: &[&str]) -> String {
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) + 1;
    let mut s = format!("┌{}┐\n", "─".repeat(width));
    for line in lines {
        let pad = width - line.chars().count();
        s.push_str(&format!("│{}{}│\n", line, " ".repeat(pad)));
    }
    s.push_str(&format!("└{}┘\n", "─".repeat(width)));
    s
}

/// Store `expression` in cell 1 and read it back.
fn eval_with(memory: Vec<(i64, i64)>, expression: &str) -> i64 {
    let mut memory: Memory = memory.into_iter().collect();
    let line = format!("▀▀◈{}", expression);
    assert_eq!(
        run(&boxed(&[line.as_str()]), &mut memory, DEFAULT_CYCLE_LIMIT),
        "\n"
    );
    memory.fetch(1)
}

fn eval(expression: &str) -> i64 {
    eval_with(vec![], expression)
}

#[test]
fn test_numbers() {
    assert_eq!(eval("▀"), 0);
    assert_eq!(eval("▄"), 0);
    assert_eq!(eval("▀▀▄▄▄"), 8);
    assert_eq!(eval("▄▀▄"), -2);
}

#[test]
fn test_binary_operators() {
    assert_eq!(eval("▀▀▀▒▀▀"), 2);
    assert_eq!(eval("▀▀▀░▀▀▄"), 2);
    assert_eq!(eval("▀▀▓▀▀▄"), 3);
    assert_eq!(eval("▀▀▚▀▀▀"), 8);
    assert_eq!(eval("▀▀▄▄▄▞▀▀▄"), 2);
}

#[test]
fn test_precedence() {
    assert_eq!(eval("▀▀▓▀▀▄░▀▀▄"), 3);
    assert_eq!(eval("▕▀▀▓▀▀▄▏░▀▀▄"), 2);
    assert_eq!(eval("▀▀▀░▀▀▀▚▀▀"), 2);
}

#[test]
fn test_left_associative() {
    assert_eq!(eval("▀▀▄▄▄▞▀▀▞▀▀"), 2);
}

#[test]
fn test_not() {
    assert_eq!(eval("▔▀"), -1);
    assert_eq!(eval("▔▀▀▀"), -4);
}

#[test]
fn test_fetch() {
    assert_eq!(eval_with(vec![(5, 7)], "◇▀▀▄▀"), 7);
    assert_eq!(eval_with(vec![(1, 5), (5, 7)], "◇◇▀▀"), 7);
    assert_eq!(eval("◇▀▀▀▀▀▀"), 0);
}

#[test]
fn test_assignment() {
    let mut memory: Memory = vec![(0, 2)].into_iter().collect();
    let source = boxed(&["◇▀◈◇▀▓▀▀▀▄▄", "▀◈▀▀"]);
    assert_eq!(run(&source, &mut memory, DEFAULT_CYCLE_LIMIT), "\n");
    assert_eq!(memory.fetch(2), 14);
    assert_eq!(memory.fetch(0), 1);
}

#[test]
fn test_output() {
    assert_eq!(output(&boxed(&["▭▀▀▀▄▄▄▀", "▭▀▀▄▀▄"])), "1\n\n");
    assert_eq!(output(&boxed(&["▭◇▀▀▀▀▀▀"])), "\u{0}\n");
}

#[test]
fn test_negative_shift_halts() {
    let mut runtime = Runtime::default();
    runtime.load(&boxed(&["▭▀▀▚▄▀▀"])).unwrap();
    assert_eq!(exec(&mut runtime), "\n");
    assert!(runtime.halted().unwrap().is(ErrorCode::Overflow));
}

#[test]
fn test_empty_line_keeps_value() {
    let mut memory: Memory = vec![(0, 48), (1, 1)].into_iter().collect();
    let source = "\
┏━━━━━━━━━━━┓
┃◇▀▀        ┃
┃           ┃
┡━━━━━━━━━━━┩
│▭◇▀        │
│▀▀◈▀       │
└───────────┘
";
    assert_eq!(run(source, &mut memory, DEFAULT_CYCLE_LIMIT), "0\n");
    assert_eq!(memory.fetch(1), 0);
}
