use super::*;
use pretty_assertions::assert_eq;

const COUNTER: &str = "\
┏━━━━━━━━┓
┃◇▀▄▒▀▀▄▄┃
┡━━━━━━━━┩
│▭◇▀▀    │
│▀▀◈◇▀▀▓▀│
└────────┘
";

#[test]
fn test_pipeline_shape() {
    let script = script(COUNTER).unwrap();
    assert_eq!(script.children().len(), 1);
    let block = match &script.children()[0] {
        Node::Box(block) => block,
        node => panic!("{:?}", node),
    };
    assert!(block.has_if());
    assert!(matches!(block.children()[0], Node::If(_)));
    assert!(matches!(block.children()[1], Node::Exec(_)));
}

#[test]
fn test_pipeline_lines() {
    let script = script(COUNTER).unwrap();
    let lines: Vec<String> = script
        .lines()
        .iter()
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect();
    // literals are listed in their shortest spelling
    assert_eq!(lines, vec!["◇▄▒▀▀▄▄", "▭◇▀▀", "▀▀◈◇▀▀▓▄"]);
    let condition = script
        .lines()
        .into_iter()
        .find(|line| !line.is_empty())
        .unwrap();
    assert_eq!(
        condition.atoms(),
        [Atom::Fetch, Atom::Number(0), Atom::Xor, Atom::Number(4)]
    );
    let output = script
        .lines()
        .iter()
        .map(|line| line.parsed().clone())
        .find(|parsed| parsed.output)
        .unwrap();
    assert_eq!(output.statement, Statement::Expression(vec![Atom::Number(1), Atom::Fetch]));
}

#[test]
fn test_pipeline_comment_only() {
    let source = "╔═════╗\n║ hi  ║\n╚═════╝\n";
    let script = script(source).unwrap();
    assert!(script.is_empty());
    assert!(script.check().is_empty());
}

#[test]
fn test_pipeline_check() {
    let source = "┌──────┐\n│▀◈▀◈▀ │\n└──────┘\n";
    let script = script(source).unwrap();
    let errors = script.check();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].is(ErrorCode::TooManyAssignments));
}
