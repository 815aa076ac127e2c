use super::line::{ParsedLine, Statement};
use super::Atom;

/// Split a line into its output flag and statement.
///
/// Only a leading `▭` counts as output. The rest is split on runs of `◈`:
/// one group is an expression, two or more an assignment of the second
/// group to the address in the first.
pub fn parse(atoms: &[Atom]) -> ParsedLine {
    let (output, rest) = match atoms.split_first() {
        Some((Atom::Output, rest)) => (true, rest),
        _ => (false, atoms),
    };
    let statement = match groups(rest).as_slice() {
        [] => Statement::Nil,
        [value] => Statement::Expression(postfix(value)),
        [address, value, ..] => Statement::Assign(postfix(address), postfix(value)),
    };
    ParsedLine { output, statement }
}

pub(super) fn groups(atoms: &[Atom]) -> Vec<&[Atom]> {
    atoms
        .split(|atom| *atom == Atom::Assign)
        .filter(|group| !group.is_empty())
        .collect()
}

/// Shunting-yard conversion to postfix order.
///
/// Binary operators flush stacked operators that bind at least as tightly.
/// Prefix operators are stacked without flushing. An unmatched `▏` is
/// ignored and unclosed `▕` are dropped. Atoms that are not part of an
/// expression are skipped.
pub fn postfix(atoms: &[Atom]) -> Vec<Atom> {
    let mut output: Vec<Atom> = vec![];
    let mut stack: Vec<Atom> = vec![];
    for &atom in atoms {
        match atom {
            Atom::Number(_) => output.push(atom),
            Atom::LParen => stack.push(atom),
            Atom::RParen => {
                if stack.contains(&Atom::LParen) {
                    while let Some(top) = stack.pop() {
                        if top == Atom::LParen {
                            break;
                        }
                        output.push(top);
                    }
                }
            }
            op if op.is_unary() => stack.push(op),
            op if op.is_operator() => {
                while let Some(&top) = stack.last() {
                    if !top.is_operator() || top.precedence() < op.precedence() {
                        break;
                    }
                    output.push(top);
                    stack.pop();
                }
                stack.push(op);
            }
            _ => {}
        }
    }
    while let Some(top) = stack.pop() {
        if top != Atom::LParen {
            output.push(top);
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use Atom::*;

    #[test]
    fn test_precedence() {
        // 1 | 2 ^ 3 & 4
        assert_eq!(
            postfix(&[Number(1), Or, Number(2), Xor, Number(3), And, Number(4)]),
            [Number(1), Number(2), Number(3), Number(4), And, Xor, Or]
        );
        // 1 & 2 | 3
        assert_eq!(
            postfix(&[Number(1), And, Number(2), Or, Number(3)]),
            [Number(1), Number(2), And, Number(3), Or]
        );
    }

    #[test]
    fn test_left_grouping() {
        assert_eq!(
            postfix(&[Number(8), ShiftRight, Number(1), ShiftLeft, Number(2)]),
            [Number(8), Number(1), ShiftRight, Number(2), ShiftLeft]
        );
    }

    #[test]
    fn test_prefix_operators() {
        assert_eq!(
            postfix(&[Fetch, Fetch, Number(1)]),
            [Number(1), Fetch, Fetch]
        );
        assert_eq!(
            postfix(&[Fetch, Number(0), Xor, Number(48)]),
            [Number(0), Fetch, Number(48), Xor]
        );
        assert_eq!(
            postfix(&[Not, Number(0), ShiftLeft, Number(1)]),
            [Number(0), Not, Number(1), ShiftLeft]
        );
    }

    #[test]
    fn test_parentheses() {
        // (1 | 2) & 3
        assert_eq!(
            postfix(&[LParen, Number(1), Or, Number(2), RParen, And, Number(3)]),
            [Number(1), Number(2), Or, Number(3), And]
        );
        assert_eq!(
            postfix(&[Fetch, LParen, Number(1), Or, Number(2), RParen]),
            [Number(1), Number(2), Or, Fetch]
        );
        assert_eq!(postfix(&[Number(1), RParen, Or, Number(2)]), [Number(1), Number(2), Or]);
        assert_eq!(postfix(&[LParen, LParen, Number(5)]), [Number(5)]);
    }

    #[test]
    fn test_parse_statements() {
        assert_eq!(
            parse(&[]),
            ParsedLine {
                output: false,
                statement: Statement::Nil
            }
        );
        assert_eq!(
            parse(&[Output]),
            ParsedLine {
                output: true,
                statement: Statement::Nil
            }
        );
        assert_eq!(
            parse(&[Output, Fetch, Number(2)]),
            ParsedLine {
                output: true,
                statement: Statement::Expression(vec![Number(2), Fetch])
            }
        );
        assert_eq!(
            parse(&[Number(1), Assign, Fetch, Number(0), Xor, Number(48)]).statement,
            Statement::Assign(vec![Number(1)], vec![Number(0), Fetch, Number(48), Xor])
        );
    }

    #[test]
    fn test_assign_runs_and_extra_groups() {
        assert_eq!(
            parse(&[Assign, Number(1), Assign, Assign, Number(2), Assign, Number(3)]).statement,
            Statement::Assign(vec![Number(1)], vec![Number(2)])
        );
        assert_eq!(parse(&[Assign, Assign]).statement, Statement::Nil);
    }

    #[test]
    fn test_late_output_is_ignored() {
        assert_eq!(
            parse(&[Number(1), Output]),
            ParsedLine {
                output: false,
                statement: Statement::Expression(vec![Number(1)])
            }
        );
    }
}
