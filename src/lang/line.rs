use super::parse::{groups, parse};
use super::{Atom, Error};
use std::cell::OnceCell;
use tracing::warn;

/// Postfix atom sequence, ready for the stack machine.
pub type Expression = Vec<Atom>;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Nil,
    Expression(Expression),
    /// Address expression, value expression.
    Assign(Expression, Expression),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    pub output: bool,
    pub statement: Statement,
}

/// ## A row of code
///
/// Holds the raw atoms collected by the block builder. The atoms are
/// parsed the first time the line is executed and the result is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    number: usize,
    atoms: Vec<Atom>,
    parsed: OnceCell<ParsedLine>,
}

impl Line {
    pub fn new(number: usize, atoms: Vec<Atom>) -> Line {
        Line {
            number,
            atoms,
            parsed: OnceCell::new(),
        }
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn parsed(&self) -> &ParsedLine {
        self.parsed.get_or_init(|| {
            for error in self.check() {
                warn!("{}", error);
            }
            parse(&self.atoms)
        })
    }

    /// Problems a permissive run tolerates. Malformed lines still execute.
    pub fn check(&self) -> Vec<Error> {
        let mut errors = vec![];
        let mut depth: isize = 0;
        for atom in &self.atoms {
            match atom {
                Atom::LParen => depth += 1,
                Atom::RParen => depth -= 1,
                _ => {}
            }
            if depth < 0 {
                break;
            }
        }
        if depth != 0 {
            errors.push(error!(UnmatchedParentheses, self.number));
        }
        if groups(&self.atoms).len() > 2 {
            errors.push(error!(TooManyAssignments, self.number));
        }
        let outputs = self.atoms.iter().filter(|a| **a == Atom::Output).count();
        if outputs > 1 {
            errors.push(error!(TooManyOutputs, self.number));
        } else if outputs == 1 && self.atoms[0] != Atom::Output {
            errors.push(error!(MisplacedOutput, self.number));
        }
        errors
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s: String = self.atoms.iter().map(|a| a.to_string()).collect();
        write!(f, "{}", s)
    }
}
