/// A single lexical unit of BoxScript.
/// Only `Number` carries a payload.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Atom {
    Number(i64),
    Fetch,
    Assign,
    Not,
    And,
    Xor,
    Or,
    ShiftLeft,
    ShiftRight,
    Output,
    Input,
    LParen,
    RParen,
    BoxStart,
    BoxEnd,
    IfStart,
    IfEnd,
    ExecStart,
    ExecEnd,
    Newline,
}

/// Corner and tee glyphs of the left wall and the markers they open and close.
const MARKERS: &[(char, [Atom; 2])] = &[
    ('┌', [Atom::BoxStart, Atom::ExecStart]),
    ('┏', [Atom::BoxStart, Atom::IfStart]),
    ('├', [Atom::ExecEnd, Atom::ExecStart]),
    ('┞', [Atom::IfEnd, Atom::ExecStart]),
    ('┡', [Atom::IfEnd, Atom::ExecStart]),
    ('┟', [Atom::ExecEnd, Atom::IfStart]),
    ('┢', [Atom::ExecEnd, Atom::IfStart]),
    ('┣', [Atom::IfEnd, Atom::IfStart]),
    ('└', [Atom::ExecEnd, Atom::BoxEnd]),
    ('┗', [Atom::IfEnd, Atom::BoxEnd]),
];

const SINGLES: &[(char, Atom)] = &[
    ('◇', Atom::Fetch),
    ('◈', Atom::Assign),
    ('▔', Atom::Not),
    ('░', Atom::And),
    ('▒', Atom::Xor),
    ('▓', Atom::Or),
    ('▚', Atom::ShiftLeft),
    ('▞', Atom::ShiftRight),
    ('▕', Atom::LParen),
    ('▏', Atom::RParen),
    ('▭', Atom::Output),
    ('▯', Atom::Input),
    ('\n', Atom::Newline),
];

impl Atom {
    pub fn markers(c: char) -> Option<[Atom; 2]> {
        MARKERS
            .iter()
            .find(|(glyph, _)| *glyph == c)
            .map(|(_, markers)| *markers)
    }

    pub fn from_glyph(c: char) -> Option<Atom> {
        SINGLES
            .iter()
            .find(|(glyph, _)| *glyph == c)
            .map(|(_, atom)| *atom)
    }

    pub fn is_marker(&self) -> bool {
        use Atom::*;
        matches!(
            self,
            BoxStart | BoxEnd | IfStart | IfEnd | ExecStart | ExecEnd
        )
    }

    pub fn is_operator(&self) -> bool {
        use Atom::*;
        matches!(
            self,
            Fetch | Not | And | Xor | Or | ShiftLeft | ShiftRight
        )
    }

    pub fn is_unary(&self) -> bool {
        matches!(self, Atom::Fetch | Atom::Not)
    }

    /// Binding strength of an operator; higher binds tighter.
    pub fn precedence(&self) -> usize {
        use Atom::*;
        match self {
            Or => 1,
            Xor => 2,
            And => 3,
            ShiftLeft | ShiftRight => 4,
            Fetch | Not => 5,
            _ => 0,
        }
    }
}

impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Atom::*;
        match self {
            Number(n) => {
                if *n == 0 {
                    return write!(f, "▄");
                }
                let sign = if *n < 0 { '▄' } else { '▀' };
                let bits: String = format!("{:b}", n.unsigned_abs())
                    .chars()
                    .map(|b| if b == '1' { '▀' } else { '▄' })
                    .collect();
                write!(f, "{}{}", sign, bits)
            }
            Fetch => write!(f, "◇"),
            Assign => write!(f, "◈"),
            Not => write!(f, "▔"),
            And => write!(f, "░"),
            Xor => write!(f, "▒"),
            Or => write!(f, "▓"),
            ShiftLeft => write!(f, "▚"),
            ShiftRight => write!(f, "▞"),
            Output => write!(f, "▭"),
            Input => write!(f, "▯"),
            LParen => write!(f, "▕"),
            RParen => write!(f, "▏"),
            BoxStart => write!(f, "BOX"),
            BoxEnd => write!(f, "END BOX"),
            IfStart => write!(f, "IF"),
            IfEnd => write!(f, "END IF"),
            ExecStart => write!(f, "EXEC"),
            ExecEnd => write!(f, "END EXEC"),
            Newline => writeln!(f),
        }
    }
}
