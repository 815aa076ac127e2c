use super::glyph::{self, COMMENT_CLOSE, COMMENT_FILL, COMMENT_OPEN, COMMENT_WALL};
use super::token::Atom;

/// Tokenize BoxScript source. Never fails; glyphs without a meaning
/// (walls, box tops, unknown characters) are dropped and comments vanish.
pub fn lex(s: &str) -> Vec<Atom> {
    BoxLexer::lex(s)
}

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>>;

    fn number(&mut self) -> Atom {
        let mut glyphs = 0;
        let mut negative = false;
        let mut magnitude: i64 = 0;
        while let Some(&pk) = self.chars().peek() {
            if !glyph::is_bit(pk) {
                break;
            }
            self.chars().next();
            if glyphs == 0 {
                negative = pk == glyph::ZERO;
            } else {
                let bit = if pk == glyph::ONE { 1 } else { 0 };
                magnitude = magnitude
                    .checked_mul(2)
                    .and_then(|m| m.checked_add(bit))
                    .unwrap_or(i64::MAX);
            }
            glyphs += 1;
        }
        debug_assert!(glyphs > 0, "Failed to tokenize number.");
        if glyphs == 1 {
            return Atom::Number(0);
        }
        Atom::Number(if negative { -magnitude } else { magnitude })
    }

    /// `╔═══╗` style rule. Consumed only when it closes on the same row.
    fn rule(&mut self) -> bool {
        let mut look = self.chars().clone();
        look.next();
        let mut len = 1;
        loop {
            match look.next() {
                Some(COMMENT_FILL) => len += 1,
                Some(c) if COMMENT_CLOSE.contains(c) => {
                    len += 1;
                    break;
                }
                _ => return false,
            }
        }
        for _ in 0..len {
            self.chars().next();
        }
        true
    }

    /// `║ text ║` remark, running to the last `║` of the row.
    fn remark(&mut self) -> bool {
        let mut look = self.chars().clone();
        look.next();
        let mut len = 1;
        let mut end = None;
        for c in look {
            if c == '\n' {
                break;
            }
            len += 1;
            if c == COMMENT_WALL {
                end = Some(len);
            }
        }
        match end {
            Some(len) => {
                for _ in 0..len {
                    self.chars().next();
                }
                true
            }
            None => false,
        }
    }
}

struct BoxLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    pending: Option<Atom>,
}

impl<'a> Tokenizers<'a> for BoxLexer<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>> {
        &mut self.chars
    }
}

impl<'a> Iterator for BoxLexer<'a> {
    type Item = Atom;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(atom) = self.pending.take() {
            return Some(atom);
        }
        loop {
            let pk = *self.chars.peek()?;
            if glyph::is_bit(pk) {
                return Some(self.number());
            }
            if COMMENT_OPEN.contains(pk) && self.rule() {
                continue;
            }
            if pk == COMMENT_WALL && self.remark() {
                continue;
            }
            self.chars.next();
            if let Some([first, second]) = Atom::markers(pk) {
                self.pending = Some(second);
                return Some(first);
            }
            if let Some(atom) = Atom::from_glyph(pk) {
                return Some(atom);
            }
        }
    }
}

impl<'a> BoxLexer<'a> {
    fn lex(s: &str) -> Vec<Atom> {
        BoxLexer {
            chars: s.chars().peekable(),
            pending: None,
        }
        .collect()
    }
}
