use crate::error;
use crate::lang::{Atom, Error};
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

pub struct Operation {}

impl Operation {
    pub fn binary(op: Atom, lhs: i64, rhs: i64) -> Result<i64> {
        match op {
            Atom::And => Ok(Operation::and(lhs, rhs)),
            Atom::Or => Ok(Operation::or(lhs, rhs)),
            Atom::Xor => Ok(Operation::xor(lhs, rhs)),
            Atom::ShiftLeft => Operation::shift_left(lhs, rhs),
            Atom::ShiftRight => Operation::shift_right(lhs, rhs),
            _ => Err(error!(InternalError; "NOT A BINARY OPERATOR")),
        }
    }

    pub fn not(val: i64) -> i64 {
        !val
    }

    pub fn and(lhs: i64, rhs: i64) -> i64 {
        lhs & rhs
    }

    pub fn or(lhs: i64, rhs: i64) -> i64 {
        lhs | rhs
    }

    pub fn xor(lhs: i64, rhs: i64) -> i64 {
        lhs ^ rhs
    }

    pub fn shift_left(lhs: i64, rhs: i64) -> Result<i64> {
        if rhs < 0 {
            return Err(error!(Overflow; "NEGATIVE SHIFT"));
        }
        if lhs == 0 {
            return Ok(0);
        }
        if rhs >= 64 {
            return Err(error!(Overflow));
        }
        match i64::try_from((lhs as i128) << rhs) {
            Ok(n) => Ok(n),
            Err(_) => Err(error!(Overflow)),
        }
    }

    pub fn shift_right(lhs: i64, rhs: i64) -> Result<i64> {
        if rhs < 0 {
            return Err(error!(Overflow; "NEGATIVE SHIFT"));
        }
        if rhs >= 64 {
            return Ok(if lhs < 0 { -1 } else { 0 });
        }
        Ok(lhs >> rhs)
    }

    /// Character written by an output line.
    pub fn character(val: i64) -> Result<char> {
        if val < 0 {
            return Err(error!(NegativeOutput));
        }
        match u32::try_from(val).ok().and_then(std::char::from_u32) {
            Some(ch) => Ok(ch),
            None => Err(error!(InvalidCharacterCode)),
        }
    }
}
