use super::{Column, LineNumber};

#[derive(Clone, PartialEq)]
pub struct Error {
    code: u16,
    line_number: LineNumber,
    column: Column,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            line_number: None,
            column: 0..0,
            message: String::new(),
        }
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code as u16
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    pub fn in_line_number(&self, line: usize) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            code: self.code,
            line_number: Some(line),
            column: self.column.clone(),
            message: self.message.clone(),
        }
    }

    pub fn in_column(&self, column: &Column) -> Error {
        debug_assert_eq!(self.column, 0..0);
        Error {
            code: self.code,
            line_number: self.line_number,
            column: column.clone(),
            message: self.message.clone(),
        }
    }

    pub fn message(&self, message: &str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            line_number: self.line_number,
            column: self.column.clone(),
            message: message.to_string(),
        }
    }

    /// Grid and structure errors stop a program before it runs.
    /// Everything else is raised while running and ends the run quietly.
    pub fn is_runtime_signal(&self) -> bool {
        (20..30).contains(&self.code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorCode {
    DiscontinuousBox = 1,
    InvalidCharacter = 2,
    DuplicateBox = 3,
    UnmatchedWall = 4,
    CodeOutsideBox = 5,
    UnbalancedBlock = 10,
    UnmatchedParentheses = 11,
    TooManyAssignments = 12,
    TooManyOutputs = 13,
    MisplacedOutput = 14,
    NegativeOutput = 20,
    InvalidCharacterCode = 21,
    Overflow = 22,
    MissingOperand = 23,
    CyclesExceeded = 24,
    Interrupted = 25,
    StackOverflow = 26,
    FileNotFound = 30,
    InternalError = 51,
}

impl std::error::Error for Error {}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let (code_str, preposition) = match self.code {
            1 => ("Discontinuous box", "at"),
            2 => ("Invalid character", "at"),
            3 => ("Duplicate box", "at"),
            4 => ("Unmatched wall", "at"),
            5 => ("Code outside of box", "at"),
            10 => ("Unbalanced block", "at"),
            11 => ("Unmatched parentheses", "at"),
            12 => ("Too many assignment operations", "on"),
            13 => ("Too many output operations", "on"),
            14 => ("Output operation must be at the beginning", "of"),
            20 => ("Negative output", "at"),
            21 => ("Invalid character code", "at"),
            22 => ("Overflow", "at"),
            23 => ("Missing operand", "at"),
            24 => ("Execution cycles exceeded", "at"),
            25 => ("Interrupted", "at"),
            26 => ("Stack overflow", "at"),
            30 => ("File not found", "at"),
            51 => ("Internal error", "at"),
            _ => ("", "at"),
        };
        let mut message = self.message.as_str();
        let mut s = if code_str.is_empty() {
            format!("Program error {}", self.code)
        } else if self.code == ErrorCode::InvalidCharacter as u16 && !message.is_empty() {
            let s = format!("{} `{}`", code_str, message);
            message = "";
            s
        } else {
            code_str.to_string()
        };
        if let Some(line_number) = self.line_number {
            s.push_str(&format!(" {} line {}", preposition, line_number));
        }
        if (0..0) != self.column {
            s.push_str(&format!(" ({}..{})", self.column.start, self.column.end));
        }
        if !message.is_empty() {
            s.push_str(&format!("; {}", message));
        }
        write!(f, "{}", s)
    }
}
