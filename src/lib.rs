//! # BoxScript
//!
//! An interpreter for BoxScript, a language drawn with box-drawing
//! characters. The nesting of boxes is the control flow; block glyphs
//! inside them are numbers, memory access and bitwise operators.
//!
//! Run a program with `boxscript program.bs`, or start `boxscript`
//! without arguments to draw one in the editor.
//! ```text
//! ┌───────────┐
//! │▭▀▀▀▄▄▄▄   │
//! └───────────┘
//! ```
//!
//! The same pipeline is available as a library:
//! ```
//! use boxscript::mach::{run, Memory, DEFAULT_CYCLE_LIMIT};
//!
//! let source = "┌───────────┐\n│▭▀▀▀▄▄▄▄   │\n└───────────┘\n";
//! let mut memory = Memory::default();
//! assert_eq!(run(source, &mut memory, DEFAULT_CYCLE_LIMIT), "0\n");
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

pub mod lang;
pub mod mach;
pub mod term;
