/*!
## Rust Machine Module

This Rust module executes BoxScript trees against a sparse memory.

*/

mod memory;
mod operation;
mod runtime;
mod stack;

pub use memory::Memory;
pub use operation::Operation;
pub use runtime::Event;
pub use runtime::Runtime;
pub use runtime::DEFAULT_CYCLE_LIMIT;
pub use stack::Stack;

/// Cycles handed to [`Runtime::execute`] per call. Small enough that an
/// interrupt is noticed promptly.
pub const SLICE: usize = 5000;

/// Run a whole program and collect what it prints.
///
/// Returns the program output followed by a newline, or the first
/// diagnostic followed by a newline when the source is rejected.
/// `memory` seeds the run and holds the final memory afterwards.
pub fn run(source: &str, memory: &mut Memory, cycle_limit: usize) -> String {
    let mut runtime = Runtime::new(std::mem::take(memory)).with_cycle_limit(cycle_limit);
    let mut s = String::new();
    match runtime.load(source) {
        Err(error) => s.push_str(&format!("{}\n", error)),
        Ok(()) => loop {
            match runtime.execute(SLICE) {
                Event::Stopped => break,
                Event::Running => {}
                Event::Print(ps) => s.push_str(&ps),
            }
        },
    }
    *memory = runtime.into_memory();
    s
}

#[cfg(test)]
mod tests;
