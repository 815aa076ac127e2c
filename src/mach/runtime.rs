use super::{Memory, Operation, Stack};
use crate::error;
use crate::lang::{self, Atom, Error, Node, Script, Statement};
use std::rc::Rc;
use tracing::{debug, info};

type Result<T> = std::result::Result<T, Error>;

pub const DEFAULT_CYCLE_LIMIT: usize = 1 << 24;

/// ## Events returned by [`Runtime::execute`]
#[derive(Debug, PartialEq)]
pub enum Event {
    Stopped,
    Running,
    Print(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Kind {
    Script,
    Box { conditional: bool },
    If,
    Exec,
}

#[derive(Debug)]
struct Frame {
    kind: Kind,
    children: Rc<[Node]>,
    index: usize,
    value: i64,
}

impl Frame {
    fn new(kind: Kind, children: &Rc<[Node]>) -> Frame {
        Frame {
            kind,
            children: children.clone(),
            index: 0,
            value: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Idle,
    Running,
    Ending,
}

/// ## Executor
///
/// Walks the tree with an explicit frame stack so a box can restart
/// itself forever without growing the native stack. Every step costs
/// one cycle; a run that uses up its cycle limit stops like any other
/// runtime signal.
#[derive(Debug)]
pub struct Runtime {
    memory: Memory,
    frames: Stack<Frame>,
    values: Stack<i64>,
    cycle_limit: usize,
    cycles: usize,
    state: State,
    interrupted: bool,
    halted: Option<Error>,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new(Memory::default())
    }
}

impl Runtime {
    pub fn new(memory: Memory) -> Runtime {
        Runtime {
            memory,
            frames: Stack::new("BOXES NESTED TOO DEEP"),
            values: Stack::new("EXPRESSION TOO COMPLEX"),
            cycle_limit: DEFAULT_CYCLE_LIMIT,
            cycles: 0,
            state: State::Idle,
            interrupted: false,
            halted: None,
        }
    }

    pub fn with_cycle_limit(mut self, cycle_limit: usize) -> Runtime {
        self.cycle_limit = cycle_limit;
        self
    }

    pub fn set_cycle_limit(&mut self, cycle_limit: usize) {
        self.cycle_limit = cycle_limit;
    }

    /// Validate and build `source`, then get ready to run it.
    pub fn load(&mut self, source: &str) -> Result<()> {
        let script = lang::script(source)?;
        self.enter(script);
        Ok(())
    }

    pub fn enter(&mut self, script: Script) {
        self.frames.clear();
        self.values.clear();
        self.cycles = 0;
        self.interrupted = false;
        self.halted = None;
        self.state = State::Running;
        if let Err(error) = self.frames.push(Frame::new(Kind::Script, script.children())) {
            self.halt(error);
        }
    }

    pub fn interrupt(&mut self) {
        if self.state == State::Running {
            self.interrupted = true;
        }
    }

    /// Why the last run stopped early, if it did.
    pub fn halted(&self) -> Option<&Error> {
        self.halted.as_ref()
    }

    pub fn cycles(&self) -> usize {
        self.cycles
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    pub fn into_memory(self) -> Memory {
        self.memory
    }

    /// Run for at most `cycles` steps. A finished or halted run
    /// prints one final newline and then reports `Stopped`.
    pub fn execute(&mut self, cycles: usize) -> Event {
        match self.state {
            State::Idle => return Event::Stopped,
            State::Ending => {
                self.state = State::Idle;
                return Event::Print("\n".to_string());
            }
            State::Running => {}
        }
        for _ in 0..cycles {
            match self.step() {
                Ok(Some(ch)) => return Event::Print(ch.to_string()),
                Ok(None) => {}
                Err(error) => {
                    self.halt(error);
                    return self.execute(0);
                }
            }
            if self.frames.is_empty() {
                debug!("finished after {} cycles", self.cycles);
                self.state = State::Ending;
                return self.execute(0);
            }
        }
        Event::Running
    }

    fn halt(&mut self, error: Error) {
        debug_assert!(error.is_runtime_signal(), "{}", error);
        info!("halted after {} cycles: {}", self.cycles, error);
        self.frames.clear();
        self.halted = Some(error);
        self.state = State::Ending;
    }

    fn step(&mut self) -> Result<Option<char>> {
        if self.interrupted {
            self.interrupted = false;
            return Err(error!(Interrupted));
        }
        if self.cycles >= self.cycle_limit {
            return Err(error!(CyclesExceeded));
        }
        self.cycles += 1;

        let (children, index, kind) = match self.frames.last_mut() {
            None => return Ok(None),
            Some(frame) => {
                let index = frame.index;
                frame.index += 1;
                (frame.children.clone(), index, frame.kind)
            }
        };

        let node = match children.get(index) {
            Some(node) => node,
            None => {
                if let Kind::Box { conditional: true } = kind {
                    if let Some(frame) = self.frames.last_mut() {
                        frame.index = 0;
                    }
                    return Ok(None);
                }
                let frame = self.frames.pop()?;
                let value = match frame.kind {
                    Kind::Box { .. } => 1,
                    _ => frame.value,
                };
                self.complete(frame.kind, value);
                return Ok(None);
            }
        };

        match node {
            Node::Atom(_) => Ok(None),
            Node::Line(line) => {
                let parsed = line.parsed();
                if parsed.statement == Statement::Nil {
                    return Ok(None);
                }
                let value = self.evaluate(&parsed.statement)?;
                self.complete(Kind::Exec, value);
                if parsed.output {
                    Ok(Some(Operation::character(value)?))
                } else {
                    Ok(None)
                }
            }
            Node::Box(block) => {
                let conditional = block.has_if();
                self.frames
                    .push(Frame::new(Kind::Box { conditional }, block.children()))?;
                Ok(None)
            }
            Node::If(block) => {
                self.frames.push(Frame::new(Kind::If, block.children()))?;
                Ok(None)
            }
            Node::Exec(block) => {
                self.frames.push(Frame::new(Kind::Exec, block.children()))?;
                Ok(None)
            }
        }
    }

    /// Hand a finished child's value to the frame on top. A failed if
    /// block ends its box, which then reports failure to its own parent.
    fn complete(&mut self, child: Kind, value: i64) {
        let parent = match self.frames.last_mut() {
            Some(parent) => parent,
            None => return,
        };
        if let (Kind::If, Kind::Box { .. }, 0) = (child, parent.kind, value) {
            if self.frames.pop().is_ok() {
                if let Some(outer) = self.frames.last_mut() {
                    outer.value = 0;
                }
            }
            return;
        }
        parent.value = value;
    }

    fn evaluate(&mut self, statement: &Statement) -> Result<i64> {
        match statement {
            Statement::Nil => Ok(0),
            Statement::Expression(expression) => self.expression(expression),
            Statement::Assign(address, value) => {
                let value = self.expression(value)?;
                let address = self.expression(address)?;
                self.memory.store(address, value);
                Ok(value)
            }
        }
    }

    fn expression(&mut self, postfix: &[Atom]) -> Result<i64> {
        self.values.clear();
        self.values.push(0)?;
        for atom in postfix {
            match atom {
                Atom::Number(n) => self.values.push(*n)?,
                Atom::Fetch => {
                    let address = self.values.pop()?;
                    self.values.push(self.memory.fetch(address))?;
                }
                Atom::Not => {
                    let val = self.values.pop()?;
                    self.values.push(Operation::not(val))?;
                }
                op if op.is_operator() => {
                    let (lhs, rhs) = self.values.pop_2()?;
                    self.values.push(Operation::binary(*op, lhs, rhs)?)?;
                }
                _ => {}
            }
        }
        self.values.pop()
    }
}
