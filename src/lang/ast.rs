use super::{Atom, Error, Line};
use std::rc::Rc;

/// ## Tree of boxes and lines
///
/// Containers share their children through `Rc<[Node]>` so the executor
/// can hold on to a block while it walks it without borrowing the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Atom(Atom),
    Line(Line),
    Box(Block),
    If(Block),
    Exec(Block),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    children: Rc<[Node]>,
}

impl Block {
    pub fn new(children: Vec<Node>) -> Block {
        Block {
            children: children.into(),
        }
    }

    pub fn children(&self) -> &Rc<[Node]> {
        &self.children
    }

    /// A box holding an if block loops; one without runs once.
    pub fn has_if(&self) -> bool {
        self.children.iter().any(|node| matches!(node, Node::If(_)))
    }
}

/// Root of a built program. Top level lines never survive construction,
/// so the children are boxes (and whatever stray atoms preceded them).
#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    children: Rc<[Node]>,
}

impl Script {
    pub fn new(children: Vec<Node>) -> Script {
        Script {
            children: children.into(),
        }
    }

    pub fn children(&self) -> &Rc<[Node]> {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn lines(&self) -> Vec<&Line> {
        let mut lines = vec![];
        collect_lines(&self.children, &mut lines);
        lines
    }

    pub fn check(&self) -> Vec<Error> {
        self.lines().iter().flat_map(|line| line.check()).collect()
    }
}

impl Default for Script {
    fn default() -> Self {
        Script::new(vec![])
    }
}

fn collect_lines<'a>(nodes: &'a [Node], lines: &mut Vec<&'a Line>) {
    for node in nodes {
        match node {
            Node::Line(line) => lines.push(line),
            Node::Box(block) | Node::If(block) | Node::Exec(block) => {
                collect_lines(block.children(), lines)
            }
            Node::Atom(_) => {}
        }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        fn write_block(
            f: &mut std::fmt::Formatter,
            name: &str,
            block: &Block,
        ) -> std::fmt::Result {
            write!(f, "{}[", name)?;
            for (i, child) in block.children().iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", child)?;
            }
            write!(f, "]")
        }
        match self {
            Node::Atom(atom) => write!(f, "{}", atom),
            Node::Line(line) => write!(f, "{}", line),
            Node::Box(block) => write_block(f, "BOX", block),
            Node::If(block) => write_block(f, "IF", block),
            Node::Exec(block) => write_block(f, "EXEC", block),
        }
    }
}

impl std::fmt::Display for Script {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for child in self.children.iter() {
            writeln!(f, "{}", child)?;
        }
        Ok(())
    }
}
