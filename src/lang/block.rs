use super::ast::{Block, Node, Script};
use super::{Atom, Error, Line};
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

/// Frames closed by each end marker. Ending an exec or if block also
/// closes the line left open inside it.
const CLOSES: &[(Atom, usize)] = &[(Atom::BoxEnd, 1), (Atom::ExecEnd, 2), (Atom::IfEnd, 2)];

fn frames_to_close(atom: Atom) -> usize {
    CLOSES
        .iter()
        .find(|(marker, _)| *marker == atom)
        .map(|(_, frames)| *frames)
        .unwrap_or(0)
}

/// Rebuild the tree of boxes from a flat atom stream.
pub fn build(atoms: &[Atom]) -> Result<Script> {
    let mut builder = Builder::default();
    for (col, &atom) in atoms.iter().enumerate() {
        if let Err(error) = builder.atom(atom) {
            return Err(error.in_column(&(col..col + 1)));
        }
    }
    let script = builder.finish(atoms.len())?;
    debug!("built script of {} lines", script.lines().len());
    Ok(script)
}

#[derive(Debug)]
enum Frame {
    Line(usize, Vec<Atom>),
    Box(Vec<Node>),
    If(Vec<Node>),
    Exec(Vec<Node>),
}

impl Frame {
    fn push_atom(&mut self, atom: Atom) {
        match self {
            Frame::Line(_, atoms) => atoms.push(atom),
            Frame::Box(nodes) | Frame::If(nodes) | Frame::Exec(nodes) => {
                nodes.push(Node::Atom(atom))
            }
        }
    }

    fn push_node(&mut self, node: Node) -> Result<()> {
        match self {
            Frame::Line(..) => Err(error!(UnbalancedBlock; "BLOCK INSIDE LINE")),
            Frame::Box(nodes) | Frame::If(nodes) | Frame::Exec(nodes) => {
                nodes.push(node);
                Ok(())
            }
        }
    }

    fn into_node(self) -> Node {
        match self {
            Frame::Line(number, atoms) => Node::Line(Line::new(number, atoms)),
            Frame::Box(nodes) => Node::Box(Block::new(nodes)),
            Frame::If(nodes) => Node::If(Block::new(nodes)),
            Frame::Exec(nodes) => Node::Exec(Block::new(nodes)),
        }
    }
}

/// Open frames live on an explicit stack above the root. A frame becomes
/// a child of the frame below it when it is closed.
#[derive(Debug, Default)]
struct Builder {
    root: Vec<Node>,
    stack: Vec<Frame>,
    lines: usize,
}

impl Builder {
    fn atom(&mut self, atom: Atom) -> Result<()> {
        match atom {
            Atom::BoxStart => {
                if self.line_is_open() {
                    self.close(1)?;
                }
                self.stack.push(Frame::Box(vec![]));
            }
            Atom::IfStart => self.open(Frame::If(vec![]))?,
            Atom::ExecStart => self.open(Frame::Exec(vec![]))?,
            Atom::BoxEnd | Atom::IfEnd | Atom::ExecEnd => self.close(frames_to_close(atom))?,
            Atom::Newline => {
                if self.line_is_open() {
                    self.close(1)?;
                }
                self.stack.push(Frame::Line(self.lines, vec![]));
                self.lines += 1;
            }
            _ => match self.stack.last_mut() {
                Some(frame) => frame.push_atom(atom),
                None => self.root.push(Node::Atom(atom)),
            },
        }
        Ok(())
    }

    fn line_is_open(&self) -> bool {
        matches!(self.stack.last(), Some(Frame::Line(..)))
    }

    fn open(&mut self, frame: Frame) -> Result<()> {
        if self.line_is_open() {
            return Err(error!(UnbalancedBlock; "BLOCK INSIDE LINE"));
        }
        self.stack.push(frame);
        Ok(())
    }

    fn close(&mut self, frames: usize) -> Result<()> {
        for _ in 0..frames {
            let node = match self.stack.pop() {
                Some(frame) => frame.into_node(),
                None => return Err(error!(UnbalancedBlock; "NOTHING TO CLOSE")),
            };
            match self.stack.last_mut() {
                Some(parent) => parent.push_node(node)?,
                None => self.root.push(node),
            }
        }
        Ok(())
    }

    fn finish(mut self, len: usize) -> Result<Script> {
        while self.line_is_open() {
            self.close(1)?;
        }
        if !self.stack.is_empty() {
            return Err(error!(UnbalancedBlock, ..&(len..len); "UNCLOSED BLOCK"));
        }
        let children = self
            .root
            .into_iter()
            .filter(|node| !matches!(node, Node::Line(_)))
            .collect();
        Ok(Script::new(children))
    }
}
