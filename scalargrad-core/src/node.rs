//! Node records stored in the [`Graph`](crate::graph::Graph) arena.

use std::fmt;

/// Stable identifier of a node: its index in the owning arena.
///
/// Identity (not value) is what the backward pass deduplicates on, so two
/// leaves holding the same number are still two distinct nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Returns the raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Operator tag exposed for introspection.
///
/// `Pow` carries its constant exponent so that traces can print `**k`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    Leaf,
    Add,
    Mul,
    Pow(f64),
    Tanh,
    Exp,
    Log,
    Relu,
}

impl Op {
    /// Number of operands an operation of this kind consumes.
    pub fn arity(self) -> usize {
        match self {
            Op::Leaf => 0,
            Op::Add | Op::Mul => 2,
            Op::Pow(_) | Op::Tanh | Op::Exp | Op::Log | Op::Relu => 1,
        }
    }

    pub fn is_leaf(self) -> bool {
        self == Op::Leaf
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Leaf => Ok(()),
            Op::Add => write!(f, "+"),
            Op::Mul => write!(f, "*"),
            Op::Pow(k) => write!(f, "**{}", k),
            Op::Tanh => write!(f, "tanh"),
            Op::Exp => write!(f, "exp"),
            Op::Log => write!(f, "log"),
            Op::Relu => write!(f, "ReLU"),
        }
    }
}

/// How a node was produced: the operator plus the ids of its operands.
///
/// The backward pass matches on this directly, so each variant holds exactly
/// the operands its gradient rule reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Provenance {
    Leaf,
    Add(NodeId, NodeId),
    Mul(NodeId, NodeId),
    Pow(NodeId, f64),
    Tanh(NodeId),
    Exp(NodeId),
    Log(NodeId),
    Relu(NodeId),
}

impl Provenance {
    pub(crate) fn op(&self) -> Op {
        match *self {
            Provenance::Leaf => Op::Leaf,
            Provenance::Add(..) => Op::Add,
            Provenance::Mul(..) => Op::Mul,
            Provenance::Pow(_, k) => Op::Pow(k),
            Provenance::Tanh(_) => Op::Tanh,
            Provenance::Exp(_) => Op::Exp,
            Provenance::Log(_) => Op::Log,
            Provenance::Relu(_) => Op::Relu,
        }
    }

    /// Operand ids in construction order. A node used twice (`a * a`) is listed twice.
    pub(crate) fn operands(&self) -> Vec<NodeId> {
        match *self {
            Provenance::Leaf => Vec::new(),
            Provenance::Add(a, b) | Provenance::Mul(a, b) => vec![a, b],
            Provenance::Pow(a, _)
            | Provenance::Tanh(a)
            | Provenance::Exp(a)
            | Provenance::Log(a)
            | Provenance::Relu(a) => vec![a],
        }
    }
}

/// One scalar in the computation graph.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    /// Forward value; fixed at construction.
    pub(crate) value: f64,
    /// Gradient accumulator, written only by backward passes and resets.
    pub(crate) grad: f64,
    pub(crate) provenance: Provenance,
    pub(crate) label: Option<String>,
}

impl Node {
    pub(crate) fn new(value: f64, provenance: Provenance) -> Self {
        Node {
            value,
            grad: 0.0,
            provenance,
            label: None,
        }
    }

    pub(crate) fn leaf(value: f64, label: Option<String>) -> Self {
        Node {
            value,
            grad: 0.0,
            provenance: Provenance::Leaf,
            label,
        }
    }
}
