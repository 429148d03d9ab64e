use crate::node::{Node, Provenance};
use crate::value::Value;

/// Negates a node, built as `a * -1` with `-1` as a fresh constant leaf.
pub fn neg_op(a: Value<'_>) -> Value<'_> {
    let graph = a.graph();
    let minus_one = graph.leaf(-1.0);
    let id = graph.push(Node::new(
        -a.value(),
        Provenance::Mul(a.id(), minus_one.id()),
    ));
    Value::new(graph, id)
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
