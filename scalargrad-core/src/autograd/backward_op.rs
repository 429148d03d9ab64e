use crate::graph::Graph;
use crate::node::{NodeId, Provenance};

/// Applies the local gradient rule of node `id`.
///
/// Reads the node's current gradient `g` and adds each operand's share into that
/// operand's accumulator. Contributions are always added, never assigned, so a
/// node consumed several times sums every path. Leaves are a no-op.
///
/// | provenance   | contribution                     |
/// |--------------|----------------------------------|
/// | `Add(a, b)`  | `a += g`, `b += g`               |
/// | `Mul(a, b)`  | `a += b * g`, `b += a * g`       |
/// | `Pow(a, k)`  | `a += k * a^(k-1) * g`           |
/// | `Tanh(a)`    | `a += (1 - out^2) * g`           |
/// | `Exp(a)`     | `a += out * g`                   |
/// | `Log(a)`     | `a += g / a`                     |
/// | `Relu(a)`    | `a += (a > 0 ? 1 : 0) * g`       |
pub(crate) fn local_backward(graph: &Graph, id: NodeId) {
    let provenance = graph.provenance_of(id);
    let g = graph.grad_of(id);
    let out = graph.value_of(id);

    match provenance {
        Provenance::Leaf => {}
        Provenance::Add(a, b) => {
            graph.accumulate_grad(a, g);
            graph.accumulate_grad(b, g);
        }
        Provenance::Mul(a, b) => {
            let a_value = graph.value_of(a);
            let b_value = graph.value_of(b);
            graph.accumulate_grad(a, b_value * g);
            graph.accumulate_grad(b, a_value * g);
        }
        Provenance::Pow(a, k) => {
            let a_value = graph.value_of(a);
            graph.accumulate_grad(a, k * a_value.powf(k - 1.0) * g);
        }
        Provenance::Tanh(a) => {
            graph.accumulate_grad(a, (1.0 - out * out) * g);
        }
        Provenance::Exp(a) => {
            graph.accumulate_grad(a, out * g);
        }
        Provenance::Log(a) => {
            let a_value = graph.value_of(a);
            graph.accumulate_grad(a, g / a_value);
        }
        Provenance::Relu(a) => {
            let mask = if graph.value_of(a) > 0.0 { 1.0 } else { 0.0 };
            graph.accumulate_grad(a, mask * g);
        }
    }
}
