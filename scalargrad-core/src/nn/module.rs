use crate::graph::Graph;
use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers, containers).
///
/// A module owns its learnable parameters as plain `f64`s. To run it, bind it to
/// a [`Graph`]: binding creates one leaf per parameter and returns a
/// [`BoundModule`] whose forward pass builds nodes in that graph. After a
/// backward pass the bound leaves hold the gradients, which an optimizer such as
/// [`sgd_step`](crate::nn::optim::sgd_step) writes back into the module.
pub trait Module {
    /// The module as it appears inside one graph.
    type Bound<'g>: BoundModule<'g>;

    /// Creates leaves for every parameter in `graph`.
    fn bind<'g>(&self, graph: &'g Graph) -> Self::Bound<'g>;

    /// Current parameter values, in a fixed order.
    fn parameters(&self) -> Vec<f64>;

    /// Mutable access to the parameters, in the same order as [`Module::parameters`].
    fn parameters_mut(&mut self) -> Vec<&mut f64>;

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}

/// A module bound to a graph: its parameters are leaves of that graph.
pub trait BoundModule<'g> {
    /// Parameter leaves, in the same order as [`Module::parameters`].
    fn parameters(&self) -> Vec<Value<'g>>;

    /// Resets the gradient of every parameter leaf to 0.
    fn zero_grad(&self) {
        for p in self.parameters() {
            p.zero_grad();
        }
    }
}
