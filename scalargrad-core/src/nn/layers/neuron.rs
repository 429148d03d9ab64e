use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::init::uniform_symmetric;
use crate::nn::module::{BoundModule, Module};
use crate::ops::arithmetic::{add_op, mul_op};
use crate::value::Value;
use rand::Rng;

/// Non-linearity applied to a neuron's weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Tanh,
    Relu,
    /// Identity: the weighted sum is returned as is.
    Linear,
}

impl Activation {
    pub fn apply(self, x: Value<'_>) -> Value<'_> {
        match self {
            Activation::Tanh => x.tanh(),
            Activation::Relu => x.relu(),
            Activation::Linear => x,
        }
    }
}

/// A single unit computing `activation(b + Σ wᵢ·xᵢ)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    weights: Vec<f64>,
    bias: f64,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `nin` inputs, weights and bias drawn from `[-1, 1)`.
    pub fn new<R: Rng + ?Sized>(nin: usize, activation: Activation, rng: &mut R) -> Self {
        let weights = uniform_symmetric(nin, rng);
        let bias = uniform_symmetric(1, rng)[0];
        Neuron {
            weights,
            bias,
            activation,
        }
    }

    /// Creates a neuron with explicit parameters.
    pub fn from_parameters(weights: Vec<f64>, bias: f64, activation: Activation) -> Self {
        Neuron {
            weights,
            bias,
            activation,
        }
    }

    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }
}

impl Module for Neuron {
    type Bound<'g> = BoundNeuron<'g>;

    fn bind<'g>(&self, graph: &'g Graph) -> BoundNeuron<'g> {
        BoundNeuron {
            weights: self.weights.iter().map(|&w| graph.leaf(w)).collect(),
            bias: graph.leaf(self.bias),
            activation: self.activation,
        }
    }

    /// Weights first, then the bias.
    fn parameters(&self) -> Vec<f64> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }

    fn parameters_mut(&mut self) -> Vec<&mut f64> {
        let mut params: Vec<&mut f64> = self.weights.iter_mut().collect();
        params.push(&mut self.bias);
        params
    }
}

/// A [`Neuron`] whose parameters are leaves of one graph.
#[derive(Debug, Clone)]
pub struct BoundNeuron<'g> {
    weights: Vec<Value<'g>>,
    bias: Value<'g>,
    activation: Activation,
}

impl<'g> BoundNeuron<'g> {
    /// Builds `activation(b + Σ wᵢ·xᵢ)` in the neuron's graph.
    ///
    /// # Errors
    /// - `ShapeMismatch` if `inputs.len()` differs from the number of weights.
    /// - `ForeignNode` if an input lives in another graph.
    pub fn forward(&self, inputs: &[Value<'g>]) -> Result<Value<'g>, ScalarGradError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarGradError::ShapeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron::forward".to_string(),
            });
        }
        let mut act = self.bias;
        for (&w, &x) in self.weights.iter().zip(inputs) {
            act = add_op(act, mul_op(w, x)?)?;
        }
        Ok(self.activation.apply(act))
    }
}

impl<'g> BoundModule<'g> for BoundNeuron<'g> {
    fn parameters(&self) -> Vec<Value<'g>> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }
}
