use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::layers::neuron::{Activation, BoundNeuron, Neuron};
use crate::nn::module::{BoundModule, Module};
use crate::value::Value;
use rand::Rng;

/// A fully connected layer: `nout` neurons sharing the same `nin` inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(
        nin: usize,
        nout: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Self {
        Layer {
            neurons: (0..nout).map(|_| Neuron::new(nin, activation, rng)).collect(),
        }
    }

    /// Builds a layer from existing neurons, which must all share the same fan-in.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, ScalarGradError> {
        let Some(first) = neurons.first() else {
            return Err(ScalarGradError::InvalidArchitecture(
                "a layer needs at least one neuron".to_string(),
            ));
        };
        let nin = first.nin();
        if let Some(odd) = neurons.iter().find(|n| n.nin() != nin) {
            return Err(ScalarGradError::ShapeMismatch {
                expected: nin,
                actual: odd.nin(),
                operation: "Layer::from_neurons".to_string(),
            });
        }
        Ok(Layer { neurons })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    /// Fan-in shared by every neuron; 0 for an empty layer.
    pub fn nin(&self) -> usize {
        self.neurons.first().map_or(0, Neuron::nin)
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    type Bound<'g> = BoundLayer<'g>;

    fn bind<'g>(&self, graph: &'g Graph) -> BoundLayer<'g> {
        BoundLayer {
            neurons: self.neurons.iter().map(|n| n.bind(graph)).collect(),
        }
    }

    fn parameters(&self) -> Vec<f64> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn parameters_mut(&mut self) -> Vec<&mut f64> {
        self.neurons
            .iter_mut()
            .flat_map(|n| n.parameters_mut())
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct BoundLayer<'g> {
    neurons: Vec<BoundNeuron<'g>>,
}

impl<'g> BoundLayer<'g> {
    /// One output per neuron.
    pub fn forward(&self, inputs: &[Value<'g>]) -> Result<Vec<Value<'g>>, ScalarGradError> {
        self.neurons.iter().map(|n| n.forward(inputs)).collect()
    }
}

impl<'g> BoundModule<'g> for BoundLayer<'g> {
    fn parameters(&self) -> Vec<Value<'g>> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }
}
