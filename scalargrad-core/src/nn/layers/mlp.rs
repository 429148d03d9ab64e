use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::layers::layer::{BoundLayer, Layer};
use crate::nn::layers::neuron::Activation;
use crate::nn::module::{BoundModule, Module};
use crate::value::Value;
use rand::Rng;

/// Multi-layer perceptron: layers applied in sequence.
///
/// Every layer uses `tanh`, the output layer included, unless the model is
/// assembled with [`Mlp::from_layers`].
#[derive(Debug, Clone, PartialEq)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Creates an MLP taking `nin` inputs with one layer per entry of `nouts`.
    ///
    /// # Errors
    /// `InvalidArchitecture` if `nouts` is empty or contains a zero width.
    pub fn new<R: Rng + ?Sized>(
        nin: usize,
        nouts: &[usize],
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        let activations = vec![Activation::Tanh; nouts.len()];
        Mlp::with_activations(nin, nouts, &activations, rng)
    }

    /// Like [`Mlp::new`] with one activation per layer.
    pub fn with_activations<R: Rng + ?Sized>(
        nin: usize,
        nouts: &[usize],
        activations: &[Activation],
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if nouts.is_empty() {
            return Err(ScalarGradError::InvalidArchitecture(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        if nouts.contains(&0) {
            return Err(ScalarGradError::InvalidArchitecture(format!(
                "layer widths must be positive, got {:?}",
                nouts
            )));
        }
        if activations.len() != nouts.len() {
            return Err(ScalarGradError::ShapeMismatch {
                expected: nouts.len(),
                actual: activations.len(),
                operation: "Mlp::with_activations".to_string(),
            });
        }

        let mut sizes = Vec::with_capacity(nouts.len() + 1);
        sizes.push(nin);
        sizes.extend_from_slice(nouts);
        let layers = sizes
            .windows(2)
            .zip(activations)
            .map(|(pair, &activation)| Layer::new(pair[0], pair[1], activation, rng))
            .collect();
        Ok(Mlp { layers })
    }

    /// Chains existing layers; each layer's fan-in must equal the previous width.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self, ScalarGradError> {
        if layers.is_empty() {
            return Err(ScalarGradError::InvalidArchitecture(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        for pair in layers.windows(2) {
            if pair[1].nin() != pair[0].nout() {
                return Err(ScalarGradError::ShapeMismatch {
                    expected: pair[0].nout(),
                    actual: pair[1].nin(),
                    operation: "Mlp::from_layers".to_string(),
                });
            }
        }
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl Module for Mlp {
    type Bound<'g> = BoundMlp<'g>;

    fn bind<'g>(&self, graph: &'g Graph) -> BoundMlp<'g> {
        BoundMlp {
            layers: self.layers.iter().map(|l| l.bind(graph)).collect(),
        }
    }

    fn parameters(&self) -> Vec<f64> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn parameters_mut(&mut self) -> Vec<&mut f64> {
        self.layers
            .iter_mut()
            .flat_map(|l| l.parameters_mut())
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct BoundMlp<'g> {
    layers: Vec<BoundLayer<'g>>,
}

impl<'g> BoundMlp<'g> {
    /// Runs every layer in order and returns the last layer's outputs.
    pub fn forward(&self, inputs: &[Value<'g>]) -> Result<Vec<Value<'g>>, ScalarGradError> {
        let mut x = inputs.to_vec();
        for layer in &self.layers {
            x = layer.forward(&x)?;
        }
        Ok(x)
    }
}

impl<'g> BoundModule<'g> for BoundMlp<'g> {
    fn parameters(&self) -> Vec<Value<'g>> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }
}
