use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// Draws `n` values uniformly from `[-1, 1)`.
///
/// This is the initialisation used for every weight and bias of a
/// [`Neuron`](crate::nn::layers::Neuron).
pub fn uniform_symmetric<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<f64> {
    let between = Uniform::new(-1.0, 1.0);
    (0..n).map(|_| between.sample(rng)).collect()
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
