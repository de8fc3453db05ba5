use picograd_core::Value;
use rand::Rng;

/// Draws one trainable leaf node uniformly from [-1, 1].
///
/// The generator is caller-supplied so tests can seed it (`StdRng`) and
/// applications can share one source of randomness across a model.
pub fn uniform_param<R: Rng + ?Sized>(rng: &mut R) -> Value {
    Value::new(rng.gen_range(-1.0..=1.0))
}

/// Draws `n` independent uniform [-1, 1] leaf nodes.
pub fn uniform_params<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Value> {
    (0..n).map(|_| uniform_param(rng)).collect()
}
