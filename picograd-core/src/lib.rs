//! # picograd-core
//!
//! A minimal reverse-mode automatic differentiation engine over scalar
//! values. Expressions built from [`Value`] operations form a dynamically
//! constructed computation graph (forward pass = graph construction);
//! calling [`Value::backward`] on a root runs one deterministic reverse
//! sweep that accumulates exact partial derivatives into every ancestor.

// Declare the main modules of the crate
pub mod autograd;
pub mod ops;
pub mod value;
pub mod value_data;

// Re-export the handle type so it is reachable as `picograd_core::Value`
pub use value::Value;

pub mod error;
pub use error::PicoGradError;
