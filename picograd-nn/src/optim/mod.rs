// src/optim/mod.rs

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::Sgd;
