//! Operation vocabulary and the graph produced by compilation.

pub mod arena;
pub mod fingerprint;
pub mod ops;
pub mod plan;
