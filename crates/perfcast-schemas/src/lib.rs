//! Schema definitions for perfcast data formats.
//!
//! This crate contains the data structures shared across the perfcast
//! pipeline: the hardware description record that models consume and the
//! symbolic cost expression they produce. Both are serialized as JSON at
//! the pipeline boundaries.
//!
//! The schemas are designed to be:
//! - **Externally owned**: hardware descriptions are produced by the
//!   microbenchmark harness, never by this pipeline
//! - **Opaque on output**: cost expressions are carried unevaluated until
//!   a concrete problem size is substituted downstream
//! - **Shared**: used by every model and by the CLI, so the serialization
//!   contract is defined exactly once

mod cost_expr;
mod hardware;
#[cfg(test)]
mod testutil;

#[doc(inline)]
pub use cost_expr::*;
#[doc(inline)]
pub use hardware::*;
