//! Octsim - Layered Tissue Light Attenuation Simulator
//!
//! Octsim computes a simplified depth-resolved intensity profile for a stack
//! of tissue layers, the kind of curve used to illustrate optical coherence
//! tomography concepts. It is split into two pieces:
//! 1. Attenuation Engine - a pure function mapping a layer stack to paired
//!    depth/intensity sequences (`sim::simulate`)
//! 2. Presentation contracts - the JSON request/response shapes an HTTP shell
//!    exchanges, plus a chart renderer that rasterizes a result as a PNG
//!    data URI (`boundary`, `plot`)
//!
//! # Architecture
//!
//! The engine is stateless and side-effect free; every invocation owns its
//! accumulators and output buffers. Validation of request shape happens only
//! at the boundary - the engine itself accepts any numeric coefficients.

pub mod boundary;
pub mod error;
pub mod plot;
pub mod sim;

pub use error::{OctError, Result};
pub use sim::{simulate, Layer, LayerStack, SimulationResult};
