//! Attenuation Engine
//!
//! Pure computation mapping an ordered stack of tissue layers to a
//! depth-resolved light-intensity profile. For each layer the engine derives
//! a total attenuation coefficient from the layer's optical properties and
//! evaluates an exponential decay over a fixed number of depth samples.
//!
//! The profile is *not* globally normalized: the exponent is taken relative
//! to each layer's own entry depth, so intensity restarts at 1.0 at the
//! first sample of every layer. This matches the reference behavior and is
//! deliberately reproduced rather than replaced with a cumulative model.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{OctError, Result};

/// Number of depth samples generated for each layer
pub const SAMPLES_PER_LAYER: usize = 100;

// ============================================================================
// Data Model
// ============================================================================

/// A single tissue layer with its optical properties
///
/// All fields are plain numbers with no range enforcement in the engine;
/// a UI may suggest ranges (e.g. thickness 0.1-5 mm) but the computation
/// accepts whatever it is given, including zero or negative coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Thickness in mm
    pub thickness: f64,
    /// Absorption coefficient μa in mm⁻¹
    pub absorption_coeff: f64,
    /// Scattering coefficient μs in mm⁻¹
    pub scattering_coeff: f64,
    /// Scattering anisotropy g (dimensionless, conventionally in [0, 1])
    pub anisotropy: f64,
}

impl Layer {
    /// Reduced scattering coefficient μs' = μs · (1 − g)
    pub fn reduced_scattering(&self) -> f64 {
        self.scattering_coeff * (1.0 - self.anisotropy)
    }

    /// Total attenuation coefficient μ_total = μa + μs'
    ///
    /// Governs the exponential decay rate within the layer.
    pub fn total_attenuation(&self) -> f64 {
        self.absorption_coeff + self.reduced_scattering()
    }
}

/// Ordered stack of layers, traversed from the surface downward
pub type LayerStack = Vec<Layer>;

/// Paired depth (mm) and relative intensity sequences
///
/// `depth[i]` pairs with `intensity[i]`; both have length
/// `SAMPLES_PER_LAYER * number_of_layers`. Depth is non-decreasing across
/// the stack and strictly increasing within a layer of positive thickness.
/// Intensity is relative to the enclosing layer's entry depth (see the
/// module docs for the per-layer reset).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub depth: Vec<f64>,
    pub intensity: Vec<f64>,
}

impl SimulationResult {
    /// Number of (depth, intensity) sample pairs
    pub fn len(&self) -> usize {
        self.depth.len()
    }

    /// Check if the result holds no samples
    pub fn is_empty(&self) -> bool {
        self.depth.is_empty()
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// `n` evenly spaced values over the closed interval `[start, stop]`
///
/// Both endpoints are produced exactly. With `n == 1` the single value is
/// `start`; a degenerate interval (`start == stop`) yields `n` coincident
/// values rather than failing.
fn linspace(start: f64, stop: f64, n: usize) -> impl Iterator<Item = f64> {
    let span = stop - start;
    let div = (n.max(2) - 1) as f64;
    (0..n).map(move |i| start + span * (i as f64 / div))
}

// ============================================================================
// Simulation
// ============================================================================

/// Simulate cumulative light attenuation through a layer stack
///
/// For each layer, in stack order, generates [`SAMPLES_PER_LAYER`] evenly
/// spaced depth samples across the layer and the matching intensities
/// `I(d) = exp(-μ_total · (d - layer_start))`.
///
/// `wavelength` (nm) is part of the public contract and is accepted for
/// every call, but the attenuation formula does not consume it - a
/// documented limitation, kept as an explicit no-op input because the
/// external interface depends on it being accepted.
///
/// # Arguments
/// * `layers` - Non-empty ordered stack, surface first
/// * `wavelength` - Nominal wavelength in nm, informational only
///
/// # Returns
/// Index-aligned depth/intensity sequences of length
/// `SAMPLES_PER_LAYER * layers.len()`
///
/// # Errors
/// `OctError::InvalidInput` if `layers` is empty
pub fn simulate(layers: &[Layer], wavelength: u32) -> Result<SimulationResult> {
    if layers.is_empty() {
        return Err(OctError::invalid_input("No layers provided"));
    }

    debug!(
        layers = layers.len(),
        wavelength, "running attenuation simulation"
    );

    let mut depth = Vec::with_capacity(layers.len() * SAMPLES_PER_LAYER);
    let mut intensity = Vec::with_capacity(layers.len() * SAMPLES_PER_LAYER);
    let mut current_depth = 0.0_f64;

    for layer in layers {
        let mu_total = layer.total_attenuation();

        for d in linspace(
            current_depth,
            current_depth + layer.thickness,
            SAMPLES_PER_LAYER,
        ) {
            depth.push(d);
            intensity.push((-mu_total * (d - current_depth)).exp());
        }

        current_depth += layer.thickness;
    }

    Ok(SimulationResult { depth, intensity })
}
