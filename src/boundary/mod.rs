//! Shell-facing request/response contracts
//!
//! The HTTP shell itself is an external collaborator; this module defines
//! the JSON bodies it exchanges and the handlers it invokes. Presence and
//! shape validation live here (and only here) - the engine stays permissive
//! about coefficient values.
//!
//! Error reporting follows the shell's convention: any failure, whether bad
//! input or a pipeline fault, becomes an [`ErrorResponse`] carrying the raw
//! error text, and the shell signals it with a client-error status.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{OctError, Result};
use crate::plot;
use crate::sim::{self, Layer, SimulationResult};

/// Wavelength (nm) assumed when a request omits the field
const DEFAULT_WAVELENGTH: u32 = 800;

fn default_wavelength() -> u32 {
    DEFAULT_WAVELENGTH
}

// ============================================================================
// Request / Response Bodies
// ============================================================================

/// Body of a simulation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulateRequest {
    /// Tissue layers, surface first; an absent key behaves like an empty stack
    #[serde(default)]
    pub layers: Vec<Layer>,
    /// Nominal wavelength in nm, informational only
    #[serde(default = "default_wavelength")]
    pub wavelength: u32,
}

/// Body of a successful simulation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulateResponse {
    pub depth: Vec<f64>,
    pub intensity: Vec<f64>,
}

impl From<SimulationResult> for SimulateResponse {
    fn from(result: SimulationResult) -> Self {
        Self {
            depth: result.depth,
            intensity: result.intensity,
        }
    }
}

/// Body of a plot request, typically a simulate response fed back in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotRequest {
    #[serde(default)]
    pub depth: Vec<f64>,
    #[serde(default)]
    pub intensity: Vec<f64>,
}

/// Body of a successful plot response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotResponse {
    /// `data:image/png;base64,` encoded line chart
    pub plot: String,
}

/// Error body returned for any failed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&OctError> for ErrorResponse {
    fn from(err: &OctError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Handle a simulation request
///
/// Delegates to [`sim::simulate`]; an empty or absent layer stack surfaces
/// as an invalid-input error the shell reports verbatim.
pub fn handle_simulate(req: SimulateRequest) -> Result<SimulateResponse> {
    debug!(
        layers = req.layers.len(),
        wavelength = req.wavelength,
        "simulate request"
    );
    let result = sim::simulate(&req.layers, req.wavelength)?;
    Ok(result.into())
}

/// Handle a plot request
///
/// Returns the rendered chart as a data-URI string ready to embed in the
/// response body.
pub fn handle_plot(req: PlotRequest) -> Result<PlotResponse> {
    debug!(samples = req.depth.len(), "plot request");
    let plot = plot::plot_data_uri(&req.depth, &req.intensity)?;
    Ok(PlotResponse { plot })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wavelength_defaults_to_800() {
        let req: SimulateRequest =
            serde_json::from_str(r#"{"layers": []}"#).unwrap();
        assert_eq!(req.wavelength, 800);
    }

    #[test]
    fn test_absent_layers_key_behaves_like_empty_stack() {
        let req: SimulateRequest = serde_json::from_str(r#"{"wavelength": 650}"#).unwrap();
        let err = handle_simulate(req).unwrap_err();
        assert_eq!(err.to_string(), "No layers provided");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_error_response_carries_raw_message() {
        let err = OctError::invalid_input("No layers provided");
        let body = ErrorResponse::from(&err);
        assert_eq!(body.error, "No layers provided");
    }

    #[test]
    fn test_non_numeric_field_fails_deserialization() {
        let raw = r#"{"layers": [{"thickness": "thick", "absorption_coeff": 0.1,
                       "scattering_coeff": 10.0, "anisotropy": 0.9}]}"#;
        let parsed: std::result::Result<SimulateRequest, _> = serde_json::from_str(raw);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_missing_layer_field_fails_deserialization() {
        let raw = r#"{"layers": [{"thickness": 1.0, "absorption_coeff": 0.1,
                       "scattering_coeff": 10.0}]}"#;
        let parsed: std::result::Result<SimulateRequest, _> = serde_json::from_str(raw);
        assert!(parsed.is_err());
    }
}
