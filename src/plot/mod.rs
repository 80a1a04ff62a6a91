//! Chart rendering
//!
//! Rasterizes a (depth, intensity) pair as a PNG line chart with labeled
//! axes, title, legend, and grid. The renderer carries no domain logic; it
//! exists so a shell can return the simulation as an embeddable image.
//!
//! Every render owns its frame buffer for the duration of the call. The
//! drawing backend is created on that buffer, presented, and dropped before
//! the PNG is encoded, so concurrent renders never share canvas state.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::{codecs::png::PngEncoder, ExtendedColorType, ImageEncoder};
use plotters::prelude::*;
use tracing::debug;

use crate::error::{OctError, Result};

/// Rendered chart width in pixels
const CHART_WIDTH: u32 = 800;

/// Rendered chart height in pixels
const CHART_HEIGHT: u32 = 500;

/// Map any drawing-layer failure onto the render error class
fn render_err<E: std::fmt::Display>(e: E) -> OctError {
    OctError::Render {
        reason: e.to_string(),
    }
}

/// Axis bounds for a value sequence, padded when the span is degenerate
fn axis_range(values: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if min == max {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    }
}

/// Render a depth/intensity line chart as PNG bytes
///
/// # Arguments
/// * `depth` - x values in mm
/// * `intensity` - y values, index-aligned with `depth`
///
/// # Errors
/// `OctError::InvalidInput` if either sequence is empty or the lengths
/// differ; `OctError::Render` if the drawing backend fails.
pub fn render_plot(depth: &[f64], intensity: &[f64]) -> Result<Vec<u8>> {
    if depth.is_empty() || intensity.is_empty() {
        return Err(OctError::invalid_input(
            "Depth and Intensity data are required",
        ));
    }
    if depth.len() != intensity.len() {
        return Err(OctError::invalid_input(format!(
            "Depth and Intensity must have the same length ({} vs {})",
            depth.len(),
            intensity.len()
        )));
    }

    let (x_min, x_max) = axis_range(depth);
    let (y_min, y_max) = axis_range(intensity);

    let mut frame = vec![0u8; (CHART_WIDTH * CHART_HEIGHT * 3) as usize];
    {
        let root =
            BitMapBackend::with_buffer(&mut frame, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("OCT Simulation Results", ("sans-serif", 28))
            .margin(10)
            .x_label_area_size(45)
            .y_label_area_size(55)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(render_err)?;

        chart
            .configure_mesh()
            .x_desc("Depth (mm)")
            .y_desc("Intensity")
            .draw()
            .map_err(render_err)?;

        chart
            .draw_series(LineSeries::new(
                depth.iter().copied().zip(intensity.iter().copied()),
                &BLUE,
            ))
            .map_err(render_err)?
            .label("Intensity vs Depth")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

        chart
            .configure_series_labels()
            .border_style(&BLACK)
            .background_style(&WHITE.mix(0.8))
            .draw()
            .map_err(render_err)?;

        root.present().map_err(render_err)?;
    }

    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(&frame, CHART_WIDTH, CHART_HEIGHT, ExtendedColorType::Rgb8)
        .map_err(render_err)?;

    debug!(
        samples = depth.len(),
        bytes = png.len(),
        "rendered attenuation chart"
    );
    Ok(png)
}

/// Render a depth/intensity chart as a `data:image/png;base64,` URI
///
/// This is the shape the plot response embeds directly in its JSON body.
pub fn plot_data_uri(depth: &[f64], intensity: &[f64]) -> Result<String> {
    let png = render_plot(depth, intensity)?;
    Ok(format!("data:image/png;base64,{}", BASE64.encode(&png)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    #[test]
    fn test_empty_depth_is_invalid_input() {
        let err = render_plot(&[], &[1.0]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(err.to_string(), "Depth and Intensity data are required");
    }

    #[test]
    fn test_empty_intensity_is_invalid_input() {
        let err = render_plot(&[0.0, 1.0], &[]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_length_mismatch_is_invalid_input() {
        let err = render_plot(&[0.0, 1.0], &[1.0]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_render_produces_png_bytes() {
        let depth = [0.0, 0.5, 1.0];
        let intensity = [1.0, 0.6, 0.35];
        let png = render_plot(&depth, &intensity).unwrap();
        assert!(png.len() > PNG_SIGNATURE.len());
        assert_eq!(&png[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_data_uri_prefix() {
        let uri = plot_data_uri(&[0.0, 1.0], &[1.0, 0.5]).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_axis_range_pads_flat_series() {
        let (lo, hi) = axis_range(&[1.0, 1.0, 1.0]);
        assert!(lo < 1.0 && hi > 1.0);
    }
}
