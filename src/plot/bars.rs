//! Bar charts on a logarithmic x axis.
//!
//! Bars are drawn as filled quadrilaterals whose edges are placed in log10
//! space, so every bar has the same visual width regardless of its
//! position on the axis.

use plotters::prelude::*;

use crate::error::{Result, VphysError};
use crate::plot::render::{
    check_size, draw_frame, encode_rgb_to_png, frame_margin, linear_ticks, log_decade_ticks, new_buffer,
    Frame,
};
use crate::plot::types::{BarChartSpec, RenderedPlot};

/// Four corners of one bar, counter-clockwise from the bottom left.
pub type Quad = [(f64, f64); 4];

/// Output of [`render_log_bars`].
#[derive(Debug, Clone)]
pub struct RenderedBars {
    pub plot: RenderedPlot,
    /// Geometry of the last bar drawn.
    pub last_bar: Quad,
}

/// Corners of a bar at `x` with height `y`, spanning `±width` decades and
/// shifted left by `xdelta` decades.
pub fn log_bar_polygon(x: f64, y: f64, width: f64, xdelta: f64) -> Result<Quad> {
    if !(x > 0.0) || !x.is_finite() {
        return Err(VphysError::invalid(format!("bar position must be positive and finite, got {}", x)));
    }
    if !y.is_finite() || !width.is_finite() || !xdelta.is_finite() {
        return Err(VphysError::invalid("bar height, width and shift must be finite"));
    }
    let centre = x.log10() - xdelta;
    let lo = 10f64.powf(centre - width);
    let hi = 10f64.powf(centre + width);
    Ok([(lo, 0.0), (lo, y), (hi, y), (hi, 0.0)])
}

pub fn bar_polygons(xs: &[f64], ys: &[f64], width: f64, xdelta: f64) -> Result<Vec<Quad>> {
    if xs.len() != ys.len() {
        return Err(VphysError::invalid(format!(
            "x and y lengths differ: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    xs.iter()
        .zip(ys)
        .map(|(&x, &y)| log_bar_polygon(x, y, width, xdelta))
        .collect()
}

/// Render the bars of `spec` to PNG.
pub fn render_log_bars(spec: &BarChartSpec) -> Result<RenderedBars> {
    check_size(spec.image_width, spec.image_height)?;
    let bars = bar_polygons(&spec.x, &spec.y, spec.width, spec.xdelta)?;
    let last_bar = *bars
        .last()
        .ok_or_else(|| VphysError::invalid("bar chart needs at least one bar"))?;

    let (x_lo, x_hi) = x_extent(&bars);
    let (y_lo, y_hi) = y_extent(&spec.y);
    let (width, height) = (spec.image_width, spec.image_height);
    let mut buf = new_buffer(width, height);

    {
        let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| VphysError::plot(format!("fill: {}", e)))?;

        let mut chart = ChartBuilder::on(&root)
            .margin(frame_margin(&spec.style))
            .build_cartesian_2d((x_lo..x_hi).log_scale(), y_lo..y_hi)
            .map_err(|e| VphysError::plot(format!("chart build: {}", e)))?;

        let (r, g, b) = spec.fill;
        let fill = RGBColor(r, g, b).filled();
        chart
            .draw_series(bars.iter().map(|q| Polygon::new(q.to_vec(), fill)))
            .map_err(|e| VphysError::plot(format!("draw bars: {}", e)))?;

        let x_px: Vec<i32> = log_decade_ticks(x_lo, x_hi)
            .into_iter()
            .map(|x| chart.backend_coord(&(x, y_lo)).0)
            .collect();
        let y_px: Vec<i32> = linear_ticks(y_lo, y_hi, 5)
            .into_iter()
            .map(|y| chart.backend_coord(&(x_lo, y)).1)
            .collect();

        let frame = Frame::from_pixel_range(chart.plotting_area().get_pixel_range());
        draw_frame(&root, &frame, &spec.style, &x_px, &y_px)?;

        root.present().map_err(|e| VphysError::plot(format!("present: {}", e)))?;
    }

    tracing::debug!(bars = bars.len(), "rendered log bar chart");

    let png_bytes = encode_rgb_to_png(&buf, width, height)?;
    Ok(RenderedBars {
        plot: RenderedPlot {
            png_bytes,
            width,
            height,
        },
        last_bar,
    })
}

/// Horizontal extent of all bars, padded by a tenth of a decade.
fn x_extent(bars: &[Quad]) -> (f64, f64) {
    let lo = bars.iter().map(|q| q[0].0.min(q[2].0)).fold(f64::INFINITY, f64::min);
    let hi = bars.iter().map(|q| q[0].0.max(q[2].0)).fold(f64::NEG_INFINITY, f64::max);
    let pad = 10f64.powf(0.1);
    let (lo, hi) = (lo / pad, hi * pad);
    if hi / lo < 1.0 + 1e-9 {
        (lo / 10.0, hi * 10.0)
    } else {
        (lo, hi)
    }
}

/// Vertical extent including the zero baseline, with 5% headroom.
fn y_extent(ys: &[f64]) -> (f64, f64) {
    let lo = ys.iter().copied().fold(0.0, f64::min);
    let hi = ys.iter().copied().fold(0.0, f64::max);
    if (hi - lo).abs() < 1e-12 {
        return (0.0, 1.0);
    }
    let pad = (hi - lo) * 0.05;
    (if lo < 0.0 { lo - pad } else { lo }, if hi > 0.0 { hi + pad } else { hi })
}
