/// Plot specification and rendered output types.

use crate::colormap::MORGENSTEMNING;
use crate::plot::style::AxesStyle;

/// Default output image dimensions (pixels).
pub const PLOT_WIDTH: u32 = 800;
pub const PLOT_HEIGHT: u32 = 500;
/// Raster resolution used to convert typographic points to pixels.
pub const DPI: f64 = 100.0;

/// Pixels per typographic point (1/72 inch) at [`DPI`].
pub fn points_to_pixels(points: f64) -> i32 {
    (points * DPI / 72.0).round() as i32
}

/// Line colors for multiple curves, sampled from the morgenstemning palette
/// so consecutive series stay distinguishable on a white background.
pub fn series_color(i: usize) -> (u8, u8, u8) {
    const STOPS: [f64; 5] = [0.15, 0.35, 0.5, 0.65, 0.8];
    MORGENSTEMNING.rgb8_at(STOPS[i % STOPS.len()])
}

/// A single data series for plotting.
#[derive(Debug, Clone)]
pub struct Series {
    /// Sample points. `None` = discontinuity (break the line).
    pub points: Vec<Option<(f64, f64)>>,
}

/// Fully specified line plot ready for rendering.
#[derive(Debug, Clone)]
pub struct PlotSpec {
    pub series: Vec<Series>,
    pub x_min: f64,
    pub x_max: f64,
    pub style: AxesStyle,
    pub width: u32,
    pub height: u32,
}

impl PlotSpec {
    pub fn new(series: Vec<Series>, x_min: f64, x_max: f64) -> Self {
        Self {
            series,
            x_min,
            x_max,
            style: AxesStyle::default(),
            width: PLOT_WIDTH,
            height: PLOT_HEIGHT,
        }
    }
}

/// Bar chart drawn on a logarithmic x axis.
///
/// Bar `i` is centred (in log10 space) on `x[i] * 10^-xdelta` and spans
/// `±width` decades.
#[derive(Debug, Clone)]
pub struct BarChartSpec {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// Half-width of every bar, in decades.
    pub width: f64,
    /// Shift applied to every bar, in decades.
    pub xdelta: f64,
    pub fill: (u8, u8, u8),
    pub style: AxesStyle,
    pub image_width: u32,
    pub image_height: u32,
}

impl BarChartSpec {
    pub fn new(x: Vec<f64>, y: Vec<f64>, width: f64) -> Self {
        Self {
            x,
            y,
            width,
            xdelta: 0.0,
            fill: MORGENSTEMNING.rgb8_at(0.55),
            style: AxesStyle::default(),
            image_width: PLOT_WIDTH,
            image_height: PLOT_HEIGHT,
        }
    }
}

/// A rendered plot image.
#[derive(Debug, Clone)]
pub struct RenderedPlot {
    pub png_bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_to_pixels() {
        assert_eq!(points_to_pixels(0.0), 0);
        assert_eq!(points_to_pixels(72.0), 100);
        assert_eq!(points_to_pixels(10.0), 14);
    }

    #[test]
    fn test_series_colors_cycle() {
        assert_eq!(series_color(0), series_color(5));
        assert_ne!(series_color(0), series_color(1));
    }
}
