/// Plot rendering pipeline: spec → RGB buffer via plotters → PNG bytes.

use std::ops::Range;

use image::codecs::png::PngEncoder;
use image::ImageEncoder;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::colormap::ListedColormap;
use crate::error::{Result, VphysError};
use crate::plot::style::{AxesStyle, Spine, BLACK};
use crate::plot::types::*;

/// Background color.
const BG_COLOR: RGBColor = RGBColor(255, 255, 255);
/// Tick mark length in pixels.
const TICK_LEN: i32 = 5;
/// Space around the frame before spine offsets are added.
const BASE_MARGIN: i32 = 20;
/// Tick marks per linear axis.
const TICK_COUNT: usize = 6;

/// Render a line plot to PNG.
pub fn render_plot(spec: &PlotSpec) -> Result<RenderedPlot> {
    check_size(spec.width, spec.height)?;
    if !(spec.x_min < spec.x_max) || !spec.x_min.is_finite() || !spec.x_max.is_finite() {
        return Err(VphysError::invalid(format!(
            "x range must be finite and increasing, got {}..{}",
            spec.x_min, spec.x_max
        )));
    }

    let (width, height) = (spec.width, spec.height);
    let mut buf = new_buffer(width, height);

    {
        let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
        root.fill(&BG_COLOR).map_err(|e| VphysError::plot(format!("fill: {}", e)))?;

        let (y_min, y_max) = compute_y_range(&spec.series);

        let mut chart = ChartBuilder::on(&root)
            .margin(frame_margin(&spec.style))
            .build_cartesian_2d(spec.x_min..spec.x_max, y_min..y_max)
            .map_err(|e| VphysError::plot(format!("chart build: {}", e)))?;

        for (i, series) in spec.series.iter().enumerate() {
            let (r, g, b) = series_color(i);
            let color = RGBColor(r, g, b);
            for segment in split_segments(&series.points) {
                chart
                    .draw_series(LineSeries::new(segment, color.stroke_width(2)))
                    .map_err(|e| VphysError::plot(format!("draw series: {}", e)))?;
            }
        }

        let x_px: Vec<i32> = linear_ticks(spec.x_min, spec.x_max, TICK_COUNT)
            .into_iter()
            .map(|x| chart.backend_coord(&(x, y_min)).0)
            .collect();
        let y_px: Vec<i32> = linear_ticks(y_min, y_max, TICK_COUNT)
            .into_iter()
            .map(|y| chart.backend_coord(&(spec.x_min, y)).1)
            .collect();

        let frame = Frame::from_pixel_range(chart.plotting_area().get_pixel_range());
        draw_frame(&root, &frame, &spec.style, &x_px, &y_px)?;

        root.present().map_err(|e| VphysError::plot(format!("present: {}", e)))?;
    }

    let png_bytes = encode_rgb_to_png(&buf, width, height)?;
    Ok(RenderedPlot {
        png_bytes,
        width,
        height,
    })
}

/// Render a horizontal preview strip of `cmap`, left = 0, right = 1.
pub fn render_colormap_strip(cmap: &ListedColormap, width: u32, height: u32) -> Result<RenderedPlot> {
    check_size(width, height)?;
    let mut buf = new_buffer(width, height);

    {
        let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
        let denom = (width.max(2) - 1) as f64;
        for x in 0..width {
            let (r, g, b) = cmap.rgb8_at(x as f64 / denom);
            let color = RGBColor(r, g, b);
            for y in 0..height {
                root.draw_pixel((x as i32, y as i32), &color)
                    .map_err(|e| VphysError::plot(format!("pixel: {}", e)))?;
            }
        }
        root.present().map_err(|e| VphysError::plot(format!("present: {}", e)))?;
    }

    let png_bytes = encode_rgb_to_png(&buf, width, height)?;
    Ok(RenderedPlot {
        png_bytes,
        width,
        height,
    })
}

/// Pixel bounds of the data area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Frame {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Frame {
    pub(crate) fn from_pixel_range((xs, ys): (Range<i32>, Range<i32>)) -> Self {
        Self {
            left: xs.start,
            right: xs.end,
            top: ys.start,
            bottom: ys.end,
        }
    }
}

/// Margin large enough for the outermost spine and its tick marks.
pub(crate) fn frame_margin(style: &AxesStyle) -> i32 {
    BASE_MARGIN + points_to_pixels(style.max_outward()) + TICK_LEN
}

/// Draw visible spines and tick marks around `frame`.
///
/// `x_ticks` are pixel columns, `y_ticks` pixel rows.
pub(crate) fn draw_frame<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    frame: &Frame,
    style: &AxesStyle,
    x_ticks: &[i32],
    y_ticks: &[i32],
) -> Result<()> {
    for which in Spine::ALL {
        let spine = style.spine(which);
        if !spine.visible {
            continue;
        }
        let (x0, y0, x1, y1) = spine_segment(frame, which, points_to_pixels(spine.outward));
        let (r, g, b) = spine.color;
        root.draw(&PathElement::new(vec![(x0, y0), (x1, y1)], RGBColor(r, g, b).stroke_width(1)))
            .map_err(|e| VphysError::plot(format!("spine: {}", e)))?;
    }

    if let Some(which) = style.x_ticks {
        draw_ticks(root, frame, style, which, x_ticks)?;
    }
    if let Some(which) = style.y_ticks {
        draw_ticks(root, frame, style, which, y_ticks)?;
    }
    Ok(())
}

fn draw_ticks<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    frame: &Frame,
    style: &AxesStyle,
    which: Spine,
    positions: &[i32],
) -> Result<()> {
    let spine = style.spine(which);
    let off = points_to_pixels(spine.outward);
    let (r, g, b) = if spine.visible { spine.color } else { BLACK };
    let tick_style = RGBColor(r, g, b).stroke_width(1);

    for &p in positions {
        let (start, end) = match which {
            Spine::Bottom => ((p, frame.bottom + off), (p, frame.bottom + off + TICK_LEN)),
            Spine::Top => ((p, frame.top - off), (p, frame.top - off - TICK_LEN)),
            Spine::Left => ((frame.left - off, p), (frame.left - off - TICK_LEN, p)),
            Spine::Right => ((frame.right + off, p), (frame.right + off + TICK_LEN, p)),
        };
        root.draw(&PathElement::new(vec![start, end], tick_style))
            .map_err(|e| VphysError::plot(format!("tick: {}", e)))?;
    }
    Ok(())
}

fn spine_segment(frame: &Frame, which: Spine, off: i32) -> (i32, i32, i32, i32) {
    match which {
        Spine::Left => (frame.left - off, frame.top, frame.left - off, frame.bottom),
        Spine::Right => (frame.right + off, frame.top, frame.right + off, frame.bottom),
        Spine::Top => (frame.left, frame.top - off, frame.right, frame.top - off),
        Spine::Bottom => (frame.left, frame.bottom + off, frame.right, frame.bottom + off),
    }
}

/// `count` evenly spaced values covering `[min, max]`.
pub fn linear_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let step = (max - min) / (count - 1) as f64;
            (0..count).map(|i| min + step * i as f64).collect()
        }
    }
}

/// Powers of ten inside `[min, max]` (both must be positive).
pub fn log_decade_ticks(min: f64, max: f64) -> Vec<f64> {
    if !(min > 0.0 && max >= min) {
        return Vec::new();
    }
    let lo = min.log10().ceil() as i32;
    let hi = max.log10().floor() as i32;
    (lo..=hi).map(|k| 10f64.powi(k)).collect()
}

pub(crate) fn check_size(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(VphysError::invalid(format!(
            "image size must be non-zero, got {}x{}",
            width, height
        )));
    }
    Ok(())
}

pub(crate) fn new_buffer(width: u32, height: u32) -> Vec<u8> {
    vec![0u8; (width as usize) * (height as usize) * 3]
}

/// Split a point series at None (discontinuities) into continuous segments.
fn split_segments(points: &[Option<(f64, f64)>]) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();

    for pt in points {
        match pt {
            Some(p) => current.push(*p),
            None => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// y range of the finite data with 10% padding.
fn compute_y_range(all_series: &[Series]) -> (f64, f64) {
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for (_, y) in all_series.iter().flat_map(|s| s.points.iter().flatten()) {
        if y.is_finite() {
            y_min = y_min.min(*y);
            y_max = y_max.max(*y);
        }
    }

    if !y_min.is_finite() || !y_max.is_finite() {
        return (-1.0, 1.0);
    }
    if (y_max - y_min).abs() < 1e-10 {
        return (y_min - 1.0, y_max + 1.0);
    }

    let pad = (y_max - y_min) * 0.1;
    (y_min - pad, y_max + pad)
}

/// Encode a raw RGB pixel buffer to PNG.
pub(crate) fn encode_rgb_to_png(rgb: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    let mut png = Vec::new();
    let encoder = PngEncoder::new(&mut png);
    encoder
        .write_image(rgb, width, height, image::ExtendedColorType::Rgb8)
        .map_err(|e| VphysError::plot(format!("PNG encode: {}", e)))?;
    Ok(png)
}
