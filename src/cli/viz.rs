//! Terminal visualization using braille graphics
//!
//! Renders per-component density curves and the convolution as overlaid
//! line plots on a Unicode braille canvas, with a plain-text legend.

use drawille::Canvas;

use crate::engine::domain::point_mass;
use crate::engine::scenario::ScenarioSeries;
use crate::model::distribution::{Component, Point};

/// Default canvas size (braille pixels)
pub const CHART_WIDTH: u32 = 96;
pub const CHART_HEIGHT: u32 = 32;

/// Render a scenario's series as an overlaid braille line chart.
///
/// Point-mass components have no curve; they appear in the legend with
/// their exact location instead.
pub fn render_series_chart(
    components: &[Component],
    result: &ScenarioSeries,
    width: u32,
    height: u32,
) -> String {
    let mut series: Vec<&[Point]> = result
        .per_component
        .iter()
        .filter(|s| !s.points.is_empty())
        .map(|s| s.points.as_slice())
        .collect();
    if !result.convolution.is_empty() {
        series.push(&result.convolution);
    }

    if series.is_empty() {
        return match result.point_mass {
            Some(location) => {
                format!("  (all probability concentrated at {location}; no finite density to plot)")
            }
            None => "  (no series to plot)".to_string(),
        };
    }

    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_max: f64 = 0.0;
    for points in &series {
        for p in *points {
            x_min = x_min.min(p.x);
            x_max = x_max.max(p.x);
            y_max = y_max.max(p.y);
        }
    }
    if x_max <= x_min || y_max <= 0.0 {
        return "  (no series to plot)".to_string();
    }

    let mut canvas = Canvas::new(width, height);
    let sx = (width - 1) as f64 / (x_max - x_min);
    let sy = (height - 1) as f64 / y_max;

    for points in &series {
        let mut prev: Option<(u32, u32)> = None;
        for p in *points {
            let px = ((p.x - x_min) * sx).round() as u32;
            let py = ((height - 1) as f64 - p.y * sy).round() as u32;
            match prev {
                Some((ax, ay)) => draw_segment(&mut canvas, ax, ay, px, py),
                None => canvas.set(px, py),
            }
            prev = Some((px, py));
        }
    }

    // Axes along the left and bottom edges
    for x in 0..width {
        canvas.set(x, height - 1);
    }
    for y in 0..height {
        canvas.set(0, y);
    }

    let mut out = String::new();
    out.push_str(&canvas.frame());
    out.push_str(&format!(
        "\n  x: {:.3} .. {:.3}   peak density: {:.4}\n",
        x_min, x_max, y_max
    ));
    for component in components {
        match point_mass(&component.distribution) {
            Some(location) => out.push_str(&format!(
                "  - {} (point mass at {location}, shifts the sum)\n",
                component.name
            )),
            None => out.push_str(&format!("  - {}\n", component.name)),
        }
    }
    if !result.convolution.is_empty() {
        out.push_str("  - convolution (distribution of the sum)\n");
    }
    out
}

/// Plot a straight segment between two canvas points
fn draw_segment(canvas: &mut Canvas, x0: u32, y0: u32, x1: u32, y1: u32) {
    let dx = x1 as i64 - x0 as i64;
    let dy = y1 as i64 - y0 as i64;
    let steps = dx.abs().max(dy.abs());
    if steps == 0 {
        canvas.set(x0, y0);
        return;
    }
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let x = (x0 as f64 + dx as f64 * t).round() as u32;
        let y = (y0 as f64 + dy as f64 * t).round() as u32;
        canvas.set(x, y);
    }
}
