//! PNG rendering with plotters

use super::fonts::FONT_FAMILY;
use super::{Figure, Panel};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PanelKind {
    /// Vertical line from 0 to each value, capped with a marker
    Stem,
    
    /// Values joined in order
    Line,
}

/// Render `figure` as a 2×2 grid into a PNG file
pub fn render_png(
    figure: &Figure,
    path: &Path,
    size: (u32, u32),
    labels: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    render_on(&root, figure, labels)?;
    root.present()?;
    Ok(())
}

/// Render `figure` onto any plotters drawing area
pub fn render_on<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &Figure,
    labels: bool,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;
    
    let areas = root.split_evenly((2, 2));
    draw_panel(&areas[0], &figure.magnitude, PanelKind::Stem, labels)?;
    draw_panel(&areas[1], &figure.normalized_magnitude, PanelKind::Stem, labels)?;
    draw_panel(&areas[2], &figure.phase, PanelKind::Stem, labels)?;
    draw_panel(&areas[3], &figure.reconstructed, PanelKind::Line, labels)?;
    
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    kind: PanelKind,
    labels: bool,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let x_range = padded_range(&panel.x, false);
    let y_range = padded_range(&panel.y, kind == PanelKind::Stem);
    
    let mut builder = ChartBuilder::on(area);
    builder.margin(12);
    if labels {
        builder
            .caption(panel.title, (FONT_FAMILY, 18))
            .x_label_area_size(40)
            .y_label_area_size(55);
    }
    let mut chart = builder.build_cartesian_2d(x_range, y_range)?;
    
    {
        let mut mesh = chart.configure_mesh();
        if labels {
            mesh.x_desc(panel.x_label).y_desc(panel.y_label);
        } else {
            mesh.x_labels(0).y_labels(0);
        }
        mesh.draw()?;
    }
    
    let points = || panel.x.iter().copied().zip(panel.y.iter().copied());
    match kind {
        PanelKind::Stem => {
            chart.draw_series(points().map(|(x, y)| PathElement::new(vec![(x, 0.0), (x, y)], BLUE)))?;
            chart.draw_series(points().map(|(x, y)| Circle::new((x, y), 3, BLUE.filled())))?;
        }
        PanelKind::Line => {
            chart.draw_series(LineSeries::new(points(), &BLUE))?;
        }
    }
    
    Ok(())
}

/// Axis range covering `values` with a 5% margin
/// 
/// A degenerate (empty or constant) range is widened to stay drawable.
fn padded_range(values: &[f64], include_zero: bool) -> Range<f64> {
    let (mut lo, mut hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    
    if !lo.is_finite() || !hi.is_finite() {
        return 0.0..1.0;
    }
    if include_zero {
        lo = lo.min(0.0);
        hi = hi.max(0.0);
    }
    
    let span = hi - lo;
    let pad = if span > 0.0 { span * 0.05 } else { hi.abs().max(1.0) * 0.5 };
    (lo - pad)..(hi + pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_padded_range() {
        let r = padded_range(&[0.0, 10.0], false);
        assert!((r.start + 0.5).abs() < 1e-12);
        assert!((r.end - 10.5).abs() < 1e-12);
        
        let r = padded_range(&[2.0, 4.0], true);
        assert!(r.start < 0.0);
        
        let r = padded_range(&[0.0, 0.0], true);
        assert!(r.start < 0.0 && r.end > 0.0);
        
        assert_eq!(padded_range(&[], false), 0.0..1.0);
    }
}
