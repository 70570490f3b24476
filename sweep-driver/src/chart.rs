use crate::numeric::{degree_to_radian, to_cartesian};
use crate::render::Projection;
use plotters::coord::Shift;
use plotters::prelude::*;

const CAPTION_FONT: (&str, u32) = ("sans-serif", 24);
const MARGIN: u32 = 10;
const LABEL_AREA: u32 = 45;
const N_RINGS: usize = 4;
const SPOKE_STEP_DEGREE: usize = 30;
const CIRCLE_STEPS: usize = 72;

type DrawResult<DB> = Result<(), DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

/// Draws the sweep as a polar plot: range rings, spokes every 30° and the
/// samples joined in the order they were received.
pub fn draw_polar<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    projection: &Projection,
) -> DrawResult<DB> {
    let area = area.titled("2D Lidar Plot (Polar)", CAPTION_FONT)?;
    let (w, h) = area.dim_in_pixel();
    let (rx, ry) = equal_aspect_ranges(
        chart_radius(projection.extent()),
        w.saturating_sub(2 * MARGIN),
        h.saturating_sub(2 * MARGIN),
    );
    let mut chart = ChartBuilder::on(&area)
        .margin(MARGIN)
        .build_cartesian_2d(-rx..rx, -ry..ry)?;

    let grid = BLACK.mix(0.2).stroke_width(1);
    let r = rx.min(ry);
    for ring in ring_radii(r) {
        chart.draw_series(LineSeries::new(circle_path(ring), grid))?;
    }
    for degree in (0..360).step_by(SPOKE_STEP_DEGREE) {
        let end = to_cartesian(degree_to_radian(degree as f64), r);
        chart.draw_series(LineSeries::new(vec![(0., 0.), end], grid))?;
    }

    chart
        .draw_series(LineSeries::new(polar_path(projection), &BLUE))?
        .label("Distance Data")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
    chart.draw_series(polar_path(projection).map(|p| Circle::new(p, 3, BLUE.filled())))?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    Ok(())
}

/// Draws the sweep as a Cartesian scatter plot with a grid and equal axes.
pub fn draw_cartesian<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    projection: &Projection,
) -> DrawResult<DB> {
    let area = area.titled("2D Lidar Plot (Cartesian)", CAPTION_FONT)?;
    let (w, h) = area.dim_in_pixel();
    let (rx, ry) = equal_aspect_ranges(
        chart_radius(projection.extent()),
        w.saturating_sub(2 * MARGIN + LABEL_AREA),
        h.saturating_sub(2 * MARGIN + LABEL_AREA),
    );
    let mut chart = ChartBuilder::on(&area)
        .margin(MARGIN)
        .x_label_area_size(LABEL_AREA)
        .y_label_area_size(LABEL_AREA)
        .build_cartesian_2d(-rx..rx, -ry..ry)?;

    chart
        .configure_mesh()
        .x_desc("X (mm)")
        .y_desc("Y (mm)")
        .draw()?;

    chart
        .draw_series(
            projection
                .cartesian_points()
                .map(|p| Circle::new(p, 3, RED.filled())),
        )?
        .label("Scan Data (Cartesian)")
        .legend(|(x, y)| Circle::new((x + 10, y), 3, RED.filled()));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    Ok(())
}

/// Radius covering every point with a little padding. Never zero.
pub(crate) fn chart_radius(extent: f64) -> f64 {
    if extent > 0. {
        extent * 1.1
    } else {
        1.
    }
}

/// Half spans for x and y so one data unit has the same length on both axes.
/// The shorter pixel side spans `radius`.
pub(crate) fn equal_aspect_ranges(radius: f64, width_px: u32, height_px: u32) -> (f64, f64) {
    if width_px == 0 || height_px == 0 {
        return (radius, radius);
    }
    let (w, h) = (width_px as f64, height_px as f64);
    if w >= h {
        (radius * w / h, radius)
    } else {
        (radius, radius * h / w)
    }
}

/// Screen positions of the `(angle, distance)` pairs in sequence order.
pub(crate) fn polar_path(projection: &Projection) -> impl Iterator<Item = (f64, f64)> + '_ {
    projection
        .polar_points()
        .map(|(angle_radian, distance)| to_cartesian(angle_radian, distance))
}

pub(crate) fn ring_radii(radius: f64) -> impl Iterator<Item = f64> {
    (1..=N_RINGS).map(move |i| radius * (i as f64) / (N_RINGS as f64))
}

pub(crate) fn circle_path(radius: f64) -> impl Iterator<Item = (f64, f64)> {
    (0..=CIRCLE_STEPS).map(move |i| {
        let degree = 360. * (i as f64) / (CIRCLE_STEPS as f64);
        to_cartesian(degree_to_radian(degree), radius)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_radius() {
        assert_eq!(chart_radius(0.), 1.);
        assert!(f64::abs(chart_radius(200.) - 220.) < 1e-9);
    }

    #[test]
    fn test_equal_aspect_ranges() {
        assert_eq!(equal_aspect_ranges(100., 400, 400), (100., 100.));
        assert_eq!(equal_aspect_ranges(100., 800, 400), (200., 100.));
        assert_eq!(equal_aspect_ranges(100., 400, 800), (100., 200.));
        assert_eq!(equal_aspect_ranges(100., 0, 800), (100., 100.));
    }

    #[test]
    fn test_polar_path_follows_sequence_order() {
        let projection = crate::render::project(&[90, 0, 180], &[10, 20, 30]).unwrap();
        let path: Vec<(f64, f64)> = polar_path(&projection).collect();
        let expected = [(0., 10.), (20., 0.), (-30., 0.)];
        assert_eq!(path.len(), expected.len());
        for ((x, y), (ex, ey)) in path.into_iter().zip(expected) {
            assert!(f64::abs(x - ex) < 1e-9);
            assert!(f64::abs(y - ey) < 1e-9);
        }
    }

    #[test]
    fn test_rings_and_circle() {
        let rings: Vec<f64> = ring_radii(400.).collect();
        assert_eq!(rings, vec![100., 200., 300., 400.]);

        let path: Vec<(f64, f64)> = circle_path(10.).collect();
        assert_eq!(path.len(), CIRCLE_STEPS + 1);
        for (x, y) in &path {
            assert!(f64::abs((x * x + y * y).sqrt() - 10.) < 1e-9);
        }
        let (first, last) = (path[0], path[CIRCLE_STEPS]);
        assert!(f64::abs(first.0 - last.0) < 1e-9);
        assert!(f64::abs(first.1 - last.1) < 1e-9);
    }
}
