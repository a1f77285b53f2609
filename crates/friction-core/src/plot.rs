//! Platform-independent plot of the friction curve.
//!
//! The renderer only talks to a [`Surface`], so the same drawing code backs
//! the browser canvas and the host-side tests. Coordinates are in pixels with
//! y growing downwards; [`slip_to_x`] and [`friction_to_y`] hold the fixed
//! data-to-pixel transform.

use crate::constants::*;
use crate::curve::evaluate;
use crate::params::Parameters;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Line appearance. An empty `dash` draws a solid line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: &'static str,
    pub width: f64,
    pub dash: &'static [f64],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub color: &'static str,
    pub font: &'static str,
}

/// Minimal 2D drawing target.
pub trait Surface {
    /// Erase everything previously drawn.
    fn clear(&mut self);
    /// Stroke an open polyline through `points`.
    fn stroke_path(&mut self, points: &[Point], stroke: &Stroke);
    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle);
}

pub const AXIS_STROKE: Stroke = Stroke {
    color: AXIS_COLOR,
    width: AXIS_WIDTH,
    dash: &[],
};
pub const GRID_STROKE: Stroke = Stroke {
    color: GRID_COLOR,
    width: AXIS_WIDTH,
    dash: &[],
};
pub const GUIDE_STROKE: Stroke = Stroke {
    color: GUIDE_COLOR,
    width: AXIS_WIDTH,
    dash: &GUIDE_DASH,
};
pub const CURVE_STROKE: Stroke = Stroke {
    color: CURVE_COLOR,
    width: CURVE_WIDTH,
    dash: &[],
};

const TITLE_STYLE: TextStyle = TextStyle {
    color: TITLE_COLOR,
    font: TITLE_FONT,
};
const GRID_LABEL_STYLE: TextStyle = TextStyle {
    color: GRID_LABEL_COLOR,
    font: GRID_LABEL_FONT,
};
const GUIDE_LABEL_STYLE: TextStyle = TextStyle {
    color: GUIDE_LABEL_COLOR,
    font: GUIDE_LABEL_FONT,
};

#[inline]
pub fn slip_to_x(slip: f64) -> f64 {
    PLOT_LEFT + (slip / SLIP_DOMAIN_MAX) * PLOT_DATA_WIDTH
}

#[inline]
pub fn friction_to_y(friction: f64) -> f64 {
    PLOT_BOTTOM - friction * PX_PER_FRICTION_UNIT
}

/// Evenly spaced samples of the curve across the slip domain, in pixels.
/// Friction above the top gridline is clipped so tall curves stay on screen.
pub fn sample_curve(params: &Parameters) -> Vec<Point> {
    let last = (CURVE_SAMPLES - 1) as f64;
    (0..CURVE_SAMPLES)
        .map(|i| {
            let slip = (i as f64 / last) * SLIP_DOMAIN_MAX;
            let friction = evaluate(slip, params).min(FRICTION_PLOT_MAX);
            Point::new(slip_to_x(slip), friction_to_y(friction))
        })
        .collect()
}

/// Redraw the whole plot for `params`. Only reads the parameters, so calling
/// it repeatedly with the same input produces the same picture.
pub fn render<S: Surface + ?Sized>(params: &Parameters, surface: &mut S) {
    surface.clear();
    draw_axes(surface);
    draw_gridlines(surface);
    draw_guides(params, surface);
    surface.stroke_path(&sample_curve(params), &CURVE_STROKE);
}

fn draw_axes<S: Surface + ?Sized>(surface: &mut S) {
    let origin = Point::new(PLOT_LEFT, PLOT_BOTTOM);
    surface.stroke_path(&[origin, Point::new(PLOT_RIGHT, PLOT_BOTTOM)], &AXIS_STROKE);
    surface.stroke_path(&[origin, Point::new(PLOT_LEFT, PLOT_TOP)], &AXIS_STROKE);

    let [fx, fy] = FRICTION_TITLE_AT;
    let [sx, sy] = SLIP_TITLE_AT;
    surface.fill_text("Friction", Point::new(fx, fy), &TITLE_STYLE);
    surface.fill_text("Slip", Point::new(sx, sy), &TITLE_STYLE);
}

fn draw_gridlines<S: Surface + ?Sized>(surface: &mut S) {
    for i in 0..GRIDLINE_COUNT {
        let y = friction_to_y(i as f64);
        surface.stroke_path(
            &[Point::new(PLOT_LEFT, y), Point::new(PLOT_RIGHT, y)],
            &GRID_STROKE,
        );
        surface.fill_text(
            &i.to_string(),
            Point::new(GRID_LABEL_X, y + GRID_LABEL_DY),
            &GRID_LABEL_STYLE,
        );
    }
}

fn draw_guides<S: Surface + ?Sized>(params: &Parameters, surface: &mut S) {
    let guides = [
        ("extremumSlip", params.extremum_slip, EXTREMUM_LABEL_Y),
        ("asymptoteSlip", params.asymptote_slip, ASYMPTOTE_LABEL_Y),
    ];
    for (label, slip, label_y) in guides {
        let x = slip_to_x(slip);
        surface.stroke_path(
            &[Point::new(x, PLOT_BOTTOM), Point::new(x, PLOT_TOP)],
            &GUIDE_STROKE,
        );
        surface.fill_text(label, Point::new(x + GUIDE_LABEL_DX, label_y), &GUIDE_LABEL_STYLE);
    }
}
