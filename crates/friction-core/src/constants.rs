// Shared plot layout and default tuning used by the core renderer and the web frontend.

// Startup parameter values
pub const DEFAULT_EXTREMUM_SLIP: f64 = 1.0;
pub const DEFAULT_EXTREMUM_VALUE: f64 = 5.0;
pub const DEFAULT_ASYMPTOTE_SLIP: f64 = 2.0;
pub const DEFAULT_ASYMPTOTE_VALUE: f64 = 1.0;
pub const DEFAULT_STIFFNESS: f64 = 1.0;

// Fallback slider bounds as [min, max, step], used when the page does not declare them
pub const SLIP_RANGE: [f64; 3] = [0.0, 3.0, 0.01];
pub const VALUE_RANGE: [f64; 3] = [0.0, 10.0, 0.1];
pub const STIFFNESS_RANGE: [f64; 3] = [0.0, 2.0, 0.01];

// Drawing surface size in pixels
pub const CANVAS_WIDTH: f64 = 500.0;
pub const CANVAS_HEIGHT: f64 = 340.0;

// Plot frame (pixels). Y grows downwards so the friction axis is inverted.
pub const PLOT_LEFT: f64 = 50.0;
pub const PLOT_RIGHT: f64 = 470.0; // axis and gridline extent, past the slip domain
pub const PLOT_BOTTOM: f64 = 300.0;
pub const PLOT_TOP: f64 = 30.0;
pub const PLOT_DATA_WIDTH: f64 = 400.0; // pixels covered by the slip domain

// Data domain
pub const SLIP_DOMAIN_MAX: f64 = 3.0;
pub const FRICTION_PLOT_MAX: f64 = 10.0; // samples above this are clipped for display only
pub const PX_PER_FRICTION_UNIT: f64 = 27.0;
pub const GRIDLINE_COUNT: usize = 11; // friction 0..=10
pub const CURVE_SAMPLES: usize = 401;

// Label placement
pub const GRID_LABEL_X: f64 = 30.0;
pub const GRID_LABEL_DY: f64 = 3.0;
pub const GUIDE_LABEL_DX: f64 = -35.0;
pub const EXTREMUM_LABEL_Y: f64 = 320.0;
pub const ASYMPTOTE_LABEL_Y: f64 = 335.0;
pub const FRICTION_TITLE_AT: [f64; 2] = [5.0, 50.0];
pub const SLIP_TITLE_AT: [f64; 2] = [410.0, 320.0];

// Palette
pub const AXIS_COLOR: &str = "#888";
pub const GRID_COLOR: &str = "#eee";
pub const GRID_LABEL_COLOR: &str = "#888";
pub const TITLE_COLOR: &str = "#555";
pub const GUIDE_COLOR: &str = "#fa0";
pub const GUIDE_LABEL_COLOR: &str = "#f80";
pub const CURVE_COLOR: &str = "#1a7";

// Stroke widths and dash pattern
pub const AXIS_WIDTH: f64 = 1.0;
pub const CURVE_WIDTH: f64 = 3.0;
pub const GUIDE_DASH: [f64; 2] = [5.0, 3.0];

// Fonts
pub const TITLE_FONT: &str = "14px sans-serif";
pub const GRID_LABEL_FONT: &str = "11px sans-serif";
pub const GUIDE_LABEL_FONT: &str = "12px sans-serif";

// Number of decimals shown in numeric fields
pub const FIELD_DECIMALS: usize = 2;
