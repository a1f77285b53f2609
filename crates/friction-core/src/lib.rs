pub mod constants;
pub mod curve;
pub mod error;
pub mod params;
pub mod plot;
pub mod sync;

pub use curve::evaluate;
pub use error::ParamError;
pub use params::*;
pub use plot::{render, sample_curve, Point, Stroke, Surface, TextStyle};
pub use sync::{format_value, parse_field, ParamView, ViewSync};
