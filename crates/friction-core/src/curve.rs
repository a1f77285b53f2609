use crate::params::Parameters;

/// Friction response at `slip` for the piecewise-linear wheel curve.
///
/// The curve ramps from the origin to the extremum point, interpolates down
/// (or up) to the asymptote point, then stays flat. The whole curve is scaled
/// by `stiffness`. When `asymptote_slip <= extremum_slip` the middle segment
/// is skipped and the curve steps straight to the asymptote value.
///
/// A non-positive `extremum_slip` leaves the ramp empty: slips below it read
/// as zero and the curve jumps to the extremum value at `extremum_slip`.
pub fn evaluate(slip: f64, params: &Parameters) -> f64 {
    let Parameters {
        extremum_slip,
        extremum_value,
        asymptote_slip,
        asymptote_value,
        stiffness,
    } = *params;

    let value = if slip < extremum_slip {
        if extremum_slip > 0.0 {
            extremum_value * (slip / extremum_slip)
        } else {
            0.0
        }
    } else if slip < asymptote_slip && asymptote_slip > extremum_slip {
        let t = (slip - extremum_slip) / (asymptote_slip - extremum_slip);
        extremum_value + (asymptote_value - extremum_value) * t
    } else {
        asymptote_value
    };
    value * stiffness
}
