// Element ids used by index.html. Kept free of web-sys so host tests can include it.

use friction_core::ParamKey;

pub const CANVAS_ID: &str = "frictionCurve";

// Numeric entry fields share the slider id behind this prefix
pub const FIELD_PREFIX: &str = "v_";

#[inline]
pub fn slider_id(key: ParamKey) -> &'static str {
    key.as_str()
}

#[inline]
pub fn field_id(key: ParamKey) -> String {
    format!("{FIELD_PREFIX}{}", key.as_str())
}

