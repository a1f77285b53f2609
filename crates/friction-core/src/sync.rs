//! Two-way binding between the parameter store and its on-screen controls.
//!
//! Every event funnels through one mutation ([`ParameterStore::set`]) followed
//! by a full refresh of all controls and a redraw, so a slider, its numeric
//! field and the plot never disagree once a handler returns.

use crate::constants::FIELD_DECIMALS;
use crate::params::{ParamKey, ParameterStore, Parameters};

/// Receives refreshes from [`ViewSync`].
pub trait ParamView {
    /// Display `value` for `key`: the slider takes the number, the numeric
    /// field takes `text`.
    fn show(&mut self, key: ParamKey, value: f64, text: &str);
    fn redraw(&mut self, params: &Parameters);
}

#[derive(Clone, Debug, Default)]
pub struct ViewSync {
    store: ParameterStore,
}

impl ViewSync {
    pub fn new(store: ParameterStore) -> Self {
        Self { store }
    }

    #[inline]
    pub fn store(&self) -> &ParameterStore {
        &self.store
    }

    /// Populate every control from the store and draw once.
    pub fn initialize<V: ParamView + ?Sized>(&self, view: &mut V) {
        self.refresh(view);
        view.redraw(self.store.params());
    }

    /// A slider reported `raw`. Returns the value that was stored.
    pub fn slider_moved<V: ParamView + ?Sized>(
        &mut self,
        key: ParamKey,
        raw: f64,
        view: &mut V,
    ) -> f64 {
        self.commit(key, raw, view)
    }

    /// A numeric field was committed with `text`. Unparsable text keeps the
    /// previous value, which is then redisplayed. Returns the stored value.
    pub fn field_committed<V: ParamView + ?Sized>(
        &mut self,
        key: ParamKey,
        text: &str,
        view: &mut V,
    ) -> f64 {
        self.commit(key, parse_field(text), view)
    }

    /// Push the canonical value of every parameter to the view.
    pub fn refresh<V: ParamView + ?Sized>(&self, view: &mut V) {
        for key in ParamKey::ALL {
            let value = self.store.get(key);
            view.show(key, value, &format_value(value));
        }
    }

    fn commit<V: ParamView + ?Sized>(&mut self, key: ParamKey, raw: f64, view: &mut V) -> f64 {
        let value = self.store.set(key, raw);
        self.refresh(view);
        view.redraw(self.store.params());
        value
    }
}

/// Parse numeric field text the way a browser's `parseFloat` does: leading
/// whitespace is skipped and the longest numeric prefix wins, so `"1.5kg"`
/// reads as 1.5. Text without a numeric prefix yields NaN.
pub fn parse_field(text: &str) -> f64 {
    let text = text.trim();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if text[end..].starts_with("Infinity") {
        return text[..end + "Infinity".len()].parse::<f64>().unwrap_or(f64::NAN);
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }
    text[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// Numeric field text for a stored value.
#[inline]
pub fn format_value(value: f64) -> String {
    format!("{:.*}", FIELD_DECIMALS, value)
}
