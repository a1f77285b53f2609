//! Parameter model for the friction curve.
//!
//! [`ParameterStore`] is the single owner of the five curve parameters. Every
//! mutation goes through [`ParameterStore::set`], which clamps into the
//! parameter's configured range and silently ignores non-finite input, so the
//! stored values are always valid for evaluation and rendering.

use crate::constants::{
    DEFAULT_ASYMPTOTE_SLIP, DEFAULT_ASYMPTOTE_VALUE, DEFAULT_EXTREMUM_SLIP,
    DEFAULT_EXTREMUM_VALUE, DEFAULT_STIFFNESS, SLIP_RANGE, STIFFNESS_RANGE, VALUE_RANGE,
};
use crate::error::ParamError;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// Names one of the five curve parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamKey {
    ExtremumSlip,
    ExtremumValue,
    AsymptoteSlip,
    AsymptoteValue,
    Stiffness,
}

impl ParamKey {
    pub const ALL: [ParamKey; 5] = [
        ParamKey::ExtremumSlip,
        ParamKey::ExtremumValue,
        ParamKey::AsymptoteSlip,
        ParamKey::AsymptoteValue,
        ParamKey::Stiffness,
    ];

    /// Canonical camelCase name, also used as the slider's element id.
    pub fn as_str(self) -> &'static str {
        match self {
            ParamKey::ExtremumSlip => "extremumSlip",
            ParamKey::ExtremumValue => "extremumValue",
            ParamKey::AsymptoteSlip => "asymptoteSlip",
            ParamKey::AsymptoteValue => "asymptoteValue",
            ParamKey::Stiffness => "stiffness",
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParamKey {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParamKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ParamError::UnknownKey(s.to_string()))
    }
}

/// The five values that shape the curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parameters {
    pub extremum_slip: f64,
    pub extremum_value: f64,
    pub asymptote_slip: f64,
    pub asymptote_value: f64,
    pub stiffness: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            extremum_slip: DEFAULT_EXTREMUM_SLIP,
            extremum_value: DEFAULT_EXTREMUM_VALUE,
            asymptote_slip: DEFAULT_ASYMPTOTE_SLIP,
            asymptote_value: DEFAULT_ASYMPTOTE_VALUE,
            stiffness: DEFAULT_STIFFNESS,
        }
    }
}

impl Parameters {
    pub fn get(&self, key: ParamKey) -> f64 {
        match key {
            ParamKey::ExtremumSlip => self.extremum_slip,
            ParamKey::ExtremumValue => self.extremum_value,
            ParamKey::AsymptoteSlip => self.asymptote_slip,
            ParamKey::AsymptoteValue => self.asymptote_value,
            ParamKey::Stiffness => self.stiffness,
        }
    }

    fn slot_mut(&mut self, key: ParamKey) -> &mut f64 {
        match key {
            ParamKey::ExtremumSlip => &mut self.extremum_slip,
            ParamKey::ExtremumValue => &mut self.extremum_value,
            ParamKey::AsymptoteSlip => &mut self.asymptote_slip,
            ParamKey::AsymptoteValue => &mut self.asymptote_value,
            ParamKey::Stiffness => &mut self.stiffness,
        }
    }
}

/// Inclusive bounds and slider step for one parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParamRange {
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, ParamError> {
        if !min.is_finite() {
            return Err(ParamError::InvalidBound {
                name: "min",
                text: min.to_string(),
            });
        }
        if !max.is_finite() {
            return Err(ParamError::InvalidBound {
                name: "max",
                text: max.to_string(),
            });
        }
        if min > max {
            return Err(ParamError::EmptyRange { min, max });
        }
        if !(step.is_finite() && step > 0.0) {
            return Err(ParamError::InvalidStep(step));
        }
        Ok(Self { min, max, step })
    }

    /// Build a range from a slider's `min`, `max` and `step` attribute text.
    ///
    /// A missing step falls back to 1, matching the HTML default for range
    /// inputs. Missing or unparsable bounds are an error so the caller can
    /// substitute its own defaults.
    pub fn from_attributes(
        min: Option<&str>,
        max: Option<&str>,
        step: Option<&str>,
    ) -> Result<Self, ParamError> {
        let min = parse_bound("min", min)?;
        let max = parse_bound("max", max)?;
        let step = match step {
            Some(text) => parse_bound("step", Some(text))?,
            None => 1.0,
        };
        Self::new(min, max, step)
    }

    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

fn parse_bound(name: &'static str, text: Option<&str>) -> Result<f64, ParamError> {
    let text = text.unwrap_or("").trim();
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParamError::InvalidBound {
            name,
            text: text.to_string(),
        })
}

/// One range per parameter, indexable by [`ParamKey`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamRanges([ParamRange; 5]);

impl ParamRanges {
    pub fn new(f: impl Fn(ParamKey) -> ParamRange) -> Self {
        Self(ParamKey::ALL.map(f))
    }
}

impl Default for ParamRanges {
    fn default() -> Self {
        let from = |[min, max, step]: [f64; 3]| ParamRange { min, max, step };
        Self::new(|key| match key {
            ParamKey::ExtremumSlip | ParamKey::AsymptoteSlip => from(SLIP_RANGE),
            ParamKey::ExtremumValue | ParamKey::AsymptoteValue => from(VALUE_RANGE),
            ParamKey::Stiffness => from(STIFFNESS_RANGE),
        })
    }
}

impl Index<ParamKey> for ParamRanges {
    type Output = ParamRange;

    fn index(&self, key: ParamKey) -> &ParamRange {
        &self.0[key.index()]
    }
}

impl IndexMut<ParamKey> for ParamRanges {
    fn index_mut(&mut self, key: ParamKey) -> &mut ParamRange {
        &mut self.0[key.index()]
    }
}

/// Owns the live parameter values together with their ranges.
#[derive(Clone, Debug)]
pub struct ParameterStore {
    params: Parameters,
    ranges: ParamRanges,
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new(ParamRanges::default())
    }
}

impl ParameterStore {
    /// Start from the default parameters, pulled into `ranges` if a page
    /// declares bounds that exclude them.
    pub fn new(ranges: ParamRanges) -> Self {
        let mut params = Parameters::default();
        for key in ParamKey::ALL {
            let slot = params.slot_mut(key);
            let clamped = ranges[key].clamp(*slot);
            if clamped != *slot {
                log::debug!("[params] default {key}={} clamped to {clamped}", *slot);
                *slot = clamped;
            }
        }
        Self { params, ranges }
    }

    #[inline]
    pub fn get(&self, key: ParamKey) -> f64 {
        self.params.get(key)
    }

    /// Store `raw` clamped into range and return the stored value. Non-finite
    /// input leaves the parameter untouched.
    pub fn set(&mut self, key: ParamKey, raw: f64) -> f64 {
        let slot = self.params.slot_mut(key);
        if !raw.is_finite() {
            log::debug!("[params] ignoring non-finite {key} input, keeping {}", *slot);
            return *slot;
        }
        let value = self.ranges[key].clamp(raw);
        if value != raw {
            log::debug!("[params] {key}={raw} clamped to {value}");
        }
        *slot = value;
        value
    }

    #[inline]
    pub fn params(&self) -> &Parameters {
        &self.params
    }

    #[inline]
    pub fn range(&self, key: ParamKey) -> ParamRange {
        self.ranges[key]
    }

    #[inline]
    pub fn ranges(&self) -> &ParamRanges {
        &self.ranges
    }
}
