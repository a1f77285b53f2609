use friction_core::{
    format_value, parse_field, ParamKey, ParamView, ParameterStore, Parameters, ViewSync,
};
use std::collections::HashMap;

/// Mirrors what the page would display after each refresh.
#[derive(Default)]
struct FakeView {
    sliders: HashMap<ParamKey, f64>,
    fields: HashMap<ParamKey, String>,
    redraws: Vec<Parameters>,
}

impl ParamView for FakeView {
    fn show(&mut self, key: ParamKey, value: f64, text: &str) {
        self.sliders.insert(key, value);
        self.fields.insert(key, text.to_string());
    }

    fn redraw(&mut self, params: &Parameters) {
        self.redraws.push(*params);
    }
}

impl FakeView {
    fn assert_consistent_with(&self, sync: &ViewSync) {
        for key in ParamKey::ALL {
            let value = sync.store().get(key);
            assert_eq!(self.sliders[&key], value, "slider {key}");
            assert_eq!(self.fields[&key], format_value(value), "field {key}");
        }
        assert_eq!(self.redraws.last(), Some(sync.store().params()));
    }
}

#[test]
fn initialize_fills_every_control_and_draws_once() {
    let sync = ViewSync::default();
    let mut view = FakeView::default();
    sync.initialize(&mut view);

    assert_eq!(view.fields[&ParamKey::ExtremumSlip], "1.00");
    assert_eq!(view.fields[&ParamKey::ExtremumValue], "5.00");
    assert_eq!(view.fields[&ParamKey::AsymptoteSlip], "2.00");
    assert_eq!(view.fields[&ParamKey::AsymptoteValue], "1.00");
    assert_eq!(view.fields[&ParamKey::Stiffness], "1.00");
    assert_eq!(view.redraws.len(), 1);
    view.assert_consistent_with(&sync);
}

#[test]
fn slider_move_updates_field_and_redraws() {
    let mut sync = ViewSync::default();
    let mut view = FakeView::default();
    sync.initialize(&mut view);

    assert_eq!(sync.slider_moved(ParamKey::AsymptoteSlip, 2.4567, &mut view), 2.4567);
    assert_eq!(view.sliders[&ParamKey::AsymptoteSlip], 2.4567);
    assert_eq!(view.fields[&ParamKey::AsymptoteSlip], "2.46");
    assert_eq!(view.redraws.len(), 2);
    view.assert_consistent_with(&sync);
}

#[test]
fn out_of_range_field_entry_is_clamped_everywhere() {
    let mut sync = ViewSync::default();
    let mut view = FakeView::default();
    sync.initialize(&mut view);

    assert_eq!(sync.field_committed(ParamKey::ExtremumSlip, "10", &mut view), 3.0);
    assert_eq!(view.sliders[&ParamKey::ExtremumSlip], 3.0);
    assert_eq!(view.fields[&ParamKey::ExtremumSlip], "3.00");
    view.assert_consistent_with(&sync);
}

#[test]
fn empty_field_redisplays_previous_value() {
    let mut sync = ViewSync::default();
    let mut view = FakeView::default();
    sync.initialize(&mut view);
    sync.field_committed(ParamKey::Stiffness, "1.25", &mut view);

    // Simulate the user clearing the box before committing.
    view.fields.insert(ParamKey::Stiffness, String::new());
    assert_eq!(sync.field_committed(ParamKey::Stiffness, "", &mut view), 1.25);
    assert_eq!(view.fields[&ParamKey::Stiffness], "1.25");
    assert_eq!(view.sliders[&ParamKey::Stiffness], 1.25);
    view.assert_consistent_with(&sync);
}

#[test]
fn garbage_field_text_is_ignored() {
    let mut sync = ViewSync::new(ParameterStore::default());
    let mut view = FakeView::default();
    sync.initialize(&mut view);

    assert_eq!(sync.field_committed(ParamKey::ExtremumValue, "abc", &mut view), 5.0);
    assert_eq!(sync.field_committed(ParamKey::ExtremumValue, "Infinity", &mut view), 5.0);
    assert_eq!(view.fields[&ParamKey::ExtremumValue], "5.00");
    view.assert_consistent_with(&sync);
}

#[test]
fn slider_nan_is_ignored() {
    let mut sync = ViewSync::default();
    let mut view = FakeView::default();
    sync.initialize(&mut view);
    assert_eq!(sync.slider_moved(ParamKey::ExtremumSlip, f64::NAN, &mut view), 1.0);
    view.assert_consistent_with(&sync);
}

#[test]
fn parse_field_follows_leading_number_rules() {
    assert_eq!(parse_field("1.5"), 1.5);
    assert_eq!(parse_field("  2 "), 2.0);
    assert_eq!(parse_field("-0.25"), -0.25);
    assert_eq!(parse_field("+3"), 3.0);
    assert_eq!(parse_field(".5"), 0.5);
    assert_eq!(parse_field("4."), 4.0);
    assert_eq!(parse_field("1.5kg"), 1.5);
    assert_eq!(parse_field("2e1"), 20.0);
    assert_eq!(parse_field("2e"), 2.0);
    assert_eq!(parse_field("1.2.3"), 1.2);
    assert_eq!(parse_field("-Infinity"), f64::NEG_INFINITY);
    assert!(parse_field("").is_nan());
    assert!(parse_field("   ").is_nan());
    assert!(parse_field(".").is_nan());
    assert!(parse_field("-").is_nan());
    assert!(parse_field("x1").is_nan());
}

#[test]
fn format_value_uses_two_decimals() {
    assert_eq!(format_value(1.0), "1.00");
    assert_eq!(format_value(0.004), "0.00");
    assert_eq!(format_value(2.999), "3.00");
    assert_eq!(format_value(10.0), "10.00");
}
