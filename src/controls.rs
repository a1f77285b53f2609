use crate::canvas::CanvasSurface;
use crate::dom;
use crate::ids;
use friction_core::{render, ParamKey, ParamRange, ParamRanges, ParamView, Parameters, ViewSync};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Slider and numeric field pair for one parameter.
#[derive(Clone)]
struct Control {
    key: ParamKey,
    slider: web::HtmlInputElement,
    field: web::HtmlInputElement,
}

/// The page: every control plus the plot canvas.
pub struct DomView {
    controls: Vec<Control>,
    surface: CanvasSurface,
}

impl DomView {
    pub fn bind(document: &web::Document, surface: CanvasSurface) -> anyhow::Result<Self> {
        let controls = ParamKey::ALL
            .into_iter()
            .map(|key| {
                Ok(Control {
                    key,
                    slider: dom::element_by_id(document, ids::slider_id(key))?,
                    field: dom::element_by_id(document, &ids::field_id(key))?,
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Self { controls, surface })
    }

    /// Ranges declared on the sliders, falling back to built-in bounds for
    /// any slider whose attributes are missing or malformed.
    pub fn slider_ranges(&self) -> ParamRanges {
        let fallback = ParamRanges::default();
        ParamRanges::new(|key| {
            let Some(c) = self.control(key) else {
                return fallback[key];
            };
            let attr = |name: &str| c.slider.get_attribute(name);
            let (min, max, step) = (attr("min"), attr("max"), attr("step"));
            match ParamRange::from_attributes(min.as_deref(), max.as_deref(), step.as_deref()) {
                Ok(range) => range,
                Err(e) => {
                    log::warn!("[controls] #{}: {e}; using built-in range", ids::slider_id(key));
                    fallback[key]
                }
            }
        })
    }

    fn control(&self, key: ParamKey) -> Option<&Control> {
        self.controls.iter().find(|c| c.key == key)
    }
}

impl ParamView for DomView {
    fn show(&mut self, key: ParamKey, value: f64, text: &str) {
        if let Some(c) = self.control(key) {
            c.slider.set_value(&value.to_string());
            c.field.set_value(text);
        }
    }

    fn redraw(&mut self, params: &Parameters) {
        render(params, &mut self.surface);
    }
}

pub struct App {
    pub sync: ViewSync,
    pub view: DomView,
}

/// Slider drags update live; numeric fields only on commit (blur or Enter).
pub fn wire_controls(app: &Rc<RefCell<App>>) {
    let controls = app.borrow().view.controls.clone();
    for Control { key, slider, field } in controls {
        let app_slider = app.clone();
        let slider_src = slider.clone();
        dom::add_listener(&slider, "input", move |_ev| {
            let raw = slider_src.value_as_number();
            let mut app = app_slider.borrow_mut();
            let App { sync, view } = &mut *app;
            let stored = sync.slider_moved(key, raw, view);
            log::debug!("[slider] {key}={stored}");
        });

        let app_field = app.clone();
        let field_src = field.clone();
        dom::add_listener(&field, "change", move |_ev| {
            let text = field_src.value();
            let mut app = app_field.borrow_mut();
            let App { sync, view } = &mut *app;
            let stored = sync.field_committed(key, &text, view);
            log::debug!("[field] {key} {text:?} -> {stored}");
        });
    }
}
