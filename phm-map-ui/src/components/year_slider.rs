//! Year range slider with a value bubble and the election caption.

use crate::state::AppState;
use dioxus::prelude::*;
use phm_core::{snap_to_nearest_year, Year};
use phm_view::SelectionUpdate;
use wasm_bindgen::JsCast;

/// Raw slider value as a year. Browsers report range values as strings,
/// occasionally with a fractional part.
pub fn parse_slider_value(value: &str) -> Option<Year> {
    let value: f64 = value.trim().parse().ok()?;
    value.is_finite().then(|| value.round() as Year)
}

/// Press year the thumb should rest on for a raw slider value.
pub fn slider_target(value: &str, press_years: &[Year]) -> Option<Year> {
    snap_to_nearest_year(parse_slider_value(value)?, press_years)
}

/// CSS `left` for the bubble above the slider thumb.
fn bubble_offset(year: Year, (min, max): (Year, Year)) -> String {
    let percent = if max > min {
        f64::from(year - min) * 100.0 / f64::from(max - min)
    } else {
        0.0
    };
    // Numbers based on the size of the native thumb
    format!("calc({}% + ({}px))", percent, 8.0 - percent * 0.15)
}

#[component]
pub fn YearSlider() -> Element {
    let state = use_context::<AppState>();
    let updates = use_coroutine_handle::<SelectionUpdate>();
    let mut slider_el = use_signal(|| None::<web_sys::Element>);
    let Some((bounds, year, caption, press_years)) = state.frame.read().as_ref().map(|f| {
        (
            f.slider_bounds,
            f.selection.year(),
            f.caption.clone(),
            f.press_years.clone(),
        )
    }) else {
        return rsx! {};
    };
    let (min, max) = bounds;
    let left = bubble_offset(year, bounds);

    // A snap back onto the current year does not re-render, so the thumb
    // is moved here.
    let on_input = move |evt: Event<FormData>| {
        let Some(target) = slider_target(&evt.value(), &press_years) else {
            log::warn!("[PHM] ignoring slider value {:?}", evt.value());
            return;
        };
        if let Some(el) = slider_el
            .peek()
            .as_ref()
            .and_then(|el| el.dyn_ref::<web_sys::HtmlInputElement>())
        {
            el.set_value(&target.to_string());
        }
        updates.send(SelectionUpdate::SlideYear(target));
    };

    rsx! {
        div {
            style: "margin: 8px 0; position: relative; padding-top: 24px;",
            output {
                class: "bubble",
                style: "position: absolute; top: 0; left: {left}; transform: translateX(-50%); font-size: 12px;",
                "{year}"
            }
            input {
                class: "range",
                r#type: "range",
                min: "{min}",
                max: "{max}",
                step: "1",
                value: "{year}",
                style: "width: 100%;",
                onmounted: move |evt: MountedEvent| {
                    slider_el.set(evt.data().downcast::<web_sys::Element>().cloned());
                },
                oninput: on_input,
            }
            p {
                id: "year-select-value",
                style: "margin: 4px 0 0 0; font-size: 13px; color: #444;",
                "{caption}"
            }
        }
    }
}
