//! Payload range selector: two range inputs over the fixed slider span.

use crate::state::{move_high_handle, move_low_handle, AppState};
use dioxus::prelude::*;
use launch_data::SliderConfig;

/// Range selector for the scatter chart's payload window.
///
/// The bounds are exclusive: a launch whose payload equals either handle
/// is not plotted.
#[component]
pub fn PayloadRangeSlider() -> Element {
    let mut state = use_context::<AppState>();
    let slider = SliderConfig::DEFAULT;
    let low = (state.payload_low)();
    let high = (state.payload_high)();

    let on_low_input = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<f64>() {
            let high = *state.payload_high.peek();
            state.payload_low.set(move_low_handle(value, high, &slider));
        }
    };

    let on_high_input = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<f64>() {
            let low = *state.payload_low.peek();
            state.payload_high.set(move_high_handle(value, low, &slider));
        }
    };

    rsx! {
        div {
            style: "margin: 12px 0;",
            p {
                style: "margin: 0 0 4px 0;",
                "Payload range (Kg):"
            }
            div {
                style: "display: flex; flex-direction: column; gap: 4px;",
                input {
                    id: "payload-slider-low",
                    r#type: "range",
                    min: "{slider.min}",
                    max: "{slider.max}",
                    step: "{slider.step}",
                    value: "{low}",
                    oninput: on_low_input,
                }
                input {
                    id: "payload-slider-high",
                    r#type: "range",
                    min: "{slider.min}",
                    max: "{slider.max}",
                    step: "{slider.step}",
                    value: "{high}",
                    oninput: on_high_input,
                }
            }
            div {
                style: "display: flex; justify-content: space-between; font-size: 11px; color: #888;",
                for mark in slider.marks.iter() {
                    span { "{mark}" }
                }
            }
            p {
                style: "margin: 4px 0 0 0; font-size: 12px; color: #666;",
                "Showing launches with {low} kg < payload < {high} kg"
            }
        }
    }
}
