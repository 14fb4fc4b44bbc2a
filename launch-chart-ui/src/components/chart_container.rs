//! Chart panel that D3 renders into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id D3 renders into
    pub id: String,
    /// Text shown over the empty panel when there is nothing to draw;
    /// empty for none
    #[props(default = String::new())]
    pub placeholder: String,
    #[props(default = 400)]
    pub min_height: u32,
}

/// Fixed-height panel for one D3.js chart.
///
/// The inner div always exists so pending renders can find it; the
/// placeholder is layered on top when no chart applies.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%; border: 1px solid #eee; border-radius: 4px;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            if !props.placeholder.is_empty() {
                div {
                    style: "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; color: #999;",
                    "{props.placeholder}"
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
