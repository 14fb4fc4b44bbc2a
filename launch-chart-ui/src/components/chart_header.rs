//! Dashboard page heading.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    /// Optional line under the title, e.g. the dataset size
    #[props(default = String::new())]
    pub subtitle: String,
}

/// Centered page heading in the dashboard's title color.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 12px; text-align: center;",
            h1 {
                style: "margin: 0 0 4px 0; color: #503D36; font-size: 40px;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
