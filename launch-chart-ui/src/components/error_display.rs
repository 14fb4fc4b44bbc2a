//! Error banner.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    /// Bold lead-in, e.g. "Failed to load data"
    #[props(default = "Error".to_string())]
    pub heading: String,
    pub message: String,
}

/// Red banner with a heading and the error text.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "{props.heading}: " }
            "{props.message}"
        }
    }
}
