//! Loading indicator shown while the launch table is built.

use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "Loading launch records..."
        }
    }
}
