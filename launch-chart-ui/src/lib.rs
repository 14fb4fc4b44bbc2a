//! Shared Dioxus components and D3.js bridge for the launch records dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js pie and scatter charts via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: RSX components (site dropdown, payload slider, chart panels)

pub mod components;
pub mod js_bridge;
pub mod state;
