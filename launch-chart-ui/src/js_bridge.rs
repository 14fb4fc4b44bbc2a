//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js`. They are evaluated as
//! globals (no ES modules) once D3 has loaded and exposed via `window.*`.
//! This module serializes chart data and calls those globals.

use launch_db::models::{PieView, ScatterView};
use serde_json::json;

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");
static SCATTER_CHART_JS: &str = include_str!("../assets/js/scatter-chart.js");

/// D3 v7, injected when the host page does not already provide `d3`.
const D3_SCRIPT_URL: &str = "https://cdn.jsdelivr.net/npm/d3@7";

/// Globals promoted to `window` after the chart scripts are evaluated.
const CHART_GLOBALS: [&str; 6] = [
    "renderPieChart",
    "renderScatterChart",
    "destroyChart",
    "initTooltip",
    "showTooltip",
    "hideTooltip",
];

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Launch dashboard JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a string as a single-quoted JS literal.
pub(crate) fn js_string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// Loads D3 from a CDN if the page has not. The chart scripts are stored on
/// `window` and evaluated at global scope via indirect eval once `d3` exists,
/// so their function declarations are not block-scoped inside the
/// `setInterval` callback. Safe to call repeatedly.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, PIE_CHART_JS, SCATTER_CHART_JS].join("\n");

    let store_js = format!(
        "if (!window.__launchChartsReady) {{ window.__launchChartScripts = {}; }}",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    call_js(&format!(
        "if (typeof d3 === 'undefined' && !document.getElementById('d3-script')) {{ \
           var s = document.createElement('script'); s.id = 'd3-script'; s.src = {}; \
           document.head.appendChild(s); }}",
        js_string_literal(D3_SCRIPT_URL)
    ));

    let promote: String = CHART_GLOBALS
        .iter()
        .map(|name| format!("if (typeof {0} !== 'undefined') window.{0} = {0};", name))
        .collect::<Vec<_>>()
        .join("\n");

    let init_js = format!(
        r#"
        (function() {{
            if (window.__launchChartsReady || window.__launchChartsPolling) return;
            window.__launchChartsPolling = true;
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__launchChartScripts);
                    delete window.__launchChartScripts;
                    {promote}
                    window.__launchChartsReady = true;
                    console.log('Launch dashboard charts initialized');
                }}
            }}, 100);
        }})();
        "#
    );
    let _ = js_sys::eval(&init_js);
}

/// Per-container render tickets on `window`. Every render or destroy call
/// takes the next ticket for its container; a pending poll whose ticket is no
/// longer current gives up, so only the latest call ever reaches the DOM.
const RENDER_SEQ_JS: &str =
    "var seq = window.__launchRenderSeq = window.__launchRenderSeq || {};";

/// JS that calls `window.<render_fn>(container, data, config)` once D3, the
/// chart scripts and the container element are all available, unless a later
/// render or destroy for the same container has been issued by then.
fn render_script(
    render_fn: &str,
    container_id: &str,
    data_json: &str,
    config_json: &str,
) -> String {
    let container = js_string_literal(container_id);
    let data = js_string_literal(data_json);
    let config = js_string_literal(config_json);
    format!(
        r#"
        (function() {{
            {RENDER_SEQ_JS}
            var id = {container};
            var ticket = (seq[id] || 0) + 1;
            seq[id] = ticket;
            var poll = setInterval(function() {{
                if (seq[id] !== ticket) {{
                    clearInterval(poll);
                    return;
                }}
                if (window.__launchChartsReady &&
                    typeof window.{render_fn} !== 'undefined' &&
                    document.getElementById(id)) {{
                    clearInterval(poll);
                    try {{
                        window.{render_fn}(id, {data}, {config});
                    }} catch(e) {{ console.error('[Launch] {render_fn} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    )
}

/// JS that supersedes any pending render for the container and clears it.
fn destroy_script(container_id: &str) -> String {
    let container = js_string_literal(container_id);
    format!(
        r#"
        (function() {{
            {RENDER_SEQ_JS}
            var id = {container};
            seq[id] = (seq[id] || 0) + 1;
            if (typeof window.destroyChart !== 'undefined') {{
                window.destroyChart(id);
            }} else {{
                var el = document.getElementById(id);
                if (el) el.innerHTML = '';
            }}
        }})();
        "#,
    )
}

fn render_when_ready(render_fn: &str, container_id: &str, data_json: &str, config_json: &str) {
    call_js(&render_script(render_fn, container_id, data_json, config_json));
}

/// Render the success pie chart.
pub fn render_pie_chart(container_id: &str, view: &PieView) {
    let data_json = serde_json::to_string(&view.slices).unwrap_or_default();
    let config_json = json!({ "title": view.title }).to_string();
    log::debug!(
        "js_bridge: pie chart with {} slices into #{}",
        view.slices.len(),
        container_id
    );
    render_when_ready("renderPieChart", container_id, &data_json, &config_json);
}

/// Render the payload vs. outcome scatter chart over the x domain `[x_min, x_max]`.
pub fn render_scatter_chart(container_id: &str, view: &ScatterView, x_min: f64, x_max: f64) {
    let data_json = serde_json::to_string(&view.points).unwrap_or_default();
    let config_json = json!({
        "title": view.title,
        "xLabel": "Payload Mass (kg)",
        "yLabel": "class",
        "xMin": x_min,
        "xMax": x_max,
    })
    .to_string();
    log::debug!(
        "js_bridge: scatter chart with {} points into #{}",
        view.points.len(),
        container_id
    );
    render_when_ready("renderScatterChart", container_id, &data_json, &config_json);
}

/// Clear whatever chart is drawn in the given container and cancel any
/// render still waiting for D3.
pub fn destroy_chart(container_id: &str) {
    log::debug!("js_bridge: clearing #{}", container_id);
    call_js(&destroy_script(container_id));
}
