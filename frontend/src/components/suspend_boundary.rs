use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

/// Suspense plus a per-panel error boundary, so one failing panel leaves the page usable.
#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: |_s: SuspenseContext| rsx! {
                div {
                    width: "100%",
                    height: "100%",
                    display: "flex",
                    align_items: "center",
                    justify_content: "center",
                    LoadingIndicator {}
                }
            },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

#[component]
pub fn LoadingIndicator(#[props(default = "Loading…".to_string())] label: String) -> Element {
    rsx! {
        div {
            style: "color:rgba(0,0,0,0.6); font-size: 20px; padding: 10px; margin: 15px; text-align: center;",
            "{label}"
        }
    }
}
