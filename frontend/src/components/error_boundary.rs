//! Error boundaries and the shared error display.

use dioxus::prelude::*;

/// Last-resort boundary around whole pages.
#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                rsx! {
                    h1 {
                        style: "color:darkred; font-size: 40px; padding: 10px; margin: 15px;",
                        "Something went wrong",
                    }
                    p {
                        style: "color:darkred; font-size: 20px; padding: 10px; margin: 15px;",
                        "While rendering: {boundary_name}"
                    }
                    a {
                        href: "/",
                        style: "color:#1D4ED8; font-size: 20px; padding: 10px; margin: 15px;",
                        "Back to the home page"
                    }
                    pre {
                        style: "color:black; border: 1px solid #FCA5A5; padding: 10px; border-radius: 5px; margin: 15px; text-wrap: auto;",
                        "{err:#?}"
                    }
                }
            },
            children
        }
    }
}

/// Boundary around a single panel; offers to re-render it.
#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(e) => format!("{:#?}", e.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        RetryButton { onclick: move |_| err.clear_errors() }
                    }
                }
            },
            div {
                width: "100%",
                height: "100%",
                {children}
            }
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            width: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",
            padding: "16px",

            div {
                style: "color:darkred; font-size: 22px; font-weight: 500; margin: 5px;",
                "Could not load results",
            }

            pre {
                style: "color:darkred; border: 1px solid #FCA5A5; background: #FEF2F2; padding: 10px; border-radius: 5px; margin: 5px; text-wrap: auto; max-width: 500px; max-height: 300px; overflow-y: auto;",
                "{error_txt}"
            }

            {children}
        }
    }
}

#[component]
pub fn RetryButton(onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            style: "color:#1D4ED8; font-size: 18px; border: 1px solid #1D4ED8; background: white; padding: 8px 16px; border-radius: 5px; margin: 10px; cursor: pointer;",
            onclick: move |e| onclick.call(e),
            "Try again"
        }
    }
}
