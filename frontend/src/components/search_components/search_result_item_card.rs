//! Search result item card component.

use dioxus::prelude::*;

use crate::data_definitions::search_context::CardView;

/// One loaded result. `position` is the 1-based index within the whole result set.
#[component]
pub fn SearchResultItemCard(item_id: String, view: CardView, position: u64, selected: bool, onselect: Callback<String>) -> Element {
    let CardView { title, subtitle, details, tags } = view;
    let details_line = details.join(" · ");
    let border_color = if selected { "#367ED899" } else { "#AAAAAA33" };
    let background_color = if selected { "#4096FF33" } else { "white" };

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: stretch;
                gap: 7px;
                background: {background_color};
                border: 3px solid {border_color};
                border-radius: 8px;
                padding: 12px 16px;
                margin: 8px 8px;
                width: calc(100% - 16px);
                box-sizing: border-box;
                cursor: pointer;
            ",
            onclick: move |_| onselect.call(item_id.clone()),
            // Row 1: POSITION - TITLE - SUBTITLE
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: baseline;
                    gap: 12px;
                    width: 100%;
                ",
                span {
                    style: "font-size: 20px; font-weight: 200; color: rgba(0, 0, 0, 0.5);",
                    "{position}."
                }
                CardTitleSection { title }
                if let Some(subtitle) = subtitle {
                    span {
                        style: "
                            font-size: 16px;
                            color: rgba(0, 0, 0, 0.6);
                            white-space: nowrap;
                            overflow: hidden;
                            text-overflow: ellipsis;
                        ",
                        "{subtitle}"
                    }
                }
            }
            // Row 2: DETAILS
            if !details.is_empty() {
                div {
                    style: "
                        display: flex;
                        flex-direction: row;
                        align-items: center;
                        gap: 6px;
                        font-size: 15px;
                        color: rgba(0, 0, 0, 0.7);
                    ",
                    "{details_line}"
                }
            }
            // Row 3: TAGS
            if !tags.is_empty() {
                div {
                    style: "
                        display: flex;
                        flex-direction: row;
                        flex-wrap: wrap;
                        gap: 6px;
                    ",
                    for tag in tags {
                        span {
                            key: "{tag}",
                            style: "
                                font-size: 13px;
                                padding: 2px 8px;
                                border-radius: 1000px;
                                background-color: rgba(64, 150, 255, 0.12);
                                color: rgb(28, 33, 45);
                            ",
                            "{tag}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CardTitleSection(title: String) -> Element {
    rsx! {
        div {
            style: "
                font-size: 20px;
                line-height: 28px;
                font-weight: 400;
                color: rgb(0, 0, 0);
                overflow: hidden;
                text-overflow: ellipsis;
                white-space: nowrap;
                min-width: 0;
            ",
            "{title}"
        }
    }
}
