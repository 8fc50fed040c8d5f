//! Detail view of the selected result.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdSearchOff, md_navigation_icons::MdClose}};

use crate::data_definitions::{search_context::{CardView, SearchContext}, search_handle::SearchHandle};

#[component]
pub fn SelectedItemPanel<C: SearchContext>(search: SearchHandle<C>) -> Element {
    let selected_view = use_memo(move || search.controller.read().selected_item().map(C::card));

    let Some(view) = selected_view() else {
        return rsx! { NoItemSelected {} };
    };

    rsx! {
        div {
            id: "x-selected-item-panel",
            style: "
                display: flex;
                flex-direction: column;
                gap: 14px;
                padding: 20px 24px;
                height: 100%;
                box-sizing: border-box;
                overflow-y: auto;
                background: white;
            ",
            div {
                style: "display: flex; flex-direction: row; align-items: flex-start; gap: 12px;",
                h2 {
                    style: "font-size: 26px; font-weight: 500; color: #0F172A; flex-grow: 1; margin: 0;",
                    "{view.title}"
                }
                button {
                    class: "x-hover-shadow-background",
                    title: "Close",
                    style: "border: none; background: transparent; cursor: pointer; padding: 4px;",
                    onclick: move |_| search.select(None),
                    Icon { icon: MdClose, style: "width: 22px; height: 22px;" }
                }
            }
            if let Some(subtitle) = view.subtitle.as_ref() {
                div { style: "font-size: 18px; color: rgba(0,0,0,0.6);", "{subtitle}" }
            }
            ItemDetails { view: view.clone() }
        }
    }
}

#[component]
fn ItemDetails(view: CardView) -> Element {
    rsx! {
        ul {
            style: "display: flex; flex-direction: column; gap: 6px; font-size: 16px; color: #111827;",
            for detail in view.details.iter() {
                li { key: "{detail}", "{detail}" }
            }
        }
        if !view.tags.is_empty() {
            div {
                style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 8px;",
                for tag in view.tags.iter() {
                    span {
                        key: "{tag}",
                        style: "
                            font-size: 14px;
                            padding: 3px 10px;
                            border-radius: 1000px;
                            background-color: rgba(64, 150, 255, 0.12);
                        ",
                        "{tag}"
                    }
                }
            }
        }
    }
}

#[component]
fn NoItemSelected() -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 12px;
                height: 100%;
                color: rgba(0,0,0,0.5);
                font-size: 20px;
            ",
            Icon { icon: MdSearchOff, style: "width: 48px; height: 48px;" }
            "No item selected"
        }
    }
}
