//! Left panel: list controls, loaded results and load-more.

use std::collections::BTreeMap;

use common::search_result::ResultItem;
use dioxus::prelude::*;

use crate::{
    components::{
        error_boundary::{ComponentErrorDisplay, RetryButton},
        search_components::{search_result_item_card::SearchResultItemCard, search_result_list_controls::SearchResultListControls},
        suspend_boundary::LoadingIndicator,
    },
    data_definitions::{search_context::SearchContext, search_handle::SearchHandle},
};

#[component]
pub fn SearchPanelLeftView<C: SearchContext>(search: SearchHandle<C>) -> Element {
    rsx! {
        div {
            id: "x-search-panel-left-wrapper",
            style: "
                display: flex;
                flex-direction: column;
                gap: 1px;
                margin: 1px;
                padding: 7px;
                padding-top: 0px;
                height: 100%;
                width: 100%;
            ",
            SearchResultListControls { search }

            div {
                style: "
                flex-grow: 1;
                width: 100%;
                max-height: calc(100% - 56px);
                ",
                SearchResultsView { search }
            }
        }
    }
}

#[component]
fn SearchResultsView<C: SearchContext>(search: SearchHandle<C>) -> Element {
    let mut result_mounted_thing = use_signal(BTreeMap::<String, Event<MountedData>>::new);
    let selected_id = use_memo(move || search.controller.read().selected_id().map(str::to_string));
    use_effect(move || {
        let Some(selected) = selected_id() else { return };
        if let Some(mounted_data) = result_mounted_thing.read().get(&selected) {
            let _x = mounted_data.scroll_to_with_options(ScrollToOptions {
                behavior: ScrollBehavior::Smooth,
                vertical: ScrollLogicalPosition::Center,
                horizontal: ScrollLogicalPosition::Center,
            });
        }
    });

    let controller = search.controller.read();
    let error = controller.error().map(str::to_string);
    let is_loading = controller.is_loading();
    let has_next_page = controller.pagination().map(|p| p.has_next_page).unwrap_or(false);
    let first_position = controller.result_summary().map(|range| range.first).unwrap_or(1);
    let cards = controller
        .items()
        .iter()
        .map(|item| (item.item_id().to_string(), C::card(item)))
        .collect::<Vec<_>>();
    let loaded_nothing = cards.is_empty();
    let has_response = controller.pagination().is_some();
    drop(controller);

    // an error with nothing to show replaces the list; otherwise the stale list stays visible
    if loaded_nothing {
        if let Some(error) = error {
            return rsx! {
                ComponentErrorDisplay {
                    error_txt: error,
                    RetryButton { onclick: move |_| search.refresh() }
                }
            };
        }
        if is_loading || !has_response {
            return rsx! { LoadingIndicator {} };
        }
        return rsx! {
            div {
                style: "color:rgba(0,0,0,0.6); font-size: 20px; padding: 10px; margin: 15px;",
                "Nothing matches these filters."
            }
        };
    }

    rsx! {
        ul {
            id: "x-search-panel-results-wrapper",
            style: "
                width: 100%;
                height: 100%;
                overflow-y: auto;
            ",
            if let Some(error) = error {
                li {
                    ComponentErrorDisplay {
                        error_txt: error,
                        RetryButton { onclick: move |_| search.refresh() }
                    }
                }
            }
            for (index, (item_id, view)) in cards.into_iter().enumerate() {
                li {
                    key: "{item_id}",
                    onmounted: {
                        let item_id = item_id.clone();
                        move |e| { result_mounted_thing.write().insert(item_id.clone(), e); }
                    },
                    SearchResultItemCard {
                        item_id: item_id.clone(),
                        selected: selected_id.read().as_deref() == Some(item_id.as_str()),
                        view,
                        position: first_position + index as u64,
                        onselect: move |id: String| search.select(Some(id)),
                    }
                }
            }
            if is_loading {
                li { LoadingIndicator { label: "Updating results…" } }
            } else if has_next_page {
                li {
                    style: "display: flex; justify-content: center; padding: 12px;",
                    button {
                        class: "x-hover-shadow-background",
                        style: "
                            border: 1px solid rgba(0,0,0,0.4);
                            border-radius: 1000px;
                            background: white;
                            padding: 8px 20px;
                            font-size: 16px;
                            cursor: pointer;
                        ",
                        onclick: move |_| search.load_more(),
                        "Load more"
                    }
                }
            }
        }
    }
}
