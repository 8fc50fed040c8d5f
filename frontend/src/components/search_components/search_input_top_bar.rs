use common::search_query::FilterSchema;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdSearch, md_communication_icons::MdLocationOn, md_navigation_icons::MdClose}};

use crate::{
    components::search_components::search_facets::FacetButtonStrip,
    data_definitions::{search_context::SearchContext, search_handle::SearchHandle},
};


/// Text and location inputs, facet chips and the clear-filters button.
///
/// Typing is debounced by the controller; only the last value of a burst
/// reaches the server.
#[component]
pub fn SearchInputTopBar<C: SearchContext>(search: SearchHandle<C>) -> Element {
    // seeded once from the URL; afterwards these hold what the user types
    let mut text = use_signal(|| search.controller.peek().filters().query.clone());
    let mut location = use_signal(|| {
        search.controller.peek().filters().filters.location().unwrap_or_default().to_string()
    });
    let has_active_filters = use_memo(move || search.controller.read().has_active_filters());
    let search_pending = use_memo(move || search.controller.read().is_search_pending());
    let search_icon_color = use_memo(move || if search_pending() { "blue" } else { "#6B7280" });

    let on_text_input = move |event: Event<FormData>| {
        let value = event.value();
        text.set(value.clone());
        search.search(value, Some(location.peek().clone()));
    };
    let on_location_input = move |event: Event<FormData>| {
        let value = event.value();
        location.set(value.clone());
        search.search(text.peek().clone(), Some(value));
    };
    let clear_filters = move |_| {
        text.set(String::new());
        location.set(String::new());
        search.reset();
    };

    rsx! {
        div {
            style: "
                display:flex;
                flex-direction: row;
                align-items: center;
                gap: 12px;
                padding: 10px 16px;
                width: 100%;
            ",
            div {
                id: "x-search-input-search-box",
                style: "
                    display:flex;
                    align-items:center;
                    gap: 12px;
                    background-color: white;
                    border-radius: 9999px;
                    padding: 10px 14px;
                    height: 44px;
                    color: #111827;
                    border: 1px solid rgba(101, 101, 101, 0.8);
                    width: 420px;
                    flex-shrink: 0;
                ",
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:{search_icon_color()};" }
                input {
                    r#type: "text",
                    placeholder: C::PLACEHOLDER,
                    style: "
                        flex:1;
                        border: none;
                        outline: none;
                        background: transparent;
                        color: #111827;
                        font-size: 18px;
                        font-family: Roboto, sans-serif;
                    ",
                    value: "{text}",
                    oninput: on_text_input,
                }
            }
            div {
                id: "x-search-input-location-box",
                style: "
                    display:flex;
                    align-items:center;
                    gap: 8px;
                    background-color: white;
                    border-radius: 9999px;
                    padding: 10px 14px;
                    height: 44px;
                    border: 1px solid rgba(101, 101, 101, 0.8);
                    width: 220px;
                    flex-shrink: 0;
                ",
                Icon { icon: MdLocationOn, style: "width: 20px; height: 20px; color:#6B7280;" }
                input {
                    r#type: "text",
                    placeholder: "Location",
                    style: "
                        flex:1;
                        min-width: 0;
                        border: none;
                        outline: none;
                        background: transparent;
                        font-size: 18px;
                        font-family: Roboto, sans-serif;
                    ",
                    value: "{location}",
                    oninput: on_location_input,
                }
            }

            FacetButtonStrip { search }

            if has_active_filters() {
                button {
                    class: "x-hover-shadow-background",
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 4px;
                        border: 1px solid rgba(0,0,0,0.4);
                        border-radius: 1000px;
                        background: white;
                        padding: 8px 12px;
                        cursor: pointer;
                        flex-shrink: 0;
                        font-size: 15px;
                    ",
                    onclick: clear_filters,
                    Icon { icon: MdClose, style: "width: 18px; height: 18px;" }
                    "Clear filters"
                }
            }
        }
    }
}
