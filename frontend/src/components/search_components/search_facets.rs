use common::search_query::FilterSchema;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_navigation_icons::MdArrowDropDown, md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}}};

use crate::data_definitions::{search_context::SearchContext, search_handle::SearchHandle};


/// One chip per facet group; at most one dropdown is open at a time.
#[component]
pub fn FacetButtonStrip<C: SearchContext>(search: SearchHandle<C>) -> Element {
    let expanded_facet = use_signal(|| None::<usize>);

    rsx! {
        div {
            id: "x-search-input-facet-chips-wrapper",
            style: "
                display: flex;
                flex-direction:row;
                align-items: center;
                gap: 12px;
                flex-shrink: 0;
            ",
            for group_index in 0..C::facet_groups().len() {
                FacetButton { key: "{group_index}", search, group_index, expanded_facet }
            }
        }
    }
}

#[component]
fn FacetButton<C: SearchContext>(search: SearchHandle<C>, group_index: usize, expanded_facet: Signal<Option<usize>>) -> Element {
    let group = C::facet_groups()[group_index];
    let is_expanded = use_memo(move || *expanded_facet.read() == Some(group_index));
    let selected_count = use_memo(move || {
        let controller = search.controller.read();
        let filters = &controller.filters().filters;
        group.options.iter().filter(|option| filters.is_selected(group.field, option.value)).count()
    });
    let border_color = use_memo(move || if selected_count() > 0 { "rgba(0,0,255,0.9)" } else { "rgba(0,0,0,0.5)" });
    let button_z_level = use_memo(move || if is_expanded() { 1000 } else { 888 });

    rsx! {
        div {
            style: "position: relative;",
            button {
                onclick: move |_| {
                    if is_expanded() {
                        expanded_facet.set(None);
                    } else {
                        expanded_facet.set(Some(group_index));
                    }
                },
                style: "
                    cursor: pointer;
                    display: flex;
                    align-items: center;
                    gap: 6px;
                    border: 2px solid {border_color()};
                    border-radius: 1000px;
                    background-color: white;
                    box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.1);
                    position: relative;
                    padding: 8px 10px;
                    font-size: 15px;
                    z-index: {button_z_level()};
                    white-space: nowrap;
                ",
                "{group.display_name}"
                if selected_count() > 0 {
                    span { style: "color: rgba(0,0,255,0.9); font-weight: 500;", "({selected_count()})" }
                }
                Icon { icon: MdArrowDropDown, style: "width: 20px; height: 20px; color:rgba(0,0,0,0.9);" }
            }
            if is_expanded() {
                // click-away backdrop
                div {
                    style: "
                        position: fixed;
                        top: 0px;
                        left: 0px;
                        z-index: 999;
                        background-color: rgba(0,0,0,0.1);
                        width: 100vw;
                        height: 100vh;
                    ",
                    onclick: move |_| expanded_facet.set(None),
                }
                ul {
                    style: "
                        position: absolute;
                        top: 48px;
                        left: 0px;
                        min-width: 240px;
                        max-height: calc(100vh - 140px);
                        overflow-y: auto;
                        background-color: white;
                        border: 1px solid rgba(0,0,0,0.5);
                        border-radius: 10px;
                        padding: 8px;
                        box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.1);
                        z-index: 1000;
                    ",
                    for option in group.options.iter() {
                        li {
                            key: "{option.value}",
                            FacetCheckbox { search, group_index, value: option.value, label: option.label }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FacetCheckbox<C: SearchContext>(search: SearchHandle<C>, group_index: usize, value: &'static str, label: &'static str) -> Element {
    let field = C::facet_groups()[group_index].field;
    let is_checked = use_memo(move || search.controller.read().filters().filters.is_selected(field, value));

    rsx! {
        div {
            class: "x-facet-list-item",
            style: "
                display: flex;
                flex-direction: row;
                gap: 10px;
                cursor: pointer;
                padding: 4px;
                margin: 2px;
                align-items: center;
            ",
            onclick: move |_| search.toggle(field, value),

            if is_checked() {
                Icon { icon: MdCheckBox, style: "width: 24px; height: 24px; color: rgb(28, 33, 45); flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 24px; height: 24px; color: black; flex-shrink: 0;" }
            }
            div {
                style: "
                    font-size: 17px;
                    line-height: 24px;
                    color: rgb(0, 0, 0);
                    white-space: nowrap;
                ",
                "{label}"
            }
        }
    }
}
