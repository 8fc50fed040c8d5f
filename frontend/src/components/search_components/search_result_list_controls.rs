//! Controls for search result list settings.

use common::{
    search_query::{FilterSchema, SortDirection, SortField},
    search_result::ResultItem,
};
use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdArrowBack, MdArrowDownward, MdArrowForward, MdArrowUpward}};

use crate::data_definitions::{search_context::SearchContext, search_handle::SearchHandle};

#[component]
pub fn SearchResultListControls<C: SearchContext>(search: SearchHandle<C>) -> Element {
    rsx! {
        div {
            id: "x-search-panel-left-title-row",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 6px;
                padding: 7px;
                margin: 1px;
                height: 56px;
                width: 100%;
            ",
            h1 {
                style: "font-size: 20px; font-weight: 300; color:rgb(75, 87, 112);  border-bottom: 1px solid rgb(75, 87, 112);",
                SearchResultsHitCountString { search }
            }
            // empty space
            div {
                style: "
                flex-grow: 1;"
            }
            SortControls { search }
            PaginationControls { search }
        }
    }
}

#[component]
fn SortControls<C: SearchContext>(search: SearchHandle<C>) -> Element {
    let sort_by = use_memo(move || search.controller.read().filters().sort_by);
    let sort_order = use_memo(move || search.controller.read().filters().sort_order);
    let direction_label = use_memo(move || match sort_order().flipped() {
        SortDirection::Ascending => "Sort ascending",
        SortDirection::Descending => "Sort descending",
    });

    let on_sort_change = move |event: Event<FormData>| {
        let value = event.value();
        match <<C::Filters as FilterSchema>::Sort as SortField>::from_param(&value) {
            Some(key) => search.change_sort(key, sort_order()),
            None => tracing::warn!("sort select produced unknown key {value:?}"),
        }
    };

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 8px;
                margin-right: 16px;
            ",
            select {
                style: "
                    font-size: 15px;
                    padding: 4px 8px;
                    border-radius: 8px;
                    border: 1px solid rgba(0,0,0,0.3);
                    background: white;
                ",
                value: "{sort_by().as_param()}",
                onchange: on_sort_change,
                for key in <<C::Filters as FilterSchema>::Sort as SortField>::ALL.iter() {
                    option {
                        key: "{key.as_param()}",
                        value: key.as_param(),
                        selected: *key == sort_by(),
                        "{key.label()}"
                    }
                }
            }
            if sort_order() == SortDirection::Ascending {
                NavigationButton {
                    icon: MdArrowUpward,
                    label: direction_label(),
                    disabled: false,
                    onclick: move |_| search.change_sort(sort_by(), sort_order().flipped()),
                }
            } else {
                NavigationButton {
                    icon: MdArrowDownward,
                    label: direction_label(),
                    disabled: false,
                    onclick: move |_| search.change_sort(sort_by(), sort_order().flipped()),
                }
            }
        }
    }
}

#[component]
fn PaginationControls<C: SearchContext>(search: SearchHandle<C>) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 16px;
            ",

            ControlNextPrevItem { search }

            ControlNextPrevPage { search }
        }
    }
}

/// Moves the selection within the loaded list.
#[component]
fn ControlNextPrevItem<C: SearchContext>(search: SearchHandle<C>) -> Element {
    let loaded_count = use_memo(move || search.controller.read().items().len());
    let current_position = use_memo(move || {
        let controller = search.controller.read();
        let selected = controller.selected_id()?;
        controller.items().iter().position(|item| item.item_id() == selected)
    });
    let position_txt = use_memo(move || current_position().map(|i| format!("{}", i + 1)).unwrap_or("-".to_string()));
    let can_go_to_previous = use_memo(move || current_position().map(|i| i > 0).unwrap_or(false));
    let can_go_to_next = use_memo(move || match current_position() {
        Some(i) => i + 1 < loaded_count(),
        None => loaded_count() > 0,
    });

    rsx! {
        // prev result
        NavigationButton {
            icon: MdArrowUpward,
            label: "Previous Result",
            disabled: !can_go_to_previous(),
            onclick: move |_| { search.select_previous(); }
        }
        div {
            style: "
                font-size: 20px;
                line-height: 28px;
                font-weight: 400;
            ",
            "{position_txt()} / {loaded_count()}"
        }
        // next result
        NavigationButton {
            icon: MdArrowDownward,
            label: "Next Result",
            disabled: !can_go_to_next(),
            onclick: move |_| { search.select_next(); }
        }
    }
}

#[component]
fn ControlNextPrevPage<C: SearchContext>(search: SearchHandle<C>) -> Element {
    // after load-more the list spans several pages; step from its edges
    let loaded_pages = use_memo(move || {
        let controller = search.controller.read();
        let page = controller.filters().page;
        controller.loaded_pages().unwrap_or((page, page))
    });
    let first_page = use_memo(move || loaded_pages().0);
    let last_page = use_memo(move || loaded_pages().1);
    let page_label = use_memo(move || match loaded_pages() {
        (first, last) if first == last => format!("{first}"),
        (first, last) => format!("{first}–{last}"),
    });
    let total_pages = use_memo(move || search.controller.read().pagination().map(|p| p.total_pages).unwrap_or(0));
    let can_go_to_previous_page = use_memo(move || first_page() > 1);
    let can_go_to_next_page = use_memo(move || last_page() < total_pages());

    rsx! {
        // prev page
        NavigationButton {
            icon: MdArrowBack,
            label: "Previous Page",
            disabled: !can_go_to_previous_page(),
            onclick: move |_| search.go_to_page(first_page() - 1),
        }
        // current page counter
        div {
            style: "
                font-size: 16px;
                line-height: 21px;
                font-weight: 400;
                background-color: white;
                border-radius: 2px;
                border-left: 1px solid rgba(0,0,0,0.1);
                border-right: 1px solid rgba(0,0,0,0.1);
                padding: 4px 26px;
                margin-left: -28px;
                margin-right: -28px;
                align-items: center;
                align-content: center;
            ",
            "{page_label()}"
            span {
                style: "color: rgba(0,0,0,0.5);",
                "/{total_pages()}"
            }
        }
        // next page
        NavigationButton {
            icon: MdArrowForward,
            label: "Next Page",
            disabled: !can_go_to_next_page(),
            onclick: move |_| search.go_to_page(last_page() + 1),
        }
    }
}

#[component]
pub fn NavigationButton<I: dioxus_free_icons::IconShape + Clone + PartialEq + 'static>(icon: I, label: String, disabled: ReadSignal<bool>, onclick: Callback<()>) -> Element {
    let btn_color = use_memo(move || if *disabled.read() { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,1)" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            disabled: *disabled.read(),
            title: "{label}",
            style: "
                width: 32px;
                height: 32px;
                background: white;
                border-radius: 8px;
                padding: 4px;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 24px; height: 24px; color: {btn_color};" }
        }
    }
}

#[component]
fn SearchResultsHitCountString<C: SearchContext>(search: SearchHandle<C>) -> Element {
    let title = C::TITLE;
    let controller = search.controller.read();

    if let Some(error) = controller.error() {
        return rsx! { "! {error}" };
    }
    if controller.is_loading() && controller.pagination().is_none() {
        return rsx! { "..." };
    }
    match controller.result_summary() {
        Some(range) => rsx! { "{range.first}–{range.last} of {range.total} {title}" },
        None if controller.pagination().is_some() => rsx! { "No {title} found" },
        None => rsx! { "..." },
    }
}
