use dioxus::prelude::*;

use crate::{
    components::search_components::{
        search_input_top_bar::SearchInputTopBar, search_panel_left_view::SearchPanelLeftView,
        selected_item_panel::SelectedItemPanel,
    },
    components::suspend_boundary::SuspendWrapper,
    data_definitions::{
        search_context::{CandidateSearch, JobSearch, SearchContext},
        search_handle::{SearchHandle, use_search},
    },
};

fn title_ellipsis(title: String) -> String {
    if title.chars().count() > 20 {
        title.chars().take(18).collect::<String>() + "..."
    } else {
        title
    }
}

#[component]
pub fn JobsPage() -> Element {
    let search = use_search::<JobSearch>();
    rsx! { SearchPageLayout { search } }
}

#[component]
pub fn CandidatesPage() -> Element {
    let search = use_search::<CandidateSearch>();
    rsx! { SearchPageLayout { search } }
}

#[component]
fn SearchPageLayout<C: SearchContext>(search: SearchHandle<C>) -> Element {
    let query = use_memo(move || search.controller.read().filters().query.clone());
    let title = C::TITLE;
    let page_title = use_memo(move || match query() {
        q if q.is_empty() => title.to_string(),
        q => format!("{title}: {}", title_ellipsis(q)),
    });

    rsx! {
        Title { "{page_title}" }
        div {
            id: "x-search-page-root-component",
            style: r#"
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
            "#,
            div {
                id: "x-search-input-top-bar",
                style: "
                    border-bottom: 1px solid rgb(164, 164, 164);
                    background-color: #F8FCFF;
                    flex-shrink: 0;
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    height: 76px;
                    width: 100%;
                ",
                SearchInputTopBar { search }
            }

            div {
                id: "x-search-results-bottom-space",
                style: r#"
                    width: 100%;
                    display: flex;
                    flex-direction: row;
                    flex-grow: 1;
                    max-height: calc(100% - 76px);
                "#,
                div {
                    id: "x-search-results-left-panel",
                    style: "
                        height: 100%;
                        background-color: #ECEEF2;
                        flex-grow: 1;
                        min-width: 400px;
                        width: 60%;
                    ",
                    SuspendWrapper { SearchPanelLeftView { search } }
                }
                div {
                    id: "x-search-results-right-panel",
                    style: "
                        height: 100%;
                        min-width: 300px;
                        width: 40%;
                    ",
                    SuspendWrapper { SelectedItemPanel { search } }
                }
            }
        }
    }
}
