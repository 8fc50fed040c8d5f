//! Side navigation bar and page outlet.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdHome, MdWork};
use dioxus_free_icons::icons::md_social_icons::MdPeople;
use dioxus_free_icons::{Icon, IconShape};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;


/// Shared layout: icon sidebar on the left, routed page on the right.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display:flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
            ",

            div {
                id: "x-nav-sidebar",
                style: "
                    display:flex;
                    flex-direction: column;
                    gap: 24px;
                    width: 70px;
                    height: 100%;
                    background-color: #1C212D;
                    padding: 16px;
                    align-items: center;
                ",
                IconLink { to: Route::HomePage {}, icon: MdHome, label: "Home" }
                IconLink { to: Route::JobsPage {}, icon: MdWork, label: "Jobs" }
                IconLink { to: Route::CandidatesPage {}, icon: MdPeople, label: "Candidates" }
            }

            div {
                id: "x-page-container",
                style: "flex-grow:1; min-width: 100px; height: 100%;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static>(to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                title: "{label}",
                style: "color:white;",
                Icon { icon: icon, style: "width: 26px; height: 26px;" }
            }
        }
    }
}
