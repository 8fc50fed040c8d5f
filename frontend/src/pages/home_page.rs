use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdWork;
use dioxus_free_icons::icons::md_social_icons::MdPeople;
use dioxus_free_icons::{Icon, IconShape};

use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Job Board - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            MainTitle {}

            // Cards Row
            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                    align-items: stretch;
                    margin-top: 10px;
                ",
                EntryCard {
                    to: Route::JobsPage {},
                    icon: MdWork,
                    title: "Find a job",
                    description: "Browse open positions by keyword, location, job type, experience level and skills.",
                    background: "linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%)",
                }
                EntryCard {
                    to: Route::CandidatesPage {},
                    icon: MdPeople,
                    title: "Find candidates",
                    description: "Search candidate profiles by skills, experience and availability.",
                    background: "linear-gradient(135deg, #0B7A2B 0%, #23A340 60%, #178E35 100%)",
                }
            }
        }
    }
}


#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                align-items: center;
                gap: 8px;
                color: #0F172A;
                font-size: 46px;
                font-weight: 500;
                letter-spacing: -0.02em;
            ",
            span { "Welcome to the" }
            span { style: "color:#4F46E5;", "Job Board" }
        }
    }
}

#[component]
fn EntryCard<T: IconShape + Clone + PartialEq + 'static>(
    to: Route,
    icon: T,
    title: String,
    description: String,
    background: String,
) -> Element {
    rsx! {
        Link {
            to: to,
            div {
                style: "
                    display:flex;
                    flex-direction: column;
                    gap: 14px;
                    width: 520px;
                    min-height: 220px;
                    border-radius: 22px;
                    padding: 22px 22px 26px 22px;
                    background: {background};
                    color: white;
                    box-shadow: 0 8px 24px rgba(0,0,0,0.12);
                    box-sizing: border-box;
                ",
                div {
                    style: "display:flex; align-items:center; gap: 12px; font-size: 30px; font-weight: 500;",
                    Icon { icon: icon, style: "width: 32px; height: 32px;" }
                    "{title}"
                }
                div {
                    style: "
                        font-size: 20px;
                        font-weight: 500;
                        line-height: 1.5;
                        color: rgba(255,255,255,0.92);
                    ",
                    "{description}"
                }
            }
        }
    }
}
