use dioxus::{logger::tracing, prelude::*};

use crate::api::listing_api::ApiSession;
use crate::components::error_boundary::GlobalErrorBoundary;
use crate::config::ClientConfig;
use crate::routes::Route;
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config = use_context_provider(|| {
        let config = ClientConfig::from_build_env();
        tracing::info!(api = %config.api_base_url, page_size = config.page_size, "starting job board client");
        config
    });
    use_context_provider(move || ApiSession::from_browser_storage(config.api_base_url.clone()));

    rsx! {
        document::Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        document::Link { rel: "preconnect", href: "https://fonts.gstatic.com" }
        document::Link { rel: "stylesheet", href: "https://fonts.googleapis.com/css2?family=Roboto:ital,wght@0,100..900;1,100..900&display=swap" }

        document::Link { rel: "stylesheet", href: MAIN_CSS }
        GlobalErrorBoundary {
            boundary_name: "App".to_string(),
            Router::<Route> {}
        }
    }
}
