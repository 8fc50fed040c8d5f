use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::pages::home_page::HomePage;
use crate::pages::search_page::{CandidatesPage, JobsPage};

// filter state lives in the query string, owned by the page's search controller
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/jobs")]
    JobsPage {},


    #[route("/candidates")]
    CandidatesPage {},

}
