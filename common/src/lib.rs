//! Common library exports shared between the search core and the frontend.

extern crate serde;


pub mod search_const;
pub mod errors;
pub mod query_string;
pub mod search_query;
pub mod job_filters;
pub mod candidate_filters;
pub mod search_result;
