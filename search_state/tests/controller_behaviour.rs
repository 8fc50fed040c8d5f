use std::time::Duration;

use common::{
    errors::FilterError,
    job_filters::{JobFilterField, JobFilters, JobSortKey},
    search_query::{FilterState, NumericRange, SortDirection},
    search_result::{JobItem, PageResponse, PaginationMetadata},
};
use search_state::{
    Completion, ControllerConfig, FetchError, FetchMode, FetchPhase, MemoryUrlStore, ResultRange, SearchController,
};

type JobController = SearchController<JobFilters, JobItem, MemoryUrlStore>;

fn job(id: &str) -> JobItem {
    JobItem { id: id.to_string(), title: format!("Job {id}"), ..Default::default() }
}

fn page(ids: &[&str], current_page: u32, total_pages: u32, total_items: u64) -> PageResponse<JobItem> {
    PageResponse {
        data: ids.iter().map(|id| job(id)).collect(),
        pagination: PaginationMetadata {
            current_page,
            total_pages,
            total_items,
            has_next_page: current_page < total_pages,
            has_previous_page: current_page > 1,
        },
    }
}

fn ids(controller: &JobController) -> Vec<&str> {
    controller.items().iter().map(|item| item.id.as_str()).collect()
}

fn mounted(url: &str) -> (JobController, MemoryUrlStore) {
    let store = MemoryUrlStore::new(url);
    let mut controller = JobController::new(ControllerConfig::default(), store.clone());
    let ticket = controller.initial_fetch().expect("immediate load");
    assert_eq!(
        controller.complete(ticket.seq, Ok(page(&["j1", "j2"], 1, 3, 25))),
        Completion::Applied
    );
    (controller, store)
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn category_filter_scenario() {
    let store = MemoryUrlStore::new("");
    let mut controller = JobController::new(ControllerConfig::default(), store.clone());
    assert_eq!(controller.filters(), &FilterState::<JobFilters>::default());
    assert_eq!(controller.filters().sort_by, JobSortKey::CreatedAt);
    assert_eq!(controller.filters().sort_order, SortDirection::Descending);

    let initial = controller.initial_fetch().expect("initial fetch");
    assert_eq!(initial.request.to_query_string(), "page=1&limit=10&sortBy=createdAt&sortOrder=desc");
    controller.complete(initial.seq, Ok(page(&[], 1, 0, 0)));

    let ticket = controller
        .update_filters(|s| s.filters.category_id = Some("cat-42".to_string()))
        .expect("valid")
        .expect("changed");
    assert_eq!(controller.filters().page, 1);
    assert_eq!(store.current(), "categoryId=cat-42");
    assert_eq!(
        ticket.request.to_query_string(),
        "categoryId=cat-42&page=1&limit=10&sortBy=createdAt&sortOrder=desc"
    );
    assert!(controller.is_loading());

    assert_eq!(controller.complete(ticket.seq, Ok(page(&["j1", "j2"], 1, 3, 25))), Completion::Applied);
    assert_eq!(ids(&controller), vec!["j1", "j2"]);
    assert!(controller.has_active_filters());
    assert_eq!(controller.phase(), FetchPhase::Idle);
}

#[test]
fn initial_state_is_read_from_url() {
    let store = MemoryUrlStore::new("?q=rust&jobType=contract&jobType=full-time&page=2&sortBy=salary&sortOrder=asc");
    let controller = JobController::new(ControllerConfig::default(), store);
    let state = controller.filters();
    assert_eq!(state.query, "rust");
    assert_eq!(state.filters.job_types.len(), 2);
    assert_eq!(state.page, 2);
    assert_eq!(state.sort_by, JobSortKey::Salary);
    assert_eq!(state.sort_order, SortDirection::Ascending);
}

#[test]
fn deferred_controller_waits_for_first_operation() {
    let config = ControllerConfig { immediate: false, ..Default::default() };
    let mut controller = JobController::new(config, MemoryUrlStore::new(""));
    assert!(controller.initial_fetch().is_none());
    assert!(!controller.is_loading());
}

#[test]
fn unchanged_update_is_a_no_op() {
    let (mut controller, store) = mounted("?categoryId=cat-1");
    let ticket = controller.go_to_page(3).expect("valid").expect("changed");
    controller.complete(ticket.seq, Ok(page(&["j5"], 3, 3, 25)));
    let writes_before = store.writes().len();

    let result = controller
        .update_filters(|s| s.filters.category_id = Some("cat-1".to_string()))
        .expect("valid");
    assert!(result.is_none());
    assert_eq!(controller.filters().page, 3);
    assert_eq!(store.writes().len(), writes_before);
    assert!(!controller.is_loading());

    // sets compare by value, insertion order does not matter
    controller
        .update_filters(|s| {
            s.filters.skill_ids.insert("b".to_string());
            s.filters.skill_ids.insert("a".to_string());
        })
        .expect("valid");
    let again = controller
        .update_filters(|s| s.filters.skill_ids = ["a".to_string(), "b".to_string()].into())
        .expect("valid");
    assert!(again.is_none());
}

#[test]
fn changing_a_constraint_resets_page_even_if_page_was_requested() {
    let (mut controller, store) = mounted("?page=4");
    assert_eq!(controller.filters().page, 4);

    let ticket = controller
        .update_filters(|s| {
            s.page = 7;
            s.filters.company_id = Some("acme".to_string());
        })
        .expect("valid")
        .expect("changed");
    assert_eq!(controller.filters().page, 1);
    assert_eq!(ticket.request.get("page"), Some("1"));
    assert_eq!(store.current(), "companyId=acme");

    controller.change_sort(JobSortKey::Title, SortDirection::Ascending).expect("valid");
    assert_eq!(controller.filters().page, 1);
}

#[test]
fn stale_response_never_overwrites_newer_state() {
    let (mut controller, _) = mounted("");
    let first = controller.update_filters(|s| s.query = "rust".to_string()).unwrap().unwrap();
    let second = controller.update_filters(|s| s.query = "go".to_string()).unwrap().unwrap();

    assert_eq!(controller.complete(second.seq, Ok(page(&["go-1"], 1, 1, 1))), Completion::Applied);
    assert_eq!(controller.complete(first.seq, Ok(page(&["rust-1", "rust-2"], 1, 1, 2))), Completion::Stale);

    assert_eq!(ids(&controller), vec!["go-1"]);
    assert_eq!(controller.pagination().map(|p| p.total_items), Some(1));
    assert!(!controller.is_loading());
}

#[test]
fn stale_response_arriving_first_is_also_dropped() {
    let (mut controller, _) = mounted("");
    let first = controller.update_filters(|s| s.query = "rust".to_string()).unwrap().unwrap();
    let second = controller.reset_filters();

    assert_eq!(controller.complete(first.seq, Ok(page(&["rust-1"], 1, 1, 1))), Completion::Stale);
    assert!(controller.is_loading());
    assert_eq!(controller.complete(second.seq, Ok(page(&["all-1", "all-2"], 1, 1, 2))), Completion::Applied);
    assert_eq!(ids(&controller), vec!["all-1", "all-2"]);
}

#[test]
fn load_more_appends_and_page_jump_replaces() {
    let (mut controller, store) = mounted("");
    let writes_before = store.writes().len();

    let more = controller.load_more().expect("has next page");
    assert_eq!(more.mode, FetchMode::Append);
    assert_eq!(more.request.get("page"), Some("2"));
    assert!(controller.load_more().is_none(), "a fetch is already in flight");

    controller.complete(more.seq, Ok(page(&["j3", "j4"], 2, 3, 25)));
    assert_eq!(ids(&controller), vec!["j1", "j2", "j3", "j4"]);
    assert!(controller.pagination().expect("metadata").has_next_page);
    assert_eq!(store.writes().len(), writes_before);
    assert_eq!(
        controller.result_summary(),
        Some(ResultRange { first: 1, last: 4, total: 25 })
    );

    let jump = controller.go_to_page(3).unwrap().expect("changed");
    assert_eq!(jump.mode, FetchMode::Replace);
    controller.complete(jump.seq, Ok(page(&["j21", "j22", "j23", "j24", "j25"], 3, 3, 25)));
    assert_eq!(ids(&controller), vec!["j21", "j22", "j23", "j24", "j25"]);
    assert!(!controller.pagination().expect("metadata").has_next_page);
    assert_eq!(
        controller.result_summary(),
        Some(ResultRange { first: 21, last: 25, total: 25 })
    );

    assert!(controller.load_more().is_none(), "no next page");
}

#[test]
fn jumping_to_current_page_collapses_load_more_window() {
    let (mut controller, _) = mounted("");
    let more = controller.load_more().expect("has next page");
    controller.complete(more.seq, Ok(page(&["j3", "j4"], 2, 3, 25)));
    assert_eq!(controller.loaded_pages(), Some((1, 2)));

    let jump = controller.go_to_page(1).unwrap().expect("window spans two pages");
    assert_eq!(jump.mode, FetchMode::Replace);
    assert_eq!(jump.request.get("page"), Some("1"));
    controller.complete(jump.seq, Ok(page(&["j1", "j2"], 1, 3, 25)));
    assert_eq!(ids(&controller), vec!["j1", "j2"]);
    assert_eq!(controller.loaded_pages(), Some((1, 1)));

    // a single-page window is already what was asked for
    assert!(controller.go_to_page(1).unwrap().is_none());
}

#[test]
fn jumping_to_current_page_supersedes_pending_append() {
    let (mut controller, _) = mounted("");
    let more = controller.load_more().expect("has next page");
    let jump = controller.go_to_page(1).unwrap().expect("append in flight");
    assert_eq!(controller.complete(more.seq, Ok(page(&["j3", "j4"], 2, 3, 25))), Completion::Stale);
    assert_eq!(controller.complete(jump.seq, Ok(page(&["j1", "j2"], 1, 3, 25))), Completion::Applied);
    assert_eq!(ids(&controller), vec!["j1", "j2"]);
}

#[test]
fn result_positions_follow_server_page_length() {
    // configured for 10 per page, the server caps at 4
    let (mut controller, _) = mounted("");
    let jump = controller.go_to_page(2).unwrap().expect("changed");
    controller.complete(jump.seq, Ok(page(&["j5", "j6", "j7", "j8"], 2, 3, 10)));
    assert_eq!(controller.result_summary(), Some(ResultRange { first: 5, last: 8, total: 10 }));

    let last = controller.go_to_page(3).unwrap().expect("changed");
    controller.complete(last.seq, Ok(page(&["j9", "j10"], 3, 3, 10)));
    assert_eq!(controller.result_summary(), Some(ResultRange { first: 9, last: 10, total: 10 }));
}

#[test]
fn load_more_before_any_response_does_nothing() {
    let config = ControllerConfig { immediate: false, ..Default::default() };
    let mut controller = JobController::new(config, MemoryUrlStore::new(""));
    assert!(controller.load_more().is_none());
}

#[test]
fn rapid_searches_coalesce_into_one_fetch() {
    let (mut controller, _) = mounted("");

    controller.search("a", None, ms(0));
    controller.search("ab", None, ms(120));
    let due = controller.search("abc", Some("Berlin".to_string()), ms(240));
    assert_eq!(due, ms(540));

    let mut tickets = Vec::new();
    for now in (0..=1_000).step_by(20) {
        if let Some(ticket) = controller.poll_search(ms(now)).expect("valid") {
            tickets.push((now, ticket));
        }
    }
    assert_eq!(tickets.len(), 1);
    let (fired_at, ticket) = &tickets[0];
    assert_eq!(*fired_at, 540);
    assert_eq!(ticket.request.get("search"), Some("abc"));
    assert_eq!(ticket.request.get("location"), Some("Berlin"));
    assert_eq!(controller.filters().query, "abc");
}

#[test]
fn text_typed_after_location_keeps_the_location() {
    let (mut controller, store) = mounted("");
    controller.search("", Some("Berlin".to_string()), ms(0));
    controller.search("rust", None, ms(100));

    let ticket = controller.poll_search(ms(400)).unwrap().expect("changed");
    assert_eq!(ticket.request.get("location"), Some("Berlin"));
    assert_eq!(controller.filters().query, "rust");
    assert_eq!(controller.filters().filters.location.as_deref(), Some("Berlin"));
    assert_eq!(store.current(), "q=rust&location=Berlin");
}

#[test]
fn search_text_is_trimmed_before_commit() {
    let (mut controller, store) = mounted("");
    controller.search("  rust  ", None, ms(0));
    controller.poll_search(ms(300)).unwrap().expect("changed");
    assert_eq!(controller.filters().query, "rust");
    assert_eq!(store.current(), "q=rust");

    controller.search("rust ", None, ms(1_000));
    assert!(controller.poll_search(ms(1_300)).unwrap().is_none());
}

#[test]
fn reset_restores_defaults_but_keeps_page_size() {
    let store = MemoryUrlStore::new("");
    let config = ControllerConfig { page_size: 25, ..Default::default() };
    let mut controller = JobController::new(config, store.clone());
    controller.update_filters(|s| s.query = "rust".to_string()).unwrap();
    controller.toggle_filter(JobFilterField::Skill, "tokio").unwrap();
    controller.update_filters(|s| s.filters.salary = NumericRange::new(Some(50_000), None)).unwrap();
    controller.change_sort(JobSortKey::Deadline, SortDirection::Ascending).unwrap();
    controller.go_to_page(2).unwrap();
    controller.search("pending", None, ms(0));

    let ticket = controller.reset_filters();
    assert_eq!(controller.filters(), &FilterState::<JobFilters>::with_page_size(25));
    assert_eq!(controller.url_query(), "");
    assert_eq!(store.current(), "");
    assert!(!controller.has_active_filters());
    assert!(!controller.is_search_pending());
    assert_eq!(ticket.request.get("limit"), Some("25"));
}

#[test]
fn failed_fetch_keeps_last_good_results() {
    let (mut controller, _) = mounted("");
    let pagination_before = *controller.pagination().expect("metadata");

    let ticket = controller.update_filters(|s| s.query = "rust".to_string()).unwrap().unwrap();
    let outcome = controller.complete(ticket.seq, Err(FetchError::Network("connection reset".to_string())));

    assert_eq!(outcome, Completion::Failed);
    assert!(!controller.is_loading());
    assert_eq!(controller.phase(), FetchPhase::Failed);
    assert!(!controller.error().expect("error message").is_empty());
    assert_eq!(ids(&controller), vec!["j1", "j2"]);
    assert_eq!(controller.pagination(), Some(&pagination_before));

    let retry = controller.refresh();
    assert_eq!(controller.phase(), FetchPhase::Loading);
    controller.complete(retry.seq, Ok(page(&["r1"], 1, 1, 1)));
    assert_eq!(controller.error(), None);
    assert_eq!(ids(&controller), vec!["r1"]);
}

#[test]
fn invalid_input_is_rejected_before_dispatch() {
    let (mut controller, store) = mounted("");
    let writes_before = store.writes().len();

    let err = controller
        .update_filters(|s| s.filters.salary = NumericRange::new(Some(9), Some(1)))
        .expect_err("inverted range");
    assert_eq!(err, FilterError::InvalidRange { field: "salary", min: 9, max: 1 });
    assert_eq!(
        controller.change_sort_by_name("popularity", "desc"),
        Err(FilterError::UnknownSortKey("popularity".to_string()))
    );
    assert_eq!(
        controller.change_sort_by_name("title", "up"),
        Err(FilterError::UnknownSortDirection("up".to_string()))
    );
    assert_eq!(controller.go_to_page(0), Err(FilterError::InvalidPage(0)));

    assert!(controller.filters().filters.salary.is_unbounded());
    assert_eq!(store.writes().len(), writes_before);
    assert!(!controller.is_loading());

    let ticket = controller.change_sort_by_name("title", "asc").unwrap().expect("changed");
    assert_eq!(ticket.request.get("sortBy"), Some("title"));
    assert_eq!(ticket.request.get("sortOrder"), Some("asc"));
}

#[test]
fn selection_is_independent_of_fetching() {
    let (mut controller, _) = mounted("");
    controller.select_item(Some("missing".to_string()));
    assert_eq!(controller.selected_id(), Some("missing"));
    assert!(controller.selected_item().is_none());
    assert!(!controller.is_loading());

    controller.select_item(None);
    assert!(controller.select_next());
    assert_eq!(controller.selected_id(), Some("j1"));
    assert!(controller.select_next());
    assert_eq!(controller.selected_item().map(|item| item.title.as_str()), Some("Job j2"));
    assert!(!controller.select_next());
    assert!(controller.select_previous());
    assert_eq!(controller.selected_id(), Some("j1"));
    assert!(!controller.select_previous());
}

#[test]
fn disposed_controller_ignores_responses() {
    let (mut controller, _) = mounted("");
    let ticket = controller.update_filters(|s| s.query = "rust".to_string()).unwrap().unwrap();
    controller.dispose();
    assert_eq!(controller.complete(ticket.seq, Ok(page(&["late"], 1, 1, 1))), Completion::Disposed);
    assert_eq!(ids(&controller), vec!["j1", "j2"]);
}
